//! Example demonstrating the full bootstrap flow.
//!
//! Resolves a `csx:` location into a resource descriptor, derives the
//! bootstrap properties for this machine, and merges them into a host-side
//! `config::Config` the way a configuration framework would before startup.

use csx_config::bootstrap::SOURCE_NAME;
use csx_config::prelude::*;

fn main() -> Result<()> {
    println!("=== csx: Bootstrap Example ===\n");

    // Example 1: Resolve a location string
    println!("Example 1: Location resolution");
    println!("------------------------------");

    let mut registry = ResolverRegistry::new();
    registry.register(Box::new(CsxResolver::new()));

    let location = Location::new("csx:http://cfg1,http://cfg2|prod|v2");
    let active_profiles = vec!["default".to_string()];

    let descriptor = registry
        .resolve(&location, &active_profiles)?
        .expect("the csx resolver claims csx: locations");

    println!("✓ Resolved {location}");
    println!("  URIs:     {}", descriptor.uris_string());
    println!("  Profiles: {}", descriptor.profiles_string());
    println!("  Labels:   {}", descriptor.labels_string());
    println!();

    // Example 2: Derive the bootstrap properties
    println!("Example 2: Bootstrap properties");
    println!("-------------------------------");

    let properties = PropertyLoader::new().load(&descriptor)?;

    println!("✓ Property source '{SOURCE_NAME}'");
    for (key, value) in properties.iter() {
        println!("  {key} = {value}");
    }
    println!();

    // Example 3: Merge into the host environment
    println!("Example 3: Host-side merge");
    println!("--------------------------");

    let mut builder = config::Config::builder();
    for (key, value) in properties.to_config_values() {
        builder = builder
            .set_override(key, value)
            .expect("string overrides always merge");
    }
    let merged = builder.build().expect("override-only config builds");

    println!("✓ Merged into config::Config");
    println!(
        "  config.import = {}",
        merged
            .get_string("config.import")
            .expect("import locator was merged")
    );

    Ok(())
}
