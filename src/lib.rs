//! # csx-config
//!
//! Config-server bootstrap: `csx:` location resolution and startup property
//! derivation.
//!
//! ## Overview
//!
//! `csx-config` extends a configuration-loading host with a custom location
//! scheme. A `csx:` location names the remote config servers to contact and,
//! optionally, the profiles and labels to request from them:
//!
//! ```text
//! "csx:" [uri (',' uri)*] ['|' profile (',' profile)*] ['|' label (',' label)*]
//! ```
//!
//! Resolution turns such a location into a
//! [`ResourceDescriptor`](resolver::ResourceDescriptor); property loading
//! turns a descriptor into a named
//! [`PropertySource`](bootstrap::PropertySource) of bootstrap
//! properties (`host.name`, the import locator, and deferred fallback
//! expressions for the config name and profile) for the host environment to
//! merge before startup. Fetching the remote configuration itself is the
//! host's business, not this crate's.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use csx_config::prelude::*;
//!
//! # fn example() -> csx_config::error::Result<()> {
//! let mut registry = ResolverRegistry::new();
//! registry.register(Box::new(CsxResolver::new()));
//!
//! let location = Location::new("csx:http://cfg1,http://cfg2|prod|v2");
//! let active_profiles = vec!["default".to_string()];
//!
//! if let Some(descriptor) = registry.resolve(&location, &active_profiles)? {
//!     let properties = PropertyLoader::new().load(&descriptor)?;
//!     for (key, value) in properties.iter() {
//!         println!("{key} = {value}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Derived properties
//!
//! | key | value |
//! |---|---|
//! | `host.name` | resolved local host name |
//! | `config.import` | `configserver:` + the descriptor's URIs |
//! | `configserver.name` | `${service.name:${application.name:${config.name:application}}}` |
//! | `configserver.profile` | `${environment.name:<profiles>}`, or `${environment.name:${host.name}}` when no profile applies |
//! | `configserver.label` | the descriptor's labels, only when supplied |
//!
//! The `${key:default}` expressions are deferred: the host environment
//! resolves them against its own settings after merging. Setting an
//! `environment.name` property therefore overrides the profile sent
//! upstream without touching the location string.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod bootstrap;
pub mod error;
pub mod location;
pub mod resolver;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::bootstrap::{PropertyLoader, PropertySource, build_properties};
    pub use crate::error::{Error, Result};
    pub use crate::location::Location;
    pub use crate::resolver::{CsxResolver, LocationResolver, ResolverRegistry, ResourceDescriptor};
}
