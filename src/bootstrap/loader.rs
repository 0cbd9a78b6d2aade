//! Derivation of bootstrap properties from a resolved resource descriptor.

use super::host;
use super::properties::{
    CONFIG_IMPORT, CONFIG_LABEL, CONFIG_NAME, CONFIG_PROFILE, HOST_NAME, PropertySource,
};
use crate::error::Result;
use crate::resolver::ResourceDescriptor;
use tracing::debug;

/// Name under which the derived properties are contributed to the host
/// environment.
pub const SOURCE_NAME: &str = "csx.bootstrap";

const IMPORT_LOCATOR: &str = "configserver:";

const NAME_EXPRESSION: &str = "${service.name:${application.name:${config.name:application}}}";

/// Derives the bootstrap property source for resolved resources.
///
/// [`load`](Self::load) resolves the local host name and delegates to
/// [`build_properties`]; each invocation returns a fresh mapping, nothing is
/// cached.
///
/// # Examples
///
/// ```rust,no_run
/// use csx_config::bootstrap::PropertyLoader;
/// use csx_config::resolver::ResourceDescriptor;
///
/// # fn example() -> csx_config::error::Result<()> {
/// let descriptor = ResourceDescriptor::of(
///     vec!["http://cfg1".into()],
///     vec!["prod".into()],
///     vec![],
/// );
///
/// let properties = PropertyLoader::new().load(&descriptor)?;
/// assert_eq!(properties.get("config.import"), Some("configserver:http://cfg1"));
/// # Ok(())
/// # }
/// ```
pub struct PropertyLoader;

impl PropertyLoader {
    /// Create a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Derive the property source for the given descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HostResolution`](crate::error::Error::HostResolution)
    /// when the local host name cannot be determined. The failure is fatal
    /// for this load; nothing is retried.
    pub fn load(&self, descriptor: &ResourceDescriptor) -> Result<PropertySource> {
        let host_name = host::local_host_name()?;

        Ok(build_properties(descriptor, &host_name))
    }
}

impl Default for PropertyLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the bootstrap property mapping for a descriptor and host name.
///
/// The mapping carries:
/// - [`HOST_NAME`]: the given host name;
/// - [`CONFIG_IMPORT`]: `configserver:` followed by the descriptor's URIs;
/// - [`CONFIG_NAME`]: a deferred fallback expression over `service.name`,
///   `application.name` and `config.name`, defaulting to `application`;
/// - [`CONFIG_PROFILE`]: a deferred expression preferring an
///   `environment.name` override, falling back to the descriptor's profiles
///   or, when there are none, to the published host name;
/// - [`CONFIG_LABEL`]: the descriptor's labels, only when present.
///
/// The `${key:default}` expressions are emitted verbatim for the host
/// environment to resolve later; this function never resolves them.
pub fn build_properties(descriptor: &ResourceDescriptor, host_name: &str) -> PropertySource {
    let profiles = descriptor.profiles_string();
    let labels = descriptor.labels_string();

    let mut source = PropertySource::new(SOURCE_NAME);

    source.insert(HOST_NAME, host_name);
    source.insert(
        CONFIG_IMPORT,
        format!("{}{}", IMPORT_LOCATOR, descriptor.uris_string()),
    );
    source.insert(CONFIG_NAME, NAME_EXPRESSION);
    source.insert(
        CONFIG_PROFILE,
        if profiles.is_empty() {
            "${environment.name:${host.name}}".to_string()
        } else {
            format!("${{environment.name:{profiles}}}")
        },
    );
    if !labels.is_empty() {
        source.insert(CONFIG_LABEL, labels);
    }

    debug!(
        source = SOURCE_NAME,
        properties = source.len(),
        "derived bootstrap properties"
    );

    source
}
