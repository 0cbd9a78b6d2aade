//! The named property mapping handed to the host configuration environment.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Key under which the resolved local host name is published.
pub const HOST_NAME: &str = "host.name";

/// Key carrying the remote-config import locator (`configserver:` + URIs).
pub const CONFIG_IMPORT: &str = "config.import";

/// Key carrying the layered-fallback expression for the logical config name.
pub const CONFIG_NAME: &str = "configserver.name";

/// Key carrying the layered-fallback expression for the profile to request.
pub const CONFIG_PROFILE: &str = "configserver.profile";

/// Key carrying the labels to request. Present only when labels were
/// supplied in the location.
pub const CONFIG_LABEL: &str = "configserver.label";

/// A named mapping of string properties contributed to the host
/// configuration environment.
///
/// The name identifies the contributing source to the host framework;
/// iteration order is stable (sorted by key) so test expectations stay
/// reproducible. The mapping is the sole artifact crossing the boundary to
/// the host: convert it with [`to_config_values`](Self::to_config_values)
/// to feed it into a `config::Config` builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertySource {
    name: String,
    properties: BTreeMap<String, String>,
}

impl PropertySource {
    /// Create an empty property source with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    /// The name of this source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set a property, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Get a property value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Whether the mapping carries the given key.
    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Iterate the properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of properties in the mapping.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Render the mapping as `config::Value`s for the host's config builder.
    pub fn to_config_values(&self) -> HashMap<String, config::Value> {
        self.properties
            .iter()
            .map(|(key, value)| {
                (
                    key.clone(),
                    config::Value::new(
                        Some(&self.name),
                        config::ValueKind::String(value.clone()),
                    ),
                )
            })
            .collect()
    }
}
