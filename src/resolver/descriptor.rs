//! The resource descriptor produced by location resolution.

use serde::Serialize;

/// An immutable description of a remote config-server resource: the server
/// URIs to contact plus the profiles and labels to request from it.
///
/// Descriptors are value objects. Equality and hashing are structural and
/// order-sensitive over the three sequences, so the host framework may use a
/// descriptor as a dedup key when the same location is resolved more than
/// once.
///
/// # Examples
///
/// ```rust
/// use csx_config::resolver::ResourceDescriptor;
///
/// let descriptor = ResourceDescriptor::of(
///     vec!["http://cfg1".into(), "http://cfg2".into()],
///     vec!["prod".into()],
///     vec![],
/// );
/// assert_eq!(descriptor.uris_string(), "http://cfg1,http://cfg2");
/// assert_eq!(descriptor.profiles_string(), "prod");
/// assert!(descriptor.labels().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceDescriptor {
    uris: Vec<String>,
    profiles: Vec<String>,
    labels: Vec<String>,
}

impl ResourceDescriptor {
    /// Create a descriptor from the three resolved sequences.
    pub fn of(uris: Vec<String>, profiles: Vec<String>, labels: Vec<String>) -> Self {
        Self {
            uris,
            profiles,
            labels,
        }
    }

    /// The config-server URIs, in resolution order. May be empty.
    pub fn uris(&self) -> &[String] {
        &self.uris
    }

    /// The profiles to request, in resolution order. May be empty.
    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    /// The labels to request, in resolution order. May be empty.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The URIs rendered as a comma-delimited string.
    pub fn uris_string(&self) -> String {
        self.uris.join(",")
    }

    /// The profiles rendered as a comma-delimited string.
    pub fn profiles_string(&self) -> String {
        self.profiles.join(",")
    }

    /// The labels rendered as a comma-delimited string.
    pub fn labels_string(&self) -> String {
        self.labels.join(",")
    }
}
