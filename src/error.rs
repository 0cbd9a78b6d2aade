//! Error types for csx-config.

/// Result type alias for csx-config operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving locations or deriving bootstrap
/// properties.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The name of the local host could not be determined.
    ///
    /// This is a startup-time failure, not a degraded mode: the caller must
    /// abort the load that requested it. Nothing is retried.
    #[error("Failed to retrieve the name of the local host: {reason}")]
    HostResolution {
        /// Description of the underlying OS failure.
        reason: String,
    },

    /// A mandatory location could not be resolved by any registered resolver.
    #[error("Location not found: {location}")]
    LocationNotFound {
        /// The location string as given by the caller.
        location: String,
    },
}

impl Error {
    /// Create a host resolution error from any underlying failure.
    pub(crate) fn host_resolution(reason: impl Into<String>) -> Self {
        Self::HostResolution {
            reason: reason.into(),
        }
    }
}
