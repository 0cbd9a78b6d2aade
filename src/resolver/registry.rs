//! Priority-ordered dispatch over registered location resolvers.

use super::{LocationResolver, ResourceDescriptor};
use crate::error::{Error, Result};
use crate::location::Location;
use tracing::{debug, trace};

/// Dispatches locations to registered resolvers.
///
/// Resolvers are consulted in descending priority order; the first resolver
/// that claims a location wins. An unclaimed location is not an error unless
/// the caller marked it mandatory, in which case it surfaces as
/// [`Error::LocationNotFound`].
///
/// # Examples
///
/// ```rust
/// use csx_config::location::Location;
/// use csx_config::resolver::{CsxResolver, ResolverRegistry};
///
/// let mut registry = ResolverRegistry::new();
/// registry.register(Box::new(CsxResolver::new()));
///
/// let location = Location::new("csx:http://cfg1|prod");
/// let descriptor = registry.resolve(&location, &[]).unwrap().unwrap();
/// assert_eq!(descriptor.profiles_string(), "prod");
///
/// // Unclaimed optional locations are skipped, not failed.
/// let other = Location::new("file:config.yaml").optional();
/// assert!(registry.resolve(&other, &[]).unwrap().is_none());
/// ```
pub struct ResolverRegistry {
    resolvers: Vec<Box<dyn LocationResolver>>,
}

impl ResolverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    /// Register a resolver.
    ///
    /// The resolver's [`priority`](LocationResolver::priority) decides its
    /// place in the consultation order.
    pub fn register(&mut self, resolver: Box<dyn LocationResolver>) {
        self.resolvers.push(resolver);
    }

    /// Resolve a location against the registered resolvers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LocationNotFound`] when no resolver claims a
    /// mandatory location.
    pub fn resolve(
        &self,
        location: &Location,
        active_profiles: &[String],
    ) -> Result<Option<ResourceDescriptor>> {
        let mut sorted: Vec<_> = self.resolvers.iter().collect();
        sorted.sort_by_key(|resolver| std::cmp::Reverse(resolver.priority()));

        for resolver in sorted {
            if !resolver.is_resolvable(location) {
                trace!(resolver = %resolver.name(), location = %location, "location not claimed");
                continue;
            }

            if let Some(descriptor) = resolver.resolve(location, active_profiles) {
                debug!(resolver = %resolver.name(), location = %location, "location resolved");
                return Ok(Some(descriptor));
            }
        }

        if location.is_optional() {
            Ok(None)
        } else {
            Err(Error::LocationNotFound {
                location: location.as_str().to_string(),
            })
        }
    }

    /// Get the registered resolver names in consultation order.
    pub fn resolver_names(&self) -> Vec<String> {
        let mut sorted: Vec<_> = self.resolvers.iter().collect();
        sorted.sort_by_key(|resolver| std::cmp::Reverse(resolver.priority()));
        sorted.iter().map(|resolver| resolver.name()).collect()
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::new()
    }
}
