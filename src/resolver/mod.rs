//! Location resolution: the resolver trait, the `csx:` resolver and the
//! priority-ordered registry.

mod csx;
mod descriptor;
mod registry;

pub use csx::CsxResolver;
pub use descriptor::ResourceDescriptor;
pub use registry::ResolverRegistry;

use crate::location::Location;

/// Trait for location resolvers.
///
/// Implement this trait to teach the bootstrap phase a new location scheme.
/// A resolver claims a location via [`is_resolvable`](Self::is_resolvable)
/// and turns a claimed location into exactly one [`ResourceDescriptor`].
pub trait LocationResolver: Send + Sync {
    /// Whether this resolver claims the given location.
    fn is_resolvable(&self, location: &Location) -> bool;

    /// Resolve a claimed location into a resource descriptor.
    ///
    /// Returns `None` for locations this resolver does not claim. Resolution
    /// of a claimed location is infallible and yields a single descriptor.
    fn resolve(
        &self,
        location: &Location,
        active_profiles: &[String],
    ) -> Option<ResourceDescriptor>;

    /// Get a human-readable name for this resolver (for logging/debugging).
    fn name(&self) -> String;

    /// Get the priority of this resolver (higher = consulted first).
    fn priority(&self) -> i32 {
        0
    }
}
