//! The `csx:` location scheme resolver.

use super::{LocationResolver, ResourceDescriptor};
use crate::location::Location;
use tracing::trace;

const PREFIX: &str = "csx:";

/// Resolver for the `csx:` location scheme.
///
/// The scheme packs up to three pipe-delimited segments after the prefix:
///
/// ```text
/// "csx:" [uri (',' uri)*] ['|' profile (',' profile)*] ['|' label (',' label)*]
/// ```
///
/// The first segment names the config-server URIs, the second the profiles
/// to request, the third the labels. A missing profile segment falls back to
/// the active profiles supplied by the caller; a missing label segment means
/// no labels. A claimed location always resolves to exactly one
/// [`ResourceDescriptor`].
///
/// The parser is permissive: segments beyond the third are ignored, comma
/// elements are trimmed, and empty elements are dropped.
///
/// # Examples
///
/// ```rust
/// use csx_config::location::Location;
/// use csx_config::resolver::{CsxResolver, LocationResolver};
///
/// let resolver = CsxResolver::new();
/// let location = Location::new("csx:http://cfg1,http://cfg2|prod|v2");
///
/// let descriptor = resolver.resolve(&location, &[]).unwrap();
/// assert_eq!(descriptor.uris_string(), "http://cfg1,http://cfg2");
/// assert_eq!(descriptor.profiles_string(), "prod");
/// assert_eq!(descriptor.labels_string(), "v2");
/// ```
pub struct CsxResolver {
    priority: i32,
}

impl CsxResolver {
    /// Create a resolver with the default priority (200).
    pub fn new() -> Self {
        Self { priority: 200 }
    }

    /// Set the priority for this resolver.
    ///
    /// Higher priority resolvers are consulted first by the registry.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl Default for CsxResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationResolver for CsxResolver {
    fn is_resolvable(&self, location: &Location) -> bool {
        location.has_prefix(PREFIX)
    }

    fn resolve(
        &self,
        location: &Location,
        active_profiles: &[String],
    ) -> Option<ResourceDescriptor> {
        let value = location.non_prefixed(PREFIX)?;

        // Trailing empty segments count as absent, so "csx:uri|" and
        // "csx:uri" parse identically. Only the first three segments carry
        // meaning; extras are ignored.
        let mut segments: Vec<&str> = value.split('|').collect();
        while segments.last().is_some_and(|segment| segment.is_empty()) {
            segments.pop();
        }

        let uris = segments.first().map(|s| comma_list(s)).unwrap_or_default();

        let profiles = match segments.get(1) {
            Some(segment) => comma_list(segment),
            None => active_profiles.to_vec(),
        };

        let labels = segments.get(2).map(|s| comma_list(s)).unwrap_or_default();

        trace!(
            uris = uris.len(),
            profiles = profiles.len(),
            labels = labels.len(),
            "parsed csx location"
        );

        Some(ResourceDescriptor::of(uris, profiles, labels))
    }

    fn name(&self) -> String {
        format!("{}*", PREFIX)
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

/// Split a comma-delimited segment into its elements, trimming surrounding
/// whitespace and dropping empty elements.
fn comma_list(segment: &str) -> Vec<String> {
    segment
        .split(',')
        .map(str::trim)
        .filter(|element| !element.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_is_resolvable() {
        let resolver = CsxResolver::new();
        assert!(resolver.is_resolvable(&Location::new("csx:http://cfg1")));
        assert!(resolver.is_resolvable(&Location::new("csx:")));
        assert!(!resolver.is_resolvable(&Location::new("file:config.yaml")));
        assert!(!resolver.is_resolvable(&Location::new("http://cfg1")));
    }

    #[test]
    fn test_unclaimed_location_resolves_to_none() {
        let resolver = CsxResolver::new();
        assert!(
            resolver
                .resolve(&Location::new("file:config.yaml"), &[])
                .is_none()
        );
    }

    #[test]
    fn test_uris_only() {
        let resolver = CsxResolver::new();
        let active = strings(&["default"]);

        let descriptor = resolver
            .resolve(&Location::new("csx:http://cfg1,http://cfg2"), &active)
            .unwrap();

        assert_eq!(descriptor.uris(), strings(&["http://cfg1", "http://cfg2"]));
        assert_eq!(descriptor.profiles(), active);
        assert!(descriptor.labels().is_empty());
    }

    #[test]
    fn test_all_three_segments() {
        let resolver = CsxResolver::new();

        let descriptor = resolver
            .resolve(&Location::new("csx:http://cfg1|prod|v2"), &strings(&["default"]))
            .unwrap();

        assert_eq!(descriptor.uris(), strings(&["http://cfg1"]));
        assert_eq!(descriptor.profiles(), strings(&["prod"]));
        assert_eq!(descriptor.labels(), strings(&["v2"]));
    }

    #[test]
    fn test_empty_location_uses_active_profiles() {
        let resolver = CsxResolver::new();
        let active = strings(&["dev", "local"]);

        let descriptor = resolver.resolve(&Location::new("csx:"), &active).unwrap();

        assert!(descriptor.uris().is_empty());
        assert_eq!(descriptor.profiles(), active);
        assert!(descriptor.labels().is_empty());
    }

    #[test]
    fn test_explicit_profile_segment_overrides_active() {
        let resolver = CsxResolver::new();

        let descriptor = resolver
            .resolve(&Location::new("csx:http://cfg1|qa"), &strings(&["default"]))
            .unwrap();

        assert_eq!(descriptor.profiles(), strings(&["qa"]));
    }

    #[test]
    fn test_trailing_empty_segment_counts_as_absent() {
        let resolver = CsxResolver::new();
        let active = strings(&["default"]);

        let descriptor = resolver
            .resolve(&Location::new("csx:http://cfg1|"), &active)
            .unwrap();

        assert_eq!(descriptor.profiles(), active);
    }

    #[test]
    fn test_empty_middle_segment_yields_no_profiles() {
        // "csx:uri||v2" has a present-but-empty profile segment, which is
        // not the same as an absent one: the active profiles do not apply.
        let resolver = CsxResolver::new();

        let descriptor = resolver
            .resolve(&Location::new("csx:http://cfg1||v2"), &strings(&["default"]))
            .unwrap();

        assert!(descriptor.profiles().is_empty());
        assert_eq!(descriptor.labels(), strings(&["v2"]));
    }

    #[test]
    fn test_elements_trimmed_and_empties_dropped() {
        let resolver = CsxResolver::new();

        let descriptor = resolver
            .resolve(
                &Location::new("csx: http://cfg1 , ,http://cfg2 | prod ,, qa "),
                &[],
            )
            .unwrap();

        assert_eq!(descriptor.uris(), strings(&["http://cfg1", "http://cfg2"]));
        assert_eq!(descriptor.profiles(), strings(&["prod", "qa"]));
    }

    #[test]
    fn test_segments_beyond_third_are_ignored() {
        let resolver = CsxResolver::new();

        let descriptor = resolver
            .resolve(&Location::new("csx:http://cfg1|prod|v2|extra|more"), &[])
            .unwrap();

        assert_eq!(descriptor.uris(), strings(&["http://cfg1"]));
        assert_eq!(descriptor.profiles(), strings(&["prod"]));
        assert_eq!(descriptor.labels(), strings(&["v2"]));
    }

    #[test]
    fn test_priority() {
        assert_eq!(CsxResolver::new().priority(), 200);
        assert_eq!(CsxResolver::new().with_priority(50).priority(), 50);
    }

    #[test]
    fn test_comma_list() {
        assert_eq!(comma_list(""), Vec::<String>::new());
        assert_eq!(comma_list(" , ,"), Vec::<String>::new());
        assert_eq!(comma_list("a, b ,c"), strings(&["a", "b", "c"]));
    }
}
