//! A single station-name matching rule.

/// Maps typed fragments onto one canonical station name.
///
/// A rule matches a normalized fragment when the fragment equals one of
/// its exact literals or starts with one of its prefixes. Literals and
/// prefixes are compared against the normalized form, so they are written
/// in lowercase without spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationAlias {
    /// Canonical display name this rule resolves to.
    pub name: &'static str,

    /// Fragments that must match exactly.
    pub exact: &'static [&'static str],

    /// Fragments that match by prefix.
    pub prefixes: &'static [&'static str],
}

impl StationAlias {
    /// Returns true if this rule accepts the (already normalized) fragment.
    pub fn matches(&self, normalized: &str) -> bool {
        self.exact.contains(&normalized)
            || self.prefixes.iter().any(|p| normalized.starts_with(p))
    }
}

/// Shorthand for declaring rules in the station table.
pub(crate) const fn alias(
    name: &'static str,
    exact: &'static [&'static str],
    prefixes: &'static [&'static str],
) -> StationAlias {
    StationAlias {
        name,
        exact,
        prefixes,
    }
}

/// Normalize a typed fragment for matching.
///
/// Removes every space character and lowercases the rest. Other
/// punctuation is kept, so `"Mt. Airy"` becomes `"mt.airy"`.
pub fn normalize(fragment: &str) -> String {
    fragment.replace(' ', "").to_lowercase()
}
