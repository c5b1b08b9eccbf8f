//! Slash-command parsing.
//!
//! Commands look like `rr SOURCE-DEST`: a two-character trigger followed by
//! a route fragment naming the origin and destination stations.

use crate::stations::FALLBACK_STATION;

/// Trigger that activates a station lookup, compared case-insensitively.
pub const TRIGGER: &str = "rr";

/// Route used when the trigger is given without one.
///
/// Splits into an empty origin and the fallback station as destination.
pub const DEFAULT_ROUTE: &str = "-30th Street Station";

/// Origin and destination fragments as typed, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFragmentPair {
    /// Origin station fragment.
    pub from_fragment: String,

    /// Destination station fragment.
    pub to_fragment: String,
}

impl CommandFragmentPair {
    /// Both ends set to the fallback station.
    pub fn fallback() -> Self {
        Self {
            from_fragment: FALLBACK_STATION.to_string(),
            to_fragment: FALLBACK_STATION.to_string(),
        }
    }

    /// Split a route fragment on its first `-`.
    ///
    /// Blank or missing parts become the fallback station's name.
    pub fn from_route(route: &str) -> Self {
        let mut parts = route.splitn(2, '-');
        let mut next_part = || {
            parts
                .next()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .unwrap_or(FALLBACK_STATION)
                .to_string()
        };

        let from_fragment = next_part();
        let to_fragment = next_part();

        Self {
            from_fragment,
            to_fragment,
        }
    }
}

/// Result of parsing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Whether the `rr` trigger was present. If not, no lookup should be made.
    pub is_rail_lookup: bool,

    /// Station fragments to resolve.
    pub fragments: CommandFragmentPair,
}

/// Parse raw command text.
///
/// # Examples
///
/// ```
/// use seprr_server::command::parse;
///
/// let cmd = parse("rr dev-30");
/// assert!(cmd.is_rail_lookup);
/// assert_eq!(cmd.fragments.from_fragment, "dev");
/// assert_eq!(cmd.fragments.to_fragment, "30");
/// ```
pub fn parse(text: &str) -> ParsedCommand {
    let text = text.trim();

    // Split after the second character, not byte
    let split = text.char_indices().nth(2).map_or(text.len(), |(i, _)| i);
    let (trigger, rest) = text.split_at(split);

    if !trigger.eq_ignore_ascii_case(TRIGGER) {
        return ParsedCommand {
            is_rail_lookup: false,
            fragments: CommandFragmentPair::fallback(),
        };
    }

    let route = match rest.trim() {
        "" => DEFAULT_ROUTE,
        route => route,
    };

    ParsedCommand {
        is_rail_lookup: true,
        fragments: CommandFragmentPair::from_route(route),
    }
}
