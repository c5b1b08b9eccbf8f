//! Canonical station names.

use std::fmt;

/// A canonical SEPTA Regional Rail station name.
///
/// This is the exact display string the NextToArrive API expects in its
/// path, e.g. `"30th Street Station"` or `"Airport Terminal C-D"`. Values
/// are only handed out by the station catalog, so any `StationName` is one
/// of the catalog's names by construction.
///
/// # Examples
///
/// ```
/// use seprr_server::stations::StationCatalog;
///
/// let devon = StationCatalog::septa().resolve("dev");
/// assert_eq!(devon.as_str(), "Devon");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationName(&'static str);

impl StationName {
    /// Wrap a name taken from a station table.
    pub(crate) const fn from_table(name: &'static str) -> Self {
        StationName(name)
    }

    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for StationName {
    fn as_ref(&self) -> &str {
        self.0
    }
}
