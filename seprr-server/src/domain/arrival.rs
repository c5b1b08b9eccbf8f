//! Upcoming train arrivals between two stations.

use std::fmt;

/// Delay status as reported by the provider.
///
/// The provider sends free text: either "On time" (in some casing) or a
/// delay amount such as "3 mins". The text is kept as sent for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delay {
    /// Running to schedule.
    OnTime(String),
    /// Running late by the given amount.
    Late(String),
}

impl Delay {
    /// Classify the provider's delay text.
    pub fn from_provider(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.to_lowercase() == "on time" {
            Delay::OnTime(text)
        } else {
            Delay::Late(text)
        }
    }

    /// Returns true if the train is running to schedule.
    pub fn is_on_time(&self) -> bool {
        matches!(self, Delay::OnTime(_))
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delay::OnTime(text) => f.write_str(text),
            Delay::Late(text) => write!(f, "delayed by {text}"),
        }
    }
}

/// One upcoming train between the requested stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalRecord {
    /// Train number at the origin (e.g., "562").
    pub train_number: String,

    /// Scheduled departure from the origin, as the provider formats it (e.g., " 1:22PM").
    pub departure_time: String,

    /// Scheduled arrival at the destination.
    pub arrival_time: String,

    /// Line name without the "Line" suffix (e.g., "Paoli/Thorndale").
    pub line: String,

    /// Current delay status.
    pub delay: Delay,

    /// Whether the trip needs no connection.
    pub is_direct: bool,
}
