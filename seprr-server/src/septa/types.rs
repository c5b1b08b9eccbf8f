//! SEPTA NextToArrive response DTOs.
//!
//! These types map directly to the hackathon API's JSON. Every value is
//! sent as a string, including booleans.

use serde::Deserialize;

/// Body returned by `NextToArrive/{from}/{to}/{count}`.
///
/// A successful call returns a JSON array. Invalid station names come back
/// as an object with an `error` message instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NextToArriveResponse {
    Trains(Vec<NextToArriveTrain>),
    Error { error: String },
}

/// One upcoming trip between two stations.
///
/// Connecting trips also carry `term_*` and `Connection` fields for the
/// second leg; only the originating leg is used here.
#[derive(Debug, Clone, Deserialize)]
pub struct NextToArriveTrain {
    /// Train number at the origin.
    pub orig_train: String,

    /// Line name (e.g., "Paoli/Thorndale").
    pub orig_line: String,

    /// Scheduled departure from the origin (e.g., " 1:22PM").
    pub orig_departure_time: String,

    /// Scheduled arrival of the originating train.
    #[serde(default)]
    pub orig_arrival_time: Option<String>,

    /// "On time" or a delay like "3 mins".
    pub orig_delay: String,

    /// "true" when no connection is needed.
    #[serde(default)]
    pub isdirect: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_train_array() {
        let json = r#"[{
            "orig_train": "562",
            "orig_line": "Paoli/Thorndale",
            "orig_departure_time": " 1:22PM",
            "orig_arrival_time": " 1:45PM",
            "orig_delay": "3 mins",
            "term_train": null,
            "term_line": null,
            "isdirect": "true"
        }]"#;

        let response: NextToArriveResponse = serde_json::from_str(json).unwrap();
        let NextToArriveResponse::Trains(trains) = response else {
            panic!("expected trains");
        };
        assert_eq!(trains.len(), 1);
        assert_eq!(trains[0].orig_train, "562");
        assert_eq!(trains[0].orig_line, "Paoli/Thorndale");
        assert_eq!(trains[0].orig_arrival_time.as_deref(), Some(" 1:45PM"));
        assert_eq!(trains[0].isdirect.as_deref(), Some("true"));
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let json = r#"[{
            "orig_train": "9",
            "orig_line": "Airport",
            "orig_departure_time": "5:00AM",
            "orig_delay": "On time"
        }]"#;

        let response: NextToArriveResponse = serde_json::from_str(json).unwrap();
        let NextToArriveResponse::Trains(trains) = response else {
            panic!("expected trains");
        };
        assert!(trains[0].orig_arrival_time.is_none());
        assert!(trains[0].isdirect.is_none());
    }

    #[test]
    fn parses_error_object() {
        let json = r#"{"error": "Invalid origin station"}"#;
        let response: NextToArriveResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            response,
            NextToArriveResponse::Error { error } if error == "Invalid origin station"
        ));
    }

    #[test]
    fn empty_array_is_no_trains() {
        let response: NextToArriveResponse = serde_json::from_str("[]").unwrap();
        assert!(matches!(response, NextToArriveResponse::Trains(t) if t.is_empty()));
    }

    #[test]
    fn rejects_missing_required_field() {
        let json = r#"[{"orig_train": "562"}]"#;
        assert!(serde_json::from_str::<NextToArriveResponse>(json).is_err());
    }
}
