//! Conversion from SEPTA DTOs to domain types.

use crate::domain::{ArrivalRecord, Delay};

use super::types::NextToArriveTrain;

/// Convert a NextToArrive train list to arrival records, one per row, in
/// provider order.
pub fn convert_trains(trains: &[NextToArriveTrain]) -> Vec<ArrivalRecord> {
    trains.iter().map(convert_train).collect()
}

/// Convert a single train. Fields are carried as sent, blanks included.
pub fn convert_train(train: &NextToArriveTrain) -> ArrivalRecord {
    ArrivalRecord {
        train_number: train.orig_train.clone(),
        departure_time: train.orig_departure_time.clone(),
        arrival_time: train.orig_arrival_time.clone().unwrap_or_default(),
        line: train.orig_line.clone(),
        delay: Delay::from_provider(train.orig_delay.as_str()),
        is_direct: train
            .isdirect
            .as_deref()
            .is_some_and(|d| d.eq_ignore_ascii_case("true")),
    }
}
