// API types module
// Response bodies for the quiz and achievements endpoints. Key
// spellings are the wire contract the client depends on.

use serde::Serialize;

use crate::model::DayEntry;

/// Confirmation plus the updated day, returned by solve/unsolve.
#[derive(Debug, Serialize)]
pub struct DayUpdateResponse {
    pub message: &'static str,
    #[serde(rename = "dayData")]
    pub day_data: DayEntry,
}

/// Confirmation for the numeric achievement setters. The value key is
/// `nbrSolved` on every one of them, streaks and failures included; a
/// quirk of the original wire format the client already parses.
#[derive(Debug, Serialize)]
pub struct CounterUpdateResponse {
    pub message: &'static str,
    #[serde(rename = "nbrSolved")]
    pub value: u64,
}

/// Date endpoint body.
#[derive(Debug, Serialize)]
pub struct DateResponse {
    pub date: String,
}
