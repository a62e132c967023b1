use serde::{Deserialize, Serialize};
use std::fmt;

/// A seat identifier in row-plus-number form, e.g. "C7".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(pub String);

impl SeatId {
    pub fn new(row: &str, number: u32) -> Self {
        Self(format!("{}{}", row, number))
    }

    pub fn row(&self) -> &str {
        self.0.trim_end_matches(|c: char| c.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeatId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Seat status is derived from the booked/locked/selected sets, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    Available,
    Selected,
    Booked,
    Locked,
}
