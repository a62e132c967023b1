use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::seat::SeatId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theatre {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// One row of the seat layout: a row label, how many seats it holds and the
/// ticket price for that row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatRow {
    pub row: String,
    pub seats: u32,
    pub price: i64,
}

/// A single showtime with its seat layout and current availability,
/// fetched fresh per page load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub show_id: String,
    pub movie_id: String,
    pub theatre: Theatre,
    pub date: NaiveDate,
    pub time: String,
    pub seat_layout: Vec<SeatRow>,
    #[serde(default)]
    pub price_map: BTreeMap<String, i64>,
    #[serde(default)]
    pub booked_seats: Vec<SeatId>,
    #[serde(default)]
    pub locked_seats: Vec<SeatId>,
}

impl Show {
    pub fn price_for(&self, row: &str) -> Option<i64> {
        self.price_map.get(row).copied().or_else(|| {
            self.seat_layout
                .iter()
                .find(|r| r.row == row)
                .map(|r| r.price)
        })
    }
}

/// Booked/locked sets alone, for availability refreshes between page loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatAvailability {
    #[serde(default)]
    pub booked_seats: Vec<SeatId>,
    #[serde(default)]
    pub locked_seats: Vec<SeatId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowTime {
    pub show_id: String,
    pub time: String,
}

/// Showtimes grouped by theatre, as listed on the show browser page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TheatreShows {
    pub theatre: Theatre,
    pub shows: Vec<ShowTime>,
}
