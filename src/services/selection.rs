use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::models::show::{SeatAvailability, SeatRow};
use crate::models::{SeatId, SeatStatus, Show};

/// Hard cap on seats per booking, enforced client-side.
pub const MAX_SEATS_PER_BOOKING: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
    SeatUnavailable,
    LimitReached,
}

/// Client-side seat picking state for one show. Booked and locked seats
/// come from the server; the selection is local until confirmation.
#[derive(Debug, Clone)]
pub struct SeatSelection {
    layout: Vec<SeatRow>,
    price_map: BTreeMap<String, i64>,
    booked: HashSet<SeatId>,
    locked: HashSet<SeatId>,
    selected: BTreeSet<SeatId>,
}

impl SeatSelection {
    pub fn from_show(show: &Show) -> Self {
        let mut price_map = show.price_map.clone();
        for row in &show.seat_layout {
            price_map.entry(row.row.clone()).or_insert(row.price);
        }

        Self {
            layout: show.seat_layout.clone(),
            price_map,
            booked: show.booked_seats.iter().cloned().collect(),
            locked: show.locked_seats.iter().cloned().collect(),
            selected: BTreeSet::new(),
        }
    }

    /// Toggles a seat in or out of the selection. Seats in the booked or
    /// locked sets are rejected, as is an 11th selection.
    pub fn toggle(&mut self, seat: &SeatId) -> Toggle {
        if self.selected.remove(seat) {
            return Toggle::Deselected;
        }
        if self.booked.contains(seat) || self.locked.contains(seat) {
            return Toggle::SeatUnavailable;
        }
        if self.selected.len() >= MAX_SEATS_PER_BOOKING {
            return Toggle::LimitReached;
        }
        self.selected.insert(seat.clone());
        Toggle::Selected
    }

    pub fn status(&self, seat: &SeatId) -> SeatStatus {
        if self.booked.contains(seat) {
            SeatStatus::Booked
        } else if self.locked.contains(seat) {
            SeatStatus::Locked
        } else if self.selected.contains(seat) {
            SeatStatus::Selected
        } else {
            SeatStatus::Available
        }
    }

    pub fn selected(&self) -> Vec<SeatId> {
        self.selected.iter().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn rows(&self) -> &[SeatRow] {
        &self.layout
    }

    pub fn total_amount(&self) -> i64 {
        self.selected
            .iter()
            .map(|seat| self.price_map.get(seat.row()).copied().unwrap_or(0))
            .sum()
    }

    /// Replaces the availability sets and evicts any selected seat that
    /// became booked or locked in the meantime.
    pub fn refresh(&mut self, availability: SeatAvailability) {
        self.booked = availability.booked_seats.into_iter().collect();
        self.locked = availability.locked_seats.into_iter().collect();
        let booked = &self.booked;
        let locked = &self.locked;
        self.selected
            .retain(|seat| !booked.contains(seat) && !locked.contains(seat));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::show::Theatre;
    use proptest::prelude::*;

    fn show() -> Show {
        Show {
            show_id: "s1".to_string(),
            movie_id: "m1".to_string(),
            theatre: Theatre {
                id: "t1".to_string(),
                name: "Grand".to_string(),
                city: "Lyon".to_string(),
                address: None,
            },
            date: chrono::NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            time: "19:30".to_string(),
            seat_layout: vec![
                SeatRow {
                    row: "A".to_string(),
                    seats: 12,
                    price: 250,
                },
                SeatRow {
                    row: "B".to_string(),
                    seats: 12,
                    price: 180,
                },
            ],
            price_map: BTreeMap::new(),
            booked_seats: vec![SeatId::from("A1"), SeatId::from("A2")],
            locked_seats: vec![SeatId::from("B3")],
        }
    }

    #[test]
    fn cap_is_enforced_at_ten() {
        let mut selection = SeatSelection::from_show(&show());
        for n in 1..=10 {
            assert_eq!(selection.toggle(&SeatId::new("B", n)), Toggle::Selected);
        }
        assert_eq!(selection.toggle(&SeatId::new("A", 5)), Toggle::LimitReached);
        assert_eq!(selection.count(), 10);
    }

    #[test]
    fn booked_and_locked_seats_cannot_be_selected() {
        let mut selection = SeatSelection::from_show(&show());
        assert_eq!(selection.toggle(&SeatId::from("A1")), Toggle::SeatUnavailable);
        assert_eq!(selection.toggle(&SeatId::from("B3")), Toggle::SeatUnavailable);
        assert_eq!(selection.count(), 0);
        assert_eq!(selection.status(&SeatId::from("A1")), SeatStatus::Booked);
        assert_eq!(selection.status(&SeatId::from("B3")), SeatStatus::Locked);
    }

    #[test]
    fn toggle_twice_deselects() {
        let mut selection = SeatSelection::from_show(&show());
        let seat = SeatId::from("A7");
        assert_eq!(selection.toggle(&seat), Toggle::Selected);
        assert_eq!(selection.toggle(&seat), Toggle::Deselected);
        assert!(selection.is_empty());
    }

    #[test]
    fn amount_sums_row_prices() {
        let mut selection = SeatSelection::from_show(&show());
        selection.toggle(&SeatId::from("A7"));
        selection.toggle(&SeatId::from("B7"));
        assert_eq!(selection.total_amount(), 430);
    }

    #[test]
    fn refresh_evicts_newly_unavailable_seats() {
        let mut selection = SeatSelection::from_show(&show());
        selection.toggle(&SeatId::from("A7"));
        selection.toggle(&SeatId::from("B7"));

        selection.refresh(SeatAvailability {
            booked_seats: vec![SeatId::from("A7")],
            locked_seats: vec![SeatId::from("B3")],
        });

        assert_eq!(selection.selected(), vec![SeatId::from("B7")]);
        assert_eq!(selection.status(&SeatId::from("A7")), SeatStatus::Booked);
    }

    proptest! {
        // Arbitrary toggle sequences never break the two invariants:
        // at most ten selected, and no overlap with booked/locked seats.
        #[test]
        fn invariants_hold_under_arbitrary_toggles(
            toggles in prop::collection::vec((0u32..4, 1u32..13), 0..60)
        ) {
            let show = show();
            let mut selection = SeatSelection::from_show(&show);
            let rows = ["A", "B", "C", "D"];

            for (row, number) in toggles {
                let seat = SeatId::new(rows[row as usize], number);
                selection.toggle(&seat);

                prop_assert!(selection.count() <= MAX_SEATS_PER_BOOKING);
                for picked in selection.selected() {
                    prop_assert_ne!(selection.status(&picked), SeatStatus::Booked);
                    prop_assert_ne!(selection.status(&picked), SeatStatus::Locked);
                }
            }
        }
    }
}
