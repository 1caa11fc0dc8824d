use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One numbered seat holding a participant name.
///
/// Serialized as the two-element array `[number, name]` to match the history
/// file wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, String)", into = "(u32, String)")]
pub struct Seat {
    pub number: u32,
    pub name: String,
}

impl From<(u32, String)> for Seat {
    fn from((number, name): (u32, String)) -> Self {
        Self { number, name }
    }
}

impl From<Seat> for (u32, String) {
    fn from(seat: Seat) -> Self {
        (seat.number, seat.name)
    }
}

/// An ordered seating assignment: seat numbers are the contiguous range `1..=N`.
///
/// Assignments are created by the assignment engine and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub seats: Vec<Seat>,
}

impl Assignment {
    /// Numbers a permuted name list `1..=N` in order.
    pub fn from_order<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let seats = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Seat {
                number: (i + 1) as u32,
                name: name.into(),
            })
            .collect();
        Self { seats }
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// The order-insensitive participant set. Duplicate names collapse here;
    /// this is the value the duplicate check compares.
    pub fn name_set(&self) -> BTreeSet<&str> {
        self.seats.iter().map(|s| s.name.as_str()).collect()
    }

    /// Seats sorted by seat number (the results-listing order).
    pub fn sorted_by_number(&self) -> Vec<&Seat> {
        let mut seats: Vec<&Seat> = self.seats.iter().collect();
        seats.sort_by_key(|s| s.number);
        seats
    }
}

/// One past draw as persisted in the history file:
/// `{"timestamp": "2024-03-01 09:30:00", "combinations": [[1, "Kim"], ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub timestamp: String,
    pub combinations: Vec<Seat>,
}

impl HistoryRecord {
    pub fn name_set(&self) -> BTreeSet<&str> {
        self.combinations.iter().map(|s| s.name.as_str()).collect()
    }
}
