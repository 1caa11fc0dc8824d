//! The assignment engine: retry-bounded, duplicate-avoiding randomized seating.
//!
//! A draw shuffles the participant list uniformly, numbers it `1..=N`, and
//! compares the resulting *name set* against every historical record. Two
//! assignments are "similar" iff they contain exactly the same set of names,
//! regardless of numbering; the check never tries to avoid repeating a
//! particular person-to-seat mapping.

use crate::error::{Error, Result};
use crate::model::{Assignment, HistoryRecord, Seat};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;

/// Maximum shuffle attempts before the engine gives up avoiding duplicates.
pub const DEFAULT_RETRY_LIMIT: usize = 100;

/// The result of one draw, with the retry accounting exposed.
#[derive(Debug, Clone)]
pub struct DrawOutcome {
    pub assignment: Assignment,
    /// Number of shuffles performed (1-based; at most the retry limit).
    pub attempts: usize,
    /// True when every attempt collided with history and the last shuffle was
    /// returned regardless.
    pub exhausted: bool,
}

/// True iff the two seat lists carry identical name sets, order-insensitive.
pub fn is_similar(a: &[Seat], b: &[Seat]) -> bool {
    let a: BTreeSet<&str> = a.iter().map(|s| s.name.as_str()).collect();
    let b: BTreeSet<&str> = b.iter().map(|s| s.name.as_str()).collect();
    a == b
}

/// Produces a shuffled numbering of `names` that avoids exact repeats of a
/// previously drawn participant set, bounded by `retry_limit` attempts.
///
/// If every attempt collides with history, the last shuffle is returned anyway:
/// a draw is best-effort and must never block the caller.
pub fn assign_seats<R: Rng + ?Sized>(
    names: &[String],
    history: &[HistoryRecord],
    retry_limit: usize,
    rng: &mut R,
) -> Result<DrawOutcome> {
    if names.is_empty() {
        return Err(Error::EmptyRoster);
    }

    let limit = retry_limit.max(1);
    let mut order: Vec<String> = names.to_vec();
    let mut attempt = 0;
    loop {
        attempt += 1;
        order.shuffle(rng);
        let candidate = Assignment::from_order(order.iter().cloned());
        let duplicate = history
            .iter()
            .any(|record| is_similar(&candidate.seats, &record.combinations));
        if !duplicate || attempt >= limit {
            return Ok(DrawOutcome {
                assignment: candidate,
                attempts: attempt,
                exhausted: duplicate,
            });
        }
    }
}
