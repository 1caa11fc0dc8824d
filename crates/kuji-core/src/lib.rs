#![forbid(unsafe_code)]

//! Seating lottery engine + data model (headless).
//!
//! Design goals:
//! - history-aware draws that avoid repeating a previously seen participant set
//! - pluggable randomness (`rand::Rng`-generic draw entry points)
//! - deterministic, testable geometry downstream (layout lives in `kuji-render`)

pub mod assign;
pub mod config;
pub mod error;
pub mod groups;
pub mod history;
pub mod model;
pub mod roster;
mod theme;
pub mod time;

pub use assign::{DEFAULT_RETRY_LIMIT, DrawOutcome, assign_seats, is_similar};
pub use config::KujiConfig;
pub use error::{Error, Result};
pub use history::HistoryStore;
pub use model::{Assignment, HistoryRecord, Seat};

/// The draw facade: owns the site config, the history store and the retry limit.
#[derive(Debug, Clone)]
pub struct Engine {
    site_config: KujiConfig,
    history: HistoryStore,
    retry_limit: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            site_config: config::default_site_config(),
            history: HistoryStore::in_memory(),
            retry_limit: DEFAULT_RETRY_LIMIT,
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges overrides onto the seating schema defaults.
    pub fn with_site_config(mut self, overrides: KujiConfig) -> Self {
        self.site_config.deep_merge(overrides.as_value());
        self
    }

    pub fn with_history(mut self, history: HistoryStore) -> Self {
        self.history = history;
        self
    }

    pub fn with_retry_limit(mut self, retry_limit: usize) -> Self {
        self.retry_limit = retry_limit.max(1);
        self
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn site_config(&self) -> &KujiConfig {
        &self.site_config
    }

    /// Site config with theme defaults applied; what the layout calculator consumes.
    pub fn effective_config(&self) -> KujiConfig {
        let mut effective = self.site_config.clone();
        theme::apply_theme_defaults(&mut effective);
        effective
    }

    /// Group bands for the active seat range, honoring `seating.groupSize` with
    /// the fixed-table fallback on invalid values.
    pub fn groups_for(&self, total_seats: u32) -> Vec<groups::Group> {
        groups::resolve_groups(total_seats, self.site_config.get_i64("seating.groupSize"))
    }

    /// Runs one draw with the thread-local RNG and records it in history.
    pub fn draw(&mut self, names: &[String]) -> Result<Assignment> {
        self.draw_with_rng(names, &mut rand::thread_rng())
    }

    /// Runs one draw with a caller-supplied RNG.
    ///
    /// The new assignment is appended to the history store with a local
    /// timestamp. A persistence failure is logged and does not block the
    /// returned assignment.
    pub fn draw_with_rng<R: rand::Rng + ?Sized>(
        &mut self,
        names: &[String],
        rng: &mut R,
    ) -> Result<Assignment> {
        let outcome = assign_seats(names, self.history.records(), self.retry_limit, rng)?;
        if outcome.exhausted {
            tracing::warn!(
                attempts = outcome.attempts,
                "participant set already drawn before; keeping the last shuffle"
            );
        }

        let record = HistoryRecord {
            timestamp: time::now_local_string(),
            combinations: outcome.assignment.seats.clone(),
        };
        if let Err(err) = self.history.append(record) {
            tracing::warn!("failed to persist draw history: {err}");
        }

        Ok(outcome.assignment)
    }
}
