//! JSON file implementation of the fast-path state store.
//!
//! # Responsibility
//! - Read and write the single-document household snapshot.
//! - Recover from a missing or corrupt file with the seeded default.
//!
//! # Invariants
//! - `load` never fails on content problems, only on I/O; corrupt content is
//!   replaced by the seeded default (the previous document is overwritten on
//!   the next save, last-write-wins).
//! - Completion entries under period keys that match no known namespace are
//!   pruned at load so they can never merge into rotation or ledger logic.

use super::{seeded_household, StateStoreError};
use crate::model::state::HouseholdState;
use crate::rotation::period::UNKNOWN_PERIOD_KEY;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

static PERIOD_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:D:\d+-\d+-\d+|W:\d+-W\d+|M:\d+-\d+)$").expect("valid period key regex")
});

/// Whole-file JSON store for [`HouseholdState`].
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the household state, recovering to the seeded default when the
    /// file is missing or unparseable.
    ///
    /// # Errors
    /// - Returns `StateStoreError::Io` only for a read failure other than
    ///   "not found" — the one fast-path failure that must surface.
    pub fn load(&self) -> Result<HouseholdState, StateStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(seeded_household());
            }
            Err(err) => return Err(StateStoreError::Io(err)),
        };

        let mut state: HouseholdState = match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(err) => {
                warn!(
                    "event=state_load module=state status=recovered path={} error={err}",
                    self.path.display()
                );
                return Ok(seeded_household());
            }
        };

        prune_malformed_completions(&mut state);
        Ok(state)
    }

    /// Serializes and writes the full snapshot, last-write-wins.
    pub fn save(&self, state: &HouseholdState) -> Result<(), StateStoreError> {
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Writes the seeded default household, but only when no file exists.
    ///
    /// Returns whether a seed was written.
    pub fn seed_if_empty(&self) -> Result<bool, StateStoreError> {
        if self.path.exists() {
            return Ok(false);
        }
        self.save(&seeded_household())?;
        info!(
            "event=state_seed module=state status=ok path={}",
            self.path.display()
        );
        Ok(true)
    }
}

fn prune_malformed_completions(state: &mut HouseholdState) {
    let before = state.completions.len();
    state
        .completions
        .retain(|key, _| key == UNKNOWN_PERIOD_KEY || PERIOD_KEY_RE.is_match(key));
    let dropped = before - state.completions.len();
    if dropped > 0 {
        warn!("event=state_load module=state status=pruned dropped_periods={dropped}");
    }
}

#[cfg(test)]
mod tests {
    use super::PERIOD_KEY_RE;

    #[test]
    fn period_key_pattern_accepts_all_namespaces() {
        for key in ["D:2026-8-7", "W:2026-W32", "M:2026-8"] {
            assert!(PERIOD_KEY_RE.is_match(key), "should accept {key}");
        }
    }

    #[test]
    fn period_key_pattern_rejects_foreign_shapes() {
        for key in ["", "D:", "X:2026-8-7", "W:2026-32", "daily", "D:2026-8-7|extra"] {
            assert!(!PERIOD_KEY_RE.is_match(key), "should reject {key}");
        }
    }
}
