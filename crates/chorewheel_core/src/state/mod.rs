//! Fast-path state persistence: one JSON document, last-write-wins.
//!
//! # Responsibility
//! - Load, save and seed the household state snapshot.
//! - Normalize loaded state so downstream code never sees malformed keys.
//!
//! # Invariants
//! - A missing or unparseable state file recovers to the seeded default;
//!   only a genuine I/O failure surfaces as an error.
//! - Saving serializes the full snapshot; there is no partial update.

pub mod json_store;

use crate::model::chore::{Chore, Frequency};
use crate::model::member::Member;
use crate::model::state::HouseholdState;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for fast-path state persistence.
#[derive(Debug)]
pub enum StateStoreError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl Display for StateStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "state file i/o failed: {err}"),
            Self::Serialize(err) => write!(f, "state serialization failed: {err}"),
        }
    }
}

impl Error for StateStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StateStoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StateStoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Starter household used when no state file exists yet.
///
/// Four members and a small chore set across all three frequencies, each
/// chore with an explicit sort index so the initial rotation is staggered.
pub fn seeded_household() -> HouseholdState {
    let members = vec![
        seed_member("Member 1", "#6b8afd"),
        seed_member("Member 2", "#57c08f"),
        seed_member("Member 3", "#f2c266"),
        seed_member("Member 4", "#c69cf6"),
    ];

    let chores = vec![
        seed_chore("Clean kitchen counter", Frequency::Daily, "🍽️", 0),
        seed_chore("Clean kitchen floors", Frequency::Daily, "🫧", 1),
        seed_chore("Clean sink area", Frequency::Daily, "🧼", 2),
        seed_chore("Take out trash", Frequency::Weekly, "🗑️", 0),
        seed_chore("Tidy living room", Frequency::Weekly, "🛋️", 1),
        seed_chore("Clean stove", Frequency::Weekly, "🍳", 2),
        seed_chore("Clean bathroom", Frequency::Weekly, "🚿", 3),
        seed_chore("Clean guest toilet", Frequency::Weekly, "🚽", 4),
        seed_chore("Clean dining table", Frequency::Weekly, "🍜", 5),
        seed_chore("Sweep stairs", Frequency::Monthly, "🧹", 0),
        seed_chore("Trim weeds", Frequency::Monthly, "🪣", 1),
    ];

    HouseholdState {
        members,
        chores,
        ..HouseholdState::default()
    }
}

fn seed_member(name: &str, color: &str) -> Member {
    let mut member = Member::new(name);
    member.color = Some(color.to_string());
    member
}

fn seed_chore(name: &str, frequency: Frequency, icon: &str, sort_index: i64) -> Chore {
    let mut chore = Chore::new(name, frequency);
    chore.icon = Some(icon.to_string());
    chore.sort_index = Some(sort_index);
    chore
}
