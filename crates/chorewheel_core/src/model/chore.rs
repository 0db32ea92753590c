//! Chore model and recurrence frequency.
//!
//! # Invariants
//! - `frequency` is treated as immutable after creation: period keys are
//!   namespaced by frequency, so changing it would orphan ledger rows written
//!   under the old namespace. This core neither detects nor repairs that.
//! - `exempt_member_ids` may legally cover every member; such a chore has no
//!   possible assignee and callers must render it unassigned.

use crate::model::member::MemberId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a chore.
pub type ChoreId = Uuid;

/// Recurrence class of a chore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    /// All frequencies in period-length order.
    pub const ALL: [Frequency; 3] = [Frequency::Daily, Frequency::Weekly, Frequency::Monthly];

    /// Stable lowercase label, also used as the db text encoding.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Parses the stable label back; `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

/// A recurring task assigned around the household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    /// Stable global ID, never reused.
    pub id: ChoreId,
    pub name: String,
    pub frequency: Frequency,
    /// Emoji or glyph shown by the presentation layer; round-tripped only.
    #[serde(default)]
    pub icon: Option<String>,
    /// Explicit ordering among same-frequency chores. `None` sinks to the
    /// end when deriving rank offsets.
    #[serde(default)]
    pub sort_index: Option<i64>,
    /// Members this chore is never assigned to.
    #[serde(default)]
    pub exempt_member_ids: Vec<MemberId>,
    /// Whether completions of this chore count toward leaderboard totals.
    #[serde(default = "default_true")]
    pub track_on_leaderboard: bool,
}

fn default_true() -> bool {
    true
}

impl Chore {
    /// Creates a chore with a generated stable ID and default flags.
    pub fn new(name: impl Into<String>, frequency: Frequency) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            frequency,
            icon: None,
            sort_index: None,
            exempt_member_ids: Vec::new(),
            track_on_leaderboard: true,
        }
    }

    /// Returns whether the given member is exempt from this chore.
    pub fn is_exempt(&self, member_id: MemberId) -> bool {
        self.exempt_member_ids.contains(&member_id)
    }
}
