//! Fast-path household state: the authoritative "is it done right now" view.
//!
//! # Responsibility
//! - Hold members, chores, per-period completion toggles and presentation
//!   prefs in one serializable snapshot.
//! - Provide completion map helpers so callers never hand-edit nested maps.
//!
//! # Invariants
//! - `completions` is keyed period key -> chore id; clearing the last chore
//!   entry of a period drops the whole period map.
//! - This state is authoritative for current completion; the durable ledger
//!   is a derived projection reconciled from it.

use crate::model::chore::{Chore, ChoreId};
use crate::model::member::{Member, MemberId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Who completed a chore in one period, and when (epoch ms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub done_by: MemberId,
    pub at: i64,
}

/// Presentation preferences, round-tripped untouched.
///
/// Theme and notification behavior live outside this core; unknown fields are
/// preserved through `extra` so a collaborating writer never loses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub dark: bool,
    #[serde(default = "default_auto_night")]
    pub auto_night: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            dark: false,
            auto_night: true,
            extra: serde_json::Map::new(),
        }
    }
}

fn default_auto_night() -> bool {
    true
}

/// Per-period completion toggles, keyed by period key then chore id.
pub type CompletionMap = BTreeMap<String, BTreeMap<ChoreId, CompletionRecord>>;

/// Full fast-path state snapshot, persisted as one JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HouseholdState {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub chores: Vec<Chore>,
    #[serde(default)]
    pub completions: CompletionMap,
    #[serde(default)]
    pub prefs: Prefs,
}

impl HouseholdState {
    /// Looks up a member by stable ID.
    pub fn member_by_id(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    /// Looks up a chore by stable ID.
    pub fn chore_by_id(&self, id: ChoreId) -> Option<&Chore> {
        self.chores.iter().find(|chore| chore.id == id)
    }

    /// Members not exempt from the given chore, in display order.
    pub fn eligible_members<'a>(&'a self, chore: &Chore) -> Vec<&'a Member> {
        self.members
            .iter()
            .filter(|member| !chore.is_exempt(member.id))
            .collect()
    }

    /// Current completion toggle for one (period, chore), if any.
    pub fn completion_for(&self, period_key: &str, chore_id: ChoreId) -> Option<&CompletionRecord> {
        self.completions
            .get(period_key)
            .and_then(|per_chore| per_chore.get(&chore_id))
    }

    /// Records a completion toggle for one (period, chore).
    pub fn set_completion(
        &mut self,
        period_key: impl Into<String>,
        chore_id: ChoreId,
        record: CompletionRecord,
    ) {
        self.completions
            .entry(period_key.into())
            .or_default()
            .insert(chore_id, record);
    }

    /// Clears a completion toggle; returns the removed record if one existed.
    ///
    /// Drops the period map entirely once its last entry is removed.
    pub fn clear_completion(
        &mut self,
        period_key: &str,
        chore_id: ChoreId,
    ) -> Option<CompletionRecord> {
        let per_chore = self.completions.get_mut(period_key)?;
        let removed = per_chore.remove(&chore_id);
        if per_chore.is_empty() {
            self.completions.remove(period_key);
        }
        removed
    }
}
