//! Durable ledger row: one record per (period, chore).
//!
//! # Invariants
//! - `id` is the composite primary key `"<period_key>|<chore_id>"`; at most
//!   one row exists per key.
//! - `period_key`, `chore_id` and the snapshot fields never change after
//!   creation; a later exemption or roster change does not rewrite history.
//! - Rows are mutated in place on completion toggles and never deleted.

use crate::model::chore::{ChoreId, Frequency};
use crate::model::member::MemberId;
use serde::{Deserialize, Serialize};

/// One period-occurrence of a chore in the historical ledger.
///
/// Name and frequency are snapshotted at seed time so ledger history stays
/// meaningful after a chore is renamed or deleted. Rows created lazily by a
/// completion toggle (before reconciliation ran for that period) carry `None`
/// snapshots and no assignee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub id: String,
    pub period_key: String,
    pub chore_id: ChoreId,
    pub chore_name_snapshot: Option<String>,
    pub frequency_snapshot: Option<Frequency>,
    pub assigned_member_id: Option<MemberId>,
    /// Epoch ms at row creation.
    pub created_at: i64,
    pub completed: bool,
    pub completed_at: Option<i64>,
    pub completed_by_member_id: Option<MemberId>,
    pub completed_by_name_snapshot: Option<String>,
}

impl LedgerRecord {
    /// Composite primary key for one (period, chore) occurrence.
    pub fn key(period_key: &str, chore_id: ChoreId) -> String {
        format!("{period_key}|{chore_id}")
    }

    /// Creates an incomplete row with no snapshots, as seeded lazily by a
    /// completion toggle that arrives before reconciliation.
    pub fn bare(period_key: impl Into<String>, chore_id: ChoreId, created_at: i64) -> Self {
        let period_key = period_key.into();
        Self {
            id: Self::key(&period_key, chore_id),
            period_key,
            chore_id,
            chore_name_snapshot: None,
            frequency_snapshot: None,
            assigned_member_id: None,
            created_at,
            completed: false,
            completed_at: None,
            completed_by_member_id: None,
            completed_by_name_snapshot: None,
        }
    }

    /// Marks this row completed by the given member.
    pub fn mark_completed(
        &mut self,
        member_id: MemberId,
        name_snapshot: Option<String>,
        at: i64,
    ) {
        self.completed = true;
        self.completed_at = Some(at);
        self.completed_by_member_id = Some(member_id);
        self.completed_by_name_snapshot = name_snapshot;
    }

    /// Clears completion state back to "not done".
    pub fn clear_completed(&mut self) {
        self.completed = false;
        self.completed_at = None;
        self.completed_by_member_id = None;
        self.completed_by_name_snapshot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::LedgerRecord;
    use uuid::Uuid;

    #[test]
    fn key_joins_period_and_chore_with_pipe() {
        let chore_id = Uuid::new_v4();
        let key = LedgerRecord::key("W:2026-W32", chore_id);
        assert_eq!(key, format!("W:2026-W32|{chore_id}"));
    }

    #[test]
    fn mark_then_clear_restores_unset_fields() {
        let chore_id = Uuid::new_v4();
        let member_id = Uuid::new_v4();
        let mut record = LedgerRecord::bare("D:2026-8-7", chore_id, 10);

        record.mark_completed(member_id, Some("Ada".to_string()), 20);
        assert!(record.completed);
        assert_eq!(record.completed_at, Some(20));

        record.clear_completed();
        assert!(!record.completed);
        assert_eq!(record.completed_at, None);
        assert_eq!(record.completed_by_member_id, None);
        assert_eq!(record.completed_by_name_snapshot, None);
    }
}
