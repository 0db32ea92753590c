//! Ledger reconciliation and completion sync.
//!
//! # Responsibility
//! - Seed exactly one ledger row per (current period, chore), deriving the
//!   assignee from rotation math.
//! - Patch ledger completion fields whenever a chore is marked or unmarked.
//!
//! # Invariants
//! - Reconciliation is idempotent and safely re-triggerable: the existence
//!   check re-reads the store on every call, so overlapping runs still
//!   converge to one row per key.
//! - The fast-path state stays authoritative for "is it done now"; ledger
//!   failures are logged and swallowed, they never block completion
//!   toggling.
//! - A row seeded while its chore is already completed carries the
//!   completion over, so a toggle just before reconciliation is never lost.

use crate::model::chore::ChoreId;
use crate::model::ledger::LedgerRecord;
use crate::model::member::MemberId;
use crate::model::state::{CompletionRecord, HouseholdState};
use crate::repo::ledger_repo::{LedgerResult, LedgerStore};
use crate::rotation::assign::assigned_slot;
use crate::rotation::period::{period_key, period_key_for};
use crate::rotation::rank::RankOffsets;
use chrono::{DateTime, Local};
use log::{info, warn};

/// Outcome counts of one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Rows created this pass.
    pub seeded: usize,
    /// Rows that already existed and were left untouched.
    pub already_present: usize,
    /// Chores skipped because the store failed; retried on the next pass.
    pub failed: usize,
}

/// Use-case service over a [`LedgerStore`] implementation.
pub struct LedgerService<S: LedgerStore> {
    store: S,
}

impl<S: LedgerStore> LedgerService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read access to the underlying store, for aggregation scans.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ensures one ledger row exists for every chore's current period.
    ///
    /// Never returns an error: per-chore store failures are logged, counted
    /// in the summary and retried implicitly on the next pass. The existence
    /// check always precedes creation, which makes any number of calls
    /// within one period produce at most one row per chore.
    pub fn reconcile_current_periods(
        &self,
        state: &HouseholdState,
        now: DateTime<Local>,
    ) -> ReconcileSummary {
        let today = now.date_naive();
        let now_ms = now.timestamp_millis();
        let offsets = RankOffsets::build(&state.chores);
        let mut summary = ReconcileSummary::default();

        for chore in &state.chores {
            let pk = period_key_for(chore.frequency, today);
            let id = LedgerRecord::key(&pk, chore.id);

            match self.store.get(&id) {
                Ok(Some(_)) => {
                    summary.already_present += 1;
                    continue;
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(
                        "event=ledger_reconcile module=service status=error chore_id={} period_key={pk} error={err}",
                        chore.id
                    );
                    summary.failed += 1;
                    continue;
                }
            }

            let eligible = state.eligible_members(chore);
            let slot = assigned_slot(
                chore.frequency,
                today,
                eligible.len(),
                offsets.offset_for(chore),
            );
            let assigned_member_id = slot.and_then(|slot| eligible.get(slot)).map(|m| m.id);

            let completion = state.completion_for(&pk, chore.id);
            let record = LedgerRecord {
                id,
                period_key: pk.clone(),
                chore_id: chore.id,
                chore_name_snapshot: Some(chore.name.clone()),
                frequency_snapshot: Some(chore.frequency),
                assigned_member_id,
                created_at: now_ms,
                completed: completion.is_some(),
                completed_at: completion.map(|c| c.at),
                completed_by_member_id: completion.map(|c| c.done_by),
                completed_by_name_snapshot: completion
                    .and_then(|c| state.member_by_id(c.done_by))
                    .map(|member| member.name.clone()),
            };

            match self.store.upsert(&record) {
                Ok(()) => summary.seeded += 1,
                Err(err) => {
                    warn!(
                        "event=ledger_reconcile module=service status=error chore_id={} period_key={pk} error={err}",
                        chore.id
                    );
                    summary.failed += 1;
                }
            }
        }

        info!(
            "event=ledger_reconcile module=service status=ok seeded={} already_present={} failed={}",
            summary.seeded, summary.already_present, summary.failed
        );
        summary
    }

    /// Patches the ledger row for (period, chore) to completed.
    ///
    /// Creates a bare row first when none exists yet — a completion arriving
    /// before reconciliation has run for this period must not be dropped.
    pub fn apply_completion(
        &self,
        period_key: &str,
        chore_id: ChoreId,
        member_id: MemberId,
        name_snapshot: Option<String>,
        now_ms: i64,
    ) -> LedgerResult<LedgerRecord> {
        let id = LedgerRecord::key(period_key, chore_id);
        let mut record = self
            .store
            .get(&id)?
            .unwrap_or_else(|| LedgerRecord::bare(period_key, chore_id, now_ms));
        record.mark_completed(member_id, name_snapshot, now_ms);
        self.store.upsert(&record)?;
        Ok(record)
    }

    /// Clears completion fields on the ledger row for (period, chore).
    ///
    /// Returns `Ok(None)` when no row exists — nothing to revert is a
    /// defined no-op, not a failure.
    pub fn revert_completion(
        &self,
        period_key: &str,
        chore_id: ChoreId,
    ) -> LedgerResult<Option<LedgerRecord>> {
        let id = LedgerRecord::key(period_key, chore_id);
        let Some(mut record) = self.store.get(&id)? else {
            return Ok(None);
        };
        record.clear_completed();
        self.store.upsert(&record)?;
        Ok(Some(record))
    }

    /// Marks a chore done: fast-path state first, then best-effort ledger.
    ///
    /// Returns the period key the completion was recorded under. Persisting
    /// `state` stays the caller's job.
    pub fn mark_chore_done(
        &self,
        state: &mut HouseholdState,
        chore_id: ChoreId,
        member_id: MemberId,
        now: DateTime<Local>,
    ) -> String {
        let pk = period_key(state, chore_id, now.date_naive());
        let now_ms = now.timestamp_millis();
        state.set_completion(
            pk.clone(),
            chore_id,
            CompletionRecord {
                done_by: member_id,
                at: now_ms,
            },
        );

        let name_snapshot = state.member_by_id(member_id).map(|m| m.name.clone());
        if let Err(err) = self.apply_completion(&pk, chore_id, member_id, name_snapshot, now_ms) {
            warn!(
                "event=ledger_mark module=service status=error chore_id={chore_id} period_key={pk} error={err}"
            );
        }
        pk
    }

    /// Unmarks a chore: fast-path state first, then best-effort ledger.
    ///
    /// Returns whether a fast-path completion existed to clear. The ledger
    /// revert runs either way so the two stores converge.
    pub fn unmark_chore(
        &self,
        state: &mut HouseholdState,
        chore_id: ChoreId,
        now: DateTime<Local>,
    ) -> bool {
        let pk = period_key(state, chore_id, now.date_naive());
        let cleared = state.clear_completion(&pk, chore_id).is_some();

        if let Err(err) = self.revert_completion(&pk, chore_id) {
            warn!(
                "event=ledger_unmark module=service status=error chore_id={chore_id} period_key={pk} error={err}"
            );
        }
        cleared
    }
}
