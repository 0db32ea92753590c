//! Core domain logic for ChoreWheel: rotating recurring chores across a
//! household fairly, tracking per-period completion and keeping a durable
//! ledger for leaderboard history.
//!
//! The fast-path state snapshot answers "is it done right now" and is
//! authoritative; the SQLite ledger is a derived projection kept consistent
//! by explicit, idempotent reconciliation passes.

pub mod db;
pub mod leaderboard;
pub mod logging;
pub mod model;
pub mod repo;
pub mod rotation;
pub mod service;
pub mod state;

pub use leaderboard::{
    count_tracked_chores, podium, rank_members, ChoreCount, MemberScore, Podium, ScoreWindow,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::chore::{Chore, ChoreId, Frequency};
pub use model::ledger::LedgerRecord;
pub use model::member::{Member, MemberId};
pub use model::state::{CompletionMap, CompletionRecord, HouseholdState, Prefs};
pub use repo::ledger_repo::{LedgerError, LedgerResult, LedgerStore, SqliteLedgerStore};
pub use rotation::assign::assigned_slot;
pub use rotation::assigned_member;
pub use rotation::period::{
    next_boundary, period_index, period_key, period_key_for, UNKNOWN_PERIOD_KEY,
};
pub use rotation::rank::{build_rank_map, RankOffsets};
pub use service::ledger_service::{LedgerService, ReconcileSummary};
pub use state::json_store::JsonStateStore;
pub use state::{seeded_household, StateStoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
