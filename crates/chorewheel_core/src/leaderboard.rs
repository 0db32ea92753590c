//! Leaderboard aggregation over the full ledger.
//!
//! # Responsibility
//! - Count completions per member and per tracked chore over a time window.
//! - Produce ranked views with a total, input-order-independent ordering.
//!
//! # Invariants
//! - A record counts only when `completed` is set and a completing member is
//!   recorded.
//! - Rows exist for every current member / tracked chore, zero scores
//!   included; members no longer on the roster are not ranked.
//! - Ties break by case-insensitive name, then id, so identical inputs give
//!   identical output regardless of store scan order.

use crate::model::chore::{Chore, ChoreId, Frequency};
use crate::model::ledger::LedgerRecord;
use crate::model::member::{Member, MemberId};
use std::collections::{HashMap, HashSet};

const MS_PER_DAY: i64 = 86_400_000;

/// Time window over `completed_at` for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreWindow {
    AllTime,
    /// Completions within the trailing N days, inclusive of `now`.
    LastDays(u32),
}

impl ScoreWindow {
    /// Trailing seven days.
    pub const WEEK: ScoreWindow = ScoreWindow::LastDays(7);
    /// Trailing thirty days.
    pub const MONTH: ScoreWindow = ScoreWindow::LastDays(30);

    fn contains(self, completed_at: Option<i64>, now_ms: i64) -> bool {
        match self {
            Self::AllTime => true,
            Self::LastDays(days) => match completed_at {
                Some(at) => at >= now_ms - i64::from(days) * MS_PER_DAY && at <= now_ms,
                None => false,
            },
        }
    }
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberScore {
    pub member_id: MemberId,
    pub name: String,
    pub color: Option<String>,
    pub score: u32,
}

/// Per-chore completion count for tracked chores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoreCount {
    pub chore_id: ChoreId,
    pub name: String,
    pub frequency: Frequency,
    pub count: u32,
}

/// Top three plus last place, derived from an already-ranked list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Podium {
    pub first: Option<MemberScore>,
    pub second: Option<MemberScore>,
    pub third: Option<MemberScore>,
    pub last: Option<MemberScore>,
}

/// Ranks current members by completions within the window.
///
/// Sorted by score descending, then case-insensitive name, then id.
pub fn rank_members(
    records: &[LedgerRecord],
    members: &[Member],
    window: ScoreWindow,
    now_ms: i64,
) -> Vec<MemberScore> {
    let mut by_member: HashMap<MemberId, u32> = HashMap::new();
    for record in scoring_records(records, window, now_ms) {
        if let Some(done_by) = record.completed_by_member_id {
            *by_member.entry(done_by).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<MemberScore> = members
        .iter()
        .map(|member| MemberScore {
            member_id: member.id,
            name: member.name.clone(),
            color: member.color.clone(),
            score: by_member.get(&member.id).copied().unwrap_or(0),
        })
        .collect();
    rows.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.member_id.cmp(&b.member_id))
    });
    rows
}

/// Completion counts for chores with `track_on_leaderboard` set.
///
/// Untracked chores are excluded even when they have completions. Sorted by
/// count descending with the same tie-break as member ranking.
pub fn count_tracked_chores(
    records: &[LedgerRecord],
    chores: &[Chore],
    window: ScoreWindow,
    now_ms: i64,
) -> Vec<ChoreCount> {
    let tracked_ids: HashSet<ChoreId> = chores
        .iter()
        .filter(|chore| chore.track_on_leaderboard)
        .map(|chore| chore.id)
        .collect();

    let mut by_chore: HashMap<ChoreId, u32> = HashMap::new();
    for record in scoring_records(records, window, now_ms) {
        if record.completed_by_member_id.is_none() {
            continue;
        }
        if tracked_ids.contains(&record.chore_id) {
            *by_chore.entry(record.chore_id).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<ChoreCount> = chores
        .iter()
        .filter(|chore| chore.track_on_leaderboard)
        .map(|chore| ChoreCount {
            chore_id: chore.id,
            name: chore.name.clone(),
            frequency: chore.frequency,
            count: by_chore.get(&chore.id).copied().unwrap_or(0),
        })
        .collect();
    rows.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.chore_id.cmp(&b.chore_id))
    });
    rows
}

/// Top three plus last place over a ranked member list.
///
/// With fewer than four rows the same member may appear both on the podium
/// and in last place; callers render what is present.
pub fn podium(ranked: &[MemberScore]) -> Podium {
    Podium {
        first: ranked.first().cloned(),
        second: ranked.get(1).cloned(),
        third: ranked.get(2).cloned(),
        last: ranked.last().cloned(),
    }
}

fn scoring_records<'a>(
    records: &'a [LedgerRecord],
    window: ScoreWindow,
    now_ms: i64,
) -> impl Iterator<Item = &'a LedgerRecord> {
    records
        .iter()
        .filter(move |record| record.completed && window.contains(record.completed_at, now_ms))
}
