//! Balanced rotation assignment.
//!
//! # Invariants
//! - Pure modular arithmetic over the period index; deterministic for fixed
//!   inputs across calls and restarts.
//! - `None` means "no eligible assignee" and must surface as an unassigned
//!   state, never silently become slot 0.

use crate::model::chore::Frequency;
use crate::rotation::period::period_index;
use chrono::NaiveDate;

/// Slot within the eligible-member subset assigned for this period.
///
/// `offset` is the chore's fairness offset (its rank among same-frequency
/// chores), staggering sibling chores so they rotate through members in
/// lockstep but one position apart. The slot indexes the **eligible** list,
/// not the full roster; callers map it back to a concrete member.
pub fn assigned_slot(
    frequency: Frequency,
    date: NaiveDate,
    eligible_count: usize,
    offset: usize,
) -> Option<usize> {
    if eligible_count == 0 {
        return None;
    }
    let count = eligible_count as i64;
    let base = period_index(frequency, date);
    let slot = (base + offset as i64 % count).rem_euclid(count);
    Some(slot as usize)
}
