//! Deterministic rotation math: period indexing, balanced assignment and
//! per-chore rank offsets.
//!
//! # Responsibility
//! - Map calendar dates to period indices and stable period keys.
//! - Pick the assigned member for a chore from pure modular arithmetic.
//! - Derive fairness offsets that stagger same-frequency chores.
//!
//! # Invariants
//! - Every function here is pure: no clock reads, no randomness, no state.
//!   Fixed inputs give the same output across calls and process restarts.
//! - Assignment indices are relative to the eligible (non-exempt) subset.

pub mod assign;
pub mod period;
pub mod rank;

use crate::model::chore::Chore;
use crate::model::member::Member;
use chrono::NaiveDate;

/// Resolves the member assigned to `chore` on `date`.
///
/// Filters exemptions in display order, picks the slot via
/// [`assign::assigned_slot`] and maps it back to a concrete member.
/// Returns `None` when every member is exempt — callers must render that as
/// unassigned, never default to the first member.
pub fn assigned_member<'a>(
    chore: &Chore,
    members: &'a [Member],
    date: NaiveDate,
    offset: usize,
) -> Option<&'a Member> {
    let eligible: Vec<&Member> = members
        .iter()
        .filter(|member| !chore.is_exempt(member.id))
        .collect();
    let slot = assign::assigned_slot(chore.frequency, date, eligible.len(), offset)?;
    eligible.get(slot).copied()
}
