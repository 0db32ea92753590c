//! Fairness offsets: stable per-chore ranks within each frequency class.
//!
//! # Invariants
//! - The rank order is total: `sort_index` ascending with `None` sinking to
//!   the end, then name, then id — identical names never collapse.
//! - Ranks are a derived view. They are recomputed whenever the chore list
//!   changes and never persisted.

use crate::model::chore::{Chore, ChoreId, Frequency};
use std::cmp::Ordering;
use std::collections::HashMap;

/// 0-based rank per chore id among chores of one frequency.
///
/// Fed to [`crate::rotation::assign::assigned_slot`] as the fairness offset
/// so consecutively-ranked sibling chores land on different members in the
/// same period.
pub fn build_rank_map(chores: &[Chore], frequency: Frequency) -> HashMap<ChoreId, usize> {
    let mut class: Vec<&Chore> = chores
        .iter()
        .filter(|chore| chore.frequency == frequency)
        .collect();
    class.sort_by(|a, b| compare_for_rank(a, b));
    class
        .iter()
        .enumerate()
        .map(|(rank, chore)| (chore.id, rank))
        .collect()
}

fn compare_for_rank(a: &Chore, b: &Chore) -> Ordering {
    let a_index = a.sort_index.unwrap_or(i64::MAX);
    let b_index = b.sort_index.unwrap_or(i64::MAX);
    a_index
        .cmp(&b_index)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Rank maps for all three frequency classes, built in one pass over the
/// chore list the way reconciliation consumes them.
#[derive(Debug, Clone)]
pub struct RankOffsets {
    daily: HashMap<ChoreId, usize>,
    weekly: HashMap<ChoreId, usize>,
    monthly: HashMap<ChoreId, usize>,
}

impl RankOffsets {
    pub fn build(chores: &[Chore]) -> Self {
        Self {
            daily: build_rank_map(chores, Frequency::Daily),
            weekly: build_rank_map(chores, Frequency::Weekly),
            monthly: build_rank_map(chores, Frequency::Monthly),
        }
    }

    /// Fairness offset for one chore; 0 for a chore outside the maps.
    pub fn offset_for(&self, chore: &Chore) -> usize {
        let map = match chore.frequency {
            Frequency::Daily => &self.daily,
            Frequency::Weekly => &self.weekly,
            Frequency::Monthly => &self.monthly,
        };
        map.get(&chore.id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::{build_rank_map, RankOffsets};
    use crate::model::chore::{Chore, Frequency};

    #[test]
    fn ranks_follow_sort_index_then_name() {
        let mut trash = Chore::new("Take out trash", Frequency::Weekly);
        trash.sort_index = Some(1);
        let mut stove = Chore::new("Clean stove", Frequency::Weekly);
        stove.sort_index = Some(0);
        let bathroom = Chore::new("Clean bathroom", Frequency::Weekly);
        let toilet = Chore::new("Clean guest toilet", Frequency::Weekly);

        let chores = vec![trash.clone(), bathroom.clone(), stove.clone(), toilet.clone()];
        let ranks = build_rank_map(&chores, Frequency::Weekly);

        assert_eq!(ranks[&stove.id], 0);
        assert_eq!(ranks[&trash.id], 1);
        // Unsorted chores sink below explicit indices, ordered by name.
        assert_eq!(ranks[&bathroom.id], 2);
        assert_eq!(ranks[&toilet.id], 3);
    }

    #[test]
    fn identical_names_stay_totally_ordered_by_id() {
        let a = Chore::new("Water plants", Frequency::Daily);
        let b = Chore::new("Water plants", Frequency::Daily);
        let chores = vec![a.clone(), b.clone()];

        let ranks = build_rank_map(&chores, Frequency::Daily);
        let mut seen: Vec<usize> = ranks.values().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1]);
        assert_ne!(ranks[&a.id], ranks[&b.id]);
    }

    #[test]
    fn frequency_classes_rank_independently() {
        let daily = Chore::new("Clean sink area", Frequency::Daily);
        let weekly = Chore::new("Clean bathroom", Frequency::Weekly);
        let chores = vec![daily.clone(), weekly.clone()];

        let offsets = RankOffsets::build(&chores);
        assert_eq!(offsets.offset_for(&daily), 0);
        assert_eq!(offsets.offset_for(&weekly), 0);
    }

    #[test]
    fn unknown_chore_defaults_to_offset_zero() {
        let offsets = RankOffsets::build(&[]);
        let stray = Chore::new("Sweep stairs", Frequency::Monthly);
        assert_eq!(offsets.offset_for(&stray), 0);
    }
}
