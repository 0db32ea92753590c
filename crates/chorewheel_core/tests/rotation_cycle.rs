use chorewheel_core::{
    assigned_member, assigned_slot, build_rank_map, period_key, Chore, Frequency, HouseholdState,
    Member, UNKNOWN_PERIOD_KEY,
};
use chrono::NaiveDate;
use std::collections::HashSet;
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn household(names: &[&str]) -> HouseholdState {
    HouseholdState {
        members: names.iter().map(|name| Member::new(*name)).collect(),
        ..HouseholdState::default()
    }
}

#[test]
fn four_members_cycle_through_a_weekly_chore_exactly_once() {
    let state = household(&["Ada", "Ben", "Cleo", "Dan"]);
    let chore = Chore::new("Take out trash", Frequency::Weekly);

    // Four consecutive Mondays within one calendar year.
    let mondays = [
        date(2026, 8, 3),
        date(2026, 8, 10),
        date(2026, 8, 17),
        date(2026, 8, 24),
    ];

    let mut assigned = Vec::new();
    for monday in mondays {
        let member = assigned_member(&chore, &state.members, monday, 0).unwrap();
        assigned.push(member.id);
    }

    let distinct: HashSet<_> = assigned.iter().collect();
    assert_eq!(distinct.len(), 4, "each member assigned exactly once");

    // And the fifth week wraps back to the first assignee.
    let fifth = assigned_member(&chore, &state.members, date(2026, 8, 31), 0).unwrap();
    assert_eq!(fifth.id, assigned[0]);
}

#[test]
fn exempt_members_are_never_assigned() {
    let state = household(&["Ada", "Ben", "Cleo", "Dan"]);
    let mut chore = Chore::new("Clean bathroom", Frequency::Weekly);
    chore.exempt_member_ids = vec![state.members[1].id, state.members[3].id];

    let eligible_ids: HashSet<_> = [state.members[0].id, state.members[2].id].into();

    for day in 1..=28 {
        let member = assigned_member(&chore, &state.members, date(2026, 2, day), 0).unwrap();
        assert!(eligible_ids.contains(&member.id));
    }
}

#[test]
fn slot_for_exempt_chore_indexes_eligible_subset_only() {
    // Two eligible members: the slot must always be 0 or 1.
    for day in 1..=28 {
        let slot = assigned_slot(Frequency::Daily, date(2026, 2, day), 2, 0).unwrap();
        assert!(slot < 2);
    }
}

#[test]
fn fully_exempt_chore_has_no_assignee() {
    let state = household(&["Ada", "Ben"]);
    let mut chore = Chore::new("Clean stove", Frequency::Weekly);
    chore.exempt_member_ids = state.members.iter().map(|m| m.id).collect();

    assert_eq!(
        assigned_member(&chore, &state.members, date(2026, 8, 7), 0),
        None
    );
}

#[test]
fn sibling_chores_spread_across_members_on_the_same_day() {
    let state = household(&["Ada", "Ben", "Cleo", "Dan"]);
    let mut chores = Vec::new();
    for (index, name) in ["Clean kitchen counter", "Clean kitchen floors", "Clean sink area"]
        .iter()
        .enumerate()
    {
        let mut chore = Chore::new(*name, Frequency::Daily);
        chore.sort_index = Some(index as i64);
        chores.push(chore);
    }

    let ranks = build_rank_map(&chores, Frequency::Daily);
    let today = date(2026, 8, 7);

    let assigned: Vec<_> = chores
        .iter()
        .map(|chore| {
            assigned_member(chore, &state.members, today, ranks[&chore.id])
                .unwrap()
                .id
        })
        .collect();

    // Three consecutively-ranked chores land on three different members.
    let distinct: HashSet<_> = assigned.iter().collect();
    assert_eq!(distinct.len(), 3);
}

#[test]
fn period_key_lookup_degrades_to_unknown_for_missing_chore() {
    let mut state = household(&["Ada"]);
    let chore = Chore::new("Sweep stairs", Frequency::Monthly);
    state.chores.push(chore.clone());

    let today = date(2026, 8, 7);
    assert_eq!(period_key(&state, chore.id, today), "M:2026-8");
    assert_eq!(
        period_key(&state, Uuid::new_v4(), today),
        UNKNOWN_PERIOD_KEY
    );
}
