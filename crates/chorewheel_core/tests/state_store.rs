use chorewheel_core::{
    Chore, CompletionRecord, Frequency, HouseholdState, JsonStateStore, Member,
};
use std::fs;

#[test]
fn load_on_missing_file_returns_seeded_default() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStateStore::new(dir.path().join("state.json"));

    let state = store.load().unwrap();
    assert_eq!(state.members.len(), 4);
    assert_eq!(state.chores.len(), 11);
    // Loading alone never writes the file.
    assert!(!store.path().exists());
}

#[test]
fn save_then_load_round_trips_completions_and_prefs() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStateStore::new(dir.path().join("state.json"));

    let member = Member::new("Ada");
    let chore = Chore::new("Clean stove", Frequency::Weekly);
    let mut state = HouseholdState {
        members: vec![member.clone()],
        chores: vec![chore.clone()],
        ..HouseholdState::default()
    };
    state.set_completion(
        "W:2026-W32",
        chore.id,
        CompletionRecord {
            done_by: member.id,
            at: 1_700_000_000_000,
        },
    );
    state.prefs.dark = true;
    state.prefs.extra.insert(
        "emailWebhook".to_string(),
        serde_json::Value::String("https://example.test/hook".to_string()),
    );

    store.save(&state).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded, state);
}

#[test]
fn corrupt_json_recovers_with_seeded_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "{not json").unwrap();

    let store = JsonStateStore::new(&path);
    let state = store.load().unwrap();
    assert_eq!(state.members.len(), 4);
}

#[test]
fn malformed_completion_period_keys_are_pruned_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let chore_id = "9f8b6a1e-0c4d-4f3a-9b2e-1d5c7a8e9f00";
    let member_id = "1aa53a94-6a30-4d2c-8f05-3f5e9d7c2b10";
    let raw = format!(
        r#"{{
            "members": [{{"id": "{member_id}", "name": "Ada"}}],
            "chores": [{{"id": "{chore_id}", "name": "Clean stove", "frequency": "weekly"}}],
            "completions": {{
                "W:2026-W32": {{"{chore_id}": {{"done_by": "{member_id}", "at": 1}}}},
                "unknown": {{"{chore_id}": {{"done_by": "{member_id}", "at": 2}}}},
                "someday-maybe": {{"{chore_id}": {{"done_by": "{member_id}", "at": 3}}}}
            }}
        }}"#
    );
    fs::write(&path, raw).unwrap();

    let store = JsonStateStore::new(&path);
    let state = store.load().unwrap();

    assert_eq!(state.completions.len(), 2);
    assert!(state.completions.contains_key("W:2026-W32"));
    assert!(state.completions.contains_key("unknown"));
    assert!(!state.completions.contains_key("someday-maybe"));
}

#[test]
fn seed_if_empty_writes_once() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStateStore::new(dir.path().join("state.json"));

    assert!(store.seed_if_empty().unwrap());
    assert!(store.path().exists());
    assert!(!store.seed_if_empty().unwrap());

    let state = store.load().unwrap();
    assert_eq!(state.members.len(), 4);
    assert!(state.prefs.auto_night);
}
