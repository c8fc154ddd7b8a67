use std::sync::Once;

use pretty_assertions::assert_eq;
use submitter_core::{
    init, readiness_check, settle, settle_observed, update, AppState, Effect, Event, FileSpec,
    STATUS_ENTER_NAME_AND_FILE, STATUS_INPUT_FILE, STATUS_INPUT_NAME, STATUS_READY,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(submitter_logging::initialize_for_tests);
}

fn homework() -> FileSpec {
    FileSpec::new("hw1.py", "print(1)")
}

fn ready_state() -> AppState {
    let (state, _) = settle(AppState::new(), Event::NameChanged("Alice".to_string()));
    let (state, _) = settle(state, Event::FilePicked(homework()));
    state
}

#[test]
fn init_starts_empty_and_loads_config() {
    init_logging();
    let (state, effect) = init();

    assert_eq!(effect, Effect::LoadConfig);
    assert_eq!(state.destination_path(), "");
    assert_eq!(state.status_text(), STATUS_ENTER_NAME_AND_FILE);
    assert_eq!(state.user_name(), None);
    assert!(state.file_to_submit().is_none());
    assert!(!state.ready_to_submit());
    assert!(!state.submitted());
}

#[test]
fn config_loaded_sets_destination_only() {
    init_logging();
    let (state, effect) = update(AppState::new(), Event::ConfigLoaded("/srv/exams".into()));

    assert_eq!(state.destination_path(), "/srv/exams");
    assert_eq!(state.status_text(), STATUS_ENTER_NAME_AND_FILE);
    assert!(effect.is_none());
}

#[test]
fn config_load_failure_surfaces_message_and_keeps_destination_empty() {
    init_logging();
    let (state, effect) = update(
        AppState::new(),
        Event::ConfigLoadFailed("Could not load destination".into()),
    );

    assert_eq!(state.status_text(), "Could not load destination");
    assert_eq!(state.destination_path(), "");
    assert!(effect.is_none());
}

#[test]
fn name_changed_requests_readiness_check() {
    init_logging();
    let (state, effect) = update(AppState::new(), Event::NameChanged("Alice".into()));

    assert_eq!(state.user_name(), Some("Alice"));
    assert_eq!(state.status_text(), STATUS_INPUT_FILE);
    assert_eq!(effect, Some(Effect::CheckReadiness));
}

#[test]
fn empty_name_without_file_restores_initial_prompt() {
    init_logging();
    let (state, _) = settle(AppState::new(), Event::NameChanged("Alice".into()));
    let (state, effect) = settle(state, Event::NameChanged(String::new()));

    assert_eq!(state.user_name(), None);
    assert_eq!(state.status_text(), STATUS_ENTER_NAME_AND_FILE);
    assert!(effect.is_none());
}

#[test]
fn empty_name_with_file_asks_for_file_text() {
    init_logging();
    let (state, _) = settle(AppState::new(), Event::FilePicked(homework()));
    let (state, _) = settle(state, Event::NameChanged(String::new()));

    assert_eq!(state.status_text(), STATUS_INPUT_FILE);
    assert!(!state.ready_to_submit());
}

#[test]
fn clearing_name_after_ready_drops_readiness() {
    init_logging();
    let state = ready_state();
    assert!(state.ready_to_submit());

    let (state, effect) = settle(state, Event::NameChanged(String::new()));

    assert!(!state.ready_to_submit());
    assert_eq!(state.user_name(), None);
    assert!(effect.is_none());
}

#[test]
fn file_pick_requested_leaves_state_and_selects_file() {
    init_logging();
    let state = AppState::new();
    let (next, effect) = update(state.clone(), Event::FilePickRequested);

    assert_eq!(next, state);
    assert_eq!(effect, Some(Effect::SelectFile));
}

#[test]
fn file_picked_without_name_asks_for_name() {
    init_logging();
    let (state, effect) = settle(AppState::new(), Event::FilePicked(homework()));

    assert_eq!(state.file_to_submit(), Some(&homework()));
    assert_eq!(state.status_text(), STATUS_INPUT_NAME);
    assert!(!state.ready_to_submit());
    assert!(effect.is_none());
}

#[test]
fn file_pick_failure_keeps_previous_selection() {
    init_logging();
    let (state, _) = settle(AppState::new(), Event::FilePicked(homework()));
    let (state, effect) = update(
        state,
        Event::FilePickFailed("Please select exactly one file.".into()),
    );

    assert_eq!(state.file_to_submit(), Some(&homework()));
    assert_eq!(state.status_text(), "Please select exactly one file.");
    assert!(effect.is_none());
}

#[test]
fn name_then_file_becomes_ready_after_readiness_check() {
    init_logging();
    let (state, _) = settle(AppState::new(), Event::NameChanged("Alice".into()));
    assert!(!state.ready_to_submit());

    let (state, effect) = update(state, Event::FilePicked(homework()));
    assert_eq!(effect, Some(Effect::CheckReadiness));
    assert!(!state.ready_to_submit());

    let chained = readiness_check(&state);
    assert_eq!(chained, Event::BecameReady);
    let (state, effect) = update(state, chained);

    assert!(state.ready_to_submit());
    assert_eq!(state.status_text(), STATUS_READY);
    assert!(effect.is_none());
}

#[test]
fn became_ready_is_ignored_when_gate_does_not_hold() {
    init_logging();
    let (state, _) = settle(AppState::new(), Event::NameChanged("Alice".into()));
    let before = state.clone();

    let (state, _) = update(state, Event::BecameReady);

    assert_eq!(state, before);
    assert!(!state.ready_to_submit());
}

#[test]
fn settle_observed_reports_each_intermediate_state() {
    init_logging();
    let (state, _) = settle(AppState::new(), Event::NameChanged("Alice".into()));

    let mut seen = Vec::new();
    let (state, _) = settle_observed(state, Event::FilePicked(homework()), |event, state| {
        seen.push((event.kind(), state.ready_to_submit()));
    });

    assert_eq!(seen, vec![("FilePicked", false), ("BecameReady", true)]);
    assert!(state.ready_to_submit());
}

#[test]
fn readiness_matches_presence_of_name_and_file_over_sequences() {
    init_logging();
    let events = vec![
        Event::NameChanged("Bob".into()),
        Event::NameChanged(String::new()),
        Event::FilePicked(homework()),
        Event::BecameReady,
        Event::NameChanged("Bob".into()),
        Event::SubmitCompleted(Err("fail".into())),
        Event::NameChanged(String::new()),
        Event::BecameReady,
        Event::NameChanged("Carol".into()),
        Event::SubmitCompleted(Ok("done".into())),
    ];

    let mut state = AppState::new();
    for event in events {
        let (next, _) = settle_observed(state, event, |_, intermediate| {
            // Readiness may lag until the chained BecameReady lands; it never leads.
            if intermediate.ready_to_submit() {
                assert!(intermediate.has_name_and_file());
            }
        });
        assert_eq!(next.ready_to_submit(), next.has_name_and_file());
        state = next;
    }
    assert!(state.ready_to_submit());
}
