use super::*;
use crate::net::fake_api::{sample_appointment, sample_medicines};

// =============================================================
// CompletionState
// =============================================================

#[test]
fn completion_default_shows_mark_button() {
    let state = CompletionState::default();
    assert_eq!(state.label(), "Mark as Completed");
    assert_eq!(state.tone(), ButtonTone::Error);
    assert_eq!(state.tone().class(), "btn btn--error");
}

#[test]
fn completed_shows_success_button() {
    let state = CompletionState { completed: true, pending: false };
    assert_eq!(state.label(), "Completed");
    assert_eq!(state.tone(), ButtonTone::Success);
    assert_eq!(state.tone().class(), "btn btn--success");
}

#[test]
fn each_click_toggles_once() {
    let mut state = CompletionState::default();
    let target = state.begin_toggle().unwrap();
    assert!(target);
    state.finish_toggle(target, true);
    assert!(state.completed);
    assert_eq!(state.label(), "Completed");

    let target = state.begin_toggle().unwrap();
    assert!(!target);
    state.finish_toggle(target, true);
    assert!(!state.completed);
    assert_eq!(state.label(), "Mark as Completed");
}

#[test]
fn clicks_while_pending_are_ignored() {
    let mut state = CompletionState::default();
    let first = state.begin_toggle();
    assert_eq!(first, Some(true));
    assert_eq!(state.begin_toggle(), None);
    assert_eq!(state.begin_toggle(), None);
    state.finish_toggle(true, true);
    assert!(state.completed);
    assert!(!state.pending);
}

#[test]
fn failed_toggle_keeps_previous_flag() {
    let mut state = CompletionState::default();
    let target = state.begin_toggle().unwrap();
    state.finish_toggle(target, false);
    assert!(!state.completed);
    assert!(!state.pending);
    assert_eq!(state.label(), "Mark as Completed");
}

// =============================================================
// ActionsState
// =============================================================

#[test]
fn set_appointment_adopts_completion_flag() {
    let mut state = ActionsState::default();
    state.set_appointment(Appointment { is_completed: true, ..sample_appointment() });
    assert!(state.completion.completed);
    assert!(state.appointment.is_some());
}

#[test]
fn set_appointment_does_not_override_pending_toggle() {
    let mut state = ActionsState::default();
    let target = state.completion.begin_toggle().unwrap();
    state.set_appointment(sample_appointment());
    state.completion.finish_toggle(target, true);
    assert!(state.completion.completed);
}

#[test]
fn history_text_falls_back_when_missing_or_blank() {
    let mut state = ActionsState::default();
    assert_eq!(state.history_text(), NO_HISTORY);
    state.history = Some("   ".to_owned());
    assert_eq!(state.history_text(), NO_HISTORY);
    state.history = Some("Asthma".to_owned());
    assert_eq!(state.history_text(), "Asthma");
}

#[test]
fn select_medicine_picks_by_id() {
    let mut state = ActionsState { medicines: sample_medicines(), ..ActionsState::default() };
    state.select_medicine("2");
    assert_eq!(state.selected.as_ref().map(|m| m.name.as_str()), Some("Amoxicillin"));
    state.select_medicine("missing");
    assert!(state.selected.is_none());
}

#[test]
fn visible_medicines_follow_query() {
    let mut state = ActionsState { medicines: sample_medicines(), ..ActionsState::default() };
    assert_eq!(state.visible_medicines().len(), 3);
    state.medicine_query = "PRO".to_owned();
    let names: Vec<String> = state.visible_medicines().into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["Ibuprofen".to_owned()]);
}

// =============================================================
// filter_medicines
// =============================================================

#[test]
fn filter_medicines_is_case_insensitive_substring() {
    let list = sample_medicines();
    let hits = filter_medicines(&list, "cil");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Amoxicillin");
}

#[test]
fn filter_medicines_blank_query_keeps_all() {
    let list = sample_medicines();
    assert_eq!(filter_medicines(&list, "  ").len(), list.len());
}

#[test]
fn filter_medicines_no_match_is_empty() {
    assert!(filter_medicines(&sample_medicines(), "zzz").is_empty());
}

// =============================================================
// ActionsUpdate
// =============================================================

#[test]
fn apply_routes_each_update() {
    let mut state = ActionsState::default();
    state.apply(ActionsUpdate::Appointment(sample_appointment()));
    state.apply(ActionsUpdate::History(Some("Asthma".to_owned())));
    state.apply(ActionsUpdate::Medicines(sample_medicines()));
    assert_eq!(state.appointment.as_ref().map(|a| a.id.as_str()), Some("a-1"));
    assert_eq!(state.history_text(), "Asthma");
    assert_eq!(state.medicines.len(), 3);
    assert!(state.error.is_none());
}

#[test]
fn later_error_overwrites_earlier_error() {
    let mut state = ActionsState::default();
    state.apply(ActionsUpdate::Error("first".to_owned()));
    state.apply(ActionsUpdate::Error("second".to_owned()));
    assert_eq!(state.error.as_deref(), Some("second"));
}
