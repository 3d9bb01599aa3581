use std::cell::RefCell;

use super::*;
use crate::net::types::SubmissionResult;
use crate::state::toast::Notice;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    Notify(String),
    RefreshSession,
    RefreshView,
}

#[derive(Default)]
struct RecordingEffects {
    events: RefCell<Vec<Event>>,
}

impl RecordingEffects {
    fn count(&self, event: &Event) -> usize {
        self.events.borrow().iter().filter(|e| *e == event).count()
    }

    fn notices(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Notify(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }
}

impl AuthEffects for RecordingEffects {
    fn notify(&self, notice: Notice) {
        self.events.borrow_mut().push(Event::Notify(notice.description));
    }

    fn refresh_session(&self) {
        self.events.borrow_mut().push(Event::RefreshSession);
    }

    fn refresh_view(&self) {
        self.events.borrow_mut().push(Event::RefreshView);
    }
}

/// Begin an attempt, answer it, and settle it the way the page effect does.
fn answer(state: &mut SubmissionState, reducer: &mut ResultReducer, effects: &RecordingEffects, result: SubmissionResult) {
    let seq = state.begin().unwrap();
    // Pending state change re-runs the effect before the answer arrives.
    settle(state, reducer, effects);
    assert!(state.resolve(seq, result));
    settle(state, reducer, effects);
}

#[test]
fn settle_before_first_attempt_is_noop() {
    let effects = RecordingEffects::default();
    let mut reducer = ResultReducer::new(AuthFlow::Login);
    let mut state = SubmissionState::default();
    settle(&mut state, &mut reducer, &effects);
    assert_eq!(state, SubmissionState::default());
    assert!(effects.events.borrow().is_empty());
}

#[test]
fn success_disables_control_and_refreshes_once_across_reruns() {
    let effects = RecordingEffects::default();
    let mut reducer = ResultReducer::new(AuthFlow::Register);
    let mut state = SubmissionState::default();
    answer(&mut state, &mut reducer, &effects, SubmissionResult::Success);
    assert_eq!(state.control(), SubmitControl::DisabledSuccess);

    // mark_success changed the state, so the effect runs again on the same seq.
    settle(&mut state, &mut reducer, &effects);
    settle(&mut state, &mut reducer, &effects);

    assert_eq!(state.control(), SubmitControl::DisabledSuccess);
    assert_eq!(effects.count(&Event::RefreshSession), 1);
    assert_eq!(effects.count(&Event::RefreshView), 1);
    assert_eq!(effects.notices(), vec!["Account created successfully!".to_owned()]);
}

#[test]
fn failed_returns_control_to_ready_with_one_toast() {
    let effects = RecordingEffects::default();
    let mut reducer = ResultReducer::new(AuthFlow::Login);
    let mut state = SubmissionState::default();
    answer(&mut state, &mut reducer, &effects, SubmissionResult::Failed);
    settle(&mut state, &mut reducer, &effects);

    assert_eq!(state.control(), SubmitControl::Ready);
    assert_eq!(effects.notices(), vec!["Invalid credentials!".to_owned()]);
    assert_eq!(effects.count(&Event::RefreshSession), 0);
}

#[test]
fn resubmitting_after_failure_toasts_each_attempt() {
    let effects = RecordingEffects::default();
    let mut reducer = ResultReducer::new(AuthFlow::Register);
    let mut state = SubmissionState::default();
    answer(&mut state, &mut reducer, &effects, SubmissionResult::Failed);
    assert_eq!(state.control(), SubmitControl::Ready);
    answer(&mut state, &mut reducer, &effects, SubmissionResult::Failed);

    assert_eq!(state.control(), SubmitControl::Ready);
    assert_eq!(
        effects.notices(),
        vec!["Failed to create account!".to_owned(), "Failed to create account!".to_owned()]
    );
}
