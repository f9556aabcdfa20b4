use imagelab_core::{GenPhase, GenState};

#[test]
fn begin_request_enters_loading() {
    let mut state = GenState::new();
    assert_eq!(state.phase(), GenPhase::Idle);
    let token = state.begin_request();
    assert_eq!(state.phase(), GenPhase::Loading);
    assert!(state.is_current(token));
}

#[test]
fn current_token_settles_each_outcome() {
    let mut state = GenState::new();
    let token = state.begin_request();
    assert!(state.finish_success(token));
    assert_eq!(state.phase(), GenPhase::Success);

    let token = state.begin_request();
    assert!(state.finish_empty(token));
    assert_eq!(state.phase(), GenPhase::Empty);

    let token = state.begin_request();
    assert!(state.finish_failure(token));
    assert_eq!(state.phase(), GenPhase::Failed);
}

#[test]
fn newer_submission_stales_older_token() {
    let mut state = GenState::new();
    let first = state.begin_request();
    let second = state.begin_request();
    assert!(!state.is_current(first));

    assert!(!state.finish_success(first));
    assert_eq!(state.phase(), GenPhase::Loading);

    assert!(state.finish_success(second));
    assert_eq!(state.phase(), GenPhase::Success);
}

#[test]
fn stale_failure_does_not_clobber_result() {
    let mut state = GenState::new();
    let first = state.begin_request();
    let second = state.begin_request();
    assert!(state.finish_success(second));

    assert!(!state.finish_failure(first));
    assert_eq!(state.phase(), GenPhase::Success);
}

#[test]
fn settled_token_cannot_finish_twice() {
    let mut state = GenState::new();
    let token = state.begin_request();
    assert!(state.finish_success(token));
    assert!(!state.finish_failure(token));
    assert_eq!(state.phase(), GenPhase::Success);
}

#[test]
fn reset_result_returns_settled_phases_to_idle() {
    let mut state = GenState::new();
    let token = state.begin_request();
    assert!(state.finish_success(token));
    state.reset_result();
    assert_eq!(state.phase(), GenPhase::Idle);

    let token = state.begin_request();
    assert!(state.finish_failure(token));
    state.reset_result();
    assert_eq!(state.phase(), GenPhase::Idle);
}

#[test]
fn reset_result_leaves_inflight_request_untouched() {
    let mut state = GenState::new();
    let token = state.begin_request();
    state.reset_result();
    assert_eq!(state.phase(), GenPhase::Loading);
    assert!(state.is_current(token));
    assert!(state.finish_success(token));
    assert_eq!(state.phase(), GenPhase::Success);
}
