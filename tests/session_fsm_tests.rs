use diagnosis_client::{
    Error,
    session::fsm::{SessionEvent, SessionState, SessionStateMachine},
};
use pretty_assertions::assert_eq;

#[test]
fn test_fsm_initial_state() {
    let fsm = SessionStateMachine::new();
    assert_eq!(fsm.current_state(), SessionState::Idle);
    assert!(!fsm.is_analyzing());
    assert!(!fsm.has_result());
}

#[test]
fn test_live_result_flow() {
    let mut fsm = SessionStateMachine::new();

    // Idle -> Analyzing
    fsm.transition(SessionEvent::AnalyzeRequested).unwrap();
    assert!(fsm.is_analyzing());

    // Analyzing -> Displayed
    fsm.transition(SessionEvent::PredictionReceived).unwrap();
    assert_eq!(fsm.current_state(), SessionState::Displayed);
    assert!(fsm.has_result());

    // Displayed -> Idle
    fsm.transition(SessionEvent::Cleared).unwrap();
    assert_eq!(fsm.current_state(), SessionState::Idle);
}

#[test]
fn test_degraded_flow_reaches_demo_state() {
    let mut fsm = SessionStateMachine::new();

    fsm.transition(SessionEvent::AnalyzeRequested).unwrap();
    let state = fsm.transition(SessionEvent::ServiceUnreachable).unwrap();

    assert_eq!(state, SessionState::DemoDisplayed);
    assert!(fsm.has_result());
}

#[test]
fn test_rejection_returns_to_idle() {
    let mut fsm = SessionStateMachine::new();

    fsm.transition(SessionEvent::AnalyzeRequested).unwrap();
    fsm.transition(SessionEvent::ServiceRejected).unwrap();

    assert_eq!(fsm.current_state(), SessionState::Idle);
    assert!(!fsm.has_result());
}

#[test]
fn test_reanalysis_from_displayed_states() {
    for outcome in [
        SessionEvent::PredictionReceived,
        SessionEvent::ServiceUnreachable,
    ] {
        let mut fsm = SessionStateMachine::new();
        fsm.transition(SessionEvent::AnalyzeRequested).unwrap();
        fsm.transition(outcome).unwrap();

        fsm.transition(SessionEvent::AnalyzeRequested).unwrap();
        assert!(fsm.is_analyzing());
    }
}

#[test]
fn test_invalid_transitions() {
    let mut fsm = SessionStateMachine::new();

    // No request outstanding
    let result = fsm.transition(SessionEvent::PredictionReceived);
    assert!(matches!(result, Err(Error::Fsm(_))));
    assert_eq!(fsm.current_state(), SessionState::Idle);

    // A second analysis cannot start while one is outstanding
    fsm.transition(SessionEvent::AnalyzeRequested).unwrap();
    assert!(fsm.transition(SessionEvent::AnalyzeRequested).is_err());
    assert_eq!(fsm.current_state(), SessionState::Analyzing);
}

#[test]
fn test_clear_is_accepted_in_every_state() {
    let mut fsm = SessionStateMachine::new();
    assert!(fsm.transition(SessionEvent::Cleared).is_ok());

    fsm.transition(SessionEvent::AnalyzeRequested).unwrap();
    fsm.transition(SessionEvent::Cleared).unwrap();
    assert_eq!(fsm.current_state(), SessionState::Idle);
}
