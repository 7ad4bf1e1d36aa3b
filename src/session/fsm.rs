use crate::{Error, Result};
use tracing::{debug, info, warn};

// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Analyzing,
    Displayed,
    DemoDisplayed,
}

// Session events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    AnalyzeRequested,
    PredictionReceived,
    ServiceUnreachable,
    ServiceRejected,
    Cleared,
}

pub struct SessionStateMachine {
    state: SessionState,
}

impl Default for SessionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStateMachine {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    pub fn current_state(&self) -> SessionState {
        self.state
    }

    pub fn is_analyzing(&self) -> bool {
        self.state == SessionState::Analyzing
    }

    pub fn has_result(&self) -> bool {
        matches!(
            self.state,
            SessionState::Displayed | SessionState::DemoDisplayed
        )
    }

    pub fn transition(&mut self, event: SessionEvent) -> Result<SessionState> {
        let old_state = self.state;
        debug!(
            "🔄 Session processing event {:?} in state {:?}",
            event, old_state
        );

        let new_state = match (old_state, event) {
            (
                SessionState::Idle | SessionState::Displayed | SessionState::DemoDisplayed,
                SessionEvent::AnalyzeRequested,
            ) => SessionState::Analyzing,
            (SessionState::Analyzing, SessionEvent::PredictionReceived) => SessionState::Displayed,
            (SessionState::Analyzing, SessionEvent::ServiceUnreachable) => {
                SessionState::DemoDisplayed
            }
            (SessionState::Analyzing, SessionEvent::ServiceRejected) => SessionState::Idle,
            (_, SessionEvent::Cleared) => SessionState::Idle,
            _ => {
                warn!(
                    "❌ Invalid session transition from {:?} with event {:?}",
                    old_state, event
                );
                return Err(Error::fsm(format!(
                    "Invalid transition from {:?} with event {:?}",
                    old_state, event
                )));
            }
        };

        if old_state != new_state {
            info!(
                "🎯 Session state transition: {:?} -> {:?} (event: {:?})",
                old_state, new_state, event
            );
        }

        self.state = new_state;
        Ok(new_state)
    }
}
