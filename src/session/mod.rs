mod controller;
mod fallback;
pub mod fsm;
mod patient;
mod symptoms;

pub use controller::{
    AnalysisOutcome, DisplayedResult, PendingAnalysis, ResultOrigin, SessionController,
    SessionSettings,
};
pub use fallback::{DEMO_NOTICE, DEMO_PRIMARY_DISEASE, demo_response};
pub use fsm::{SessionEvent, SessionState, SessionStateMachine};
pub use patient::{DEFAULT_AGE, DEFAULT_WEIGHT, PatientInputs};
pub use symptoms::SymptomSet;
