use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Service error ({status}): {message}")]
    Service {
        status: u16,
        message: String,
        suggestion: Option<String>,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("An analysis is already in progress")]
    Busy,

    #[error("FSM error: {0}")]
    Fsm(String),

    #[error("No result to export")]
    NoResult,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn service(status: u16, msg: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::Service {
            status,
            message: msg.into(),
            suggestion,
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn fsm(msg: impl Into<String>) -> Self {
        Self::Fsm(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Text safe to show to the user. Transport and decoding details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Service {
                message,
                suggestion: Some(suggestion),
                ..
            } => format!("Analysis failed: {}. {}", message, suggestion),
            Self::Service { message, .. } => format!("Analysis failed: {}", message),
            Self::Network(_) => "The diagnostic service is not reachable".to_string(),
            Self::MalformedResponse(_) => {
                "Analysis failed: the diagnostic service returned an unexpected response"
                    .to_string()
            }
            Self::Busy => "An analysis is already in progress".to_string(),
            Self::NoResult => "There are no results to export yet".to_string(),
            _ => "An unexpected error occurred".to_string(),
        }
    }
}
