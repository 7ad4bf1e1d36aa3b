use crate::presenter::RenderedResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient message. The sink must remove it once `dismiss_after` elapses.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub dismiss_after: Duration,
}

pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Where rendered results and the current selection are shown.
pub trait DisplaySurface: Send + Sync {
    fn show_selection(&self, symptoms: &[String]);

    fn show_result(&self, result: &RenderedResult);

    fn hide_result(&self);

    fn set_loading(&self, loading: bool);

    fn focus_result(&self);
}
