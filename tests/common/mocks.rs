use async_trait::async_trait;
use diagnosis_client::{
    Error, Result,
    prediction::{PredictionClient, PredictionRequest, PredictionResponse, SymptomCatalog},
    presenter::RenderedResult,
    ui::{DisplaySurface, Notification, NotificationSink},
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted answer for one `predict` call.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Success(PredictionResponse),
    Unreachable(String),
    Rejected {
        status: u16,
        message: String,
        suggestion: Option<String>,
    },
    Malformed(String),
}

impl MockOutcome {
    fn into_result(self) -> Result<PredictionResponse> {
        match self {
            Self::Success(response) => Ok(response),
            Self::Unreachable(cause) => Err(Error::network(cause)),
            Self::Rejected {
                status,
                message,
                suggestion,
            } => Err(Error::service(status, message, suggestion)),
            Self::Malformed(detail) => Err(Error::malformed(detail)),
        }
    }
}

/// Mock prediction client for testing
#[derive(Debug, Clone)]
pub struct MockPredictionClient {
    pub outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    pub requests: Arc<Mutex<Vec<PredictionRequest>>>,
    pub healthy: bool,
    pub catalog: Option<SymptomCatalog>,
}

impl MockPredictionClient {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            healthy: true,
            catalog: None,
        }
    }

    pub fn with_outcome(self, outcome: MockOutcome) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn unhealthy(mut self) -> Self {
        self.healthy = false;
        self
    }

    pub fn with_catalog(mut self, catalog: SymptomCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn get_requests(&self) -> Vec<PredictionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionClient for MockPredictionClient {
    async fn check_health(&self) -> bool {
        self.healthy
    }

    async fn predict(&self, request: PredictionRequest) -> Result<PredictionResponse> {
        self.requests.lock().unwrap().push(request);

        match self.outcomes.lock().unwrap().pop_front() {
            Some(outcome) => outcome.into_result(),
            None => Err(Error::internal("No mock outcome scripted")),
        }
    }

    async fn symptom_catalog(&self) -> Result<SymptomCatalog> {
        self.catalog
            .clone()
            .ok_or_else(|| Error::network("catalog unreachable (mock)"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Selection(Vec<String>),
    Shown(RenderedResult),
    Hidden,
    Loading(bool),
    Focused,
}

/// Display surface that records every call
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub events: Arc<Mutex<Vec<SurfaceEvent>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn shown_results(&self) -> Vec<RenderedResult> {
        self.get_events()
            .into_iter()
            .filter_map(|event| match event {
                SurfaceEvent::Shown(result) => Some(result),
                _ => None,
            })
            .collect()
    }

    pub fn last_selection(&self) -> Option<Vec<String>> {
        self.get_events().into_iter().rev().find_map(|event| match event {
            SurfaceEvent::Selection(symptoms) => Some(symptoms),
            _ => None,
        })
    }

    fn record(&self, event: SurfaceEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl DisplaySurface for RecordingSurface {
    fn show_selection(&self, symptoms: &[String]) {
        self.record(SurfaceEvent::Selection(symptoms.to_vec()));
    }

    fn show_result(&self, result: &RenderedResult) {
        self.record(SurfaceEvent::Shown(result.clone()));
    }

    fn hide_result(&self) {
        self.record(SurfaceEvent::Hidden);
    }

    fn set_loading(&self, loading: bool) {
        self.record(SurfaceEvent::Loading(loading));
    }

    fn focus_result(&self) {
        self.record(SurfaceEvent::Focused);
    }
}

/// Notification sink that records every message
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}
