use super::fallback::demo_response;
use super::fsm::{SessionEvent, SessionState, SessionStateMachine};
use super::{PatientInputs, SymptomSet};
use crate::{
    Error, Result,
    config::Config,
    prediction::{PredictionClient, PredictionRequest, PredictionResponse, SymptomCatalog},
    presenter::{RenderedResult, export_filename, render, to_export_text},
    ui::{DisplaySurface, Notification, NotificationSink, Severity},
};
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, error, info, warn};

const SERVICE_UNAVAILABLE_NOTICE: &str =
    "Backend API is not available. Please start the backend server.";
const DEMO_RESULT_NOTICE: &str =
    "Showing demo results - Please start the backend server for real predictions";
const EMPTY_SELECTION_NOTICE: &str = "Please add at least one symptom";

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub dismiss_after: Duration,
    pub export_dir: PathBuf,
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            dismiss_after: config.notifications.dismiss_after(),
            export_dir: PathBuf::from(&config.export.directory),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultOrigin {
    Live,
    Demo,
}

#[derive(Debug, Clone)]
pub struct DisplayedResult {
    pub response: PredictionResponse,
    pub rendered: RenderedResult,
    pub origin: ResultOrigin,
}

/// An analysis that has been dispatched but not yet applied.
#[derive(Debug, Clone)]
pub struct PendingAnalysis {
    generation: u64,
    request: PredictionRequest,
}

impl PendingAnalysis {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &PredictionRequest {
        &self.request
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Displayed,
    DemoDisplayed,
    /// A newer analysis or a clear superseded this one; nothing was changed.
    Stale,
}

pub struct SessionController {
    client: Box<dyn PredictionClient>,
    surface: Box<dyn DisplaySurface>,
    notifier: Box<dyn NotificationSink>,
    settings: SessionSettings,
    fsm: SessionStateMachine,
    symptoms: SymptomSet,
    patient: PatientInputs,
    current: Option<DisplayedResult>,
    generation: u64,
}

impl SessionController {
    pub fn new(
        client: Box<dyn PredictionClient>,
        surface: Box<dyn DisplaySurface>,
        notifier: Box<dyn NotificationSink>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            client,
            surface,
            notifier,
            settings,
            fsm: SessionStateMachine::new(),
            symptoms: SymptomSet::new(),
            patient: PatientInputs::default(),
            current: None,
            generation: 0,
        }
    }

    /// Probes the service and draws the initial selection.
    pub async fn initialize(&mut self) -> bool {
        info!("Diagnostic session initialized");
        self.surface.show_selection(self.symptoms.list());

        let healthy = self.client.check_health().await;
        if !healthy {
            self.notify(SERVICE_UNAVAILABLE_NOTICE, Severity::Warning);
        }
        healthy
    }

    pub fn state(&self) -> SessionState {
        self.fsm.current_state()
    }

    pub fn symptoms(&self) -> &SymptomSet {
        &self.symptoms
    }

    pub fn patient(&self) -> PatientInputs {
        self.patient
    }

    pub fn current_result(&self) -> Option<&DisplayedResult> {
        self.current.as_ref()
    }

    pub fn add_symptoms(&mut self, raw: &str) -> usize {
        let added = self.symptoms.add_from_text(raw);
        debug!("Added {} symptoms from input", added);
        self.surface.show_selection(self.symptoms.list());
        added
    }

    pub fn pick_symptom(&mut self, symptom: &str) -> bool {
        let added = self.symptoms.add_one(symptom);
        if added {
            self.surface.show_selection(self.symptoms.list());
        }
        added
    }

    pub fn remove_symptom(&mut self, symptom: &str) -> bool {
        let removed = self.symptoms.remove(symptom);
        self.surface.show_selection(self.symptoms.list());
        removed
    }

    pub fn read_patient_inputs(&mut self, age_raw: &str, weight_raw: &str) -> PatientInputs {
        self.patient = PatientInputs::read(age_raw, weight_raw);
        debug!(
            "Patient inputs set to age={}, weight={}",
            self.patient.age, self.patient.weight
        );
        self.patient
    }

    pub async fn analyze(&mut self) -> Result<AnalysisOutcome> {
        let pending = self.begin_analysis()?;
        let outcome = self.client.predict(pending.request.clone()).await;
        self.complete_analysis(pending, outcome)
    }

    /// Validates the selection and moves to `Analyzing`. The returned request
    /// must be handed back to `complete_analysis` with the service's answer.
    pub fn begin_analysis(&mut self) -> Result<PendingAnalysis> {
        if self.fsm.is_analyzing() {
            warn!("Analysis requested while another is outstanding");
            return Err(Error::Busy);
        }

        if self.symptoms.is_empty() {
            self.notify(EMPTY_SELECTION_NOTICE, Severity::Error);
            return Err(Error::validation(EMPTY_SELECTION_NOTICE));
        }

        self.fsm.transition(SessionEvent::AnalyzeRequested)?;
        self.generation += 1;
        self.surface.set_loading(true);

        let request = PredictionRequest {
            symptoms: self.symptoms.list().to_vec(),
            age: self.patient.age,
            weight: self.patient.weight,
        };

        info!(
            "Analyzing {} symptoms (generation {})",
            request.symptoms.len(),
            self.generation
        );

        Ok(PendingAnalysis {
            generation: self.generation,
            request,
        })
    }

    pub fn complete_analysis(
        &mut self,
        pending: PendingAnalysis,
        outcome: Result<PredictionResponse>,
    ) -> Result<AnalysisOutcome> {
        if pending.generation != self.generation || !self.fsm.is_analyzing() {
            debug!(
                "Discarding stale analysis result (generation {}, current {})",
                pending.generation, self.generation
            );
            return Ok(AnalysisOutcome::Stale);
        }

        self.surface.set_loading(false);

        match outcome {
            Ok(response) => {
                self.fsm.transition(SessionEvent::PredictionReceived)?;
                info!(
                    "Displaying prediction '{}' ({:.1}%)",
                    response.primary_prediction.disease, response.primary_prediction.confidence
                );
                self.display(response, ResultOrigin::Live);
                Ok(AnalysisOutcome::Displayed)
            }
            Err(e) if e.is_network() => {
                warn!("Prediction service unreachable, showing demo result: {}", e);
                self.fsm.transition(SessionEvent::ServiceUnreachable)?;

                let request = pending.request;
                let patient = PatientInputs {
                    age: request.age,
                    weight: request.weight,
                };
                self.display(demo_response(&request.symptoms, patient), ResultOrigin::Demo);
                self.notify(DEMO_RESULT_NOTICE, Severity::Info);
                Ok(AnalysisOutcome::DemoDisplayed)
            }
            Err(e) => {
                error!("Analysis error: {}", e);
                self.fsm.transition(SessionEvent::ServiceRejected)?;
                self.current = None;
                self.surface.hide_result();
                self.notify(&e.user_message(), Severity::Error);
                Err(e)
            }
        }
    }

    // Live and demo responses both go through here.
    fn display(&mut self, response: PredictionResponse, origin: ResultOrigin) {
        let rendered = render(&response);
        self.surface.show_result(&rendered);
        self.surface.focus_result();
        self.current = Some(DisplayedResult {
            response,
            rendered,
            origin,
        });
    }

    pub fn clear(&mut self) {
        let was_analyzing = self.fsm.is_analyzing();

        self.symptoms.clear();
        self.patient.reset();
        self.current = None;
        self.generation += 1;

        if let Err(e) = self.fsm.transition(SessionEvent::Cleared) {
            warn!("Failed to clear session state: {}", e);
        }

        if was_analyzing {
            self.surface.set_loading(false);
        }
        self.surface.hide_result();
        self.surface.show_selection(self.symptoms.list());
    }

    pub fn export_text(&self, generated_at: DateTime<Local>) -> Result<String> {
        let current = self.current.as_ref().ok_or(Error::NoResult)?;
        Ok(to_export_text(
            &current.response,
            self.symptoms.list(),
            generated_at,
        ))
    }

    /// Writes the displayed result to `ai-diagnosis-<millis>.txt` in the export directory.
    pub async fn export(&self) -> Result<PathBuf> {
        let generated_at = Local::now();
        let text = match self.export_text(generated_at) {
            Ok(text) => text,
            Err(e) => {
                self.notify(&e.user_message(), Severity::Warning);
                return Err(e);
            }
        };

        let path = self.settings.export_dir.join(export_filename(generated_at));
        if let Err(e) = tokio::fs::write(&path, text).await {
            error!("Failed to write export to {}: {}", path.display(), e);
            self.notify("Failed to export results", Severity::Error);
            return Err(e.into());
        }

        info!("Exported results to {}", path.display());
        self.notify("Results exported successfully", Severity::Success);
        Ok(path)
    }

    pub async fn symptom_catalog(&self) -> Result<SymptomCatalog> {
        self.client.symptom_catalog().await.inspect_err(|e| {
            warn!("Symptom catalog unavailable: {}", e);
            self.notify("Symptom catalog is not available", Severity::Warning);
        })
    }

    fn notify(&self, message: &str, severity: Severity) {
        self.notifier.notify(Notification {
            message: message.to_string(),
            severity,
            dismiss_after: self.settings.dismiss_after,
        });
    }
}
