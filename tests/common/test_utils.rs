use super::mocks::{MockPredictionClient, RecordingNotifier, RecordingSurface};
use diagnosis_client::{
    prediction::{PatientInfo, Prediction, PredictionClient, PredictionResponse, Recommendation},
    session::{SessionController, SessionSettings},
};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::time::Duration;

/// Handles onto the collaborators a test controller was built with.
pub struct TestHarness {
    pub client: MockPredictionClient,
    pub surface: RecordingSurface,
    pub notifier: RecordingNotifier,
}

pub fn create_test_settings(export_dir: PathBuf) -> SessionSettings {
    SessionSettings {
        dismiss_after: Duration::from_secs(5),
        export_dir,
    }
}

/// Create a controller around a mock client with recording sinks
pub fn create_test_controller(client: MockPredictionClient) -> (SessionController, TestHarness) {
    create_test_controller_in(client, std::env::temp_dir())
}

pub fn create_test_controller_in(
    client: MockPredictionClient,
    export_dir: PathBuf,
) -> (SessionController, TestHarness) {
    let surface = RecordingSurface::new();
    let notifier = RecordingNotifier::new();
    let controller = SessionController::new(
        Box::new(client.clone()),
        Box::new(surface.clone()),
        Box::new(notifier.clone()),
        create_test_settings(export_dir),
    );
    (
        controller,
        TestHarness {
            client,
            surface,
            notifier,
        },
    )
}

/// Create a controller around any client, e.g. the real HTTP one
pub fn create_controller_with_client(
    client: Box<dyn PredictionClient>,
) -> (SessionController, RecordingSurface, RecordingNotifier) {
    let surface = RecordingSurface::new();
    let notifier = RecordingNotifier::new();
    let controller = SessionController::new(
        client,
        Box::new(surface.clone()),
        Box::new(notifier.clone()),
        create_test_settings(std::env::temp_dir()),
    );
    (controller, surface, notifier)
}

/// A live-looking response, shaped like the service's high-confidence answer
pub fn create_mock_response(disease: &str, confidence: f64) -> PredictionResponse {
    PredictionResponse {
        primary_prediction: Prediction {
            disease: disease.to_string(),
            confidence,
        },
        top_predictions: vec![
            Prediction {
                disease: disease.to_string(),
                confidence,
            },
            Prediction {
                disease: "Allergic Rhinitis".to_string(),
                confidence: 12.3,
            },
        ],
        matched_symptoms: vec!["fever".to_string(), "cough".to_string()],
        total_symptoms_matched: 2,
        recommendation: Recommendation {
            level: "high_confidence".to_string(),
            urgency: "medium".to_string(),
            message: format!(
                "High confidence prediction ({:.1}%) indicates {}.",
                confidence, disease
            ),
            next_steps: Some(vec![
                "Consult healthcare provider for confirmation".to_string(),
                "Discuss treatment options".to_string(),
            ]),
            disclaimer: None,
        },
        patient_info: PatientInfo {
            age: 40,
            weight: 82.5,
        },
        timestamp: "2024-01-15T14:30:00.123456".to_string(),
    }
}

/// The same response as the service would put on the wire
pub fn create_mock_response_json(disease: &str, confidence: f64) -> Value {
    json!({
        "primary_prediction": {"disease": disease, "confidence": confidence},
        "top_predictions": [
            {"disease": disease, "confidence": confidence},
            {"disease": "Allergic Rhinitis", "confidence": 12.3}
        ],
        "matched_symptoms": ["fever", "cough"],
        "total_symptoms_matched": 2,
        "recommendation": {
            "level": "high_confidence",
            "urgency": "medium",
            "message": format!("High confidence prediction ({:.1}%) indicates {}.", confidence, disease),
            "next_steps": ["Consult healthcare provider for confirmation", "Discuss treatment options"],
            "disclaimer": "This is an AI prediction and should not replace professional medical diagnosis"
        },
        "patient_info": {"age": 40, "weight": 82.5},
        "timestamp": "2024-01-15T14:30:00.123456"
    })
}

/// Replaces every leaf with its JSON type so two documents can be compared by shape
pub fn json_shape(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), json_shape(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.first().map(json_shape).into_iter().collect()),
        Value::String(_) => json!("string"),
        Value::Number(_) => json!("number"),
        Value::Bool(_) => json!("bool"),
        Value::Null => Value::Null,
    }
}
