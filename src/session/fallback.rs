use super::PatientInputs;
use crate::prediction::{PatientInfo, Prediction, PredictionResponse, Recommendation};
use chrono::Utc;

pub const DEMO_PRIMARY_DISEASE: &str = "Common Cold";

pub const DEMO_NOTICE: &str =
    "This is a demo result as the diagnostic service is not available.";

const DEMO_RANKING: [(&str, f64); 3] = [
    (DEMO_PRIMARY_DISEASE, 75.5),
    ("Flu", 68.2),
    ("Viral Infection", 45.1),
];

/// Illustrative stand-in shown when the prediction service cannot be reached.
/// It has the same shape as a live response so it renders through the same path.
pub fn demo_response(symptoms: &[String], patient: PatientInputs) -> PredictionResponse {
    let top_predictions: Vec<Prediction> = DEMO_RANKING
        .iter()
        .map(|(disease, confidence)| Prediction {
            disease: disease.to_string(),
            confidence: *confidence,
        })
        .collect();

    PredictionResponse {
        primary_prediction: top_predictions[0].clone(),
        top_predictions,
        matched_symptoms: symptoms.to_vec(),
        total_symptoms_matched: symptoms.len(),
        recommendation: Recommendation {
            level: "moderate_confidence".to_string(),
            urgency: "medium".to_string(),
            message: format!(
                "Moderate confidence prediction suggests {}. {}",
                DEMO_PRIMARY_DISEASE, DEMO_NOTICE
            ),
            next_steps: Some(vec![
                "Rest and stay hydrated".to_string(),
                "Monitor symptoms".to_string(),
                "Consult healthcare provider if symptoms worsen".to_string(),
            ]),
            disclaimer: None,
        },
        patient_info: PatientInfo {
            age: patient.age,
            weight: patient.weight,
        },
        timestamp: Utc::now().to_rfc3339(),
    }
}
