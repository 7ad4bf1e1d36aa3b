use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub symptoms: Vec<String>,
    pub age: u32,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub disease: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub level: String,
    pub urgency: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub age: u32,
    pub weight: f64,
}

/// Body of a successful `/api/predict` call. Locally synthesized fallback
/// results use the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub primary_prediction: Prediction,
    pub top_predictions: Vec<Prediction>,
    pub matched_symptoms: Vec<String>,
    pub total_symptoms_matched: usize,
    pub recommendation: Recommendation,
    pub patient_info: PatientInfo,
    pub timestamp: String,
}

impl PredictionResponse {
    /// Semantic checks that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        check_confidence(&self.primary_prediction)?;
        if self.top_predictions.is_empty() {
            return Err(Error::malformed("top_predictions is empty"));
        }
        for prediction in &self.top_predictions {
            check_confidence(prediction)?;
        }
        Ok(())
    }
}

fn check_confidence(prediction: &Prediction) -> Result<()> {
    let confidence = prediction.confidence;
    if !confidence.is_finite() || !(0.0..=100.0).contains(&confidence) {
        return Err(Error::malformed(format!(
            "confidence {} for '{}' is outside 0-100",
            confidence, prediction.disease
        )));
    }
    Ok(())
}

/// Body carried by non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: Option<bool>,
    #[serde(default)]
    pub total_symptoms: Option<usize>,
    #[serde(default)]
    pub total_diseases: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SymptomCatalog {
    pub total_count: usize,
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<String>>,
}
