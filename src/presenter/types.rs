use serde::Serialize;

/// Presentation-ready document built from a `PredictionResponse`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedResult {
    pub primary: PrimaryBlock,
    pub matched: MatchedBlock,
    pub predictions: Vec<RankedPrediction>,
    pub recommendation: RecommendationBlock,
    pub patient_summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimaryBlock {
    pub disease: String,
    /// One decimal place, e.g. `"75.5"`.
    pub confidence: String,
    /// e.g. `"75.5% Confidence"`.
    pub confidence_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedBlock {
    pub heading: String,
    pub count: usize,
    pub symptoms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPrediction {
    pub disease: String,
    pub confidence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationBlock {
    pub level_class: String,
    pub urgency: Urgency,
    pub urgency_label: String,
    pub message: String,
    pub next_steps: Option<Vec<String>>,
    pub disclaimer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Urgency {
    Low,
    Medium,
    High,
    /// Unrecognized values are kept as sent.
    Other(String),
}

impl Urgency {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Other(raw) => raw,
        }
    }
}

impl From<Urgency> for String {
    fn from(urgency: Urgency) -> Self {
        urgency.as_str().to_string()
    }
}
