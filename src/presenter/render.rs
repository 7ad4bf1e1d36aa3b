use super::types::*;
use crate::prediction::{Prediction, PredictionResponse};
use chrono::{DateTime, Local, NaiveDateTime};

pub const EXPORT_DISCLAIMER: &str =
    "Disclaimer: This is an AI prediction and should not replace professional medical diagnosis.";

const LOCAL_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub fn render(response: &PredictionResponse) -> RenderedResult {
    let primary = &response.primary_prediction;
    let confidence = format_confidence(primary.confidence);
    let recommendation = &response.recommendation;
    let urgency = Urgency::parse(&recommendation.urgency);

    RenderedResult {
        primary: PrimaryBlock {
            disease: primary.disease.clone(),
            confidence_label: format!("{}% Confidence", confidence),
            confidence,
        },
        matched: MatchedBlock {
            heading: format!("Matched Symptoms ({})", response.total_symptoms_matched),
            count: response.total_symptoms_matched,
            symptoms: response.matched_symptoms.clone(),
        },
        predictions: response.top_predictions.iter().map(rank).collect(),
        recommendation: RecommendationBlock {
            level_class: recommendation.level.replace('_', "-"),
            urgency_label: urgency.as_str().to_uppercase(),
            urgency,
            message: recommendation.message.clone(),
            next_steps: recommendation.next_steps.clone(),
            disclaimer: recommendation.disclaimer.clone(),
        },
        patient_summary: format!(
            "Age: {}, Weight: {}kg | Analysis Date: {}",
            response.patient_info.age,
            response.patient_info.weight,
            format_timestamp(&response.timestamp)
        ),
    }
}

fn rank(prediction: &Prediction) -> RankedPrediction {
    RankedPrediction {
        disease: prediction.disease.clone(),
        confidence: format!("{}%", format_confidence(prediction.confidence)),
    }
}

fn format_confidence(confidence: f64) -> String {
    format!("{:.1}", confidence)
}

/// Renders an ISO-8601 timestamp in local time. Offset-less timestamps are
/// taken to be local already; unparseable input is returned as-is.
pub fn format_timestamp(timestamp: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return parsed.with_timezone(&Local).format(LOCAL_FORMAT).to_string();
    }
    match NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => naive.format(LOCAL_FORMAT).to_string(),
        Err(_) => timestamp.to_string(),
    }
}

pub fn to_export_text(
    response: &PredictionResponse,
    selection: &[String],
    generated_at: DateTime<Local>,
) -> String {
    let primary = &response.primary_prediction;
    format!(
        "AI Medical Diagnostic Results\n\
         ============================\n\
         \n\
         Primary Prediction: {}\n\
         Confidence: {}%\n\
         \n\
         Symptoms Analyzed: {}\n\
         \n\
         Generated on: {}\n\
         \n\
         {}\n",
        primary.disease,
        format_confidence(primary.confidence),
        selection.join(", "),
        generated_at.format(LOCAL_FORMAT),
        EXPORT_DISCLAIMER
    )
}

pub fn export_filename(generated_at: DateTime<Local>) -> String {
    format!("ai-diagnosis-{}.txt", generated_at.timestamp_millis())
}
