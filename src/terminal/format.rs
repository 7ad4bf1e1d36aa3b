use crate::presenter::RenderedResult;
use std::fmt::Write;

pub const EMPTY_SELECTION: &str = "Selected symptoms will appear here";

pub fn format_selection(symptoms: &[String]) -> String {
    if symptoms.is_empty() {
        return format!("({})", EMPTY_SELECTION);
    }
    let tags: Vec<String> = symptoms.iter().map(|s| format!("[{}]", s)).collect();
    format!("Selected: {}", tags.join(" "))
}

pub fn format_result(result: &RenderedResult) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "== Primary Prediction ==");
    let _ = writeln!(out, "{}", result.primary.disease);
    let _ = writeln!(out, "{}", result.primary.confidence_label);

    let _ = writeln!(out, "\n== {} ==", result.matched.heading);
    let _ = writeln!(out, "{}", result.matched.symptoms.join(", "));

    let _ = writeln!(out, "\n== All Predictions ==");
    for prediction in &result.predictions {
        let _ = writeln!(out, "  {:<32} {:>7}", prediction.disease, prediction.confidence);
    }

    let recommendation = &result.recommendation;
    let _ = writeln!(
        out,
        "\n== Medical Recommendation [{}] ({}) ==",
        recommendation.urgency_label, recommendation.level_class
    );
    let _ = writeln!(out, "{}", recommendation.message);

    if let Some(steps) = &recommendation.next_steps {
        let _ = writeln!(out, "Recommended Next Steps:");
        for step in steps {
            let _ = writeln!(out, "  - {}", step);
        }
    }

    if let Some(disclaimer) = &recommendation.disclaimer {
        let _ = writeln!(out, "Disclaimer: {}", disclaimer);
    }

    let _ = write!(out, "\nPatient Information: {}", result.patient_summary);
    out
}
