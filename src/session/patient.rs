use serde::{Deserialize, Serialize};

pub const DEFAULT_AGE: u32 = 25;
pub const DEFAULT_WEIGHT: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientInputs {
    pub age: u32,
    pub weight: f64,
}

impl Default for PatientInputs {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            weight: DEFAULT_WEIGHT,
        }
    }
}

impl PatientInputs {
    /// Parses raw form values, substituting the defaults for anything that
    /// is not a usable number. Never fails.
    pub fn read(age_raw: &str, weight_raw: &str) -> Self {
        Self {
            age: parse_age(age_raw).unwrap_or(DEFAULT_AGE),
            weight: parse_weight(weight_raw).unwrap_or(DEFAULT_WEIGHT),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn parse_age(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    raw.parse::<u32>().ok().or_else(|| {
        // "40.5" reads as 40
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0 && *v <= u32::MAX as f64)
            .map(|v| v.trunc() as u32)
    })
}

fn parse_weight(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
