use serde::{Deserialize, Serialize};

use crate::derived::DerivedProperties;
use crate::mixing::Mixture;

/// Predicted material properties, rounded for presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictedProperties {
    /// MPa
    pub tensile_strength: f64,
    /// MPa
    pub yield_strength: f64,
    /// g/cm³, three decimals
    pub density: f64,
    /// W/(m·K)
    pub thermal_conductivity: f64,
    /// MS/m
    pub electrical_conductivity: f64,
    /// HV
    pub hardness: f64,
    /// °C, never negative
    pub melting_point: f64,
    /// GPa
    pub elastic_modulus: f64,
    pub corrosion_resistance: f64,
    pub formability: f64,
    pub weldability: f64,
    pub machinability: f64,
}

impl PredictedProperties {
    pub fn from_parts(m: &Mixture, derived: &DerivedProperties) -> Self {
        PredictedProperties {
            tensile_strength: m.strength.round(),
            yield_strength: derived.yield_strength.round(),
            density: round_to(m.density, 3),
            thermal_conductivity: m.thermal_conductivity.round(),
            electrical_conductivity: m.electrical_conductivity.round(),
            hardness: m.hardness.round(),
            melting_point: m.melting_point.max(0.0).round(),
            elastic_modulus: m.elastic_modulus.round(),
            corrosion_resistance: derived.corrosion_resistance.round(),
            formability: derived.formability.round(),
            weldability: derived.weldability.round(),
            machinability: derived.machinability.round(),
        }
    }
}

/// Aggregate scores, all integers in 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub performance_score: u8,
    pub cost_score: u8,
    pub sustainability_score: u8,
    pub overall_score: u8,
    pub confidence: u8,
}

/// Snapshot produced by one prediction.
///
/// When `is_valid` is false, `properties` and `scores` are zeroed
/// placeholders and `validation_message` explains why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub properties: PredictedProperties,
    pub scores: Scores,
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,
}

impl PredictionResult {
    pub fn invalid(message: impl Into<String>) -> Self {
        PredictionResult {
            properties: PredictedProperties::default(),
            scores: Scores::default(),
            is_valid: false,
            validation_message: Some(message.into()),
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_density_to_three_places() {
        assert_eq!(round_to(7.87449, 3), 7.874);
        assert_eq!(round_to(2.98851, 3), 2.989);
    }

    #[test]
    fn invalid_result_is_zeroed() {
        let r = PredictionResult::invalid("No elements selected");
        assert!(!r.is_valid);
        assert_eq!(r.properties, PredictedProperties::default());
        assert_eq!(r.scores, Scores::default());
        assert_eq!(r.validation_message.as_deref(), Some("No elements selected"));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&PredictionResult::invalid("x")).unwrap();
        assert!(json.contains("\"isValid\":false"));
        assert!(json.contains("\"tensileStrength\""));
        assert!(json.contains("\"validationMessage\":\"x\""));
    }
}
