use serde::{Deserialize, Serialize};

use crate::error::{AlloyDbError, Result};

/// Tunable constants of the confidence model and composition checks.
///
/// Deserializes from camelCase JSON; missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub base_confidence: f64,
    pub known_element_bonus: f64,
    pub unknown_element_penalty: f64,
    pub confidence_floor: f64,
    pub confidence_ceiling: f64,
    /// Allowed deviation of the percentage total from 100 before rescaling.
    pub normalization_tolerance: f64,
    pub electronegativity_spread_limit: f64,
    /// Electronegativity assumed for elements without table data.
    pub unknown_electronegativity: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            base_confidence: 70.0,
            known_element_bonus: 5.0,
            unknown_element_penalty: 15.0,
            confidence_floor: 30.0,
            confidence_ceiling: 95.0,
            normalization_tolerance: 0.01,
            electronegativity_spread_limit: 1.5,
            unknown_electronegativity: 1.5,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| AlloyDbError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let values = [
            self.base_confidence,
            self.known_element_bonus,
            self.unknown_element_penalty,
            self.confidence_floor,
            self.confidence_ceiling,
            self.normalization_tolerance,
            self.electronegativity_spread_limit,
            self.unknown_electronegativity,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(AlloyDbError::Config("values must be finite".to_string()));
        }
        if self.confidence_floor > self.confidence_ceiling {
            return Err(AlloyDbError::Config(format!(
                "confidence floor {} exceeds ceiling {}",
                self.confidence_floor, self.confidence_ceiling
            )));
        }
        if !(0.0..=100.0).contains(&self.confidence_floor)
            || !(0.0..=100.0).contains(&self.confidence_ceiling)
        {
            return Err(AlloyDbError::Config(
                "confidence bounds must lie in [0, 100]".to_string(),
            ));
        }
        if self.normalization_tolerance < 0.0 {
            return Err(AlloyDbError::Config(
                "normalization tolerance must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Delay settings for the debounced recalculation trigger.
#[cfg(feature = "debounce")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebounceConfig {
    pub delay_ms: u64,
}

#[cfg(feature = "debounce")]
impl Default for DebounceConfig {
    fn default() -> Self {
        DebounceConfig { delay_ms: 300 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{"baseConfidence": 60}"#).unwrap();
        assert_eq!(config.base_confidence, 60.0);
        assert_eq!(config.confidence_ceiling, 95.0);
        assert_eq!(config.unknown_element_penalty, 15.0);
    }

    #[test]
    fn inverted_bounds_rejected() {
        let err =
            EngineConfig::from_json(r#"{"confidenceFloor": 90, "confidenceCeiling": 40}"#)
                .unwrap_err();
        assert!(matches!(err, AlloyDbError::Config(_)));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(EngineConfig::from_json("{").is_err());
        assert!(EngineConfig::from_json(r#"{"normalizationTolerance": -1}"#).is_err());
    }
}
