//! Match predicted properties against caller-supplied bounds.

use serde::{Deserialize, Serialize};

use crate::prediction::PredictedProperties;

/// Margin between melting point and maximum service temperature for a
/// full thermal score, in °C.
const MELTING_SAFETY_MARGIN: f64 = 100.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Requirements {
    pub min_tensile_strength: Option<f64>,
    pub max_tensile_strength: Option<f64>,
    pub min_yield_strength: Option<f64>,
    pub max_yield_strength: Option<f64>,
    pub min_density: Option<f64>,
    pub max_density: Option<f64>,
    pub min_elastic_modulus: Option<f64>,
    pub max_elastic_modulus: Option<f64>,
    pub min_operating_temp: Option<f64>,
    pub max_operating_temp: Option<f64>,
    pub min_thermal_conductivity: Option<f64>,
    pub max_thermal_conductivity: Option<f64>,
    pub min_electrical_conductivity: Option<f64>,
    pub max_electrical_conductivity: Option<f64>,
    pub min_corrosion_resistance: Option<f64>,
}

/// Per-category match scores in [0, 1]. A category without constraints
/// scores 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementMatch {
    pub mechanical: f64,
    pub thermal: f64,
    pub electrical: f64,
    pub environmental: f64,
}

impl RequirementMatch {
    /// Mean of the constrained categories, 0.5 when nothing was constrained.
    pub fn overall(&self) -> f64 {
        mean_or(
            &[self.mechanical, self.thermal, self.electrical, self.environmental]
                .into_iter()
                .filter(|&s| s > 0.0)
                .collect::<Vec<_>>(),
            0.5,
        )
    }
}

impl Requirements {
    pub fn evaluate(&self, p: &PredictedProperties) -> RequirementMatch {
        RequirementMatch {
            mechanical: self.mechanical(p),
            thermal: self.thermal(p),
            electrical: self.electrical(p),
            environmental: self.environmental(p),
        }
    }

    fn mechanical(&self, p: &PredictedProperties) -> f64 {
        let mut scores = Vec::new();
        push_range(&mut scores, p.tensile_strength, self.min_tensile_strength, self.max_tensile_strength);
        push_range(&mut scores, p.yield_strength, self.min_yield_strength, self.max_yield_strength);
        push_range(&mut scores, p.density, self.min_density, self.max_density);
        push_range(&mut scores, p.elastic_modulus, self.min_elastic_modulus, self.max_elastic_modulus);
        mean_or(&scores, 0.0)
    }

    fn thermal(&self, p: &PredictedProperties) -> f64 {
        let mut scores = Vec::new();
        if p.melting_point > 0.0 {
            if let Some(max_temp) = self.max_operating_temp {
                scores.push(if p.melting_point >= max_temp + MELTING_SAFETY_MARGIN {
                    1.0
                } else if p.melting_point >= max_temp {
                    0.7
                } else {
                    0.1
                });
            }
            if self.min_operating_temp.is_some() {
                // low-temperature behaviour is not modelled
                scores.push(0.8);
            }
        }
        push_range(
            &mut scores,
            p.thermal_conductivity,
            self.min_thermal_conductivity,
            self.max_thermal_conductivity,
        );
        mean_or(&scores, 0.0)
    }

    fn electrical(&self, p: &PredictedProperties) -> f64 {
        let mut scores = Vec::new();
        push_range(
            &mut scores,
            p.electrical_conductivity,
            self.min_electrical_conductivity,
            self.max_electrical_conductivity,
        );
        mean_or(&scores, 0.0)
    }

    fn environmental(&self, p: &PredictedProperties) -> f64 {
        let mut scores = Vec::new();
        if let Some(min) = self.min_corrosion_resistance {
            if p.corrosion_resistance > 0.0 && min > 0.0 {
                scores.push(if p.corrosion_resistance >= min {
                    1.0
                } else {
                    (p.corrosion_resistance / min).max(0.1)
                });
            }
        }
        mean_or(&scores, 0.0)
    }
}

/// Score a value against optional bounds; inside scores 1.0, outside decays
/// with the ratio to the violated bound, kept within [0.1, 1.0].
pub fn score_range(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    match (min, max) {
        (Some(lo), _) if value < lo => (value / lo).clamp(0.1, 1.0),
        (_, Some(hi)) if value > hi => (hi / value).clamp(0.1, 1.0),
        (None, None) => 0.5,
        _ => 1.0,
    }
}

fn push_range(scores: &mut Vec<f64>, value: f64, min: Option<f64>, max: Option<f64>) {
    if value != 0.0 && (min.is_some() || max.is_some()) {
        scores.push(score_range(value, min, max));
    }
}

fn mean_or(values: &[f64], fallback: f64) -> f64 {
    if values.is_empty() {
        fallback
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn props() -> PredictedProperties {
        PredictedProperties {
            tensile_strength: 600.0,
            yield_strength: 420.0,
            density: 7.9,
            thermal_conductivity: 16.0,
            electrical_conductivity: 1.4,
            hardness: 200.0,
            melting_point: 1450.0,
            elastic_modulus: 200.0,
            corrosion_resistance: 85.0,
            formability: 65.0,
            weldability: 60.0,
            machinability: 70.0,
        }
    }

    #[test]
    fn range_scoring() {
        assert_eq!(score_range(5.0, Some(1.0), Some(10.0)), 1.0);
        assert_eq!(score_range(5.0, Some(10.0), None), 0.5);
        assert_eq!(score_range(20.0, None, Some(10.0)), 0.5);
        assert_eq!(score_range(1.0, Some(100.0), None), 0.1);
        assert_eq!(score_range(5.0, None, None), 0.5);
    }

    #[test]
    fn negative_bounds_stay_in_unit_range() {
        assert_eq!(score_range(-20.0, Some(-10.0), None), 1.0);
        assert_eq!(score_range(-5.0, None, Some(-10.0)), 1.0);
        assert_eq!(score_range(-20.0, Some(10.0), None), 0.1);
    }

    #[test]
    fn unconstrained_is_neutral() {
        let m = Requirements::default().evaluate(&props());
        assert_eq!(m, RequirementMatch::default());
        assert_eq!(m.overall(), 0.5);
    }

    #[test]
    fn mechanical_mix_of_pass_and_fail() {
        let req = Requirements {
            min_tensile_strength: Some(500.0),
            max_density: Some(3.95),
            ..Requirements::default()
        };
        let m = req.evaluate(&props());
        assert_relative_eq!(m.mechanical, (1.0 + 0.5) / 2.0);
        assert_relative_eq!(m.overall(), 0.75);
    }

    #[test]
    fn service_temperature_margin() {
        let mut req = Requirements {
            max_operating_temp: Some(1000.0),
            ..Requirements::default()
        };
        assert_eq!(req.evaluate(&props()).thermal, 1.0);
        req.max_operating_temp = Some(1400.0);
        assert_eq!(req.evaluate(&props()).thermal, 0.7);
        req.max_operating_temp = Some(1600.0);
        assert_eq!(req.evaluate(&props()).thermal, 0.1);
    }

    #[test]
    fn corrosion_shortfall() {
        let req = Requirements {
            min_corrosion_resistance: Some(100.0),
            ..Requirements::default()
        };
        assert_relative_eq!(req.evaluate(&props()).environmental, 0.85);
    }
}
