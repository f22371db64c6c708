use std::collections::HashSet;

use tracing::trace;

use crate::composition::NormalizedComposition;
use crate::config::EngineConfig;
use crate::estimator::estimate_profile;
use crate::table::ElementTable;

/// Running property accumulator shared by the mixing, heuristic and penalty
/// stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mixture {
    pub density: f64,
    pub melting_point: f64,
    pub thermal_conductivity: f64,
    pub electrical_conductivity: f64,
    pub strength: f64,
    pub cost: f64,
    pub sustainability: f64,
    pub hardness: f64,
    pub elastic_modulus: f64,
    pub bulk_modulus: f64,
    pub shear_modulus: f64,
    pub confidence: f64,
    pub known_elements: usize,
    pub unknown_elements: usize,
}

impl Mixture {
    /// Named quantity that is not finite, if any.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("density", self.density),
            ("melting point", self.melting_point),
            ("thermal conductivity", self.thermal_conductivity),
            ("electrical conductivity", self.electrical_conductivity),
            ("strength", self.strength),
            ("cost", self.cost),
            ("sustainability", self.sustainability),
            ("hardness", self.hardness),
            ("elastic modulus", self.elastic_modulus),
            ("bulk modulus", self.bulk_modulus),
            ("shear modulus", self.shear_modulus),
            ("confidence", self.confidence),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite())
        .map(|(name, _)| name)
    }
}

/// Weighted-average base properties of a normalized composition.
///
/// Electrical conductivity and melting point use logarithmic mixing; only
/// strictly positive values enter the log sums. Thermal conductivity stays
/// linear. Confidence moves once per distinct symbol with a positive
/// percentage: up for table hits, down for estimated elements.
pub fn mix(
    composition: &NormalizedComposition,
    table: &ElementTable,
    config: &EngineConfig,
) -> Mixture {
    let mut m = Mixture {
        density: 0.0,
        melting_point: 0.0,
        thermal_conductivity: 0.0,
        electrical_conductivity: 0.0,
        strength: 0.0,
        cost: 0.0,
        sustainability: 0.0,
        hardness: 0.0,
        elastic_modulus: 0.0,
        bulk_modulus: 0.0,
        shear_modulus: 0.0,
        confidence: config.base_confidence,
        known_elements: 0,
        unknown_elements: 0,
    };
    let mut log_electrical = 0.0;
    let mut log_melting = 0.0;
    let mut counted: HashSet<&str> = HashSet::new();

    for element in composition.elements() {
        let weight = element.percentage / 100.0;
        // only present elements move confidence
        let first_occurrence =
            element.percentage > 0.0 && counted.insert(element.symbol.as_str());

        let profile = match table.profile(&element.symbol) {
            Some(profile) => {
                if first_occurrence {
                    m.known_elements += 1;
                    m.confidence += config.known_element_bonus;
                }
                *profile
            }
            None => {
                trace!(
                    symbol = %element.symbol,
                    z = element.atomic_number,
                    "estimating unknown element"
                );
                if first_occurrence {
                    m.unknown_elements += 1;
                    m.confidence -= config.unknown_element_penalty;
                }
                estimate_profile(element.atomic_number, config.unknown_electronegativity)
            }
        };

        m.density += weight * profile.density;
        m.cost += weight * profile.relative_cost;
        m.sustainability += weight * profile.sustainability;
        m.strength += weight * profile.base_strength;
        m.hardness += weight * profile.hardness;
        m.elastic_modulus += weight * profile.elastic_modulus;
        m.bulk_modulus += weight * profile.bulk_modulus;
        m.shear_modulus += weight * profile.shear_modulus;

        if profile.electrical_conductivity > 0.0 {
            log_electrical += weight * profile.electrical_conductivity.ln();
        }
        if profile.melting_point > 0.0 {
            log_melting += weight * profile.melting_point.ln();
        }

        m.thermal_conductivity += weight * profile.thermal_conductivity;
    }

    m.electrical_conductivity = log_electrical.exp();
    m.melting_point = log_melting.exp();
    m
}
