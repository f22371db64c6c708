//! Alloy-family corrections applied on top of the rule of mixtures.
//!
//! Detectors run in the fixed order of [`DETECTORS`]. Several can fire for
//! one composition, and later corrections compound on values already
//! modified by earlier ones.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::composition::NormalizedComposition;
use crate::mixing::Mixture;

/// Metallurgical regime recognised by a detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlloyFamily {
    CarbonSteel,
    Stainless,
    Superalloy,
    AgeHardeningAluminum,
    TitaniumAlloy,
    ToolSteel,
    CopperAlloy,
}

/// A named correction. `apply` returns the corrected accumulator when the
/// detector fires and `None` otherwise.
#[derive(Clone, Copy)]
pub struct Detector {
    pub family: AlloyFamily,
    pub apply: fn(&NormalizedComposition, Mixture) -> Option<Mixture>,
}

impl std::fmt::Debug for Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector")
            .field("family", &self.family)
            .finish()
    }
}

pub const DETECTORS: [Detector; 7] = [
    Detector { family: AlloyFamily::CarbonSteel, apply: carbon_steel },
    Detector { family: AlloyFamily::Stainless, apply: stainless },
    Detector { family: AlloyFamily::Superalloy, apply: superalloy },
    Detector { family: AlloyFamily::AgeHardeningAluminum, apply: age_hardening_aluminum },
    Detector { family: AlloyFamily::TitaniumAlloy, apply: titanium_alloy },
    Detector { family: AlloyFamily::ToolSteel, apply: tool_steel },
    Detector { family: AlloyFamily::CopperAlloy, apply: copper_alloy },
];

/// Result of running every detector over a mixture.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicOutcome {
    pub mixture: Mixture,
    pub fired: Vec<AlloyFamily>,
}

pub fn apply_heuristics(composition: &NormalizedComposition, mixture: Mixture) -> HeuristicOutcome {
    let mut current = mixture;
    let mut fired = Vec::new();
    for detector in &DETECTORS {
        if let Some(next) = (detector.apply)(composition, current) {
            trace!(
                family = ?detector.family,
                confidence = next.confidence,
                "alloy heuristic fired"
            );
            current = next;
            fired.push(detector.family);
        }
    }
    HeuristicOutcome {
        mixture: current,
        fired,
    }
}

/// Upper bound of the tool-steel carbide bonus.
const TOOL_STEEL_MAX_BONUS: f64 = 2.5;

pub fn carbon_steel(c: &NormalizedComposition, mut m: Mixture) -> Option<Mixture> {
    if !(c.contains("Fe") && c.contains("C")) {
        return None;
    }
    let carbon = c.percentage_of("C");
    if carbon > 2.1 {
        // cast iron territory
        return None;
    }
    m.strength += carbon.sqrt() * 200.0;
    m.hardness += carbon * 150.0;
    m.confidence += 15.0;
    Some(m)
}

pub fn stainless(c: &NormalizedComposition, mut m: Mixture) -> Option<Mixture> {
    if !(c.contains("Fe") && c.contains("Cr")) {
        return None;
    }
    let chromium = c.percentage_of("Cr");
    if chromium < 10.5 {
        return None;
    }
    m.sustainability *= 1.3;
    if c.percentage_of("Ni") >= 8.0 {
        // austenitic
        m.strength *= 1.1;
        m.thermal_conductivity *= 0.7;
        m.confidence += 20.0;
    } else if chromium >= 12.0 {
        // ferritic / martensitic
        m.hardness *= 1.3;
        m.confidence += 15.0;
    }
    Some(m)
}

pub fn superalloy(c: &NormalizedComposition, mut m: Mixture) -> Option<Mixture> {
    if !(c.contains("Ni") && c.contains("Cr") && c.contains("Al")) || c.percentage_of("Ni") <= 50.0
    {
        return None;
    }
    m.strength *= 1.4;
    m.melting_point *= 1.05;
    m.thermal_conductivity *= 0.8;
    m.confidence += 15.0;
    Some(m)
}

pub fn age_hardening_aluminum(c: &NormalizedComposition, mut m: Mixture) -> Option<Mixture> {
    if c.percentage_of("Al") <= 85.0 {
        return None;
    }
    if c.percentage_of("Cu") > 2.0 {
        m.strength *= 1.3;
        m.confidence += 12.0;
    }
    if c.contains("Mn") || c.contains("Si") {
        m.sustainability *= 1.1;
        m.confidence += 8.0;
    }
    if m.density > 0.0 && m.strength / m.density > 100.0 {
        m.confidence += 10.0;
    }
    Some(m)
}

pub fn titanium_alloy(c: &NormalizedComposition, mut m: Mixture) -> Option<Mixture> {
    if c.percentage_of("Ti") <= 80.0 {
        return None;
    }
    if c.contains("Al") && c.contains("V") {
        m.strength *= 1.4;
        m.elastic_modulus *= 1.1;
        m.cost *= 3.0;
        m.confidence += 12.0;
    } else {
        m.sustainability *= 1.1;
        m.confidence += 8.0;
    }
    Some(m)
}

/// Carbide-former bonus for iron with W, Mo or V.
pub fn tool_steel_bonus(c: &NormalizedComposition) -> f64 {
    let raw = 1.0
        + 0.03 * c.percentage_of("W")
        + 0.04 * c.percentage_of("Mo")
        + 0.05 * c.percentage_of("V");
    raw.clamp(1.0, TOOL_STEEL_MAX_BONUS)
}

pub fn tool_steel(c: &NormalizedComposition, mut m: Mixture) -> Option<Mixture> {
    if !(c.contains("Fe") && (c.contains("W") || c.contains("Mo") || c.contains("V"))) {
        return None;
    }
    let bonus = tool_steel_bonus(c);
    m.hardness *= bonus;
    m.strength *= bonus.sqrt();
    m.cost *= bonus;
    m.confidence += 10.0;
    Some(m)
}

pub fn copper_alloy(c: &NormalizedComposition, mut m: Mixture) -> Option<Mixture> {
    if c.percentage_of("Cu") <= 60.0 {
        return None;
    }
    m.electrical_conductivity *= 1.2;
    m.thermal_conductivity *= 1.1;
    if c.contains("Zn") {
        // brass
        m.strength *= 1.1;
        m.confidence += 8.0;
    }
    if c.contains("Sn") {
        // bronze
        m.hardness *= 1.2;
        m.confidence += 8.0;
    }
    Some(m)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::composition::{CompositionElement, normalize};
    use crate::config::EngineConfig;
    use crate::mixing::mix;
    use crate::table::ElementTable;

    fn setup(parts: &[(&str, f64)]) -> (NormalizedComposition, Mixture) {
        let elements: Vec<_> = parts
            .iter()
            .map(|&(s, p)| CompositionElement::from_symbol(s, p).unwrap())
            .collect();
        let n = normalize(&elements, 0.01).unwrap();
        let m = mix(&n, &ElementTable::builtin(), &EngineConfig::default());
        (n, m)
    }

    #[test]
    fn carbon_steel_adds_strength_and_hardness() {
        let (c, m) = setup(&[("Fe", 99.0), ("C", 1.0)]);
        let out = carbon_steel(&c, m).unwrap();
        assert_relative_eq!(out.strength, m.strength + 200.0, epsilon = 1e-9);
        assert_relative_eq!(out.hardness, m.hardness + 150.0, epsilon = 1e-9);
        assert_eq!(out.confidence, m.confidence + 15.0);
    }

    #[test]
    fn carbon_steel_rejects_cast_iron() {
        let (c, m) = setup(&[("Fe", 96.0), ("C", 4.0)]);
        assert!(carbon_steel(&c, m).is_none());
    }

    #[test]
    fn austenitic_stainless() {
        let (c, m) = setup(&[("Fe", 74.0), ("Cr", 18.0), ("Ni", 8.0)]);
        let out = stainless(&c, m).unwrap();
        assert_relative_eq!(out.thermal_conductivity, m.thermal_conductivity * 0.7);
        assert_relative_eq!(out.strength, m.strength * 1.1);
        assert_relative_eq!(out.sustainability, m.sustainability * 1.3);
        assert_eq!(out.confidence, m.confidence + 20.0);
    }

    #[test]
    fn ferritic_stainless() {
        let (c, m) = setup(&[("Fe", 83.0), ("Cr", 17.0)]);
        let out = stainless(&c, m).unwrap();
        assert_relative_eq!(out.hardness, m.hardness * 1.3);
        assert_eq!(out.thermal_conductivity, m.thermal_conductivity);
        assert_eq!(out.confidence, m.confidence + 15.0);
    }

    #[test]
    fn low_chromium_is_not_stainless() {
        let (c, m) = setup(&[("Fe", 95.0), ("Cr", 5.0)]);
        assert!(stainless(&c, m).is_none());
    }

    #[test]
    fn nickel_superalloy() {
        let (c, m) = setup(&[("Ni", 60.0), ("Cr", 20.0), ("Al", 5.0), ("Co", 15.0)]);
        let out = superalloy(&c, m).unwrap();
        assert_relative_eq!(out.strength, m.strength * 1.4);
        assert_relative_eq!(out.melting_point, m.melting_point * 1.05);
        assert_relative_eq!(out.thermal_conductivity, m.thermal_conductivity * 0.8);
    }

    #[test]
    fn duralumin_age_hardening() {
        let (c, m) = setup(&[("Al", 93.5), ("Cu", 4.4), ("Mn", 0.6), ("Mg", 1.5)]);
        let out = age_hardening_aluminum(&c, m).unwrap();
        assert_relative_eq!(out.strength, m.strength * 1.3);
        assert_relative_eq!(out.sustainability, m.sustainability * 1.1);
        // strength/density stays under 100 for the built-in values
        assert_eq!(out.confidence, m.confidence + 12.0 + 8.0);
    }

    #[test]
    fn titanium_grades() {
        let (c, m) = setup(&[("Ti", 90.0), ("Al", 6.0), ("V", 4.0)]);
        let out = titanium_alloy(&c, m).unwrap();
        assert_relative_eq!(out.cost, m.cost * 3.0);
        assert_relative_eq!(out.elastic_modulus, m.elastic_modulus * 1.1);

        let (c, m) = setup(&[("Ti", 99.0), ("Fe", 1.0)]);
        let out = titanium_alloy(&c, m).unwrap();
        assert_relative_eq!(out.sustainability, m.sustainability * 1.1);
        assert_eq!(out.confidence, m.confidence + 8.0);
    }

    #[test]
    fn tool_steel_bonus_is_capped() {
        let (c, _) = setup(&[("Fe", 80.0), ("W", 18.0), ("V", 2.0)]);
        assert_relative_eq!(tool_steel_bonus(&c), 1.64, epsilon = 1e-12);
        let (c, _) = setup(&[("Fe", 40.0), ("W", 60.0)]);
        assert_eq!(tool_steel_bonus(&c), TOOL_STEEL_MAX_BONUS);
    }

    #[test]
    fn brass_and_bronze() {
        let (c, m) = setup(&[("Cu", 70.0), ("Zn", 30.0)]);
        let out = copper_alloy(&c, m).unwrap();
        assert_relative_eq!(out.electrical_conductivity, m.electrical_conductivity * 1.2);
        assert_relative_eq!(out.strength, m.strength * 1.1);

        let (c, m) = setup(&[("Cu", 88.0), ("Sn", 12.0)]);
        let out = copper_alloy(&c, m).unwrap();
        assert_relative_eq!(out.hardness, m.hardness * 1.2);
        assert_eq!(out.strength, m.strength);
    }

    #[test]
    fn pure_iron_fires_nothing() {
        let (c, m) = setup(&[("Fe", 100.0)]);
        let outcome = apply_heuristics(&c, m);
        assert!(outcome.fired.is_empty());
        assert_eq!(outcome.mixture, m);
    }

    #[test]
    fn corrections_compound_in_order() {
        let (c, m) = setup(&[("Ti", 85.0), ("Al", 6.0), ("V", 4.0), ("Fe", 5.0)]);
        let outcome = apply_heuristics(&c, m);
        assert_eq!(
            outcome.fired,
            vec![AlloyFamily::TitaniumAlloy, AlloyFamily::ToolSteel]
        );
        assert_relative_eq!(outcome.mixture.cost, m.cost * 3.0 * 1.2, epsilon = 1e-9);
    }
}
