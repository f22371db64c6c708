use crate::composition::NormalizedComposition;
use crate::mixing::Mixture;

/// Secondary engineering properties computed from the corrected mixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedProperties {
    pub yield_strength: f64,
    pub corrosion_resistance: f64,
    pub formability: f64,
    pub weldability: f64,
    pub machinability: f64,
}

pub fn derive(composition: &NormalizedComposition, m: &Mixture) -> DerivedProperties {
    let corrosion_resistance = if composition.contains("Cr") {
        85.0
    } else if composition.contains("Al") {
        75.0
    } else {
        60.0
    };

    let formability = if m.density < 5.0 {
        80.0
    } else if m.density < 8.0 {
        65.0
    } else {
        50.0
    };

    let weldability = if composition.contains("C") {
        60.0
    } else if composition.contains("Al") {
        85.0
    } else {
        75.0
    };

    let machinability = if m.hardness < 200.0 {
        85.0
    } else if m.hardness < 500.0 {
        70.0
    } else {
        50.0
    };

    DerivedProperties {
        yield_strength: m.strength * 0.7,
        corrosion_resistance,
        formability,
        weldability,
        machinability,
    }
}
