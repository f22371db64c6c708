use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::elements_db::atomic_number_of;
use crate::engine::Stage;
use crate::error::{AlloyDbError, Result};

/// One alloying constituent as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionElement {
    pub symbol: String,
    pub atomic_number: u16,
    /// Weight percentage; need not be normalized.
    pub percentage: f64,
}

impl CompositionElement {
    pub fn new(symbol: impl Into<String>, atomic_number: u16, percentage: f64) -> Self {
        CompositionElement {
            symbol: symbol.into(),
            atomic_number,
            percentage,
        }
    }

    /// Build an entry from a periodic-table symbol, resolving its atomic number.
    pub fn from_symbol(symbol: &str, percentage: f64) -> Result<Self> {
        let atomic_number = atomic_number_of(symbol)
            .ok_or_else(|| AlloyDbError::UnknownElement(symbol.to_string()))?;
        Ok(Self::new(symbol, atomic_number, percentage))
    }
}

/// A composition whose percentages sum to 100 (within tolerance).
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedComposition {
    elements: Vec<CompositionElement>,
    original_total: f64,
    rescaled: bool,
}

impl NormalizedComposition {
    pub fn elements(&self) -> &[CompositionElement] {
        &self.elements
    }

    pub fn original_total(&self) -> f64 {
        self.original_total
    }

    pub fn is_rescaled(&self) -> bool {
        self.rescaled
    }

    /// Diagnostic reported to the caller when rescaling happened.
    pub fn message(&self) -> Option<String> {
        self.rescaled.then(|| {
            format!(
                "Composition normalized from {:.2}% to 100%",
                self.original_total
            )
        })
    }

    /// Summed percentage of a symbol; duplicate rows add up.
    pub fn percentage_of(&self, symbol: &str) -> f64 {
        self.elements
            .iter()
            .filter(|e| e.symbol == symbol)
            .map(|e| e.percentage)
            .sum()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.elements
            .iter()
            .any(|e| e.symbol == symbol && e.percentage > 0.0)
    }
}

/// Validate a composition and rescale it to a total of 100.
///
/// Negative percentages are passed through untouched.
pub fn normalize(elements: &[CompositionElement], tolerance: f64) -> Result<NormalizedComposition> {
    if elements.is_empty() {
        return Err(AlloyDbError::EmptyComposition);
    }

    let total: f64 = elements.iter().map(|e| e.percentage).sum();
    if total == 0.0 {
        return Err(AlloyDbError::ZeroTotalPercentage);
    }
    // overflowing or NaN totals cannot be rescaled
    if !total.is_finite() {
        return Err(AlloyDbError::CalculationFault {
            stage: Stage::Normalizing,
            quantity: "total percentage",
        });
    }

    if (total - 100.0).abs() < tolerance {
        return Ok(NormalizedComposition {
            elements: elements.to_vec(),
            original_total: total,
            rescaled: false,
        });
    }

    let scale = 100.0 / total;
    debug!(total, scale, "rescaling composition");
    let elements = elements
        .iter()
        .map(|e| CompositionElement {
            percentage: e.percentage * scale,
            ..e.clone()
        })
        .collect();

    Ok(NormalizedComposition {
        elements,
        original_total: total,
        rescaled: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(symbol: &str, pct: f64) -> CompositionElement {
        CompositionElement::from_symbol(symbol, pct).unwrap()
    }

    #[test]
    fn passes_through_when_summing_to_100() {
        let input = vec![el("Fe", 99.995), el("C", 0.0)];
        let n = normalize(&input, 0.01).unwrap();
        assert!(!n.is_rescaled());
        assert_eq!(n.elements(), input.as_slice());
        assert_eq!(n.message(), None);
    }

    #[test]
    fn rescales_and_reports_total() {
        let n = normalize(&[el("Fe", 100.0), el("C", 100.0)], 0.01).unwrap();
        assert!(n.is_rescaled());
        assert_eq!(n.percentage_of("Fe"), 50.0);
        assert_eq!(n.percentage_of("C"), 50.0);
        assert_eq!(
            n.message().as_deref(),
            Some("Composition normalized from 200.00% to 100%")
        );
    }

    #[test]
    fn preserves_ratios() {
        let n = normalize(&[el("Cu", 7.0), el("Zn", 3.0)], 0.01).unwrap();
        let ratio = n.percentage_of("Cu") / n.percentage_of("Zn");
        assert!((ratio - 7.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_and_zero_total() {
        assert_eq!(normalize(&[], 0.01), Err(AlloyDbError::EmptyComposition));
        assert_eq!(
            normalize(&[el("Fe", 0.0), el("C", 0.0)], 0.01),
            Err(AlloyDbError::ZeroTotalPercentage)
        );
    }

    #[test]
    fn overflowing_total_is_a_fault() {
        let err = normalize(&[el("Fe", 1e308), el("Cu", 1e308)], 0.01).unwrap_err();
        assert_eq!(
            err,
            AlloyDbError::CalculationFault {
                stage: Stage::Normalizing,
                quantity: "total percentage",
            }
        );
        assert!(normalize(&[el("Fe", f64::NAN)], 0.01).is_err());
    }

    #[test]
    fn duplicates_add_up() {
        let n = normalize(&[el("Fe", 50.0), el("Fe", 50.0)], 0.01).unwrap();
        assert_eq!(n.percentage_of("Fe"), 100.0);
        assert_eq!(n.elements().len(), 2);
    }

    #[test]
    fn unknown_symbol_rejected_by_constructor() {
        assert!(matches!(
            CompositionElement::from_symbol("Xx", 10.0),
            Err(AlloyDbError::UnknownElement(_))
        ));
    }
}
