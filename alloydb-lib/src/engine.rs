use std::sync::Arc;

use tracing::{debug, warn};

use crate::composition::{CompositionElement, normalize};
use crate::config::EngineConfig;
use crate::derived::derive;
use crate::error::{AlloyDbError, Result};
use crate::heuristics::{AlloyFamily, apply_heuristics};
use crate::intermetallic::{apply_intermetallic_penalty, electronegativity_spread};
use crate::mixing::{Mixture, mix};
use crate::prediction::{PredictedProperties, PredictionResult};
use crate::scoring::score;
use crate::table::ElementTable;

/// Pipeline position of a single prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Idle,
    Normalizing,
    Mixing,
    HeuristicsApplied,
    Scored,
    Done,
    Invalid,
}

/// Intermediate values behind a prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    /// Rule-of-mixtures values before any correction.
    pub base: Mixture,
    /// Values after heuristics and the intermetallic penalty.
    pub corrected: Mixture,
    pub alloy_families: Vec<AlloyFamily>,
    pub electronegativity_spread: f64,
    pub intermetallic_penalty: bool,
    pub result: PredictionResult,
}

/// The prediction entry point.
///
/// Cheap to clone: the element table is shared.
#[derive(Debug, Clone)]
pub struct Engine {
    table: Arc<ElementTable>,
    config: EngineConfig,
}

impl Engine {
    /// Engine over the built-in table with default constants.
    pub fn new() -> Self {
        Self::with_table(ElementTable::builtin())
    }

    pub fn with_table(table: Arc<ElementTable>) -> Self {
        Engine {
            table,
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn table(&self) -> &ElementTable {
        &self.table
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Predict properties for a composition.
    ///
    /// Never fails: invalid input and arithmetic faults come back as a
    /// result with `is_valid == false`.
    pub fn predict(&self, composition: &[CompositionElement]) -> PredictionResult {
        match self.try_predict(composition) {
            Ok(result) => result,
            Err(err) => {
                match &err {
                    AlloyDbError::CalculationFault { .. } => warn!(error = %err, "prediction failed"),
                    _ => debug!(error = %err, "prediction rejected"),
                }
                PredictionResult::invalid(err.validation_message())
            }
        }
    }

    pub fn try_predict(&self, composition: &[CompositionElement]) -> Result<PredictionResult> {
        self.explain(composition).map(|e| e.result)
    }

    /// Run the full pipeline and keep the intermediate values.
    pub fn explain(&self, composition: &[CompositionElement]) -> Result<Explanation> {
        let mut stage = Stage::Idle;

        advance(&mut stage, Stage::Normalizing);
        let normalized = match normalize(composition, self.config.normalization_tolerance) {
            Ok(n) => n,
            Err(err) => {
                advance(&mut stage, Stage::Invalid);
                return Err(err);
            }
        };

        advance(&mut stage, Stage::Mixing);
        let base = mix(&normalized, &self.table, &self.config);
        check_finite(&mut stage, &base)?;

        let outcome = apply_heuristics(&normalized, base);
        let mut corrected = outcome.mixture;
        let spread = electronegativity_spread(&normalized, &self.table, &self.config);
        let penalized = apply_intermetallic_penalty(spread, &self.config, &mut corrected);
        advance(&mut stage, Stage::HeuristicsApplied);
        check_finite(&mut stage, &corrected)?;

        let derived = derive(&normalized, &corrected);
        let properties = PredictedProperties::from_parts(&corrected, &derived);
        let scores = score(&corrected, &self.config);
        advance(&mut stage, Stage::Scored);
        if !derived.yield_strength.is_finite() {
            return Err(fault(&mut stage, "yield strength"));
        }

        advance(&mut stage, Stage::Done);
        Ok(Explanation {
            base,
            corrected,
            alloy_families: outcome.fired,
            electronegativity_spread: spread,
            intermetallic_penalty: penalized,
            result: PredictionResult {
                properties,
                scores,
                is_valid: true,
                validation_message: normalized.message(),
            },
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Predict with the built-in table and default constants.
pub fn predict(composition: &[CompositionElement]) -> PredictionResult {
    Engine::new().predict(composition)
}

fn advance(stage: &mut Stage, next: Stage) {
    debug!(from = ?*stage, to = ?next, "prediction stage");
    *stage = next;
}

fn check_finite(stage: &mut Stage, m: &Mixture) -> Result<()> {
    match m.first_non_finite() {
        Some(quantity) => Err(fault(stage, quantity)),
        None => Ok(()),
    }
}

fn fault(stage: &mut Stage, quantity: &'static str) -> AlloyDbError {
    let err = AlloyDbError::CalculationFault {
        stage: *stage,
        quantity,
    };
    advance(stage, Stage::Invalid);
    err
}
