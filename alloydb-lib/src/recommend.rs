//! Rank catalogue alloys against requirements and find look-alikes.

use serde::Serialize;
use tracing::debug;

use crate::compparser::parse_composition;
use crate::engine::Engine;
use crate::error::{AlloyDbError, Result};
use crate::prediction::PredictionResult;
use crate::presets::{PRESETS, find_preset};
use crate::requirements::{RequirementMatch, Requirements};

const PERFORMANCE_WEIGHT: f64 = 0.4;
const COST_WEIGHT: f64 = 0.25;
const SUSTAINABILITY_WEIGHT: f64 = 0.2;
const AVAILABILITY_WEIGHT: f64 = 0.15;

/// No supply-chain data is modelled; every alloy gets the neutral score.
const NEUTRAL_AVAILABILITY: f64 = 0.5;

/// Candidates scoring below this are dropped.
const MIN_RECOMMENDATION_SCORE: f64 = 0.1;

/// Similarity granted when the dominant elements differ.
const CROSS_FAMILY_SIMILARITY: f64 = 0.3;

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub name: &'static str,
    pub formula: &'static str,
    pub prediction: PredictionResult,
    pub requirement_match: RequirementMatch,
    /// Weighted blend of requirement fit, cost, sustainability and
    /// availability, in [0, 1].
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    /// Best first, at most `limit` entries.
    pub ranked: Vec<Recommendation>,
    /// Candidates above the minimum score before truncation.
    pub total_matches: usize,
    pub best_performance: Option<&'static str>,
    pub most_cost_effective: Option<&'static str>,
    pub most_sustainable: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarPreset {
    pub name: &'static str,
    pub similarity: f64,
}

fn weighted_score(prediction: &PredictionResult, fit: &RequirementMatch) -> f64 {
    fit.overall() * PERFORMANCE_WEIGHT
        + f64::from(prediction.scores.cost_score) / 100.0 * COST_WEIGHT
        + f64::from(prediction.scores.sustainability_score) / 100.0 * SUSTAINABILITY_WEIGHT
        + NEUTRAL_AVAILABILITY * AVAILABILITY_WEIGHT
}

/// `min / max` of two non-negative quantities, `None` when both are zero.
fn ratio(a: f64, b: f64) -> Option<f64> {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    (hi > 0.0).then(|| (lo / hi).max(0.0))
}

/// Symbol with the largest share; first wins ties.
fn dominant_element(formula: &str) -> Option<String> {
    parse_composition(formula).ok()?.into_iter().fold(None, |best, e| match best {
        Some((_, pct)) if pct >= e.percentage => best,
        _ => Some((e.symbol, e.percentage)),
    })
    .map(|(symbol, _)| symbol)
}

fn similarity(a: &PredictionResult, b: &PredictionResult, same_family: bool) -> f64 {
    let (pa, pb) = (&a.properties, &b.properties);
    let mut parts: Vec<f64> = [
        (pa.tensile_strength, pb.tensile_strength),
        (pa.yield_strength, pb.yield_strength),
        (pa.elastic_modulus, pb.elastic_modulus),
        (pa.density, pb.density),
        (pa.thermal_conductivity, pb.thermal_conductivity),
        (pa.electrical_conductivity, pb.electrical_conductivity),
        (
            f64::from(a.scores.cost_score),
            f64::from(b.scores.cost_score),
        ),
    ]
    .into_iter()
    .filter_map(|(x, y)| ratio(x, y))
    .collect();
    parts.push(if same_family { 1.0 } else { CROSS_FAMILY_SIMILARITY });
    parts.iter().sum::<f64>() / parts.len() as f64
}

impl Engine {
    /// Predict every catalogue alloy, score it against `requirements` and
    /// return the best `limit` candidates.
    pub fn recommend(&self, requirements: &Requirements, limit: usize) -> Recommendations {
        let mut candidates: Vec<Recommendation> = PRESETS
            .iter()
            .filter_map(|&(name, _, formula)| {
                let prediction = self.predict_formula(formula);
                if !prediction.is_valid {
                    return None;
                }
                let requirement_match = requirements.evaluate(&prediction.properties);
                let score = weighted_score(&prediction, &requirement_match);
                Some(Recommendation {
                    name,
                    formula,
                    prediction,
                    requirement_match,
                    score,
                })
            })
            .filter(|r| r.score >= MIN_RECOMMENDATION_SCORE)
            .collect();

        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        let total_matches = candidates.len();
        candidates.truncate(limit);
        debug!(total_matches, returned = candidates.len(), "ranked presets");

        let best_by = |key: fn(&Recommendation) -> u8| {
            candidates
                .iter()
                .fold(None::<&Recommendation>, |best, r| match best {
                    Some(b) if key(b) >= key(r) => Some(b),
                    _ => Some(r),
                })
                .map(|r| r.name)
        };

        Recommendations {
            best_performance: candidates.first().map(|r| r.name),
            most_cost_effective: best_by(|r| r.prediction.scores.cost_score),
            most_sustainable: best_by(|r| r.prediction.scores.sustainability_score),
            total_matches,
            ranked: candidates,
        }
    }

    /// Catalogue alloys whose predicted properties resemble `name`'s, most
    /// similar first. The reference itself is excluded.
    pub fn similar_presets(
        &self,
        name: &str,
        threshold: f64,
        limit: usize,
    ) -> Result<Vec<SimilarPreset>> {
        let formula = find_preset(name).ok_or_else(|| AlloyDbError::UnknownPreset(name.to_string()))?;
        let reference = self.try_predict(&parse_composition(formula)?)?;
        let family = dominant_element(formula);

        let mut similar: Vec<SimilarPreset> = PRESETS
            .iter()
            .filter(|&&(_, _, other)| other != formula)
            .filter_map(|&(other_name, _, other)| {
                let prediction = self.predict_formula(other);
                prediction.is_valid.then(|| SimilarPreset {
                    name: other_name,
                    similarity: similarity(&reference, &prediction, dominant_element(other) == family),
                })
            })
            .filter(|s| s.similarity >= threshold)
            .collect();

        similar.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        similar.truncate(limit);
        Ok(similar)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn ratio_of_quantities() {
        assert_eq!(ratio(2.0, 4.0), Some(0.5));
        assert_eq!(ratio(4.0, 2.0), Some(0.5));
        assert_eq!(ratio(0.0, 0.0), None);
        assert_eq!(ratio(0.0, 3.0), Some(0.0));
    }

    #[test]
    fn dominant_element_of_formula() {
        assert_eq!(dominant_element("Cu70Zn30").as_deref(), Some("Cu"));
        assert_eq!(dominant_element("Ga48.2As51.8").as_deref(), Some("As"));
    }

    #[test]
    fn weights_sum_to_one() {
        assert_relative_eq!(
            PERFORMANCE_WEIGHT + COST_WEIGHT + SUSTAINABILITY_WEIGHT + AVAILABILITY_WEIGHT,
            1.0
        );
    }

    #[test]
    fn light_alloys_lead_when_weight_matters() {
        let req = Requirements {
            max_density: Some(3.0),
            ..Requirements::default()
        };
        let recs = Engine::new().recommend(&req, 5);

        assert_eq!(recs.ranked.len(), 5);
        assert_eq!(recs.total_matches, PRESETS.len());
        assert!(recs.ranked.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(recs.ranked[0].prediction.properties.density <= 3.0);
        assert_eq!(recs.best_performance, Some(recs.ranked[0].name));
        assert!(recs.most_cost_effective.is_some());
        assert!(recs.most_sustainable.is_some());
    }

    #[test]
    fn zero_limit_still_counts_matches() {
        let recs = Engine::new().recommend(&Requirements::default(), 0);
        assert!(recs.ranked.is_empty());
        assert_eq!(recs.total_matches, PRESETS.len());
        assert_eq!(recs.best_performance, None);
    }

    #[test]
    fn stainless_grades_resemble_each_other() {
        let similar = Engine::new()
            .similar_presets("304", DEFAULT_SIMILARITY_THRESHOLD, 10)
            .unwrap();
        assert!(similar.iter().all(|s| s.name != "stainless steel 304"));
        assert!(similar.windows(2).all(|w| w[0].similarity >= w[1].similarity));

        let sibling = similar
            .iter()
            .find(|s| s.name == "stainless steel 316l")
            .unwrap();
        assert!(sibling.similarity > 0.9);
    }

    #[test]
    fn similar_presets_rejects_unknown_name() {
        assert_eq!(
            Engine::new().similar_presets("unobtainium", 0.7, 10),
            Err(AlloyDbError::UnknownPreset("unobtainium".to_string()))
        );
    }
}
