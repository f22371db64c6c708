use crate::config::EngineConfig;
use crate::mixing::Mixture;
use crate::prediction::Scores;

pub fn performance_score(m: &Mixture) -> f64 {
    let raw = m.strength / 1000.0 * 40.0 + m.hardness / 1000.0 * 30.0 + m.elastic_modulus / 400.0 * 30.0;
    raw.clamp(20.0, 95.0)
}

pub fn cost_score(m: &Mixture) -> f64 {
    (100.0 - m.cost * 10.0).clamp(20.0, 95.0)
}

pub fn sustainability_score(m: &Mixture) -> f64 {
    (m.sustainability * 100.0).clamp(30.0, 95.0)
}

/// Confidence after clamping to the configured floor and ceiling.
pub fn final_confidence(m: &Mixture, config: &EngineConfig) -> f64 {
    m.confidence
        .clamp(config.confidence_floor, config.confidence_ceiling)
        .round()
}

/// Integer scores; the overall score is the rounded mean of the three
/// already-rounded component scores.
///
/// Callers must pass a mixture with finite values.
pub fn score(m: &Mixture, config: &EngineConfig) -> Scores {
    let performance = performance_score(m).round();
    let cost = cost_score(m).round();
    let sustainability = sustainability_score(m).round();
    let overall = ((performance + cost + sustainability) / 3.0).round();

    Scores {
        performance_score: performance as u8,
        cost_score: cost as u8,
        sustainability_score: sustainability as u8,
        overall_score: overall as u8,
        confidence: final_confidence(m, config) as u8,
    }
}
