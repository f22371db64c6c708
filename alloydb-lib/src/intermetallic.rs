use crate::composition::NormalizedComposition;
use crate::config::EngineConfig;
use crate::mixing::Mixture;
use crate::table::ElementTable;

/// Difference between the largest and smallest electronegativity among the
/// elements present (percentage > 0). Elements without table data count as
/// `config.unknown_electronegativity`.
pub fn electronegativity_spread(
    composition: &NormalizedComposition,
    table: &ElementTable,
    config: &EngineConfig,
) -> f64 {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for element in composition.elements().iter().filter(|e| e.percentage > 0.0) {
        let chi = table
            .profile(&element.symbol)
            .map_or(config.unknown_electronegativity, |p| p.electronegativity);
        min = min.min(chi);
        max = max.max(chi);
    }
    if min > max { 0.0 } else { max - min }
}

/// Brittle-compound penalty: strength ×0.9 and confidence −5 when the
/// spread exceeds the configured limit. Returns whether it applied.
pub fn apply_intermetallic_penalty(spread: f64, config: &EngineConfig, m: &mut Mixture) -> bool {
    if spread <= config.electronegativity_spread_limit {
        return false;
    }
    m.strength *= 0.9;
    m.confidence -= 5.0;
    true
}
