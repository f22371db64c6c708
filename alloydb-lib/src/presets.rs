use crate::compparser::parse_composition;
use crate::composition::CompositionElement;
use crate::engine::Engine;
use crate::error::{AlloyDbError, Result};
use crate::prediction::PredictionResult;

/// Embedded catalogue of reference alloys.
///
/// Each entry: (name, aliases, composition string). Compositions are nominal
/// and not always normalized; the engine rescales them.
pub(crate) const PRESETS: &[(&str, &[&str], &str)] = &[
    // Steels
    ("stainless steel 316l", &["316l", "ss316l"], "Fe68Cr17Ni10Mo2C0.03"),
    ("stainless steel 304", &["304", "ss304"], "Fe70Cr18Ni8Mn2C0.08"),
    ("carbon steel a36", &["a36"], "Fe98C0.26Mn1.03P0.04S0.05"),
    // Light alloys
    ("aluminum 6061-t6", &["6061", "al6061"], "Al97.9Mg1Si0.6Cu0.3Cr0.2"),
    ("aluminum 7075-t6", &["7075", "al7075"], "Al87.1Zn5.6Mg2.5Cu1.6Cr0.23"),
    ("titanium grade 2", &["cp titanium", "ti grade 2"], "Ti99.2Fe0.3O0.25N0.03"),
    ("titanium grade 5", &["ti-6al-4v", "ti64"], "Ti90Al6V4"),
    // Copper alloys
    ("oxygen-free copper c101", &["c101", "ofc"], "Cu99.99O0.001"),
    ("cartridge brass c260", &["c260", "brass"], "Cu70Zn30"),
    ("tin bronze c905", &["c905", "bronze"], "Cu88Sn10Zn2"),
    // Nickel
    ("inconel 625", &["in625", "alloy 625"], "Ni61Cr21.5Mo9Fe5Nb3.6Al0.4"),
    // Semiconductors
    ("silicon", &["si"], "Si100"),
    ("gallium arsenide", &["gaas"], "Ga48.2As51.8"),
];

/// Find a preset by name or alias (case-insensitive), returning its
/// composition string.
pub fn find_preset(name: &str) -> Option<&'static str> {
    let lower = name.trim().to_lowercase();
    PRESETS
        .iter()
        .find(|(preset, aliases, _)| *preset == lower || aliases.contains(&lower.as_str()))
        .map(|&(_, _, formula)| formula)
}

/// Names of all presets, in catalogue order.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|&(name, _, _)| name)
}

/// Parsed composition of a preset.
pub fn preset_composition(name: &str) -> Result<Vec<CompositionElement>> {
    let formula = find_preset(name).ok_or_else(|| AlloyDbError::UnknownPreset(name.to_string()))?;
    parse_composition(formula)
}

impl Engine {
    /// Predict a catalogue alloy by name.
    pub fn predict_preset(&self, name: &str) -> PredictionResult {
        match preset_composition(name) {
            Ok(parts) => self.predict(&parts),
            Err(err) => PredictionResult::invalid(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_parses() {
        for name in preset_names() {
            let parts = preset_composition(name).unwrap();
            assert!(!parts.is_empty(), "{name}");
        }
    }

    #[test]
    fn lookup_by_alias_and_case() {
        assert_eq!(find_preset("Ti-6Al-4V"), Some("Ti90Al6V4"));
        assert_eq!(find_preset("  Stainless Steel 304 "), find_preset("ss304"));
        assert_eq!(find_preset("unobtainium"), None);
    }

    #[test]
    fn unknown_preset_is_invalid_result() {
        let r = Engine::new().predict_preset("unobtainium");
        assert!(!r.is_valid);
        assert_eq!(r.validation_message.as_deref(), Some("unknown preset: unobtainium"));
    }
}
