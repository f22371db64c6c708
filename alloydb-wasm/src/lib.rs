//! WASM bindings for AlloyDB.
//!
//! Compositions and results cross the boundary as JSON strings in the
//! camelCase shape of [`alloydb::PredictionResult`].
//!
//! Build with:
//! ```sh
//! wasm-pack build -p alloydb-wasm
//! ```

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use alloydb::{
    AlloyDbError, CompositionElement, Engine, EngineConfig, PredictedProperties, Requirements,
};

/// One row of the editor's composition list. `atomicNumber` may be omitted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ElementInput {
    symbol: String,
    percentage: f64,
    #[serde(default)]
    atomic_number: Option<u16>,
}

fn engine() -> Engine {
    Engine::new()
}

fn to_js(e: AlloyDbError) -> JsError {
    JsError::new(&e.to_string())
}

fn json_err(e: serde_json::Error) -> JsError {
    JsError::new(&format!("invalid JSON: {e}"))
}

fn parse_composition_json(json: &str) -> Result<Vec<CompositionElement>, AlloyDbError> {
    let rows: Vec<ElementInput> = serde_json::from_str(json)
        .map_err(|e| AlloyDbError::InvalidComposition(e.to_string()))?;
    rows.into_iter()
        .map(|row| match row.atomic_number {
            Some(z) => Ok(CompositionElement::new(row.symbol, z, row.percentage)),
            None => CompositionElement::from_symbol(&row.symbol, row.percentage),
        })
        .collect()
}

// ── Prediction ──

/// Predict from a JSON array of `{symbol, percentage}` rows.
///
/// Invalid compositions still return a result, with `isValid: false`.
#[wasm_bindgen]
pub fn predict(composition_json: &str) -> Result<String, JsError> {
    let composition = parse_composition_json(composition_json).map_err(to_js)?;
    serde_json::to_string(&engine().predict(&composition)).map_err(json_err)
}

/// Same as [`predict`] with engine constants overridden by `config_json`.
#[wasm_bindgen]
pub fn predict_with_config(composition_json: &str, config_json: &str) -> Result<String, JsError> {
    let composition = parse_composition_json(composition_json).map_err(to_js)?;
    let config = EngineConfig::from_json(config_json).map_err(to_js)?;
    let engine = engine().with_config(config).map_err(to_js)?;
    serde_json::to_string(&engine.predict(&composition)).map_err(json_err)
}

/// Predict from a composition string such as `"Fe70Cr18Ni8Mn2C0.08"`.
#[wasm_bindgen]
pub fn predict_formula(formula: &str) -> Result<String, JsError> {
    serde_json::to_string(&engine().predict_formula(formula)).map_err(json_err)
}

#[wasm_bindgen]
pub fn validate_composition(formula: &str) -> bool {
    alloydb::validate_composition(formula)
}

// ── Presets ──

#[wasm_bindgen]
pub fn predict_preset(name: &str) -> Result<String, JsError> {
    serde_json::to_string(&engine().predict_preset(name)).map_err(json_err)
}

#[wasm_bindgen]
pub fn preset_names() -> js_sys::Array {
    alloydb::preset_names().map(JsValue::from_str).collect()
}

/// Composition string of a preset, if the name or alias is known.
#[wasm_bindgen]
pub fn preset_formula(name: &str) -> Option<String> {
    alloydb::find_preset(name).map(str::to_string)
}

// ── Element table ──

/// Symbols with reference data, in table order.
#[wasm_bindgen]
pub fn element_symbols() -> js_sys::Array {
    engine()
        .table()
        .iter()
        .map(|r| JsValue::from_str(&r.symbol))
        .collect()
}

#[wasm_bindgen]
pub fn element_density(symbol: &str) -> Result<f64, JsError> {
    engine()
        .table()
        .profile(symbol)
        .map(|p| p.density)
        .ok_or_else(|| to_js(AlloyDbError::UnknownElement(symbol.to_string())))
}

#[wasm_bindgen]
pub fn atomic_number(symbol: &str) -> Result<u16, JsError> {
    engine().table().atomic_number(symbol).map_err(to_js)
}

// ── Requirements ──

/// Returns [mechanical, thermal, electrical, environmental, overall].
#[wasm_bindgen]
pub fn match_requirements(properties_json: &str, requirements_json: &str) -> Result<Vec<f64>, JsError> {
    let properties: PredictedProperties = serde_json::from_str(properties_json).map_err(json_err)?;
    let requirements: Requirements = serde_json::from_str(requirements_json).map_err(json_err)?;
    let m = requirements.evaluate(&properties);
    Ok(vec![m.mechanical, m.thermal, m.electrical, m.environmental, m.overall()])
}

/// Rank catalogue alloys against `requirements_json`, best first.
#[wasm_bindgen]
pub fn recommend(requirements_json: &str, limit: usize) -> Result<String, JsError> {
    let requirements: Requirements = serde_json::from_str(requirements_json).map_err(json_err)?;
    serde_json::to_string(&engine().recommend(&requirements, limit)).map_err(json_err)
}

/// Names of presets resembling `name`, most similar first.
#[wasm_bindgen]
pub fn similar_presets(name: &str, limit: usize) -> Result<js_sys::Array, JsError> {
    let similar = engine()
        .similar_presets(name, alloydb::recommend::DEFAULT_SIMILARITY_THRESHOLD, limit)
        .map_err(to_js)?;
    Ok(similar.iter().map(|s| JsValue::from_str(s.name)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_rows_accept_missing_atomic_number() {
        let parts =
            parse_composition_json(r#"[{"symbol":"Fe","percentage":70},{"symbol":"Cr","percentage":30,"atomicNumber":24}]"#)
                .unwrap();
        assert_eq!(parts[0].atomic_number, 26);
        assert_eq!(parts[1].atomic_number, 24);
    }

    #[test]
    fn composition_rows_reject_bad_input() {
        assert!(matches!(
            parse_composition_json(r#"[{"symbol":"Xx","percentage":10}]"#),
            Err(AlloyDbError::UnknownElement(_))
        ));
        assert!(matches!(
            parse_composition_json("{}"),
            Err(AlloyDbError::InvalidComposition(_))
        ));
    }
}
