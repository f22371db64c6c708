use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use alloydb_data::{ElementDatabase, ElementProfile, ElementRecord, VersionRecord};
use tracing::debug;

use crate::elements_db::{ELEMENTS, atomic_number_of, symbol_of};
use crate::error::{AlloyDbError, Result};

static BUILTIN: OnceLock<Arc<ElementTable>> = OnceLock::new();

/// Immutable element property lookup.
///
/// Built once (either the built-in table or a decoded blob) and shared by
/// `Arc` between engines; nothing mutates it after construction.
#[derive(Debug)]
pub struct ElementTable {
    data: ElementDatabase,
    symbol_index: HashMap<String, usize>,
}

impl ElementTable {
    /// The built-in table, constructed on first use.
    pub fn builtin() -> Arc<ElementTable> {
        BUILTIN
            .get_or_init(|| {
                let elements = ELEMENTS
                    .iter()
                    .map(|&(symbol, atomic_number, profile)| ElementRecord {
                        symbol: symbol.to_string(),
                        atomic_number,
                        profile,
                    })
                    .collect();
                let data = ElementDatabase {
                    version: vec![VersionRecord {
                        tag: env!("CARGO_PKG_VERSION").to_string(),
                        date: "2026-10".to_string(),
                        notes: "built-in reference table".to_string(),
                    }],
                    elements,
                };
                Arc::new(Self::indexed(data))
            })
            .clone()
    }

    /// Build a table from decoded records, rejecting inconsistent data.
    pub fn from_database(data: ElementDatabase) -> Result<Self> {
        let mut seen = HashMap::new();
        for record in &data.elements {
            match atomic_number_of(&record.symbol) {
                Some(z) if z == record.atomic_number => {}
                Some(z) => {
                    return Err(AlloyDbError::DataError(format!(
                        "{} has atomic number {}, expected {z}",
                        record.symbol, record.atomic_number
                    )));
                }
                None => {
                    return Err(AlloyDbError::UnknownElement(record.symbol.clone()));
                }
            }
            if seen.insert(record.symbol.as_str(), ()).is_some() {
                return Err(AlloyDbError::DataError(format!(
                    "duplicate element record: {}",
                    record.symbol
                )));
            }
            if !profile_is_finite(&record.profile) {
                return Err(AlloyDbError::DataError(format!(
                    "non-finite property value for {}",
                    record.symbol
                )));
            }
        }
        Ok(Self::indexed(data))
    }

    /// Decode a zstd-compressed, postcard-encoded [`ElementDatabase`].
    pub fn from_compressed(bytes: &[u8]) -> Result<Self> {
        let mut decoder = ruzstd::decoding::StreamingDecoder::new(bytes)
            .map_err(|e| AlloyDbError::DataError(format!("zstd frame: {e}")))?;
        let mut decompressed = Vec::new();
        std::io::Read::read_to_end(&mut decoder, &mut decompressed)
            .map_err(|e| AlloyDbError::DataError(format!("zstd stream: {e}")))?;

        let data: ElementDatabase = postcard::from_bytes(&decompressed)
            .map_err(|e| AlloyDbError::DataError(format!("postcard: {e}")))?;
        debug!(
            elements = data.elements.len(),
            bytes = bytes.len(),
            "decoded element table"
        );
        Self::from_database(data)
    }

    fn indexed(data: ElementDatabase) -> Self {
        let symbol_index = data
            .elements
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.symbol.clone(), idx))
            .collect();
        ElementTable { data, symbol_index }
    }

    /// Access the underlying records.
    pub fn raw(&self) -> &ElementDatabase {
        &self.data
    }

    pub fn to_database(&self) -> ElementDatabase {
        self.data.clone()
    }

    pub fn len(&self) -> usize {
        self.data.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementRecord> {
        self.data.elements.iter()
    }

    pub fn record(&self, symbol: &str) -> Option<&ElementRecord> {
        self.symbol_index
            .get(symbol)
            .map(|&idx| &self.data.elements[idx])
    }

    /// Property profile by exact symbol. `None` is expected for elements
    /// without reference data.
    pub fn profile(&self, symbol: &str) -> Option<&ElementProfile> {
        self.record(symbol).map(|r| &r.profile)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbol_index.contains_key(symbol)
    }

    /// Atomic number for any periodic-table symbol, with or without
    /// property data.
    pub fn atomic_number(&self, symbol: &str) -> Result<u16> {
        atomic_number_of(symbol).ok_or_else(|| AlloyDbError::UnknownElement(symbol.to_string()))
    }

    pub fn symbol_for(&self, atomic_number: u16) -> Result<&'static str> {
        symbol_of(atomic_number)
            .ok_or_else(|| AlloyDbError::UnknownElement(atomic_number.to_string()))
    }
}

fn profile_is_finite(p: &ElementProfile) -> bool {
    [
        p.density,
        p.melting_point,
        p.thermal_conductivity,
        p.electrical_conductivity,
        p.base_strength,
        p.relative_cost,
        p.sustainability,
        p.hardness,
        p.elastic_modulus,
        p.atomic_radius,
        p.electronegativity,
        p.bulk_modulus,
        p.shear_modulus,
    ]
    .iter()
    .all(|v| v.is_finite())
}
