#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// A complete element property table, as stored in a compressed blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDatabase {
    pub version: Vec<VersionRecord>,
    pub elements: Vec<ElementRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub tag: String,
    pub date: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub symbol: String,
    pub atomic_number: u16,
    pub profile: ElementProfile,
}

/// Lattice tag of the element's stable room-temperature phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrystalStructure {
    Bcc,
    Fcc,
    Hcp,
    Diamond,
    Cubic,
    Tetragonal,
}

impl CrystalStructure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bcc => "bcc",
            Self::Fcc => "fcc",
            Self::Hcp => "hcp",
            Self::Diamond => "diamond",
            Self::Cubic => "cubic",
            Self::Tetragonal => "tetragonal",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "bcc" => Some(Self::Bcc),
            "fcc" => Some(Self::Fcc),
            "hcp" => Some(Self::Hcp),
            "diamond" => Some(Self::Diamond),
            "cubic" => Some(Self::Cubic),
            "tetragonal" => Some(Self::Tetragonal),
            _ => None,
        }
    }
}

/// Physical reference values for a single element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementProfile {
    /// g/cm³
    pub density: f64,
    /// °C
    pub melting_point: f64,
    /// W/(m·K)
    pub thermal_conductivity: f64,
    /// MS/m
    pub electrical_conductivity: f64,
    /// MPa, used as a tensile strength proxy
    pub base_strength: f64,
    pub relative_cost: f64,
    /// 0 to 1
    pub sustainability: f64,
    /// HV
    pub hardness: f64,
    /// GPa
    pub elastic_modulus: f64,
    /// Å
    pub atomic_radius: f64,
    /// Pauling scale
    pub electronegativity: f64,
    pub crystal_structure: CrystalStructure,
    /// GPa
    pub bulk_modulus: f64,
    /// GPa
    pub shear_modulus: f64,
}
