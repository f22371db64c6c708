use alloydb_data::CrystalStructure::{self, Bcc, Cubic, Diamond, Fcc, Hcp, Tetragonal};
use alloydb_data::ElementProfile;

/// Element symbols ordered by atomic number (index 0 is hydrogen).
pub(crate) const PERIODIC_SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

#[allow(clippy::too_many_arguments)]
const fn p(
    density: f64,
    melting_point: f64,
    thermal_conductivity: f64,
    electrical_conductivity: f64,
    base_strength: f64,
    relative_cost: f64,
    sustainability: f64,
    hardness: f64,
    elastic_modulus: f64,
    atomic_radius: f64,
    electronegativity: f64,
    crystal_structure: CrystalStructure,
    bulk_modulus: f64,
    shear_modulus: f64,
) -> ElementProfile {
    ElementProfile {
        density,
        melting_point,
        thermal_conductivity,
        electrical_conductivity,
        base_strength,
        relative_cost,
        sustainability,
        hardness,
        elastic_modulus,
        atomic_radius,
        electronegativity,
        crystal_structure,
        bulk_modulus,
        shear_modulus,
    }
}

/// Built-in element property table.
///
/// Columns of `p(..)`: density (g/cm³), melting point (°C), thermal
/// conductivity (W/m·K), electrical conductivity (MS/m), base strength (MPa),
/// relative cost, sustainability (0-1), hardness (HV), elastic modulus (GPa),
/// atomic radius (Å), electronegativity, crystal structure, bulk modulus (GPa),
/// shear modulus (GPa).
pub(crate) const ELEMENTS: &[(&str, u16, ElementProfile)] = &[
    // Light metals
    ("Li", 3, p(0.534, 180.5, 84.8, 10.8, 15.0, 8.0, 0.5, 5.0, 4.9, 1.52, 0.98, Bcc, 11.0, 4.2)),
    ("Be", 4, p(1.85, 1287.0, 200.0, 25.0, 370.0, 40.0, 0.3, 170.0, 287.0, 1.12, 1.57, Hcp, 130.0, 132.0)),
    ("Mg", 12, p(1.738, 650.0, 156.0, 22.6, 100.0, 2.0, 0.85, 40.0, 45.0, 1.60, 1.31, Hcp, 35.0, 17.0)),
    ("Al", 13, p(2.70, 660.3, 237.0, 37.7, 90.0, 1.5, 0.9, 17.0, 70.0, 1.43, 1.61, Fcc, 76.0, 26.0)),
    ("Ti", 22, p(4.506, 1668.0, 21.9, 2.38, 434.0, 6.0, 0.7, 99.0, 116.0, 1.47, 1.54, Hcp, 110.0, 44.0)),
    // Metalloids and non-metals
    ("B", 5, p(2.34, 2076.0, 27.4, 1.0e-6, 100.0, 3.0, 0.6, 4900.0, 400.0, 0.87, 2.04, Tetragonal, 320.0, 170.0)),
    ("C", 6, p(2.267, 3550.0, 140.0, 0.07, 20.0, 0.5, 0.9, 10.0, 30.0, 0.77, 2.55, Diamond, 33.0, 12.0)),
    ("Si", 14, p(2.329, 1414.0, 149.0, 0.001, 120.0, 1.0, 0.8, 1100.0, 130.0, 1.11, 1.90, Diamond, 98.0, 51.0)),
    ("P", 15, p(1.82, 44.2, 0.236, 1.0e-7, 5.0, 0.5, 0.7, 5.0, 11.0, 1.10, 2.19, Cubic, 11.0, 4.0)),
    ("S", 16, p(2.07, 115.2, 0.205, 1.0e-9, 5.0, 0.3, 0.8, 2.0, 10.0, 1.04, 2.58, Cubic, 7.7, 3.0)),
    ("Ge", 32, p(5.323, 938.3, 60.2, 0.002, 100.0, 50.0, 0.4, 80.0, 103.0, 1.22, 2.01, Diamond, 75.0, 41.0)),
    // Transition metals
    ("V", 23, p(6.11, 1910.0, 30.7, 4.89, 500.0, 20.0, 0.5, 64.0, 128.0, 1.34, 1.63, Bcc, 160.0, 47.0)),
    ("Cr", 24, p(7.19, 1907.0, 93.9, 7.9, 280.0, 3.0, 0.6, 108.0, 279.0, 1.28, 1.66, Bcc, 160.0, 115.0)),
    ("Mn", 25, p(7.21, 1246.0, 7.81, 0.69, 200.0, 1.2, 0.7, 196.0, 198.0, 1.27, 1.55, Cubic, 120.0, 80.0)),
    ("Fe", 26, p(7.874, 1538.0, 80.4, 10.0, 350.0, 1.0, 0.8, 62.0, 211.0, 1.26, 1.83, Bcc, 170.0, 82.0)),
    ("Co", 27, p(8.90, 1495.0, 100.0, 17.2, 255.0, 12.0, 0.4, 106.0, 209.0, 1.25, 1.88, Hcp, 180.0, 75.0)),
    ("Ni", 28, p(8.908, 1455.0, 90.9, 14.3, 317.0, 4.0, 0.7, 65.0, 200.0, 1.24, 1.91, Fcc, 180.0, 76.0)),
    ("Cu", 29, p(8.96, 1084.6, 401.0, 59.6, 210.0, 2.5, 0.85, 38.0, 130.0, 1.28, 1.90, Fcc, 140.0, 48.0)),
    ("Zn", 30, p(7.14, 419.5, 116.0, 16.9, 110.0, 1.2, 0.8, 35.0, 108.0, 1.34, 1.65, Hcp, 70.0, 43.0)),
    ("Y", 39, p(4.47, 1526.0, 17.2, 1.8, 150.0, 30.0, 0.4, 60.0, 64.0, 1.80, 1.22, Hcp, 41.0, 26.0)),
    ("Zr", 40, p(6.52, 1855.0, 22.6, 2.36, 330.0, 10.0, 0.6, 92.0, 88.0, 1.60, 1.33, Hcp, 91.0, 33.0)),
    ("Nb", 41, p(8.57, 2477.0, 53.7, 6.58, 275.0, 18.0, 0.5, 135.0, 105.0, 1.46, 1.60, Bcc, 170.0, 38.0)),
    ("Mo", 42, p(10.28, 2623.0, 138.0, 18.7, 550.0, 15.0, 0.6, 156.0, 329.0, 1.39, 2.16, Bcc, 230.0, 126.0)),
    ("Pd", 46, p(12.02, 1555.0, 71.8, 9.5, 175.0, 70.0, 0.3, 47.0, 121.0, 1.37, 2.20, Fcc, 180.0, 44.0)),
    ("Ag", 47, p(10.49, 961.8, 429.0, 63.0, 170.0, 50.0, 0.6, 26.0, 83.0, 1.44, 1.93, Fcc, 100.0, 30.0)),
    ("Hf", 72, p(13.31, 2233.0, 23.0, 3.12, 480.0, 60.0, 0.3, 179.0, 78.0, 1.59, 1.30, Hcp, 110.0, 30.0)),
    ("Ta", 73, p(16.69, 3017.0, 57.5, 7.61, 345.0, 40.0, 0.4, 89.0, 186.0, 1.46, 1.50, Bcc, 200.0, 69.0)),
    ("W", 74, p(19.25, 3422.0, 173.0, 18.9, 750.0, 12.0, 0.5, 350.0, 411.0, 1.39, 2.36, Bcc, 310.0, 161.0)),
    ("Re", 75, p(21.02, 3186.0, 48.0, 5.56, 1070.0, 150.0, 0.2, 250.0, 463.0, 1.37, 1.90, Hcp, 370.0, 178.0)),
    ("Ir", 77, p(22.56, 2446.0, 147.0, 19.7, 1000.0, 120.0, 0.2, 180.0, 528.0, 1.36, 2.20, Fcc, 320.0, 210.0)),
    ("Pt", 78, p(21.45, 1768.0, 71.6, 9.43, 165.0, 90.0, 0.3, 56.0, 168.0, 1.39, 2.28, Fcc, 230.0, 61.0)),
    ("Au", 79, p(19.30, 1064.0, 318.0, 45.2, 120.0, 80.0, 0.4, 22.0, 79.0, 1.44, 2.54, Fcc, 180.0, 27.0)),
    // Low-melting metals
    ("Ga", 31, p(5.91, 29.8, 40.6, 7.1, 15.0, 20.0, 0.5, 6.0, 9.8, 1.35, 1.81, Cubic, 59.0, 6.7)),
    ("In", 49, p(7.31, 156.6, 81.8, 12.5, 4.0, 30.0, 0.4, 1.0, 11.0, 1.67, 1.78, Tetragonal, 41.0, 4.7)),
    ("Sn", 50, p(7.265, 231.9, 66.8, 9.17, 20.0, 8.0, 0.7, 7.0, 50.0, 1.40, 1.96, Tetragonal, 58.0, 18.0)),
    ("Pb", 82, p(11.34, 327.5, 35.3, 4.81, 18.0, 1.5, 0.3, 5.0, 16.0, 1.75, 2.33, Fcc, 46.0, 5.6)),
    ("Bi", 83, p(9.78, 271.4, 7.97, 0.77, 10.0, 8.0, 0.5, 10.0, 32.0, 1.70, 2.02, Cubic, 31.0, 12.0)),
];

/// Resolve a symbol against the full periodic list.
pub(crate) fn atomic_number_of(symbol: &str) -> Option<u16> {
    PERIODIC_SYMBOLS
        .iter()
        .position(|&s| s == symbol)
        .map(|idx| idx as u16 + 1)
}

pub(crate) fn symbol_of(atomic_number: u16) -> Option<&'static str> {
    if atomic_number == 0 {
        return None;
    }
    PERIODIC_SYMBOLS.get(atomic_number as usize - 1).copied()
}
