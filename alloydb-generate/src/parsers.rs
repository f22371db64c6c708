use std::path::Path;

use alloydb_data::{CrystalStructure, ElementProfile, ElementRecord, VersionRecord};

/// Number of whitespace-separated columns in an element line:
/// Z, symbol, 11 numeric properties, crystal tag, bulk and shear modulus.
const ELEMENT_COLUMNS: usize = 16;

pub fn parse_version(path: &Path) -> Result<Vec<VersionRecord>, String> {
    let content = read(path)?;
    Ok(parse_version_lines(&content))
}

pub fn parse_elements(path: &Path) -> Result<Vec<ElementRecord>, String> {
    let content = read(path)?;
    parse_element_lines(&content)
}

fn read(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))
}

/// `tag // date // notes`, one release per line.
pub fn parse_version_lines(content: &str) -> Vec<VersionRecord> {
    let mut records = Vec::new();
    for line in content.lines() {
        if line.starts_with('#') || line.trim().len() < 3 {
            continue;
        }
        let parts: Vec<&str> = line.splitn(3, "//").collect();
        if parts.len() == 3 {
            records.push(VersionRecord {
                tag: parts[0].trim().to_string(),
                date: parts[1].trim().to_string(),
                notes: parts[2].trim().to_string(),
            });
        }
    }
    records
}

pub fn parse_element_lines(content: &str) -> Result<Vec<ElementRecord>, String> {
    let mut records = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != ELEMENT_COLUMNS {
            return Err(format!(
                "line {}: expected {ELEMENT_COLUMNS} columns, found {}",
                lineno + 1,
                parts.len()
            ));
        }

        let num = |idx: usize| -> Result<f64, String> {
            parts[idx]
                .parse()
                .map_err(|_| format!("line {}: bad number '{}'", lineno + 1, parts[idx]))
        };
        let atomic_number = parts[0]
            .parse()
            .map_err(|_| format!("line {}: bad atomic number '{}'", lineno + 1, parts[0]))?;
        let crystal_structure = CrystalStructure::parse(parts[13])
            .ok_or_else(|| format!("line {}: unknown crystal structure '{}'", lineno + 1, parts[13]))?;

        records.push(ElementRecord {
            atomic_number,
            symbol: parts[1].to_string(),
            profile: ElementProfile {
                density: num(2)?,
                melting_point: num(3)?,
                thermal_conductivity: num(4)?,
                electrical_conductivity: num(5)?,
                base_strength: num(6)?,
                relative_cost: num(7)?,
                sustainability: num(8)?,
                hardness: num(9)?,
                elastic_modulus: num(10)?,
                atomic_radius: num(11)?,
                electronegativity: num(12)?,
                crystal_structure,
                bulk_modulus: num(14)?,
                shear_modulus: num(15)?,
            },
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Z sym density mp k sigma strength cost sust hv E r en lattice K G
26 Fe 7.874 1538 80.4 10.0 350 1.0 0.8 62 211 1.26 1.83 bcc 170 82

29 Cu 8.96 1084.6 401 59.6 210 2.5 0.85 38 130 1.28 1.90 fcc 140 48
";

    #[test]
    fn parses_element_rows() {
        let records = parse_element_lines(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].symbol, "Fe");
        assert_eq!(records[0].atomic_number, 26);
        assert_eq!(records[1].profile.crystal_structure, CrystalStructure::Fcc);
        assert_eq!(records[1].profile.shear_modulus, 48.0);
    }

    #[test]
    fn reports_bad_rows_with_line_numbers() {
        let err = parse_element_lines("26 Fe 7.874\n").unwrap_err();
        assert!(err.starts_with("line 1:"));

        let bad_lattice = SAMPLE.replace("fcc", "rhombic");
        let err = parse_element_lines(&bad_lattice).unwrap_err();
        assert!(err.contains("rhombic"));
    }

    #[test]
    fn parses_version_lines() {
        let records = parse_version_lines("# header\n0.1.0 // 2026-10 // initial table\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].notes, "initial table");
    }
}
