mod parsers;

use std::error::Error;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use alloydb::ElementTable;
use alloydb_data::{ElementDatabase, VersionRecord};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: alloydb-generate [DATA_DIR] [OUTPUT]
       alloydb-generate --dump OUTPUT

Without DATA_DIR the built-in element table is exported. DATA_DIR must hold
element_profiles.txt and may hold version.dat.";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let outcome = match args.as_slice() {
        [flag] if flag == "-h" || flag == "--help" => {
            println!("{USAGE}");
            Ok(())
        }
        [flag, out] if flag == "--dump" => dump(Path::new(out)),
        [] => generate(None, default_output()),
        [dir] => generate(Some(Path::new(dir)), default_output()),
        [dir, out] => generate(Some(Path::new(dir)), PathBuf::from(out)),
        _ => Err(USAGE.into()),
    };

    if let Err(err) = outcome {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn default_output() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("alloydb-lib")
        .join("data")
        .join("elements.bin.zst")
}

fn load(data_dir: Option<&Path>) -> Result<ElementDatabase, Box<dyn Error>> {
    let Some(dir) = data_dir else {
        info!("exporting built-in element table");
        return Ok(ElementTable::builtin().to_database());
    };

    info!(dir = %dir.display(), "parsing element data");
    let elements = parsers::parse_elements(&dir.join("element_profiles.txt"))?;
    info!(count = elements.len(), "elements");

    let version_path = dir.join("version.dat");
    let version = if version_path.exists() {
        parsers::parse_version(&version_path)?
    } else {
        warn!("no version.dat, recording crate version only");
        vec![VersionRecord {
            tag: env!("CARGO_PKG_VERSION").to_string(),
            date: String::new(),
            notes: format!("generated from {}", dir.display()),
        }]
    };

    let db = ElementDatabase { version, elements };
    // reject bad data before writing anything
    ElementTable::from_database(db.clone())?;
    Ok(db)
}

fn generate(data_dir: Option<&Path>, out_path: PathBuf) -> Result<(), Box<dyn Error>> {
    let db = load(data_dir)?;

    let serialized = postcard::to_allocvec(&db)?;
    info!(bytes = serialized.len(), "serialized with postcard");

    let compressed = zstd::encode_all(&serialized[..], 19)?;
    info!(
        bytes = compressed.len(),
        ratio = %format!("{:.1}x", serialized.len() as f64 / compressed.len() as f64),
        "compressed with zstd (level 19)"
    );

    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out_path, &compressed)?;
    info!(path = %out_path.display(), "wrote element table");

    let table = ElementTable::from_compressed(&compressed)?;
    if table.raw() != &db {
        return Err("round-trip mismatch after decoding".into());
    }
    info!(elements = table.len(), "round-trip OK");
    Ok(())
}

/// Write the built-in table in the whitespace format `parsers` reads.
fn dump(out_path: &Path) -> Result<(), Box<dyn Error>> {
    let table = ElementTable::builtin();
    let mut text = String::from(
        "# Z sym density mp k sigma strength cost sust hv E r en lattice K G\n",
    );
    for r in table.iter() {
        let p = &r.profile;
        writeln!(
            text,
            "{} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {}",
            r.atomic_number,
            r.symbol,
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
            p.crystal_structure.as_str(),
            p.bulk_modulus,
            p.shear_modulus,
        )?;
    }
    std::fs::write(out_path, text)?;
    info!(path = %out_path.display(), elements = table.len(), "dumped element table");
    Ok(())
}
