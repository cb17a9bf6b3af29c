//! CSV export of a simulated population.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use stellar_population::Population;

/// Evolved stars: `mass,age,remnant,final_mass`
pub const EVOLVED_FILE: &str = "evolved_stars.csv";

/// Main-sequence stars: `mass,age`
pub const MAIN_SEQUENCE_FILE: &str = "ms_stars.csv";

/// Paths of the tables written for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenTables {
    pub evolved: PathBuf,
    pub main_sequence: PathBuf,
}

/// Writes both tables into `dir`, creating it if needed.
///
/// Stars without a final mass get an empty `final_mass` field.
pub fn write_population(dir: &Path, population: &Population) -> Result<WrittenTables> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let tables = WrittenTables {
        evolved: dir.join(EVOLVED_FILE),
        main_sequence: dir.join(MAIN_SEQUENCE_FILE),
    };
    write_rows(&tables.evolved, &population.evolved)?;
    write_rows(&tables.main_sequence, &population.main_sequence)?;

    Ok(tables)
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("failed to write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}
