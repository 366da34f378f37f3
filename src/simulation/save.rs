//! Save/load persistence for generated cities
//!
//! Cities round-trip through a versioned JSON document holding the full
//! data model: buildings, roads, parks, and the fountain boundary. The
//! `is_generated` flag is not stored; a successful load implies it.

use anyhow::{bail, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::types::CityData;

const SAVE_FORMAT_VERSION: &str = "1.0";

#[derive(Serialize, Deserialize)]
struct SaveFile {
    version: String,
    #[serde(flatten)]
    city: CityData,
}

/// Write the city to `path` as pretty-printed JSON.
///
/// Refuses to save when no city has been generated. Parent directories
/// are created as needed.
pub fn save_city(city: &CityData, path: &Path) -> Result<()> {
    if !city.is_generated {
        bail!("cannot save: no city generated yet");
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create save directory {}", parent.display()))?;
        }
    }

    let save = SaveFile {
        version: SAVE_FORMAT_VERSION.to_string(),
        city: city.clone(),
    };
    let json = serde_json::to_string_pretty(&save).context("failed to serialize city")?;

    fs::write(path, json)
        .with_context(|| format!("failed to write save file {}", path.display()))?;

    info!(
        "Saved city to {} ({} roads, {} parks, {} buildings)",
        path.display(),
        city.roads.len(),
        city.parks.len(),
        city.buildings.len()
    );

    Ok(())
}

/// Load a city from `path`.
///
/// The loaded data must satisfy the data model invariants (no road with an
/// empty point list); a city that does is returned with `is_generated`
/// set.
pub fn load_city(path: &Path) -> Result<CityData> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read save file {}", path.display()))?;

    let save: SaveFile = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse save file {}", path.display()))?;

    let SaveFile { version, mut city } = save;

    if city.roads.iter().any(|road| road.points.is_empty()) {
        bail!("invalid save file: road with empty point list");
    }

    city.is_generated = true;

    info!(
        "Loaded city from {} (version {}): {} roads, {} parks, {} buildings",
        path.display(),
        version,
        city.roads.len(),
        city.parks.len(),
        city.buildings.len()
    );

    Ok(city)
}
