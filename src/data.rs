//! Catalog loading for Digplan.
//!
//! The catalog ships in one of three shapes, tried in order:
//!
//! 1. `all.json` — a combined document with `crafting`, `minerals`, and
//!    `locations` keys.
//! 2. `equipment.json` — the same combined shape, or a bare array of
//!    crafting rows.
//! 3. Legacy per-type files — `ores.json` (loaded as the fallback mineral
//!    catalog) and `zones.json` (an array, or wrapped in `{ "locations":
//!    [...] }`).
//!
//! Formatted strings (costs, values, materials, buffs, drop chances) are
//! parsed into typed records here, once, at load time.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{
    Catalog, CraftingRow, DropChance, EquipmentItem, EquipmentKind, LocationRow, MineralRow,
    OreRecord, Rarity, ZoneRecord,
};
use crate::parse::{parse_currency, parse_drop_percent, parse_materials_list, parse_stat_buffs};

/// Combined catalog document. Missing sections default to empty.
#[derive(Debug, Deserialize, Default)]
struct CombinedDoc {
    #[serde(default)]
    crafting: Vec<CraftingRow>,
    #[serde(default)]
    minerals: Vec<MineralRow>,
    #[serde(default)]
    locations: Vec<LocationRow>,
}

/// `zones.json` is either a bare array or wrapped in a `locations` key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ZonesDoc {
    Wrapped { locations: Vec<LocationRow> },
    Bare(Vec<LocationRow>),
}

impl ZonesDoc {
    fn into_rows(self) -> Vec<LocationRow> {
        match self {
            ZonesDoc::Wrapped { locations } => locations,
            ZonesDoc::Bare(rows) => rows,
        }
    }
}

fn equipment_from_row(row: CraftingRow) -> EquipmentItem {
    let materials_text = row.materials.unwrap_or_default();
    let buffs_text = row.buffs.unwrap_or_default();
    EquipmentItem {
        id: row.id,
        name: row.item,
        kind: EquipmentKind::from_label(row.kind.as_deref().unwrap_or("")),
        rarity: row.rarity.as_deref().and_then(Rarity::from_label),
        cost: row.cost.as_deref().map(parse_currency).unwrap_or(0),
        materials: parse_materials_list(&materials_text),
        stats: parse_stat_buffs(&buffs_text),
        materials_text,
        buffs_text,
    }
}

fn ore_from_row(row: MineralRow) -> OreRecord {
    // serde_json's preserve_order feature keeps drop chances in source
    // order; lookup tie-breaks depend on it.
    let drop_chances = row
        .drop_chances
        .into_iter()
        .filter_map(|(zone, value)| {
            let descriptor = value.as_str()?.to_string();
            let percent = parse_drop_percent(&descriptor);
            Some(DropChance {
                zone,
                descriptor,
                percent,
            })
        })
        .collect();
    OreRecord {
        name: row.name,
        rarity: row.rarity.as_deref().and_then(Rarity::from_label),
        value: row.value.as_deref().map(parse_currency).filter(|v| *v > 0),
        locations: row.locations,
        drop_chances,
        description: row.description,
        wiki_url: row.url,
    }
}

fn zone_from_row(row: LocationRow) -> ZoneRecord {
    ZoneRecord {
        name: row.name,
        shovel_toughness: row.shovel_toughness,
        description: row.description,
    }
}

fn build_catalog(doc: CombinedDoc, fallback_minerals: Vec<MineralRow>) -> Catalog {
    Catalog {
        equipment: doc.crafting.into_iter().map(equipment_from_row).collect(),
        minerals: doc.minerals.into_iter().map(ore_from_row).collect(),
        fallback_minerals: fallback_minerals.into_iter().map(ore_from_row).collect(),
        zones: doc.locations.into_iter().map(zone_from_row).collect(),
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn json_error(path: &Path, source: serde_json::Error) -> Error {
    Error::Json {
        source_name: path.display().to_string(),
        source,
    }
}

/// Parses a combined catalog document from a JSON string.
///
/// Used both for files on disk and for the embedded WASM catalog.
pub fn parse_combined(json: &str) -> Result<Catalog> {
    let doc: CombinedDoc = serde_json::from_str(json).map_err(|source| Error::Json {
        source_name: "embedded".to_string(),
        source,
    })?;
    Ok(build_catalog(doc, Vec::new()))
}

/// Loads the catalog from a data directory, applying the source
/// precedence order described in the module docs.
///
/// # Errors
///
/// Returns [`Error::MissingCatalog`] when none of the known files exist,
/// and an [`Error::Io`]/[`Error::Json`] when a present file cannot be
/// read or parsed. Callers are expected to degrade to an empty catalog
/// rather than abort.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use digplan::data::load_catalog;
///
/// let catalog = load_catalog(Path::new("data")).unwrap_or_default();
/// println!("{} equipment items", catalog.equipment.len());
/// ```
pub fn load_catalog(data_dir: &Path) -> Result<Catalog> {
    let all = data_dir.join("all.json");
    if all.exists() {
        let doc: CombinedDoc =
            serde_json::from_str(&read_file(&all)?).map_err(|e| json_error(&all, e))?;
        return Ok(build_catalog(doc, Vec::new()));
    }

    let equipment = data_dir.join("equipment.json");
    if equipment.exists() {
        tracing::debug!(path = %equipment.display(), "combined catalog missing, using per-domain file");
        let text = read_file(&equipment)?;
        let mut doc: CombinedDoc = match serde_json::from_str(&text) {
            Ok(doc) => doc,
            // A bare array is a crafting list without the wrapper key.
            Err(_) => CombinedDoc {
                crafting: serde_json::from_str(&text).map_err(|e| json_error(&equipment, e))?,
                ..CombinedDoc::default()
            },
        };

        let mut fallback_minerals = Vec::new();
        if doc.minerals.is_empty() {
            fallback_minerals = load_legacy_ores(data_dir)?;
        }
        if doc.locations.is_empty() {
            doc.locations = load_legacy_zones(data_dir)?;
        }
        return Ok(build_catalog(doc, fallback_minerals));
    }

    // No equipment source at all; legacy ore/zone files alone still give
    // a usable (if equipment-less) catalog.
    let fallback_minerals = load_legacy_ores(data_dir)?;
    let locations = load_legacy_zones(data_dir)?;
    if fallback_minerals.is_empty() && locations.is_empty() {
        return Err(Error::MissingCatalog(data_dir.to_path_buf()));
    }
    tracing::warn!(dir = %data_dir.display(), "only legacy catalog files found");
    Ok(build_catalog(
        CombinedDoc {
            locations,
            ..CombinedDoc::default()
        },
        fallback_minerals,
    ))
}

fn load_legacy_ores(data_dir: &Path) -> Result<Vec<MineralRow>> {
    let path = data_dir.join("ores.json");
    if !path.exists() {
        return Ok(Vec::new());
    }
    tracing::debug!(path = %path.display(), "loading legacy ore catalog");
    serde_json::from_str(&read_file(&path)?).map_err(|e| json_error(&path, e))
}

fn load_legacy_zones(data_dir: &Path) -> Result<Vec<LocationRow>> {
    let path = data_dir.join("zones.json");
    if !path.exists() {
        return Ok(Vec::new());
    }
    tracing::debug!(path = %path.display(), "loading legacy zone catalog");
    let doc: ZonesDoc =
        serde_json::from_str(&read_file(&path)?).map_err(|e| json_error(&path, e))?;
    Ok(doc.into_rows())
}
