//! Data models and structures for Digplan.
//!
//! This module contains all the core data structures used throughout the
//! application: the immutable catalog records (equipment, minerals, zones),
//! the derived per-session records (material requirements), and the raw
//! serde row structs that mirror the JSON catalog shapes.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Item rarity tiers, ordered from most to least common.
///
/// The ordering matches the in-game tier ranking and is used to sort
/// equipment lists (rarer items last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythical,
}

impl Rarity {
    /// Parses a rarity label case-insensitively. Unknown labels yield `None`
    /// so that catalog entries with unexpected tiers degrade gracefully.
    pub fn from_label(label: &str) -> Option<Rarity> {
        match label.trim().to_lowercase().as_str() {
            "common" => Some(Rarity::Common),
            "uncommon" => Some(Rarity::Uncommon),
            "rare" => Some(Rarity::Rare),
            "epic" => Some(Rarity::Epic),
            "legendary" => Some(Rarity::Legendary),
            "mythical" => Some(Rarity::Mythical),
            _ => None,
        }
    }

    /// Display label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythical => "Mythical",
        }
    }

    /// Numeric rank (1 = Common .. 6 = Mythical), used as a sort key.
    pub fn rank(&self) -> u8 {
        *self as u8 + 1
    }
}

/// Equipment slot category.
///
/// Unrecognized categories are preserved verbatim in `Other` rather than
/// rejected, since the catalog is free to introduce new types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipmentKind {
    Necklace,
    Charm,
    Amulet,
    Ring,
    Other(String),
}

impl EquipmentKind {
    pub fn from_label(label: &str) -> EquipmentKind {
        match label.trim() {
            "Necklace" => EquipmentKind::Necklace,
            "Charm" => EquipmentKind::Charm,
            "Amulet" => EquipmentKind::Amulet,
            "Ring" => EquipmentKind::Ring,
            other => EquipmentKind::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            EquipmentKind::Necklace => "Necklace",
            EquipmentKind::Charm => "Charm",
            EquipmentKind::Amulet => "Amulet",
            EquipmentKind::Ring => "Ring",
            EquipmentKind::Other(label) => label,
        }
    }
}

/// The nine gear stats recognized by the buff parser and the simulator.
///
/// Declaration order is the canonical display order; `BTreeMap<Stat, _>`
/// iterates in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stat {
    Luck,
    DigSpeed,
    DigStrength,
    Capacity,
    ShakeSpeed,
    ShakeStrength,
    SellBoost,
    SizeBoost,
    ModifierBoost,
}

impl Stat {
    /// All stats in display order.
    pub const ALL: [Stat; 9] = [
        Stat::Luck,
        Stat::DigSpeed,
        Stat::DigStrength,
        Stat::Capacity,
        Stat::ShakeSpeed,
        Stat::ShakeStrength,
        Stat::SellBoost,
        Stat::SizeBoost,
        Stat::ModifierBoost,
    ];

    /// Human-readable label, as it appears in buff text.
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Luck => "Luck",
            Stat::DigSpeed => "Dig Speed",
            Stat::DigStrength => "Dig Strength",
            Stat::Capacity => "Capacity",
            Stat::ShakeSpeed => "Shake Speed",
            Stat::ShakeStrength => "Shake Strength",
            Stat::SellBoost => "Sell Boost",
            Stat::SizeBoost => "Size Boost",
            Stat::ModifierBoost => "Modifier Boost",
        }
    }

    /// camelCase key used in JSON output.
    pub fn key(&self) -> &'static str {
        match self {
            Stat::Luck => "luck",
            Stat::DigSpeed => "digSpeed",
            Stat::DigStrength => "digStrength",
            Stat::Capacity => "capacity",
            Stat::ShakeSpeed => "shakeSpeed",
            Stat::ShakeStrength => "shakeStrength",
            Stat::SellBoost => "sellBoost",
            Stat::SizeBoost => "sizeBoost",
            Stat::ModifierBoost => "modifierBoost",
        }
    }

    /// Whether the stat is displayed with a trailing `%`.
    pub fn is_percent(&self) -> bool {
        matches!(
            self,
            Stat::DigSpeed
                | Stat::ShakeSpeed
                | Stat::SellBoost
                | Stat::SizeBoost
                | Stat::ModifierBoost
        )
    }

    /// Below this total, the simulator suggests upgrades for the stat.
    pub fn recommend_threshold(&self) -> f64 {
        match self {
            Stat::Luck => 50.0,
            Stat::DigSpeed => 30.0,
            Stat::DigStrength => 20.0,
            Stat::Capacity => 50.0,
            Stat::ShakeSpeed => 20.0,
            Stat::ShakeStrength => 10.0,
            Stat::SellBoost => 30.0,
            Stat::SizeBoost => 30.0,
            Stat::ModifierBoost => 50.0,
        }
    }
}

/// `[min, mid, max]` values for a single stat, rounded to one decimal.
pub type StatRange = [f64; 3];

/// Parsed stat profile of an equipment item. Stats absent from the buff
/// text are absent from the map (not zero).
pub type StatProfile = BTreeMap<Stat, StatRange>;

/// One parsed entry from a materials list, e.g. `5 Fire Opal (Rare)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialLine {
    /// Material name, trimmed.
    pub name: String,
    /// Required quantity per crafted item.
    pub quantity: u32,
    /// Optional parenthesized qualifier, e.g. a required variant.
    pub requirement: Option<String>,
}

/// A craftable equipment item from the catalog.
///
/// The raw `materials`/`buffs` text is parsed once at load time; the
/// original strings are retained for display. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct EquipmentItem {
    /// Explicit catalog id, if the source provides one. Items without an
    /// id are addressed by their position in the catalog.
    pub id: Option<String>,
    /// Display name, also the identity used by the shopping list.
    pub name: String,
    /// Slot category (Necklace, Charm, Amulet, Ring, ...).
    pub kind: EquipmentKind,
    /// Rarity tier; `None` when the catalog label is missing or unknown.
    pub rarity: Option<Rarity>,
    /// Crafting cost in coins.
    pub cost: u64,
    /// Raw materials text as loaded.
    pub materials_text: String,
    /// Raw buffs text as loaded.
    pub buffs_text: String,
    /// Materials parsed from `materials_text`.
    pub materials: Vec<MaterialLine>,
    /// Stat ranges parsed from `buffs_text`.
    pub stats: StatProfile,
}

/// A per-zone drop chance for an ore, in catalog source order.
#[derive(Debug, Clone)]
pub struct DropChance {
    /// Zone name the chance applies to.
    pub zone: String,
    /// Raw descriptor, e.g. `(4.62233721% or ~1 in 22)`.
    pub descriptor: String,
    /// Percentage extracted from the descriptor, when present.
    pub percent: Option<f64>,
}

/// An ore (mineral) record from the catalog. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct OreRecord {
    pub name: String,
    pub rarity: Option<Rarity>,
    /// Sell value per unit in coins, when known.
    pub value: Option<u64>,
    /// Zones where the ore can be found, in catalog order.
    pub locations: Vec<String>,
    /// Drop chances per zone, preserving catalog order.
    pub drop_chances: Vec<DropChance>,
    pub description: Option<String>,
    pub wiki_url: Option<String>,
}

/// A digging zone. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct ZoneRecord {
    pub name: String,
    /// Difficulty rating 1-5; a player's shovel level must be >= this to
    /// dig in the zone.
    pub shovel_toughness: u32,
    pub description: Option<String>,
}

/// Aggregated requirement for one material across the whole shopping list.
///
/// Keyed by `(name, requirement)`: the same material with different
/// qualifiers is tracked separately, and quantities are additive only
/// under that composite key.
#[derive(Debug, Clone)]
pub struct MaterialRequirement {
    pub name: String,
    pub requirement: Option<String>,
    pub total_quantity: u64,
    /// Per-unit sell value of the backing ore; 0 when the ore is unknown
    /// or has no listed value.
    pub unit_value: u64,
    /// `unit_value * total_quantity`.
    pub total_value: u64,
}

impl MaterialRequirement {
    /// Whether this entry matches the given composite key.
    pub fn matches(&self, name: &str, requirement: Option<&str>) -> bool {
        self.name == name && self.requirement.as_deref() == requirement
    }
}

/// The loaded catalog: all equipment, ore, and zone records.
///
/// `fallback_minerals` holds the legacy per-type ore list consulted after
/// the primary list; it is empty when the catalog comes from a combined
/// source.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub equipment: Vec<EquipmentItem>,
    pub minerals: Vec<OreRecord>,
    pub fallback_minerals: Vec<OreRecord>,
    pub zones: Vec<ZoneRecord>,
}

fn name_matches_loosely(candidate: &str, query: &str) -> bool {
    let candidate = candidate.to_lowercase();
    let query = query.to_lowercase();
    candidate.contains(&query) || query.contains(&candidate)
}

impl Catalog {
    /// Resolves an ore by name: case-insensitive exact match first, then
    /// bidirectional substring match, scanning the primary mineral list
    /// before the fallback list at each stage.
    ///
    /// Exact matches always win over substring matches, regardless of
    /// which list holds them. Within a stage the first entry in catalog
    /// order wins; ties between substring matches are resolved by source
    /// order, not by score.
    pub fn find_ore(&self, name: &str) -> Option<&OreRecord> {
        let query = name.to_lowercase();
        let exact = self
            .minerals
            .iter()
            .chain(&self.fallback_minerals)
            .find(|ore| ore.name.to_lowercase() == query);
        if exact.is_some() {
            return exact;
        }

        let fuzzy = self
            .minerals
            .iter()
            .chain(&self.fallback_minerals)
            .find(|ore| name_matches_loosely(&ore.name, name));
        if fuzzy.is_none() {
            tracing::debug!(material = name, "ore not found in any catalog");
        }
        fuzzy
    }

    /// Resolves a zone by name with the same exact-then-substring policy
    /// as [`find_ore`](Self::find_ore), over the single zone list.
    pub fn find_zone(&self, name: &str) -> Option<&ZoneRecord> {
        let query = name.to_lowercase();
        self.zones
            .iter()
            .find(|zone| zone.name.to_lowercase() == query)
            .or_else(|| {
                self.zones
                    .iter()
                    .find(|zone| name_matches_loosely(&zone.name, name))
            })
    }

    /// Resolves equipment by identifier: the explicit `id` field when the
    /// catalog provides one, otherwise the item's position rendered as a
    /// string.
    pub fn find_equipment(&self, id: &str) -> Option<&EquipmentItem> {
        self.equipment.iter().enumerate().find_map(|(index, item)| {
            let by_id = item.id.as_deref() == Some(id);
            if by_id || index.to_string() == id {
                Some(item)
            } else {
                None
            }
        })
    }

    /// Resolves equipment by exact display name, case-insensitively.
    pub fn equipment_named(&self, name: &str) -> Option<&EquipmentItem> {
        let query = name.to_lowercase();
        self.equipment
            .iter()
            .find(|item| item.name.to_lowercase() == query)
    }

    /// Shovel toughness for a zone name, defaulting to 1 (always
    /// accessible) when the zone has no record.
    pub fn zone_toughness(&self, name: &str) -> u32 {
        self.find_zone(name)
            .map(|zone| zone.shovel_toughness)
            .unwrap_or(1)
    }
}

// ============================================================================
// JSON Row Structures
// ============================================================================

/// Raw crafting row as it appears in the catalog JSON.
///
/// `cost` is a formatted string possibly containing thousands separators;
/// `materials` and `buffs` are free text parsed by [`crate::parse`].
#[derive(Debug, Deserialize)]
pub struct CraftingRow {
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    pub item: String,
    /// Slot category label.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub materials: Option<String>,
    #[serde(default)]
    pub buffs: Option<String>,
}

/// Raw mineral row. `value` may be `$`-prefixed and comma-separated;
/// `dropChances` maps zone name to a descriptor string and preserves
/// source order.
#[derive(Debug, Deserialize)]
pub struct MineralRow {
    pub name: String,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(rename = "dropChances", default)]
    pub drop_chances: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Raw zone row.
#[derive(Debug, Deserialize)]
pub struct LocationRow {
    pub name: String,
    #[serde(rename = "shovelToughness", default = "default_toughness")]
    pub shovel_toughness: u32,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_toughness() -> u32 {
    1
}
