//! Pure text parsers for the semi-structured catalog fields.
//!
//! The catalog embeds structured data in free-text strings: materials
//! lists (`"2 Fire Opal, 6 Coal"`), stat buffs (`"Luck: 3-5, Dig Speed:
//! 2-4%"`), drop-chance descriptors (`"(10.00% or ~1 in 10)"`), and
//! formatted currency (`"$1,250"`). Everything here is pure and parses
//! leniently: segments that fail their pattern are silently dropped
//! rather than raised, so a malformed entry disappears from downstream
//! computation instead of failing the whole catalog. That is the
//! product's intended behavior, not an oversight.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{MaterialLine, Stat, StatProfile};

static MATERIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s+(.+?)(?:\s*\(([^)]+)\))?$").expect("static material pattern")
});

static DROP_PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([0-9.]+)%").expect("static drop-chance pattern"));

/// One labeled-number pattern per stat, case-insensitive, supporting a
/// single value or a `low-high` range (negatives allowed) and an optional
/// trailing `%`.
static STAT_RES: LazyLock<Vec<(Stat, Regex)>> = LazyLock::new(|| {
    Stat::ALL
        .iter()
        .map(|&stat| {
            let label = stat.label().replace(' ', r"\s*");
            let pattern = format!(r"(?i){label}:\s*(-?[0-9.]+)(?:-(-?[0-9.]+))?%?");
            (stat, Regex::new(&pattern).expect("static stat pattern"))
        })
        .collect()
});

/// Rounds to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Parses a materials list such as `"3 Coal, 2 Sapphire (Flawless)"`.
///
/// The text is split on commas; each trimmed segment must match
/// `<integer> <name>[ (<requirement>)]`. Segments that do not match are
/// dropped without affecting their siblings.
///
/// # Example
///
/// ```
/// use digplan::parse::parse_materials_list;
///
/// let materials = parse_materials_list("2 Fire Opal, not a material, 6 Coal");
/// assert_eq!(materials.len(), 2);
/// assert_eq!(materials[0].name, "Fire Opal");
/// assert_eq!(materials[0].quantity, 2);
/// ```
pub fn parse_materials_list(text: &str) -> Vec<MaterialLine> {
    text.split(',')
        .filter_map(|segment| {
            let captures = MATERIAL_RE.captures(segment.trim())?;
            let quantity: u32 = captures.get(1)?.as_str().parse().ok()?;
            let name = captures.get(2)?.as_str().trim().to_string();
            let requirement = captures.get(3).map(|m| m.as_str().to_string());
            Some(MaterialLine {
                name,
                quantity,
                requirement,
            })
        })
        .collect()
}

/// Parses a buffs string into per-stat `[min, mid, max]` ranges.
///
/// Each comma-separated segment is tested against the nine known stat
/// patterns. A single value yields `min == mid == max`; a `low-high`
/// range computes `mid = (low + high) / 2`. All values are rounded to one
/// decimal place. Stats that never match are absent from the result.
///
/// # Example
///
/// ```
/// use digplan::models::Stat;
/// use digplan::parse::parse_stat_buffs;
///
/// let stats = parse_stat_buffs("Luck: 3-5, Dig Speed: 2%");
/// assert_eq!(stats[&Stat::Luck], [3.0, 4.0, 5.0]);
/// assert_eq!(stats[&Stat::DigSpeed], [2.0, 2.0, 2.0]);
/// ```
pub fn parse_stat_buffs(text: &str) -> StatProfile {
    let mut profile = StatProfile::new();

    for segment in text.split(',') {
        let segment = segment.trim();
        for (stat, pattern) in STAT_RES.iter() {
            let Some(captures) = pattern.captures(segment) else {
                continue;
            };
            let Ok(min) = captures[1].parse::<f64>() else {
                continue;
            };
            let max = captures
                .get(2)
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .unwrap_or(min);
            let mid = (min + max) / 2.0;
            profile.insert(*stat, [round1(min), round1(mid), round1(max)]);
        }
    }

    profile
}

/// Extracts the embedded percentage from a drop-chance descriptor such as
/// `"(4.62233721% or ~1 in 22)"`. Returns `None` when no `(<number>%`
/// pattern is present.
pub fn parse_drop_percent(descriptor: &str) -> Option<f64> {
    DROP_PERCENT_RE
        .captures(descriptor)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

/// Parses a formatted currency string (`"$1,250"`, `"9,000"`) into coins.
///
/// Strips `$` and thousands separators, then reads the leading run of
/// digits. Missing or unparseable values degrade to 0.
pub fn parse_currency(text: &str) -> u64 {
    let cleaned: String = text.chars().filter(|c| *c != '$' && *c != ',').collect();
    let digits: String = cleaned
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
