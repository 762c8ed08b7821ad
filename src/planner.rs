//! Farming route planning and efficiency ranking.
//!
//! Given an aggregated material list and a shovel level, this module
//! answers three questions: where to dig ([`plan_route`]), which
//! materials pay off best per dig ([`rank_materials`]), and which zones
//! concentrate the most value ([`rank_zones`]).

use std::collections::HashSet;

use crate::models::{Catalog, MaterialRequirement, Rarity};

/// One material to collect at a route stop.
#[derive(Debug, Clone)]
pub struct RouteMaterial {
    pub name: String,
    pub total_quantity: u64,
    pub rarity: Option<Rarity>,
}

/// One zone on the farming route with the materials to collect there.
#[derive(Debug, Clone)]
pub struct RouteStop {
    pub zone: String,
    /// Displayed toughness; defaults to 1 for zones without a record.
    pub toughness: u32,
    pub description: Option<String>,
    pub materials: Vec<RouteMaterial>,
}

/// A planned route, split into zones the player can dig now and zones
/// locked behind a higher shovel level.
#[derive(Debug, Clone, Default)]
pub struct FarmingRoute {
    pub accessible: Vec<RouteStop>,
    pub inaccessible: Vec<RouteStop>,
}

/// Per-material farming efficiency, in shopping-list order.
#[derive(Debug, Clone)]
pub struct MaterialEfficiency {
    pub name: String,
    pub requirement: Option<String>,
    pub total_quantity: u64,
    pub unit_value: u64,
    pub total_value: u64,
    pub rarity: Option<Rarity>,
    /// `best_rate * unit_value * total_quantity`; 0 when no accessible
    /// zone drops the material.
    pub efficiency: f64,
    /// The accessible zone with the highest drop rate, if any.
    pub best_zone: Option<String>,
    /// Drop percentage in `best_zone`.
    pub best_rate: f64,
    /// Whether any accessible zone drops this material at all.
    pub accessible: bool,
}

/// Aggregate value concentrated in one zone.
#[derive(Debug, Clone)]
pub struct ZoneScore {
    pub zone: String,
    pub materials: Vec<String>,
    pub total_efficiency: f64,
    pub total_value: u64,
}

// Recordless zones sort after every real zone but still display as
// toughness 1.
const UNKNOWN_TOUGHNESS_SORT_KEY: u32 = 999;

fn sort_toughness(catalog: &Catalog, zone: &str) -> u32 {
    catalog
        .find_zone(zone)
        .map(|z| z.shovel_toughness)
        .unwrap_or(UNKNOWN_TOUGHNESS_SORT_KEY)
}

/// Groups materials by the zones that drop them and orders the result
/// into a walkable route.
///
/// Zones appear in the order they are first mentioned by any material's
/// ore record, then stable-sorted ascending by shovel toughness, so
/// equally tough zones keep their first-appearance order. A zone is
/// accessible when its toughness is at most `shovel_level`. Each
/// material is assigned to only one zone: the first zone in the sorted
/// walk that drops it claims it, accessible zones before inaccessible
/// ones. Materials whose ore is unknown to the catalog are left off the
/// route entirely.
pub fn plan_route(
    materials: &[MaterialRequirement],
    catalog: &Catalog,
    shovel_level: u32,
) -> FarmingRoute {
    // Zone -> materials obtainable there, in first-appearance order.
    let mut zones: Vec<(String, Vec<RouteMaterial>)> = Vec::new();
    for requirement in materials {
        let Some(ore) = catalog.find_ore(&requirement.name) else {
            continue;
        };
        for location in &ore.locations {
            let index = match zones.iter().position(|(zone, _)| zone == location) {
                Some(index) => index,
                None => {
                    zones.push((location.clone(), Vec::new()));
                    zones.len() - 1
                }
            };
            zones[index].1.push(RouteMaterial {
                name: requirement.name.clone(),
                total_quantity: requirement.total_quantity,
                rarity: ore.rarity,
            });
        }
    }

    zones.sort_by_key(|(zone, _)| sort_toughness(catalog, zone));

    let mut route = FarmingRoute::default();
    let mut collected: HashSet<String> = HashSet::new();

    // Accessible zones claim materials first; the same claimed set then
    // carries into the locked-zone walk so nothing is listed twice.
    for accessible in [true, false] {
        for (zone, candidates) in &zones {
            let toughness = catalog.zone_toughness(zone);
            if (toughness <= shovel_level) != accessible {
                continue;
            }
            let picked: Vec<RouteMaterial> = candidates
                .iter()
                .filter(|m| !collected.contains(&m.name))
                .cloned()
                .collect();
            if picked.is_empty() {
                continue;
            }
            for material in &picked {
                collected.insert(material.name.clone());
            }
            let stop = RouteStop {
                zone: zone.clone(),
                toughness,
                description: catalog.find_zone(zone).and_then(|z| z.description.clone()),
                materials: picked,
            };
            if accessible {
                route.accessible.push(stop);
            } else {
                route.inaccessible.push(stop);
            }
        }
    }

    route
}

/// Computes farming efficiency for each material, preserving input order.
///
/// For every material the best *accessible* drop rate is found across
/// its ore's drop-chance entries (strictly-greater comparison, so ties
/// keep the earliest zone in catalog order). Efficiency is that rate
/// times the per-unit value times the required quantity. Materials with
/// no accessible source score 0 and are flagged inaccessible.
pub fn material_efficiencies(
    materials: &[MaterialRequirement],
    catalog: &Catalog,
    shovel_level: u32,
) -> Vec<MaterialEfficiency> {
    materials
        .iter()
        .map(|requirement| {
            let ore = catalog.find_ore(&requirement.name);

            let mut best_zone = None;
            let mut best_rate = 0.0_f64;
            if let Some(ore) = ore {
                for chance in &ore.drop_chances {
                    if catalog.zone_toughness(&chance.zone) > shovel_level {
                        continue;
                    }
                    let Some(rate) = chance.percent else {
                        continue;
                    };
                    if rate > best_rate {
                        best_rate = rate;
                        best_zone = Some(chance.zone.clone());
                    }
                }
            }

            let accessible = best_zone.is_some();
            let efficiency = best_rate
                * requirement.unit_value as f64
                * requirement.total_quantity as f64;

            MaterialEfficiency {
                name: requirement.name.clone(),
                requirement: requirement.requirement.clone(),
                total_quantity: requirement.total_quantity,
                unit_value: requirement.unit_value,
                total_value: requirement.total_value,
                rarity: ore.and_then(|o| o.rarity),
                efficiency,
                best_zone,
                best_rate,
                accessible,
            }
        })
        .collect()
}

/// Ranks materials by efficiency, highest first. The sort is stable, so
/// equal scores keep shopping-list order.
pub fn rank_materials(
    materials: &[MaterialRequirement],
    catalog: &Catalog,
    shovel_level: u32,
) -> Vec<MaterialEfficiency> {
    let mut ranked = material_efficiencies(materials, catalog, shovel_level);
    ranked.sort_by(|a, b| {
        b.efficiency
            .partial_cmp(&a.efficiency)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

/// Groups materials by each one's best zone and ranks the zones by the
/// efficiency they concentrate, highest first.
///
/// Each material contributes to exactly one zone (its own best
/// accessible source), so a zone's score reflects what a trip there is
/// actually worth. Inaccessible materials contribute nowhere.
pub fn rank_zones(
    materials: &[MaterialRequirement],
    catalog: &Catalog,
    shovel_level: u32,
) -> Vec<ZoneScore> {
    let efficiencies = material_efficiencies(materials, catalog, shovel_level);

    let mut scores: Vec<ZoneScore> = Vec::new();
    for entry in &efficiencies {
        let Some(zone) = &entry.best_zone else {
            continue;
        };
        let index = match scores.iter().position(|s| &s.zone == zone) {
            Some(index) => index,
            None => {
                scores.push(ZoneScore {
                    zone: zone.clone(),
                    materials: Vec::new(),
                    total_efficiency: 0.0,
                    total_value: 0,
                });
                scores.len() - 1
            }
        };
        let score = &mut scores[index];
        score.materials.push(entry.name.clone());
        score.total_efficiency += entry.efficiency;
        score.total_value += entry.total_value;
    }

    scores.sort_by(|a, b| {
        b.total_efficiency
            .partial_cmp(&a.total_efficiency)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scores
}
