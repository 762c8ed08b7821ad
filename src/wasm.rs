//! WebAssembly bindings for Digplan.
//!
//! This module provides JavaScript-accessible functions for the material
//! calculator, route planner, and gear simulator. The catalog is embedded
//! in the binary so the page needs no data fetch.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::calculator::ShoppingList;
use crate::data;
use crate::models::{Catalog, Stat};
use crate::planner::{plan_route, rank_materials, rank_zones};
use crate::simulator::{recommend, GearChoice, GearLevel, Loadout};

/// One shopping-list row in the JavaScript request.
#[derive(Debug, Clone, Deserialize)]
pub struct JsSelection {
    pub id: String,
    #[serde(default)]
    pub quantity: Option<u32>,
}

/// JavaScript-friendly input for route planning.
#[derive(Debug, Clone, Deserialize)]
pub struct JsPlanInput {
    #[serde(default)]
    pub selections: Vec<JsSelection>,
    #[serde(default = "default_shovel_level")]
    pub shovel_level: u32,
}

fn default_shovel_level() -> u32 {
    1
}

/// One slot in the simulator request: either a bare item name or an
/// object carrying its own roll level.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum JsGearChoice {
    Name(String),
    WithLevel {
        name: String,
        #[serde(default)]
        level: Option<String>,
    },
}

/// JavaScript-friendly input for the gear simulator. `gear_level` is the
/// default roll for slots that do not carry their own.
#[derive(Debug, Clone, Deserialize)]
pub struct JsSimulateInput {
    #[serde(default)]
    pub neck: Option<JsGearChoice>,
    #[serde(default)]
    pub charm: Option<JsGearChoice>,
    #[serde(default)]
    pub rings: Vec<JsGearChoice>,
    #[serde(default)]
    pub gear_level: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsMaterial {
    pub name: String,
    pub requirement: Option<String>,
    pub total_quantity: u64,
    pub unit_value: u64,
    pub total_value: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsRouteMaterial {
    pub name: String,
    pub total_quantity: u64,
    pub rarity: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsRouteStop {
    pub zone: String,
    pub toughness: u32,
    pub description: Option<String>,
    pub materials: Vec<JsRouteMaterial>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsEfficiency {
    pub name: String,
    pub efficiency: f64,
    pub best_zone: Option<String>,
    pub best_rate: f64,
    pub accessible: bool,
    pub total_value: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsZoneScore {
    pub zone: String,
    pub materials: Vec<String>,
    pub total_efficiency: f64,
    pub total_value: u64,
}

/// Planning response. `success` is false when the request could not be
/// served; `error` then carries the reason.
#[derive(Debug, Clone, Serialize, Default)]
pub struct JsPlanResult {
    pub success: bool,
    pub error: Option<String>,
    pub materials: Vec<JsMaterial>,
    pub total_crafting_cost: u64,
    pub total_material_value: u64,
    pub accessible: Vec<JsRouteStop>,
    pub inaccessible: Vec<JsRouteStop>,
    pub efficiency: Vec<JsEfficiency>,
    pub zones: Vec<JsZoneScore>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct JsSimulateResult {
    pub success: bool,
    pub error: Option<String>,
    /// camelCase stat key -> summed value, in display order.
    pub stats: serde_json::Map<String, serde_json::Value>,
    pub recommendations: Vec<JsRecommendation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsRecommendation {
    pub equipment: String,
    pub reason: String,
    pub stat_boost: f64,
    pub priority: String,
    pub cost: u64,
}

fn embedded_catalog() -> Result<Catalog, String> {
    data::parse_combined(include_str!("../data/all.json")).map_err(|e| e.to_string())
}

fn convert_stop(stop: &crate::planner::RouteStop) -> JsRouteStop {
    JsRouteStop {
        zone: stop.zone.clone(),
        toughness: stop.toughness,
        description: stop.description.clone(),
        materials: stop
            .materials
            .iter()
            .map(|m| JsRouteMaterial {
                name: m.name.clone(),
                total_quantity: m.total_quantity,
                rarity: m.rarity.map(|r| r.label().to_string()),
            })
            .collect(),
    }
}

fn plan_inner(input_json: &str) -> Result<JsPlanResult, String> {
    let input: JsPlanInput = serde_json::from_str(input_json).map_err(|e| e.to_string())?;
    let catalog = embedded_catalog()?;

    let mut list = ShoppingList::new();
    for selection in &input.selections {
        list.add(&catalog, &selection.id, selection.quantity)
            .map_err(|e| e.to_string())?;
    }

    let aggregation = list.aggregate(&catalog);
    let route = plan_route(&aggregation.materials, &catalog, input.shovel_level);
    let ranked = rank_materials(&aggregation.materials, &catalog, input.shovel_level);
    let zones = rank_zones(&aggregation.materials, &catalog, input.shovel_level);

    Ok(JsPlanResult {
        success: true,
        error: None,
        materials: aggregation
            .materials
            .iter()
            .map(|m| JsMaterial {
                name: m.name.clone(),
                requirement: m.requirement.clone(),
                total_quantity: m.total_quantity,
                unit_value: m.unit_value,
                total_value: m.total_value,
            })
            .collect(),
        total_crafting_cost: aggregation.total_crafting_cost,
        total_material_value: aggregation.total_material_value,
        accessible: route.accessible.iter().map(convert_stop).collect(),
        inaccessible: route.inaccessible.iter().map(convert_stop).collect(),
        efficiency: ranked
            .iter()
            .map(|e| JsEfficiency {
                name: e.name.clone(),
                efficiency: e.efficiency,
                best_zone: e.best_zone.clone(),
                best_rate: e.best_rate,
                accessible: e.accessible,
                total_value: e.total_value,
            })
            .collect(),
        zones: zones
            .iter()
            .map(|z| JsZoneScore {
                zone: z.zone.clone(),
                materials: z.materials.clone(),
                total_efficiency: z.total_efficiency,
                total_value: z.total_value,
            })
            .collect(),
    })
}

fn resolve_choice(
    catalog: &Catalog,
    choice: &JsGearChoice,
    default_level: GearLevel,
) -> Option<GearChoice> {
    let (name, level) = match choice {
        JsGearChoice::Name(name) => (name.as_str(), default_level),
        JsGearChoice::WithLevel { name, level } => (
            name.as_str(),
            level
                .as_deref()
                .map(GearLevel::from_label)
                .unwrap_or(default_level),
        ),
    };
    catalog
        .equipment_named(name)
        .map(|item| GearChoice::new(item.clone(), level))
}

fn simulate_inner(input_json: &str) -> Result<JsSimulateResult, String> {
    let input: JsSimulateInput = serde_json::from_str(input_json).map_err(|e| e.to_string())?;
    let catalog = embedded_catalog()?;
    let default_level = input
        .gear_level
        .as_deref()
        .map(GearLevel::from_label)
        .unwrap_or_default();

    let mut loadout = Loadout::new();
    if let Some(choice) = &input.neck {
        loadout.neck = resolve_choice(&catalog, choice, default_level);
    }
    if let Some(choice) = &input.charm {
        loadout.charm = resolve_choice(&catalog, choice, default_level);
    }
    for choice in &input.rings {
        if let Some(ring) = resolve_choice(&catalog, choice, default_level) {
            loadout.add_ring(ring).map_err(|e| e.to_string())?;
        }
    }

    let totals = loadout.total_stats();
    let recommendations = recommend(&loadout, &catalog);

    Ok(JsSimulateResult {
        success: true,
        error: None,
        stats: Stat::ALL
            .iter()
            .map(|&stat| {
                let total = totals.get(&stat).copied().unwrap_or(0.0);
                (stat.key().to_string(), serde_json::json!(total))
            })
            .collect(),
        recommendations: recommendations
            .iter()
            .map(|r| JsRecommendation {
                equipment: r.equipment.clone(),
                reason: r.reason.clone(),
                stat_boost: r.stat_boost,
                priority: r.priority.label().to_string(),
                cost: r.cost,
            })
            .collect(),
    })
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| r#"{"success":false,"error":"serialization failed"}"#.to_string())
}

fn failure_json(error: String) -> String {
    to_json(&JsPlanResult {
        success: false,
        error: Some(error),
        ..JsPlanResult::default()
    })
}

/// Aggregates a shopping list and plans a farming route.
///
/// Takes a JSON request and returns a JSON response; malformed input
/// yields `{"success": false, ...}` rather than a panic.
#[wasm_bindgen]
pub fn plan(input_json: &str) -> String {
    match plan_inner(input_json) {
        Ok(result) => to_json(&result),
        Err(error) => failure_json(error),
    }
}

/// Simulates a gear loadout and suggests upgrades. JSON in, JSON out.
#[wasm_bindgen]
pub fn simulate(input_json: &str) -> String {
    match simulate_inner(input_json) {
        Ok(result) => to_json(&result),
        Err(error) => to_json(&JsSimulateResult {
            success: false,
            error: Some(error),
            ..JsSimulateResult::default()
        }),
    }
}

/// Lists the embedded equipment catalog as JSON, for populating pickers.
#[wasm_bindgen]
pub fn list_equipment() -> String {
    #[derive(Serialize)]
    struct Row {
        id: String,
        name: String,
        kind: String,
        rarity: Option<&'static str>,
        cost: u64,
        materials: String,
        buffs: String,
    }

    let catalog = match embedded_catalog() {
        Ok(catalog) => catalog,
        Err(error) => return failure_json(error),
    };

    let rows: Vec<Row> = catalog
        .equipment
        .iter()
        .enumerate()
        .map(|(index, item)| Row {
            id: item.id.clone().unwrap_or_else(|| index.to_string()),
            name: item.name.clone(),
            kind: item.kind.label().to_string(),
            rarity: item.rarity.map(|r| r.label()),
            cost: item.cost,
            materials: item.materials_text.clone(),
            buffs: item.buffs_text.clone(),
        })
        .collect();
    to_json(&rows)
}

/// Returns the crate version.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
