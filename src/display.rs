//! Display and formatting utilities for Digplan.
//!
//! This module provides functions for formatting output and displaying
//! planning results to the user in a readable format.

use crate::calculator::Aggregation;
use crate::models::Stat;
use crate::planner::{FarmingRoute, MaterialEfficiency, RouteStop, ZoneScore};
use crate::simulator::{Loadout, Recommendation};

/// Formats a coin amount with thousands separators.
///
/// # Example
///
/// ```
/// use digplan::display::format_currency;
///
/// assert_eq!(format_currency(1250), "$1,250");
/// assert_eq!(format_currency(45), "$45");
/// ```
pub fn format_currency(coins: u64) -> String {
    let digits = coins.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Renders a toughness rating as filled/empty stars, capped at 5.
///
/// # Example
///
/// ```
/// use digplan::display::format_toughness;
///
/// assert_eq!(format_toughness(3), "***--");
/// ```
pub fn format_toughness(toughness: u32) -> String {
    let filled = toughness.min(5) as usize;
    format!("{}{}", "*".repeat(filled), "-".repeat(5 - filled))
}

/// Displays the aggregated material totals and the cost/value analysis.
pub fn display_materials(aggregation: &Aggregation) {
    println!();
    println!("+================================================================+");
    println!("|                    MATERIALS NEEDED                            |");
    println!("+================================================================+");
    println!();

    if aggregation.materials.is_empty() {
        println!("  (nothing selected)");
        return;
    }

    for material in &aggregation.materials {
        let qualifier = material
            .requirement
            .as_deref()
            .map(|r| format!(" ({})", r))
            .unwrap_or_default();
        if material.unit_value > 0 {
            println!(
                "  {:>4} x {}{}  @ {} = {}",
                material.total_quantity,
                material.name,
                qualifier,
                format_currency(material.unit_value),
                format_currency(material.total_value)
            );
        } else {
            println!(
                "  {:>4} x {}{}  (value unknown)",
                material.total_quantity, material.name, qualifier
            );
        }
    }

    println!();
    println!("[COST ANALYSIS]");
    println!("----------------------------------------------------------------");
    println!(
        "  Crafting cost:        {}",
        format_currency(aggregation.total_crafting_cost)
    );
    println!(
        "  Material sell value:  {}",
        format_currency(aggregation.total_material_value)
    );
    if aggregation.total_material_value > aggregation.total_crafting_cost {
        println!(
            "  Selling raw materials beats crafting by {}",
            format_currency(aggregation.total_material_value - aggregation.total_crafting_cost)
        );
    } else {
        println!(
            "  Crafting consumes {} more value than the materials sell for",
            format_currency(aggregation.total_crafting_cost - aggregation.total_material_value)
        );
    }
}

fn display_stop(stop: &RouteStop) {
    println!(
        "  [{}] {} (toughness {})",
        format_toughness(stop.toughness),
        stop.zone,
        stop.toughness
    );
    if let Some(description) = &stop.description {
        println!("        {}", description);
    }
    for material in &stop.materials {
        let rarity = material
            .rarity
            .map(|r| format!(" [{}]", r.label()))
            .unwrap_or_default();
        println!(
            "        collect {} x {}{}",
            material.total_quantity, material.name, rarity
        );
    }
}

/// Displays the planned farming route.
pub fn display_route(route: &FarmingRoute, shovel_level: u32) {
    println!();
    println!("+================================================================+");
    println!("|                     FARMING ROUTE                              |");
    println!("+================================================================+");
    println!();
    println!("  Shovel level: {}", shovel_level);
    println!();

    if route.accessible.is_empty() && route.inaccessible.is_empty() {
        println!("  No known zones drop the materials you need.");
        return;
    }

    if !route.accessible.is_empty() {
        println!("[DIG NOW]");
        println!("----------------------------------------------------------------");
        for stop in &route.accessible {
            display_stop(stop);
        }
        println!();
    }

    if !route.inaccessible.is_empty() {
        println!("[LOCKED - NEEDS A BETTER SHOVEL]");
        println!("----------------------------------------------------------------");
        for stop in &route.inaccessible {
            display_stop(stop);
        }
        println!();
    }
}

/// Displays the top farming-efficiency picks and the best zones.
///
/// Only the top 5 materials and top 3 zones are printed; the full
/// rankings stay available to library callers.
pub fn display_efficiency(ranked: &[MaterialEfficiency], zones: &[ZoneScore]) {
    println!();
    println!("+================================================================+");
    println!("|                  FARMING EFFICIENCY                            |");
    println!("+================================================================+");
    println!();

    println!("[BEST MATERIALS TO FARM]");
    println!("----------------------------------------------------------------");
    for (rank, entry) in ranked.iter().take(5).enumerate() {
        if entry.accessible {
            let zone = entry.best_zone.as_deref().unwrap_or("?");
            println!(
                "  {}. {} - {:.2}%/dig in {} ({} each, {} total)",
                rank + 1,
                entry.name,
                entry.best_rate,
                zone,
                format_currency(entry.unit_value),
                format_currency(entry.total_value)
            );
        } else {
            println!(
                "  {}. {} - no accessible source at your shovel level",
                rank + 1,
                entry.name
            );
        }
    }

    if !zones.is_empty() {
        println!();
        println!("[BEST ZONES]");
        println!("----------------------------------------------------------------");
        for (rank, score) in zones.iter().take(3).enumerate() {
            println!(
                "  {}. {} - {} worth of materials: {}",
                rank + 1,
                score.zone,
                format_currency(score.total_value),
                score.materials.join(", ")
            );
        }
    }
}

/// Displays a loadout's summed stats and the upgrade suggestions.
pub fn display_loadout(loadout: &Loadout, recommendations: &[Recommendation]) {
    println!();
    println!("+================================================================+");
    println!("|                    GEAR SIMULATOR                              |");
    println!("+================================================================+");
    println!();

    println!("[EQUIPPED]");
    println!("----------------------------------------------------------------");
    match &loadout.neck {
        Some(choice) => println!("  Neck:  {} ({})", choice.item.name, choice.level.label()),
        None => println!("  Neck:  (empty)"),
    }
    match &loadout.charm {
        Some(choice) => println!("  Charm: {} ({})", choice.item.name, choice.level.label()),
        None => println!("  Charm: (empty)"),
    }
    if loadout.rings.is_empty() {
        println!("  Rings: (none)");
    } else {
        for (i, ring) in loadout.rings.iter().enumerate() {
            println!("  Ring {}: {} ({})", i + 1, ring.item.name, ring.level.label());
        }
    }

    println!();
    println!("[TOTAL STATS]");
    println!("----------------------------------------------------------------");
    let totals = loadout.total_stats();
    let mut any = false;
    for stat in Stat::ALL {
        let total = totals.get(&stat).copied().unwrap_or(0.0);
        if total == 0.0 {
            continue;
        }
        any = true;
        let suffix = if stat.is_percent() { "%" } else { "" };
        println!("  {:<16} {:.1}{}", stat.label(), total, suffix);
    }
    if !any {
        println!("  (no stats - nothing equipped)");
    }

    if !recommendations.is_empty() {
        println!();
        println!("[SUGGESTED UPGRADES]");
        println!("----------------------------------------------------------------");
        for rec in recommendations {
            let cost = if rec.cost > 0 {
                format!(" - {}", format_currency(rec.cost))
            } else {
                String::new()
            };
            println!(
                "  [{}] {}{}",
                rec.priority.label().to_uppercase(),
                rec.equipment,
                cost
            );
            println!("         {}", rec.reason);
        }
    }
}
