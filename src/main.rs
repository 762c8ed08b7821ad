//! Digplan - Command Line Interface
//!
//! This is the main entry point for the crafting planner.
//! Run with `--help` to see all available options.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use digplan::{
    calculator::ShoppingList,
    data::load_catalog,
    display::{display_efficiency, display_loadout, display_materials, display_route},
    models::Catalog,
    planner::{plan_route, rank_materials, rank_zones},
    simulator::{recommend, GearChoice, GearLevel, Loadout},
};

/// Command-line arguments for Digplan.
#[derive(Parser, Debug)]
#[command(name = "digplan")]
#[command(author, version, about = "Plan crafting materials, farming routes, and gear loadouts", long_about = None)]
struct Args {
    /// Directory containing the catalog JSON files
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Your shovel level (zones tougher than this are marked locked)
    #[arg(short, long, default_value = "1")]
    shovel_level: u32,

    /// Equipment to craft, as "Name" or "Name:QTY". Repeatable.
    #[arg(short, long)]
    equipment: Vec<String>,

    /// Necklace to equip in the gear simulator
    #[arg(long)]
    neck: Option<String>,

    /// Charm or amulet to equip in the gear simulator
    #[arg(long)]
    charm: Option<String>,

    /// Ring to equip in the gear simulator (up to 8). Repeatable.
    #[arg(long)]
    ring: Vec<String>,

    /// Stat roll to assume for equipped gear: min, mid, or max
    #[arg(long, default_value = "mid")]
    gear_level: String,
}

/// Splits a `Name:QTY` selection; a plain name means quantity 1.
fn split_selection(raw: &str) -> (&str, Option<u32>) {
    match raw.rsplit_once(':') {
        Some((name, qty)) => match qty.trim().parse::<u32>() {
            Ok(qty) => (name.trim(), Some(qty)),
            Err(_) => (raw.trim(), None),
        },
        None => (raw.trim(), None),
    }
}

fn build_list(catalog: &Catalog, selections: &[String]) -> ShoppingList {
    let mut list = ShoppingList::new();
    for raw in selections {
        let (name, quantity) = split_selection(raw);
        // Try the id forms first, then fall back to the display name.
        if list.add(catalog, name, quantity).is_ok() {
            continue;
        }
        match catalog.equipment_named(name) {
            Some(item) => list.add_item(item.clone(), quantity),
            None => eprintln!("Warning: unknown equipment '{}', skipping.", name),
        }
    }
    list
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    println!("Digplan - Crafting & Farming Planner");
    println!("================================================================");
    println!();
    println!("Configuration:");
    println!("  Data directory:  {}", args.data_dir.display());
    println!("  Shovel level:    {}", args.shovel_level);

    let catalog = match load_catalog(&args.data_dir) {
        Ok(catalog) => catalog,
        Err(error) => {
            eprintln!("Warning: {}. Continuing with an empty catalog.", error);
            Catalog::default()
        }
    };
    println!();
    println!(
        "Loaded {} equipment, {} ores, {} zones.",
        catalog.equipment.len(),
        catalog.minerals.len() + catalog.fallback_minerals.len(),
        catalog.zones.len()
    );

    if !args.equipment.is_empty() {
        let list = build_list(&catalog, &args.equipment);
        let aggregation = list.aggregate(&catalog);
        display_materials(&aggregation);

        let route = plan_route(&aggregation.materials, &catalog, args.shovel_level);
        display_route(&route, args.shovel_level);

        let ranked = rank_materials(&aggregation.materials, &catalog, args.shovel_level);
        let zones = rank_zones(&aggregation.materials, &catalog, args.shovel_level);
        display_efficiency(&ranked, &zones);
    }

    let wants_simulator =
        args.neck.is_some() || args.charm.is_some() || !args.ring.is_empty();
    if wants_simulator {
        // The CLI applies one roll level to every slot; the library
        // supports mixed levels per slot.
        let level = GearLevel::from_label(&args.gear_level);
        let mut loadout = Loadout::new();

        if let Some(name) = &args.neck {
            loadout.neck = catalog
                .equipment_named(name)
                .map(|item| GearChoice::new(item.clone(), level));
            if loadout.neck.is_none() {
                eprintln!("Warning: unknown necklace '{}'.", name);
            }
        }
        if let Some(name) = &args.charm {
            loadout.charm = catalog
                .equipment_named(name)
                .map(|item| GearChoice::new(item.clone(), level));
            if loadout.charm.is_none() {
                eprintln!("Warning: unknown charm '{}'.", name);
            }
        }
        for name in &args.ring {
            match catalog.equipment_named(name) {
                Some(ring) => {
                    if let Err(error) = loadout.add_ring(GearChoice::new(ring.clone(), level)) {
                        eprintln!("Warning: {}.", error);
                        break;
                    }
                }
                None => eprintln!("Warning: unknown ring '{}'.", name),
            }
        }

        let recommendations = recommend(&loadout, &catalog);
        display_loadout(&loadout, &recommendations);
    }

    if args.equipment.is_empty() && !wants_simulator {
        println!();
        println!("Nothing to do: pass --equipment and/or gear slots. See --help.");
    }

    Ok(())
}
