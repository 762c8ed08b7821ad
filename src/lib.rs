//! # Digplan
//!
//! A command-line tool and library for planning crafting sessions in a
//! digging game: what materials you need, where to farm them, and what
//! your gear is worth.
//!
//! Given a shopping list of equipment to craft, the crate aggregates the
//! raw material requirements, values them against the ore catalog, plans
//! a farming route through the zones your shovel can handle, ranks
//! materials and zones by expected value per dig, and simulates gear
//! loadout stats with upgrade suggestions.
//!
//! ## Modules
//!
//! - [`models`] - Catalog records, stat types, and JSON row structures
//! - [`parse`] - Text parsers for materials lists, buffs, and currency
//! - [`data`] - Catalog loading with legacy-format fallbacks
//! - [`calculator`] - Shopping list and material aggregation
//! - [`planner`] - Farming routes and efficiency rankings
//! - [`simulator`] - Gear loadouts and upgrade recommendations
//! - [`display`] - Output formatting and display utilities
//! - [`wasm`] - WebAssembly bindings with an embedded catalog
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use digplan::{
//!     calculator::ShoppingList,
//!     data::load_catalog,
//!     display::{display_materials, display_route},
//!     planner::plan_route,
//! };
//!
//! # fn main() -> digplan::error::Result<()> {
//! let catalog = load_catalog(Path::new("data"))?;
//!
//! // Craft three Opal Rings.
//! let mut list = ShoppingList::new();
//! list.add(&catalog, "3", Some(3))?;
//!
//! let aggregation = list.aggregate(&catalog);
//! display_materials(&aggregation);
//!
//! // Plan a route for a level-4 shovel.
//! let route = plan_route(&aggregation.materials, &catalog, 4);
//! display_route(&route, 4);
//! # Ok(())
//! # }
//! ```

pub mod calculator;
pub mod data;
pub mod display;
pub mod error;
pub mod models;
pub mod parse;
pub mod planner;
pub mod simulator;
pub mod wasm;
