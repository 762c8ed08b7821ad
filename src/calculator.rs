//! Shopping list and material aggregation.
//!
//! A [`ShoppingList`] holds the equipment the player intends to craft.
//! [`ShoppingList::aggregate`] folds every selection's material lines
//! into per-material totals, valued against the ore catalog.

use crate::error::{Error, Result};
use crate::models::{Catalog, EquipmentItem, MaterialRequirement};

/// One equipment selection with a craft count.
#[derive(Debug, Clone)]
pub struct SelectedEquipment {
    pub equipment: EquipmentItem,
    pub quantity: u32,
}

/// The player's crafting session: an ordered list of selections.
///
/// Selections keep insertion order; re-adding an item already on the
/// list bumps its quantity instead of appending a duplicate row.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<SelectedEquipment>,
}

/// Material totals for a whole shopping list.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Per-material totals in first-appearance order.
    pub materials: Vec<MaterialRequirement>,
    /// Sum of crafting costs across all selections.
    pub total_crafting_cost: u64,
    /// Sum of ore sell values across all material contributions.
    pub total_material_value: u64,
}

impl ShoppingList {
    pub fn new() -> ShoppingList {
        ShoppingList::default()
    }

    pub fn items(&self) -> &[SelectedEquipment] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds an equipment item by catalog identifier.
    ///
    /// An omitted quantity, or an explicit 0, counts as 1. If the same
    /// item (by name) is already on the list its quantity is increased.
    ///
    /// # Errors
    ///
    /// [`Error::NoEquipmentSelected`] when `id` is empty, and
    /// [`Error::UnknownEquipment`] when it resolves to nothing. The list
    /// is unchanged in both cases.
    pub fn add(&mut self, catalog: &Catalog, id: &str, quantity: Option<u32>) -> Result<()> {
        if id.is_empty() {
            return Err(Error::NoEquipmentSelected);
        }
        let equipment = catalog
            .find_equipment(id)
            .ok_or_else(|| Error::UnknownEquipment(id.to_string()))?;
        self.add_item(equipment.clone(), quantity);
        Ok(())
    }

    /// Adds an already-resolved equipment item. Used by callers that
    /// resolve by display name rather than id.
    pub fn add_item(&mut self, equipment: EquipmentItem, quantity: Option<u32>) {
        let quantity = match quantity {
            Some(0) | None => 1,
            Some(n) => n,
        };
        if let Some(existing) = self.items.iter_mut().find(|s| s.equipment.name == equipment.name) {
            existing.quantity += quantity;
            return;
        }
        self.items.push(SelectedEquipment {
            equipment,
            quantity,
        });
    }

    /// Removes the selection at `index`. Out-of-range indices are a
    /// no-op, matching the UI's tolerance of stale row references.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Aggregates all selections into per-material totals.
    ///
    /// Materials are keyed by `(name, requirement)`, so `Sapphire` and
    /// `Sapphire (Flawless)` stay separate rows. Entries appear in the
    /// order their key is first seen. The unit value comes from the ore
    /// catalog via [`Catalog::find_ore`]; when the same key is seen again
    /// the unit value is refreshed from the latest lookup and the row's
    /// total value is recomputed from it. `total_material_value` is
    /// accumulated per contribution as it happens, independently of the
    /// per-row totals.
    pub fn aggregate(&self, catalog: &Catalog) -> Aggregation {
        let mut result = Aggregation::default();

        for selection in &self.items {
            result.total_crafting_cost +=
                selection.equipment.cost * u64::from(selection.quantity);

            for line in &selection.equipment.materials {
                let contributed = u64::from(line.quantity) * u64::from(selection.quantity);
                let unit_value = catalog
                    .find_ore(&line.name)
                    .and_then(|ore| ore.value);

                let position = result
                    .materials
                    .iter()
                    .position(|m| m.matches(&line.name, line.requirement.as_deref()));
                match position {
                    Some(i) => {
                        let entry = &mut result.materials[i];
                        entry.total_quantity += contributed;
                        if let Some(value) = unit_value {
                            entry.unit_value = value;
                            entry.total_value = value * entry.total_quantity;
                        }
                    }
                    None => {
                        let value = unit_value.unwrap_or(0);
                        result.materials.push(MaterialRequirement {
                            name: line.name.clone(),
                            requirement: line.requirement.clone(),
                            total_quantity: contributed,
                            unit_value: value,
                            total_value: value * contributed,
                        });
                    }
                }

                if let Some(value) = unit_value {
                    result.total_material_value += value * contributed;
                }
            }
        }

        result
    }
}
