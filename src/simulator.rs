//! Gear loadout simulation and upgrade recommendations.
//!
//! A loadout is one necklace, one charm (or amulet), and up to eight
//! rings, each slot with its own assumed roll level.
//! [`Loadout::total_stats`] sums the equipped items' parsed stat ranges;
//! [`recommend`] suggests upgrades for stats below their useful
//! thresholds and for empty slots.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::models::{Catalog, EquipmentItem, EquipmentKind, Rarity, Stat};

/// Which end of an item's stat range to assume when summing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GearLevel {
    Min,
    #[default]
    Mid,
    Max,
}

impl GearLevel {
    /// Parses a level label leniently; anything unrecognized is `Mid`.
    pub fn from_label(label: &str) -> GearLevel {
        match label.trim().to_lowercase().as_str() {
            "min" => GearLevel::Min,
            "max" => GearLevel::Max,
            _ => GearLevel::Mid,
        }
    }

    /// Picks this level's value out of a `[min, mid, max]` range.
    pub fn pick(&self, range: [f64; 3]) -> f64 {
        match self {
            GearLevel::Min => range[0],
            GearLevel::Mid => range[1],
            GearLevel::Max => range[2],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GearLevel::Min => "min",
            GearLevel::Mid => "mid",
            GearLevel::Max => "max",
        }
    }
}

/// The three simulator slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Neck,
    Charm,
    Ring,
}

impl SlotKind {
    /// Whether an equipment category can occupy this slot. Amulets count
    /// as charms.
    pub fn accepts(&self, kind: &EquipmentKind) -> bool {
        match self {
            SlotKind::Neck => matches!(kind, EquipmentKind::Necklace),
            SlotKind::Charm => matches!(kind, EquipmentKind::Charm | EquipmentKind::Amulet),
            SlotKind::Ring => matches!(kind, EquipmentKind::Ring),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SlotKind::Neck => "neck",
            SlotKind::Charm => "charm",
            SlotKind::Ring => "ring",
        }
    }
}

/// One equipped item together with its assumed roll level.
#[derive(Debug, Clone)]
pub struct GearChoice {
    pub item: EquipmentItem,
    pub level: GearLevel,
}

impl GearChoice {
    pub fn new(item: EquipmentItem, level: GearLevel) -> GearChoice {
        GearChoice { item, level }
    }
}

/// A gear loadout: the equipped item per slot. Each slot carries its own
/// roll level, so a max-rolled necklace can sit next to mid-rolled rings.
#[derive(Debug, Clone, Default)]
pub struct Loadout {
    pub neck: Option<GearChoice>,
    pub charm: Option<GearChoice>,
    pub rings: Vec<GearChoice>,
}

impl Loadout {
    pub const MAX_RINGS: usize = 8;

    pub fn new() -> Loadout {
        Loadout::default()
    }

    /// Equips a ring.
    ///
    /// # Errors
    ///
    /// [`Error::RingSlotsFull`] once all eight slots are taken.
    pub fn add_ring(&mut self, ring: GearChoice) -> Result<()> {
        if self.rings.len() >= Loadout::MAX_RINGS {
            return Err(Error::RingSlotsFull);
        }
        self.rings.push(ring);
        Ok(())
    }

    /// Unequips the ring at `index`; out-of-range is a no-op.
    pub fn remove_ring(&mut self, index: usize) {
        if index < self.rings.len() {
            self.rings.remove(index);
        }
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        self.neck = None;
        self.charm = None;
        self.rings.clear();
    }

    fn equipped(&self) -> impl Iterator<Item = &GearChoice> {
        self.neck
            .iter()
            .chain(self.charm.iter())
            .chain(self.rings.iter())
    }

    /// Sums every equipped item's stats, each at its own roll level.
    ///
    /// All nine stats are present in the result, zeroed when no item
    /// contributes to them.
    pub fn total_stats(&self) -> BTreeMap<Stat, f64> {
        let mut totals: BTreeMap<Stat, f64> =
            Stat::ALL.iter().map(|&stat| (stat, 0.0)).collect();
        for choice in self.equipped() {
            for (&stat, &range) in &choice.item.stats {
                if let Some(total) = totals.get_mut(&stat) {
                    *total += choice.level.pick(range);
                }
            }
        }
        totals
    }
}

/// How urgent a recommendation is; sorts High first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// One upgrade suggestion from [`recommend`].
#[derive(Debug, Clone)]
pub struct Recommendation {
    /// Suggested item, labelled with its assumed roll, e.g.
    /// `"Abyssal Loop (max)"`.
    pub equipment: String,
    pub reason: String,
    pub target_stat: Option<Stat>,
    /// The item's max-roll value for the target stat.
    pub stat_boost: f64,
    pub priority: Priority,
    pub cost: u64,
    pub rarity: Option<Rarity>,
}

/// Catalog equipment eligible for a slot, in catalog order: right
/// category and at least one parsed stat.
fn slot_candidates<'a>(catalog: &'a Catalog, slot: SlotKind) -> Vec<&'a EquipmentItem> {
    catalog
        .equipment
        .iter()
        .filter(|item| slot.accepts(&item.kind) && !item.stats.is_empty())
        .collect()
}

/// Equipment eligible for a slot, sorted by rarity rank then cost so
/// stronger items come last. For picker listings; recommendation
/// tie-breaks use the unsorted catalog order instead.
pub fn equipment_for_slot<'a>(catalog: &'a Catalog, slot: SlotKind) -> Vec<&'a EquipmentItem> {
    let mut candidates = slot_candidates(catalog, slot);
    candidates.sort_by_key(|item| (item.rarity.map(|r| r.rank()).unwrap_or(0), item.cost));
    candidates
}

/// The candidate whose max roll of `stat` is highest; ties keep the
/// earliest candidate.
fn best_for_stat<'a>(candidates: &[&'a EquipmentItem], stat: Stat) -> Option<&'a EquipmentItem> {
    candidates
        .iter()
        .filter(|item| item.stats.contains_key(&stat))
        .fold(None, |best: Option<&EquipmentItem>, item| {
            let value = item.stats[&stat][2];
            match best {
                Some(current) if current.stats[&stat][2] >= value => Some(current),
                _ => Some(item),
            }
        })
}

fn slot_priority(slot: SlotKind) -> Priority {
    match slot {
        SlotKind::Neck | SlotKind::Charm => Priority::High,
        SlotKind::Ring => Priority::Medium,
    }
}

/// Builds upgrade suggestions for a loadout.
///
/// For every stat whose total falls below its threshold, the strongest
/// catalog item per empty slot kind is suggested. Filling the neck or
/// charm slot is high priority, adding rings medium; a generic "fill
/// all ring slots" nudge is added at low priority while slots remain.
/// Duplicate suggestions are collapsed, and the list is sorted by
/// priority, then stat boost descending, then capped at ten entries.
pub fn recommend(loadout: &Loadout, catalog: &Catalog) -> Vec<Recommendation> {
    let totals = loadout.total_stats();

    let mut open_slots: Vec<SlotKind> = Vec::new();
    if loadout.neck.is_none() {
        open_slots.push(SlotKind::Neck);
    }
    if loadout.charm.is_none() {
        open_slots.push(SlotKind::Charm);
    }
    if loadout.rings.len() < Loadout::MAX_RINGS {
        open_slots.push(SlotKind::Ring);
    }

    let mut recommendations: Vec<Recommendation> = Vec::new();

    for &stat in Stat::ALL.iter() {
        if totals.get(&stat).copied().unwrap_or(0.0) >= stat.recommend_threshold() {
            continue;
        }
        for &slot in &open_slots {
            // Catalog order, so stat ties resolve to the earliest entry.
            let candidates = slot_candidates(catalog, slot);
            let Some(item) = best_for_stat(&candidates, stat) else {
                continue;
            };
            recommendations.push(Recommendation {
                equipment: format!("{} (max)", item.name),
                reason: format!(
                    "Raises {} the most for the {} slot",
                    stat.label(),
                    slot.label()
                ),
                target_stat: Some(stat),
                stat_boost: item.stats[&stat][2],
                priority: slot_priority(slot),
                cost: item.cost,
                rarity: item.rarity,
            });
        }
    }

    if loadout.rings.len() < Loadout::MAX_RINGS {
        recommendations.push(Recommendation {
            equipment: format!(
                "Fill all {} ring slots",
                Loadout::MAX_RINGS
            ),
            reason: "Every empty ring slot is a free stat line".to_string(),
            target_stat: None,
            stat_boost: 0.0,
            priority: Priority::Low,
            cost: 0,
            rarity: None,
        });
    }

    // Collapse duplicates by suggestion text, keeping the first.
    let mut seen: Vec<String> = Vec::new();
    recommendations.retain(|r| {
        let key = format!("{}|{}", r.equipment, r.reason);
        if seen.contains(&key) {
            false
        } else {
            seen.push(key);
            true
        }
    });

    recommendations.sort_by(|a, b| {
        a.priority.cmp(&b.priority).then(
            b.stat_boost
                .partial_cmp(&a.stat_boost)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });
    recommendations.truncate(10);
    recommendations
}
