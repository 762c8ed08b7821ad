//! Tests for catalog lookup behavior.

use digplan::data::parse_combined;
use digplan::models::Catalog;

fn fixture() -> Catalog {
    parse_combined(
        r#"{
            "crafting": [
                {"item": "Opal Ring", "type": "Ring", "cost": "1,000",
                 "materials": "2 Fire Opal, 6 Coal", "buffs": "Dig Strength: 1-2"},
                {"id": "lucky-necklace", "item": "Lucky Necklace", "type": "Necklace",
                 "cost": "2,400", "materials": "4 Amethyst", "buffs": "Luck: 3-5"}
            ],
            "minerals": [
                {"name": "Coal", "value": "$15", "locations": ["Grasslands"],
                 "dropChances": {"Grasslands": "(22.00% or ~1 in 5)"}},
                {"name": "Fire Opal", "value": "$500", "locations": ["Volcanic Crater"],
                 "dropChances": {"Volcanic Crater": "(10.00% or ~1 in 10)"}},
                {"name": "Opal", "value": "$90", "locations": ["Crystal Cave"],
                 "dropChances": {"Crystal Cave": "(12.00% or ~1 in 8)"}}
            ],
            "locations": [
                {"name": "Grasslands", "shovelToughness": 1},
                {"name": "Crystal Cave", "shovelToughness": 2},
                {"name": "Volcanic Crater", "shovelToughness": 4}
            ]
        }"#,
    )
    .expect("fixture catalog should parse")
}

#[test]
fn test_find_ore_exact_match() {
    let catalog = fixture();
    let ore = catalog.find_ore("Fire Opal").expect("should find Fire Opal");
    assert_eq!(ore.value, Some(500));
}

#[test]
fn test_find_ore_exact_is_case_insensitive() {
    let catalog = fixture();
    let ore = catalog.find_ore("fire opal").expect("should find fire opal");
    assert_eq!(ore.name, "Fire Opal");
}

#[test]
fn test_find_ore_exact_beats_substring() {
    // "Opal" is a substring of "Fire Opal", which appears earlier in the
    // catalog; the exact match must still win.
    let catalog = fixture();
    let ore = catalog.find_ore("Opal").expect("should find Opal");
    assert_eq!(ore.name, "Opal");
    assert_eq!(ore.value, Some(90));
}

#[test]
fn test_find_ore_substring_fallback() {
    let catalog = fixture();
    // Query contains the catalog name.
    let ore = catalog.find_ore("Refined Coal").expect("should fuzzy-match Coal");
    assert_eq!(ore.name, "Coal");
    // Catalog name contains the query.
    let ore = catalog.find_ore("Fire").expect("should fuzzy-match Fire Opal");
    assert_eq!(ore.name, "Fire Opal");
}

#[test]
fn test_find_ore_exact_in_fallback_beats_substring_in_primary() {
    let mut catalog = fixture();
    let legacy = parse_combined(
        r#"{"minerals": [{"name": "Pal", "value": "$5", "locations": [],
             "dropChances": {}}]}"#,
    )
    .expect("legacy fixture should parse");
    catalog.fallback_minerals = legacy.minerals;

    // "Pal" is a substring of "Fire Opal" and "Opal" in the primary
    // list, but the fallback list holds an exact match.
    let ore = catalog.find_ore("Pal").expect("should find Pal");
    assert_eq!(ore.value, Some(5));
}

#[test]
fn test_find_ore_missing() {
    let catalog = fixture();
    assert!(catalog.find_ore("Mithril").is_none());
}

#[test]
fn test_find_zone_exact_beats_substring() {
    let catalog = fixture();
    let zone = catalog.find_zone("Crystal Cave").expect("should find zone");
    assert_eq!(zone.shovel_toughness, 2);
    let zone = catalog.find_zone("crater").expect("should fuzzy-match");
    assert_eq!(zone.name, "Volcanic Crater");
}

#[test]
fn test_zone_toughness_defaults_to_one() {
    let catalog = fixture();
    assert_eq!(catalog.zone_toughness("Volcanic Crater"), 4);
    assert_eq!(catalog.zone_toughness("Nowhere Plains"), 1);
}

#[test]
fn test_find_equipment_by_explicit_id() {
    let catalog = fixture();
    let item = catalog
        .find_equipment("lucky-necklace")
        .expect("should resolve by id");
    assert_eq!(item.name, "Lucky Necklace");
}

#[test]
fn test_find_equipment_by_index() {
    let catalog = fixture();
    let item = catalog.find_equipment("0").expect("should resolve by index");
    assert_eq!(item.name, "Opal Ring");
    assert!(catalog.find_equipment("99").is_none());
}

#[test]
fn test_equipment_named_case_insensitive() {
    let catalog = fixture();
    let item = catalog
        .equipment_named("opal ring")
        .expect("should resolve by name");
    assert_eq!(item.cost, 1000);
    assert!(catalog.equipment_named("Opal").is_none(), "name match is exact");
}

#[test]
fn test_drop_chances_preserve_source_order() {
    let catalog = parse_combined(
        r#"{"minerals": [{"name": "Tin", "value": "$10", "locations": [],
             "dropChances": {
                 "Zeta Flats": "(5.00% or ~1 in 20)",
                 "Alpha Hills": "(5.00% or ~1 in 20)"
             }}]}"#,
    )
    .expect("should parse");
    let ore = catalog.find_ore("Tin").expect("should find Tin");
    assert_eq!(ore.drop_chances[0].zone, "Zeta Flats");
    assert_eq!(ore.drop_chances[1].zone, "Alpha Hills");
}
