//! Tests for display and formatting utilities.

use digplan::display::{format_currency, format_toughness};

#[test]
fn test_format_currency() {
    assert_eq!(format_currency(0), "$0");
    assert_eq!(format_currency(45), "$45");
    assert_eq!(format_currency(450), "$450");
    assert_eq!(format_currency(1250), "$1,250");
    assert_eq!(format_currency(9000), "$9,000");
    assert_eq!(format_currency(210000), "$210,000");
    assert_eq!(format_currency(1234567), "$1,234,567");
}

#[test]
fn test_format_toughness() {
    assert_eq!(format_toughness(1), "*----");
    assert_eq!(format_toughness(3), "***--");
    assert_eq!(format_toughness(5), "*****");
}

#[test]
fn test_format_toughness_caps_at_five() {
    assert_eq!(format_toughness(9), "*****");
    assert_eq!(format_toughness(0), "-----");
}
