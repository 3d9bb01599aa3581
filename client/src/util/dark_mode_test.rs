#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn theme_color_follows_mode() {
    assert_eq!(theme_color(false), LIGHT_THEME_COLOR);
    assert_eq!(theme_color(true), DARK_THEME_COLOR);
    assert_ne!(theme_color(false), theme_color(true));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
