// Host tests for the pure web-side helpers.
// The main crate is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]

include!("../src/keys.rs");
include!("../src/labels.rs");

#[test]
fn test_arrow_keys_map() {
    assert_eq!(arrow_for_key("ArrowLeft"), Some(Arrow::Left));
    assert_eq!(arrow_for_key("ArrowDown"), Some(Arrow::Down));
    assert_eq!(arrow_for_key("a"), None);
}

#[test]
fn test_toggle_keys_map() {
    assert_eq!(toggle_for_key("s"), Some(ToggleKey::Slomo));
    assert_eq!(toggle_for_key("D"), Some(ToggleKey::Dark));
    assert_eq!(toggle_for_key("m"), Some(ToggleKey::Heatmap));
    assert_eq!(toggle_for_key("x"), None);
}

#[test]
fn test_held_arrows_direction() {
    let mut held = HeldArrows::default();
    assert_eq!(held.direction(), DVec2::ZERO);
    assert!(held.set(Arrow::Right, true));
    assert!(!held.set(Arrow::Right, true));
    assert!(held.set(Arrow::Up, true));
    assert_eq!(held.direction(), DVec2::new(1.0, -1.0));
    held.set(Arrow::Left, true);
    assert_eq!(held.direction(), DVec2::new(0.0, -1.0));
    held.clear();
    assert_eq!(held.direction(), DVec2::ZERO);
}

#[test]
fn test_count_captions() {
    assert_eq!(local_count_text(0), "you've boinged 0 times");
    assert_eq!(local_count_text(1), "you've boinged 1 time");
    assert_eq!(global_count_text(Some(1)), "1 boing worldwide");
    assert_eq!(global_count_text(Some(5000)), "5000 boings worldwide");
    assert_eq!(global_count_text(None), "… boings worldwide");
}
