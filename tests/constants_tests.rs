// Host-side tests for the DOM hook names the overlay relies on.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use field_core::Section;

#[test]
fn element_ids_are_distinct_and_non_empty() {
    let ids = [CANVAS_ID, LOGO_ID, MOBILE_MENU_ID, EXPLORE_ID, INTRO_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn element_ids_do_not_collide_with_section_ids() {
    let ids = [CANVAS_ID, LOGO_ID, MOBILE_MENU_ID, EXPLORE_ID, INTRO_ID];
    for s in Section::ALL {
        assert!(!ids.contains(&s.element_id().as_str()));
    }
}

#[test]
fn attributes_are_data_attributes() {
    assert!(NAV_SECTION_ATTR.starts_with("data-"));
    assert!(FALLBACK_ATTR.starts_with("data-"));
    assert_ne!(NAV_SECTION_ATTR, FALLBACK_ATTR);
}

#[test]
fn class_names_are_distinct() {
    assert_ne!(HIDDEN_CLASS, ACTIVE_CLASS);
    assert_ne!(HIDDEN_CLASS, INTRO_WORD_CLASS);
    assert_ne!(ACTIVE_CLASS, INTRO_WORD_CLASS);
}
