// Overlay navigation state, intro timing and image fallback.

use field_core::constants::INTRO_TEXT;
use field_core::nav::{fallback_source, intro_word_timings};
use field_core::{NavState, Section};

#[test]
fn starts_at_home() {
    assert_eq!(NavState::default().current(), Section::Home);
}

#[test]
fn select_reports_changes() {
    let mut nav = NavState::default();
    assert!(nav.select(Section::About));
    assert_eq!(nav.current(), Section::About);
    assert!(!nav.select(Section::About));
    assert!(nav.go_home());
    assert!(!nav.go_home());
}

#[test]
fn mobile_toggle_flips_between_home_and_work() {
    let mut nav = NavState::default();
    nav.toggle_mobile();
    assert_eq!(nav.current(), Section::Work);
    nav.toggle_mobile();
    assert_eq!(nav.current(), Section::Home);
    nav.select(Section::Contact);
    nav.toggle_mobile();
    assert_eq!(nav.current(), Section::Home);
}

#[test]
fn explore_opens_work() {
    let mut nav = NavState::default();
    assert!(nav.explore());
    assert_eq!(nav.current(), Section::Work);
}

#[test]
fn section_keys_round_trip() {
    for s in Section::ALL {
        assert_eq!(Section::from_key(s.key()), Some(s));
        assert_eq!(s.element_id(), format!("section-{}", s.key()));
    }
    assert_eq!(Section::from_key("blog"), None);
    assert_eq!(Section::Contact.label(), "CONTACT");
}

#[test]
fn intro_words_are_staggered() {
    let timings = intro_word_timings(INTRO_TEXT);
    assert_eq!(timings.len(), 9);
    assert_eq!(timings[0].word, "mens");
    assert!((timings[0].delay_sec - 0.5).abs() < 1e-6);
    assert!((timings[4].delay_sec - 0.7).abs() < 1e-6);
    assert!(timings.windows(2).all(|w| w[1].delay_sec > w[0].delay_sec));
}

#[test]
fn fallback_swaps_once() {
    assert_eq!(fallback_source("me.jpg", "placeholder.jpg"), Some("placeholder.jpg"));
    assert_eq!(fallback_source("placeholder.jpg", "placeholder.jpg"), None);
    assert_eq!(fallback_source("me.jpg", ""), None);
}
