//! Overlay navigation state and intro timing.

use crate::constants::{INTRO_WORD_BASE_DELAY_SEC, INTRO_WORD_STAGGER_SEC};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Work,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::Work, Section::About, Section::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "HOME",
            Section::Work => "WORK",
            Section::About => "ABOUT",
            Section::Contact => "CONTACT",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Work => "work",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    /// Id of the overlay element holding this section.
    pub fn element_id(self) -> String {
        format!("section-{}", self.key())
    }

    pub fn from_key(key: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.key() == key)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    current: Section,
}

impl NavState {
    pub fn current(&self) -> Section {
        self.current
    }

    /// Show `section`. Returns true when the visible section changed.
    pub fn select(&mut self, section: Section) -> bool {
        let changed = self.current != section;
        self.current = section;
        changed
    }

    pub fn go_home(&mut self) -> bool {
        self.select(Section::Home)
    }

    /// Mobile menu button: Home opens Work, anything else returns Home.
    pub fn toggle_mobile(&mut self) -> bool {
        match self.current {
            Section::Home => self.select(Section::Work),
            _ => self.go_home(),
        }
    }

    pub fn explore(&mut self) -> bool {
        self.select(Section::Work)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WordTiming<'a> {
    pub word: &'a str,
    pub delay_sec: f32,
}

/// Fade-in schedule for the intro line, one entry per space-separated word.
pub fn intro_word_timings(text: &str) -> Vec<WordTiming<'_>> {
    text.split(' ')
        .enumerate()
        .map(|(i, word)| WordTiming {
            word,
            delay_sec: i as f32 * INTRO_WORD_STAGGER_SEC + INTRO_WORD_BASE_DELAY_SEC,
        })
        .collect()
}

/// Source to swap in after an image fails to load, if it has not been
/// swapped already.
pub fn fallback_source<'a>(current: &str, fallback: &'a str) -> Option<&'a str> {
    if fallback.is_empty() || current == fallback {
        None
    } else {
        Some(fallback)
    }
}
