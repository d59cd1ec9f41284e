// DOM hooks for the overlay markup.

/// Element ids and attribute names the overlay markup must provide.
pub const CANVAS_ID: &str = "app-canvas";
pub const LOGO_ID: &str = "logo";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const EXPLORE_ID: &str = "explore-work";
pub const INTRO_ID: &str = "intro-text";

// Nav buttons carry the section key in this attribute
pub const NAV_SECTION_ATTR: &str = "data-section";
// Images swap to this attribute's URL when loading fails
pub const FALLBACK_ATTR: &str = "data-fallback";

pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
pub const INTRO_WORD_CLASS: &str = "intro-word";
