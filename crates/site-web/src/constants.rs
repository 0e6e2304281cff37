// Element ids, CSS classes and front-end timing. Markup is generated from
// these names and the event wiring looks elements up by the same names.

// Mount points
pub const APP_ROOT_ID: &str = "app";
pub const CANVAS_ID: &str = "particle-canvas";

// Navigation
pub const NAV_ID: &str = "site-nav";
pub const NAV_ITEMS_ID: &str = "nav-items";
pub const NAV_PROGRESS_ID: &str = "nav-progress";
pub const NAV_MENU_TOGGLE_ID: &str = "nav-menu-toggle";
pub const LIVE_REGION_ID: &str = "nav-live-region";

// Hero
pub const HERO_TEXT_ID: &str = "hero-text";
pub const HERO_CURSOR_ID: &str = "hero-cursor";
pub const HERO_EXTRAS_ID: &str = "hero-extras";
pub const IGNITE_BUTTON_ID: &str = "ignite-button";
pub const BURST_OVERLAY_ID: &str = "ignite-burst";

// Sound
pub const MUTE_BUTTON_ID: &str = "mute-toggle";

// Contact dialog
pub const OPEN_CONTACT_ID: &str = "open-contact";
pub const CONTACT_MODAL_ID: &str = "contact-modal";
pub const CONTACT_BACKDROP_ID: &str = "contact-backdrop";
pub const CONTACT_CLOSE_ID: &str = "contact-close";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const BOOK_CALL_ID: &str = "book-call";
pub const DOWNLOAD_CONCEPT_ID: &str = "download-concept";

// Experience dialog
pub const EXPERIENCE_MODAL_ID: &str = "experience-modal";
pub const EXPERIENCE_BACKDROP_ID: &str = "experience-backdrop";
pub const EXPERIENCE_CLOSE_ID: &str = "experience-close";
pub const EXPERIENCE_BODY_ID: &str = "experience-body";
pub const EXPERIENCE_DOWNLOAD_ID: &str = "experience-download";

// Data attributes carried by generated markup
pub const DATA_SECTION: &str = "data-section";
pub const DATA_EXPERIENCE: &str = "data-experience";
pub const DATA_CELL: &str = "data-cell";
pub const DATA_TAB: &str = "data-tab";
pub const DATA_PANEL: &str = "data-panel";

// Classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
pub const REVEALED_CLASS: &str = "revealed";
pub const MENU_OPEN_CLASS: &str = "open";
pub const MOBILE_CLASS: &str = "mobile";
pub const REVEAL_CLASS: &str = "reveal"; // sections that fade in once
pub const CELL_CLASS: &str = "interaction-cell";
pub const CELL_FX_CLASS: &str = "cell-fx";

// Page logic tick (typing, ignite, feedback ages)
pub const LOGIC_TICK_MS: i32 = 16;

// Largest step fed to the particle field after a stalled frame
pub const MAX_FRAME_DT_MS: u64 = 100;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
