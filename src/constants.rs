// DOM hooks the overlay expects in the host page.
// Tuning values live in the core crate.

// Loading overlay, hidden once the controller reports ready
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";

// Desktop: vertical dot list, one button per section
pub const SECTION_NAV_ID: &str = "section-nav";
pub const SECTION_NAV_ITEM_PREFIX: &str = "section-nav-";

// Mobile: progress bar plus compact labels
pub const MOBILE_NAV_ID: &str = "mobile-nav";
pub const MOBILE_NAV_LABELS_ID: &str = "mobile-nav-labels";
pub const MOBILE_NAV_ITEM_PREFIX: &str = "mobile-nav-";
pub const PROGRESS_FILL_ID: &str = "progress-fill";

// Scroll hint and current section subtitle
pub const SCROLL_HINT_ID: &str = "scroll-hint";
pub const SCROLL_HINT_TEXT_DESKTOP: &str = "Scroll to explore";
pub const SCROLL_HINT_TEXT_MOBILE: &str = "Swipe to explore";
pub const SECTION_SUBTITLE_ID: &str = "section-subtitle";

// Classes
pub const NAV_ITEM_CLASS: &str = "section-nav-item";
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";

// Skip progress bar writes smaller than this (fraction of full width)
pub const PROGRESS_BAR_EPSILON: f32 = 0.0005;
