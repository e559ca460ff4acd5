//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Section heading shown above the carousel.
pub const SECTION_TITLE: &str = "What our clients say";

/// Short line under the heading.
pub const SECTION_SUBTITLE: &str =
    "Families and businesses we have represented, in their own words.";

// =============================================================================
// Layout Configuration
// =============================================================================

/// Carousel track geometry.
pub mod layout {
    /// Viewports narrower than this (in CSS pixels) use the single-item layout.
    pub const BREAKPOINT_PX: f64 = 768.0;

    /// Items visible at once on narrow viewports.
    pub const SINGLE_ITEMS_TO_SHOW: usize = 1;

    /// Items visible at once on wide viewports.
    pub const TRIPLE_ITEMS_TO_SHOW: usize = 3;

    /// Gap between cards in the single-item layout.
    pub const SINGLE_GAP_PX: f64 = 8.0;

    /// Gap between cards in the three-item layout.
    pub const TRIPLE_GAP_PX: f64 = 24.0;

    /// Left padding of the track in the single-item layout.
    pub const SINGLE_TRACK_PADDING_PX: f64 = 4.0;
}

// =============================================================================
// Gesture Configuration
// =============================================================================

/// Drag/swipe tuning.
pub mod gesture {
    /// Horizontal travel (px) a drag must exceed to change the page.
    pub const SWIPE_THRESHOLD_PX: f64 = 70.0;
}

// =============================================================================
// Motion Configuration
// =============================================================================

/// Track transition settings.
pub mod motion {
    /// Duration of the eased move after a navigation.
    pub const TRANSITION_MS: u32 = 500;

    /// CSS timing function of the eased move.
    pub const EASING: &str = "ease-in-out";

    /// Media query for users who asked for less animation.
    pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Testimonial data source.
pub mod network {
    /// JSON array of testimonials served next to the bundle.
    pub const TESTIMONIALS_URL: &str = "data/testimonials.json";

    /// Fetch request timeout in milliseconds.
    pub const FETCH_TIMEOUT_MS: i32 = 10000;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
