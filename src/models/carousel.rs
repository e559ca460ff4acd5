//! Layout and motion types for the carousel track.

use crate::config::{layout, motion};

/// Carousel layout derived from the viewport width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportMode {
    /// One centered item per page (narrow viewports).
    #[default]
    Single,
    /// Three page-aligned items per page (wide viewports).
    Triple,
}

impl ViewportMode {
    /// Derives the mode from a viewport width in CSS pixels.
    pub fn from_width(width_px: f64) -> Self {
        if width_px < layout::BREAKPOINT_PX {
            Self::Single
        } else {
            Self::Triple
        }
    }

    /// Number of simultaneously visible items.
    pub const fn items_to_show(self) -> usize {
        match self {
            Self::Single => layout::SINGLE_ITEMS_TO_SHOW,
            Self::Triple => layout::TRIPLE_ITEMS_TO_SHOW,
        }
    }

    /// Gap between adjacent items.
    pub const fn gap_px(self) -> f64 {
        match self {
            Self::Single => layout::SINGLE_GAP_PX,
            Self::Triple => layout::TRIPLE_GAP_PX,
        }
    }

    /// Left padding of the track.
    pub const fn track_padding_px(self) -> f64 {
        match self {
            Self::Single => layout::SINGLE_TRACK_PADDING_PX,
            Self::Triple => 0.0,
        }
    }
}

/// How the track moves to its next offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Transition {
    /// Jump immediately (drag tracking, resize).
    #[default]
    None,
    /// Ease into place after a navigation.
    Ease,
}

impl Transition {
    /// Duration in milliseconds, or 0 when motion is reduced.
    pub fn duration_ms(self, reduced_motion: bool) -> u32 {
        match self {
            Self::Ease if !reduced_motion => motion::TRANSITION_MS,
            _ => 0,
        }
    }

    /// CSS `transition` value for the track's `transform`.
    pub fn css(self, reduced_motion: bool) -> String {
        format!(
            "transform {}ms {}",
            self.duration_ms(reduced_motion),
            motion::EASING
        )
    }
}
