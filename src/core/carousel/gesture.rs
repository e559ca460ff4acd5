//! Host-independent drag gesture interface.
//!
//! Touch, mouse and pointer bindings all normalize their events to a single
//! `clientX` and drive a [`DragGesture`]. The gesture owner decides what a
//! finished drag means.

use crate::config::gesture::SWIPE_THRESHOLD_PX;

/// Result of a finished drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Dragged left past the threshold.
    Next,
    /// Dragged right past the threshold.
    Prev,
    /// Released inside the threshold; return to the committed position.
    SnapBack,
}

impl SwipeOutcome {
    /// Classifies a horizontal drag distance.
    ///
    /// The threshold is exclusive: a drag of exactly the threshold snaps back.
    pub fn from_delta(delta_x: f64) -> Self {
        if delta_x < -SWIPE_THRESHOLD_PX {
            Self::Next
        } else if delta_x > SWIPE_THRESHOLD_PX {
            Self::Prev
        } else {
            Self::SnapBack
        }
    }
}

/// A horizontal drag driven by normalized pointer positions.
pub trait DragGesture {
    /// Pointer went down at `client_x`.
    fn begin(&mut self, client_x: f64);

    /// Pointer moved to `client_x`. Ignored unless a drag is active.
    fn update(&mut self, client_x: f64);

    /// Pointer released or left the surface.
    ///
    /// Returns `None` if no drag was active.
    fn end(&mut self) -> Option<SwipeOutcome>;
}
