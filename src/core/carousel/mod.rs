//! Testimonial carousel controller.
//!
//! Translates an ordered list of items into a paged, horizontally scrolling
//! track. The controller owns all carousel state and is driven by three
//! signals:
//!
//! - viewport resizes ([`CarouselController::on_viewport_resize`])
//! - drag gestures ([`DragGesture`])
//! - explicit navigation (prev/next buttons, pagination dots)
//!
//! It produces a pixel offset for the track, the transition to apply, and the
//! active pagination dot. Nothing here touches the DOM: item width comes from
//! an injected [`MeasureItemWidth`].

mod gesture;
mod paging;
mod position;

pub use gesture::{DragGesture, SwipeOutcome};
pub use position::TrackGeometry;

use crate::models::{Transition, ViewportMode};

// ============================================================================
// Capabilities
// ============================================================================

/// Measures the rendered width of one carousel item.
pub trait MeasureItemWidth {
    fn item_width(&self) -> f64;
}

/// Constant item width.
#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedWidth(pub f64);

#[cfg(test)]
impl MeasureItemWidth for FixedWidth {
    fn item_width(&self) -> f64 {
        self.0
    }
}

// ============================================================================
// CarouselState
// ============================================================================

/// Mutable carousel state. Exists only while there is at least one item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CarouselState {
    /// Visible item (Single) or first visible item of the page (Triple).
    pub current_index: usize,
    pub is_dragging: bool,
    pub drag_start_x: f64,
    pub drag_live_delta_x: f64,
    /// Track offset when not dragging.
    pub committed_offset_px: f64,
}

// ============================================================================
// CarouselController
// ============================================================================

/// Paging and drag controller for the testimonial carousel.
///
/// # Invariants
///
/// - With `n > 0` items, `current_index` is always in `[0, n - 1]`. Triple
///   mode clamps it to `[0, n - 3]` only when navigating or positioning the
///   track, so a resize round trip keeps the original index.
/// - With no items, no [`CarouselState`] exists and every operation is a
///   no-op.
/// - While a drag is active, resizes update the layout but never touch the
///   drag state or the committed offset; [`end_drag`](Self::end_drag)
///   recomputes the position.
#[derive(Debug)]
pub struct CarouselController<M> {
    measure: M,
    mode: ViewportMode,
    viewport_width: f64,
    item_width: f64,
    item_count: usize,
    state: Option<CarouselState>,
    transition: Transition,
}

impl<M: MeasureItemWidth> CarouselController<M> {
    /// Creates an empty controller in Single mode.
    ///
    /// Call [`on_viewport_resize`](Self::on_viewport_resize) on mount to pick
    /// the layout.
    pub fn new(measure: M) -> Self {
        Self {
            measure,
            mode: ViewportMode::default(),
            viewport_width: 0.0,
            item_width: 0.0,
            item_count: 0,
            state: None,
            transition: Transition::None,
        }
    }

    // ------------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------------

    /// Replaces the item list. Only its length matters to the controller.
    ///
    /// The current index resets to 0 when it no longer points at an item.
    /// An empty list drops all state.
    pub fn set_items<T>(&mut self, items: &[T]) {
        let item_count = items.len();
        self.item_count = item_count;
        if item_count == 0 {
            self.state = None;
            return;
        }

        self.item_width = self.measure.item_width();
        let state = self.state.get_or_insert_with(CarouselState::default);
        if state.current_index >= item_count {
            state.current_index = 0;
        }
        self.recommit(Transition::None);
    }

    /// Applies a new viewport width.
    ///
    /// Recomputes the layout mode and re-measures the item width. Calling it
    /// again with the same width yields the same offset.
    pub fn on_viewport_resize(&mut self, width_px: f64) {
        self.viewport_width = width_px;
        self.mode = ViewportMode::from_width(width_px);
        self.item_width = self.measure.item_width();
        self.recommit(Transition::None);
    }

    /// Re-reads the item width without a viewport change.
    ///
    /// Hosts call this once items are rendered and measurable.
    pub fn remeasure(&mut self) {
        self.item_width = self.measure.item_width();
        self.recommit(Transition::None);
    }

    pub fn go_next(&mut self) {
        self.navigate(paging::next_index);
    }

    pub fn go_prev(&mut self) {
        self.navigate(paging::prev_index);
    }

    /// Jumps to `index`, clamped to the valid range for the current mode.
    pub fn go_to_index(&mut self, index: usize) {
        self.navigate(|_, count, mode| paging::clamp_index(index, count, mode));
    }

    /// Jumps to the page of pagination dot `dot`.
    pub fn go_to_dot(&mut self, dot: usize) {
        self.go_to_index(self.dot_target(dot));
    }

    /// Starts a drag at `client_x`, freezing the track at its committed offset.
    pub fn begin_drag(&mut self, client_x: f64) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.is_dragging = true;
        state.drag_start_x = client_x;
        state.drag_live_delta_x = 0.0;
        self.transition = Transition::None;
    }

    /// Tracks the pointer during a drag.
    pub fn update_drag(&mut self, client_x: f64) {
        if let Some(state) = self.state.as_mut()
            && state.is_dragging
        {
            state.drag_live_delta_x = client_x - state.drag_start_x;
        }
    }

    /// Finishes a drag, paging if it travelled past the swipe threshold.
    ///
    /// Returns `None` if no drag was active.
    pub fn end_drag(&mut self) -> Option<SwipeOutcome> {
        let state = self.state.as_mut().filter(|s| s.is_dragging)?;
        let outcome = SwipeOutcome::from_delta(state.drag_live_delta_x);
        state.is_dragging = false;
        state.drag_live_delta_x = 0.0;

        match outcome {
            SwipeOutcome::Next => self.go_next(),
            SwipeOutcome::Prev => self.go_prev(),
            SwipeOutcome::SnapBack => self.recommit(Transition::Ease),
        }
        Some(outcome)
    }

    // ------------------------------------------------------------------------
    // Outputs
    // ------------------------------------------------------------------------

    pub fn is_empty(&self) -> bool {
        self.state.is_none()
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn gap_px(&self) -> f64 {
        self.mode.gap_px()
    }

    pub fn current_index(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.current_index)
    }

    pub fn is_dragging(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.is_dragging)
    }

    /// Current track offset: live while dragging, committed otherwise.
    pub fn offset_px(&self) -> f64 {
        match &self.state {
            Some(s) if s.is_dragging => s.committed_offset_px + s.drag_live_delta_x,
            Some(s) => s.committed_offset_px,
            None => 0.0,
        }
    }

    /// Transition for the current offset. Always [`Transition::None`] while
    /// dragging so the track follows the pointer without lag.
    pub fn transition(&self) -> Transition {
        if self.is_dragging() {
            Transition::None
        } else {
            self.transition
        }
    }

    /// Inline CSS for the track element.
    pub fn track_style(&self, reduced_motion: bool) -> String {
        format!(
            "transform: translateX({}px); transition: {};",
            self.offset_px(),
            self.transition().css(reduced_motion)
        )
    }

    pub fn page_count(&self) -> usize {
        paging::page_count(self.item_count, self.mode)
    }

    pub fn active_dot(&self) -> usize {
        paging::active_page(self.current_index(), self.item_count, self.mode)
    }

    /// Dots are hidden when everything fits on one page.
    pub fn dots_visible(&self) -> bool {
        self.page_count() > 1
    }

    /// Index that pagination dot `dot` navigates to, after clamping.
    pub fn dot_target(&self, dot: usize) -> usize {
        paging::clamp_index(
            paging::page_start(dot, self.mode),
            self.item_count,
            self.mode,
        )
    }

    /// Prev button state. Only Single mode disables, at the first item.
    pub fn prev_disabled(&self) -> bool {
        self.mode == ViewportMode::Single && (self.is_empty() || self.current_index() == 0)
    }

    /// Next button state. Only Single mode disables, at the last item.
    pub fn next_disabled(&self) -> bool {
        self.mode == ViewportMode::Single
            && (self.is_empty() || self.current_index() + 1 >= self.item_count)
    }

    pub fn geometry(&self) -> TrackGeometry {
        TrackGeometry {
            mode: self.mode,
            item_width: self.item_width,
            viewport_width: self.viewport_width,
            item_count: self.item_count,
        }
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn navigate(&mut self, step: impl FnOnce(usize, usize, ViewportMode) -> usize) {
        let (count, mode) = (self.item_count, self.mode);
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.current_index = step(state.current_index, count, mode);
        self.recommit(Transition::Ease);
    }

    /// Recomputes the committed offset from the current index. Skipped while
    /// dragging.
    fn recommit(&mut self, transition: Transition) {
        let geometry = self.geometry();
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if state.is_dragging {
            return;
        }
        state.committed_offset_px = geometry.offset_for(state.current_index);
        self.transition = transition;
    }
}

impl<M: MeasureItemWidth> DragGesture for CarouselController<M> {
    fn begin(&mut self, client_x: f64) {
        self.begin_drag(client_x);
    }

    fn update(&mut self, client_x: f64) {
        self.update_drag(client_x);
    }

    fn end(&mut self) -> Option<SwipeOutcome> {
        self.end_drag()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const NARROW: f64 = 375.0;
    const WIDE: f64 = 1280.0;

    fn controller(count: usize, width: f64) -> CarouselController<FixedWidth> {
        let mut c = CarouselController::new(FixedWidth(300.0));
        c.on_viewport_resize(width);
        c.set_items(&vec![(); count]);
        c
    }

    fn drag(c: &mut CarouselController<FixedWidth>, delta: f64) -> Option<SwipeOutcome> {
        c.begin_drag(200.0);
        c.update_drag(200.0 + delta);
        c.end_drag()
    }

    #[test]
    fn test_empty_holds_no_state() {
        let mut c = controller(0, NARROW);
        assert!(c.is_empty());
        assert!(c.state.is_none());

        c.go_next();
        c.go_prev();
        c.go_to_index(3);
        c.begin_drag(10.0);
        c.update_drag(-200.0);
        assert_eq!(c.end_drag(), None);

        assert!(c.state.is_none());
        assert_eq!(c.offset_px(), 0.0);
        assert_eq!(c.page_count(), 0);
        assert!(!c.dots_visible());
    }

    #[test]
    fn test_emptying_drops_state() {
        let mut c = controller(4, NARROW);
        c.go_next();
        c.set_items::<u8>(&[]);
        assert!(c.is_empty());

        c.set_items(&vec![(); 4]);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_index_stays_in_bounds() {
        for width in [NARROW, WIDE] {
            for count in 0..=10 {
                let mut c = controller(count, width);
                for step in 0..25 {
                    match step % 5 {
                        0 | 1 => c.go_next(),
                        2 => c.go_prev(),
                        3 => c.go_to_index(step * 3),
                        _ => {
                            drag(&mut c, if step % 2 == 0 { -120.0 } else { 120.0 });
                        }
                    }
                    if count == 0 {
                        assert!(c.state.is_none());
                    } else {
                        assert!(c.current_index() < count, "count={count} width={width}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_next_then_prev_round_trips() {
        for width in [NARROW, WIDE] {
            let mut c = controller(5, width);
            let max = match c.mode() {
                ViewportMode::Single => 4,
                ViewportMode::Triple => 2,
            };
            for start in 0..=max {
                c.go_to_index(start);
                c.go_next();
                c.go_prev();
                assert_eq!(c.current_index(), start);
            }
        }
    }

    #[test]
    fn test_single_mode_wraps() {
        let mut c = controller(5, NARROW);
        assert_eq!(c.mode(), ViewportMode::Single);

        c.go_prev();
        assert_eq!(c.current_index(), 4);
        c.go_next();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_triple_mode_clamps_go_to_index() {
        let mut c = controller(5, WIDE);
        assert_eq!(c.mode(), ViewportMode::Triple);

        c.go_to_index(10);
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.offset_px(), -2.0 * 324.0);
    }

    #[test]
    fn test_single_mode_clamps_go_to_index() {
        let mut c = controller(5, NARROW);
        c.go_to_index(10);
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut c = controller(6, NARROW);
        c.go_to_index(3);

        c.on_viewport_resize(NARROW);
        let first = c.offset_px();
        c.on_viewport_resize(NARROW);
        assert_eq!(c.offset_px(), first);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_resize_to_triple_positions_by_clamped_index() {
        let mut c = controller(5, NARROW);
        c.go_to_index(4);

        c.on_viewport_resize(WIDE);
        assert_eq!(c.mode(), ViewportMode::Triple);
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.offset_px(), -2.0 * 324.0);
        assert_eq!(c.active_dot(), 0);
        assert_eq!(c.transition(), Transition::None);

        // Navigation steps from the clamped start index
        c.go_prev();
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_resize_round_trip_keeps_position() {
        let mut c = controller(5, NARROW);
        c.go_to_index(4);
        let narrow_offset = c.offset_px();

        c.on_viewport_resize(WIDE);
        c.on_viewport_resize(NARROW);
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.offset_px(), narrow_offset);
        assert!(c.next_disabled());
    }

    #[test]
    fn test_drag_thresholds() {
        let mut c = controller(5, NARROW);
        c.go_to_index(2);

        assert_eq!(drag(&mut c, -71.0), Some(SwipeOutcome::Next));
        assert_eq!(c.current_index(), 3);

        assert_eq!(drag(&mut c, -69.0), Some(SwipeOutcome::SnapBack));
        assert_eq!(c.current_index(), 3);

        assert_eq!(drag(&mut c, 71.0), Some(SwipeOutcome::Prev));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_drag_tracks_pointer_without_transition() {
        let mut c = controller(5, NARROW);
        let committed = c.offset_px();

        c.begin_drag(100.0);
        assert!(c.is_dragging());
        c.update_drag(60.0);
        assert_eq!(c.offset_px(), committed - 40.0);
        assert_eq!(c.transition(), Transition::None);
        assert!(c.track_style(false).contains("transform 0ms"));

        assert_eq!(c.end_drag(), Some(SwipeOutcome::SnapBack));
        assert!(!c.is_dragging());
        assert_eq!(c.offset_px(), committed);
        assert_eq!(c.transition(), Transition::Ease);
        assert_eq!(c.state.as_ref().map(|s| s.drag_live_delta_x), Some(0.0));
    }

    #[test]
    fn test_update_without_begin_is_ignored() {
        let mut c = controller(5, NARROW);
        let before = c.offset_px();
        c.update_drag(500.0);
        assert_eq!(c.offset_px(), before);
        assert_eq!(c.end_drag(), None);
    }

    #[test]
    fn test_resize_during_drag_keeps_drag() {
        let mut c = controller(5, NARROW);
        c.go_to_index(1);
        let committed = c.offset_px();

        c.begin_drag(300.0);
        c.update_drag(250.0);
        c.on_viewport_resize(WIDE);

        assert!(c.is_dragging());
        assert_eq!(c.offset_px(), committed - 50.0);

        // Finishing the drag applies the new layout
        assert_eq!(c.end_drag(), Some(SwipeOutcome::SnapBack));
        assert_eq!(c.mode(), ViewportMode::Triple);
        assert_eq!(c.offset_px(), -324.0);
    }

    #[test]
    fn test_navigation_eases() {
        let mut c = controller(5, NARROW);
        assert_eq!(c.transition(), Transition::None);
        c.go_next();
        assert_eq!(c.transition(), Transition::Ease);
        assert!(c.track_style(false).ends_with("transition: transform 500ms ease-in-out;"));
        assert!(c.track_style(true).contains("transform 0ms"));
    }

    #[test]
    fn test_seven_items_triple_has_three_dots() {
        let mut c = controller(7, WIDE);
        assert_eq!(c.page_count(), 3);
        assert!(c.dots_visible());

        c.go_to_dot(1);
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.active_dot(), 1);

        c.go_to_dot(2);
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.dot_target(2), 4);
    }

    #[test]
    fn test_single_item() {
        let mut c = controller(1, NARROW);
        assert!(c.prev_disabled());
        assert!(c.next_disabled());
        assert_eq!(c.offset_px(), 0.0);
        c.go_next();
        assert_eq!(c.offset_px(), 0.0);

        c.on_viewport_resize(WIDE);
        assert_eq!(c.page_count(), 1);
        assert!(!c.dots_visible());
        assert_eq!(c.offset_px(), 0.0);
    }

    #[test]
    fn test_buttons_disable_only_in_single_mode() {
        let mut c = controller(5, NARROW);
        assert!(c.prev_disabled());
        assert!(!c.next_disabled());
        c.go_to_index(4);
        assert!(!c.prev_disabled());
        assert!(c.next_disabled());

        c.on_viewport_resize(WIDE);
        c.go_to_index(0);
        assert!(!c.prev_disabled());
        c.go_to_index(2);
        assert!(!c.next_disabled());
    }

    #[test]
    fn test_shrinking_list_resets_index() {
        let mut c = controller(6, NARROW);
        c.go_to_index(5);

        c.set_items(&vec![(); 3]);
        assert_eq!(c.current_index(), 0);

        c.go_to_index(2);
        c.set_items(&vec![(); 8]);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_gesture_trait_drives_controller() {
        fn swipe(g: &mut impl DragGesture, from: f64, to: f64) -> Option<SwipeOutcome> {
            g.begin(from);
            g.update(to);
            g.end()
        }

        let mut c = controller(4, NARROW);
        assert_eq!(swipe(&mut c, 300.0, 100.0), Some(SwipeOutcome::Next));
        assert_eq!(c.current_index(), 1);
    }
}
