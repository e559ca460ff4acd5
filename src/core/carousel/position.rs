//! Track offset computation.
//!
//! Converts a logical index into the horizontal translation of the track.
//! Both layouts share the same stride (`item_width + gap`):
//!
//! - **Single**: the active item is centered in the viewport. The offset is
//!   clamped so the first item never moves right of its centered position and
//!   the last item never moves left of it.
//! - **Triple**: pages are left-aligned; the offset is the negated stride
//!   times the page-clamped start index.
//!
//! When every item fits on one page the track does not move at all.

use super::paging;
use crate::models::ViewportMode;

/// Measurements the offset formula depends on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry {
    pub mode: ViewportMode,
    /// Width of one rendered item.
    pub item_width: f64,
    /// Width of the viewport.
    pub viewport_width: f64,
    pub item_count: usize,
}

impl TrackGeometry {
    /// Distance between the left edges of two adjacent items.
    pub fn stride(&self) -> f64 {
        self.item_width + self.mode.gap_px()
    }

    /// Offset that places the item at `index` in view.
    pub fn offset_for(&self, index: usize) -> f64 {
        if self.item_count <= self.mode.items_to_show() {
            return 0.0;
        }

        match self.mode {
            ViewportMode::Single => self.centered_offset(index),
            ViewportMode::Triple => {
                let start = paging::clamp_index(index, self.item_count, self.mode);
                -(start as f64) * self.stride()
            }
        }
    }

    fn centered_offset(&self, index: usize) -> f64 {
        let stride = self.stride();
        let padding = self.mode.track_padding_px();
        let center = self.viewport_width / 2.0 - self.item_width / 2.0;

        let left_edge = index as f64 * stride + padding;
        let raw = center - left_edge;

        let max_offset = center - padding;
        let last = self.item_count.saturating_sub(1) as f64;
        let min_offset = center - (last * stride + padding);

        // min/max instead of f64::clamp: never panics on odd measurements
        raw.max(min_offset).min(max_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(item_count: usize) -> TrackGeometry {
        TrackGeometry {
            mode: ViewportMode::Single,
            item_width: 300.0,
            viewport_width: 375.0,
            item_count,
        }
    }

    fn triple(item_count: usize) -> TrackGeometry {
        TrackGeometry {
            mode: ViewportMode::Triple,
            item_width: 320.0,
            viewport_width: 1200.0,
            item_count,
        }
    }

    #[test]
    fn test_single_centers_active_item() {
        let geom = single(5);
        // center = 187.5 - 150 = 37.5, stride = 308
        assert_eq!(geom.offset_for(0), 33.5);
        assert_eq!(geom.offset_for(1), 37.5 - 312.0);
        assert_eq!(geom.offset_for(4), 37.5 - (4.0 * 308.0 + 4.0));
    }

    #[test]
    fn test_single_clamps_out_of_range_index() {
        let geom = single(5);
        assert_eq!(geom.offset_for(9), geom.offset_for(4));
    }

    #[test]
    fn test_triple_is_page_aligned() {
        let geom = triple(7);
        // stride = 344
        assert_eq!(geom.offset_for(0), 0.0);
        assert_eq!(geom.offset_for(1), -344.0);
        assert_eq!(geom.offset_for(4), -4.0 * 344.0);
        // max start index is 7 - 3 = 4
        assert_eq!(geom.offset_for(6), -4.0 * 344.0);
    }

    #[test]
    fn test_single_page_never_moves() {
        assert_eq!(single(1).offset_for(0), 0.0);
        assert_eq!(triple(3).offset_for(2), 0.0);
        assert_eq!(triple(2).offset_for(1), 0.0);
    }

    #[test]
    fn test_zero_width_measurement() {
        let geom = TrackGeometry {
            item_width: 0.0,
            viewport_width: 0.0,
            ..single(3)
        };
        assert_eq!(geom.offset_for(2), -(2.0 * 8.0 + 4.0));
    }
}
