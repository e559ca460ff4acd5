//! Index and page bookkeeping for both layouts.

use crate::models::ViewportMode;

/// Largest valid start index for `mode`.
///
/// Single mode can show every item; Triple mode stops once the last
/// page is full.
pub fn max_index(item_count: usize, mode: ViewportMode) -> usize {
    match mode {
        ViewportMode::Single => item_count.saturating_sub(1),
        ViewportMode::Triple => item_count.saturating_sub(mode.items_to_show()),
    }
}

/// Clamps `index` into `[0, max_index]`.
#[inline]
pub fn clamp_index(index: usize, item_count: usize, mode: ViewportMode) -> usize {
    index.min(max_index(item_count, mode))
}

/// Index after one step forward, wrapping to the start.
pub fn next_index(index: usize, item_count: usize, mode: ViewportMode) -> usize {
    if item_count == 0 {
        return 0;
    }
    let max = max_index(item_count, mode);
    let base = index.min(max);
    if base >= max { 0 } else { base + 1 }
}

/// Index after one step back, wrapping to the end.
pub fn prev_index(index: usize, item_count: usize, mode: ViewportMode) -> usize {
    if item_count == 0 {
        return 0;
    }
    let max = max_index(item_count, mode);
    match index.min(max) {
        0 => max,
        base => base - 1,
    }
}

/// Number of pagination dots.
pub fn page_count(item_count: usize, mode: ViewportMode) -> usize {
    match mode {
        ViewportMode::Single => item_count,
        ViewportMode::Triple => item_count.div_ceil(mode.items_to_show()),
    }
}

/// Index of the highlighted pagination dot.
pub fn active_page(index: usize, item_count: usize, mode: ViewportMode) -> usize {
    let pages = page_count(item_count, mode);
    if pages == 0 {
        return 0;
    }
    let page = match mode {
        ViewportMode::Single => index,
        ViewportMode::Triple => clamp_index(index, item_count, mode) / mode.items_to_show(),
    };
    page.min(pages - 1)
}

/// Start index a pagination dot navigates to (before clamping).
pub fn page_start(page: usize, mode: ViewportMode) -> usize {
    page.saturating_mul(mode.items_to_show())
}
