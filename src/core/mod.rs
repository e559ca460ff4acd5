//! Core carousel logic, independent of the DOM.
//!
//! This module provides:
//! - [`CarouselController`] paging, offset and drag handling
//! - [`error`] typed errors for data loading

pub mod carousel;
pub mod error;

pub use carousel::{CarouselController, DragGesture, MeasureItemWidth};
