//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Testimonial`] - Client testimonial records shown in the carousel
//! - [`ViewportMode`], [`Transition`] - Carousel layout and motion

mod carousel;
mod testimonial;

pub use carousel::{Transition, ViewportMode};
pub use testimonial::Testimonial;
