//! UI components built with Leptos.
//!
//! - [`testimonials`] - Testimonial carousel section
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod testimonials;

pub use testimonials::TestimonialCarousel;
