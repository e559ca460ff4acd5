//! Testimonial carousel section.
//!
//! Components:
//! - [`TestimonialCarousel`] - Draggable, paged track of testimonial cards
//! - [`TestimonialCard`] - A single testimonial
//! - [`CarouselNav`], [`CarouselDots`] - Prev/next buttons and pagination

mod card;
mod carousel;
mod controls;

pub use card::TestimonialCard;
pub use carousel::TestimonialCarousel;
pub use controls::{CarouselDots, CarouselNav};
