//! Root application module.
//!
//! Contains the main App component, the testimonials section, and the
//! one-shot data load that feeds the carousel.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::TestimonialCarousel;
use crate::config::{SECTION_SUBTITLE, SECTION_TITLE, network};
use crate::core::error::FetchError;
use crate::models::Testimonial;
use crate::utils::fetch_json;

stylance::import_crate_style!(css, "src/app.module.css");

/// Loads the testimonial list once.
async fn load_testimonials() -> Vec<Testimonial> {
    testimonials_or_empty(fetch_json(network::TESTIMONIALS_URL).await)
}

/// Turns a failed load into an empty list, which the carousel renders as
/// nothing. The error is only logged.
fn testimonials_or_empty(result: Result<Vec<Testimonial>, FetchError>) -> Vec<Testimonial> {
    result.unwrap_or_else(|_e| {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&format!("failed to load testimonials: {}", _e).into());
        Vec::new()
    })
}

/// Testimonials section: heading plus carousel.
///
/// The heading is hidden together with the carousel when there is nothing
/// to show.
#[component]
fn TestimonialsSection() -> impl IntoView {
    let testimonials = RwSignal::new(Vec::<Testimonial>::new());

    spawn_local(async move {
        let items = load_testimonials().await;
        let _ = testimonials.try_set(items);
    });

    view! {
        <Show when=move || testimonials.with(|t| !t.is_empty())>
            <section class=css::section id="testimonials">
                <header class=css::header>
                    <h2 class=css::title>{SECTION_TITLE}</h2>
                    <p class=css::subtitle>{SECTION_SUBTITLE}</p>
                </header>
                <TestimonialCarousel items=testimonials />
            </section>
        </Show>
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::errorBox>
                    <p>"Testimonials are unavailable right now."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <TestimonialsSection />
        </ErrorBoundary>
    }
}
