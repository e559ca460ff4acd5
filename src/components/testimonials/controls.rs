//! Carousel navigation controls.
//!
//! Thin clients of the controller: they read button/dot state from it and
//! forward clicks to its navigation operations.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::carousel::Controller;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/testimonials/controls.module.css");

/// Previous/next buttons.
///
/// Disabled only in the single-item layout at the first/last card; the
/// three-item layout always wraps.
#[component]
pub fn CarouselNav(controller: Controller) -> impl IntoView {
    let prev_disabled = move || controller.with(|c| c.prev_disabled());
    let next_disabled = move || controller.with(|c| c.next_disabled());

    view! {
        <div class=css::nav>
            <button
                class=move || nav_button_class(prev_disabled())
                on:click=move |_| controller.update(|c| c.go_prev())
                disabled=prev_disabled
                title="Previous testimonial"
                aria-label="Previous testimonial"
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>
            <button
                class=move || nav_button_class(next_disabled())
                on:click=move |_| controller.update(|c| c.go_next())
                disabled=next_disabled
                title="Next testimonial"
                aria-label="Next testimonial"
            >
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>
        </div>
    }
}

fn nav_button_class(disabled: bool) -> String {
    if disabled {
        format!("{} {}", css::navButton, css::navButtonDisabled)
    } else {
        css::navButton.to_string()
    }
}

/// Pagination dots, one per page. Hidden when everything fits on one page.
#[component]
pub fn CarouselDots(controller: Controller) -> impl IntoView {
    view! {
        <Show when=move || controller.with(|c| c.dots_visible())>
            <div class=css::dots role="tablist" aria-label="Testimonial pages">
                {move || {
                    let (pages, active) = controller.with(|c| (c.page_count(), c.active_dot()));
                    (0..pages)
                        .map(|page| {
                            let is_active = page == active;
                            view! {
                                <button
                                    class=dot_class(is_active)
                                    role="tab"
                                    aria-selected=is_active.to_string()
                                    aria-label=format!("Go to page {}", page + 1)
                                    on:click=move |_| controller.update(|c| c.go_to_dot(page))
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Show>
    }
}

fn dot_class(active: bool) -> String {
    if active {
        format!("{} {}", css::dot, css::dotActive)
    } else {
        css::dot.to_string()
    }
}
