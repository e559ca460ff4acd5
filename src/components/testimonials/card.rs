//! Testimonial card component.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::Testimonial;

stylance::import_crate_style!(css, "src/components/testimonials/card.module.css");

/// A single testimonial: quote, client name, practice area and avatar.
///
/// Falls back to the client's initials when no avatar is available.
#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let initials = testimonial.initials();
    let avatar = testimonial.avatar_url().map(String::from);
    let alt = format!("Photo of {}", testimonial.name);

    view! {
        <article class=css::card draggable="false">
            <span class=css::quoteIcon aria-hidden="true">
                <Icon icon=ic::QUOTE />
            </span>
            <p class=css::text>{testimonial.text}</p>
            <footer class=css::author>
                {match avatar {
                    Some(url) => view! {
                        <img class=css::avatar src=url alt=alt draggable="false" />
                    }.into_any(),
                    None => view! {
                        <span class=css::avatarFallback aria-hidden="true">{initials}</span>
                    }.into_any(),
                }}
                <div class=css::authorInfo>
                    <span class=css::name>{testimonial.name}</span>
                    <span class=css::category>
                        <Icon icon=ic::PRACTICE />
                        {testimonial.category}
                    </span>
                </div>
            </footer>
        </article>
    }
}
