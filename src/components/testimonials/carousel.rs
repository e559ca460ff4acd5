//! Testimonial carousel component.
//!
//! Binds the DOM to a [`CarouselController`]:
//! - window resize events feed [`CarouselController::on_viewport_resize`]
//! - touch and mouse events are normalized to `clientX` and drive the
//!   controller through [`DragGesture`]
//! - the controller's offset and transition are rendered as inline style on
//!   the track
//!
//! Renders nothing when there are no testimonials.

use leptos::html;
use leptos::prelude::*;
use leptos_use::use_media_query;

use super::{CarouselDots, CarouselNav, TestimonialCard};
use crate::config::motion;
use crate::core::{CarouselController, DragGesture, MeasureItemWidth};
use crate::models::{Testimonial, ViewportMode};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/testimonials/carousel.module.css");

/// Measures the first rendered card inside the track.
#[derive(Clone, Copy)]
pub struct TrackMeasure(NodeRef<html::Div>);

impl MeasureItemWidth for TrackMeasure {
    fn item_width(&self) -> f64 {
        self.0
            .get_untracked()
            .and_then(|track| dom::first_child_width(&track))
            .unwrap_or(0.0)
    }
}

/// Reactive handle to the carousel controller shared with child components.
pub type Controller = RwSignal<CarouselController<TrackMeasure>, LocalStorage>;

/// Horizontally paged testimonial carousel.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (>= 768px) | Three cards per page, page-aligned, dots per page |
/// | Mobile (< 768px) | One centered card, dot per card, circular swipe |
#[component]
pub fn TestimonialCarousel(#[prop(into)] items: Signal<Vec<Testimonial>>) -> impl IntoView {
    let track_ref = NodeRef::<html::Div>::new();
    let controller: Controller =
        RwSignal::new_local(CarouselController::new(TrackMeasure(track_ref)));
    let reduced_motion = use_media_query(motion::REDUCED_MOTION_QUERY);

    let apply_viewport = move || {
        if let Some(width) = dom::viewport_width() {
            controller.update(|c| c.on_viewport_resize(width));
        }
    };

    // Sync item list
    Effect::new(move |_| {
        items.with(|list| controller.update(|c| c.set_items(list)));
    });

    // Measure on mount and whenever the rendered track or its cards change
    Effect::new(move |_| {
        let mounted = track_ref.get().is_some();
        items.track();
        apply_viewport();
        if mounted {
            request_animation_frame(move || {
                let _ = controller.try_update(|c| c.remeasure());
            });
        }
    });

    let resize_handle = window_event_listener(leptos::ev::resize, move |_| apply_viewport());
    on_cleanup(move || resize_handle.remove());

    // Drag handlers (shared by touch and mouse)
    let start_drag = move |x: f64| controller.update(|c| c.begin(x));

    let move_drag = move |x: f64| {
        if controller.with_untracked(|c| c.is_dragging()) {
            controller.update(|c| c.update(x));
        }
    };

    let end_drag = move || {
        if !controller.with_untracked(|c| c.is_dragging()) {
            return;
        }
        let mut outcome = None;
        controller.update(|c| outcome = c.end());
        if let Some(_outcome) = outcome {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&format!("carousel swipe: {:?}", _outcome).into());
        }
    };

    // Touch event handlers
    let on_touch_start = move |event: leptos::ev::TouchEvent| {
        if let Some(touch) = event.touches().get(0) {
            start_drag(f64::from(touch.client_x()));
        }
    };

    let on_touch_move = move |event: leptos::ev::TouchEvent| {
        if let Some(touch) = event.touches().get(0) {
            move_drag(f64::from(touch.client_x()));
        }
    };

    let on_touch_end = move |_: leptos::ev::TouchEvent| end_drag();

    // Mouse event handlers
    let on_mouse_down = move |event: leptos::ev::MouseEvent| {
        event.prevent_default();
        start_drag(f64::from(event.client_x()));
    };

    let on_mouse_move = move |event: leptos::ev::MouseEvent| {
        move_drag(f64::from(event.client_x()));
    };

    let on_mouse_up = move |_: leptos::ev::MouseEvent| end_drag();
    let on_mouse_leave = move |_: leptos::ev::MouseEvent| end_drag();

    // Keyboard navigation follows the button rules
    let on_key_down = move |event: leptos::ev::KeyboardEvent| match event.key().as_str() {
        "ArrowLeft" if !controller.with_untracked(|c| c.prev_disabled()) => {
            event.prevent_default();
            controller.update(|c| c.go_prev());
        }
        "ArrowRight" if !controller.with_untracked(|c| c.next_disabled()) => {
            event.prevent_default();
            controller.update(|c| c.go_next());
        }
        _ => {}
    };

    let track_style = move || {
        controller.with(|c| {
            format!(
                "gap: {}px; padding-left: {}px; {}",
                c.gap_px(),
                c.mode().track_padding_px(),
                c.track_style(reduced_motion.get())
            )
        })
    };

    let track_class = move || {
        let mut class = css::track.to_string();
        if controller.with(|c| c.mode() == ViewportMode::Single) {
            class = format!("{} {}", class, css::trackSingle);
        }
        if controller.with(|c| c.is_dragging()) {
            class = format!("{} {}", class, css::trackDragging);
        }
        class
    };

    let is_empty = move || controller.with(|c| c.is_empty());

    view! {
        <Show when=move || !is_empty()>
            <div
                class=css::carousel
                role="region"
                aria-roledescription="carousel"
                aria-label="Client testimonials"
                tabindex="0"
                on:keydown=on_key_down
            >
                <div
                    class=css::viewport
                    on:touchstart=on_touch_start
                    on:touchmove=on_touch_move
                    on:touchend=on_touch_end
                    on:touchcancel=move |_| end_drag()
                    on:mousedown=on_mouse_down
                    on:mousemove=on_mouse_move
                    on:mouseup=on_mouse_up
                    on:mouseleave=on_mouse_leave
                >
                    <div class=track_class node_ref=track_ref style=track_style>
                        <For
                            each=move || items.get()
                            key=|testimonial| testimonial.id
                            let:testimonial
                        >
                            <TestimonialCard testimonial=testimonial />
                        </For>
                    </div>
                </div>

                <CarouselNav controller=controller />
                <CarouselDots controller=controller />
            </div>
        </Show>
    }
}
