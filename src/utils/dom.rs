//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Current viewport width in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
}

/// Layout width of the first child of `parent`.
///
/// Returns `None` when `parent` has no element children or the child is
/// not an HTML element.
pub fn first_child_width(parent: &Element) -> Option<f64> {
    parent
        .first_element_child()?
        .dyn_into::<HtmlElement>()
        .ok()
        .map(|el| f64::from(el.offset_width()))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        window().and_then(|w| w.document()).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_viewport_width() {
        assert!(viewport_width().is_some_and(|w| w > 0.0));
    }

    #[wasm_bindgen_test]
    fn test_first_child_width() {
        let doc = document();
        let track = doc.create_element("div").unwrap();
        track
            .set_attribute("style", "display: flex; width: 600px;")
            .unwrap();
        let card = doc.create_element("div").unwrap();
        card.set_attribute("style", "flex: 0 0 auto; width: 120px;")
            .unwrap();
        track.append_child(&card).unwrap();
        doc.body().unwrap().append_child(&track).unwrap();

        assert_eq!(first_child_width(&track), Some(120.0));
        track.remove();
    }

    #[wasm_bindgen_test]
    fn test_first_child_width_empty() {
        let track = document().create_element("div").unwrap();
        assert_eq!(first_child_width(&track), None);
    }
}
