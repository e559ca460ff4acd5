//! One-shot JSON fetching with a timeout.
//!
//! The request is raced against a timer with `Promise.race`. The timer
//! resolves to `undefined`, which is how a timeout is told apart from a
//! `Response`. No caching and no retry: callers get a single snapshot.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Window};

use crate::config::network::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

/// Fetch `url` and parse the body as JSON.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let response = fetch_with_timeout(&window, url, FETCH_TIMEOUT_MS).await?;

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)?;

    serde_json::from_str(&body).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Issue a same-origin GET, failing with [`FetchError::Timeout`] after
/// `timeout_ms`.
async fn fetch_with_timeout(
    window: &Window,
    url: &str,
    timeout_ms: i32,
) -> Result<Response, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });
    let race = Array::of2(&window.fetch_with_request(&request), &timer);

    let settled = JsFuture::from(Promise::race(&race))
        .await
        .map_err(|e| {
            FetchError::NetworkError(e.as_string().unwrap_or_else(|| "request failed".to_string()))
        })?;

    if settled.is_undefined() {
        return Err(FetchError::Timeout);
    }
    settled.dyn_into().map_err(|_| FetchError::InvalidContent)
}
