//! Network fetching utilities with timeout support.

use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::utils::cache;

// =============================================================================
// Promise Racing
// =============================================================================

/// Outcome of racing a promise against a timer.
#[derive(Debug)]
pub enum RaceResult {
    Completed(JsValue),
    TimedOut,
    /// The promise rejected.
    Error(String),
}

/// Race `promise` against a `timeout_ms` timer.
///
/// The timer resolves to `undefined`, so a promise that itself resolves to
/// `undefined` is reported as timed out.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race = Promise::race(&Array::of2(&promise, &timer));

    match JsFuture::from(race).await {
        Ok(result) if result.is_undefined() => RaceResult::TimedOut,
        Ok(result) => RaceResult::Completed(result),
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_text(url).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Fetch and parse JSON, reusing a sessionStorage copy when present.
pub async fn fetch_json_cached<T>(url: &str, cache_key: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned + Serialize,
{
    if let Some(cached) = cache::get::<T>(cache_key) {
        debug!(url, cache_key, "cache hit");
        return Ok(cached);
    }

    let data = fetch_json::<T>(url).await?;

    // Caching is best-effort.
    if let Err(e) = cache::set(cache_key, &data) {
        warn!(?e, cache_key, "could not cache response");
    }

    Ok(data)
}

/// GET `url` as text, failing after `FETCH_TIMEOUT_MS`.
async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    match race_with_timeout(window.fetch_with_request(&request), FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

            if !resp.ok() {
                return Err(FetchError::HttpError(resp.status()));
            }

            let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
                .await
                .map_err(|_| FetchError::ResponseReadFailed)?;

            text.as_string().ok_or(FetchError::InvalidContent)
        }
    }
}
