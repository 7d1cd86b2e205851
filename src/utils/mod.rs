//! Utility modules for web, DOM, and rendering helpers.
//!
//! Provides:
//! - [`fetch_json_cached`] - Network fetching with timeout and session cache
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`validate_external_url`] - Allowlist check for item links
//! - [`logging`] - `tracing` subscriber writing to the browser console

pub mod cache;
pub mod dom;
mod fetch;
pub mod logging;
mod markdown;
mod url;

pub use fetch::{RaceResult, fetch_json_cached, race_with_timeout};
pub use markdown::markdown_to_html;
pub use url::validate_external_url;
