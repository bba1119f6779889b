//! Fetch of the static rubric document.
//!
//! Client-side (hydrate): a real HTTP GET via `gloo-net`.
//! Server-side (SSR): an error, since the document is only fetched after
//! hydration and the server renders the loading state.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)` for logging. There is no retry; the
//! caller keeps showing the loading view.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use rubric::Document;

/// Bilingual data file served next to the page.
pub const DOCUMENT_PATH: &str = "/ai-consciousness-watch-i18n.json";

/// Fetch and parse the rubric document from [`DOCUMENT_PATH`].
///
/// # Errors
///
/// Returns an error string if the request fails, the status is not 2xx, or
/// the body is not a rubric document.
pub async fn fetch_document() -> Result<Document, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(DOCUMENT_PATH)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("document request failed: {}", resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        decode_document(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Parse a response body into a document.
///
/// # Errors
///
/// Returns the parse error message.
pub fn decode_document(body: &str) -> Result<Document, String> {
    Document::from_json(body).map_err(|e| e.to_string())
}
