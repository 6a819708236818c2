//! Browser `fetch` returning text or JSON, bounded by [`FETCH_TIMEOUT_MS`].
//!
//! Callers decide whether a failure is worth more than a log line.

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

/// Media type requested through the `Accept` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accept {
    /// GitHub REST API v3 JSON.
    GithubJson,
    /// HTML pages and raw files.
    Any,
}

impl Accept {
    pub fn header_value(self) -> &'static str {
        match self {
            Self::GithubJson => "application/vnd.github.v3+json",
            Self::Any => "*/*",
        }
    }
}

/// Await `future`, or give up with `None` after `timeout_ms`.
pub async fn with_timeout<F: Future>(future: F, timeout_ms: u32) -> Option<F::Output> {
    let future = pin!(future);
    match select(future, TimeoutFuture::new(timeout_ms)).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

/// Fetch and parse JSON from the GitHub API.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_text(url, Accept::GithubJson).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Fetch a URL as text. Non-2xx responses become [`FetchError::HttpError`].
pub async fn fetch_text(url: &str, accept: Accept) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let request = build_request(url, accept)?;

    let pending = JsFuture::from(window.fetch_with_request(&request));
    let response: Response = with_timeout(pending, FETCH_TIMEOUT_MS)
        .await
        .ok_or(FetchError::Timeout)?
        .map_err(|err| FetchError::NetworkError(describe_rejection(&err)))?
        .dyn_into()
        .map_err(|_| FetchError::InvalidContent)?;

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let body = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    JsFuture::from(body)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)
}

fn build_request(url: &str, accept: Accept) -> Result<Request, FetchError> {
    let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
    headers
        .set("Accept", accept.header_value())
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);
    init.set_headers(&headers);

    Request::new_with_str_and_init(url, &init).map_err(|_| FetchError::RequestCreationFailed)
}

/// Message of a rejected `fetch`, usually a `TypeError` for CORS or offline.
fn describe_rejection(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "request rejected".to_string())
}
