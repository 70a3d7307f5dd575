//! Thin wrapper over `gloo-net` for the inventory backend.
//!
//! Every call sends and expects JSON. Non-2xx answers become
//! [`ApiError::Application`] carrying the backend's own message.

use contracts::shared::error_body::extract_error_message;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_error::ApiError;
use super::config::config;

/// Base URL for API requests, e.g. `http://localhost:8000`
pub fn api_base() -> String {
    config().api_base.clone()
}

/// Build a full API URL from a path starting with `/api/`
///
/// ```rust,ignore
/// let url = api_url("/api/compra/eliminar/7/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

impl Verb {
    fn label(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        }
    }

    fn builder(self, url: &str) -> RequestBuilder {
        let builder = match self {
            Verb::Get => Request::get(url),
            Verb::Post => Request::post(url),
            Verb::Patch => Request::patch(url),
            Verb::Delete => Request::delete(url),
        };
        builder.header("Content-Type", "application/json")
    }
}

async fn dispatch(verb: Verb, path: &str, request: Request) -> Result<Response, ApiError> {
    log::debug!("{} {}", verb.label(), path);

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    let message = extract_error_message(&body, &status_text);
    log::warn!("{} {} failed with {}: {}", verb.label(), path, status, message);

    Err(ApiError::Application { status, message })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `verb path` without a body, decoding the JSON answer
pub async fn fetch_json<T: DeserializeOwned>(verb: Verb, path: &str) -> Result<T, ApiError> {
    let request = verb
        .builder(&api_url(path))
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = dispatch(verb, path, request).await?;
    decode(response).await
}

/// `verb path` with a JSON body, decoding the JSON answer
pub async fn send_json<B, T>(verb: Verb, path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = verb
        .builder(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = dispatch(verb, path, request).await?;
    decode(response).await
}

/// `verb path` where the answer body is irrelevant (deletes answer 204)
pub async fn send_empty(verb: Verb, path: &str) -> Result<(), ApiError> {
    let request = verb
        .builder(&api_url(path))
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    dispatch(verb, path, request).await.map(|_| ())
}
