//! HTTP gateway for the lab-manager API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! `/api` prefix. Server-side (SSR): stubs returning a transport error
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call funnels through `request`, which attaches the stored bearer
//! credential, short-circuits on an auth-failure status (tearing the
//! session down before the caller sees the error), and maps everything
//! else onto the `ApiError` taxonomy. One attempt per invocation; no
//! retries, no backoff, no request coalescing.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::RwSignal;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::Token;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::session;
#[cfg(feature = "hydrate")]
use crate::util::{nav, token};

/// HTTP method accepted by `request`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(feature = "hydrate")]
impl Method {
    fn as_gloo(self) -> gloo_net::http::Method {
        match self {
            Self::Get => gloo_net::http::Method::GET,
            Self::Post => gloo_net::http::Method::POST,
            Self::Put => gloo_net::http::Method::PUT,
            Self::Delete => gloo_net::http::Method::DELETE,
        }
    }
}

/// Request payload variants. JSON is the default content type; the form
/// variant overrides it for the OAuth2 password flow.
#[derive(Clone, Debug)]
pub enum RequestBody {
    /// JSON-encoded body (`application/json`).
    Json(serde_json::Value),
    /// URL-encoded body (`application/x-www-form-urlencoded`).
    Form(String),
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StatusClass {
    Success,
    SessionExpired,
    Failure,
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_status(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Success,
        401 => StatusClass::SessionExpired,
        _ => StatusClass::Failure,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn api_url(endpoint: &str) -> String {
    format!("/api{endpoint}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn detail_message(body: &serde_json::Value) -> Option<&str> {
    body.get("detail").and_then(|detail| detail.as_str())
}

#[cfg(any(test, feature = "hydrate"))]
fn http_error_message(status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => detail.to_owned(),
        None => format!("HTTP error: status {status}"),
    }
}

/// Issue one request against the API and decode the JSON response.
///
/// Behavior, in order: attach `Authorization: Bearer <credential>` when a
/// credential is stored; send against the `/api` prefix; on an
/// auth-failure status clear the session and redirect to login before
/// failing with `ApiError::SessionExpired`; on any other non-success
/// status fail with the server's `detail` message when present; otherwise
/// decode the body into `T`.
///
/// # Errors
///
/// `SessionExpired`, `Api`, or `Transport` per the taxonomy in
/// [`ApiError`].
pub async fn request<T: DeserializeOwned>(
    session: RwSignal<SessionState>,
    method: Method,
    endpoint: &str,
    body: Option<RequestBody>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::RequestBuilder;

        let url = api_url(endpoint);
        let mut builder = RequestBuilder::new(&url).method(method.as_gloo());
        if let Some(credential) = token::load() {
            builder = builder.header("Authorization", &bearer_header_value(&credential));
        }
        let request = match body {
            Some(RequestBody::Json(value)) => builder
                .json(&value)
                .map_err(|e| ApiError::Transport(e.to_string()))?,
            Some(RequestBody::Form(encoded)) => builder
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(encoded)
                .map_err(|e| ApiError::Transport(e.to_string()))?,
            None => builder
                .header("Content-Type", "application/json")
                .build()
                .map_err(|e| ApiError::Transport(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        match classify_status(status) {
            StatusClass::SessionExpired => {
                log::warn!("credential rejected on {url}, ending session");
                session::logout(session, nav::hard_redirect);
                Err(ApiError::SessionExpired)
            }
            StatusClass::Failure => {
                let body: serde_json::Value = response
                    .json()
                    .await
                    .map_err(|e| ApiError::Transport(e.to_string()))?;
                Err(ApiError::Api {
                    status,
                    message: http_error_message(status, detail_message(&body)),
                })
            }
            StatusClass::Success => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Transport(e.to_string())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, method, endpoint, body);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// `GET` convenience wrapper.
///
/// # Errors
///
/// See [`request`].
pub async fn get<T: DeserializeOwned>(
    session: RwSignal<SessionState>,
    endpoint: &str,
) -> Result<T, ApiError> {
    request(session, Method::Get, endpoint, None).await
}

/// `POST` convenience wrapper with a JSON body.
///
/// # Errors
///
/// See [`request`].
pub async fn post<T: DeserializeOwned, B: Serialize>(
    session: RwSignal<SessionState>,
    endpoint: &str,
    body: &B,
) -> Result<T, ApiError> {
    let value = serde_json::to_value(body).map_err(|e| ApiError::Transport(e.to_string()))?;
    request(session, Method::Post, endpoint, Some(RequestBody::Json(value))).await
}

/// `PUT` convenience wrapper with a JSON body.
///
/// # Errors
///
/// See [`request`].
pub async fn put<T: DeserializeOwned, B: Serialize>(
    session: RwSignal<SessionState>,
    endpoint: &str,
    body: &B,
) -> Result<T, ApiError> {
    let value = serde_json::to_value(body).map_err(|e| ApiError::Transport(e.to_string()))?;
    request(session, Method::Put, endpoint, Some(RequestBody::Json(value))).await
}

/// `DELETE` convenience wrapper.
///
/// # Errors
///
/// See [`request`].
pub async fn delete<T: DeserializeOwned>(
    session: RwSignal<SessionState>,
    endpoint: &str,
) -> Result<T, ApiError> {
    request(session, Method::Delete, endpoint, None).await
}

/// Exchange credentials for a bearer token via the OAuth2 password flow
/// (`POST /api/token`, form-urlencoded).
///
/// # Errors
///
/// See [`request`]; incorrect credentials surface as an auth failure,
/// which tears down any existing session state before returning.
pub async fn login(
    session: RwSignal<SessionState>,
    username: &str,
    password: &str,
) -> Result<Token, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = encode_login_form(username, password);
        request(session, Method::Post, "/token", Some(RequestBody::Form(form))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, username, password);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
fn encode_login_form(username: &str, password: &str) -> String {
    let username = String::from(js_sys::encode_uri_component(username));
    let password = String::from(js_sys::encode_uri_component(password));
    format!("username={username}&password={password}")
}
