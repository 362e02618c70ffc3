//! Thin JSON transport over browser `fetch`.
//!
//! Browser builds go through `gloo-net`; every other build gets stubs that
//! fail with `ApiError::Unavailable` so SSR and native tests never touch the
//! network.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::ApiError;

/// Methods that carry a JSON body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

/// Map an HTTP status to `Ok` for 2xx and `ApiError::Status` otherwise.
pub(crate) fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

#[cfg(feature = "hydrate")]
const NOT_FOUND: u16 = 404;

/// GET `url` and decode the JSON body as `T`.
#[cfg(feature = "hydrate")]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {url}");
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(resp.status())?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET `url`, returning `None` on 404 and the raw JSON body otherwise.
#[cfg(feature = "hydrate")]
pub async fn get_optional_json(url: &str) -> Result<Option<serde_json::Value>, ApiError> {
    log::debug!("GET {url}");
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.status() == NOT_FOUND {
        return Ok(None);
    }
    check_status(resp.status())?;
    let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    if text.trim().is_empty() {
        return Ok(Some(serde_json::Value::Null));
    }
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send `body` as JSON with `method`; the response body is ignored.
#[cfg(feature = "hydrate")]
pub async fn send_json<B: Serialize>(method: Method, url: &str, body: &B) -> Result<(), ApiError> {
    log::debug!("{} {url}", method.as_str());
    let builder = match method {
        Method::Post => gloo_net::http::Request::post(url),
        Method::Put => gloo_net::http::Request::put(url),
    };
    let resp = builder
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(resp.status())
}

#[cfg(not(feature = "hydrate"))]
#[allow(clippy::unused_async)]
pub async fn get_json<T: DeserializeOwned>(_url: &str) -> Result<T, ApiError> {
    Err(ApiError::Unavailable)
}

#[cfg(not(feature = "hydrate"))]
#[allow(clippy::unused_async)]
pub async fn get_optional_json(_url: &str) -> Result<Option<serde_json::Value>, ApiError> {
    Err(ApiError::Unavailable)
}

#[cfg(not(feature = "hydrate"))]
#[allow(clippy::unused_async)]
pub async fn send_json<B: Serialize>(method: Method, _url: &str, _body: &B) -> Result<(), ApiError> {
    leptos::logging::warn!("{} skipped: no browser transport", method.as_str());
    Err(ApiError::Unavailable)
}
