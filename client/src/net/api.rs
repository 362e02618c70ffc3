//! REST API surface for the hospital backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and flows depend on the `HospitalApi` trait, never on the transport.
//! `HttpApi` is the production implementation: real `fetch` calls when built
//! with `hydrate`, an `Unavailable` error everywhere else (SSR, native tests).
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. Callers log the error and
//! turn it into one user-facing string; nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{self, Method};
use super::types::{
    Appointment, BillingRecord, CompletionUpdate, DoctorProfile, Medicine, NewAccount, PatientHistory,
};
use crate::config;
use crate::util::route::encode_component;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// HTTP is only wired up in the browser build.
    #[error("not available on server")]
    Unavailable,
}

/// Calls the hospital backend makes available to the UI.
#[allow(async_fn_in_trait)]
pub trait HospitalApi {
    /// `GET /api/users/{username}`; `true` when the username is already taken.
    async fn username_exists(&self, username: &str) -> Result<bool, ApiError>;
    /// `POST /api/users`.
    async fn create_account(&self, account: &NewAccount) -> Result<(), ApiError>;
    /// `GET /api/appointments/get/{id}`.
    async fn fetch_appointment(&self, id: &str) -> Result<Appointment, ApiError>;
    /// `PUT /api/appointments/{id}` with `{"isCompleted": completed}`.
    async fn set_appointment_completed(&self, id: &str, completed: bool) -> Result<(), ApiError>;
    /// `GET /api/histories/{patientId}`.
    async fn fetch_patient_history(&self, patient_id: &str) -> Result<PatientHistory, ApiError>;
    /// `GET /api/pharmacies`.
    async fn fetch_medicines(&self) -> Result<Vec<Medicine>, ApiError>;
    /// `POST /api/billings`.
    async fn create_billing(&self, record: &BillingRecord) -> Result<(), ApiError>;
    /// `GET /api/doctors/{username}`.
    async fn fetch_doctor(&self, username: &str) -> Result<DoctorProfile, ApiError>;
}

fn user_endpoint(username: &str) -> String {
    format!("/api/users/{}", encode_component(username))
}

fn appointment_endpoint(id: &str) -> String {
    format!("/api/appointments/get/{}", encode_component(id))
}

fn appointment_update_endpoint(id: &str) -> String {
    format!("/api/appointments/{}", encode_component(id))
}

fn history_endpoint(patient_id: &str) -> String {
    format!("/api/histories/{}", encode_component(patient_id))
}

fn doctor_endpoint(username: &str) -> String {
    format!("/api/doctors/{}", encode_component(username))
}

const USERS_ENDPOINT: &str = "/api/users";
const PHARMACIES_ENDPOINT: &str = "/api/pharmacies";
const BILLINGS_ENDPOINT: &str = "/api/billings";

/// Status some backends use to say the username is already registered.
pub const CONFLICT: u16 = 409;

/// Fold the raw existence-check response into "taken or not".
///
/// 404 (`Ok(None)`) is free and 409 is taken; other failures pass through.
pub(crate) fn existence_from(response: Result<Option<serde_json::Value>, ApiError>) -> Result<bool, ApiError> {
    match response {
        Ok(body) => Ok(body.as_ref().is_some_and(username_taken)),
        Err(ApiError::Status(CONFLICT)) => Ok(true),
        Err(err) => Err(err),
    }
}

/// Interpret the existence-check body: `true` or any object means taken.
pub(crate) fn username_taken(body: &serde_json::Value) -> bool {
    match body {
        serde_json::Value::Bool(taken) => *taken,
        serde_json::Value::Null => false,
        serde_json::Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// HTTP implementation of [`HospitalApi`] rooted at a backend origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(config::api_base())
    }
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        config::join_url(&self.base, path)
    }
}

impl HospitalApi for HttpApi {
    async fn username_exists(&self, username: &str) -> Result<bool, ApiError> {
        existence_from(http::get_optional_json(&self.url(&user_endpoint(username))).await)
    }

    async fn create_account(&self, account: &NewAccount) -> Result<(), ApiError> {
        http::send_json(Method::Post, &self.url(USERS_ENDPOINT), account).await
    }

    async fn fetch_appointment(&self, id: &str) -> Result<Appointment, ApiError> {
        http::get_json(&self.url(&appointment_endpoint(id))).await
    }

    async fn set_appointment_completed(&self, id: &str, completed: bool) -> Result<(), ApiError> {
        let body = CompletionUpdate { is_completed: completed };
        http::send_json(Method::Put, &self.url(&appointment_update_endpoint(id)), &body).await
    }

    async fn fetch_patient_history(&self, patient_id: &str) -> Result<PatientHistory, ApiError> {
        http::get_json(&self.url(&history_endpoint(patient_id))).await
    }

    async fn fetch_medicines(&self) -> Result<Vec<Medicine>, ApiError> {
        http::get_json(&self.url(PHARMACIES_ENDPOINT)).await
    }

    async fn create_billing(&self, record: &BillingRecord) -> Result<(), ApiError> {
        http::send_json(Method::Post, &self.url(BILLINGS_ENDPOINT), record).await
    }

    async fn fetch_doctor(&self, username: &str) -> Result<DoctorProfile, ApiError> {
        http::get_json(&self.url(&doctor_endpoint(username))).await
    }
}
