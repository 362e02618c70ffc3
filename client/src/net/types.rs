//! Wire DTOs for the hospital REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Identifier fields accept
//! either JSON strings or numbers because the backend is inconsistent about
//! which one it emits; the client always carries them as strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role. Only `Patient` may be chosen at sign-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Patient,
    Doctor,
    Admin,
}

impl Role {
    /// All roles in the order the sign-up selector lists them.
    pub const ALL: [Role; 3] = [Role::Patient, Role::Doctor, Role::Admin];

    /// Wire value, also used as the `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
        }
    }

    /// Human-readable label for selectors.
    pub fn label(self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Doctor => "Doctor",
            Role::Admin => "Admin",
        }
    }

    /// Whether an account with this role may be created from the public sign-up form.
    pub fn selectable_at_sign_up(self) -> bool {
        matches!(self, Role::Patient)
    }

    /// Parse a wire value; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Role::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

/// Body of `POST /api/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// An appointment as returned by `GET /api/appointments/get/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub patient_id: String,
    #[serde(default)]
    pub doctor_user_name: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub symptoms: String,
}

/// Body of `PUT /api/appointments/{id}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionUpdate {
    pub is_completed: bool,
}

/// A pharmacy item offered in the prescription picker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

/// Body of `POST /api/billings`, one per submitted prescription.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingRecord {
    pub patient_id: String,
    pub appointment_id: String,
    pub medicines: String,
    pub medicines_cost: f64,
}

/// Response of `GET /api/histories/{patientId}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PatientHistory {
    #[serde(default)]
    pub history: Option<String>,
}

/// Response of `GET /api/doctors/{username}`; only the name is rendered.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DoctorProfile {
    pub name: String,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => Ok(value),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
