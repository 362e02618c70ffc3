//! Doctor dashboard and doctor actions flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The actions page runs `load_appointment` and `load_medicines` as two
//! independent tasks. History is fetched only after the appointment arrives
//! because it is keyed by the appointment's patient. Each loader reports
//! through `ActionsUpdate`, so failures surface one at a time.

#[cfg(test)]
#[path = "doctor_test.rs"]
mod doctor_test;

use crate::net::api::{ApiError, HospitalApi};
use crate::net::types::{Appointment, BillingRecord, Medicine};
use crate::state::actions::ActionsUpdate;

/// Why a doctor action failed. `Display` is the banner message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionsError {
    #[error("No appointment ID found in session.")]
    NoAppointment,
    #[error("Failed to fetch appointment details.")]
    Appointment(ApiError),
    #[error("Failed to fetch patient history.")]
    History(ApiError),
    #[error("Failed to fetch medicines.")]
    Medicines(ApiError),
    #[error("Failed to mark appointment as completed.")]
    Completion(ApiError),
    #[error("Select a medicine first.")]
    NoMedicine,
    #[error("Appointment details are not loaded yet.")]
    AppointmentNotLoaded,
    #[error("Failed to submit prescription.")]
    Billing(ApiError),
}

/// Banner shown after a billing record is created.
pub const PRESCRIPTION_SUBMITTED: &str = "Prescription submitted successfully!";

/// Dashboard greeting line.
pub fn greeting(name: &str) -> String {
    format!("Hi {name},")
}

/// Resolve the doctor's display name, falling back to the session username.
pub async fn doctor_display_name<A: HospitalApi>(api: &A, username: &str) -> String {
    if username.is_empty() {
        return String::new();
    }
    match api.fetch_doctor(username).await {
        Ok(profile) => profile.name,
        Err(err) => {
            leptos::logging::warn!("doctor profile fetch failed: username={username} err={err}");
            username.to_owned()
        }
    }
}

/// Fetch the appointment, then its patient's history.
pub async fn load_appointment<A, F>(api: &A, appointment_id: Option<&str>, mut report: F)
where
    A: HospitalApi,
    F: FnMut(ActionsUpdate),
{
    let Some(id) = appointment_id else {
        report(ActionsUpdate::Error(ActionsError::NoAppointment.to_string()));
        return;
    };
    let appointment = match api.fetch_appointment(id).await {
        Ok(appointment) => appointment,
        Err(err) => {
            leptos::logging::error!("appointment fetch failed: id={id} err={err}");
            report(ActionsUpdate::Error(ActionsError::Appointment(err).to_string()));
            return;
        }
    };
    let patient_id = appointment.patient_id.clone();
    report(ActionsUpdate::Appointment(appointment));

    match api.fetch_patient_history(&patient_id).await {
        Ok(history) => report(ActionsUpdate::History(history.history)),
        Err(err) => {
            leptos::logging::error!("history fetch failed: patient={patient_id} err={err}");
            report(ActionsUpdate::Error(ActionsError::History(err).to_string()));
        }
    }
}

/// Fetch the pharmacy list.
pub async fn load_medicines<A, F>(api: &A, mut report: F)
where
    A: HospitalApi,
    F: FnMut(ActionsUpdate),
{
    match api.fetch_medicines().await {
        Ok(medicines) => report(ActionsUpdate::Medicines(medicines)),
        Err(err) => {
            leptos::logging::error!("medicine fetch failed: {err}");
            report(ActionsUpdate::Error(ActionsError::Medicines(err).to_string()));
        }
    }
}

/// Send one completion update with `target` as the new flag.
///
/// # Errors
///
/// Returns [`ActionsError::NoAppointment`] without a selected appointment,
/// [`ActionsError::Completion`] when the request fails.
pub async fn set_completion<A: HospitalApi>(
    api: &A,
    appointment_id: Option<&str>,
    target: bool,
) -> Result<(), ActionsError> {
    let id = appointment_id.ok_or(ActionsError::NoAppointment)?;
    api.set_appointment_completed(id, target).await.map_err(|err| {
        leptos::logging::error!("completion update failed: id={id} err={err}");
        ActionsError::Completion(err)
    })
}

/// Billing record for prescribing `medicine` at `appointment`.
pub fn billing_for(appointment_id: &str, appointment: &Appointment, medicine: &Medicine) -> BillingRecord {
    BillingRecord {
        patient_id: appointment.patient_id.clone(),
        appointment_id: appointment_id.to_owned(),
        medicines: medicine.name.clone(),
        medicines_cost: medicine.price,
    }
}

/// Post the billing record for the selected medicine.
///
/// # Errors
///
/// Returns the first missing precondition (medicine, appointment id, loaded
/// appointment) or [`ActionsError::Billing`] when the request fails.
pub async fn submit_prescription<A: HospitalApi>(
    api: &A,
    appointment_id: Option<&str>,
    appointment: Option<&Appointment>,
    medicine: Option<&Medicine>,
) -> Result<BillingRecord, ActionsError> {
    let medicine = medicine.ok_or(ActionsError::NoMedicine)?;
    let id = appointment_id.ok_or(ActionsError::NoAppointment)?;
    let appointment = appointment.ok_or(ActionsError::AppointmentNotLoaded)?;
    let record = billing_for(id, appointment, medicine);
    match api.create_billing(&record).await {
        Ok(()) => Ok(record),
        Err(err) => {
            leptos::logging::error!("billing create failed: appointment={id} err={err}");
            Err(ActionsError::Billing(err))
        }
    }
}
