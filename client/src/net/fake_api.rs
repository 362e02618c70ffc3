//! In-memory `HospitalApi` used by flow tests.

use std::cell::RefCell;

use super::api::{ApiError, HospitalApi};
use super::types::{Appointment, BillingRecord, DoctorProfile, Medicine, NewAccount, PatientHistory};

/// Recorded call, in issue order.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    UsernameExists(String),
    CreateAccount(NewAccount),
    FetchAppointment(String),
    SetCompleted(String, bool),
    FetchHistory(String),
    FetchMedicines,
    CreateBilling(BillingRecord),
    FetchDoctor(String),
}

/// Canned responses plus a call log.
#[derive(Debug)]
pub struct FakeApi {
    pub exists: Result<bool, ApiError>,
    pub create: Result<(), ApiError>,
    pub appointment: Result<Appointment, ApiError>,
    pub set_completed: Result<(), ApiError>,
    pub history: Result<PatientHistory, ApiError>,
    pub medicines: Result<Vec<Medicine>, ApiError>,
    pub billing: Result<(), ApiError>,
    pub doctor: Result<DoctorProfile, ApiError>,
    pub calls: RefCell<Vec<Call>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            exists: Ok(false),
            create: Ok(()),
            appointment: Ok(sample_appointment()),
            set_completed: Ok(()),
            history: Ok(PatientHistory { history: Some("Asthma since 2010".to_owned()) }),
            medicines: Ok(sample_medicines()),
            billing: Ok(()),
            doctor: Ok(DoctorProfile { name: "Gregory House".to_owned() }),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

pub fn sample_appointment() -> Appointment {
    Appointment {
        id: "a-1".to_owned(),
        date: "2024-10-01".to_owned(),
        time: "09:30".to_owned(),
        patient_id: "p-1".to_owned(),
        doctor_user_name: "drhouse".to_owned(),
        is_completed: false,
        symptoms: "cough".to_owned(),
    }
}

pub fn sample_medicines() -> Vec<Medicine> {
    vec![
        Medicine { id: "1".to_owned(), name: "Paracetamol".to_owned(), price: 3.5 },
        Medicine { id: "2".to_owned(), name: "Amoxicillin".to_owned(), price: 12.0 },
        Medicine { id: "3".to_owned(), name: "Ibuprofen".to_owned(), price: 4.25 },
    ]
}

impl HospitalApi for FakeApi {
    async fn username_exists(&self, username: &str) -> Result<bool, ApiError> {
        self.record(Call::UsernameExists(username.to_owned()));
        self.exists.clone()
    }

    async fn create_account(&self, account: &NewAccount) -> Result<(), ApiError> {
        self.record(Call::CreateAccount(account.clone()));
        self.create.clone()
    }

    async fn fetch_appointment(&self, id: &str) -> Result<Appointment, ApiError> {
        self.record(Call::FetchAppointment(id.to_owned()));
        self.appointment.clone()
    }

    async fn set_appointment_completed(&self, id: &str, completed: bool) -> Result<(), ApiError> {
        self.record(Call::SetCompleted(id.to_owned(), completed));
        self.set_completed.clone()
    }

    async fn fetch_patient_history(&self, patient_id: &str) -> Result<PatientHistory, ApiError> {
        self.record(Call::FetchHistory(patient_id.to_owned()));
        self.history.clone()
    }

    async fn fetch_medicines(&self) -> Result<Vec<Medicine>, ApiError> {
        self.record(Call::FetchMedicines);
        self.medicines.clone()
    }

    async fn create_billing(&self, record: &BillingRecord) -> Result<(), ApiError> {
        self.record(Call::CreateBilling(record.clone()));
        self.billing.clone()
    }

    async fn fetch_doctor(&self, username: &str) -> Result<DoctorProfile, ApiError> {
        self.record(Call::FetchDoctor(username.to_owned()));
        self.doctor.clone()
    }
}
