use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Patient).unwrap(), "\"patient\"");
    assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), "\"doctor\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

#[test]
fn role_default_is_patient() {
    assert_eq!(Role::default(), Role::Patient);
}

#[test]
fn only_patient_is_selectable_at_sign_up() {
    let selectable: Vec<Role> = Role::ALL
        .into_iter()
        .filter(|role| role.selectable_at_sign_up())
        .collect();
    assert_eq!(selectable, vec![Role::Patient]);
}

#[test]
fn role_parse_matches_wire_values() {
    assert_eq!(Role::parse("doctor"), Some(Role::Doctor));
    assert_eq!(Role::parse("Doctor"), None);
    assert_eq!(Role::parse(""), None);
}

// =============================================================
// Appointment
// =============================================================

#[test]
fn appointment_deserializes_camel_case_payload() {
    let json = serde_json::json!({
        "id": "a-1",
        "date": "2024-10-01",
        "time": "09:30",
        "patientId": "p-7",
        "doctorUserName": "drhouse",
        "isCompleted": true,
        "symptoms": "cough"
    });
    let appt: Appointment = serde_json::from_value(json).unwrap();
    assert_eq!(appt.id, "a-1");
    assert_eq!(appt.patient_id, "p-7");
    assert_eq!(appt.doctor_user_name, "drhouse");
    assert!(appt.is_completed);
    assert_eq!(appt.symptoms, "cough");
}

#[test]
fn appointment_accepts_numeric_ids() {
    let json = serde_json::json!({ "id": 12, "patientId": 40 });
    let appt: Appointment = serde_json::from_value(json).unwrap();
    assert_eq!(appt.id, "12");
    assert_eq!(appt.patient_id, "40");
    assert!(!appt.is_completed);
}

#[test]
fn appointment_rejects_boolean_id() {
    let json = serde_json::json!({ "id": true, "patientId": "p" });
    assert!(serde_json::from_value::<Appointment>(json).is_err());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn completion_update_uses_is_completed_key() {
    let body = serde_json::to_value(CompletionUpdate { is_completed: true }).unwrap();
    assert_eq!(body, serde_json::json!({ "isCompleted": true }));
}

#[test]
fn billing_record_serializes_backend_field_names() {
    let record = BillingRecord {
        patient_id: "p-1".to_owned(),
        appointment_id: "a-1".to_owned(),
        medicines: "Amoxicillin".to_owned(),
        medicines_cost: 12.5,
    };
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        serde_json::json!({
            "patientId": "p-1",
            "appointmentId": "a-1",
            "medicines": "Amoxicillin",
            "medicinesCost": 12.5
        })
    );
}

#[test]
fn new_account_serializes_role_string() {
    let account = NewAccount {
        username: "alice".to_owned(),
        password: "Secret1!x".to_owned(),
        role: Role::Patient,
    };
    assert_eq!(
        serde_json::to_value(&account).unwrap(),
        serde_json::json!({ "username": "alice", "password": "Secret1!x", "role": "patient" })
    );
}

// =============================================================
// Responses
// =============================================================

#[test]
fn medicine_list_deserializes() {
    let json = serde_json::json!([
        { "id": 1, "name": "Paracetamol", "price": 3.5 },
        { "id": "m-2", "name": "Ibuprofen" }
    ]);
    let list: Vec<Medicine> = serde_json::from_value(json).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, "1");
    assert_eq!(list[1].price, 0.0);
}

#[test]
fn patient_history_allows_null_and_missing() {
    let null: PatientHistory = serde_json::from_value(serde_json::json!({ "history": null })).unwrap();
    assert_eq!(null.history, None);
    let missing: PatientHistory = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(missing.history, None);
}
