//! Route paths and URL helpers shared by pages and the navbar.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

pub const ADDITIONAL_INFO: &str = "/additional-info";
pub const LOGIN: &str = "/login";
pub const PATIENT_DASHBOARD: &str = "/patient-dashboard";
pub const DOCTOR_DASHBOARD: &str = "/doctor-dashboard";
pub const DOCTOR_VIEW_APPOINTMENTS: &str = "/doctor/view-appointments";
pub const DOCTOR_MANAGE_APPOINTMENTS: &str = "/doctor/manage-appointments";
pub const DOCTOR_SET_TIMINGS: &str = "/doctor/set-timings";

/// Percent-encode everything outside RFC 3986 unreserved characters.
pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Route shown after an account is created, carrying the new username.
pub fn follow_up_route(username: &str) -> String {
    format!("{ADDITIONAL_INFO}?username={}", encode_component(username))
}
