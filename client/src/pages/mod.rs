//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components` and request sequencing to `flow`.

pub mod additional_info;
pub mod doctor_actions;
pub mod doctor_dashboard;
pub mod patient_dashboard;
pub mod signup;
