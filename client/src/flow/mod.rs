//! Submission controllers.
//!
//! ARCHITECTURE
//! ============
//! Each flow sequences validation and `HospitalApi` calls for one user action
//! and reports progress through plain callbacks, so pages only map results to
//! signals and navigation. Flows are generic over the API so tests drive them
//! with an in-memory fake.

pub mod doctor;
pub mod signup;
