//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view (`signup`, `actions`) plus the cross-view
//! `session` context so components depend on small focused models.

pub mod actions;
pub mod session;
pub mod signup;
