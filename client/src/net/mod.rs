//! Networking modules for the hospital REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the call surface and its HTTP implementation, `http` is the
//! browser transport, and `types` defines the wire schema.

pub mod api;
#[cfg(test)]
pub(crate) mod fake_api;
pub mod http;
pub mod types;
