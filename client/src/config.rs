//! Build-time client configuration.
//!
//! The backend base URL is baked into the WASM bundle at compile time via
//! `HEALTHWISE_API_BASE`; there is no runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend origin used when `HEALTHWISE_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Backend origin for all REST calls.
pub fn api_base() -> &'static str {
    option_env!("HEALTHWISE_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Join `base` and an absolute API `path` without doubling the slash.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
