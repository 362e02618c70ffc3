//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and form widgets while reading/writing
//! state from Leptos context providers or props.

pub mod medicine_picker;
pub mod navbar;
