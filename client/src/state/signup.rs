//! Sign-up form state and submission phases.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::net::types::{NewAccount, Role};
use crate::util::validate::SignUpFields;

/// Field values of the sign-up form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl SignUpForm {
    pub fn fields(&self) -> SignUpFields<'_> {
        SignUpFields {
            username: &self.username,
            password: &self.password,
            confirm_password: &self.confirm_password,
        }
    }

    pub fn to_account(&self) -> NewAccount {
        NewAccount {
            username: self.username.clone(),
            password: self.password.clone(),
            role: self.role,
        }
    }
}

/// Where a submission currently is. Only `Succeeded` and `Failed` are terminal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    CheckingExistence,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmitPhase {
    /// A request or check is running; further submits are ignored.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Validating | Self::CheckingExistence | Self::Submitting)
    }

    /// Inline error to render, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Status line shown while busy.
    pub fn progress_label(&self) -> Option<&'static str> {
        match self {
            Self::Validating => Some("Checking details..."),
            Self::CheckingExistence => Some("Checking username..."),
            Self::Submitting => Some("Creating account..."),
            _ => None,
        }
    }
}
