//! Account creation: validate, check the username, create, then navigate.
//!
//! The existence check and the create call are independent requests. If the
//! check passes and the create fails nothing is rolled back; the user retries.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::net::api::{ApiError, CONFLICT, HospitalApi};
use crate::state::signup::{SignUpForm, SubmitPhase};
use crate::util::route::follow_up_route;
use crate::util::validate::{ValidationError, ValidationRules, validate_sign_up};

/// Why a sign-up submission stopped. `Display` is the inline message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignUpError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Username already exists.")]
    UsernameTaken,
    #[error("Failed to create account. Please try again.")]
    CreateFailed(ApiError),
}

/// Run one sign-up submission, reporting each phase through `on_phase`.
///
/// Returns the route to navigate to on success.
///
/// # Errors
///
/// Returns [`SignUpError`] when validation fails, the username is taken, or
/// the create request fails. `on_phase` has already received the matching
/// `SubmitPhase::Failed` by then.
pub async fn submit_sign_up<A, F>(
    api: &A,
    form: &SignUpForm,
    rules: ValidationRules,
    mut on_phase: F,
) -> Result<String, SignUpError>
where
    A: HospitalApi,
    F: FnMut(SubmitPhase),
{
    let result = run(api, form, rules, &mut on_phase).await;
    match &result {
        Ok(_) => on_phase(SubmitPhase::Succeeded),
        Err(err) => on_phase(SubmitPhase::Failed(err.to_string())),
    }
    result
}

async fn run<A, F>(api: &A, form: &SignUpForm, rules: ValidationRules, on_phase: &mut F) -> Result<String, SignUpError>
where
    A: HospitalApi,
    F: FnMut(SubmitPhase),
{
    on_phase(SubmitPhase::Validating);
    validate_sign_up(form.fields(), rules)?;
    if !form.role.selectable_at_sign_up() {
        return Err(ValidationError::RoleNotSelectable.into());
    }

    on_phase(SubmitPhase::CheckingExistence);
    let taken = match api.username_exists(&form.username).await {
        Ok(taken) => taken,
        Err(ApiError::Status(CONFLICT)) => true,
        Err(err) => {
            leptos::logging::warn!("username check failed, continuing: {err}");
            false
        }
    };
    if taken {
        return Err(SignUpError::UsernameTaken);
    }

    on_phase(SubmitPhase::Submitting);
    if let Err(err) = api.create_account(&form.to_account()).await {
        leptos::logging::error!("account create failed: {err}");
        return Err(SignUpError::CreateFailed(err));
    }
    Ok(follow_up_route(&form.username))
}
