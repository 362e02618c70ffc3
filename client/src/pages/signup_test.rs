use super::*;

fn filled() -> SignUpForm {
    SignUpForm {
        username: "alice".to_owned(),
        password: "Passw0rd!".to_owned(),
        confirm_password: "Passw0rd!".to_owned(),
        role: Role::Patient,
    }
}

#[test]
fn submit_enabled_for_matching_idle_form() {
    assert!(!submit_blocked(&filled(), &SubmitPhase::Idle, None));
}

#[test]
fn submit_blocked_while_confirmation_differs() {
    let form = SignUpForm { confirm_password: "Passw0rd".to_owned(), ..filled() };
    assert!(submit_blocked(&form, &SubmitPhase::Idle, None));
}

#[test]
fn submit_blocked_while_password_hint_showing() {
    assert!(submit_blocked(&filled(), &SubmitPhase::Idle, Some("weak")));
}

#[test]
fn submit_blocked_while_in_flight() {
    assert!(submit_blocked(&filled(), &SubmitPhase::CheckingExistence, None));
    assert!(submit_blocked(&filled(), &SubmitPhase::Submitting, None));
}

#[test]
fn submit_allowed_again_after_failure() {
    assert!(!submit_blocked(&filled(), &SubmitPhase::Failed("Username already exists.".to_owned()), None));
}

#[test]
fn password_hint_only_for_weak_password() {
    assert!(password_hint_for(&SignUpError::Invalid(ValidationError::WeakPassword)).is_some());
    assert_eq!(password_hint_for(&SignUpError::UsernameTaken), None);
    assert_eq!(password_hint_for(&SignUpError::Invalid(ValidationError::PasswordMismatch)), None);
}
