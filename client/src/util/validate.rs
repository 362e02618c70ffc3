//! Sign-up form validation.
//!
//! DESIGN
//! ======
//! Rules are pure functions over the raw field strings so the sign-up page,
//! the submission flow, and tests all agree on exactly one ruleset. Whether
//! password complexity is enforced is an explicit `ValidationRules` value
//! rather than a property of whichever page happens to be mounted.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum password length under the complexity rule.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Symbols accepted (and one required) by the complexity rule.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Character the username field refuses to accept.
pub const FORBIDDEN_USERNAME_CHAR: char = '_';

/// Which optional checks the sign-up form applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationRules {
    pub require_password_complexity: bool,
}

impl ValidationRules {
    /// Presence, confirmation and complexity.
    pub const STRICT: Self = Self { require_password_complexity: true };
    /// Presence and confirmation only.
    pub const BASIC: Self = Self { require_password_complexity: false };
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self::STRICT
    }
}

/// First rule a sign-up form violates. `Display` is the user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error(
        "Password must be at least 8 characters long, include an uppercase letter, a lowercase letter, a number, and a special character."
    )]
    WeakPassword,
    #[error("Only patient accounts can be created here.")]
    RoleNotSelectable,
}

/// Raw field values checked on submit.
#[derive(Clone, Copy, Debug)]
pub struct SignUpFields<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Check `fields` against `rules`, reporting the first failure.
///
/// # Errors
///
/// Returns the first violated rule in order: presence, confirmation, complexity.
pub fn validate_sign_up(fields: SignUpFields<'_>, rules: ValidationRules) -> Result<(), ValidationError> {
    if fields.username.is_empty() || fields.password.is_empty() || fields.confirm_password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if fields.password != fields.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if rules.require_password_complexity && !password_meets_complexity(fields.password) {
        return Err(ValidationError::WeakPassword);
    }
    Ok(())
}

/// At least `MIN_PASSWORD_LEN` characters from `[A-Za-z0-9@$!%*?&]` with one
/// lowercase letter, one uppercase letter, one digit and one symbol.
pub fn password_meets_complexity(password: &str) -> bool {
    let mut lower = false;
    let mut upper = false;
    let mut digit = false;
    let mut symbol = false;
    let mut len = 0usize;
    for ch in password.chars() {
        len += 1;
        if ch.is_ascii_lowercase() {
            lower = true;
        } else if ch.is_ascii_uppercase() {
            upper = true;
        } else if ch.is_ascii_digit() {
            digit = true;
        } else if PASSWORD_SYMBOLS.contains(ch) {
            symbol = true;
        } else {
            return false;
        }
    }
    len >= MIN_PASSWORD_LEN && lower && upper && digit && symbol
}

/// Whether a keystroke producing `input` should be accepted into the username field.
pub fn accept_username_input(input: &str) -> bool {
    !input.contains(FORBIDDEN_USERNAME_CHAR)
}

/// Live mismatch hint: shown once a confirmation has been typed and differs.
pub fn confirmation_mismatch(password: &str, confirm_password: &str) -> bool {
    !confirm_password.is_empty() && password != confirm_password
}
