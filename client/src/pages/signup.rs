//! Account sign-up page.
//!
//! DESIGN
//! ======
//! One page serves every sign-up entry point; the validation ruleset is a
//! prop instead of a per-copy behavior. Submission runs `flow::signup` and
//! only maps its phases onto signals and the resulting route onto navigation.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::flow::signup::{SignUpError, submit_sign_up};
use crate::net::api::HttpApi;
use crate::net::types::Role;
use crate::state::signup::{SignUpForm, SubmitPhase};
use crate::util::nav::navigation_target;
use crate::util::validate::{ValidationError, ValidationRules, accept_username_input, confirmation_mismatch};

pub const USERNAME_HELP: &str = "Username should not contain the '_' character.";

/// Hint rendered under the password field after a submit attempt.
pub(crate) fn password_hint_for(err: &SignUpError) -> Option<String> {
    match err {
        SignUpError::Invalid(ValidationError::WeakPassword) => Some(err.to_string()),
        _ => None,
    }
}

/// Whether the submit button should be disabled.
pub(crate) fn submit_blocked(form: &SignUpForm, phase: &SubmitPhase, password_hint: Option<&str>) -> bool {
    phase.is_busy() || confirmation_mismatch(&form.password, &form.confirm_password) || password_hint.is_some()
}

/// Sign-up page with username, password, confirmation and role fields.
#[component]
pub fn SignUpPage(#[prop(default = ValidationRules::STRICT)] rules: ValidationRules) -> impl IntoView {
    let form = RwSignal::new(SignUpForm::default());
    let phase = RwSignal::new(SubmitPhase::Idle);
    let password_hint = RwSignal::new(None::<String>);
    let nav = navigation_target();

    let mismatch = move || {
        let f = form.get();
        confirmation_mismatch(&f.password, &f.confirm_password)
    };
    let blocked = move || submit_blocked(&form.get(), &phase.get(), password_hint.get().as_deref());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_busy() {
            return;
        }
        let snapshot = form.get_untracked();
        leptos::task::spawn_local(async move {
            let api = HttpApi::default();
            match submit_sign_up(&api, &snapshot, rules, |next| phase.set(next)).await {
                Ok(route) => nav.set(Some(route)),
                Err(err) => password_hint.set(password_hint_for(&err)),
            }
        });
    };

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h1>"Sign Up"</h1>
                <Show when=move || phase.get().error().is_some()>
                    <p class="signup-card__error" role="alert">
                        {move || phase.get().error().unwrap_or_default().to_owned()}
                    </p>
                </Show>
                <form class="signup-form" on:submit=on_submit>
                    <label class="signup-form__label">
                        "Username"
                        <input
                            class="signup-form__input"
                            type="text"
                            required=true
                            prop:value=move || form.get().username
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                if accept_username_input(&value) {
                                    form.update(|f| f.username = value);
                                } else {
                                    // Re-render the previous value over the rejected keystroke.
                                    form.update(|_| {});
                                }
                            }
                        />
                        <span class="signup-form__help">{USERNAME_HELP}</span>
                    </label>
                    <label class="signup-form__label">
                        "Password"
                        <input
                            class="signup-form__input"
                            class:signup-form__input--error=move || password_hint.get().is_some()
                            type="password"
                            required=true
                            prop:value=move || form.get().password
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.password = value);
                                password_hint.set(None);
                            }
                        />
                        <Show when=move || password_hint.get().is_some()>
                            <span class="signup-form__help signup-form__help--error">
                                {move || password_hint.get().unwrap_or_default()}
                            </span>
                        </Show>
                    </label>
                    <label class="signup-form__label">
                        "Confirm Password"
                        <input
                            class="signup-form__input"
                            class:signup-form__input--error=mismatch
                            type="password"
                            required=true
                            prop:value=move || form.get().confirm_password
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.confirm_password = value);
                            }
                        />
                        <Show when=mismatch>
                            <span class="signup-form__help signup-form__help--error">
                                "Passwords do not match."
                            </span>
                        </Show>
                    </label>
                    <label class="signup-form__label">
                        "Role"
                        <select
                            class="signup-form__select"
                            prop:value=move || form.get().role.as_str()
                            on:change=move |ev| {
                                if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                    form.update(|f| f.role = role);
                                }
                            }
                        >
                            {Role::ALL
                                .into_iter()
                                .map(|role| {
                                    view! {
                                        <option value=role.as_str() disabled=!role.selectable_at_sign_up()>
                                            {role.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <button class="btn btn--primary signup-form__submit" type="submit" disabled=blocked>
                        "Sign Up"
                    </button>
                    <Show when=move || phase.get().progress_label().is_some()>
                        <p class="signup-form__progress">{move || phase.get().progress_label().unwrap_or_default()}</p>
                    </Show>
                </form>
            </div>
        </div>
    }
}
