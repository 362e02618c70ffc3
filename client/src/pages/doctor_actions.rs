//! Doctor actions for one appointment: history, prescription, completion.
//!
//! SYSTEM CONTEXT
//! ==============
//! The appointment comes from the session context (set by the appointment
//! list). Loading, completion and prescription submission run through
//! `flow::doctor`; this page only owns the `ActionsState` signal and the
//! post-submit redirect.

#[cfg(test)]
#[path = "doctor_actions_test.rs"]
mod doctor_actions_test;

use leptos::prelude::*;

use crate::components::medicine_picker::MedicinePicker;
use crate::components::navbar::Navbar;
use crate::flow::doctor::{
    ActionsError, PRESCRIPTION_SUBMITTED, load_appointment, load_medicines, set_completion, submit_prescription,
};
use crate::net::api::HttpApi;
use crate::net::types::{BillingRecord, Role};
use crate::state::actions::ActionsState;
use crate::state::session::SessionContext;
use crate::util::nav::navigation_target;
use crate::util::route;

/// Delay between the success banner and the redirect.
pub const REDIRECT_DELAY_MS: u64 = 1_000;

/// Whether the mount-time loaders should run for this session snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum MountLoad {
    Wait,
    /// Start with the session's appointment id, which may be absent.
    Start(Option<String>),
}

pub(crate) fn mount_load(started: bool, session: &SessionContext) -> MountLoad {
    if started || !session.is_loaded() {
        return MountLoad::Wait;
    }
    MountLoad::Start(session.appointment_id.clone())
}

/// Fold a prescription result into the view state.
pub(crate) fn apply_submit_result(state: &mut ActionsState, result: &Result<BillingRecord, ActionsError>) {
    state.submitting = false;
    match result {
        Ok(_) => {
            state.notice = Some(PRESCRIPTION_SUBMITTED.to_owned());
            state.error = None;
        }
        Err(err) => state.error = Some(err.to_string()),
    }
}

#[component]
pub fn DoctorActionsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();
    let state = RwSignal::new(ActionsState::default());
    let nav = navigation_target();

    // Storage is read by an App effect after this page is built; wait for it.
    let started = RwSignal::new(false);
    Effect::new(move || {
        let MountLoad::Start(appointment_id) = mount_load(started.get(), &session.get()) else {
            return;
        };
        started.set(true);
        leptos::task::spawn_local(async move {
            let api = HttpApi::default();
            load_appointment(&api, appointment_id.as_deref(), |update| state.update(|s| s.apply(update))).await;
        });
        leptos::task::spawn_local(async move {
            let api = HttpApi::default();
            load_medicines(&api, |update| state.update(|s| s.apply(update))).await;
        });
    });

    let on_complete = move |_| {
        let Some(target) = state.try_update(|s| s.completion.begin_toggle()).flatten() else {
            return;
        };
        let appointment_id = session.get_untracked().appointment_id;
        leptos::task::spawn_local(async move {
            let api = HttpApi::default();
            let result = set_completion(&api, appointment_id.as_deref(), target).await;
            state.update(|s| {
                s.completion.finish_toggle(target, result.is_ok());
                if let Err(err) = result {
                    s.error = Some(err.to_string());
                }
            });
        });
    };

    let on_submit = move |_| {
        if state.get_untracked().submitting {
            return;
        }
        state.update(|s| s.submitting = true);
        let snapshot = state.get_untracked();
        let appointment_id = session.get_untracked().appointment_id;
        leptos::task::spawn_local(async move {
            let api = HttpApi::default();
            let result = submit_prescription(
                &api,
                appointment_id.as_deref(),
                snapshot.appointment.as_ref(),
                snapshot.selected.as_ref(),
            )
            .await;
            state.update(|s| apply_submit_result(s, &result));
            if result.is_ok() {
                session.update(SessionContext::clear_appointment);
                #[cfg(feature = "hydrate")]
                gloo_timers::future::sleep(std::time::Duration::from_millis(REDIRECT_DELAY_MS)).await;
                nav.set(Some(route::DOCTOR_MANAGE_APPOINTMENTS.to_owned()));
            }
        });
    };

    view! {
        <div class="actions-page">
            <Navbar role=Role::Doctor/>
            <main class="actions-page__body">
                <Show when=move || state.get().error.is_some()>
                    <p class="alert alert--error" role="alert">
                        {move || state.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <h2>"Patient Actions"</h2>
                <div class="actions-page__grid">
                    <section class="panel">
                        <h3>"Patient History"</h3>
                        <p class="panel__text">{move || state.get().history_text().to_owned()}</p>
                    </section>
                    <section class="panel">
                        <h3>"Prescription"</h3>
                        <MedicinePicker state=state/>
                    </section>
                    <section class="panel">
                        <h3>"Complete Appointment"</h3>
                        <button
                            class=move || state.get().completion.tone().class()
                            disabled=move || state.get().completion.pending
                            on:click=on_complete
                        >
                            {move || state.get().completion.label()}
                        </button>
                    </section>
                </div>
                <div class="actions-page__submit">
                    <button
                        class="btn btn--secondary"
                        disabled=move || state.get().submitting
                        on:click=on_submit
                    >
                        "Submit Changes"
                    </button>
                </div>
                <Show when=move || state.get().notice.is_some()>
                    <div class="snackbar" role="status">
                        {move || state.get().notice.unwrap_or_default()}
                    </div>
                </Show>
            </main>
        </div>
    }
}
