//! Doctor landing page: greeting plus shortcuts into appointment tooling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The greeting name comes from the doctor profile endpoint keyed by the
//! session username; until it resolves the username itself is shown.

#[cfg(test)]
#[path = "doctor_dashboard_test.rs"]
mod doctor_dashboard_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::flow::doctor::{doctor_display_name, greeting};
use crate::net::api::HttpApi;
use crate::net::types::Role;
use crate::state::session::SessionContext;
use crate::util::nav::navigation_target;
use crate::util::route;

/// Dashboard buttons as `(label, route)`.
pub const DASHBOARD_SHORTCUTS: [(&str, &str); 3] = [
    ("View Appointments", route::DOCTOR_VIEW_APPOINTMENTS),
    ("Manage Appointments", route::DOCTOR_MANAGE_APPOINTMENTS),
    ("Set Timings", route::DOCTOR_SET_TIMINGS),
];

/// Name to greet: the resolved profile name, else the session username.
pub(crate) fn greeting_name(resolved: Option<&str>, session_username: &str) -> String {
    resolved
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(session_username)
        .to_owned()
}

/// Username to resolve a profile for, once the session is loaded and only once.
pub(crate) fn profile_lookup(requested: bool, session: &SessionContext) -> Option<String> {
    if requested || !session.is_loaded() {
        return None;
    }
    session.username.clone()
}

#[component]
pub fn DoctorDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();
    let resolved = RwSignal::new(None::<String>);
    let nav = navigation_target();

    // The session arrives from an App effect after mount; look up once it does.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        let Some(username) = profile_lookup(requested.get(), &session.get()) else {
            return;
        };
        requested.set(true);
        leptos::task::spawn_local(async move {
            let api = HttpApi::default();
            let name = doctor_display_name(&api, &username).await;
            resolved.set(Some(name));
        });
    });

    let heading = move || greeting(&greeting_name(resolved.get().as_deref(), session.get().display_name()));

    view! {
        <div class="dashboard-page">
            <Navbar role=Role::Doctor/>
            <main class="dashboard-page__body">
                <div class="dashboard-card">
                    <h2 class="dashboard-card__greeting">{heading}</h2>
                    <div class="dashboard-card__grid">
                        {DASHBOARD_SHORTCUTS
                            .into_iter()
                            .map(|(label, path)| {
                                view! {
                                    <button
                                        class="btn btn--primary dashboard-card__action"
                                        on:click=move |_| nav.set(Some(path.to_owned()))
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </main>
        </div>
    }
}
