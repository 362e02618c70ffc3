//! Patient landing page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::Role;
use crate::state::session::SessionContext;

#[component]
pub fn PatientDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();

    view! {
        <div class="dashboard-page">
            <Navbar role=Role::Patient/>
            <main class="dashboard-page__body">
                <h2>{move || format!("Welcome, {}", session.get().display_name())}</h2>
            </main>
        </div>
    }
}
