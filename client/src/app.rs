//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    additional_info::AdditionalInfoPage, doctor_actions::DoctorActionsPage, doctor_dashboard::DoctorDashboardPage,
    patient_dashboard::PatientDashboardPage, signup::SignUpPage,
};
use crate::state::session::SessionContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Loads the browser session once and provides it to every page, then sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionContext::default());
    provide_context(session);

    // Effects only run in the browser: SSR renders signed out, hydration loads storage.
    Effect::new(move || session.set(SessionContext::load()));

    view! {
        <Stylesheet id="leptos" href="/pkg/healthwise.css"/>
        <Title text="HealthWise"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <SignUpPage/> }/>
                <Route path=StaticSegment("signup") view=|| view! { <SignUpPage/> }/>
                <Route path=StaticSegment("additional-info") view=AdditionalInfoPage/>
                <Route path=StaticSegment("patient-dashboard") view=PatientDashboardPage/>
                <Route path=StaticSegment("doctor-dashboard") view=DoctorDashboardPage/>
                <Route path=(StaticSegment("doctor"), StaticSegment("actions")) view=DoctorActionsPage/>
            </Routes>
        </Router>
    }
}
