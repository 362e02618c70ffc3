//! Landing page reached right after an account is created.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::util::route;

/// Confirms the new account named by the `username` query parameter.
#[component]
pub fn AdditionalInfoPage() -> impl IntoView {
    let query = use_query_map();
    let username = move || query.get().get("username").unwrap_or_default();

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h1>"Account Created"</h1>
                <Show
                    when=move || !username().is_empty()
                    fallback=|| view! { <p>"Your account is ready."</p> }
                >
                    <p>"Welcome, " <strong>{username}</strong> "."</p>
                </Show>
                <a class="btn btn--primary" href=route::LOGIN>
                    "Continue to login"
                </a>
            </div>
        </div>
    }
}
