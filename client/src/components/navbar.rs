//! Role-specific top bar with home button, username and dropdown menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the shared `SessionContext` for the display name and clears it on
//! logout. Each role gets its own home route and menu shortcuts.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::SessionContext;
use crate::util::nav::navigation_target;
use crate::util::route;

pub const APP_TITLE: &str = "HealthWise Hospital Management";

/// What a menu entry does when clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Navigate(&'static str),
    Close,
    Logout,
}

/// One dropdown entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub action: MenuAction,
}

const PATIENT_MENU: &[MenuEntry] = &[
    MenuEntry { label: "Update Profile Details", action: MenuAction::Close },
    MenuEntry { label: "View History", action: MenuAction::Close },
    MenuEntry { label: "Logout", action: MenuAction::Logout },
];

const DOCTOR_MENU: &[MenuEntry] = &[
    MenuEntry { label: "View Appointments", action: MenuAction::Navigate(route::DOCTOR_VIEW_APPOINTMENTS) },
    MenuEntry { label: "Manage Appointments", action: MenuAction::Navigate(route::DOCTOR_MANAGE_APPOINTMENTS) },
    MenuEntry { label: "Set Timings", action: MenuAction::Navigate(route::DOCTOR_SET_TIMINGS) },
    MenuEntry { label: "Logout", action: MenuAction::Logout },
];

const ADMIN_MENU: &[MenuEntry] = &[MenuEntry { label: "Logout", action: MenuAction::Logout }];

/// Dropdown entries for `role`.
pub fn menu_for(role: Role) -> &'static [MenuEntry] {
    match role {
        Role::Patient => PATIENT_MENU,
        Role::Doctor => DOCTOR_MENU,
        Role::Admin => ADMIN_MENU,
    }
}

/// Route the Home button opens for `role`.
pub fn home_route(role: Role) -> &'static str {
    match role {
        Role::Patient => route::PATIENT_DASHBOARD,
        Role::Doctor => route::DOCTOR_DASHBOARD,
        Role::Admin => "/",
    }
}

/// Top navigation bar for `role`.
#[component]
pub fn Navbar(role: Role) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();
    let nav = navigation_target();
    let menu_open = RwSignal::new(false);

    let on_home = move |_| nav.set(Some(home_route(role).to_owned()));

    let run_action = Callback::new(move |action: MenuAction| {
        menu_open.set(false);
        match action {
            MenuAction::Navigate(path) => nav.set(Some(path.to_owned())),
            MenuAction::Close => {}
            MenuAction::Logout => {
                leptos::logging::log!("logout: {}", session.get_untracked().display_name());
                session.update(SessionContext::sign_out);
                nav.set(Some(route::LOGIN.to_owned()));
            }
        }
    });

    view! {
        <header class="navbar">
            <span class="navbar__logo" aria-hidden="true">"✚"</span>
            <span class="navbar__title">{APP_TITLE}</span>
            <span class="navbar__spacer"></span>
            <button class="btn navbar__home" on:click=on_home>
                "Home"
            </button>
            <div class="navbar__self">
                <span class="navbar__name">{move || session.get().display_name().to_owned()}</span>
                <span class="navbar__avatar" aria-hidden="true"></span>
                <button
                    class="btn navbar__menu-toggle"
                    aria-haspopup="true"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "▾"
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="navbar__backdrop" on:click=move |_| menu_open.set(false)></div>
                <ul class="navbar__menu" role="menu">
                    {menu_for(role)
                        .iter()
                        .map(|entry| {
                            let action = entry.action;
                            view! {
                                <li
                                    class="navbar__menu-item"
                                    role="menuitem"
                                    on:click=move |_| run_action.run(action)
                                >
                                    {entry.label}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </header>
    }
}
