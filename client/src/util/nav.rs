//! Signal-driven navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Event handlers and async tasks only write a target path into a signal; a
//! single effect per component performs the router navigation. This keeps the
//! router's navigate closure out of view closures and spawned tasks.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Create a navigation target signal and the effect that follows it.
pub fn navigation_target() -> RwSignal<Option<String>> {
    let target = RwSignal::new(None::<String>);
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
    target
}
