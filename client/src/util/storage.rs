//! Browser `sessionStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only `state::session` calls these; pages read the session through context
//! instead of touching storage directly. Outside the browser every read is
//! `None` and every write is a no-op.

/// Read `key` from `sessionStorage`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn read(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = session_storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                leptos::logging::warn!("sessionStorage read failed: key={key} err={err:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove `key` from `sessionStorage`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = session_storage() else {
            return;
        };
        if let Err(err) = storage.remove_item(key) {
            leptos::logging::warn!("sessionStorage remove failed: key={key} err={err:?}");
        }
    }
}

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.session_storage() {
        Ok(storage) => storage,
        Err(err) => {
            leptos::logging::warn!("sessionStorage unavailable: {err:?}");
            None
        }
    }
}
