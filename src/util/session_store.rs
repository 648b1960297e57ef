//! Session persistence in `localStorage`.
//!
//! The last issued session is kept as JSON under a single key so a page
//! reload can reconcile the mirror before any new auth event arrives.
//! Requires a browser environment; on the server these are no-ops.

use crate::net::types::Session;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "offerdeck_session";

/// Read the persisted session, if any. Corrupt entries are discarded.
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(_) => {
                let _ = storage.remove_item(STORAGE_KEY);
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a session, replacing any previous one.
pub fn save(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(raw) = serde_json::to_string(session) {
                    let _ = storage.set_item(STORAGE_KEY, &raw);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Drop the persisted session.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
