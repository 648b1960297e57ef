//! Managed backend endpoint configuration.
//!
//! The project URL and publishable API key are baked in at compile time via
//! `OFFERDECK_BACKEND_URL` / `OFFERDECK_ANON_KEY`, falling back to the local
//! development stack's defaults. The key is a publishable (anon) key, not a
//! secret.

/// Base URL of the managed backend, without a trailing slash.
pub fn base_url() -> &'static str {
    match option_env!("OFFERDECK_BACKEND_URL") {
        Some(url) => url,
        None => "http://localhost:54321",
    }
}

/// Publishable API key sent with every request.
pub fn anon_key() -> &'static str {
    match option_env!("OFFERDECK_ANON_KEY") {
        Some(key) => key,
        None => "offerdeck-dev-anon-key",
    }
}
