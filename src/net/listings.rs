//! Listing fetch against the managed backend's REST table endpoint.
//!
//! Failures degrade to an empty list with a console warning so a backend
//! hiccup renders the empty state instead of crashing hydration.

#![allow(clippy::unused_async)]

use crate::net::types::Listing;

/// Fetch all listings in id order. Returns an empty list on any failure.
pub async fn fetch_listings() -> Vec<Listing> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "{}/rest/v1/listings?select=*&order=id",
            super::backend::base_url()
        );
        let resp = match gloo_net::http::Request::get(&url)
            .header("apikey", super::backend::anon_key())
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("listings fetch failed: {e}");
                return Vec::new();
            }
        };
        if !resp.ok() {
            leptos::logging::warn!("listings fetch failed: status {}", resp.status());
            return Vec::new();
        }
        resp.json::<Vec<Listing>>().await.unwrap_or_else(|e| {
            leptos::logging::warn!("listings decode failed: {e}");
            Vec::new()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}
