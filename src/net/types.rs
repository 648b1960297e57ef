//! Wire types shared between the network layer and application state.

use serde::{Deserialize, Serialize};

/// A purchasable listing row as served by the backend's REST table.
///
/// Listings are externally sourced and read-only from this crate's
/// perspective; no validation happens here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub issuer: String,
    pub price: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    /// Wire name is `new`; renamed to avoid the keyword-ish field name.
    #[serde(rename = "new", default)]
    pub is_new: bool,
    #[serde(default)]
    pub category: String,
}

/// The identity service's view of an account. Opaque beyond display needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

/// An authenticated session as issued by the identity service.
///
/// Created and refreshed externally; this crate only mirrors it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub token_type: String,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

/// Profile fields collected at sign-up and attached as account metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignUpProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub city: String,
}
