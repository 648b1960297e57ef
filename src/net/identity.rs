//! REST client for the external identity service's auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning errors since authentication only happens in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into a single opaque [`AuthError`] carrying the
//! service's human-readable message (or a generic fallback). Causes are not
//! classified here; callers only relay the message to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::Serialize;

use crate::net::types::{SignUpProfile, User};

/// Opaque error from the identity service, message passthrough only.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One-time-link request body. `create_user` stays `false` so a login
/// attempt never auto-creates an account.
#[derive(Debug, Serialize)]
pub(crate) struct OtpPayload {
    pub email: String,
    pub create_user: bool,
}

impl OtpPayload {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_owned(),
            create_user: false,
        }
    }
}

/// Sign-up request body with profile fields as account metadata.
#[derive(Debug, Serialize)]
pub(crate) struct SignUpPayload {
    pub email: String,
    pub password: String,
    pub data: SignUpMetadata,
}

#[derive(Debug, Serialize)]
pub(crate) struct SignUpMetadata {
    pub name: String,
    pub phone: String,
    pub country: String,
    pub city: String,
}

pub(crate) fn signup_payload(profile: &SignUpProfile, password: &str) -> SignUpPayload {
    SignUpPayload {
        email: profile.email.clone(),
        password: password.to_owned(),
        data: SignUpMetadata {
            name: profile.name.clone(),
            phone: profile.phone.clone(),
            country: profile.country.clone(),
            city: profile.city.clone(),
        },
    }
}

/// Random placeholder credential attached at sign-up. Never used to log in;
/// authentication afterwards is one-time-link only.
pub(crate) fn placeholder_password() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Extract the service's message from an error response body.
///
/// The service variously uses `msg`, `error_description`, and `message`;
/// they are tried in that order.
pub(crate) fn error_body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["msg", "error_description", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(|m| m.as_str()))
        .map(ToOwned::to_owned)
}

pub(crate) fn service_error(status: u16, body: &str) -> AuthError {
    AuthError::new(
        error_body_message(body)
            .unwrap_or_else(|| format!("identity service request failed ({status})")),
    )
}

/// Tokens handed back in the URL fragment after a one-time-link or OAuth
/// redirect (`#access_token=...&refresh_token=...`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RedirectTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_type: String,
    pub expires_at: Option<i64>,
}

/// Parse a redirect fragment into tokens. Returns `None` when the fragment
/// carries no `access_token` (i.e. it is not an auth redirect).
pub(crate) fn parse_redirect_fragment(hash: &str) -> Option<RedirectTokens> {
    let hash = hash.strip_prefix('#').unwrap_or(hash);

    let mut access_token = None;
    let mut refresh_token = None;
    let mut token_type = None;
    let mut expires_at = None;

    for pair in hash.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "access_token" => access_token = Some(value.to_owned()),
            "refresh_token" => refresh_token = Some(value.to_owned()),
            "token_type" => token_type = Some(value.to_owned()),
            "expires_at" => expires_at = value.parse::<i64>().ok(),
            _ => {}
        }
    }

    Some(RedirectTokens {
        access_token: access_token?,
        refresh_token,
        token_type: token_type.unwrap_or_else(|| "bearer".to_owned()),
        expires_at,
    })
}

/// The application's current origin, captured at call time so redirect
/// flows return the user to wherever they currently are.
pub(crate) fn current_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Request a one-time email login link for an existing account.
///
/// # Errors
///
/// Returns an [`AuthError`] with the service's message if the request is
/// rejected or cannot be sent.
pub async fn request_login_link(email: &str, redirect_to: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "{}/auth/v1/otp?redirect_to={}",
            super::backend::base_url(),
            String::from(js_sys::encode_uri_component(redirect_to)),
        );
        let resp = gloo_net::http::Request::post(&url)
            .header("apikey", super::backend::anon_key())
            .json(&OtpPayload::new(email))
            .map_err(|e| AuthError::new(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::new(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(service_error(resp.status(), &body))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, redirect_to);
        Err(AuthError::new("not available on server"))
    }
}

/// Register a new account with profile metadata and a throwaway password.
///
/// # Errors
///
/// Returns an [`AuthError`] with the service's message on rejection.
pub async fn sign_up(profile: &SignUpProfile, redirect_to: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "{}/auth/v1/signup?redirect_to={}",
            super::backend::base_url(),
            String::from(js_sys::encode_uri_component(redirect_to)),
        );
        let payload = signup_payload(profile, &placeholder_password());
        let resp = gloo_net::http::Request::post(&url)
            .header("apikey", super::backend::anon_key())
            .json(&payload)
            .map_err(|e| AuthError::new(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::new(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(service_error(resp.status(), &body))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (profile, redirect_to);
        Err(AuthError::new("not available on server"))
    }
}

/// Navigate the browser to the federated OAuth authorize endpoint.
///
/// On success the page unloads; the session mirror catches up from the
/// redirect fragment when the user lands back on the app.
///
/// # Errors
///
/// Returns an [`AuthError`] if the navigation cannot be started.
pub fn begin_oauth(provider: &str, redirect_to: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "{}/auth/v1/authorize?provider={provider}&redirect_to={}",
            super::backend::base_url(),
            String::from(js_sys::encode_uri_component(redirect_to)),
        );
        let window = web_sys::window().ok_or_else(|| AuthError::new("no browser window"))?;
        window
            .location()
            .set_href(&url)
            .map_err(|_| AuthError::new("could not start the sign-in redirect"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (provider, redirect_to);
        Err(AuthError::new("not available on server"))
    }
}

/// Terminate the current session on the service side.
///
/// # Errors
///
/// Returns an [`AuthError`] with the service's message on rejection.
pub async fn sign_out(access_token: Option<&str>) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/auth/v1/logout", super::backend::base_url());
        let mut req = gloo_net::http::Request::post(&url)
            .header("apikey", super::backend::anon_key());
        if let Some(token) = access_token {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = req
            .send()
            .await
            .map_err(|e| AuthError::new(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(service_error(resp.status(), &body))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        Err(AuthError::new("not available on server"))
    }
}

/// Fetch the account behind an access token, used to complete a redirect
/// session whose fragment only carries tokens.
///
/// # Errors
///
/// Returns an [`AuthError`] if the token is rejected or the response does
/// not decode.
pub async fn fetch_user(access_token: &str) -> Result<User, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/auth/v1/user", super::backend::base_url());
        let resp = gloo_net::http::Request::get(&url)
            .header("apikey", super::backend::anon_key())
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| AuthError::new(e.to_string()))?;
        if resp.ok() {
            resp.json::<User>()
                .await
                .map_err(|e| AuthError::new(e.to_string()))
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(service_error(resp.status(), &body))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        Err(AuthError::new("not available on server"))
    }
}
