//! Session manager: the single owner of the local session mirror.
//!
//! The manager exposes the mirror read-only (via [`SessionManager::snapshot`])
//! plus four action methods that delegate to the identity service and push
//! toast notifications. All writes to the mirror happen in one pump task fed
//! by a change channel; actions never touch the signal directly.
//!
//! STARTUP ORDER
//! =============
//! The pump first completes an auth redirect if the URL fragment carries
//! tokens, otherwise performs a one-time reconciliation read of the persisted
//! session (covering state set before the subscription existed), then drains
//! change events until the [`SessionSubscription`] handle is dropped. Each
//! apply is a full overwrite, so delivery order beyond "last writer wins" is
//! irrelevant.

use futures::channel::mpsc;
use leptos::prelude::*;

use crate::net::identity::{self, AuthError};
use crate::net::types::SignUpProfile;
use crate::state::session::{AuthChangeEvent, SessionChange, SessionState};
use crate::state::toast::{ToastKind, ToastState};

/// Handle keeping the session change channel open.
///
/// Dropping it closes the channel and ends the pump task, so the
/// subscription cannot outlive the scope that acquired it.
pub struct SessionSubscription {
    changes: mpsc::UnboundedSender<SessionChange>,
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        self.changes.close_channel();
    }
}

/// Process-wide session registry and auth action surface.
///
/// Cloneable; all clones share the same mirror. Provided once as a context
/// by the root component.
#[derive(Clone)]
pub struct SessionManager {
    state: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    changes: mpsc::UnboundedSender<SessionChange>,
}

impl SessionManager {
    /// Create the manager and start the session pump.
    ///
    /// Returns the manager plus the subscription handle whose drop releases
    /// the change channel.
    pub fn start(toasts: RwSignal<ToastState>) -> (Self, SessionSubscription) {
        let (tx, rx) = mpsc::unbounded();
        let state = RwSignal::new(SessionState::default());

        #[cfg(feature = "hydrate")]
        spawn_session_pump(state, rx);
        #[cfg(not(feature = "hydrate"))]
        drop(rx);

        (
            Self {
                state,
                toasts,
                changes: tx.clone(),
            },
            SessionSubscription { changes: tx },
        )
    }

    /// Reactive snapshot of the current mirror state.
    pub fn snapshot(&self) -> SessionState {
        self.state.get()
    }

    /// Whether a session is currently mirrored. Reactive.
    pub fn is_logged_in(&self) -> bool {
        self.state.get().is_logged_in
    }

    /// Request a one-time email login link for an existing account.
    ///
    /// # Errors
    ///
    /// Re-signals the service failure after showing the error toast.
    pub async fn login(&self, email: &str) -> Result<(), AuthError> {
        match identity::request_login_link(email, &identity::current_origin()).await {
            Ok(()) => {
                self.notify(
                    ToastKind::Success,
                    "Login link sent to your email. Please check your inbox.",
                );
                Ok(())
            }
            Err(err) => {
                self.notify(ToastKind::Error, &err.message);
                Err(err)
            }
        }
    }

    /// Register a new account with profile metadata.
    ///
    /// # Errors
    ///
    /// Re-signals the service failure after showing the error toast.
    pub async fn sign_up(&self, profile: &SignUpProfile) -> Result<(), AuthError> {
        match identity::sign_up(profile, &identity::current_origin()).await {
            Ok(()) => {
                self.notify(
                    ToastKind::Success,
                    "Sign up successful! Please check your email for the verification link.",
                );
                Ok(())
            }
            Err(err) => {
                self.notify(ToastKind::Error, &err.message);
                Err(err)
            }
        }
    }

    /// Start the Google OAuth redirect flow.
    ///
    /// On success there is no local state change; the redirect return is
    /// picked up by the pump.
    ///
    /// # Errors
    ///
    /// Re-signals the failure after showing a generic error toast.
    pub fn login_with_google(&self) -> Result<(), AuthError> {
        match identity::begin_oauth("google", &identity::current_origin()) {
            Ok(()) => Ok(()),
            Err(err) => {
                self.notify(
                    ToastKind::Error,
                    "Failed to sign in with Google. Please try again.",
                );
                Err(err)
            }
        }
    }

    /// Terminate the current session.
    ///
    /// Failures are notified but swallowed; callers always resolve normally.
    /// This asymmetry with the other three actions is intentional.
    pub async fn logout(&self) {
        let token = self
            .state
            .get_untracked()
            .session
            .map(|s| s.access_token);
        match identity::sign_out(token.as_deref()).await {
            Ok(()) => {
                crate::util::session_store::clear();
                let _ = self
                    .changes
                    .unbounded_send(SessionChange::new(AuthChangeEvent::SignedOut, None));
                self.notify(ToastKind::Success, "You have been logged out successfully");
            }
            Err(err) => {
                leptos::logging::warn!("sign out failed: {err}");
                self.notify(ToastKind::Error, "Failed to sign out. Please try again.");
            }
        }
    }

    fn notify(&self, kind: ToastKind, message: &str) {
        self.toasts.update(|t| {
            t.push(kind, message);
        });
    }
}

/// Spawn the single-writer pump that owns all mirror updates.
#[cfg(feature = "hydrate")]
fn spawn_session_pump(
    state: RwSignal<SessionState>,
    mut rx: mpsc::UnboundedReceiver<SessionChange>,
) {
    use futures::StreamExt;

    leptos::task::spawn_local(async move {
        if let Some(change) = startup_session().await {
            leptos::logging::log!("auth state change: {:?}", change.event);
            state.update(|s| s.apply(change.session));
        }

        while let Some(change) = rx.next().await {
            leptos::logging::log!("auth state change: {:?}", change.event);
            state.update(|s| s.apply(change.session));
        }
    });
}

/// Resolve the session present at page load, if any.
///
/// A redirect fragment wins over the persisted session; the fragment's
/// tokens are completed into a full session by fetching the user record.
#[cfg(feature = "hydrate")]
async fn startup_session() -> Option<SessionChange> {
    use crate::net::types::Session;
    use crate::util::session_store;

    let hash = web_sys::window()?.location().hash().unwrap_or_default();

    if let Some(tokens) = identity::parse_redirect_fragment(&hash) {
        clear_fragment();
        match identity::fetch_user(&tokens.access_token).await {
            Ok(user) => {
                let session = Session {
                    access_token: tokens.access_token,
                    refresh_token: tokens.refresh_token,
                    token_type: tokens.token_type,
                    expires_at: tokens.expires_at,
                    user,
                };
                session_store::save(&session);
                return Some(SessionChange::new(
                    AuthChangeEvent::SignedIn,
                    Some(session),
                ));
            }
            Err(err) => {
                leptos::logging::warn!("redirect session rejected: {err}");
            }
        }
    }

    session_store::load()
        .map(|session| SessionChange::new(AuthChangeEvent::InitialSession, Some(session)))
}

/// Strip auth tokens from the address bar after consuming them.
#[cfg(feature = "hydrate")]
fn clear_fragment() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&format!("{path}{search}")),
        );
    }
}
