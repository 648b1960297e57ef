#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Session, User};

/// Local mirror of the identity service's session state.
///
/// Only the session pump writes this; everyone else reads snapshots through
/// the session manager. Every write is a full overwrite of all three fields,
/// so out-of-order delivery converges to the last applied event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub user: Option<User>,
    pub is_logged_in: bool,
}

impl SessionState {
    /// Overwrite the mirror with the session from the latest event.
    pub fn apply(&mut self, session: Option<Session>) {
        self.user = session.as_ref().map(|s| s.user.clone());
        self.is_logged_in = session.is_some();
        self.session = session;
    }
}

/// Kind of session change observed, for logging only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthChangeEvent {
    InitialSession,
    SignedIn,
    SignedOut,
}

/// A session change event carried on the single-writer update channel.
#[derive(Clone, Debug)]
pub struct SessionChange {
    pub event: AuthChangeEvent,
    pub session: Option<Session>,
}

impl SessionChange {
    pub fn new(event: AuthChangeEvent, session: Option<Session>) -> Self {
        Self { event, session }
    }
}
