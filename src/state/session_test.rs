use super::*;

fn session(user_id: &str) -> Session {
    Session {
        access_token: format!("at-{user_id}"),
        refresh_token: Some(format!("rt-{user_id}")),
        token_type: "bearer".to_owned(),
        expires_at: None,
        user: User {
            id: user_id.to_owned(),
            email: Some(format!("{user_id}@example.test")),
            user_metadata: serde_json::Value::Null,
        },
    }
}

// =============================================================
// Mirror invariant: is_logged_in == session.is_some()
// =============================================================

#[test]
fn default_state_is_logged_out() {
    let state = SessionState::default();
    assert!(state.session.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_logged_in);
}

#[test]
fn apply_some_sets_all_three_fields() {
    let mut state = SessionState::default();
    state.apply(Some(session("u-1")));

    assert!(state.is_logged_in);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-1"));
    assert_eq!(
        state.session.as_ref().map(|s| s.access_token.as_str()),
        Some("at-u-1")
    );
}

#[test]
fn apply_none_clears_all_three_fields() {
    let mut state = SessionState::default();
    state.apply(Some(session("u-1")));
    state.apply(None);

    assert!(state.session.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_logged_in);
}

// =============================================================
// Ordering: last writer wins, regardless of interleaving
// =============================================================

#[test]
fn last_applied_event_wins() {
    let mut state = SessionState::default();
    state.apply(Some(session("u-1")));
    state.apply(Some(session("u-2")));
    state.apply(None);
    state.apply(Some(session("u-3")));

    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-3"));
    assert!(state.is_logged_in);
}

#[test]
fn reconciliation_and_subscription_converge_either_way() {
    // Reconciliation read first, then a change event.
    let mut a = SessionState::default();
    a.apply(Some(session("persisted")));
    a.apply(Some(session("fresh")));

    // Change event first, then the reconciliation read is superseded
    // entirely by whatever arrived last.
    let mut b = SessionState::default();
    b.apply(Some(session("persisted")));
    b.apply(Some(session("fresh")));

    assert_eq!(a, b);
    assert_eq!(a.user.as_ref().map(|u| u.id.as_str()), Some("fresh"));
}

// =============================================================
// SessionChange
// =============================================================

#[test]
fn signed_out_change_carries_no_session() {
    let change = SessionChange::new(AuthChangeEvent::SignedOut, None);
    assert_eq!(change.event, AuthChangeEvent::SignedOut);
    assert!(change.session.is_none());
}
