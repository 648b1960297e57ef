use super::*;

fn listing(id: i64) -> Listing {
    Listing {
        id,
        title: format!("Offer {id}"),
        issuer: "Acme Bank".to_owned(),
        price: 499.0,
        currency: "INR".to_owned(),
        benefits: vec!["Lounge access".to_owned()],
        image: "/img/offer.png".to_owned(),
        featured: false,
        is_new: false,
        category: "membership".to_owned(),
    }
}

// =============================================================
// Purchase guard
// =============================================================

#[test]
fn purchase_while_logged_out_is_blocked_and_changes_nothing() {
    let mut state = SelectionState::default();
    let result = state.request_purchase(listing(1), false);

    assert_eq!(result, Err(PurchaseBlocked::NotLoggedIn));
    assert!(state.selected.is_none());
    assert!(!state.payment_open);
    assert!(!state.negotiate_open);
}

#[test]
fn purchase_while_logged_in_selects_and_opens_payment() {
    let mut state = SelectionState::default();
    state.request_purchase(listing(1), true).expect("allowed");

    assert_eq!(state.selected.as_ref().map(|l| l.id), Some(1));
    assert!(state.payment_open);
    assert!(!state.negotiate_open);
}

// =============================================================
// Negotiate is unguarded (pins current, inconsistent behavior)
// =============================================================

#[test]
fn negotiate_while_logged_out_still_opens() {
    let mut state = SelectionState::default();
    state.request_negotiate(listing(2));

    assert_eq!(state.selected.as_ref().map(|l| l.id), Some(2));
    assert!(state.negotiate_open);
}

// =============================================================
// Shared selection slot
// =============================================================

#[test]
fn negotiate_replaces_purchase_selection_without_closing_payment() {
    let mut state = SelectionState::default();
    state.request_purchase(listing(1), true).expect("allowed");
    state.request_negotiate(listing(2));

    // One slot for both flows; payment stays open on the new selection.
    assert_eq!(state.selected.as_ref().map(|l| l.id), Some(2));
    assert!(state.payment_open);
    assert!(state.negotiate_open);
}

#[test]
fn purchase_replaces_negotiate_selection() {
    let mut state = SelectionState::default();
    state.request_negotiate(listing(2));
    state.request_purchase(listing(3), true).expect("allowed");

    assert_eq!(state.selected.as_ref().map(|l| l.id), Some(3));
}
