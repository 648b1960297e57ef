#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::net::types::Listing;

/// Rejection raised when a guarded intent cannot proceed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PurchaseBlocked {
    #[error("Please log in to purchase offers")]
    NotLoggedIn,
}

/// Which listing is targeted for a purchase or negotiate flow, and whether
/// each flow's dialog is open.
///
/// There is a single shared selection slot: selecting a listing for either
/// flow replaces the prior selection for both. Opening one dialog never
/// closes the other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    pub selected: Option<Listing>,
    pub payment_open: bool,
    pub negotiate_open: bool,
}

impl SelectionState {
    /// Purchase intent, gated on authentication.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseBlocked::NotLoggedIn`] without touching any state
    /// when the user is not authenticated.
    pub fn request_purchase(
        &mut self,
        listing: Listing,
        logged_in: bool,
    ) -> Result<(), PurchaseBlocked> {
        if !logged_in {
            return Err(PurchaseBlocked::NotLoggedIn);
        }
        self.selected = Some(listing);
        self.payment_open = true;
        Ok(())
    }

    /// Negotiate intent. Deliberately unguarded to match observed product
    /// behavior; see DESIGN.md before "fixing" this.
    pub fn request_negotiate(&mut self, listing: Listing) {
        self.selected = Some(listing);
        self.negotiate_open = true;
    }
}
