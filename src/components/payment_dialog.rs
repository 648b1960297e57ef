//! Purchase dialog shell.
//!
//! Payment processing itself is handled by the external payment partner;
//! this dialog only presents the order summary for the selected listing
//! and hands off. Receives the open flag, its setter, and the listing.

use leptos::prelude::*;

use crate::components::listings_grid::currency_symbol;
use crate::net::types::Listing;

/// Modal dialog for completing a purchase of the selected listing.
#[component]
pub fn PaymentDialog(
    open: Signal<bool>,
    on_open_change: Callback<bool>,
    listing: Listing,
) -> impl IntoView {
    let title = listing.title.clone();
    let issuer = listing.issuer.clone();
    let price = format!(
        "{}{}",
        currency_symbol(&listing.currency),
        listing.price
    );

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_open_change.run(false)>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h2>"Complete Purchase"</h2>
                    <div class="dialog__summary">
                        <div class="dialog__summary-row">
                            <span>"Offer"</span>
                            <span>{title.clone()}</span>
                        </div>
                        <div class="dialog__summary-row">
                            <span>"Issuer"</span>
                            <span>{issuer.clone()}</span>
                        </div>
                        <div class="dialog__summary-row dialog__summary-row--total">
                            <span>"Total"</span>
                            <span>{price.clone()}</span>
                        </div>
                    </div>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_open_change.run(false)>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" on:click=move |_| on_open_change.run(false)>
                            "Proceed to Payment"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
