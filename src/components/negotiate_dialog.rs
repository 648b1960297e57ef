//! Negotiate dialog shell.
//!
//! The negotiation protocol itself is an external concern; this dialog
//! collects a proposed price for the selected listing. Receives the open
//! flag, its setter, and the listing.

use leptos::prelude::*;

use crate::components::listings_grid::currency_symbol;
use crate::net::types::Listing;

/// Modal dialog for proposing alternate terms on the selected listing.
#[component]
pub fn NegotiateDialog(
    open: Signal<bool>,
    on_open_change: Callback<bool>,
    listing: Listing,
) -> impl IntoView {
    let title = listing.title.clone();
    let symbol = currency_symbol(&listing.currency).to_owned();
    let asking = listing.price;

    let proposed = RwSignal::new(String::new());

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_open_change.run(false)>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h2>"Negotiate Price"</h2>
                    <p class="dialog__subtitle">
                        {title.clone()} " \u{2014} asking " {symbol.clone()} {asking}
                    </p>
                    <label class="dialog__label">
                        "Your offer"
                        <input
                            class="dialog__input"
                            type="number"
                            min="0"
                            prop:value=move || proposed.get()
                            on:input=move |ev| proposed.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_open_change.run(false)>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" on:click=move |_| on_open_change.run(false)>
                            "Send Offer"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
