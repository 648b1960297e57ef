//! Listing grid with purchase and negotiate action dispatch.
//!
//! Renders listings in caller order (no sorting or filtering here) or an
//! empty-state message, tracks caller-supplied image load flags for a
//! progressive reveal, and routes card actions into the payment/negotiate
//! dialogs through a single shared selection slot.

#[cfg(test)]
#[path = "listings_grid_test.rs"]
mod listings_grid_test;

use leptos::prelude::*;

use crate::components::negotiate_dialog::NegotiateDialog;
use crate::components::payment_dialog::PaymentDialog;
use crate::net::session::SessionManager;
use crate::net::types::Listing;
use crate::state::selection::SelectionState;
use crate::state::toast::{ToastKind, ToastState};

/// Currency symbol for a currency code, falling back to the raw code for
/// anything unrecognized. Presentation nicety only.
pub fn currency_symbol(currency: &str) -> &str {
    match currency {
        "INR" => "\u{20b9}",
        "USD" => "$",
        "EUR" => "\u{20ac}",
        "GBP" => "\u{a3}",
        "JPY" | "CNY" => "\u{a5}",
        "AUD" => "A$",
        "CAD" => "C$",
        "CHF" => "CHF",
        "SGD" => "S$",
        "AED" => "\u{62f}.\u{625}",
        other => other,
    }
}

/// Price string for a card, defaulting blank currency codes to INR.
pub(crate) fn price_label(listing: &Listing) -> String {
    let code = if listing.currency.is_empty() {
        "INR"
    } else {
        listing.currency.as_str()
    };
    format!("{}{}", currency_symbol(code), listing.price)
}

/// Grid of listing cards with Buy Now / Negotiate actions.
///
/// `loaded` holds one flag per listing (caller-owned); until a flag is set
/// the card shows a spinner in place of its image, and `on_image_load`
/// fires with the listing's index when the image finishes loading.
#[component]
pub fn ListingsGrid(
    listings: Vec<Listing>,
    loaded: Signal<Vec<bool>>,
    on_image_load: Callback<usize>,
) -> impl IntoView {
    let session = expect_context::<SessionManager>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    // One selection slot shared by both flows; dropped with the view.
    let selection = RwSignal::new(SelectionState::default());

    let on_purchase = Callback::new(move |listing: Listing| {
        let logged_in = session.is_logged_in();
        let mut blocked = false;
        selection.update(|s| {
            blocked = s.request_purchase(listing, logged_in).is_err();
        });
        if blocked {
            toasts.update(|t| {
                t.push(ToastKind::Error, "Please log in to purchase offers");
            });
        }
    });

    let on_negotiate = Callback::new(move |listing: Listing| {
        selection.update(|s| s.request_negotiate(listing));
    });

    let grid = if listings.is_empty() {
        view! {
            <div class="listings-empty">
                <p class="listings-empty__title">"No listings available yet"</p>
                <p class="listings-empty__hint">"Be the first to post an offer!"</p>
            </div>
        }
        .into_any()
    } else {
        let cards = listings
            .into_iter()
            .enumerate()
            .map(|(index, listing)| {
                view! {
                    <ListingCard
                        listing=listing
                        index=index
                        loaded=loaded
                        on_image_load=on_image_load
                        on_purchase=on_purchase
                        on_negotiate=on_negotiate
                    />
                }
            })
            .collect::<Vec<_>>();
        view! { <div class="listings-grid">{cards}</div> }.into_any()
    };

    let payment_open = Signal::derive(move || selection.get().payment_open);
    let negotiate_open = Signal::derive(move || selection.get().negotiate_open);
    let set_payment_open =
        Callback::new(move |open: bool| selection.update(|s| s.payment_open = open));
    let set_negotiate_open =
        Callback::new(move |open: bool| selection.update(|s| s.negotiate_open = open));

    view! {
        {grid}
        {move || {
            selection
                .get()
                .selected
                .map(|listing| {
                    view! {
                        <PaymentDialog
                            open=payment_open
                            on_open_change=set_payment_open
                            listing=listing.clone()
                        />
                        <NegotiateDialog
                            open=negotiate_open
                            on_open_change=set_negotiate_open
                            listing=listing
                        />
                    }
                })
        }}
    }
}

/// One listing card: image with progressive reveal, badges, benefits,
/// price, and the two action buttons.
#[component]
fn ListingCard(
    listing: Listing,
    index: usize,
    loaded: Signal<Vec<bool>>,
    on_image_load: Callback<usize>,
    on_purchase: Callback<Listing>,
    on_negotiate: Callback<Listing>,
) -> impl IntoView {
    let purchase_listing = listing.clone();
    let negotiate_listing = listing.clone();

    let is_loaded = move || loaded.get().get(index).copied().unwrap_or(false);
    let image_class = move || {
        if is_loaded() {
            "listing-card__image listing-card__image--loaded"
        } else {
            "listing-card__image"
        }
    };

    let price = price_label(&listing);
    let benefits = listing
        .benefits
        .iter()
        .map(|benefit| {
            view! {
                <div class="listing-card__benefit">
                    <span class="listing-card__check">"\u{2713}"</span>
                    <span>{benefit.clone()}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="listing-card">
            <div class="listing-card__media">
                <img
                    src=listing.image.clone()
                    alt=listing.title.clone()
                    class=image_class
                    on:load=move |_| on_image_load.run(index)
                />
                <Show when=move || !is_loaded()>
                    <div class="listing-card__spinner-overlay">
                        <div class="listing-card__spinner"></div>
                    </div>
                </Show>
                <div class="listing-card__badges">
                    <Show when={
                        let featured = listing.featured;
                        move || featured
                    }>
                        <span class="badge badge--featured">"Featured"</span>
                    </Show>
                    <Show when={
                        let is_new = listing.is_new;
                        move || is_new
                    }>
                        <span class="badge badge--new">"New"</span>
                    </Show>
                </div>
            </div>

            <div class="listing-card__body">
                <div class="listing-card__issuer">{listing.issuer.clone()}</div>
                <h3 class="listing-card__title">{listing.title.clone()}</h3>
                <div class="listing-card__benefits">{benefits}</div>
            </div>

            <div class="listing-card__footer">
                <span class="listing-card__price">{price}</span>
                <div class="listing-card__actions">
                    <button
                        class="btn btn--outline"
                        on:click=move |_| on_negotiate.run(negotiate_listing.clone())
                    >
                        "Negotiate"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| on_purchase.run(purchase_listing.clone())
                    >
                        "Buy Now"
                    </button>
                </div>
            </div>
        </div>
    }
}
