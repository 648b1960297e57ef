//! Marketplace page: fetches listings and renders the grid.

use leptos::prelude::*;

use crate::components::listings_grid::ListingsGrid;
use crate::components::navbar::Navbar;

/// Marketplace landing page.
///
/// Owns the per-listing image load flags; the grid reports loads back by
/// index. Listings render in the order the backend returns them.
#[component]
pub fn MarketplacePage() -> impl IntoView {
    let listings = LocalResource::new(|| crate::net::listings::fetch_listings());

    let loaded = RwSignal::new(Vec::<bool>::new());
    let on_image_load = Callback::new(move |index: usize| {
        loaded.update(|flags| {
            if let Some(flag) = flags.get_mut(index) {
                *flag = true;
            }
        });
    });

    // Size the load flags once the listings arrive.
    Effect::new(move || {
        if let Some(list) = listings.get() {
            loaded.update(|flags| flags.resize(list.len(), false));
        }
    });

    view! {
        <div class="marketplace-page">
            <Navbar/>
            <main class="marketplace-page__content">
                <h1>"Offers"</h1>
                <Suspense fallback=move || view! { <p>"Loading offers..."</p> }>
                    {move || {
                        listings
                            .get()
                            .map(|list| {
                                view! {
                                    <ListingsGrid
                                        listings=list
                                        loaded=loaded.into()
                                        on_image_load=on_image_load
                                    />
                                }
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
