//! Top navigation bar with brand and session controls.

use leptos::prelude::*;

use crate::net::session::SessionManager;

/// Navbar showing the signed-in email and a logout button, or login and
/// sign-up links when no session is present.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionManager>();

    let email = {
        let session = session.clone();
        move || {
            session
                .snapshot()
                .user
                .and_then(|u| u.email)
                .unwrap_or_default()
        }
    };
    let logged_in = {
        let session = session.clone();
        move || session.is_logged_in()
    };

    let on_logout = Callback::new(move |(): ()| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                session.logout().await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &session;
        }
    });

    view! {
        <header class="navbar">
            <a href="/" class="navbar__brand">
                "OfferDeck"
            </a>
            <span class="navbar__spacer"></span>
            <Show
                when=logged_in
                fallback=|| {
                    view! {
                        <a href="/login" class="btn btn--outline navbar__login">
                            "Log In"
                        </a>
                        <a href="/signup" class="btn btn--primary navbar__signup">
                            "Sign Up"
                        </a>
                    }
                }
            >
                <span class="navbar__user">{email.clone()}</span>
                <button class="btn navbar__logout" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
