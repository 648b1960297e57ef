//! Login page: email one-time-link request plus Google OAuth.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::session::SessionManager;

/// Login page with a passwordless email form and a Google button.
/// Redirects home once a session appears.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionManager>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());

    {
        let session = session.clone();
        Effect::new(move || {
            if session.is_logged_in() {
                navigate("/", NavigateOptions::default());
            }
        });
    }

    let submit = {
        let session = session.clone();
        Callback::new(move |_: ()| {
            let value = email.get().trim().to_owned();
            if value.is_empty() {
                return;
            }

            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    let _ = session.login(&value).await;
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&session, value);
            }
        })
    };

    let on_google = move |_| {
        let _ = session.login_with_google();
    };

    view! {
        <div class="login-page">
            <h1>"OfferDeck"</h1>
            <p>"Log in to buy and negotiate offers"</p>

            <label class="dialog__label">
                "Email"
                <input
                    class="dialog__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
            <button class="btn btn--primary login-page__submit" on:click=move |_| submit.run(())>
                "Send Login Link"
            </button>

            <div class="login-page__divider">"or"</div>
            <button class="btn login-page__google" on:click=on_google>
                "Continue with Google"
            </button>

            <p class="login-page__signup">
                "New here? " <a href="/signup">"Create an account"</a>
            </p>
        </div>
    }
}
