//! Sign-up page collecting the account profile.

use leptos::prelude::*;

use crate::net::session::SessionManager;
use crate::net::types::SignUpProfile;

/// Sign-up form. Registration is followed by email verification; there is
/// no password to choose since login is one-time-link only.
#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<SessionManager>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());

    let submit = Callback::new(move |_: ()| {
        let profile = SignUpProfile {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            phone: phone.get().trim().to_owned(),
            country: country.get().trim().to_owned(),
            city: city.get().trim().to_owned(),
        };
        if profile.email.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let _ = session.sign_up(&profile).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, profile);
        }
    });

    let field = |label: &'static str, input_type: &'static str, value: RwSignal<String>| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type=input_type
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="signup-page">
            <h1>"Create your account"</h1>
            <p>"You'll log in with a one-time email link, no password needed."</p>

            {field("Name", "text", name)}
            {field("Email", "email", email)}
            {field("Phone", "tel", phone)}
            {field("Country", "text", country)}
            {field("City", "text", city)}

            <button class="btn btn--primary signup-page__submit" on:click=move |_| submit.run(())>
                "Sign Up"
            </button>

            <p class="signup-page__login">
                "Already have an account? " <a href="/login">"Log in"</a>
            </p>
        </div>
    }
}
