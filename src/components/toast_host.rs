//! Toast notification host.
//!
//! Renders the toast queue in a fixed corner stack and schedules an
//! auto-dismiss timer for each toast as it appears. Toasts can also be
//! dismissed by click.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u64 = 4000;

/// Fixed overlay rendering all queued toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Ids that already have a dismiss timer scheduled.
    let scheduled = StoredValue::new(HashSet::<u64>::new());

    Effect::new(move || {
        let ids: Vec<u64> = toasts.get().toasts.iter().map(|t| t.id).collect();
        for id in ids {
            if scheduled.with_value(|s| s.contains(&id)) {
                continue;
            }
            scheduled.update_value(|s| {
                s.insert(id);
            });

            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(AUTO_DISMISS_MS))
                    .await;
                toasts.update(|t| t.dismiss(id));
            });
        }
    });

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
