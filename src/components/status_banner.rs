//! Status Banner Component
//!
//! Renders the single notification slot and closes it after the configured
//! delay. A timer only closes the notification it was started for.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_todo_context;

#[component]
pub fn StatusBanner() -> impl IntoView {
    let ctx = use_todo_context();
    let notification = move || ctx.state.with(|s| s.notification().clone());

    // Timer keys on (open, seq) only
    let slot = Memo::new(move |_| ctx.state.with(|s| (s.notification().open, s.notification().seq)));

    Effect::new(move |_| {
        let (open, seq) = slot.get();
        if !open {
            return;
        }
        let timeout = ctx.notification_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            ctx.state.try_update(|s| s.dismiss(seq));
        });
    });

    view! {
        <Show when=move || notification().open>
            <div
                class=move || format!("status-banner {}", notification().severity.as_str())
                role="status"
            >
                <span class="status-message">{move || notification().message}</span>
                <button
                    class="icon-btn close-btn"
                    aria-label="Close"
                    on:click=move |_| ctx.state.update(|s| s.close_notification())
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
