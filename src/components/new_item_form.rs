//! New Item Form Component
//!
//! Text field plus submit button. Whatever is typed is sent, empty included.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_todo_context;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_todo_context();

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = ctx.controller();
        spawn_local(async move {
            controller.submit_new().await;
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <input
                type="text"
                placeholder="Add ToDo"
                aria-label="Add ToDo"
                prop:value=move || ctx.state.with(|s| s.new_text().to_string())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    ctx.state.update(|s| s.set_new_text(text));
                }
            />
            <button type="submit" class="primary-btn">"Submit"</button>
        </form>
    }
}
