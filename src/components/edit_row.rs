//! Edit Row Component
//!
//! Inline editor shown in place of a row while it is in edit mode.

use leptos::prelude::*;

#[component]
pub fn EditRow(
    #[prop(into)] draft: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="todo-row editing"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                on_save.run(());
            }
        >
            <input
                type="text"
                class="edit-input"
                prop:value=move || draft.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <button type="submit" class="primary-btn">"Save"</button>
            <button type="button" class="secondary-btn" on:click=move |_| on_cancel.run(())>
                "Cancel"
            </button>
        </form>
    }
}
