//! Todo Row Component
//!
//! One item: checkbox, text, delete and edit affordances. Holds no state;
//! every interaction goes to a caller-supplied callback.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use todo_client::Item;

const COMPLETED_TEXT_STYLE: &str = "text-decoration: line-through; color: #a9a9a9;";

#[component]
pub fn TodoRow(
    item: Item,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
    #[prop(into)] on_edit: Callback<()>,
) -> impl IntoView {
    let completed = item.is_completed;

    view! {
        <div class=if completed { "todo-row completed" } else { "todo-row" }>
            <div class="todo-main">
                <input
                    type="checkbox"
                    aria-label="Mark task as completed"
                    prop:checked=completed
                    on:change=move |ev| {
                        // The checkbox mirrors the cache; the refetch flips it
                        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                            input.set_checked(completed);
                        }
                        on_toggle.run(());
                    }
                />
                <span class="todo-text" style=if completed { COMPLETED_TEXT_STYLE } else { "" }>
                    {item.text}
                </span>
            </div>
            <div class="todo-actions">
                <button class="icon-btn delete-btn" aria-label="Delete task" on:click=move |_| on_delete.run(())>
                    "×"
                </button>
                <button class="icon-btn edit-btn" aria-label="Edit task" on:click=move |_| on_edit.run(())>
                    "✎"
                </button>
            </div>
        </div>
    }
}
