//! Todo List Component
//!
//! Loads the collection on mount and renders each item, or its inline editor
//! when it is the one in edit mode. Intents are dispatched to the controller.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{EditRow, TodoRow};
use crate::context::{edit_flag, item_snapshot, use_todo_context, TodoContext};
use todo_client::Item;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_todo_context();

    // Initial load
    Effect::new(move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            controller.list().await;
        });
    });

    let items = item_snapshot(ctx.state);
    let load_failed = Memo::new(move |_| ctx.state.with(|s| s.load_failed()));

    view! {
        <Show when=move || load_failed.get()>
            <p class="load-error">"Failed to load todos"</p>
        </Show>
        <div class="todo-list">
            <For
                each=move || items.get()
                // Every rendered field, so a refetch that changes one re-renders the row
                key=|item| (item.id.clone(), item.text.clone(), item.is_completed)
                children=move |item| view! { <TodoEntry ctx=ctx item=item /> }
            />
        </div>
    }
}

/// Row or editor for one item, depending on edit mode
#[component]
fn TodoEntry(ctx: TodoContext, item: Item) -> impl IntoView {
    let editing = edit_flag(ctx.state, item.id.clone());

    move || {
        if editing.get() {
            edit_row(ctx).into_any()
        } else {
            todo_row(ctx, item.clone()).into_any()
        }
    }
}

fn todo_row(ctx: TodoContext, item: Item) -> impl IntoView {
    let toggle_item = item.clone();
    let delete_id = item.id.clone();
    let edit_item = item.clone();

    let on_toggle = Callback::new(move |_: ()| {
        let controller = ctx.controller();
        let item = toggle_item.clone();
        spawn_local(async move {
            controller.toggle(item).await;
        });
    });
    let on_delete = Callback::new(move |_: ()| {
        let controller = ctx.controller();
        let id = delete_id.clone();
        spawn_local(async move {
            controller.delete(id).await;
        });
    });
    let on_edit = Callback::new(move |_: ()| {
        ctx.state.update(|s| s.begin_edit(&edit_item));
    });

    view! { <TodoRow item=item on_toggle=on_toggle on_delete=on_delete on_edit=on_edit /> }
}

fn edit_row(ctx: TodoContext) -> impl IntoView {
    let draft = Signal::derive(move || {
        ctx.state
            .with(|s| s.editing().map(|session| session.draft.clone()))
            .unwrap_or_default()
    });
    let on_input = Callback::new(move |text: String| {
        ctx.state.update(|s| s.set_draft(text));
    });
    let on_save = Callback::new(move |_: ()| {
        let controller = ctx.controller();
        spawn_local(async move {
            controller.save_edit().await;
        });
    });
    let on_cancel = Callback::new(move |_: ()| {
        ctx.state.update(|s| s.cancel_edit());
    });

    view! { <EditRow draft=draft on_input=on_input on_save=on_save on_cancel=on_cancel /> }
}
