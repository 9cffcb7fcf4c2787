//! Todo App
//!
//! Owns the list state for the lifetime of the mounted view and wires the
//! HTTP controller into context.

use leptos::prelude::*;
use todo_client::{ClientConfig, HttpTodoApi, TodoController, TodoState};

use crate::components::{NewItemForm, StatusBanner, TodoList};
use crate::context::{SignalSlot, TodoContext};

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let state = RwSignal::new(TodoState::new());
    let controller = TodoController::new(HttpTodoApi::new(&config), SignalSlot(state));
    provide_context(TodoContext::new(state, controller, config.notification_timeout_ms));

    view! {
        <main class="todo-card">
            <h1>"ToDos"</h1>
            <NewItemForm />
            <TodoList />
            <StatusBanner />
        </main>
    }
}
