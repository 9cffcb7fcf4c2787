//! Todo Context
//!
//! State signal and controller shared with every component via the Leptos
//! Context API.

use leptos::prelude::*;
use todo_client::{HttpTodoApi, Item, StateSlot, TodoController, TodoState};

/// Adapts the state signal to the controller's slot.
/// Reads are untracked; after unmount both calls become no-ops.
#[derive(Clone, Copy)]
pub struct SignalSlot(pub RwSignal<TodoState>);

impl StateSlot for SignalSlot {
    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }

    fn update(&self, f: impl FnOnce(&mut TodoState)) {
        self.0.try_update(f);
    }
}

pub type Controller = TodoController<HttpTodoApi, SignalSlot>;

#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Everything the list renders
    pub state: RwSignal<TodoState>,
    /// Not `Send`, so kept in local storage
    controller: StoredValue<Controller, LocalStorage>,
    /// Auto-dismiss delay for the banner
    pub notification_timeout_ms: u32,
}

impl TodoContext {
    pub fn new(state: RwSignal<TodoState>, controller: Controller, notification_timeout_ms: u32) -> Self {
        Self {
            state,
            controller: StoredValue::new_local(controller),
            notification_timeout_ms,
        }
    }

    /// Handle to move into a `spawn_local` task
    pub fn controller(&self) -> Controller {
        self.controller.get_value()
    }
}

/// Sorted snapshot; unchanged by input-field edits
pub fn item_snapshot(state: RwSignal<TodoState>) -> Memo<Vec<Item>> {
    Memo::new(move |_| state.with(|s| s.items().to_vec()))
}

/// Whether `id` is the row in edit mode; flips only when that changes
pub fn edit_flag(state: RwSignal<TodoState>, id: String) -> Memo<bool> {
    Memo::new(move |_| state.with(|s| s.is_editing(&id)))
}

pub fn use_todo_context() -> TodoContext {
    use_context::<TodoContext>().expect("TodoContext should be provided")
}
