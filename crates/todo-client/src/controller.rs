//! Todo Controller
//!
//! Drives the list: one request per intent, outcome folded into the state
//! slot, refetch after every successful mutation. The slot is abstract so the
//! same flow runs against a Leptos signal in the browser and a `RefCell` in
//! tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::TodoApi;
use crate::error::ApiResult;
use crate::models::{Item, ItemPatch, NewItem};
use crate::state::{Action, TodoState};

/// Somewhere a `TodoState` lives
pub trait StateSlot {
    /// `None` once the slot has been torn down (e.g. view unmounted)
    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R>;
    fn update(&self, f: impl FnOnce(&mut TodoState));
}

impl StateSlot for Rc<RefCell<TodoState>> {
    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn update(&self, f: impl FnOnce(&mut TodoState)) {
        f(&mut self.borrow_mut());
    }
}

pub struct TodoController<A, S> {
    api: Rc<A>,
    state: S,
}

impl<A, S: Clone> Clone for TodoController<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            state: self.state.clone(),
        }
    }
}

impl<A: TodoApi, S: StateSlot> TodoController<A, S> {
    pub fn new(api: A, state: S) -> Self {
        Self {
            api: Rc::new(api),
            state,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Fetch the whole collection and replace the cache
    pub async fn list(&self) {
        let result = self.api.list().await;
        match &result {
            Ok(items) => log::debug!("fetched {} todos", items.len()),
            Err(e) => log::warn!("fetch todos failed: {}", e),
        }
        self.state.update(|s| s.apply_list(result));
    }

    /// Create from whatever is in the input field, empty included
    pub async fn submit_new(&self) {
        if let Some(text) = self.state.read(|s| s.new_text().to_string()) {
            self.create(text).await;
        }
    }

    pub async fn create(&self, text: String) {
        let outcome = self.api.create(&NewItem::new(text)).await;
        log_outcome(Action::Create, None, &outcome);
        self.state.update(|s| s.apply_created(&outcome));
        self.refetch_after(&outcome).await;
    }

    pub async fn delete(&self, id: String) {
        let outcome = self.api.delete(&id).await;
        log_outcome(Action::Delete, Some(&id), &outcome);
        self.state.update(|s| s.apply_deleted(&outcome));
        self.refetch_after(&outcome).await;
    }

    /// Sends the negation of `item`'s last-known completion flag
    pub async fn toggle(&self, item: Item) {
        let outcome = self.api.patch(&item.id, &ItemPatch::toggle(&item)).await;
        log_outcome(Action::Toggle, Some(&item.id), &outcome);
        self.state.update(|s| s.apply_toggled(&outcome));
        self.refetch_after(&outcome).await;
    }

    /// Submit the current edit session, if any
    pub async fn save_edit(&self) {
        let session = self.state.read(|s| s.editing().cloned()).flatten();
        if let Some(session) = session {
            self.edit(session.id, session.draft).await;
        }
    }

    pub async fn edit(&self, id: String, text: String) {
        let outcome = self.api.patch(&id, &ItemPatch::text(text)).await;
        log_outcome(Action::Edit, Some(&id), &outcome);
        self.state.update(|s| s.apply_edited(&id, &outcome));
        self.refetch_after(&outcome).await;
    }

    async fn refetch_after(&self, outcome: &ApiResult<()>) {
        if outcome.is_ok() {
            self.list().await;
        }
    }
}

fn log_outcome(action: Action, id: Option<&str>, outcome: &ApiResult<()>) {
    let target = id.map(|id| format!(" {}", id)).unwrap_or_default();
    match outcome {
        Ok(()) => log::info!("{:?} todo{} ok", action, target),
        Err(e) => log::warn!("{:?} todo{} failed: {}", action, target, e),
    }
}
