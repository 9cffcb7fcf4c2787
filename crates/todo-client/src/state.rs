//! Todo List State
//!
//! Everything the list view renders: the cached collection, the new-item
//! input, the single edit session and the notification slot. Request outcomes
//! are folded in through the `apply_*` methods; nothing here performs I/O.

use crate::error::ApiResult;
use crate::models::{sort_by_created, Item};

/// Notification severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// Single-slot transient banner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub open: bool,
    pub message: String,
    pub severity: Severity,
    /// Bumped on every open so a stale auto-dismiss can be told apart
    pub seq: u64,
}

/// Request kinds, each with its fixed user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fetch,
    Create,
    Delete,
    Toggle,
    Edit,
}

impl Action {
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            Action::Fetch => None,
            Action::Create => Some("Todo Created Successfully"),
            Action::Delete => Some("Todo Deleted Successfully"),
            Action::Toggle => Some("Toggled Successfully"),
            Action::Edit => Some("Todo Updated Successfully"),
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Action::Fetch => "Failed to fetch todos",
            Action::Create => "Failed to create todo",
            Action::Delete => "Failed to delete todo",
            Action::Toggle => "Failed to toggle todo",
            Action::Edit => "Failed to update todo",
        }
    }
}

/// The one item currently being edited inline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: String,
    pub draft: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoState {
    items: Vec<Item>,
    stale: bool,
    load_failed: bool,
    new_text: String,
    editing: Option<EditSession>,
    notification: Notification,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Reads
    // ========================

    /// Cached snapshot, ascending by `created_at`
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// A mutation succeeded since the last successful fetch
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// The most recent fetch failed
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn new_text(&self) -> &str {
        &self.new_text
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_ref().is_some_and(|session| session.id == id)
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    // ========================
    // Local input
    // ========================

    pub fn set_new_text(&mut self, text: impl Into<String>) {
        self.new_text = text.into();
    }

    /// Enter edit mode for `item`, seeding the draft with its text.
    /// Any draft for another item is dropped.
    pub fn begin_edit(&mut self, item: &Item) {
        self.editing = Some(EditSession {
            id: item.id.clone(),
            draft: item.text.clone(),
        });
    }

    /// No-op outside edit mode
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let Some(session) = self.editing.as_mut() {
            session.draft = text.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // ========================
    // Notifications
    // ========================

    /// Open the banner, replacing whatever it showed. Returns the new seq.
    pub fn notify(&mut self, severity: Severity, message: impl Into<String>) -> u64 {
        self.notification = Notification {
            open: true,
            message: message.into(),
            severity,
            seq: self.notification.seq + 1,
        };
        self.notification.seq
    }

    /// Explicit close; message and severity stay for the closing render
    pub fn close_notification(&mut self) {
        self.notification.open = false;
    }

    /// Timer-driven close; ignored if a newer notification has replaced `seq`
    pub fn dismiss(&mut self, seq: u64) {
        if self.notification.seq == seq {
            self.notification.open = false;
        }
    }

    // ========================
    // Request outcomes
    // ========================

    /// Replace the cache wholesale on success; keep it on failure
    pub fn apply_list(&mut self, result: ApiResult<Vec<Item>>) {
        match result {
            Ok(mut items) => {
                sort_by_created(&mut items);
                self.items = items;
                self.stale = false;
                self.load_failed = false;
            }
            Err(_) => {
                self.load_failed = true;
                self.notify(Severity::Error, Action::Fetch.failure_message());
            }
        }
    }

    pub fn apply_created(&mut self, outcome: &ApiResult<()>) {
        if self.settle(Action::Create, outcome) {
            self.new_text.clear();
        }
    }

    pub fn apply_deleted(&mut self, outcome: &ApiResult<()>) {
        self.settle(Action::Delete, outcome);
    }

    pub fn apply_toggled(&mut self, outcome: &ApiResult<()>) {
        self.settle(Action::Toggle, outcome);
    }

    /// Leaves edit mode only if it still targets `id`; a session opened for
    /// another item while the request was in flight survives.
    pub fn apply_edited(&mut self, id: &str, outcome: &ApiResult<()>) {
        if self.settle(Action::Edit, outcome) && self.is_editing(id) {
            self.editing = None;
        }
    }

    fn settle(&mut self, action: Action, outcome: &ApiResult<()>) -> bool {
        match outcome {
            Ok(()) => {
                self.stale = true;
                if let Some(message) = action.success_message() {
                    self.notify(Severity::Success, message);
                }
                true
            }
            Err(_) => {
                self.notify(Severity::Error, action.failure_message());
                false
            }
        }
    }
}
