//! Todo Client
//!
//! Framework-free core of the todo UI:
//! - models: wire types for the `/todos` API
//! - api: the `TodoApi` seam and its reqwest implementation
//! - state: cached collection, input, edit session, notification
//! - controller: request/outcome flow over a `StateSlot`

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod state;


pub use api::{HttpTodoApi, TodoApi};
pub use config::ClientConfig;
pub use controller::{StateSlot, TodoController};
pub use error::{ApiError, ApiResult};
pub use models::{CreatedAt, Item, ItemPatch, NewItem};
pub use state::{Action, EditSession, Notification, Severity, TodoState};
