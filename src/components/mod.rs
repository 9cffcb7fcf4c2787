//! UI Components
//!
//! Leptos components for the todo list.

mod edit_row;
mod new_item_form;
mod status_banner;
mod todo_list;
mod todo_row;

pub use edit_row::EditRow;
pub use new_item_form::NewItemForm;
pub use status_banner::StatusBanner;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
