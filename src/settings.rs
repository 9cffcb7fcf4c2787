//! Runtime Settings
//!
//! The host page may carry
//! `<script id="todo-config" type="application/json">{...}</script>`
//! whose fields override the build-time config.

use todo_client::ClientConfig;

const CONFIG_ELEMENT_ID: &str = "todo-config";

/// Resolved config plus the reason the page config was rejected, if it was.
/// Called before the logger exists, so problems are returned, not logged.
pub fn load() -> (ClientConfig, Option<serde_json::Error>) {
    let config = ClientConfig::from_build_env();
    match page_config() {
        Some(raw) => match config.clone().overlay_json(&raw) {
            Ok(merged) => (merged, None),
            Err(err) => (config, Some(err)),
        },
        None => (config, None),
    }
}

fn page_config() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|raw| !raw.trim().is_empty())
}
