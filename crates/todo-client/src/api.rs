//! Todo API
//!
//! The remote collaborator behind the UI, plus its reqwest implementation.
//! Futures are `?Send` because in the browser they run on the page's event
//! loop via `spawn_local`.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::models::{Item, ItemList, ItemPatch, NewItem};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[async_trait(?Send)]
pub trait TodoApi {
    /// `GET /todos`, unwrapped from its `{data}` envelope, in server order
    async fn list(&self) -> ApiResult<Vec<Item>>;
    /// `POST /todos`; the echoed item is not needed since a refetch follows
    async fn create(&self, item: &NewItem) -> ApiResult<()>;
    /// `DELETE /todos/{id}`
    async fn delete(&self, id: &str) -> ApiResult<()>;
    /// `PATCH /todos/{id}` with a partial body
    async fn patch(&self, id: &str, patch: &ItemPatch) -> ApiResult<()>;
}

/// reqwest-backed API client (fetch under wasm32)
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        collection_url(&self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        item_url(&self.base_url, id)
    }
}

pub(crate) fn collection_url(base_url: &str) -> String {
    format!("{}/todos", base_url)
}

pub(crate) fn item_url(base_url: &str, id: &str) -> String {
    format!("{}/todos/{}", base_url, utf8_percent_encode(id, SEGMENT))
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ApiResult<Vec<Item>> {
        let url = self.collection_url();
        log::debug!("GET {}", url);
        let list: ItemList = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(list.data)
    }

    async fn create(&self, item: &NewItem) -> ApiResult<()> {
        let url = self.collection_url();
        log::debug!("POST {}", url);
        self.client
            .post(&url)
            .json(item)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        let url = self.item_url(id);
        log::debug!("DELETE {}", url);
        self.client.delete(&url).send().await?.error_for_status()?;
        Ok(())
    }

    async fn patch(&self, id: &str, patch: &ItemPatch) -> ApiResult<()> {
        let url = self.item_url(id);
        log::debug!("PATCH {}", url);
        self.client
            .patch(&url)
            .json(patch)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
