use reqwest::Client;

use super::{checked_body, decode_error, transport_error};
use crate::error::Result;
use crate::media::MediaItem;
use crate::repository::endpoint::Endpoint;

pub trait Lister {
    fn new(http: Client, endpoint: Endpoint) -> Self;
    async fn list(&self, directory: &str) -> Result<Vec<MediaItem>>;
}

pub struct HttpLister {
    http: Client,
    endpoint: Endpoint,
}

impl Lister for HttpLister {
    fn new(http: Client, endpoint: Endpoint) -> Self {
        Self { http, endpoint }
    }

    async fn list(&self, directory: &str) -> Result<Vec<MediaItem>> {
        let url = self.endpoint.list_url(directory);
        log::debug!("fetching media from {url}");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;
        let body = checked_body(&url, response).await?;

        // Backend order is kept as-is.
        let items: Vec<MediaItem> =
            serde_json::from_str(&body).map_err(|e| decode_error(&url, e))?;
        log::debug!("received {} media item(s) from {url}", items.len());
        Ok(items)
    }
}
