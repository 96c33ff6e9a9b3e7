use reqwest::Client;

use super::{checked_body, decode_error, transport_error};
use crate::error::Result;
use crate::media::{DeleteOutcome, DeletionRequest};
use crate::repository::endpoint::Endpoint;

pub trait Deleter {
    fn new(http: Client, endpoint: Endpoint) -> Self;
    async fn delete(&self, request: &DeletionRequest) -> Result<DeleteOutcome>;
}

pub struct HttpDeleter {
    http: Client,
    endpoint: Endpoint,
}

impl Deleter for HttpDeleter {
    fn new(http: Client, endpoint: Endpoint) -> Self {
        Self { http, endpoint }
    }

    async fn delete(&self, request: &DeletionRequest) -> Result<DeleteOutcome> {
        let url = self.endpoint.delete_url();
        log::debug!("deleting media at {url} ids={:?}", request.ids());

        // All-or-nothing: a non-2xx answer fails the whole request even if the
        // backend removed some of the files.
        let response = self
            .http
            .delete(url.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;
        let body = checked_body(&url, response).await?;

        let outcome: DeleteOutcome =
            serde_json::from_str(&body).map_err(|e| decode_error(&url, e))?;
        log::debug!(
            "delete response success={} message={}",
            outcome.success,
            outcome.message
        );
        Ok(outcome)
    }
}
