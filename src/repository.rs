use crate::config::GalleryConfig;
use crate::error::{Error, Result};
use crate::media::{DeleteOutcome, DeletionRequest, MediaItem};
use reqwest::Client;

pub mod endpoint;
mod operations;

pub use self::endpoint::{DEFAULT_ORIGIN, Endpoint};

use self::operations::delete::HttpDeleter;
use self::operations::list::HttpLister;
use self::operations::{Deleter, Lister};
use crate::wrap_err;

/// Remote operations the deletion workflow depends on.
pub trait MediaRepository {
    /// List media in `directory`, in backend order.
    async fn list_media(&self, directory: &str) -> Result<Vec<MediaItem>>;

    /// Delete every id in `request`. A non-success status fails the whole
    /// request.
    async fn delete_media(&self, request: &DeletionRequest) -> Result<DeleteOutcome>;
}

/// Gallery backend client over HTTP/JSON
#[derive(Clone)]
pub struct GalleryClient {
    http: Client,
    endpoint: Endpoint,
}

impl GalleryClient {
    pub fn new(config: &GalleryConfig) -> Result<Self> {
        let endpoint = Endpoint::parse(&config.base_url)?;
        let http = Client::builder()
            .user_agent(concat!("gallerist/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| Error::Transport {
                url: endpoint.delete_url().to_string(),
                source,
            })?;
        log::debug!("gallery client endpoint={}", endpoint.delete_url());
        Ok(Self { http, endpoint })
    }

    pub async fn list_media(&self, directory: &str) -> Result<Vec<MediaItem>> {
        log::debug!("list_media directory={directory}");
        let lister = HttpLister::new(self.http.clone(), self.endpoint.clone());
        wrap_err!(
            lister.list(directory).await,
            ListMediaFailed {
                directory: directory.to_string()
            }
        )
    }

    pub async fn delete_media(&self, request: &DeletionRequest) -> Result<DeleteOutcome> {
        log::debug!("delete_media ids_count={}", request.len());
        let deleter = HttpDeleter::new(self.http.clone(), self.endpoint.clone());
        wrap_err!(
            deleter.delete(request).await,
            DeleteMediaFailed {
                count: request.len()
            }
        )
    }
}

impl MediaRepository for GalleryClient {
    async fn list_media(&self, directory: &str) -> Result<Vec<MediaItem>> {
        GalleryClient::list_media(self, directory).await
    }

    async fn delete_media(&self, request: &DeletionRequest) -> Result<DeleteOutcome> {
        GalleryClient::delete_media(self, request).await
    }
}
