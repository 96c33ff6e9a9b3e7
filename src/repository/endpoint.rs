// URL helpers for the gallery backend
use reqwest::Url;

use crate::error::{Error, Result};

/// Origin used when the configured base URL is empty ("same origin").
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:5000";

const IMAGES_PATH: &str = "images";

/// Resolved `{base}/images` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    images: Url,
}

impl Endpoint {
    pub fn parse(base: &str) -> Result<Self> {
        let trimmed = base.trim().trim_end_matches('/');
        let origin = if trimmed.is_empty() {
            DEFAULT_ORIGIN
        } else {
            trimmed
        };

        let invalid = |message: String| Error::InvalidBaseUrl {
            base: base.to_string(),
            message,
        };

        let parsed = Url::parse(origin).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "unsupported scheme '{}' (expected http or https)",
                parsed.scheme()
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("base URL must not carry a query or fragment".to_string()));
        }

        let images = Url::parse(&format!("{origin}/{IMAGES_PATH}"))
            .map_err(|e| invalid(e.to_string()))?;
        Ok(Self { images })
    }

    /// `GET {base}/images?directory={name}`
    pub fn list_url(&self, directory: &str) -> Url {
        let mut url = self.images.clone();
        url.query_pairs_mut().append_pair("directory", directory);
        url
    }

    /// `DELETE {base}/images`
    pub fn delete_url(&self) -> Url {
        self.images.clone()
    }
}
