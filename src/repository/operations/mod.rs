// Repository operation traits and their HTTP implementations
pub mod delete;
pub mod list;

pub use delete::Deleter;
pub use list::Lister;

use reqwest::{Response, Url};

use crate::error::{Error, Result};

/// Read the response body, turning any non-2xx status into a server error
/// that carries the body as diagnostic text.
pub(crate) async fn checked_body(url: &Url, response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await.map_err(|source| Error::Transport {
        url: url.to_string(),
        source,
    })?;

    if !status.is_success() {
        log::error!("server responded with error: url={url} status={status} body={body}");
        return Err(Error::Server {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

pub(crate) fn transport_error(url: &Url, source: reqwest::Error) -> Error {
    log::error!("request to {url} failed: {source}");
    Error::Transport {
        url: url.to_string(),
        source,
    }
}

pub(crate) fn decode_error(url: &Url, source: serde_json::Error) -> Error {
    log::error!("malformed response from {url}: {source}");
    Error::Decode {
        url: url.to_string(),
        source,
    }
}
