use reqwest::StatusCode;
use snafu::Snafu;
use std::path::PathBuf;
use toml::{de::Error as TomlDeError, ser::Error as TomlSerError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Request to '{url}' failed: {source}"))]
    Transport { url: String, source: reqwest::Error },

    #[snafu(display("Server responded with {status} for '{url}': {body}"))]
    Server {
        url: String,
        status: u16,
        body: String,
    },

    #[snafu(display("Malformed response from '{url}': {source}"))]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    #[snafu(display("Invalid base URL '{base}': {message}"))]
    InvalidBaseUrl { base: String, message: String },

    #[snafu(display("Failed to list media in directory '{directory}': {source}"))]
    ListMediaFailed {
        directory: String,
        source: Box<Error>,
    },

    #[snafu(display("Failed to delete {count} media item(s): {source}"))]
    DeleteMediaFailed { count: usize, source: Box<Error> },

    #[snafu(display("Cannot {action} while the deletion workflow is {state}"))]
    InvalidTransition { action: &'static str, state: String },

    #[snafu(display("Invalid argument: {message}"))]
    InvalidArgument { message: String },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    #[snafu(display("JSON serialization error: {source}"))]
    Json { source: serde_json::Error },

    #[snafu(display("Failed to access settings file '{}': {source}", path.display()))]
    SettingsIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to parse settings file '{}': {source}", path.display()))]
    SettingsParse { path: PathBuf, source: TomlDeError },

    #[snafu(display("Failed to serialize settings file '{}': {source}", path.display()))]
    SettingsSerialize { path: PathBuf, source: TomlSerError },
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json { source: error }
    }
}

impl Error {
    pub fn non_interactive(action: &str) -> Self {
        Error::InvalidArgument {
            message: format!(
                "{action} requires interactive input. Hint: rerun without --non-interactive or use `rm --force` with explicit ids."
            ),
        }
    }

    /// Message shown to the user in notifications.
    ///
    /// Server errors surface the response body, since that is where the
    /// backend puts its diagnostic text.
    pub fn user_message(&self) -> String {
        match self {
            Error::Server { status, body, .. } => {
                let body = body.trim();
                if !body.is_empty() {
                    return body.to_string();
                }
                StatusCode::from_u16(*status)
                    .ok()
                    .and_then(|code| code.canonical_reason())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Server responded with status {status}"))
            }
            Error::ListMediaFailed { source, .. } | Error::DeleteMediaFailed { source, .. } => {
                source.user_message()
            }
            other => other.to_string(),
        }
    }

    /// The innermost error, skipping operation-level wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::ListMediaFailed { source, .. } | Error::DeleteMediaFailed { source, .. } => {
                source.root()
            }
            other => other,
        }
    }
}

/// Box an operation error into an operation-level variant carrying context.
#[macro_export]
macro_rules! wrap_err {
    ($result:expr, $variant:ident { $($field:ident : $value:expr),* $(,)? }) => {
        $result.map_err(|err| $crate::error::Error::$variant {
            $($field: $value,)*
            source: Box::new(err),
        })
    };
}
