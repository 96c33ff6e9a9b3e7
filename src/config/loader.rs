use crate::config::gallery_config::{DEFAULT_DIRECTORY, GalleryConfig};
use crate::config::settings::{SettingsFile, SettingsStore};
use crate::error::Result;
use std::env;
use std::fmt;
use std::path::PathBuf;

pub const ENV_BASE_URL: &str = "GALLERIST_BASE_URL";
pub const ENV_DIRECTORY: &str = "GALLERIST_DIRECTORY";

fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Where a resolved value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Flag,
    Env(&'static str),
    File,
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Flag => f.write_str("command line"),
            ConfigSource::Env(key) => write!(f, "environment ({key})"),
            ConfigSource::File => f.write_str("settings file"),
            ConfigSource::Default => f.write_str("default"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigRequest {
    pub base_url: Option<String>,
    pub directory: Option<String>,
    pub settings_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: GalleryConfig,
    pub base_url_source: ConfigSource,
    pub directory_source: ConfigSource,
    pub settings_path: PathBuf,
}

/// Resolve configuration: flag, then environment, then settings file, then default.
pub fn resolve(request: ConfigRequest) -> Result<ResolvedConfig> {
    let store = SettingsStore::open(request.settings_path.clone())?;
    let settings_path = store.path().to_path_buf();
    Ok(resolve_from_source(
        &request,
        store.settings(),
        &env_value,
        settings_path,
    ))
}

fn resolve_from_source(
    request: &ConfigRequest,
    file: &SettingsFile,
    get: &dyn Fn(&str) -> Option<String>,
    settings_path: PathBuf,
) -> ResolvedConfig {
    let (base_url, base_url_source) = pick(
        request.base_url.as_deref(),
        ENV_BASE_URL,
        file.base_url.as_deref(),
        get,
    )
    .unwrap_or((String::new(), ConfigSource::Default));

    let (directory, directory_source) = pick(
        request.directory.as_deref(),
        ENV_DIRECTORY,
        file.directory.as_deref(),
        get,
    )
    .unwrap_or_else(|| (DEFAULT_DIRECTORY.to_string(), ConfigSource::Default));

    log::debug!(
        "resolved config base_url={base_url:?} ({base_url_source}) directory={directory} ({directory_source})"
    );

    ResolvedConfig {
        config: GalleryConfig::new(base_url, directory),
        base_url_source,
        directory_source,
        settings_path,
    }
}

fn pick(
    flag: Option<&str>,
    env_key: &'static str,
    file: Option<&str>,
    get: &dyn Fn(&str) -> Option<String>,
) -> Option<(String, ConfigSource)> {
    let non_empty = |value: &str| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };

    flag.and_then(non_empty)
        .map(|value| (value, ConfigSource::Flag))
        .or_else(|| get(env_key).map(|value| (value, ConfigSource::Env(env_key))))
        .or_else(|| {
            file.and_then(non_empty)
                .map(|value| (value, ConfigSource::File))
        })
}
