use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Persisted defaults (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    file: SettingsFile,
}

impl SettingsStore {
    /// Open the settings file; a missing file yields empty settings.
    pub fn open(path: Option<PathBuf>) -> Result<Self> {
        let path = path.unwrap_or_else(default_settings_path);
        if path.is_dir() {
            return Err(Error::SettingsIo {
                path,
                source: std::io::Error::other("settings path points to a directory"),
            });
        }

        let file = if path.exists() {
            Self::read_file(&path)?
        } else {
            log::debug!("settings file {} not found, using defaults", path.display());
            SettingsFile::default()
        };

        Ok(Self { path, file })
    }

    fn read_file(path: &Path) -> Result<SettingsFile> {
        let content = fs::read_to_string(path).map_err(|source| Error::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &SettingsFile {
        &self.file
    }

    pub fn set_base_url(&mut self, base_url: Option<String>) {
        self.file.base_url = base_url;
    }

    pub fn set_directory(&mut self, directory: Option<String>) {
        self.file.directory = directory;
    }

    pub fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| Error::SettingsIo {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let serialized =
            toml::to_string_pretty(&self.file).map_err(|source| Error::SettingsSerialize {
                path: self.path.clone(),
                source,
            })?;
        write_atomic(&self.path, serialized.as_bytes())
    }
}

fn default_settings_path() -> PathBuf {
    directories::BaseDirs::new()
        .map(|base_dirs| {
            base_dirs
                .home_dir()
                .join(".config")
                .join("gallerist")
                .join("config.toml")
        })
        .unwrap_or_else(|| {
            // Fallback to current directory
            env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("gallerist.toml")
        })
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let tmp_path = parent.join(format!(
        ".{}.tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("gallerist"),
        Uuid::new_v4().simple()
    ));

    let result = write_atomic_inner(path, &tmp_path, data);
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_atomic_inner(path: &Path, tmp_path: &Path, data: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(tmp_path)
        .map_err(|source| Error::SettingsIo {
            path: tmp_path.to_path_buf(),
            source,
        })?;

    file.write_all(data).map_err(|source| Error::SettingsIo {
        path: tmp_path.to_path_buf(),
        source,
    })?;

    file.sync_all().map_err(|source| Error::SettingsIo {
        path: tmp_path.to_path_buf(),
        source,
    })?;

    drop(file);

    fs::rename(tmp_path, path).map_err(|source| Error::SettingsIo {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
