/// Directory listed when none is configured.
pub const DEFAULT_DIRECTORY: &str = "directory1";

/// Resolved settings for talking to the gallery backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Base URL of the backend; empty means the default origin.
    pub base_url: String,
    pub directory: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            directory: DEFAULT_DIRECTORY.to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn new(base_url: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            directory: directory.into(),
        }
    }
}
