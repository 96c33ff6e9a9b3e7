pub mod gallery_config;
pub mod loader;
pub mod settings;

pub use gallery_config::{DEFAULT_DIRECTORY, GalleryConfig};
pub use loader::{ConfigRequest, ConfigSource, ResolvedConfig, resolve};
pub use settings::{SettingsFile, SettingsStore};
