use crate::config::GalleryConfig;
use crate::config::loader::{ConfigRequest, ResolvedConfig, resolve};
use crate::error::{Error, Result};

use super::entry::{Args, Command, GlobalOptions};
use super::prompts::Prompt;

pub struct CliContext {
    options: GlobalOptions,
    command: Command,
    resolved: ResolvedConfig,
    prompt: Prompt,
}

impl CliContext {
    pub fn from_args(args: Args, prompt: Prompt) -> Result<Self> {
        let request = ConfigRequest {
            base_url: args.global.base_url.clone(),
            directory: args.global.directory.clone(),
            settings_path: args.global.config.clone(),
        };

        let resolved = resolve(request)?;

        Ok(Self {
            options: args.global,
            command: args.command,
            resolved,
            prompt,
        })
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn resolved(&self) -> &ResolvedConfig {
        &self.resolved
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.resolved.config
    }

    pub fn is_non_interactive(&self) -> bool {
        self.options.non_interactive
    }

    pub fn ensure_interactive(&self, action: &str) -> Result<()> {
        if self.is_non_interactive() {
            Err(Error::non_interactive(action))
        } else {
            Ok(())
        }
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }
}
