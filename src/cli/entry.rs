use clap::{ArgGroup, Args as ClapArgs, Parser, Subcommand};

use crate::error::Result;

use super::{
    config,
    context::CliContext,
    gallery::{self, LsArgs, RmArgs},
    prompts::Prompt,
};

#[derive(Parser, Debug, Clone)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "Browse a media gallery backend and bulk-delete selected images and videos",
    after_help = "Set RUST_LOG=debug to trace backend requests."
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Disable interactive prompts (fail fast when input is required)
    #[arg(long)]
    pub non_interactive: bool,
    /// Backend base URL (empty for the default origin)
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,
    /// Backend directory to browse
    #[arg(short = 'd', long, value_name = "NAME")]
    pub directory: Option<String>,
    /// Override the settings file path
    #[arg(long = "config", value_name = "PATH", env = "GALLERIST_CONFIG")]
    pub config: Option<std::path::PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Inspect or change gallerist settings
    #[command(subcommand)]
    Config(ConfigCommand),

    /// List media in the directory
    Ls(LsArgs),
    /// Delete media by id or label pattern
    Rm(RmArgs),
    /// Interactively select and delete media
    Browse,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show resolved settings and where each value comes from
    Show,
    /// Persist defaults to the settings file
    Set(SetArgs),
}

#[derive(ClapArgs, Debug, Clone)]
#[command(group = ArgGroup::new("settings").required(true).multiple(true).args(["base_url", "directory", "clear"]))]
pub struct SetArgs {
    /// Default backend base URL
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,
    /// Default directory
    #[arg(long, value_name = "NAME")]
    pub directory: Option<String>,
    /// Remove all stored values
    #[arg(long, conflicts_with_all = ["base_url", "directory"])]
    pub clear: bool,
}

pub async fn run(args: Args) -> Result<()> {
    run_with_prompt(args, None).await
}

pub async fn run_with_prompt(args: Args, prompt: Option<Prompt>) -> Result<()> {
    let prompt = prompt.unwrap_or_else(|| Prompt::new(!args.global.non_interactive));

    let ctx = CliContext::from_args(args, prompt)?;
    match ctx.command() {
        Command::Config(cmd) => config::execute(cmd, &ctx),
        gallery_cmd => gallery::execute(gallery_cmd, &ctx).await,
    }
}
