use crate::config::{ConfigSource, SettingsStore};
use crate::error::Result;
use crate::repository::Endpoint;

use super::context::CliContext;
use super::entry::{ConfigCommand, SetArgs};

pub fn execute(command: &ConfigCommand, ctx: &CliContext) -> Result<()> {
    match command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Set(args) => set(args, ctx),
    }
}

fn show(ctx: &CliContext) -> Result<()> {
    let resolved = ctx.resolved();
    let config = &resolved.config;

    let base_url = if config.base_url.is_empty() {
        "(default origin)".to_string()
    } else {
        config.base_url.clone()
    };
    println!("base_url={base_url}  [{}]", resolved.base_url_source);
    println!(
        "directory={}  [{}]",
        config.directory, resolved.directory_source
    );

    match Endpoint::parse(&config.base_url) {
        Ok(endpoint) => println!("endpoint={}", endpoint.delete_url()),
        Err(err) => println!("endpoint=invalid ({err})"),
    }
    println!("settings_file={}", resolved.settings_path.display());

    if resolved.base_url_source == ConfigSource::Default {
        log::debug!("no base URL configured; requests go to the default origin");
    }
    Ok(())
}

fn set(args: &SetArgs, ctx: &CliContext) -> Result<()> {
    let mut store = SettingsStore::open(Some(ctx.resolved().settings_path.clone()))?;

    if args.clear {
        store.set_base_url(None);
        store.set_directory(None);
    }
    if let Some(base_url) = &args.base_url {
        // Reject values the client could never use.
        Endpoint::parse(base_url)?;
        store.set_base_url(Some(base_url.trim().to_string()));
    }
    if let Some(directory) = &args.directory {
        store.set_directory(Some(directory.trim().to_string()));
    }

    store.persist()?;
    println!("Settings saved to {}", store.path().display());
    Ok(())
}
