use crate::error::{Error, Result};
use crate::media::MediaItem;
use crate::repository::{GalleryClient, MediaRepository};
use crate::selection::SelectionSet;
use crate::utils::format_deletion_message;
use crate::view::{item_choice, render_gallery};
use crate::workflow::{DeletionWorkflow, Severity, WorkflowState};
use clap::Args as ClapArgs;
use globset::{Glob, GlobMatcher};

use super::context::CliContext;
use super::entry::Command;

fn parse_validated_id(id: &str) -> Result<String> {
    if id.trim().is_empty() {
        Err(Error::InvalidArgument {
            message: "media id must not be empty".to_string(),
        })
    } else {
        Ok(id.to_string())
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct LsArgs {
    /// Output as JSON (machine-readable)
    #[arg(long, conflicts_with = "long")]
    pub json: bool,

    /// Show locators and creation dates
    #[arg(short = 'L', long)]
    pub long: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct RmArgs {
    /// Media id(s) to delete
    #[arg(value_name = "ID", value_parser = parse_validated_id)]
    pub ids: Vec<String>,

    /// Also select every item whose label matches this glob (e.g. '*.mov')
    #[arg(short = 'm', long = "match", value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Force deletion without confirmation
    #[arg(short = 'f', long)]
    pub force: bool,
}

pub async fn execute(command: &Command, ctx: &CliContext) -> Result<()> {
    let config = ctx.config();
    let client = GalleryClient::new(config)?;

    match command {
        Command::Ls(ls_args) => {
            let items = client.list_media(&config.directory).await?;
            if ls_args.json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                print!(
                    "{}",
                    render_gallery(&items, &SelectionSet::new(), ls_args.long)
                );
            }
        }
        Command::Rm(rm_args) => {
            let mut workflow = DeletionWorkflow::new(client, config.directory.clone());
            remove(&mut workflow, rm_args, ctx).await?;
        }
        Command::Browse => {
            ctx.ensure_interactive("browse")?;
            let mut workflow = DeletionWorkflow::new(client, config.directory.clone());
            browse(&mut workflow, ctx).await?;
        }
        Command::Config(_) => {
            unreachable!("Config commands are handled separately")
        }
    }
    Ok(())
}

async fn remove<R: MediaRepository>(
    workflow: &mut DeletionWorkflow<R>,
    args: &RmArgs,
    ctx: &CliContext,
) -> Result<()> {
    if args.ids.is_empty() && args.pattern.is_none() {
        return Err(Error::InvalidArgument {
            message: "missing ID or --match pattern".to_string(),
        });
    }
    let matcher = args.pattern.as_deref().map(compile_glob).transpose()?;

    let items = workflow.refresh().await?.to_vec();

    for id in &args.ids {
        if !workflow.is_listed(id) {
            log::warn!(
                "skipping id '{id}': not listed in directory '{}'",
                workflow.directory()
            );
            continue;
        }
        workflow.select(id)?;
    }
    if let Some(matcher) = &matcher {
        for item in items.iter().filter(|item| matcher.is_match(&item.label)) {
            workflow.select(&item.id)?;
        }
    }

    if !workflow.request_delete()? {
        println!("Nothing to delete.");
        return Ok(());
    }

    if !args.force {
        let labels = selected_labels(&items, workflow.selection());
        let message = format_deletion_message(&labels);
        let confirmed = ctx.prompt().confirm(&message, false).await?;
        if !confirmed {
            workflow.cancel()?;
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let outcome = workflow.confirm().await?;
    println!("{}", outcome.message);
    Ok(())
}

async fn browse<R: MediaRepository>(
    workflow: &mut DeletionWorkflow<R>,
    ctx: &CliContext,
) -> Result<()> {
    let prompt = ctx.prompt();

    loop {
        if let Err(err) = workflow.current_items().await {
            if workflow.items().is_empty() {
                workflow.take_notifications();
                return Err(err);
            }
            report(workflow);
        }

        let items = workflow.items().to_vec();
        print!("{}", render_gallery(&items, workflow.selection(), false));
        if items.is_empty() {
            return Ok(());
        }

        let choices = items.iter().map(item_choice).collect();
        let defaults = items
            .iter()
            .map(|item| workflow.selection().contains(&item.id))
            .collect();
        let picked = prompt
            .multi_select(
                "Select media to delete (space toggles, enter continues)",
                choices,
                defaults,
            )
            .await?;
        for (index, item) in items.iter().enumerate() {
            if picked.contains(&index) != workflow.selection().contains(&item.id) {
                workflow.toggle(&item.id)?;
            }
        }

        if workflow.request_delete()? {
            let labels = selected_labels(&items, workflow.selection());
            if prompt.confirm(&format_deletion_message(&labels), false).await? {
                delete_with_retry(workflow, ctx).await?;
            } else {
                workflow.cancel()?;
                println!("Operation cancelled.");
            }
        } else {
            println!("No media selected.");
        }

        if !prompt.confirm("Keep browsing?", true).await? {
            return Ok(());
        }
    }
}

async fn delete_with_retry<R: MediaRepository>(
    workflow: &mut DeletionWorkflow<R>,
    ctx: &CliContext,
) -> Result<()> {
    loop {
        // Failures are reported through notifications and the Failed state.
        let _ = workflow.confirm().await;
        report(workflow);

        if !matches!(workflow.state(), WorkflowState::Failed { .. }) {
            return Ok(());
        }
        if ctx.prompt().confirm("Retry deletion?", true).await? && workflow.retry()? {
            continue;
        }
        workflow.cancel()?;
        return Ok(());
    }
}

fn report<R: MediaRepository>(workflow: &mut DeletionWorkflow<R>) {
    for notification in workflow.take_notifications() {
        match notification.severity {
            Severity::Info => {
                println!("{}: {}", notification.title, notification.description)
            }
            Severity::Error => {
                eprintln!("{}: {}", notification.title, notification.description)
            }
        }
    }
}

fn selected_labels(items: &[MediaItem], selection: &SelectionSet) -> Vec<String> {
    selection
        .iter()
        .map(|id| {
            items
                .iter()
                .find(|item| item.id == id)
                .map(|item| item.label.clone())
                .unwrap_or_else(|| id.to_string())
        })
        .collect()
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher> {
    Glob::new(pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|e| Error::InvalidArgument {
            message: format!("invalid --match glob: {}", e),
        })
}
