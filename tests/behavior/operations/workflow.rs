use crate::async_trials;
use crate::*;
use gallerist::config::GalleryConfig;
use gallerist::error::Result;
use gallerist::repository::GalleryClient;
use gallerist::workflow::{DeletionWorkflow, Severity, WorkflowState};
use predicates::prelude::*;

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        test_confirmed_delete_clears_selection_and_relists,
        test_failed_delete_keeps_selection,
        test_failed_refresh_keeps_gallery,
        test_unlisted_id_is_never_sent,
        test_cli_browse_initial_listing_failure_reports_once,
    ));
}

fn workflow(backend: &FakeBackend) -> Result<DeletionWorkflow<GalleryClient>> {
    let client = GalleryClient::new(&GalleryConfig::new(&backend.base_url, DIRECTORY))?;
    Ok(DeletionWorkflow::new(client, DIRECTORY))
}

async fn test_confirmed_delete_clears_selection_and_relists(backend: FakeBackend) -> Result<()> {
    backend.seed(
        DIRECTORY,
        vec![media("a", "a.jpg"), media("b", "b.jpg"), media("c", "c.jpg")],
    );
    backend.set_delete_message("deleted");
    let mut workflow = workflow(&backend)?;

    workflow.refresh().await?;
    workflow.toggle("a")?;
    workflow.toggle("c")?;
    assert!(workflow.request_delete()?);

    let outcome = workflow.confirm().await?;
    assert_eq!(outcome.message, "deleted");
    assert!(workflow.selection().is_empty());
    assert_eq!(workflow.state(), &WorkflowState::Idle);
    assert!(workflow.is_stale());
    assert_eq!(backend.list_calls(), 1);

    let ids: Vec<String> = workflow
        .current_items()
        .await?
        .iter()
        .map(|item| item.id.clone())
        .collect();
    assert_eq!(backend.list_calls(), 2);
    assert_eq!(ids, vec!["b".to_string()]);
    Ok(())
}

async fn test_failed_delete_keeps_selection(backend: FakeBackend) -> Result<()> {
    backend.seed(
        DIRECTORY,
        vec![media("a", "a.jpg"), media("b", "b.jpg"), media("c", "c.jpg")],
    );
    backend.fail_next_delete(500, "disk error");
    let mut workflow = workflow(&backend)?;

    workflow.refresh().await?;
    workflow.toggle("b")?;
    workflow.request_delete()?;
    assert!(workflow.confirm().await.is_err());

    assert_eq!(
        workflow.state(),
        &WorkflowState::Failed {
            message: "disk error".to_string()
        }
    );
    assert_eq!(workflow.selection().iter().collect::<Vec<_>>(), vec!["b"]);
    let notifications = workflow.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].severity, Severity::Error);
    assert_eq!(notifications[0].description, "disk error");

    // The backend recovered: retrying sends the same set.
    assert!(workflow.retry()?);
    workflow.confirm().await?;
    assert_eq!(
        backend.delete_requests(),
        vec![vec!["b".to_string()], vec!["b".to_string()]]
    );
    assert_eq!(backend.ids(DIRECTORY), vec!["a".to_string(), "c".to_string()]);
    Ok(())
}

async fn test_failed_refresh_keeps_gallery(backend: FakeBackend) -> Result<()> {
    backend.seed(DIRECTORY, vec![media("a", "a.jpg"), media("b", "b.mp4")]);
    let mut workflow = workflow(&backend)?;
    workflow.refresh().await?;

    backend.fail_next_list(500, "index rebuilding");
    assert!(workflow.refresh().await.is_err());

    assert_eq!(workflow.items().len(), 2);
    let notifications = workflow.take_notifications();
    assert_eq!(notifications[0].title, "Error loading media");
    assert_eq!(notifications[0].description, "index rebuilding");
    Ok(())
}

async fn test_unlisted_id_is_never_sent(backend: FakeBackend) -> Result<()> {
    backend.seed(DIRECTORY, vec![media("a", "a.jpg"), media("b", "b.jpg")]);
    let mut workflow = workflow(&backend)?;
    workflow.refresh().await?;

    assert!(workflow.toggle("ghost").is_err());
    assert!(!workflow.request_delete()?);
    assert!(workflow.confirm().await.is_err());
    assert!(backend.delete_requests().is_empty());
    Ok(())
}

async fn test_cli_browse_initial_listing_failure_reports_once(backend: FakeBackend) -> Result<()> {
    backend.fail_next_list(500, "disk error");

    backend
        .command()
        .arg("browse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to list media"))
        .stderr(predicate::str::contains("Error loading media").not());
    Ok(())
}
