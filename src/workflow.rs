//! Selection and bulk-deletion coordinator.
//!
//! The workflow owns the last fetched listing, the selection set and the
//! deletion state machine:
//!
//! ```text
//! Idle -> ConfirmPending -> Deleting -> Idle
//!                                    \-> Failed -> ConfirmPending | Idle
//! ```
//!
//! At most one deletion request is in flight per workflow. The selection is
//! frozen from the moment deletion is requested until the request settles,
//! and a failed request leaves it untouched so the user can retry.

use std::fmt;

use crate::error::{Error, Result};
use crate::media::{DeleteOutcome, DeletionRequest, MediaItem};
use crate::repository::MediaRepository;
use crate::selection::SelectionSet;
use crate::utils::pluralize_images;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    ConfirmPending,
    Deleting,
    Failed { message: String },
}

impl WorkflowState {
    fn selection_frozen(&self) -> bool {
        matches!(self, WorkflowState::ConfirmPending | WorkflowState::Deleting)
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowState::Idle => f.write_str("idle"),
            WorkflowState::ConfirmPending => f.write_str("awaiting confirmation"),
            WorkflowState::Deleting => f.write_str("deleting"),
            WorkflowState::Failed { .. } => f.write_str("failed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A user-visible message produced by the workflow (the toast of a GUI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notification {
    fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

pub struct DeletionWorkflow<R> {
    repository: R,
    directory: String,
    items: Vec<MediaItem>,
    stale: bool,
    selection: SelectionSet,
    state: WorkflowState,
    in_flight: Option<DeletionRequest>,
    notifications: Vec<Notification>,
}

impl<R: MediaRepository> DeletionWorkflow<R> {
    pub fn new(repository: R, directory: impl Into<String>) -> Self {
        Self {
            repository,
            directory: directory.into(),
            items: Vec::new(),
            stale: true,
            selection: SelectionSet::new(),
            state: WorkflowState::Idle,
            in_flight: None,
            notifications: Vec::new(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Last successfully fetched listing; may be stale.
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// The id set of the request currently being sent, if any.
    pub fn in_flight(&self) -> Option<&DeletionRequest> {
        self.in_flight.as_ref()
    }

    /// Drain notifications produced since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Fetch the listing. On failure the previous listing is kept and an
    /// error notification is queued. The selection is never touched.
    pub async fn refresh(&mut self) -> Result<&[MediaItem]> {
        log::debug!(
            "refresh directory={} state={}",
            self.directory,
            self.state
        );
        match self.repository.list_media(&self.directory).await {
            Ok(items) => {
                self.items = items;
                self.stale = false;
                Ok(&self.items)
            }
            Err(err) => {
                log::warn!(
                    "keeping {} previously listed item(s) after failed refresh: {err}",
                    self.items.len()
                );
                self.notifications
                    .push(Notification::error("Error loading media", err.user_message()));
                Err(err)
            }
        }
    }

    /// Listing for rendering, re-fetched first when marked stale.
    pub async fn current_items(&mut self) -> Result<&[MediaItem]> {
        if self.stale {
            self.refresh().await?;
        }
        Ok(&self.items)
    }

    /// Toggle an id. Returns whether it is selected afterwards.
    ///
    /// Only ids from the last successful listing can be added. A selected id
    /// that has since gone stale can still be toggled off.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        self.ensure_selection_mutable("change the selection")?;
        if !self.selection.contains(id) {
            self.ensure_listed(id)?;
        }
        Ok(self.selection.toggle(id))
    }

    /// Select an id without toggling it off when already selected.
    pub fn select(&mut self, id: &str) -> Result<bool> {
        self.ensure_selection_mutable("change the selection")?;
        if self.selection.contains(id) {
            return Ok(false);
        }
        self.ensure_listed(id)?;
        Ok(self.selection.select(id))
    }

    /// Whether `id` is part of the last successful listing.
    pub fn is_listed(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn clear_selection(&mut self) -> Result<()> {
        self.ensure_selection_mutable("clear the selection")?;
        self.selection.clear();
        Ok(())
    }

    /// Ask for deletion of the current selection.
    ///
    /// Returns `Ok(false)` and stays put when nothing is selected. From
    /// `Failed` this acts as a retry.
    pub fn request_delete(&mut self) -> Result<bool> {
        match self.state {
            WorkflowState::Deleting => Err(self.invalid("request deletion")),
            WorkflowState::ConfirmPending => Ok(true),
            WorkflowState::Idle | WorkflowState::Failed { .. } => {
                if self.selection.is_empty() {
                    log::debug!("request_delete ignored: empty selection");
                    if matches!(self.state, WorkflowState::Failed { .. }) {
                        self.state = WorkflowState::Idle;
                    }
                    return Ok(false);
                }
                self.state = WorkflowState::ConfirmPending;
                Ok(true)
            }
        }
    }

    /// Leave `Failed` for `ConfirmPending`, or `Idle` when the selection was
    /// emptied in the meantime.
    pub fn retry(&mut self) -> Result<bool> {
        if !matches!(self.state, WorkflowState::Failed { .. }) {
            return Err(self.invalid("retry"));
        }
        self.request_delete()
    }

    /// Dismiss the confirmation or the failure. The selection is kept.
    pub fn cancel(&mut self) -> Result<()> {
        match self.state {
            WorkflowState::Deleting => Err(self.invalid("cancel")),
            _ => {
                self.state = WorkflowState::Idle;
                Ok(())
            }
        }
    }

    /// Freeze the selection into a request and enter `Deleting`.
    pub fn begin_delete(&mut self) -> Result<DeletionRequest> {
        if self.state != WorkflowState::ConfirmPending {
            return Err(self.invalid("confirm deletion"));
        }
        let request = self.selection.snapshot();
        log::debug!("begin_delete ids_count={}", request.len());
        self.in_flight = Some(request.clone());
        self.state = WorkflowState::Deleting;
        Ok(request)
    }

    /// Settle the in-flight request with the repository's answer.
    ///
    /// Any 2xx answer counts as success: it clears the selection and marks
    /// the listing stale. A failed request moves to `Failed` and keeps the
    /// selection.
    pub fn finish_delete(&mut self, result: Result<DeleteOutcome>) -> Result<DeleteOutcome> {
        if self.state != WorkflowState::Deleting {
            return Err(self.invalid("complete deletion"));
        }
        let count = self
            .in_flight
            .take()
            .map(|request| request.len())
            .unwrap_or_default();

        match result {
            Ok(outcome) => {
                if !outcome.success {
                    log::warn!(
                        "backend answered 2xx with success=false: {}",
                        outcome.message
                    );
                }
                log::info!("deleted {count} media item(s): {}", outcome.message);
                self.selection.clear();
                self.stale = true;
                self.state = WorkflowState::Idle;
                self.notifications.push(Notification::info(
                    format!("{count} {} deleted", pluralize_images(count)),
                    "The selected images have been removed successfully.",
                ));
                Ok(outcome)
            }
            Err(err) => {
                let message = err.user_message();
                log::error!("deletion of {count} media item(s) failed: {err}");
                self.state = WorkflowState::Failed {
                    message: message.clone(),
                };
                self.notifications
                    .push(Notification::error("Error deleting images", message));
                Err(err)
            }
        }
    }

    /// Send the frozen selection and settle the result.
    pub async fn confirm(&mut self) -> Result<DeleteOutcome> {
        let request = self.begin_delete()?;
        let result = self.repository.delete_media(&request).await;
        self.finish_delete(result)
    }

    fn ensure_selection_mutable(&self, action: &'static str) -> Result<()> {
        if self.state.selection_frozen() {
            Err(self.invalid(action))
        } else {
            Ok(())
        }
    }

    fn ensure_listed(&self, id: &str) -> Result<()> {
        if self.is_listed(id) {
            Ok(())
        } else {
            Err(Error::InvalidArgument {
                message: format!(
                    "media id '{id}' is not listed in directory '{}'",
                    self.directory
                ),
            })
        }
    }

    fn invalid(&self, action: &'static str) -> Error {
        Error::InvalidTransition {
            action,
            state: self.state.to_string(),
        }
    }
}
