use std::collections::BTreeSet;

use crate::media::{DeletionRequest, MediaItem};

/// Ids of the media items currently marked for a bulk action.
///
/// Ids are kept even when they no longer appear in the latest listing; such
/// stale ids simply have no visual effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id when absent, remove it when present.
    /// Returns whether the id is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Mark the id as selected. Returns `false` if it already was.
    pub fn select(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Number of selected ids that appear in `items`.
    pub fn visible_count(&self, items: &[MediaItem]) -> usize {
        items.iter().filter(|item| self.contains(&item.id)).count()
    }

    pub fn snapshot(&self) -> DeletionRequest {
        DeletionRequest::new(self.ids.iter().cloned())
    }
}

impl<S: AsRef<str>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(|id| id.as_ref().to_string()).collect(),
        }
    }
}
