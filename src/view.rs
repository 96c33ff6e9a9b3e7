//! Plain-text gallery rendering.

use std::fmt::Write;

use crate::media::{MediaItem, MediaKind};
use crate::selection::SelectionSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GallerySummary {
    pub images: usize,
    pub videos: usize,
    /// Selected ids present in the listing; stale ids are not counted.
    pub selected: usize,
}

impl GallerySummary {
    pub fn new(items: &[MediaItem], selection: &SelectionSet) -> Self {
        let videos = items
            .iter()
            .filter(|item| item.kind() == MediaKind::Video)
            .count();
        Self {
            images: items.len() - videos,
            videos,
            selected: selection.visible_count(items),
        }
    }

    pub fn header(&self) -> String {
        format!(
            "Media Gallery ({} images, {} videos)  {} selected",
            self.images, self.videos, self.selected
        )
    }
}

/// One entry as shown in selection prompts.
pub fn item_choice(item: &MediaItem) -> String {
    match &item.created_at {
        Some(created_at) => format!("{} [{}] ({created_at})", item.label, item.kind()),
        None => format!("{} [{}]", item.label, item.kind()),
    }
}

pub fn render_gallery(items: &[MediaItem], selection: &SelectionSet, long: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", GallerySummary::new(items, selection).header());

    if items.is_empty() {
        out.push_str("No media found\n");
        return out;
    }

    for item in items {
        let marker = if selection.contains(&item.id) {
            "[x]"
        } else {
            "[ ]"
        };
        let _ = write!(
            out,
            "{marker} {:<5} {}  (id: {})",
            item.kind().as_str(),
            item.label,
            item.id
        );
        if long {
            let _ = write!(out, "  {}", item.locator);
            if let Some(created_at) = &item.created_at {
                let _ = write!(out, "  {created_at}");
            }
        }
        out.push('\n');
    }
    out
}
