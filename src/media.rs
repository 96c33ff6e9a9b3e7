//! Wire and domain types shared by the repository client and the workflow.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static VIDEO_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(mp4|webm|ogg|mov)$").expect("video label pattern is valid")
});

/// A single image or video entry as returned by `GET /images`.
///
/// Field names on the wire follow the backend (`src`, `alt`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    /// Fetchable URI of the media file.
    #[serde(rename = "src")]
    pub locator: String,
    /// Display name, usually the file name.
    #[serde(rename = "alt")]
    pub label: String,
    #[serde(default)]
    pub directory: String,
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

impl MediaItem {
    pub fn kind(&self) -> MediaKind {
        MediaKind::from_label(&self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Infer the kind from the label's extension; anything that is not a
    /// known video extension counts as an image.
    pub fn from_label(label: &str) -> Self {
        if VIDEO_LABEL.is_match(label) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the selected ids at the moment deletion is confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionRequest {
    #[serde(rename = "imageIds")]
    ids: Vec<String>,
}

impl DeletionRequest {
    pub fn new(ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Body of a `200` answer to `DELETE /images`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
