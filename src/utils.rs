//! Utility functions for user interaction and common operations.

/// `image` or `images`, for counts in user-facing messages.
pub fn pluralize_images(count: usize) -> &'static str {
    if count == 1 { "image" } else { "images" }
}

/// Format deletion confirmation message with the labels about to go
pub fn format_deletion_message(labels: &[String]) -> String {
    let mut message = format!(
        "Delete {} {}? This cannot be undone.\n",
        labels.len(),
        pluralize_images(labels.len())
    );
    for label in labels.iter().take(5) {
        message.push_str(&format!("  {}\n", label));
    }
    if labels.len() > 5 {
        message.push_str(&format!("  ... and {} more\n", labels.len() - 5));
    }
    message.push_str("Continue?");
    message
}
