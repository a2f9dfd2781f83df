//! Formatting utilities for terminal output

use crate::core::FeedbackItem;

/// Format feedback as an emoji row of `width` squares
///
/// Positions with no feedback item are shown as `❔`.
#[must_use]
pub fn feedback_to_emoji(feedback: &[FeedbackItem], width: usize) -> String {
    (0..width)
        .map(|position| {
            feedback
                .iter()
                .find(|item| item.position == position)
                .map_or('❔', |item| item.state.to_emoji())
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
