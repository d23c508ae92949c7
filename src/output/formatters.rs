//! Formatting utilities for terminal output

use crate::core::Feedback;

/// How the how-to-play guide describes a feedback state
#[must_use]
pub const fn feedback_hint(feedback: Feedback) -> &'static str {
    match feedback {
        Feedback::Unguessed => "You haven't looked here",
        Feedback::Far => "I'm nowhere near",
        Feedback::Close => "You're getting close",
        Feedback::Correct => "You found me!",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one distribution bucket, scaled against the largest bucket
#[must_use]
pub fn distribution_bar(count: usize, max_bucket: usize, width: usize) -> String {
    create_progress_bar(count as f64, max_bucket as f64, width)
}
