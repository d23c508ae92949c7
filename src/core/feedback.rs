//! Per-letter feedback classification
//!
//! Every letter on the board is in exactly one of four states:
//! - `Unguessed`: not tried yet (and not the answer)
//! - `Far`: tried, and more than the range threshold away from the answer
//! - `Close`: tried, and within the range threshold of the answer
//! - `Correct`: the answer itself
//!
//! Distance is measured in the alphabetical ordering, never the keyboard one.

use super::{Letter, Theme};

/// Default number of alphabet positions either side of the answer that count as close
pub const DEFAULT_RANGE_THRESHOLD: usize = 2;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Unguessed,
    Far,
    Close,
    Correct,
}

impl Feedback {
    /// Classify `letter` against the answer and the letters guessed so far
    ///
    /// # Examples
    /// ```
    /// use letterle::core::{Feedback, Letter};
    ///
    /// let answer = Letter::new('m').unwrap();
    /// let guessed = [Letter::new('k').unwrap(), Letter::new('a').unwrap()];
    ///
    /// assert_eq!(Feedback::classify(answer, answer, &guessed, 2), Feedback::Correct);
    /// assert_eq!(Feedback::classify(guessed[0], answer, &guessed, 2), Feedback::Close);
    /// assert_eq!(Feedback::classify(guessed[1], answer, &guessed, 2), Feedback::Far);
    /// assert_eq!(
    ///     Feedback::classify(Letter::new('n').unwrap(), answer, &guessed, 2),
    ///     Feedback::Unguessed
    /// );
    /// ```
    #[must_use]
    pub fn classify(letter: Letter, answer: Letter, options: &[Letter], threshold: usize) -> Self {
        if letter == answer {
            Self::Correct
        } else if !options.contains(&letter) {
            Self::Unguessed
        } else if letter.distance(answer) <= threshold {
            Self::Close
        } else {
            Self::Far
        }
    }

    /// Share-text glyph; unguessed squares follow the theme
    #[must_use]
    pub const fn glyph(self, theme: Theme) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Close => '🟨',
            Self::Far => '🔳',
            Self::Unguessed => match theme {
                Theme::Light => '⬜',
                Theme::Dark => '⬛',
            },
        }
    }
}
