//! Single-guess command

use crate::clock::Clock;
use crate::core::{Feedback, Letter, LetterError};
use crate::game::{GameError, GameStore};
use crate::storage::Storage;
use rand::Rng;

/// What happened to a submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Recorded; the window continues
    Miss { letter: Letter, feedback: Feedback },
    /// Recorded and it was the answer
    Found { letter: Letter, attempts: u32 },
    AlreadyGuessed(Letter),
    Invalid(LetterError),
    /// The window is already complete
    Closed,
}

/// Validate and submit one guess
///
/// Rejections are reported in the outcome and leave the session untouched.
///
/// # Errors
/// Returns an error if the session cannot be persisted.
pub fn guess_letter<S: Storage, C: Clock, R: Rng>(
    store: &mut GameStore<S, C, R>,
    input: &str,
) -> Result<GuessOutcome, GameError> {
    let letter = match Letter::from_input(input) {
        Ok(letter) => letter,
        Err(e) => return Ok(GuessOutcome::Invalid(e)),
    };
    if store.session().is_complete() {
        return Ok(GuessOutcome::Closed);
    }
    if store.session().has_guessed(letter) {
        return Ok(GuessOutcome::AlreadyGuessed(letter));
    }

    store.guess(letter.as_char())?;

    Ok(match store.feedback(letter) {
        Feedback::Correct => GuessOutcome::Found {
            letter,
            attempts: store.session().attempts,
        },
        feedback => GuessOutcome::Miss { letter, feedback },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::GameConfig;
    use crate::storage::MemoryStorage;
    use chrono::DateTime;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn store() -> GameStore<MemoryStorage, FixedClock, StdRng> {
        let now = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z").unwrap();
        let mut store = GameStore::new(
            MemoryStorage::new(),
            FixedClock(now),
            StdRng::seed_from_u64(3),
            GameConfig::default(),
        );
        store.start().unwrap();
        store
    }

    fn miss(store: &GameStore<MemoryStorage, FixedClock, StdRng>) -> Letter {
        Letter::all()
            .find(|&l| l != store.session().answer)
            .unwrap()
    }

    #[test]
    fn miss_is_recorded() {
        let mut store = store();
        let letter = miss(&store);
        let outcome = guess_letter(&mut store, &letter.to_string()).unwrap();

        assert!(matches!(outcome, GuessOutcome::Miss { letter: l, .. } if l == letter));
        assert_eq!(store.session().attempts, 1);
    }

    #[test]
    fn uppercase_input_is_accepted() {
        let mut store = store();
        let letter = miss(&store);
        let upper = letter.as_char().to_ascii_uppercase().to_string();
        assert!(matches!(
            guess_letter(&mut store, &upper).unwrap(),
            GuessOutcome::Miss { .. }
        ));
    }

    #[test]
    fn repeat_is_rejected_without_change() {
        let mut store = store();
        let letter = miss(&store).to_string();
        guess_letter(&mut store, &letter).unwrap();
        let outcome = guess_letter(&mut store, &letter).unwrap();

        assert!(matches!(outcome, GuessOutcome::AlreadyGuessed(_)));
        assert_eq!(store.session().attempts, 1);
    }

    #[test]
    fn invalid_input_is_rejected() {
        let mut store = store();
        assert!(matches!(
            guess_letter(&mut store, "7").unwrap(),
            GuessOutcome::Invalid(LetterError::NotInAlphabet('7'))
        ));
        assert!(matches!(
            guess_letter(&mut store, "ab").unwrap(),
            GuessOutcome::Invalid(LetterError::InvalidLength(2))
        ));
        assert_eq!(store.session().attempts, 0);
    }

    #[test]
    fn answer_completes_and_closes_window() {
        let mut store = store();
        let answer = store.session().answer.to_string();
        assert_eq!(
            guess_letter(&mut store, &answer).unwrap(),
            GuessOutcome::Found {
                letter: store.session().answer,
                attempts: 1
            }
        );
        let other = miss(&store).to_string();
        assert_eq!(guess_letter(&mut store, &other).unwrap(), GuessOutcome::Closed);
    }
}
