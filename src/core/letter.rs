//! A single guessable letter
//!
//! A `Letter` is always a member of the alphabet, so code holding one never has
//! to re-check membership.

use crate::alphabet::{self, LETTERS};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One value from the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Letter(char);

/// Error type for invalid letters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("expected exactly one letter, got {0} characters")]
    InvalidLength(usize),
    #[error("'{0}' is not a letter from a to z")]
    NotInAlphabet(char),
}

impl Letter {
    /// Create a letter from a character
    ///
    /// Only the lower-case letters `a..=z` are accepted; there is no case folding.
    ///
    /// # Errors
    /// Returns `LetterError::NotInAlphabet` for anything outside `a..=z`.
    ///
    /// # Examples
    /// ```
    /// use letterle::core::Letter;
    ///
    /// assert_eq!(Letter::new('q').unwrap().as_char(), 'q');
    /// assert!(Letter::new('Q').is_err());
    /// assert!(Letter::new('7').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self, LetterError> {
        if alphabet::index_of(c).is_some() {
            Ok(Self(c))
        } else {
            Err(LetterError::NotInAlphabet(c))
        }
    }

    /// Parse a letter from a one-character string
    ///
    /// # Errors
    /// Returns an error if the input is not exactly one alphabet letter.
    pub fn parse(text: &str) -> Result<Self, LetterError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(LetterError::InvalidLength(text.chars().count())),
        }
    }

    /// Parse typed player input: surrounding whitespace is ignored and ASCII
    /// upper case is folded to lower case
    ///
    /// # Errors
    /// Returns an error if the trimmed input is not exactly one alphabet letter.
    ///
    /// # Examples
    /// ```
    /// use letterle::core::Letter;
    ///
    /// assert_eq!(Letter::from_input(" K\n").unwrap().as_char(), 'k');
    /// assert!(Letter::from_input("ab").is_err());
    /// ```
    pub fn from_input(text: &str) -> Result<Self, LetterError> {
        Self::parse(&text.trim().to_ascii_lowercase())
    }

    /// Pick a letter uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        // LETTERS is non-empty, so `choose` always yields a value
        Self(LETTERS.choose(rng).copied().unwrap_or(LETTERS[0]))
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Position in the alphabetical ordering (0-25)
    #[must_use]
    pub fn index(self) -> usize {
        alphabet::index_of(self.0).unwrap_or_default()
    }

    /// Absolute distance between two letters in the alphabetical ordering
    #[must_use]
    pub fn distance(self, other: Self) -> usize {
        self.index().abs_diff(other.index())
    }

    /// Every letter, alphabetical
    pub fn all() -> impl Iterator<Item = Self> {
        LETTERS.iter().map(|&c| Self(c))
    }

    /// Every letter, in keyboard order
    pub fn keyboard() -> impl Iterator<Item = Self> {
        alphabet::KEYBOARD_LAYOUT.iter().map(|&c| Self(c))
    }
}

impl TryFrom<String> for Letter {
    type Error = LetterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Letter> for String {
    fn from(letter: Letter) -> Self {
        letter.0.to_string()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Letter {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn letter_creation_valid() {
        let letter = Letter::new('m').unwrap();
        assert_eq!(letter.as_char(), 'm');
        assert_eq!(letter.index(), 12);
    }

    #[test]
    fn letter_creation_rejects_uppercase() {
        assert_eq!(Letter::new('M'), Err(LetterError::NotInAlphabet('M')));
        assert!(Letter::parse("M").is_err());
    }

    #[test]
    fn letter_from_input_folds_case_and_whitespace() {
        assert_eq!(Letter::from_input(" M ").unwrap(), Letter::new('m').unwrap());
        assert_eq!(Letter::from_input("7"), Err(LetterError::NotInAlphabet('7')));
        assert_eq!(Letter::from_input("  "), Err(LetterError::InvalidLength(0)));
    }

    #[test]
    fn letter_creation_invalid_characters() {
        assert_eq!(Letter::new('3'), Err(LetterError::NotInAlphabet('3')));
        assert!(Letter::new(' ').is_err());
        assert!(Letter::new('é').is_err());
        assert!(Letter::new('!').is_err());
    }

    #[test]
    fn letter_parse_rejects_wrong_length() {
        assert_eq!(Letter::parse("k").unwrap().as_char(), 'k');
        assert_eq!(Letter::parse(" k "), Err(LetterError::InvalidLength(3)));
        assert_eq!(Letter::parse(""), Err(LetterError::InvalidLength(0)));
        assert_eq!(Letter::parse("ab"), Err(LetterError::InvalidLength(2)));
    }

    #[test]
    fn letter_distance_is_symmetric() {
        let a = Letter::new('a').unwrap();
        let d = Letter::new('d').unwrap();
        assert_eq!(a.distance(d), 3);
        assert_eq!(d.distance(a), 3);
        assert_eq!(a.distance(a), 0);
    }

    #[test]
    fn letter_random_stays_in_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let letter = Letter::random(&mut rng);
            assert!(LETTERS.contains(&letter.as_char()));
        }
    }

    #[test]
    fn letter_serializes_as_string() {
        let letter = Letter::new('x').unwrap();
        assert_eq!(serde_json::to_string(&letter).unwrap(), "\"x\"");
        let back: Letter = serde_json::from_str("\"x\"").unwrap();
        assert_eq!(back, letter);
        assert!(serde_json::from_str::<Letter>("\"xy\"").is_err());
        assert!(serde_json::from_str::<Letter>("\"?\"").is_err());
        assert!(serde_json::from_str::<Letter>("\"X\"").is_err());
    }

    #[test]
    fn letter_orderings_cover_alphabet() {
        assert_eq!(Letter::all().count(), 26);
        assert_eq!(Letter::keyboard().next().unwrap().as_char(), 'q');
    }

    #[test]
    fn letter_display() {
        assert_eq!(format!("{}", Letter::new('b').unwrap()), "b");
    }
}
