//! The fixed alphabet of guessable values
//!
//! `LETTERS` is the canonical ordering used for distance-based feedback.
//! `KEYBOARD_LAYOUT` is the QWERTY ordering used only when laying letters out
//! on screen or in share text.

/// All guessable values, in alphabetical order
pub const LETTERS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// QWERTY ordering of the alphabet
pub const KEYBOARD_LAYOUT: [char; 26] = [
    'q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o', 'p', 'a', 's', 'd', 'f', 'g', 'h', 'j', 'k',
    'l', 'z', 'x', 'c', 'v', 'b', 'n', 'm',
];

/// Number of values in the alphabet
pub const ALPHABET_SIZE: usize = LETTERS.len();

/// Offsets at which `KEYBOARD_LAYOUT` wraps onto a new keyboard row
pub const KEYBOARD_ROW_BREAKS: [usize; 2] = [10, 19];

/// Position of `c` in the alphabetical ordering
#[must_use]
pub fn index_of(c: char) -> Option<usize> {
    LETTERS.iter().position(|&letter| letter == c)
}

/// Split `KEYBOARD_LAYOUT`-ordered items into the three keyboard rows
#[must_use]
pub fn keyboard_rows<T>(items: &[T]) -> [&[T]; 3] {
    let [first, second] = KEYBOARD_ROW_BREAKS;
    let first = first.min(items.len());
    let second = second.min(items.len());
    [&items[..first], &items[first..second], &items[second..]]
}
