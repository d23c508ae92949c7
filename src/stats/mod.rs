//! Statistics derived from the completed-window history
//!
//! Everything here is a pure function of the session's fields; nothing is
//! cached or stored.

mod share;

pub use share::{ShareConfig, share_text};

use rustc_hash::FxHashMap;

/// Fewest attempts needed for any completed window
#[must_use]
pub fn best(history: &[u32]) -> Option<u32> {
    history.iter().copied().min()
}

/// Mean attempts over completed windows, rounded half up
///
/// # Examples
/// ```
/// use letterle::stats::average;
///
/// assert_eq!(average(&[]), None);
/// assert_eq!(average(&[3, 4]), Some(4)); // 3.5 rounds up
/// assert_eq!(average(&[1, 2, 2]), Some(2));
/// ```
#[must_use]
pub fn average(history: &[u32]) -> Option<u32> {
    if history.is_empty() {
        return None;
    }
    let count = history.len() as u64;
    let sum: u64 = history.iter().map(|&n| u64::from(n)).sum();
    // floor(sum / count + 1/2) without floating point
    u32::try_from((2 * sum + count) / (2 * count)).ok()
}

/// How many windows were completed in each attempt count
#[must_use]
pub fn distribution(history: &[u32]) -> FxHashMap<u32, usize> {
    let mut counts = FxHashMap::default();
    for &attempts in history {
        *counts.entry(attempts).or_insert(0) += 1;
    }
    counts
}

/// Snapshot of everything the stats views display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    /// Completed windows
    pub played: usize,
    /// Attempts used in the current window so far
    pub today: u32,
    pub best: Option<u32>,
    pub average: Option<u32>,
    /// `(attempts, windows)` pairs, ascending by attempts
    pub distribution: Vec<(u32, usize)>,
}

impl Statistics {
    #[must_use]
    pub fn from_history(history: &[u32], today: u32) -> Self {
        let mut distribution: Vec<(u32, usize)> = distribution(history).into_iter().collect();
        distribution.sort_unstable();

        Self {
            played: history.len(),
            today,
            best: best(history),
            average: average(history),
            distribution,
        }
    }

    /// Largest bucket, for scaling bar charts
    #[must_use]
    pub fn max_bucket(&self) -> usize {
        self.distribution
            .iter()
            .map(|&(_, count)| count)
            .max()
            .unwrap_or(0)
    }
}

/// Render an optional statistic, using `-` when there is no value
#[must_use]
pub fn display_value(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
