//! Day-window arithmetic
//!
//! A window lasts until the last millisecond of the local calendar day it was
//! created on. Comparisons are made on calendar dates in the caller's offset,
//! never on exact timestamps.

use chrono::{DateTime, FixedOffset, Local, TimeZone};

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the machine's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock frozen at one instant, for tests and replays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Last instant (23:59:59.999) of the calendar day containing `now`
#[must_use]
pub fn end_of_day(now: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    now.date_naive()
        .and_hms_milli_opt(23, 59, 59, 999)
        .and_then(|last| now.offset().from_local_datetime(&last).single())
        .unwrap_or(now)
}

/// Whether `timestamp` falls on the same calendar day as `now`, seen from `now`'s offset
#[must_use]
pub fn is_same_day(timestamp: DateTime<FixedOffset>, now: DateTime<FixedOffset>) -> bool {
    timestamp.with_timezone(now.offset()).date_naive() == now.date_naive()
}

/// Time left until `expires_at`, formatted `HH:MM:SS`
///
/// Returns `None` once the window has expired. Purely advisory: nothing in the
/// game state changes when it reaches zero.
#[must_use]
pub fn countdown(expires_at: DateTime<FixedOffset>, now: DateTime<FixedOffset>) -> Option<String> {
    let remaining = expires_at.signed_duration_since(now);
    if remaining.num_milliseconds() <= 0 {
        return None;
    }

    let total = remaining.num_seconds();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    Some(format!("{hours:02}:{minutes:02}:{seconds:02}"))
}
