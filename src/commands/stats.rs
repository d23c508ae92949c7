//! Statistics command

use crate::clock::Clock;
use crate::core::Status;
use crate::game::GameStore;
use crate::stats::Statistics;
use crate::storage::Storage;
use rand::Rng;

/// Everything the stats view shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    pub statistics: Statistics,
    pub status: Status,
    /// `HH:MM:SS` until the next window, `None` once expired
    pub countdown: Option<String>,
}

#[must_use]
pub fn stats_report<S: Storage, C: Clock, R: Rng>(store: &GameStore<S, C, R>) -> StatsReport {
    StatsReport {
        statistics: store.statistics(),
        status: store.session().status,
        countdown: store.countdown(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::GameConfig;
    use crate::core::Session;
    use crate::storage::MemoryStorage;
    use chrono::DateTime;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn report_reflects_resumed_history() {
        let now = DateTime::parse_from_rfc3339("2024-05-01T09:30:00+00:00").unwrap();
        let mut session = Session::generate(&mut StdRng::seed_from_u64(1), now);
        session.history = vec![3, 5];
        let storage = MemoryStorage::with_record("localData", &session.encode().unwrap());

        let mut store = GameStore::new(
            storage,
            FixedClock(now),
            StdRng::seed_from_u64(2),
            GameConfig::default(),
        );
        store.start().unwrap();

        let report = stats_report(&store);
        assert_eq!(report.statistics.played, 2);
        assert_eq!(report.statistics.best, Some(3));
        assert_eq!(report.statistics.average, Some(4));
        assert_eq!(report.status, Status::Loaded);
        assert_eq!(report.countdown.as_deref(), Some("14:29:59"));
    }
}
