//! Theme command

use crate::clock::Clock;
use crate::core::Theme;
use crate::game::{GameError, GameStore};
use crate::storage::Storage;
use rand::Rng;

/// Set the theme, or toggle it when none is given; returns the theme now in effect
///
/// # Errors
/// Returns an error if the session cannot be persisted.
pub fn apply_theme<S: Storage, C: Clock, R: Rng>(
    store: &mut GameStore<S, C, R>,
    theme: Option<Theme>,
) -> Result<Theme, GameError> {
    match theme {
        Some(theme) => store.set_theme(theme)?,
        None => store.toggle_theme()?,
    }
    Ok(store.session().theme)
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
    fn toggle_then_set() {
        let now = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z").unwrap();
        let mut store = GameStore::new(
            MemoryStorage::new(),
            FixedClock(now),
            StdRng::seed_from_u64(8),
            GameConfig::default(),
        );
        store.start().unwrap();

        assert_eq!(apply_theme(&mut store, None).unwrap(), Theme::Dark);
        assert_eq!(apply_theme(&mut store, Some(Theme::Dark)).unwrap(), Theme::Dark);
        assert_eq!(apply_theme(&mut store, None).unwrap(), Theme::Light);

        let record = store.storage().get("localData").unwrap().unwrap();
        assert_eq!(Session::decode(&record).unwrap().theme, Theme::Light);
    }
}
