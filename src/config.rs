//! Game configuration

use crate::core::DEFAULT_RANGE_THRESHOLD;
use crate::storage::DEFAULT_STORAGE_KEY;

/// Settings that shape a game without being part of its state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Key the session record is stored under
    pub storage_key: String,
    /// Alphabet distance within which a guess counts as close
    pub range_threshold: usize,
    /// First word of the share-text title line
    pub title: String,
    /// Link included in the share text
    pub site: String,
    /// System preference for a dark theme, applied once on first run
    pub prefers_dark: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            range_threshold: DEFAULT_RANGE_THRESHOLD,
            title: "Find Phunk".to_string(),
            site: "https://ajames.dev/find-phunk".to_string(),
            prefers_dark: false,
        }
    }
}

/// Guess whether the terminal has a dark background
///
/// Reads the `COLORFGBG` convention (`"<fg>;<bg>"`), where background colours
/// 0-6 and 8 are dark. Without the hint, assume light.
#[must_use]
pub fn detect_dark_preference() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .is_some_and(colorfgbg_is_dark)
}

fn colorfgbg_is_dark(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg <= 6 || bg == 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_game() {
        let config = GameConfig::default();
        assert_eq!(config.storage_key, "localData");
        assert_eq!(config.range_threshold, 2);
        assert_eq!(config.title, "Find Phunk");
        assert!(!config.prefers_dark);
    }

    #[test]
    fn colorfgbg_parsing() {
        assert!(colorfgbg_is_dark("15;0"));
        assert!(colorfgbg_is_dark("15;default;0"));
        assert!(colorfgbg_is_dark("7;8"));
        assert!(!colorfgbg_is_dark("0;15"));
        assert!(!colorfgbg_is_dark("0;7"));
        assert!(!colorfgbg_is_dark("garbage"));
        assert!(!colorfgbg_is_dark(""));
    }
}
