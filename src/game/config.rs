//! Game configuration: level range and life budget

use std::fmt;

/// Configuration for one game session
///
/// Levels are word lengths: the game starts with `start_level`-letter words
/// and is won when a `end_level`-letter word is solved. Lives are shared
/// across the whole climb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub start_level: usize,
    pub end_level: usize,
    pub max_lives: u32,
}

/// Error type for invalid configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    LevelRange { start: usize, end: usize },
    ZeroLives,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LevelRange { start, end } => {
                write!(f, "Invalid level range: {start} through {end}")
            }
            Self::ZeroLives => write!(f, "At least one life is required"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Word length of the first level
    pub const DEFAULT_START_LEVEL: usize = 5;
    /// Word length of the final level
    pub const DEFAULT_END_LEVEL: usize = 9;
    /// Guesses shared across the whole session
    pub const DEFAULT_MAX_LIVES: u32 = 10;

    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if `start_level` is zero, the range is inverted,
    /// or `max_lives` is zero.
    pub fn new(start_level: usize, end_level: usize, max_lives: u32) -> Result<Self, ConfigError> {
        if start_level == 0 || end_level < start_level {
            return Err(ConfigError::LevelRange {
                start: start_level,
                end: end_level,
            });
        }
        if max_lives == 0 {
            return Err(ConfigError::ZeroLives);
        }
        Ok(Self {
            start_level,
            end_level,
            max_lives,
        })
    }

    /// One-based level number for display ("Level 2" for the 6-letter level
    /// in a 5-to-9 game)
    #[must_use]
    pub fn level_number(&self, level: usize) -> usize {
        level - self.start_level + 1
    }

    /// Number of levels in the climb
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.end_level - self.start_level + 1
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_level: Self::DEFAULT_START_LEVEL,
            end_level: Self::DEFAULT_END_LEVEL,
            max_lives: Self::DEFAULT_MAX_LIVES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.start_level, 5);
        assert_eq!(config.end_level, 9);
        assert_eq!(config.max_lives, 10);
        assert_eq!(config.level_count(), 5);
    }

    #[test]
    fn config_validates_level_range() {
        assert!(matches!(
            GameConfig::new(0, 9, 10),
            Err(ConfigError::LevelRange { .. })
        ));
        assert!(matches!(
            GameConfig::new(7, 5, 10),
            Err(ConfigError::LevelRange { .. })
        ));
    }

    #[test]
    fn config_validates_lives() {
        assert!(matches!(
            GameConfig::new(5, 9, 0),
            Err(ConfigError::ZeroLives)
        ));
    }

    #[test]
    fn config_single_level_game_is_valid() {
        let config = GameConfig::new(5, 5, 3).unwrap();
        assert_eq!(config.level_count(), 1);
    }

    #[test]
    fn config_level_number_is_one_based() {
        let config = GameConfig::default();
        assert_eq!(config.level_number(5), 1);
        assert_eq!(config.level_number(9), 5);
    }
}
