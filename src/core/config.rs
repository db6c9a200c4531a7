//! Game configuration.
//!
//! `GameConfig` holds every tunable rule constant. The defaults reproduce
//! the standard two-player game; hosts override individual fields with the
//! `with_*` builders.

use serde::{Deserialize, Serialize};

use crate::error::ConstructionError;

/// Smallest tier size for which the face-down slot always exists.
pub const MIN_TIER_CARDS: usize = 5;

/// Weights for the zero-sum reward returned to the host.
///
/// `r0 = point_weight * (pts0 - pts1) + bonus_weight * (cards0 - cards1)
///      + win_bonus * (+1 / -1 once a winner is decided)`, `r1 = -r0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    pub point_weight: f64,
    pub bonus_weight: f64,
    pub win_bonus: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            point_weight: 1.0,
            bonus_weight: 0.25,
            win_bonus: 10.0,
        }
    }
}

impl RewardConfig {
    #[must_use]
    pub fn with_point_weight(mut self, weight: f64) -> Self {
        self.point_weight = weight;
        self
    }

    #[must_use]
    pub fn with_bonus_weight(mut self, weight: f64) -> Self {
        self.bonus_weight = weight;
        self
    }

    #[must_use]
    pub fn with_win_bonus(mut self, bonus: f64) -> Self {
        self.win_bonus = bonus;
        self
    }
}

/// Complete rule configuration.
///
/// ## Example
///
/// ```
/// use rust_splendor::core::GameConfig;
///
/// let config = GameConfig::default().with_win_points(10).with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_player_gems, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Points needed to win.
    pub win_points: u32,

    /// Most gems a player may hold at the end of a turn.
    pub max_player_gems: u32,

    /// Starting pool count for each color.
    pub starting_colors: u8,

    /// Starting pool count for gold.
    pub starting_gold: u8,

    /// Pool count a color needs before two of it may be taken.
    pub take_two_minimum: u8,

    /// The game is drawn once any tier falls below this many cards.
    pub min_tier_cards: usize,

    /// Shuffle each tier once at construction.
    pub shuffle: bool,

    /// Seed for the construction shuffle.
    pub seed: u64,

    pub reward: RewardConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_points: 15,
            max_player_gems: 10,
            starting_colors: 4,
            starting_gold: 5,
            take_two_minimum: 4,
            min_tier_cards: MIN_TIER_CARDS,
            shuffle: true,
            seed: 42,
            reward: RewardConfig::default(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_win_points(mut self, points: u32) -> Self {
        self.win_points = points;
        self
    }

    #[must_use]
    pub fn with_max_player_gems(mut self, max: u32) -> Self {
        self.max_player_gems = max;
        self
    }

    /// Set the starting pool: `colors` of each color and `gold` gold.
    #[must_use]
    pub fn with_starting_pool(mut self, colors: u8, gold: u8) -> Self {
        self.starting_colors = colors;
        self.starting_gold = gold;
        self
    }

    #[must_use]
    pub fn with_take_two_minimum(mut self, minimum: u8) -> Self {
        self.take_two_minimum = minimum;
        self
    }

    #[must_use]
    pub fn with_min_tier_cards(mut self, min: usize) -> Self {
        self.min_tier_cards = min;
        self
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_reward(mut self, reward: RewardConfig) -> Self {
        self.reward = reward;
        self
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        if self.min_tier_cards < MIN_TIER_CARDS {
            return Err(ConstructionError::InvalidConfig(format!(
                "min_tier_cards must be at least {MIN_TIER_CARDS}, got {}",
                self.min_tier_cards
            )));
        }
        if self.win_points == 0 {
            return Err(ConstructionError::InvalidConfig(
                "win_points must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.win_points, 15);
        assert_eq!(config.max_player_gems, 10);
        assert_eq!(config.starting_colors, 4);
        assert_eq!(config.starting_gold, 5);
        assert_eq!(config.take_two_minimum, 4);
        assert_eq!(config.min_tier_cards, 5);
        assert!(config.shuffle);
        assert_eq!(config.reward, RewardConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default()
            .with_win_points(21)
            .with_starting_pool(7, 5)
            .with_shuffle(false)
            .with_seed(9)
            .with_reward(RewardConfig::default().with_win_bonus(1.0));

        assert_eq!(config.win_points, 21);
        assert_eq!(config.starting_colors, 7);
        assert!(!config.shuffle);
        assert_eq!(config.seed, 9);
        assert_eq!(config.reward.win_bonus, 1.0);
        assert_eq!(config.reward.point_weight, 1.0);
    }

    #[test]
    fn test_validate_rejects_small_tiers() {
        let err = GameConfig::default().with_min_tier_cards(4).validate();
        assert!(matches!(err, Err(ConstructionError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_zero_win_points() {
        let err = GameConfig::default().with_win_points(0).validate();
        assert!(matches!(err, Err(ConstructionError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::default().with_seed(1234);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
