//! `Splendor`: the rules engine host code talks to.

use log::info;

use crate::board::Board;
use crate::cards::CardCatalog;
use crate::core::action::{ActionCatalog, ActionId, NUM_ACTIONS};
use crate::core::config::GameConfig;
use crate::core::state::GameState;
use crate::error::{ConstructionError, GameError};
use crate::rules::{GameResult, RulesEngine};

use super::{apply, legal, terminal};

/// The game rules: configuration plus the fixed action catalog.
///
/// All game data lives in `GameState`; one `Splendor` can drive any number
/// of states built with the same config.
#[derive(Clone, Debug)]
pub struct Splendor {
    config: GameConfig,
    actions: ActionCatalog,
}

/// Builder for creating a `Splendor` game.
///
/// ## Example
///
/// ```
/// use rust_splendor::cards::{Card, CardCatalog};
/// use rust_splendor::core::Color;
/// use rust_splendor::games::splendor::SplendorBuilder;
/// use rust_splendor::rules::RulesEngine;
///
/// let tier = vec![Card::new(1, Color::Red, [2, 0, 0, 0, 0]); 8];
/// let catalog = CardCatalog::new([tier.clone(), tier.clone(), tier]).unwrap();
///
/// let (game, state) = SplendorBuilder::new().seed(7).build(&catalog).unwrap();
/// assert_eq!(game.num_distinct_actions(), 57);
/// assert!(!game.legal_actions(&state).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SplendorBuilder {
    config: GameConfig,
}

impl SplendorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.config.shuffle = shuffle;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Build the game and initial state.
    pub fn build(self, catalog: &CardCatalog) -> Result<(Splendor, GameState), ConstructionError> {
        self.config.validate()?;
        catalog.check_tier_sizes(self.config.min_tier_cards)?;

        let board = Board::new(catalog, &self.config);
        let state = GameState::new(board);
        info!(
            "new game: {} cards, seed {}, shuffle {}",
            catalog.len(),
            self.config.seed,
            self.config.shuffle
        );

        let game = Splendor {
            config: self.config,
            actions: ActionCatalog::new(),
        };
        Ok((game, state))
    }
}

impl Splendor {
    /// The id catalog.
    #[must_use]
    pub fn actions(&self) -> &ActionCatalog {
        &self.actions
    }

    /// Human-readable name of an id.
    #[must_use]
    pub fn action_to_string(&self, id: ActionId) -> String {
        match self.actions.action(id) {
            Some(action) => action.to_string(),
            None => format!("unknown {id}"),
        }
    }
}

impl RulesEngine for Splendor {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> Vec<ActionId> {
        legal::legal_actions(&self.actions, &self.config, state)
    }

    fn apply_action(&self, state: &mut GameState, action: ActionId) -> Result<(), GameError> {
        if state.is_terminal() {
            return Err(GameError::GameOver);
        }

        let invalid = GameError::InvalidAction {
            action,
            phase: state.phase.kind(),
        };
        if !self.is_legal(state, action) {
            return Err(invalid);
        }
        let decoded = *self.actions.action(action).ok_or(invalid)?;

        let actor = state.current;
        state.record_action(action, decoded);
        apply::apply(&self.config, state, decoded);
        state.check_conservation();
        terminal::resolve(&self.actions, &self.config, state, actor);
        Ok(())
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.result
    }

    fn returns(&self, state: &GameState) -> [f64; 2] {
        terminal::returns(&self.config.reward, state)
    }

    fn num_distinct_actions(&self) -> usize {
        NUM_ACTIONS
    }
}
