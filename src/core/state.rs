//! Game state.
//!
//! ## Phase
//!
//! A turn is usually a single action, but two actions open a sub-turn for
//! the same player:
//!
//! - **Spending**: a purchase made while holding gold. The player picks gold
//!   substitutions one at a time, then ends spending to pay the rest.
//! - **Return**: a take that left the player over the gem limit. The player
//!   returns one gem at a time until back under it.
//!
//! The card being bought and the substitutions made so far live inside
//! `Phase::Spending` and nowhere else.
//!
//! ## GameState
//!
//! Everything needed to continue a game: board, both players, whose turn it
//! is, the phase, the result once decided, and the action history. Cards and
//! history use `im` vectors, so cloning a state for search is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionId, ActionRecord};
use super::gems::GemVector;
use super::player::{Player, PlayerId, PlayerMap};
use crate::board::Board;
use crate::cards::Card;
use crate::error::SnapshotError;
use crate::rules::GameResult;

/// Turn phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Normal,
    /// Paying for `card`; `paid` counts gold substituted per color so far.
    Spending { card: Card, paid: GemVector },
    Return,
}

impl Phase {
    #[must_use]
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Normal => PhaseKind::Normal,
            Phase::Spending { .. } => PhaseKind::Spending,
            Phase::Return => PhaseKind::Return,
        }
    }

    /// The in-flight purchase.
    ///
    /// Panics outside the spending phase.
    #[must_use]
    pub fn spending(&self) -> (&Card, &GemVector) {
        match self {
            Phase::Spending { card, paid } => (card, paid),
            other => panic!("no purchase in flight during the {} phase", other.kind()),
        }
    }
}

/// Field-less mirror of `Phase` for errors and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    Normal,
    Spending,
    Return,
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PhaseKind::Normal => "normal",
            PhaseKind::Spending => "spending",
            PhaseKind::Return => "return",
        };
        f.write_str(name)
    }
}

/// Who acts next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Player(PlayerId),
    Terminal,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Player whose turn it is.
    pub current: PlayerId,

    pub phase: Phase,

    pub board: Board,

    pub players: PlayerMap<Player>,

    /// Set once the game has ended; the state is frozen from then on.
    pub result: Option<GameResult>,

    /// Incremented every time the turn passes (starts at 1).
    pub turn_number: u32,

    /// Action sequence within the current turn.
    pub action_sequence: u32,

    /// Every applied action, in order.
    pub history: Vector<ActionRecord>,

    /// Total gems in play per kind. Fixed for the whole game.
    pub supply: GemVector,
}

impl GameState {
    /// Start a game on `board` with two empty players, Player 0 to act.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let supply = *board.pool();
        Self {
            current: PlayerId::new(0),
            phase: Phase::Normal,
            board,
            players: PlayerMap::with_default(),
            result: None,
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
            supply,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    /// Who acts next, or `Terminal` once the game is over.
    #[must_use]
    pub fn turn(&self) -> Turn {
        if self.is_terminal() {
            Turn::Terminal
        } else {
            Turn::Player(self.current)
        }
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current]
    }

    /// Pool plus both players' holdings.
    #[must_use]
    pub fn total_gems(&self) -> GemVector {
        let mut total = *self.board.pool();
        for (_, player) in self.players.iter() {
            total.add(player.holdings());
        }
        total
    }

    /// Panics if any gem was created or destroyed.
    pub fn check_conservation(&self) {
        let total = self.total_gems();
        assert_eq!(
            total, self.supply,
            "gem conservation violated: pool + players = {} but supply = {}",
            total, self.supply
        );
    }

    /// Hand the turn to the other player.
    pub fn pass_turn(&mut self) {
        self.current = self.current.opponent();
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    /// Append an applied action to the history.
    pub fn record_action(&mut self, id: ActionId, action: Action) {
        let record = ActionRecord::new(self.current, id, action, self.turn_number, self.action_sequence);
        self.history.push_back(record);
        self.action_sequence += 1;
    }

    /// Encode the state as bytes.
    ///
    /// Equal states give equal bytes, so replays can be compared directly.
    pub fn snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by `snapshot`.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "turn {} | {} to act | phase {}", self.turn_number, self.current, self.phase.kind())?;
        if let Phase::Spending { card, paid } = &self.phase {
            write!(f, " (buying {card}, gold paid {})", paid.colors_only())?;
        }
        if let Some(result) = &self.result {
            write!(f, " | {result}")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.board)?;
        for (id, player) in self.players.iter() {
            writeln!(f, "{id}:")?;
            write!(f, "{player}")?;
        }
        Ok(())
    }
}
