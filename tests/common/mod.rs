//! Shared fixtures for integration tests.
#![allow(dead_code)]

use rust_splendor::cards::{Card, CardCatalog};
use rust_splendor::core::{Color, GameConfig, GameState, GemVector, PlayerId};
use rust_splendor::games::splendor::{Splendor, SplendorBuilder};

use Color::*;

/// Three tiers in deck order. With no shuffle, the last card of a tier is
/// slot 1, the one before it slot 2, and so on; slot 0 is the fifth from
/// the end.
pub fn tiers() -> [Vec<Card>; 3] {
    let level1 = vec![
        Card::new(0, Red, [0, 0, 2, 0, 1]),
        Card::new(0, Blue, [1, 0, 0, 0, 2]),
        Card::new(0, Black, [0, 0, 3, 0, 0]),
        Card::new(0, White, [0, 2, 2, 0, 1]),
        Card::new(0, Green, [2, 1, 0, 0, 0]),
        Card::new(0, Red, [3, 0, 0, 0, 0]),
        // slot 4
        Card::new(0, Green, [1, 1, 1, 1, 0]),
        // slot 3
        Card::new(1, Blue, [0, 0, 0, 0, 4]),
        // slot 2
        Card::new(0, White, [0, 3, 0, 0, 0]),
        // slot 1
        Card::new(0, Black, [2, 1, 0, 0, 0]),
    ];
    let level2 = vec![
        Card::new(1, White, [0, 0, 3, 2, 2]),
        Card::new(2, Blue, [0, 5, 0, 0, 0]),
        Card::new(1, Green, [3, 0, 2, 3, 0]),
        Card::new(2, Red, [1, 4, 2, 0, 0]),
        Card::new(3, Black, [0, 0, 0, 0, 6]),
        Card::new(2, White, [0, 0, 0, 5, 3]),
        Card::new(1, Red, [2, 0, 0, 2, 3]),
        Card::new(2, Green, [0, 2, 4, 1, 0]),
    ];
    let level3 = vec![
        Card::new(4, White, [0, 0, 0, 0, 7]),
        Card::new(3, Blue, [3, 0, 3, 3, 5]),
        Card::new(5, Green, [0, 7, 3, 0, 0]),
        Card::new(4, Red, [0, 0, 7, 0, 0]),
        Card::new(3, Black, [3, 5, 3, 3, 0]),
        Card::new(4, Blue, [7, 0, 0, 0, 0]),
        Card::new(5, Red, [0, 0, 3, 7, 0]),
        Card::new(4, Black, [0, 0, 0, 6, 3]),
    ];
    [level1, level2, level3]
}

pub fn catalog() -> CardCatalog {
    CardCatalog::new(tiers()).unwrap()
}

/// Unshuffled game with default rules.
pub fn game() -> (Splendor, GameState) {
    game_with(GameConfig::default().with_shuffle(false))
}

pub fn game_with(config: GameConfig) -> (Splendor, GameState) {
    SplendorBuilder::new().config(config).build(&catalog()).unwrap()
}

/// Move gems from the pool to a player, keeping the total in play fixed.
pub fn give(state: &mut GameState, player: PlayerId, gems: [u8; 6]) {
    let gems = GemVector::new(gems);
    state.board.withdraw(&gems);
    state.players[player].deposit(&gems);
}
