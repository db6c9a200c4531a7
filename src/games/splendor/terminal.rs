//! End-of-game detection and rewards.

use log::{debug, info};

use crate::core::action::ActionCatalog;
use crate::core::config::{GameConfig, RewardConfig};
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::rules::GameResult;

use super::legal::legal_actions;

/// Decide whether the game ended after `actor` moved.
///
/// Checked in order: `actor` reached the winning score; a tier ran low on
/// cards; the player now on turn cannot move. A stuck player's turn is
/// skipped once, and if the other player cannot move either the game is a
/// draw.
pub(crate) fn resolve(
    actions: &ActionCatalog,
    config: &GameConfig,
    state: &mut GameState,
    actor: PlayerId,
) {
    let points = state.player(actor).points();
    if points >= config.win_points {
        info!("{actor} wins with {points} points on turn {}", state.turn_number);
        state.result = Some(GameResult::Winner(actor));
        return;
    }

    if !state.board.enough_cards(config.min_tier_cards) {
        info!("draw: a tier fell below {} cards", config.min_tier_cards);
        state.result = Some(GameResult::Draw);
        return;
    }

    if legal_actions(actions, config, state).is_empty() {
        let stuck = state.current;
        state.current_player_mut().record_pass();
        state.pass_turn();
        debug!("{stuck} has no legal action, turn passes to {}", state.current);

        if legal_actions(actions, config, state).is_empty() {
            info!("draw: neither player can move");
            state.result = Some(GameResult::Draw);
        }
    }
}

/// Zero-sum reward from Player 0's point of view, negated for Player 1.
pub(crate) fn returns(reward: &RewardConfig, state: &GameState) -> [f64; 2] {
    let p0 = state.player(PlayerId::new(0));
    let p1 = state.player(PlayerId::new(1));

    let points = f64::from(p0.points()) - f64::from(p1.points());
    let cards = p0.purchased().len() as f64 - p1.purchased().len() as f64;
    let win = match state.result {
        Some(GameResult::Winner(p)) if p == PlayerId::new(0) => 1.0,
        Some(GameResult::Winner(_)) => -1.0,
        _ => 0.0,
    };

    let r = reward.point_weight * points + reward.bonus_weight * cards + reward.win_bonus * win;
    [r, -r]
}
