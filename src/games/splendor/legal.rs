//! Legal-action generation.

use crate::core::action::{Action, ActionCatalog, ActionCategory, ActionId};
use crate::core::config::GameConfig;
use crate::core::gems::Gem;
use crate::core::state::{GameState, Phase};

const NORMAL_CATEGORIES: [ActionCategory; 5] = [
    ActionCategory::Reserve,
    ActionCategory::Purchase,
    ActionCategory::PurchaseReserve,
    ActionCategory::TakeThree,
    ActionCategory::TakeTwo,
];

/// Legal ids for the player on turn, ascending.
///
/// Categories are visited in id order and each category's ids are already
/// ascending, so the result needs no sort.
pub(crate) fn legal_actions(
    actions: &ActionCatalog,
    config: &GameConfig,
    state: &GameState,
) -> Vec<ActionId> {
    if state.is_terminal() {
        return Vec::new();
    }

    let categories: &[ActionCategory] = match state.phase {
        Phase::Normal => &NORMAL_CATEGORIES,
        Phase::Spending { .. } => &[ActionCategory::Spending],
        Phase::Return => &[ActionCategory::Return],
    };

    categories
        .iter()
        .flat_map(|&category| actions.ids(category))
        .copied()
        .filter(|&id| {
            actions
                .action(id)
                .is_some_and(|action| is_allowed(config, state, action))
        })
        .collect()
}

/// Whether `action` may be taken now. The caller has already matched the
/// action's category to the phase.
fn is_allowed(config: &GameConfig, state: &GameState, action: &Action) -> bool {
    let player = state.current_player();
    let board = &state.board;

    match *action {
        Action::Reserve { tier, slot } => {
            !player.reserve_limit() && board.card_at(usize::from(tier), slot).is_some()
        }
        Action::Purchase { tier, slot } => board
            .card_at(usize::from(tier), slot)
            .is_some_and(|card| player.can_purchase(card, true)),
        Action::PurchaseReserved { index } => player
            .reserved()
            .get(usize::from(index))
            .is_some_and(|card| player.can_purchase(card, true)),
        Action::TakeThree(colors) => colors.iter().all(|&c| board.pool()[c] >= 1),
        Action::TakeTwo(color) => board.pool()[color] >= config.take_two_minimum,
        Action::Return(gem) => player.holdings()[gem] >= 1,
        Action::SpendGold(color) => {
            let (card, paid) = state.phase.spending();
            let gold = player.holdings()[Gem::Gold];
            if gold == 0 || player.due(card, paid)[color] == 0 {
                return false;
            }
            // The payment must still be completable with the gold left.
            let mut after = *paid;
            after[color] += 1;
            player.shortfall(card, &after).sum() <= u32::from(gold - 1)
        }
        Action::EndSpending => {
            let (card, paid) = state.phase.spending();
            player.shortfall(card, paid).is_zero()
        }
    }
}
