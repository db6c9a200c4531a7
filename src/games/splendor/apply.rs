//! The phase state machine.
//!
//! `apply` assumes the action is legal; the caller checks that first. Every
//! gem movement goes through `take_from_pool` / `give_to_pool`, which pair a
//! withdraw on one side with a deposit on the other so the total in play
//! never changes.

use log::{debug, trace};

use crate::cards::Card;
use crate::core::action::Action;
use crate::core::config::GameConfig;
use crate::core::gems::{Gem, GemVector};
use crate::core::state::{GameState, Phase};

pub(crate) fn apply(config: &GameConfig, state: &mut GameState, action: Action) {
    trace!("{} ({}): {}", state.current, state.phase.kind(), action);

    match action {
        Action::Reserve { tier, slot } => {
            if state.board.pool().gold() >= 1 {
                take_from_pool(state, &GemVector::single(Gem::Gold, 1));
            }
            let card = state.board.pop_card(usize::from(tier), slot);
            state.current_player_mut().reserve(card);
            end_turn(state);
        }
        Action::Purchase { tier, slot } => {
            let card = state.board.pop_card(usize::from(tier), slot);
            begin_purchase(state, card);
        }
        Action::PurchaseReserved { index } => {
            let card = state.current_player_mut().take_reserved(usize::from(index));
            begin_purchase(state, card);
        }
        Action::TakeThree(colors) => {
            let mut gems = GemVector::ZERO;
            for color in colors {
                gems[color] += 1;
            }
            take_gems(config, state, &gems);
        }
        Action::TakeTwo(color) => {
            take_gems(config, state, &GemVector::single(color, 2));
        }
        Action::Return(gem) => {
            give_to_pool(state, &GemVector::single(gem, 1));
            if state.current_player().gem_total() <= config.max_player_gems {
                end_turn(state);
            }
        }
        Action::SpendGold(color) => {
            let (card, mut paid) = {
                let (card, paid) = state.phase.spending();
                (*card, *paid)
            };
            give_to_pool(state, &GemVector::single(Gem::Gold, 1));
            paid[color] += 1;
            state.phase = Phase::Spending { card, paid };
        }
        Action::EndSpending => {
            let (card, paid) = {
                let (card, paid) = state.phase.spending();
                (*card, *paid)
            };
            finish_purchase(state, card, &paid);
        }
    }
}

fn begin_purchase(state: &mut GameState, card: Card) {
    if state.current_player().holdings().gold() >= 1 {
        debug!("{} enters spending for {}", state.current, card);
        state.phase = Phase::Spending {
            card,
            paid: GemVector::ZERO,
        };
    } else {
        finish_purchase(state, card, &GemVector::ZERO);
    }
}

/// Pay what is still due in colored gems and keep the card.
fn finish_purchase(state: &mut GameState, card: Card, paid: &GemVector) {
    let due = state.current_player().due(&card, paid);
    give_to_pool(state, &due);
    state.current_player_mut().add_purchased(card);
    end_turn(state);
}

fn take_gems(config: &GameConfig, state: &mut GameState, gems: &GemVector) {
    take_from_pool(state, gems);
    let total = state.current_player().gem_total();
    if total > config.max_player_gems {
        debug!("{} holds {} gems, enters return", state.current, total);
        state.phase = Phase::Return;
    } else {
        end_turn(state);
    }
}

fn take_from_pool(state: &mut GameState, gems: &GemVector) {
    state.board.withdraw(gems);
    state.current_player_mut().deposit(gems);
}

fn give_to_pool(state: &mut GameState, gems: &GemVector) {
    state.current_player_mut().withdraw(gems);
    state.board.deposit(gems);
}

fn end_turn(state: &mut GameState) {
    if state.phase != Phase::Normal {
        debug!("{} leaves the {} phase", state.current, state.phase.kind());
    }
    state.phase = Phase::Normal;
    state.pass_turn();
    debug!("turn {}: {} to act", state.turn_number, state.current);
}
