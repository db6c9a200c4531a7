//! Scripted games exercising each phase and end condition.

mod common;

use rust_splendor::cards::CardCatalog;
use rust_splendor::core::{ActionId, Color, GameConfig, GemVector, Phase, PhaseKind, PlayerId, Turn};
use rust_splendor::error::{ConstructionError, GameError};
use rust_splendor::games::splendor::SplendorBuilder;
use rust_splendor::rules::{GameResult, RulesEngine};

use common::{game, game_with, give};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

fn ids(raw: impl IntoIterator<Item = u16>) -> Vec<ActionId> {
    raw.into_iter().map(ActionId).collect()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_initial_legal_actions() {
    let (game, state) = game();

    let expected: Vec<ActionId> = ids((0..15).chain(30..45));
    assert_eq!(game.legal_actions(&state), expected);
    assert_eq!(game.current_player(&state), Turn::Player(P0));
    assert_eq!(game.num_distinct_actions(), 57);
    assert_eq!(game.returns(&state), [0.0, 0.0]);
}

#[test]
fn test_build_rejects_small_tier() {
    let mut tiers = common::tiers();
    tiers[1].truncate(4);
    let catalog = CardCatalog::new(tiers).unwrap();

    let err = SplendorBuilder::new().build(&catalog).unwrap_err();
    assert_eq!(err, ConstructionError::TierTooSmall { tier: 1, len: 4, min: 5 });
}

#[test]
fn test_build_rejects_invalid_config() {
    let config = GameConfig::default().with_min_tier_cards(3);
    let err = SplendorBuilder::new().config(config).build(&common::catalog()).unwrap_err();
    assert!(matches!(err, ConstructionError::InvalidConfig(_)));
}

#[test]
fn test_action_to_string() {
    let (game, _) = game();

    assert_eq!(game.action_to_string(ActionId(0)), "reserve tier 1 deck");
    assert_eq!(game.action_to_string(ActionId(17)), "purchase tier 1 slot 3");
    assert_eq!(game.action_to_string(ActionId(44)), "take 2 black");
    assert_eq!(game.action_to_string(ActionId(56)), "end spending");
    assert_eq!(game.action_to_string(ActionId(99)), "unknown Action(99)");
}

// =============================================================================
// Purchases
// =============================================================================

#[test]
fn test_direct_purchase_without_gold() {
    let (game, mut state) = game();
    // Slot 1 of tier 1 costs 2 white + 1 blue.
    give(&mut state, P0, [2, 1, 0, 0, 0, 0]);
    let card = *state.board.card_at(0, 1).unwrap();

    assert!(game.legal_actions(&state).contains(&ActionId(15)));
    game.apply_action(&mut state, ActionId(15)).unwrap();

    let p0 = state.player(P0);
    assert_eq!(p0.purchased().len(), 1);
    assert_eq!(p0.purchased()[0], card);
    assert_eq!(p0.bonus(Color::Black), 1);
    assert!(p0.holdings().is_zero());
    assert_eq!(*state.board.pool(), GemVector::new([4, 4, 4, 4, 4, 5]));
    assert_eq!(state.board.tier(0).len(), 9);
    assert_eq!(state.phase, Phase::Normal);
    assert_eq!(state.current, P1);
}

#[test]
fn test_bonus_discounts_purchase() {
    let (game, mut state) = game();
    // Slot 1 (2 white + 1 blue, black bonus) first.
    give(&mut state, P0, [2, 1, 0, 0, 0, 0]);
    game.apply_action(&mut state, ActionId(15)).unwrap();
    game.apply_action(&mut state, ActionId(39)).unwrap();

    // Slot 2 is now the 4-black card; the black bonus makes it cost 3.
    give(&mut state, P0, [0, 0, 0, 0, 3, 0]);
    assert_eq!(state.board.card_at(0, 2).unwrap().cost[Color::Black], 4);
    game.apply_action(&mut state, ActionId(16)).unwrap();

    assert_eq!(state.player(P0).points(), 1);
    assert!(state.player(P0).holdings().is_zero());
}

#[test]
fn test_payment_sub_turn_with_gold() {
    let (game, mut state) = game();
    // Slot 1 of tier 1 costs 2 white + 1 blue; P0 holds 1 white and 2 gold.
    give(&mut state, P0, [1, 0, 0, 0, 0, 2]);

    game.apply_action(&mut state, ActionId(15)).unwrap();
    assert_eq!(state.phase.kind(), PhaseKind::Spending);
    assert_eq!(state.current, P0);
    // Gold can stand in for white or blue, but the card is not paid yet.
    assert_eq!(game.legal_actions(&state), ids([51, 52]));

    game.apply_action(&mut state, ActionId(52)).unwrap();
    assert_eq!(state.player(P0).holdings().gold(), 1);
    assert_eq!(game.legal_actions(&state), ids([51]));

    game.apply_action(&mut state, ActionId(51)).unwrap();
    assert_eq!(game.legal_actions(&state), ids([56]));

    game.apply_action(&mut state, ActionId(56)).unwrap();
    assert_eq!(state.phase, Phase::Normal);
    assert_eq!(state.current, P1);
    assert!(state.player(P0).holdings().is_zero());
    assert_eq!(state.player(P0).purchased().len(), 1);
    assert_eq!(*state.board.pool(), GemVector::new([4, 4, 4, 4, 4, 5]));

    let sequences: Vec<u32> = state.history.iter().map(|r| r.sequence).collect();
    assert_eq!(sequences, vec![0, 1, 2, 3]);
    assert!(state.history.iter().all(|r| r.turn == 1 && r.player == P0));
}

#[test]
fn test_gold_holder_may_end_spending_immediately() {
    let (game, mut state) = game();
    give(&mut state, P0, [2, 1, 0, 0, 0, 1]);

    game.apply_action(&mut state, ActionId(15)).unwrap();
    assert_eq!(game.legal_actions(&state), ids([51, 52, 56]));

    game.apply_action(&mut state, ActionId(56)).unwrap();
    assert_eq!(*state.player(P0).holdings(), GemVector::new([0, 0, 0, 0, 0, 1]));
}

#[test]
fn test_purchase_reserved_card() {
    let (game, mut state) = game();
    let card = *state.board.card_at(0, 2).unwrap();

    // Reserve slot 2 of tier 1 (3 blue), taking a gold.
    game.apply_action(&mut state, ActionId(2)).unwrap();
    assert_eq!(state.player(P0).reserved(), &[card]);
    assert_eq!(state.player(P0).holdings().gold(), 1);

    game.apply_action(&mut state, ActionId(30)).unwrap();
    give(&mut state, P0, [0, 2, 0, 0, 0, 0]);

    game.apply_action(&mut state, ActionId(27)).unwrap();
    assert_eq!(state.phase.kind(), PhaseKind::Spending);
    game.apply_action(&mut state, ActionId(52)).unwrap();
    game.apply_action(&mut state, ActionId(56)).unwrap();

    assert!(state.player(P0).reserved().is_empty());
    assert_eq!(state.player(P0).purchased()[0], card);
    assert!(state.player(P0).holdings().is_zero());
}

// =============================================================================
// Gems
// =============================================================================

#[test]
fn test_return_phase_after_over_limit_take() {
    let (game, mut state) = game();
    give(&mut state, P0, [2, 2, 2, 2, 1, 0]);

    // Take white, blue, green: 9 + 3 = 12 gems.
    game.apply_action(&mut state, ActionId(30)).unwrap();
    assert_eq!(state.phase, Phase::Return);
    assert_eq!(state.current, P0);
    assert_eq!(game.legal_actions(&state), ids(45..50));

    game.apply_action(&mut state, ActionId(45)).unwrap();
    assert_eq!(state.phase, Phase::Return);
    assert_eq!(state.player(P0).gem_total(), 11);

    game.apply_action(&mut state, ActionId(48)).unwrap();
    assert_eq!(state.phase, Phase::Normal);
    assert_eq!(state.current, P1);
    assert_eq!(state.player(P0).gem_total(), 10);
}

#[test]
fn test_take_two_needs_four_in_pool() {
    let (game, mut state) = game();

    game.apply_action(&mut state, ActionId(43)).unwrap();
    assert_eq!(state.board.pool()[Color::Red], 2);

    let legal = game.legal_actions(&state);
    assert!(!legal.contains(&ActionId(43)));
    assert!(legal.contains(&ActionId(40)));
}

#[test]
fn test_reserve_bound() {
    let (game, mut state) = game();

    for (reserve, take) in [(0, 30), (5, 39), (10, 31)] {
        game.apply_action(&mut state, ActionId(reserve)).unwrap();
        game.apply_action(&mut state, ActionId(take)).unwrap();
    }

    assert_eq!(state.player(P0).reserved().len(), 3);
    assert_eq!(state.player(P0).holdings().gold(), 3);
    assert!(game.legal_actions(&state).iter().all(|id| id.0 >= 15));
}

#[test]
fn test_reserve_without_gold_in_pool() {
    let (game, mut state) = game_with(
        GameConfig::default().with_shuffle(false).with_starting_pool(4, 0),
    );

    game.apply_action(&mut state, ActionId(0)).unwrap();
    assert_eq!(state.player(P0).reserved().len(), 1);
    assert_eq!(state.player(P0).holdings().gold(), 0);
}

// =============================================================================
// End of game
// =============================================================================

#[test]
fn test_points_win() {
    let (game, mut state) = game_with(GameConfig::default().with_shuffle(false).with_win_points(1));
    // Slot 3 of tier 1 is worth 1 point and costs 4 black.
    give(&mut state, P0, [0, 0, 0, 0, 4, 0]);

    game.apply_action(&mut state, ActionId(17)).unwrap();

    assert_eq!(game.is_terminal(&state), Some(GameResult::Winner(P0)));
    assert_eq!(game.current_player(&state), Turn::Terminal);
    assert_eq!(game.returns(&state), [11.25, -11.25]);
}

#[test]
fn test_tier_exhaustion_draw() {
    let mut tiers = common::tiers();
    tiers[0].truncate(5);
    let catalog = CardCatalog::new(tiers).unwrap();
    let (game, mut state) = SplendorBuilder::new().shuffle(false).build(&catalog).unwrap();

    game.apply_action(&mut state, ActionId(1)).unwrap();

    assert_eq!(state.result, Some(GameResult::Draw));
}

#[test]
fn test_stuck_player_is_skipped() {
    let (game, mut state) = game();
    // Drain the pool to one white and one blue, and fill P1's reserve.
    give(&mut state, P0, [3, 3, 4, 4, 4, 0]);
    for _ in 0..3 {
        let card = state.board.pop_card(2, 1);
        state.players[P1].reserve(card);
    }

    game.apply_action(&mut state, ActionId(0)).unwrap();

    assert_eq!(state.result, None);
    assert_eq!(state.current, P0);
    assert_eq!(state.turn_number, 3);
    assert_eq!(state.player(P1).passes(), 1);
    assert_eq!(state.player(P0).passes(), 0);
}

#[test]
fn test_mutual_stalemate_is_draw() {
    let (game, mut state) = game_with(
        GameConfig::default().with_shuffle(false).with_starting_pool(0, 0),
    );
    assert_eq!(game.legal_actions(&state), ids(0..15));

    for id in [0, 1, 2, 5, 6, 10] {
        game.apply_action(&mut state, ActionId(id)).unwrap();
    }

    assert_eq!(state.result, Some(GameResult::Draw));
    assert_eq!(state.player(P0).passes(), 1);
    assert_eq!(game.returns(&state), [0.0, 0.0]);
}

#[test]
fn test_game_over_rejects_actions() {
    let (game, mut state) = game_with(
        GameConfig::default().with_shuffle(false).with_starting_pool(0, 0),
    );
    for id in [0, 1, 2, 5, 6, 10] {
        game.apply_action(&mut state, ActionId(id)).unwrap();
    }
    let frozen = state.clone();

    assert!(game.legal_actions(&state).is_empty());
    assert_eq!(game.apply_action(&mut state, ActionId(30)), Err(GameError::GameOver));
    assert_eq!(state, frozen);
}

#[test]
fn test_invalid_action_leaves_state_untouched() {
    let (game, mut state) = game();
    let before = state.clone();

    assert_eq!(
        game.apply_action(&mut state, ActionId(15)),
        Err(GameError::InvalidAction {
            action: ActionId(15),
            phase: PhaseKind::Normal,
        })
    );
    assert!(game.apply_action(&mut state, ActionId(57)).is_err());
    assert!(game.apply_action(&mut state, ActionId(56)).is_err());
    assert_eq!(state, before);
}

// =============================================================================
// Determinism
// =============================================================================

fn play_first_legal(seed: u64, steps: usize) -> Vec<u8> {
    let (game, mut state) = SplendorBuilder::new()
        .seed(seed)
        .build(&common::catalog())
        .unwrap();
    for step in 0..steps {
        let legal = game.legal_actions(&state);
        if legal.is_empty() {
            break;
        }
        let id = legal[step % legal.len()];
        game.apply_action(&mut state, id).unwrap();
    }
    state.snapshot().unwrap()
}

#[test]
fn test_replay_is_deterministic() {
    assert_eq!(play_first_legal(11, 60), play_first_legal(11, 60));
    assert_ne!(play_first_legal(11, 0), play_first_legal(12, 0));
}
