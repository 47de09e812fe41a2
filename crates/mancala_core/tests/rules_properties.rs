//! Property checks for the sowing rules over many random games
//!
//! - Stone conservation after every move and after the final sweep
//! - Legal move lists agree with `is_legal_move`
//! - Every game reaches a finished board well before any move ceiling

use mancala_core::{Board, GameState, MoveError, Player};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const GAMES: u64 = 200;

fn play_random_game(
    rng: &mut StdRng,
    pits: usize,
    stones: u32,
    mut check: impl FnMut(&GameState),
) -> GameState {
    let mut state = GameState::new(pits, stones).unwrap();
    check(&state);
    while !state.is_terminal() {
        let moves = state.legal_moves();
        let pit = *moves.choose(rng).expect("unfinished game has a legal move");
        state.apply_move(pit).unwrap();
        check(&state);
    }
    check(&state);
    state
}

// =============================================================================
// Conservation
// =============================================================================

#[test]
fn test_stones_are_conserved_in_random_games() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..GAMES {
        let pits = rng.gen_range(1..=8);
        let stones = rng.gen_range(1..=6);
        let expected = 2 * pits as u32 * stones;

        let finished = play_random_game(&mut rng, pits, stones, |state| {
            assert_eq!(state.board().total_stones(), expected, "{state}");
        });

        let (p1, p2) = finished.final_scores();
        assert_eq!(p1 + p2, expected);
        assert_eq!(finished.board().side_stones(Player::One), 0);
        assert_eq!(finished.board().side_stones(Player::Two), 0);
    }
}

// =============================================================================
// Legality
// =============================================================================

#[test]
fn test_legal_moves_match_is_legal_move() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..GAMES / 4 {
        play_random_game(&mut rng, 6, 4, |state| {
            let expected: Vec<usize> = (0..=state.pits_per_player() + 1)
                .filter(|&pit| state.is_legal_move(pit))
                .collect();
            assert_eq!(state.legal_moves(), expected);
            assert!(expected.windows(2).all(|w| w[0] < w[1]));
        });
    }
}

#[test]
fn test_move_log_alternates_players() {
    let mut rng = StdRng::seed_from_u64(99);
    let state = play_random_game(&mut rng, 6, 4, |_| {});

    for (i, record) in state.moves().iter().enumerate() {
        let expected = if i % 2 == 0 { Player::One } else { Player::Two };
        assert_eq!(record.player, expected);
        assert!((1..=6).contains(&record.pit));
    }
}

#[test]
fn test_finished_game_rejects_every_pit() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut state = play_random_game(&mut rng, 6, 4, |_| {});
    let settled = state.clone();

    for pit in 0..=7 {
        assert!(state.apply_move(pit).is_err());
    }
    assert_eq!(state, settled);
    assert!(matches!(
        state.apply_move(1),
        Err(MoveError::IllegalMove { pit: 1, .. })
    ));
}

// =============================================================================
// Termination
// =============================================================================

#[test]
fn test_random_games_finish_without_a_move_ceiling() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..GAMES {
        let state = play_random_game(&mut rng, 6, 4, |_| {});
        assert!(state.move_count() < 500);
    }
}

#[test]
fn test_worked_trace_from_default_board() {
    let mut state = GameState::new(6, 4).unwrap();
    assert_eq!(state.board(), &Board::default());

    state.apply_move(3).unwrap();
    assert_eq!(
        state.board().cells(),
        &[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]
    );
    assert_eq!(state.current_player(), Player::Two);
    assert_eq!(state.moves().len(), 1);
    assert_eq!(state.moves()[0].player.number(), 1);
    assert_eq!(state.moves()[0].pit, 3);
}
