use super::*;
use crate::player::PlayerType;
use mancala_core::SearchResult;
use random_engine::RandomEngine;
use search_engine::AlphaBetaEngine;

/// Always asks for a pit that does not exist.
struct Broken;

impl Engine for Broken {
    fn search(&mut self, _state: &GameState) -> SearchResult {
        SearchResult {
            best_move: Some(99),
            score: 0,
            depth: 0,
            nodes: 0,
        }
    }

    fn name(&self) -> &str {
        "Broken"
    }
}

fn config(num_games: u32) -> MatchConfig {
    MatchConfig {
        num_games,
        ..Default::default()
    }
}

#[test]
fn test_random_self_play() {
    let mut engine1 = RandomEngine::with_seed(1);
    let mut engine2 = RandomEngine::with_seed(2);

    let runner = MatchRunner::new(config(20));
    let results = runner.run_match(&mut engine1, &mut engine2).unwrap();

    assert_eq!(results.total_games(), 20);
    assert_eq!(
        results.player1_wins() + results.player2_wins() + results.ties(),
        20
    );
    assert_eq!(results.aborted_games(), 0);
    for game in &results.games {
        assert!(!game.hit_move_limit);
        assert_eq!(game.score.0 + game.score.1, 48);
        assert!(game.num_moves > 0 && game.num_moves < 500);
    }
}

#[test]
fn test_status_matches_score() {
    let mut engine1 = RandomEngine::with_seed(7);
    let mut engine2 = RandomEngine::with_seed(8);

    let runner = MatchRunner::new(config(10));
    let results = runner.run_match(&mut engine1, &mut engine2).unwrap();

    for game in &results.games {
        let expected = match game.score.0.cmp(&game.score.1) {
            std::cmp::Ordering::Greater => 1,
            std::cmp::Ordering::Less => 2,
            std::cmp::Ordering::Equal => 0,
        };
        assert_eq!(game.status, expected);
    }
}

#[test]
fn test_seeded_batches_repeat() {
    let play = || {
        let mut engine1 = RandomEngine::with_seed(42);
        let mut engine2 = RandomEngine::with_seed(43);
        MatchRunner::new(config(5))
            .run_match(&mut engine1, &mut engine2)
            .unwrap()
    };
    assert_eq!(play().games, play().games);
}

#[test]
fn test_move_limit_cuts_games_off() {
    let mut engine1 = RandomEngine::with_seed(3);
    let mut engine2 = RandomEngine::with_seed(4);

    let runner = MatchRunner::new(MatchConfig {
        num_games: 3,
        max_moves: 1,
        ..Default::default()
    });
    let results = runner.run_match(&mut engine1, &mut engine2).unwrap();

    assert_eq!(results.games_hitting_limit(), 3);
    assert!(results.games.iter().all(|g| g.num_moves == 1));
}

#[test]
fn test_illegal_move_ends_game_early() {
    let mut engine1 = Broken;
    let mut engine2 = RandomEngine::with_seed(5);

    let runner = MatchRunner::new(config(2));
    let results = runner.run_match(&mut engine1, &mut engine2).unwrap();

    assert_eq!(results.aborted_games(), 2);
    for game in &results.games {
        assert!(game.aborted);
        assert_eq!(game.num_moves, 0);
        assert!(!game.hit_move_limit);
        assert_eq!(game.score, (0, 0));
        assert_eq!(game.status, 0);
    }
}

#[test]
fn test_bad_board_size_is_an_error() {
    let mut engine1 = RandomEngine::with_seed(1);
    let mut engine2 = RandomEngine::with_seed(2);

    let runner = MatchRunner::new(MatchConfig {
        pits_per_player: 0,
        ..config(1)
    });
    assert!(matches!(
        runner.run_match(&mut engine1, &mut engine2),
        Err(HarnessError::Board(_))
    ));
}

#[test]
fn test_search_beats_random() {
    let mut engine1 = AlphaBetaEngine::new(Player::One, 4);
    let mut engine2 = RandomEngine::with_seed(11);

    let runner = MatchRunner::new(config(10));
    let results = runner.run_match(&mut engine1, &mut engine2).unwrap();

    assert_eq!(results.player1, "Alpha-Beta");
    assert!(results.player1_wins() > results.player2_wins());
}

#[test]
fn test_small_board() {
    let mut engine1 = RandomEngine::with_seed(9);
    let mut engine2 = RandomEngine::with_seed(10);

    let runner = MatchRunner::new(MatchConfig {
        num_games: 5,
        pits_per_player: 3,
        stones_per_pit: 2,
        ..Default::default()
    });
    let results = runner.run_match(&mut engine1, &mut engine2).unwrap();

    for game in &results.games {
        assert_eq!(game.score.0 + game.score.1, 12);
    }
}

#[test]
fn test_run_batch_uses_type_labels() {
    let config = BatchConfig {
        player1: PlayerType::Minimax,
        player2: PlayerType::Random,
        depth: 2,
        num_games: 3,
        seed: Some(5),
        ..Default::default()
    };
    let results = run_batch(&config).unwrap();
    assert_eq!(results.player1, "minimax");
    assert_eq!(results.player2, "random");
    assert_eq!(results.total_games(), 3);
}

#[test]
fn test_run_batch_validates() {
    let config = BatchConfig {
        num_games: 0,
        ..Default::default()
    };
    assert!(matches!(
        run_batch(&config),
        Err(HarnessError::Validation(_))
    ));
}

/// Plays one opening move, then claims to have nothing to play.
struct GivesUp {
    played: bool,
}

impl Engine for GivesUp {
    fn search(&mut self, _state: &GameState) -> SearchResult {
        let best_move = (!self.played).then_some(1);
        self.played = true;
        SearchResult {
            best_move,
            score: 0,
            depth: 0,
            nodes: 0,
        }
    }

    fn name(&self) -> &str {
        "GivesUp"
    }

    fn new_game(&mut self) {
        self.played = false;
    }
}

#[test]
fn test_missing_move_marks_game_aborted() {
    let mut engine1 = GivesUp { played: false };
    let mut engine2 = RandomEngine::with_seed(6);

    let runner = MatchRunner::new(config(3));
    let results = runner.run_match(&mut engine1, &mut engine2).unwrap();

    assert_eq!(results.aborted_games(), 3);
    for game in &results.games {
        assert!(game.aborted);
        assert!(!game.hit_move_limit);
        assert_eq!(game.num_moves, 2);
    }
    assert!(results.generate_report().contains("aborted by an engine: 3"));
}
