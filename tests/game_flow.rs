//! End-to-end games through the public engine API.

use gomoku::eval::PatternScore;
use gomoku::{Engine, EngineConfig, EngineError, GameStatus, MoveOutcome, Pos, Stone};

fn engine(size: usize, depth: u8) -> Engine {
    Engine::with_config(EngineConfig {
        board_size: size,
        search_depth: depth,
    })
    .expect("valid config")
}

#[test]
fn horizontal_five_is_detected_on_the_last_stone() {
    let mut engine = Engine::new();
    let black = [(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)];
    let white = [(0, 0), (1, 0), (2, 0), (3, 0)];

    for (i, &(r, c)) in black.iter().enumerate() {
        engine.apply_move(Pos::new(r, c));
        let won = engine.check_win(Pos::new(r, c));
        assert_eq!(won, i == 4, "after black stone {i}");
        if let Some(&(wr, wc)) = white.get(i) {
            engine.apply_move(Pos::new(wr, wc));
        }
    }
}

#[test]
fn illegal_raw_move_is_ignored() {
    let mut engine = Engine::new();
    engine.apply_move(Pos::new(7, 7));
    let before = engine.board().clone();

    assert!(!engine.apply_move(Pos::new(7, 7)));
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.current_player(), Stone::White);
}

#[test]
fn engine_sees_an_unstoppable_open_four() {
    let mut engine = engine(9, 2);
    // White builds (4,1..4) with both ends open; Black is to move.
    let moves = [(0, 0), (4, 1), (8, 8), (4, 2), (0, 8), (4, 3), (8, 0), (4, 4)];
    for (r, c) in moves {
        assert_eq!(engine.play(Pos::new(r, c)).unwrap(), MoveOutcome::Continue);
    }
    assert_eq!(engine.current_player(), Stone::Black);

    // Whatever Black does, White completes five next move. Every move ties
    // at a certain loss and the first free cell is kept.
    let result = engine.find_best_move_with_stats();
    assert_eq!(result.score, -PatternScore::WIN);
    assert_eq!(result.best_move, Some(Pos::new(0, 1)));
}

#[test]
fn engine_blocks_a_closed_four() {
    let mut engine = engine(9, 2);
    // White (4,0..3) against the left edge: (4,4) is the only threat.
    let moves = [(0, 8), (4, 0), (8, 8), (4, 1), (0, 6), (4, 2), (8, 6), (4, 3)];
    for (r, c) in moves {
        engine.play(Pos::new(r, c)).unwrap();
    }
    assert_eq!(engine.find_best_move(), Some(Pos::new(4, 4)));
}

#[test]
fn human_versus_engine_until_the_end() {
    let mut engine = engine(7, 2);
    let mut human_moves = (0..49).map(|idx| Pos::from_index(idx, 7));

    loop {
        // Human: first free cell in row-major order
        let pos = loop {
            let pos = human_moves.next().expect("cells left while game is on");
            if engine.board().is_empty(pos) {
                break pos;
            }
        };
        if engine.play(pos).unwrap() != MoveOutcome::Continue {
            break;
        }
        let (_, outcome) = engine.play_engine_move().unwrap();
        if outcome != MoveOutcome::Continue {
            break;
        }
    }

    assert_ne!(engine.status(), &GameStatus::InProgress);
    assert_eq!(engine.play(Pos::new(0, 0)), Err(EngineError::GameOver));
}

#[test]
fn selfplay_on_a_small_board_terminates() {
    let mut engine = engine(5, 1);
    let mut plies = 0;
    loop {
        let (_, outcome) = engine.play_engine_move().unwrap();
        plies += 1;
        if outcome != MoveOutcome::Continue {
            break;
        }
    }
    assert!(plies <= 25);
    assert!(matches!(
        engine.status(),
        GameStatus::Won(_) | GameStatus::Drawn
    ));
}

#[test]
fn reset_restores_a_fresh_game() {
    let mut engine = engine(9, 1);
    engine.play(Pos::new(4, 4)).unwrap();
    engine.play_engine_move().unwrap();
    engine.reset();

    assert!(engine.board().is_board_empty());
    assert_eq!(engine.current_player(), Stone::Black);
    assert_eq!(engine.status(), &GameStatus::InProgress);
}
