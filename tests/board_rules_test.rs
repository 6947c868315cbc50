//! Tests for slide/merge, spawning and terminal detection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reverse_tiles::rules::{apply_move, can_move, check_win, is_terminal, spawn_tile};
use reverse_tiles::{Board, Direction, GameConfig, Tile};
use reverse_tiles_engine::ScriptedSource;
use strum::IntoEnumIterator;

const VALUES: [Tile; 9] = [1, 2, 4, 8, 16, 32, 64, 128, 256];

fn random_board(rng: &mut StdRng) -> Board {
    let side = rng.gen_range(3..=5);
    let rows: Vec<Vec<Tile>> = (0..side)
        .map(|_| {
            (0..side)
                .map(|_| {
                    if rng.gen_range(0..3) == 0 {
                        0
                    } else {
                        VALUES[rng.gen_range(0..VALUES.len())]
                    }
                })
                .collect()
        })
        .collect();
    Board::from_rows(&rows).unwrap()
}

fn tiles(board: &Board) -> Vec<Tile> {
    board.cells().iter().copied().filter(|&v| v != 0).collect()
}

#[test]
fn test_single_tile_left_is_reported_changed() {
    let mut board = Board::from_rows(&[vec![64, 0, 0], vec![0, 0, 0], vec![0, 0, 0]]).unwrap();
    assert!(apply_move(&mut board, Direction::Left));
    assert_eq!(
        board.to_rows(),
        vec![vec![64, 0, 0], vec![0, 0, 0], vec![0, 0, 0]]
    );
}

#[test]
fn test_pair_merges_to_half() {
    let mut board = Board::from_rows(&[vec![64, 64, 0], vec![0, 0, 0], vec![0, 0, 0]]).unwrap();
    assert!(apply_move(&mut board, Direction::Left));
    assert_eq!(board.to_rows()[0], vec![32, 0, 0]);
}

#[test]
fn test_merged_tile_is_not_merged_again() {
    let mut board = Board::from_rows(&[vec![64, 64, 64], vec![0, 0, 0], vec![0, 0, 0]]).unwrap();
    assert!(apply_move(&mut board, Direction::Left));
    assert_eq!(board.to_rows()[0], vec![32, 64, 0]);
}

#[test]
fn test_filling_last_gap_without_pairs_is_terminal() {
    let config = GameConfig::new(3, 128).unwrap();
    let mut board =
        Board::from_rows(&[vec![16, 32, 64], vec![32, 64, 16], vec![64, 16, 0]]).unwrap();
    assert!(!is_terminal(&board));

    assert!(apply_move(&mut board, Direction::Left));
    // Only one empty cell remains; pick value index 1 (32).
    let mut source = ScriptedSource::new(vec![0, 1]);
    assert_eq!(spawn_tile(&mut board, &config, &mut source), Some((2, 2, 32)));

    assert_eq!(board.count_empty(), 0);
    assert!(!can_move(&board));
    assert!(is_terminal(&board));
    assert!(!check_win(&board));
}

#[test]
fn test_moves_never_add_tiles_or_value() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..500 {
        let board = random_board(&mut rng);
        let before = tiles(&board);
        for direction in Direction::iter() {
            let mut moved = board.clone();
            apply_move(&mut moved, direction);
            let after = tiles(&moved);

            assert!(after.len() <= before.len());
            assert!(after.iter().sum::<Tile>() <= before.iter().sum::<Tile>());
            for value in &after {
                let kept = before.contains(value);
                let halved = before
                    .iter()
                    .filter(|&&v| (v / 2).max(1) == *value)
                    .any(|v| before.iter().filter(|&w| w == v).count() >= 2);
                assert!(kept || halved, "{value} appeared from nowhere on {board:?}");
            }
        }
    }
}

#[test]
fn test_repeat_without_merge_leaves_board_unchanged() {
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..500 {
        let mut board = random_board(&mut rng);
        for direction in Direction::iter() {
            apply_move(&mut board, direction);
            let first = board.clone();
            let changed = apply_move(&mut board, direction);
            if !changed || tiles(&board).len() == tiles(&first).len() {
                assert_eq!(board, first);
            }
        }
    }
}

#[test]
fn test_empty_board_move_is_a_noop() {
    let mut board = Board::with_size(5).unwrap();
    for direction in Direction::ALL {
        assert!(!apply_move(&mut board, direction));
        assert_eq!(board, Board::with_size(5).unwrap());
    }
}

#[test]
fn test_spawn_fills_board_with_allowed_values() {
    let config = GameConfig::new(5, 256).unwrap();
    let mut board = Board::with_size(5).unwrap();
    let mut source = reverse_tiles::RandomSource::seeded(11);
    for filled in 1..=25 {
        spawn_tile(&mut board, &config, &mut source);
        assert_eq!(board.count_occupied(), filled);
    }
    assert!(board.cells().iter().all(|v| config.spawn_values().contains(v)));
    spawn_tile(&mut board, &config, &mut source);
    assert_eq!(board.count_occupied(), 25);
}

#[test]
fn test_win_only_on_exact_two() {
    assert!(!check_win(&Board::with_size(3).unwrap()));
    let board = Board::from_rows(&[vec![1, 4, 8], vec![0, 0, 0], vec![0, 0, 0]]).unwrap();
    assert!(!check_win(&board));
    let board = Board::from_rows(&[vec![1, 4, 8], vec![0, 2, 0], vec![0, 0, 0]]).unwrap();
    assert!(check_win(&board));
}
