use sweeper_core::*;

fn mines(board: &Board) -> Vec<Coord2> {
    let (rows, cols) = board.size();
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .filter(|&pos| board.cell_at(pos).is_some_and(|cell| cell.has_mine))
        .collect()
}

#[test]
fn initialize_starts_with_clean_counters() {
    for difficulty in Difficulty::ALL {
        let board = Board::new(difficulty.config(), 42);
        let status = board.status();

        assert_eq!(status.revealed_count, 0);
        assert_eq!(status.flagged_count, 0);
        assert!(!status.exploded);
        assert!(!status.done);
        assert!(board.render_rows().iter().all(|row| row.chars().all(|c| c == 'H')));
    }
}

#[test]
fn three_by_three_clamps_to_zero_mines_and_wins() {
    let mut board = Board::new(BoardConfig::new((3, 3), 1), 7);

    assert_eq!(board.reveal((1, 1)), RevealOutcome::Won);

    let status = board.status();
    assert_eq!(status.mine_count, 0);
    assert_eq!(status.revealed_count, 9);
    assert!(status.done);
    assert!(!status.exploded);
    assert_eq!(status.outcome(), Some(GameOutcome::Won));
    assert_eq!(board.render_rows(), ["000", "000", "000"]);
}

#[test]
fn corner_first_move_keeps_three_by_three_clear() {
    for seed in 0..64 {
        let mut board = Board::new(BoardConfig::new((5, 5), 5), seed);
        board.reveal((0, 0));

        let mines = mines(&board);
        assert_eq!(mines.len(), 5);
        assert!(mines.iter().all(|&(row, col)| row > 2 || col > 2));
    }
}

#[test]
fn first_move_exclusion_zone_holds_everywhere() {
    for seed in 0..32 {
        let config = Difficulty::Hard.config();
        let first = ((seed % 20) as Coord, (seed * 7 % 24) as Coord);
        let mut board = Board::new(config, seed);
        board.reveal(first);

        let mines = mines(&board);
        assert_eq!(mines.len() as CellCount, board.mine_count());
        assert_eq!(board.mine_count(), 99);
        assert!(mines.iter().all(|&pos| chebyshev(pos, first) > SAFE_RADIUS));
        assert!(!board.exploded());
    }
}

#[test]
fn too_many_mines_are_clamped_to_eligible_cells() {
    let mut board = Board::new(BoardConfig::new((6, 6), 1000), 3);
    assert_eq!(board.mine_count(), 36);

    board.reveal((0, 0));
    assert_eq!(board.mine_count(), 27);
    assert_eq!(mines(&board).len(), 27);
    assert!(board.status().done);
}

#[test]
fn toggle_flag_round_trip() {
    let mut board = Board::new(BoardConfig::new((5, 5), 5), 1);

    assert_eq!(board.toggle_flag((2, 2)), MarkOutcome::Changed);
    assert_eq!(board.render_rows()[2], "HHFHH");
    assert_eq!(board.status().flagged_count, 1);

    assert_eq!(board.toggle_flag((2, 2)), MarkOutcome::Changed);
    assert_eq!(board.render_rows()[2], "HHHHH");
    assert_eq!(board.status().flagged_count, 0);
}

#[test]
fn render_and_status_are_pure() {
    let mut board = Board::new(Difficulty::Normal.config(), 5);
    board.reveal((7, 9));
    board.toggle_flag((0, 0));

    assert_eq!(board.render(), board.render());
    assert_eq!(board.status(), board.status());
}

#[test]
fn win_requires_every_safe_cell_regardless_of_flags() {
    let mut played = 0;
    for seed in 0..16 {
        let mut board = Board::new(Difficulty::Easy.config(), seed);
        if board.reveal((4, 5)) == RevealOutcome::Won {
            continue;
        }
        let mines = mines(&board);
        for &mine in &mines {
            assert_eq!(board.toggle_flag(mine), MarkOutcome::Changed);
        }
        assert_eq!(board.status().flagged_count, 10);
        assert!(!board.status().done);
        assert_eq!(board.status().outcome(), None);

        let (rows, cols) = board.size();
        let mut last = RevealOutcome::NoChange;
        for row in 0..rows {
            for col in 0..cols {
                if mines.contains(&(row, col)) {
                    continue;
                }
                let outcome = board.reveal((row, col));
                if outcome.has_update() {
                    assert!(!board.status().done || outcome == RevealOutcome::Won);
                    last = outcome;
                }
            }
        }

        let status = board.status();
        assert_eq!(last, RevealOutcome::Won);
        assert_eq!(status.revealed_count, 80 - 10);
        assert!(status.done);
        assert!(!status.exploded);
        assert_eq!(status.mines_left(), 0);
        played += 1;
    }
    assert!(played > 0);
}

#[test]
fn status_serializes_with_all_counters() {
    let mut board = Board::new(BoardConfig::new((3, 3), 1), 0);
    board.reveal((0, 0));

    let json = serde_json::to_value(board.status()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "done": true,
            "exploded": false,
            "rows": 3,
            "cols": 3,
            "flagged_count": 0,
            "revealed_count": 9,
            "mine_count": 0,
        })
    );
}

#[test]
fn board_state_survives_serde() {
    let mut board = Board::new(Difficulty::Easy.config(), 9);
    board.reveal((0, 0));
    board.toggle_flag((7, 9));

    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, board);
    assert_eq!(restored.render_rows(), board.render_rows());
}
