//! Exhaustive tests for win detection over every 3x3 board.

use strictly_timeline::{
    Board, GameStatus, Player, Square, WINNING_LINES, check_winner, evaluate, is_draw, is_full,
};

fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in squares.iter_mut() {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    })
}

/// The eight symmetries of the square as cell permutations.
fn symmetries() -> Vec<[usize; 9]> {
    let rotate = |i: usize| (i % 3) * 3 + (2 - i / 3);
    let reflect = |i: usize| (i / 3) * 3 + (2 - i % 3);

    let mut maps = Vec::new();
    for flip in [false, true] {
        for turns in 0..4 {
            let mut map = [0; 9];
            for (i, slot) in map.iter_mut().enumerate() {
                let mut j = if flip { reflect(i) } else { i };
                for _ in 0..turns {
                    j = rotate(j);
                }
                *slot = j;
            }
            maps.push(map);
        }
    }
    maps
}

fn transform(board: &Board, map: &[usize; 9]) -> Board {
    let mut squares = [Square::Empty; 9];
    for (i, square) in board.squares().iter().enumerate() {
        squares[map[i]] = *square;
    }
    Board::from_squares(squares)
}

fn complete_lines(board: &Board) -> usize {
    WINNING_LINES
        .iter()
        .filter(|[a, b, c]| {
            board.get(*a) != Square::Empty
                && board.get(*a) == board.get(*b)
                && board.get(*a) == board.get(*c)
        })
        .count()
}

#[test]
fn test_evaluate_is_idempotent() {
    for board in all_boards() {
        assert_eq!(evaluate(&board), evaluate(&board));
    }
}

#[test]
fn test_evaluate_matches_line_count() {
    for board in all_boards() {
        assert_eq!(evaluate(&board).is_some(), complete_lines(&board) > 0);
    }
}

#[test]
fn test_symmetries_are_permutations() {
    let maps = symmetries();
    assert_eq!(maps.len(), 8);
    for map in &maps {
        let mut seen = *map;
        seen.sort_unstable();
        assert_eq!(seen, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }
}

#[test]
fn test_evaluate_is_symmetric() {
    let maps = symmetries();

    for board in all_boards() {
        let original = evaluate(&board);
        let lines = complete_lines(&board);

        for map in &maps {
            let moved = evaluate(&transform(&board, map));
            assert_eq!(original.is_some(), moved.is_some());

            if lines == 1 {
                let (original, moved) = (original.unwrap(), moved.unwrap());
                assert_eq!(original.player, moved.player);

                let mut expected = original.indices().map(|i| map[i]);
                expected.sort_unstable();
                let mut actual = moved.indices();
                actual.sort_unstable();
                assert_eq!(expected, actual);
            }
        }
    }
}

#[test]
fn test_winning_line_cells_hold_winner() {
    for board in all_boards() {
        if let Some(win) = evaluate(&board) {
            for pos in win.line {
                assert_eq!(board.get(pos), Square::Occupied(win.player));
            }
        }
    }
}

#[test]
fn test_status_agrees_with_rules() {
    for board in all_boards() {
        let status = GameStatus::of(&board, Player::X);
        assert_eq!(status.is_draw(), is_draw(&board));
        assert_eq!(status.winner(), check_winner(&board));
        assert_eq!(
            status.is_over(),
            evaluate(&board).is_some() || is_full(&board)
        );
    }
}
