//! Common test utilities for the rollout-ttt test suite.

#![allow(dead_code)]

use rollout_ttt::tictactoe::{Board, Side};

/// Build a board from (position, side) pairs, panicking on illegal input.
pub fn board_with(marks: &[(usize, Side)]) -> Board {
    marks.iter().fold(Board::new(), |board, &(pos, side)| {
        board
            .apply(pos, side)
            .unwrap_or_else(|e| panic!("bad test board at {pos}: {e}"))
    })
}

/// Every board reachable by alternating play from the empty board, up to
/// `max_moves` marks, stopping at wins.
pub fn reachable_boards(max_moves: usize) -> Vec<(Board, usize)> {
    let mut out = vec![(Board::new(), 0)];
    let mut frontier = vec![(Board::new(), Side::Player)];

    for depth in 1..=max_moves {
        let mut next = Vec::new();
        for (board, side) in frontier {
            if board.winner().is_some() {
                continue;
            }
            for pos in board.free_cells() {
                let child = board.apply(pos, side).expect("free cell");
                out.push((child, depth));
                next.push((child, side.opponent()));
            }
        }
        frontier = next;
    }

    out
}
