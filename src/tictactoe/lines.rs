//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Side};

/// Winning line indices on the 3x3 board
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a side has three in a row on any line
    pub fn has_won(cells: &[Cell; 9], side: Side) -> bool {
        let target = Cell::Mark(side);
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Positions that would immediately complete a line for `side`, ascending
    pub fn winning_moves(cells: &[Cell; 9], side: Side) -> Vec<usize> {
        let mut moves: Vec<usize> = WIN_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, side, line))
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], side: Side, line: &[usize; 3]) -> Option<usize> {
        let target = Cell::Mark(side);
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None, // Opponent piece in line
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[3] = Cell::Mark(Side::Player);
        cells[4] = Cell::Mark(Side::Player);
        cells[5] = Cell::Mark(Side::Player);

        assert!(LineAnalyzer::has_won(&cells, Side::Player));
        assert!(!LineAnalyzer::has_won(&cells, Side::Robot));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::Mark(Side::Robot);
        cells[5] = Cell::Mark(Side::Robot);
        cells[8] = Cell::Mark(Side::Robot);

        assert!(LineAnalyzer::has_won(&cells, Side::Robot));
        assert!(!LineAnalyzer::has_won(&cells, Side::Player));
    }

    #[test]
    fn test_every_line_wins_for_its_owner_only() {
        for line in WIN_LINES {
            for side in [Side::Player, Side::Robot] {
                let mut cells = [Cell::Empty; 9];
                for idx in line {
                    cells[idx] = Cell::Mark(side);
                }
                assert!(LineAnalyzer::has_won(&cells, side), "{line:?} for {side:?}");
                assert!(!LineAnalyzer::has_won(&cells, side.opponent()));
            }
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::Mark(Side::Robot);
        cells[4] = Cell::Mark(Side::Robot);
        cells[8] = Cell::Mark(Side::Player);

        assert!(!LineAnalyzer::has_won(&cells, Side::Robot));
        assert!(!LineAnalyzer::has_won(&cells, Side::Player));
    }

    #[test]
    fn test_winning_moves() {
        // o.o
        // ...
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::Mark(Side::Robot);
        cells[2] = Cell::Mark(Side::Robot);

        assert_eq!(LineAnalyzer::winning_moves(&cells, Side::Robot), vec![1]);
        assert!(LineAnalyzer::winning_moves(&cells, Side::Player).is_empty());
    }

    #[test]
    fn test_winning_moves_multiple() {
        // xx.
        // x..
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::Mark(Side::Player);
        cells[1] = Cell::Mark(Side::Player);
        cells[3] = Cell::Mark(Side::Player);

        assert_eq!(LineAnalyzer::winning_moves(&cells, Side::Player), vec![2, 6]);
    }
}
