//! Output formatting for the CLI

use std::io::{self, Write};

use crate::tictactoe::{Board, Cell};

/// Print a section header
pub fn print_section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(40))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(40))
}

/// Print a key-value pair
pub fn print_kv<W: Write>(out: &mut W, key: &str, value: &str) -> io::Result<()> {
    writeln!(out, "  {:20} {}", format!("{}:", key), value)
}

/// Render the board for a human, showing the index of every free cell
///
/// ```text
///  x | 1 | o
/// ---+---+---
///  3 | x | 5
/// ---+---+---
///  6 | 7 | o
/// ```
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .map(|col| {
                    let idx = row * 3 + col;
                    match board.get(idx) {
                        Cell::Empty => format!(" {idx} "),
                        Cell::Mark(side) => format!(" {} ", side.to_char()),
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// Format a ratio as a percentage with one decimal
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}
