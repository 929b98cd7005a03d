//! Formatting utilities for terminal output

use crate::core::{Board, Coord};
use std::fmt::Write;

/// Render the board as a grid with row/column indices
///
/// Cells on `highlight` are bracketed so the traced path stands out without
/// relying on color.
#[must_use]
pub fn board_grid(board: &Board, highlight: &[Coord]) -> String {
    let mut out = String::from("   ");
    for col in 0..board.size() {
        let _ = write!(out, "{col:^3}");
    }
    out.push('\n');

    for (row_idx, row) in board.rows().enumerate() {
        let _ = write!(out, "{row_idx:>2} ");
        for (col_idx, letter) in row.iter().enumerate() {
            let coord = Coord::new(row_idx as isize, col_idx as isize);
            let upper = letter.to_char().to_ascii_uppercase();
            if highlight.contains(&coord) {
                let _ = write!(out, "[{upper}]");
            } else {
                let _ = write!(out, " {upper} ");
            }
        }
        out.push('\n');
    }

    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a letter frequency as a bar scaled to the most common letter
#[must_use]
pub fn frequency_bar(weight: f64, max_weight: f64, width: usize) -> String {
    if max_weight <= 0.0 {
        return "░".repeat(width);
    }
    create_progress_bar(weight, max_weight, width)
}

/// Format a path as the word it spells with its cells
#[must_use]
pub fn format_path(board: &Board, path: &[Coord]) -> String {
    let letters: String = path
        .iter()
        .filter_map(|&coord| board.letter_at(coord))
        .map(|letter| letter.to_char().to_ascii_uppercase())
        .collect();
    let cells: Vec<String> = path.iter().map(ToString::to_string).collect();
    format!("{letters}  {}", cells.join(" → "))
}
