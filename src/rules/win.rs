//! Win condition checking
//!
//! The eight triples are scanned in a fixed order: rows top to bottom,
//! columns left to right, then the two diagonals. The first complete triple
//! decides the winner.

use crate::board::{Board, Mark, Pos};

use super::GameStatus;

/// Winning index triples, in scan order
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // Top row
    [3, 4, 5], // Middle row
    [6, 7, 8], // Bottom row
    [0, 3, 6], // Left column
    [1, 4, 7], // Middle column
    [2, 5, 8], // Right column
    [0, 4, 8], // Diagonal top-left to bottom-right
    [2, 4, 6], // Diagonal top-right to bottom-left
];

/// Find the first complete triple and the mark that owns it
pub fn find_winning_line(board: &Board) -> Option<(Mark, [Pos; 3])> {
    let cells = board.cells();

    WIN_LINES.iter().find_map(|&[a, b, c]| {
        let first = cells[a];
        if first != Mark::Empty && cells[b] == first && cells[c] == first {
            Some((first, [Pos::from_index(a), Pos::from_index(b), Pos::from_index(c)]))
        } else {
            None
        }
    })
}

/// Classify a board as won, drawn or still in progress
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((winner, line)) = find_winning_line(board) {
        return GameStatus::Won { winner, line };
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
