//! Game status

use crate::board::{Mark, Pos};

/// Outcome of evaluating a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// `winner` completed `line`
    Won { winner: Mark, line: [Pos; 3] },
    Draw,
}

impl GameStatus {
    /// Won or Draw
    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Cells of the winning triple, empty unless won
    pub fn winning_line(&self) -> &[Pos] {
        match self {
            GameStatus::Won { line, .. } => line,
            _ => &[],
        }
    }
}
