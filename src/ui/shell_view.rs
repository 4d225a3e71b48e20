//! Renderable snapshot of the game, filled in by the controller

use crate::board::{Board, Pos, TOTAL_CELLS};
use crate::game::GameShell;
use crate::rules::GameStatus;

/// What the window currently shows. The egui layer only reads this.
#[derive(Debug, Clone, Default)]
pub struct ShellView {
    pub board: Board,
    highlighted: [bool; TOTAL_CELLS],
    /// Result waiting to be acknowledged in the "Game Over" dialog
    pub pending_result: Option<GameStatus>,
}

impl ShellView {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_highlighted(&self, pos: Pos) -> bool {
        self.highlighted[pos.to_index()]
    }

    /// Close the result dialog
    pub fn dismiss_result(&mut self) {
        self.pending_result = None;
    }

    #[inline]
    pub fn is_result_open(&self) -> bool {
        self.pending_result.is_some()
    }
}

impl GameShell for ShellView {
    fn render(&mut self, board: &Board) {
        self.board = *board;
    }

    fn highlight(&mut self, cells: &[Pos]) {
        self.highlighted = [false; TOTAL_CELLS];
        for pos in cells {
            self.highlighted[pos.to_index()] = true;
        }
    }

    fn show_result(&mut self, status: &GameStatus) {
        self.pending_result = Some(*status);
    }
}
