//! Boundary between game logic and whatever draws it

use crate::board::{Board, Pos};
use crate::rules::GameStatus;

/// Implemented by a UI shell. The controller pushes every visible change
/// through these calls; the shell never mutates game state itself.
pub trait GameShell {
    /// Redraw all nine cells
    fn render(&mut self, board: &Board);

    /// Highlight the given cells. An empty slice clears highlighting.
    fn highlight(&mut self, cells: &[Pos]);

    /// Present the end-of-game result
    fn show_result(&mut self, status: &GameStatus);
}
