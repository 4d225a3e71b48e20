//! Game rules for Tic-Tac-Toe
//!
//! - Three identical marks along a row, column or diagonal win
//! - A full board without such a line is a draw

pub mod status;
pub mod win;

// Re-exports for convenient access
pub use status::GameStatus;
pub use win::{evaluate, find_winning_line, WIN_LINES};
