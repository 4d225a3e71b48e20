//! GUI module for the Tic-Tac-Toe game
//!
//! This module provides a native Rust GUI using egui/eframe. The game logic
//! reaches it only through [`ShellView`], its [`GameShell`](crate::game::GameShell)
//! implementation.

mod app;
mod board_view;
mod shell_view;
mod theme;

pub use app::{result_message, status_line, TicTacToeApp};
pub use shell_view::ShellView;
