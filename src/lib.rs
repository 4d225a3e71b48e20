//! Two-player Tic-Tac-Toe
//!
//! A 3x3 board, alternating X and O moves, win/draw detection and
//! highlighting of the winning line, with an egui desktop front end.
//!
//! # Architecture
//!
//! - [`board`]: Marks, positions and the nine-cell board
//! - [`rules`]: The eight winning lines and board evaluation
//! - [`game`]: The board controller and the [`GameShell`] interface it draws through
//! - [`ui`]: eframe application implementing the shell
//! - [`config`]: YAML configuration
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{BoardController, GameStatus, Mark};
//!
//! let mut game = BoardController::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index);
//! }
//!
//! assert_eq!(game.status().winner(), Some(Mark::X));
//!
//! // Occupied cells and moves after the end are ignored
//! assert!(!game.apply_move(8));
//!
//! game.reset();
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE};
pub use config::AppConfig;
pub use error::AppError;
pub use game::{BoardController, ClickOutcome, GameShell};
pub use rules::GameStatus;
