//! Board controller and the interface it drives the UI through

mod controller;
mod shell;

pub use controller::{BoardController, ClickOutcome};
pub use shell::GameShell;
