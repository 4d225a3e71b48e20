//! Main application for the Tic-Tac-Toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, Id, Modal, RichText, TopBottomPanel};
use tracing::{debug, info};

use crate::board::Mark;
use crate::config::{AppConfig, PlayerNames};
use crate::game::{BoardController, ClickOutcome};
use crate::rules::GameStatus;
use super::board_view::BoardView;
use super::shell_view::ShellView;
use super::theme::*;

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    controller: BoardController,
    view: ShellView,
    board_view: BoardView,
    config: AppConfig,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let mut app = Self {
            controller: BoardController::new(),
            view: ShellView::new(),
            board_view: BoardView::default(),
            config,
        };
        app.new_game();
        app
    }

    fn new_game(&mut self) {
        self.view.dismiss_result();
        self.controller.new_game(&mut self.view);
        info!("New game");
    }

    /// Forward a board click to the controller
    fn on_cell_clicked(&mut self, index: usize) {
        match self.controller.click(index, &mut self.view) {
            ClickOutcome::Reset => info!("New game"),
            ClickOutcome::Moved => {
                if !self.config.show_result_dialog {
                    self.view.dismiss_result();
                }
            }
            ClickOutcome::Ignored => debug!(index, "Click ignored"),
        }
    }

    /// The board is inert while the result dialog is up
    fn accepts_board_clicks(&self) -> bool {
        !self.view.is_result_open()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    /// Render whose turn it is, or the result
    fn render_status_bar(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            let text = status_line(&self.controller.status(), self.controller.turn(), &self.config.players);
            ui.label(RichText::new(text).size(14.0).color(TEXT_PRIMARY));
            ui.label(
                RichText::new(format!("Move #{}", self.controller.moves_played()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
            ui.add_space(4.0);
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        let preview = (!self.controller.status().is_over()).then(|| self.controller.turn());
        let accept_clicks = self.accepts_board_clicks();

        let clicked = CentralPanel::default()
            .show(ctx, |ui| self.board_view.show(ui, &self.view, preview, accept_clicks))
            .inner;

        if let Some(pos) = clicked {
            self.on_cell_clicked(pos.to_index());
        }
    }

    /// Modal "Game Over" dialog
    fn render_result_dialog(&mut self, ctx: &Context) {
        let Some(status) = self.view.pending_result else {
            return;
        };

        let response = Modal::new(Id::new("game_over")).show(ctx, |ui| {
            ui.set_min_width(220.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Game Over").size(12.0).color(TEXT_SECONDARY));
                ui.add_space(8.0);
                ui.label(RichText::new(result_message(&status, &self.config.players)).size(18.0).strong());
                ui.add_space(12.0);
                ui.button("OK").clicked()
            })
            .inner
        });

        // Escape or a click on the backdrop also closes it
        if response.inner || response.should_close() {
            self.view.dismiss_result();
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, dismiss) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape),
            )
        });

        if dismiss && self.view.is_result_open() {
            self.view.dismiss_result();
        }
        if new_game {
            self.new_game();
        }
    }
}

/// Text of the end-of-game dialog
pub fn result_message(status: &GameStatus, players: &PlayerNames) -> String {
    match status {
        GameStatus::Won { winner, .. } => format!("Player {} wins!", players.name_of(*winner)),
        GameStatus::Draw => "It's a draw!".to_string(),
        GameStatus::InProgress => String::new(),
    }
}

/// Text of the status bar
pub fn status_line(status: &GameStatus, turn: Mark, players: &PlayerNames) -> String {
    match status {
        GameStatus::InProgress => format!("{} to move", players.name_of(turn)),
        _ => format!("{} Click the board to play again.", result_message(status, players)),
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);
        self.render_board(ctx);
        self.render_result_dialog(ctx);
    }
}
