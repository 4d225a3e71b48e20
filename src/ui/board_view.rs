//! Board rendering for the Tic-Tac-Toe GUI

use crate::board::{Mark, Pos, BOARD_SIZE};
use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::shell_view::ShellView;
use super::theme::*;

/// Board view handles rendering and input for the 3x3 grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any.
    ///
    /// `preview` is the mark to ghost under the pointer on empty cells, or
    /// `None` when no move can be made. Clicks are reported whenever
    /// `accept_clicks` is set, including on occupied cells.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        view: &ShellView,
        preview: Option<Mark>,
        accept_clicks: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y).max(3.0 * CELL_GAP + 2.0 * BOARD_MARGIN);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN - (BOARD_SIZE as f32 - 1.0) * CELL_GAP)
            / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        for (pos, mark) in view.board.iter() {
            self.draw_cell(&painter, pos, view.is_highlighted(pos));
            self.draw_mark(&painter, pos, mark, false);
        }

        if !accept_clicks {
            return None;
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));

        if let (Some(pos), Some(mark)) = (hovered, preview) {
            if view.board.is_empty(pos) {
                self.draw_mark(&painter, pos, mark, true);
            }
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw a cell background
    fn draw_cell(&self, painter: &Painter, pos: Pos, highlighted: bool) {
        let rect = self.cell_rect(pos);
        let fill = if highlighted { WIN_HIGHLIGHT } else { CELL_BG };
        let radius = CornerRadius::same(CELL_CORNER_RADIUS);

        painter.rect_filled(rect, radius, fill);
        painter.rect_stroke(rect, radius, Stroke::new(1.0, CELL_BORDER), StrokeKind::Inside);
    }

    /// Draw a mark centred in its cell, translucent when `ghost`
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, ghost: bool) {
        let color = match mark {
            Mark::X => X_MARK,
            Mark::O => O_MARK,
            Mark::Empty => return,
        };
        let color = if ghost { hover_preview(color) } else { color };

        painter.text(
            self.cell_rect(pos).center(),
            Align2::CENTER_CENTER,
            mark.symbol(),
            FontId::proportional(self.cell_size * MARK_FONT_RATIO),
            color,
        );
    }

    /// Screen rectangle of a cell
    pub fn cell_rect(&self, pos: Pos) -> Rect {
        let step = self.cell_size + CELL_GAP;
        let min = self.board_rect.min
            + Vec2::new(BOARD_MARGIN + pos.col as f32 * step, BOARD_MARGIN + pos.row as f32 * step);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a cell. Gaps and margins map to `None`.
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let step = self.cell_size + CELL_GAP;

        let col = ((relative.x - BOARD_MARGIN) / step).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / step).floor() as i32;

        if !Pos::is_valid(row, col) {
            return None;
        }

        let pos = Pos::new(row as u8, col as u8);
        self.cell_rect(pos).contains(screen_pos).then_some(pos)
    }
}
