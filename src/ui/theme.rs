//! Theme constants for the Tic-Tac-Toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const CELL_BG: Color32 = Color32::WHITE;
pub const CELL_BORDER: Color32 = Color32::from_rgb(60, 62, 66);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 230, 60); // Yellow

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(30, 80, 220); // Blue
pub const O_MARK: Color32 = Color32::from_rgb(220, 40, 40); // Red

// Functions for colors that can't be const
pub fn hover_preview(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 70)
}

// Text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);

// Sizes
pub const BOARD_MARGIN: f32 = 12.0;
pub const CELL_GAP: f32 = 6.0;
pub const CELL_CORNER_RADIUS: u8 = 6;
pub const MARK_FONT_RATIO: f32 = 0.6;
