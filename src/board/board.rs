//! Fixed nine-cell board

use super::{Mark, Pos, TOTAL_CELLS};

/// Game board, indexed `row * 3 + col`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board from raw cells (row-major)
    pub fn from_cells(cells: [Mark; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Overwrite a cell. Move legality is the controller's concern.
    #[inline]
    pub fn set(&mut self, pos: Pos, mark: Mark) {
        self.cells[pos.to_index()] = mark;
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Mark::Empty)
    }

    /// Number of non-empty cells
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m != Mark::Empty).count()
    }

    /// Row-major view of all cells
    #[inline]
    pub fn cells(&self) -> &[Mark; TOTAL_CELLS] {
        &self.cells
    }

    /// Iterate positions with their marks
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Mark)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &mark)| (Pos::from_index(idx), mark))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
