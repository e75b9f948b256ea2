//! # 2D Grids
//!
//! Row-major grids and the RGBA4 mask grid used by the terrain canvas.

use serde::{Deserialize, Serialize};

/// A dense row-major 2D grid.
///
/// Cells are addressed by `(col, row)` with the origin in the bottom-left,
/// matching the terrain coordinate convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid2D<T> {
    cols: usize,
    rows: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid2D<T> {
    /// Creates a grid filled with copies of `fill`.
    pub fn new(cols: usize, rows: usize, fill: T) -> Self {
        Self {
            cols,
            rows,
            cells: vec![fill; cols * rows],
        }
    }
}

impl<T> Grid2D<T> {
    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total cell count (`cols * rows`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a zero-area grid.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True if `(col, row)` lies inside the grid.
    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows
    }

    /// Returns the cell at `(col, row)`, or `None` when out of bounds.
    pub fn get(&self, col: i32, row: i32) -> Option<&T> {
        if self.contains(col, row) {
            Some(&self.cells[row as usize * self.cols + col as usize])
        } else {
            None
        }
    }

    /// Mutable cell access, `None` when out of bounds.
    pub fn get_mut(&mut self, col: i32, row: i32) -> Option<&mut T> {
        if self.contains(col, row) {
            Some(&mut self.cells[row as usize * self.cols + col as usize])
        } else {
            None
        }
    }

    /// Overwrites the cell at `(col, row)`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, col: i32, row: i32, value: T) {
        if let Some(cell) = self.get_mut(col, row) {
            *cell = value;
        }
    }

    /// Iterates all cells as `(col, row, &cell)` in row-major order.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i % cols, i / cols, cell))
    }

    /// Raw cell slice in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}

/// Bitwise write operations for [`MaskGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteOp {
    /// Overwrite the cell with the value
    Set,
    /// `cell &= value`
    And,
    /// `cell |= value`
    Or,
    /// `cell ^= value`
    Xor,
    /// Clear the value's bits: `cell &= !value`
    Clear,
}

impl WriteOp {
    /// Applies the operation to a cell.
    pub fn apply(self, cell: u16, value: u16) -> u16 {
        match self {
            WriteOp::Set => value,
            WriteOp::And => cell & value,
            WriteOp::Or => cell | value,
            WriteOp::Xor => cell ^ value,
            WriteOp::Clear => cell & !value,
        }
    }
}

/// A grid of 16-bit masks with a configurable write operation.
///
/// The terrain canvas stores one RGBA4 layer mask per tile and switches the
/// write operation between paint and clear strokes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskGrid {
    grid: Grid2D<u16>,
    write_op: WriteOp,
}

impl MaskGrid {
    /// Creates a zeroed mask grid.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            grid: Grid2D::new(cols, rows, 0),
            write_op: WriteOp::Set,
        }
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// The active write operation.
    pub fn write_op(&self) -> WriteOp {
        self.write_op
    }

    /// Selects the operation applied by subsequent [`MaskGrid::write`] calls.
    pub fn set_write_op(&mut self, op: WriteOp) {
        self.write_op = op;
    }

    /// Reads the mask at `(col, row)`; out of bounds reads as 0.
    pub fn get(&self, col: i32, row: i32) -> u16 {
        self.grid.get(col, row).copied().unwrap_or(0)
    }

    /// Applies the active write operation at `(col, row)`.
    /// Out-of-bounds writes are ignored.
    pub fn write(&mut self, value: u16, col: i32, row: i32) {
        let op = self.write_op;
        if let Some(cell) = self.grid.get_mut(col, row) {
            *cell = op.apply(*cell, value);
        }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid2D<u16> {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_bounds_and_access() {
        let mut grid = Grid2D::new(4, 3, 0u8);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.len(), 12);
        assert!(grid.contains(3, 2));
        assert!(!grid.contains(4, 0));
        assert!(!grid.contains(-1, 0));

        grid.set(2, 1, 7);
        assert_eq!(grid.get(2, 1), Some(&7));
        assert_eq!(grid.get(9, 9), None);

        // ignored, not a panic
        grid.set(99, 99, 1);
    }

    #[test]
    fn indexed_iteration_is_row_major() {
        let mut grid = Grid2D::new(2, 2, 0u32);
        grid.set(0, 0, 1);
        grid.set(1, 0, 2);
        grid.set(0, 1, 3);
        grid.set(1, 1, 4);
        let collected: Vec<(usize, usize, u32)> =
            grid.iter_indexed().map(|(c, r, v)| (c, r, *v)).collect();
        assert_eq!(
            collected,
            vec![(0, 0, 1), (1, 0, 2), (0, 1, 3), (1, 1, 4)]
        );
    }

    #[test]
    fn write_ops_match_bit_semantics() {
        assert_eq!(WriteOp::Set.apply(0xFFFF, 0x00F0), 0x00F0);
        assert_eq!(WriteOp::And.apply(0x0FF0, 0x00F0), 0x00F0);
        assert_eq!(WriteOp::Or.apply(0x0F00, 0x00F0), 0x0FF0);
        assert_eq!(WriteOp::Xor.apply(0x00F0, 0x00F0), 0x0000);
        assert_eq!(WriteOp::Clear.apply(0x0FF0, 0x00F0), 0x0F00);
    }

    #[test]
    fn mask_grid_applies_active_op() {
        let mut masks = MaskGrid::new(2, 2);
        masks.set_write_op(WriteOp::Set);
        masks.write(0x0FF0, 0, 0);
        assert_eq!(masks.get(0, 0), 0x0FF0);

        masks.set_write_op(WriteOp::Clear);
        masks.write(0x00F0, 0, 0);
        assert_eq!(masks.get(0, 0), 0x0F00);

        // out of bounds: read 0, write ignored
        assert_eq!(masks.get(5, 5), 0);
        masks.write(0xFFFF, 5, 5);
    }

    #[test]
    fn grid_serializes() {
        let grid = Grid2D::new(2, 1, 9u16);
        let json = serde_json::to_string(&grid).expect("Failed to serialize");
        let back: Grid2D<u16> = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(back, grid);
    }
}
