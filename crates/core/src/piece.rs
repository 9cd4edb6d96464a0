//! Piece module - a figure instance placed on the field

use crate::catalog::{Figure, Matrix};
use crate::types::FigureId;

/// Field position of a matrix's (0, 0) cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub y: i32,
    pub x: i32,
}

impl Offset {
    pub fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }
}

/// The current (or ghost) piece: a figure id, its present rotation and its offset
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub figure: FigureId,
    pub matrix: Matrix,
    pub offset: Offset,
}

impl Piece {
    pub fn new(figure: FigureId, matrix: Matrix, offset: Offset) -> Self {
        Self {
            figure,
            matrix,
            offset,
        }
    }

    /// Place a catalog figure at its spawn position
    ///
    /// Horizontally centered (`field_width / 2` plus the figure's column offset),
    /// vertically at the figure's own row offset, which may be negative.
    pub fn spawn(figure: &Figure, field_width: usize) -> Self {
        let (row_offset, col_offset) = figure.center_offset();
        Self {
            figure: figure.id(),
            matrix: figure.matrix().clone(),
            offset: Offset::new(row_offset, (field_width / 2) as i32 + col_offset),
        }
    }

    /// Copy moved by `dy` rows and `dx` columns
    pub fn shifted(&self, dy: i32, dx: i32) -> Self {
        Self {
            offset: Offset::new(self.offset.y + dy, self.offset.x + dx),
            ..self.clone()
        }
    }

    /// Copy with the matrix turned a quarter clockwise, offset unchanged
    pub fn rotated(&self) -> Self {
        Self {
            matrix: self.matrix.rotated(),
            ..self.clone()
        }
    }

    /// Occupied cells in field coordinates, as (row, col)
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.matrix
            .occupied()
            .map(move |(r, c)| (r + self.offset.y, c + self.offset.x))
    }
}
