//! Field module - the fixed-size grid of cells
//!
//! Row-major flat storage (`row * width + col`), origin at the top-left, rows
//! growing downward. Operations that change the grid return a new `Field`; a
//! whole-grid copy per transition is cheap at playing-field sizes.

use crate::piece::Piece;
use crate::types::{FigureId, FIELD_HEIGHT, FIELD_WIDTH};

/// A single grid cell
///
/// `figure == None` means empty. `is_current`/`is_ghost` mark cells painted by
/// the live piece and its landing preview; they never outlive one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub figure: Option<FigureId>,
    pub is_current: bool,
    pub is_ghost: bool,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        figure: None,
        is_current: false,
        is_ghost: false,
    };

    /// A cell holding part of a locked piece
    pub fn locked(figure: FigureId) -> Self {
        Self {
            figure: Some(figure),
            ..Self::EMPTY
        }
    }

    pub fn is_empty(&self) -> bool {
        self.figure.is_none()
    }

    /// Occupied and not painted by the current piece or the ghost
    pub fn is_locked(&self) -> bool {
        self.figure.is_some() && !self.is_current && !self.is_ghost
    }

    pub fn is_marked(&self) -> bool {
        self.is_current || self.is_ghost
    }
}

/// Marker flags applied when imprinting a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Markers {
    pub is_current: bool,
    pub is_ghost: bool,
}

impl Markers {
    /// Permanent cells (a locked piece)
    pub const NONE: Markers = Markers {
        is_current: false,
        is_ghost: false,
    };
    pub const CURRENT: Markers = Markers {
        is_current: true,
        is_ghost: false,
    };
    pub const GHOST: Markers = Markers {
        is_current: false,
        is_ghost: true,
    };
}

/// The playing field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Field {
    /// A field of empty, unmarked cells
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width * height],
        }
    }

    /// Build a field from text rows, one letter per cell
    ///
    /// Figure letters (`I`, `O`, `T`, ...) become locked cells and `.` is empty.
    /// Returns `None` for ragged rows, an empty grid, or unknown characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use stackfall_core::Field;
    /// use stackfall_types::FigureId;
    ///
    /// let field = Field::from_rows(&["....", "IIII"]).unwrap();
    /// assert_eq!(field.height(), 2);
    /// assert_eq!(field.get(1, 0).unwrap().figure, Some(FigureId::I));
    /// assert!(field.is_row_full(1));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let width = rows.first()?.chars().count();
        if width == 0 {
            return None;
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for row in rows {
            if row.chars().count() != width {
                return None;
            }
            for c in row.chars() {
                let cell = match c {
                    '.' => Cell::EMPTY,
                    other => Cell::locked(FigureId::from_char(other)?),
                };
                cells.push(cell);
            }
        }

        Some(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at (row, col), `None` outside the grid
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Overwrite a cell; returns false outside the grid
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Every cell in the row holds a figure
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| !cell.is_empty()))
    }

    /// Copy of this field with the piece's occupied cells painted in
    ///
    /// Cells outside the grid (typically above the ceiling) are skipped;
    /// deciding whether a placement is legal is the collision check's job.
    pub fn imprint(&self, piece: &Piece, markers: Markers) -> Field {
        let mut out = self.clone();
        let cell = Cell {
            figure: Some(piece.figure),
            is_current: markers.is_current,
            is_ghost: markers.is_ghost,
        };
        for (row, col) in piece.cells() {
            out.set(row, col, cell);
        }
        out
    }

    /// Copy of this field with every cell matching `predicate` reset to empty
    pub fn clean_marked(&self, predicate: impl Fn(&Cell) -> bool) -> Field {
        let mut out = self.clone();
        for cell in &mut out.cells {
            if predicate(cell) {
                *cell = Cell::EMPTY;
            }
        }
        out
    }

    /// Drop the current-piece and ghost paint
    pub fn strip_markers(&self) -> Field {
        self.clean_marked(Cell::is_marked)
    }

    /// Copy one row of `src` into row `dst` of this field
    ///
    /// Both fields must share the same width; out-of-range rows are ignored.
    pub(crate) fn copy_row_from(&mut self, dst: usize, src: &Field, src_row: usize) {
        if dst >= self.height || src.width != self.width {
            return;
        }
        if let Some(cells) = src.row(src_row) {
            let start = dst * self.width;
            self.cells[start..start + self.width].copy_from_slice(cells);
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::blank(FIELD_WIDTH, FIELD_HEIGHT)
    }
}
