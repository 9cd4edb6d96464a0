//! Catalog module - figure shapes and their spawn offsets
//!
//! Each figure stores a single square rotation matrix. Other orientations are
//! derived on the fly with [`Matrix::rotated`], so the catalog stays pure data.

use std::fmt;

use arrayvec::ArrayVec;

use crate::config::ConfigError;
use crate::types::{FigureId, MAX_MATRIX_SIZE};

const MAX_MATRIX_CELLS: usize = MAX_MATRIX_SIZE * MAX_MATRIX_SIZE;

/// Why a matrix could not be built from text rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// No rows, or rows without a single occupied cell
    Empty,
    /// A row length differs from the number of rows
    NotSquare,
    /// Side length above [`MAX_MATRIX_SIZE`]
    TooLarge(usize),
    /// A character other than `#` or `.`
    InvalidChar(char),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Empty => write!(f, "matrix has no occupied cells"),
            MatrixError::NotSquare => write!(f, "matrix is not square"),
            MatrixError::TooLarge(size) => {
                write!(f, "matrix side {} exceeds {}", size, MAX_MATRIX_SIZE)
            }
            MatrixError::InvalidChar(c) => write!(f, "unexpected matrix character {:?}", c),
        }
    }
}

/// Square grid of booleans, row-major
///
/// Always holds at least one occupied cell; that is what guarantees a falling
/// piece eventually meets the floor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    size: usize,
    cells: ArrayVec<bool, MAX_MATRIX_CELLS>,
}

impl Matrix {
    /// Build a matrix from text rows, `#` for occupied and `.` for empty
    ///
    /// # Examples
    ///
    /// ```
    /// use stackfall_core::Matrix;
    ///
    /// let t = Matrix::parse(&[".#.", "###", "..."]).unwrap();
    /// assert_eq!(t.size(), 3);
    /// assert!(t.get(0, 1));
    /// assert!(!t.get(0, 0));
    /// ```
    pub fn parse(rows: &[&str]) -> Result<Self, MatrixError> {
        let size = rows.len();
        if size == 0 {
            return Err(MatrixError::Empty);
        }
        if size > MAX_MATRIX_SIZE {
            return Err(MatrixError::TooLarge(size));
        }

        let mut cells = ArrayVec::new();
        for row in rows {
            if row.chars().count() != size {
                return Err(MatrixError::NotSquare);
            }
            for c in row.chars() {
                match c {
                    '#' => cells.push(true),
                    '.' => cells.push(false),
                    other => return Err(MatrixError::InvalidChar(other)),
                }
            }
        }

        if !cells.iter().any(|&occupied| occupied) {
            return Err(MatrixError::Empty);
        }

        Ok(Self { size, cells })
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the cell at (row, col) is occupied; out of range reads as empty
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        self.cells[row * self.size + col]
    }

    /// Occupied cells as (row, col) pairs
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &occupied)| occupied)
            .map(move |(i, _)| ((i / size) as i32, (i % size) as i32))
    }

    /// Quarter turn clockwise
    ///
    /// Four turns give back the original matrix.
    pub fn rotated(&self) -> Self {
        let n = self.size;
        let mut cells = ArrayVec::new();
        for row in 0..n {
            for col in 0..n {
                cells.push(self.cells[(n - 1 - col) * n + row]);
            }
        }
        Self { size: n, cells }
    }

    /// Text rows in the same notation [`Matrix::parse`] accepts
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|&c| if c { '#' } else { '.' }).collect())
            .collect()
    }
}

/// Catalog entry: a figure id, its spawn matrix and its spawn center offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    id: FigureId,
    matrix: Matrix,
    /// (row, col) added to the spawn anchor; the column is relative to the field center
    center_offset: (i32, i32),
}

impl Figure {
    /// Build a figure from text rows, see [`Matrix::parse`]
    pub fn new(id: FigureId, rows: &[&str], center_offset: (i32, i32)) -> Result<Self, ConfigError> {
        let matrix =
            Matrix::parse(rows).map_err(|reason| ConfigError::InvalidMatrix { figure: id, reason })?;
        Ok(Self {
            id,
            matrix,
            center_offset,
        })
    }

    pub fn id(&self) -> FigureId {
        self.id
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn center_offset(&self) -> (i32, i32) {
        self.center_offset
    }
}

/// Fixed set of figures a game draws from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureCatalog {
    figures: Vec<Figure>,
}

impl FigureCatalog {
    /// Build a catalog, rejecting an empty set and duplicate ids
    pub fn new(figures: Vec<Figure>) -> Result<Self, ConfigError> {
        if figures.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for (i, figure) in figures.iter().enumerate() {
            if figures[..i].iter().any(|f| f.id == figure.id) {
                return Err(ConfigError::DuplicateFigure(figure.id));
            }
        }
        Ok(Self { figures })
    }

    /// The seven standard tetrominoes
    ///
    /// Three-wide figures spawn with their top row one above the ceiling.
    pub fn standard() -> Self {
        let figures = STANDARD_FIGURES
            .iter()
            .filter_map(|(id, rows, offset)| Figure::new(*id, rows, *offset).ok())
            .collect();
        Self { figures }
    }

    pub fn get(&self, id: FigureId) -> Option<&Figure> {
        self.figures.iter().find(|f| f.id == id)
    }

    /// Figure at position `index` in catalog order
    pub fn nth(&self, index: usize) -> Option<&Figure> {
        self.figures.get(index)
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Figure> {
        self.figures.iter()
    }
}

impl Default for FigureCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

type FigureRow = (FigureId, &'static [&'static str], (i32, i32));

const STANDARD_FIGURES: [FigureRow; 7] = [
    (FigureId::I, &["....", "####", "....", "...."], (-1, -2)),
    (FigureId::O, &["##", "##"], (0, -1)),
    (FigureId::T, &[".#.", "###", "..."], (-1, -1)),
    (FigureId::S, &[".##", "##.", "..."], (-1, -1)),
    (FigureId::Z, &["##.", ".##", "..."], (-1, -1)),
    (FigureId::J, &["#..", "###", "..."], (-1, -1)),
    (FigureId::L, &["..#", "###", "..."], (-1, -1)),
];
