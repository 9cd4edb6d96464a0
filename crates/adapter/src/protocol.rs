//! Wire format for recorded transitions (one JSON object per line).

use serde::{Deserialize, Serialize};

use crate::core::{Cell, GameState, Piece};
use crate::types::Command;

/// One recorded transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateMessage {
    pub seq: u64,
    /// Command name as accepted by `Command::from_str`
    pub command: String,
    pub phase: String,
    pub score: u32,
    pub pieces: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<PieceSnapshot>,
    /// Upcoming figure letters, front first
    pub next: String,
    /// Field rows top to bottom, figure letters with `.` for empty
    pub field: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub figure: char,
    pub row: i32,
    pub col: i32,
    /// Rotation matrix rows, `#` for occupied
    pub matrix: Vec<String>,
}

impl PieceSnapshot {
    pub fn from_piece(piece: &Piece) -> Self {
        Self {
            figure: piece.figure.as_char(),
            row: piece.offset.y,
            col: piece.offset.x,
            matrix: piece.matrix.to_rows(),
        }
    }
}

impl StateMessage {
    pub fn from_state(seq: u64, command: Command, state: &GameState) -> Self {
        let field = state
            .field()
            .rows()
            .map(|row| row.iter().map(cell_char).collect())
            .collect();

        Self {
            seq,
            command: command.as_str().to_string(),
            phase: state.phase().as_str().to_string(),
            score: state.score(),
            pieces: state.total_pieces_spawned(),
            current: state.current().map(PieceSnapshot::from_piece),
            next: state.next_queue().iter().map(|id| id.as_char()).collect(),
            field,
        }
    }
}

/// Ghost cells record as empty; locked and current cells carry their letter.
fn cell_char(cell: &Cell) -> char {
    match cell.figure {
        Some(id) if !cell.is_ghost => id.as_char(),
        _ => '.',
    }
}
