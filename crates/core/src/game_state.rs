//! Game state module - the immutable snapshot handed to collaborators
//!
//! A `GameState` is a plain value. Transitions build a new one; nothing ever
//! changes a snapshot that has already been returned, so renderers may keep
//! old snapshots around and compare them freely.

use crate::config::GameConfig;
use crate::field::Field;
use crate::piece::Piece;
use crate::queue::PieceQueue;
use crate::types::Phase;

/// Complete game snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub(crate) field: Field,
    /// `None` only in the intro, before the first restart
    pub(crate) current: Option<Piece>,
    pub(crate) next_queue: PieceQueue,
    pub(crate) score: u32,
    /// Pieces locked since the last restart
    pub(crate) total_pieces_spawned: u32,
    pub(crate) in_game: bool,
    pub(crate) paused: bool,
    pub(crate) show_intro: bool,
    pub(crate) game_over: bool,
}

impl GameState {
    /// The state before the first restart: blank field, no piece, empty queue
    pub fn intro(config: &GameConfig) -> Self {
        Self {
            field: Field::blank(config.field_width(), config.field_height()),
            current: None,
            next_queue: PieceQueue::new(),
            score: 0,
            total_pieces_spawned: 0,
            in_game: false,
            paused: false,
            show_intro: true,
            game_over: false,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn next_queue(&self) -> &PieceQueue {
        &self.next_queue
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_pieces_spawned(&self) -> u32 {
        self.total_pieces_spawned
    }

    pub fn in_game(&self) -> bool {
        self.in_game
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn show_intro(&self) -> bool {
        self.show_intro
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Controller phase implied by the flags
    pub fn phase(&self) -> Phase {
        if self.show_intro {
            Phase::Intro
        } else if self.game_over {
            Phase::GameOver
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Playing
        }
    }

    /// Whether this snapshot could have been produced under `config`
    ///
    /// Checks the field size, that every queued and current figure is in the
    /// catalog, and that the queue is either unfilled or `next_count` long.
    pub fn fits(&self, config: &GameConfig) -> bool {
        let catalog = config.catalog();
        self.field.width() == config.field_width()
            && self.field.height() == config.field_height()
            && (self.next_queue.is_empty() || self.next_queue.len() == config.next_count())
            && self.next_queue.iter().all(|id| catalog.get(id).is_some())
            && self
                .current
                .as_ref()
                .map_or(true, |piece| catalog.get(piece.figure).is_some())
    }

    /// Same score, counters and flags over new board contents
    pub(crate) fn with_board(&self, field: Field, current: Piece, next_queue: PieceQueue) -> GameState {
        GameState {
            field,
            current: Some(current),
            next_queue,
            score: self.score,
            total_pieces_spawned: self.total_pieces_spawned,
            in_game: self.in_game,
            paused: self.paused,
            show_intro: self.show_intro,
            game_over: self.game_over,
        }
    }

    /// Copy of this state with a different field
    ///
    /// Meant for staging positions (tests, puzzles, replays). The field is
    /// taken as-is: markers are not recomputed until the next transition.
    pub fn with_field(&self, field: Field) -> GameState {
        GameState {
            field,
            ..self.clone()
        }
    }

    /// Copy of this state with a different current piece, see [`GameState::with_field`]
    pub fn with_current(&self, current: Piece) -> GameState {
        GameState {
            current: Some(current),
            ..self.clone()
        }
    }
}
