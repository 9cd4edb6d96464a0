//! Shared types - the vocabulary spoken between the core and its collaborators
//!
//! Everything here is plain data with no external dependencies, so the core,
//! the terminal front end and the JSON recorder can all agree on it.
//!
//! # Field Dimensions
//!
//! The default playing field is:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! Row index grows downward. Pieces spawn horizontally centered, often partly
//! above row 0.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FIELD_WIDTH` | 10 | Columns in the default field |
//! | `FIELD_HEIGHT` | 20 | Rows in the default field |
//! | `NEXT_COUNT` | 3 | Length of the lookahead queue |
//! | `TETRIS_ROWS` | 4 | Rows cleared at once that earn the bonus |
//! | `TETRIS_BONUS` | 5 | Flat score awarded for a tetris |
//! | `MAX_MATRIX_SIZE` | 4 | Largest side of a figure rotation matrix |
//! | `DEFAULT_TICK_MS` | 500 | Gravity cadence used by the terminal runner |
//!
//! # Examples
//!
//! ```
//! use stackfall_types::{Command, Direction, FigureId, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! assert_eq!(FigureId::from_char('t'), Some(FigureId::T));
//! assert_eq!(FigureId::T.as_char(), 'T');
//!
//! assert_eq!(Command::from_str("left"), Some(Command::Move(Direction::Left)));
//! assert_eq!(Command::from_str("pause"), Some(Command::SetPause(true)));
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

/// Default field width in cells (10 columns)
pub const FIELD_WIDTH: usize = 10;

/// Default field height in cells (20 rows)
pub const FIELD_HEIGHT: usize = 20;

/// Default length of the lookahead queue
pub const NEXT_COUNT: usize = 3;

/// Number of rows cleared by a single lock that counts as a tetris
pub const TETRIS_ROWS: usize = 4;

/// Flat score for a tetris (instead of one point per row)
pub const TETRIS_BONUS: u32 = 5;

/// Largest supported side length of a figure rotation matrix
pub const MAX_MATRIX_SIZE: usize = 4;

/// Gravity interval used by the terminal runner when none is given
pub const DEFAULT_TICK_MS: u64 = 500;

/// The seven tetromino figure ids
///
/// A figure catalog maps some or all of these ids to shapes. The id is what a
/// field cell remembers after a piece locks, so renderers can color by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FigureId {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl FigureId {
    /// All figure ids in canonical order
    pub const ALL: [FigureId; 7] = [
        FigureId::I,
        FigureId::O,
        FigureId::T,
        FigureId::S,
        FigureId::Z,
        FigureId::J,
        FigureId::L,
    ];

    /// Parse a figure id from a single letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use stackfall_types::FigureId;
    ///
    /// assert_eq!(FigureId::from_char('i'), Some(FigureId::I));
    /// assert_eq!(FigureId::from_char('L'), Some(FigureId::L));
    /// assert_eq!(FigureId::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(FigureId::I),
            'O' => Some(FigureId::O),
            'T' => Some(FigureId::T),
            'S' => Some(FigureId::S),
            'Z' => Some(FigureId::Z),
            'J' => Some(FigureId::J),
            'L' => Some(FigureId::L),
            _ => None,
        }
    }

    /// Uppercase letter for this figure
    pub fn as_char(&self) -> char {
        match self {
            FigureId::I => 'I',
            FigureId::O => 'O',
            FigureId::T => 'T',
            FigureId::S => 'S',
            FigureId::Z => 'Z',
            FigureId::J => 'J',
            FigureId::L => 'L',
        }
    }
}

/// Direction of a requested move
///
/// `Up` rotates the piece, `Left`/`Right` shift it, `Down` leaves it where it
/// is (gravity is driven by ticks, not by moves).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Discrete commands delivered to the game controller
///
/// These are the only inputs the core accepts. Gravity arrives as `Tick`
/// at a cadence chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Start a fresh game from any phase
    Restart,
    /// Pause (`true`) or resume (`false`) a running game
    SetPause(bool),
    /// One gravity step
    Tick,
    /// Rotate or shift the current piece
    Move(Direction),
}

impl Command {
    /// Parse a command from its lowercase name
    ///
    /// # Examples
    ///
    /// ```
    /// use stackfall_types::{Command, Direction};
    ///
    /// assert_eq!(Command::from_str("restart"), Some(Command::Restart));
    /// assert_eq!(Command::from_str("Resume"), Some(Command::SetPause(false)));
    /// assert_eq!(Command::from_str("up"), Some(Command::Move(Direction::Up)));
    /// assert_eq!(Command::from_str("drop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "restart" => Some(Command::Restart),
            "pause" => Some(Command::SetPause(true)),
            "resume" => Some(Command::SetPause(false)),
            "tick" => Some(Command::Tick),
            "up" => Some(Command::Move(Direction::Up)),
            "down" => Some(Command::Move(Direction::Down)),
            "left" => Some(Command::Move(Direction::Left)),
            "right" => Some(Command::Move(Direction::Right)),
            _ => None,
        }
    }

    /// Lowercase name, the inverse of [`Command::from_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Restart => "restart",
            Command::SetPause(true) => "pause",
            Command::SetPause(false) => "resume",
            Command::Tick => "tick",
            Command::Move(dir) => dir.as_str(),
        }
    }
}

/// Controller phase, derived from the state flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Before the first restart
    Intro,
    Playing,
    Paused,
    /// Terminal until the next restart
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Intro => "intro",
            Phase::Playing => "playing",
            Phase::Paused => "paused",
            Phase::GameOver => "gameOver",
        }
    }
}
