//! Config module - construction-time constants of a game
//!
//! Field size, lookahead length and the figure catalog are fixed for the
//! lifetime of a controller. Invalid values are rejected here, up front, so the
//! transition functions never see them.

use std::fmt;

use crate::catalog::{FigureCatalog, MatrixError};
use crate::types::{FigureId, FIELD_HEIGHT, FIELD_WIDTH, NEXT_COUNT};

/// Precondition violations detected while building a [`GameConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroFieldWidth,
    ZeroFieldHeight,
    /// A dimension that does not fit the signed coordinate space
    FieldTooLarge,
    ZeroNextCount,
    EmptyCatalog,
    DuplicateFigure(FigureId),
    InvalidMatrix {
        figure: FigureId,
        reason: MatrixError,
    },
    /// A resumed snapshot was not produced under this configuration
    StateMismatch,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroFieldWidth => write!(f, "field width must be positive"),
            ConfigError::ZeroFieldHeight => write!(f, "field height must be positive"),
            ConfigError::FieldTooLarge => write!(f, "field dimensions are too large"),
            ConfigError::ZeroNextCount => write!(f, "lookahead queue length must be positive"),
            ConfigError::EmptyCatalog => write!(f, "figure catalog is empty"),
            ConfigError::DuplicateFigure(id) => {
                write!(f, "figure {} appears more than once", id.as_char())
            }
            ConfigError::InvalidMatrix { figure, reason } => {
                write!(f, "figure {}: {}", figure.as_char(), reason)
            }
            ConfigError::StateMismatch => {
                write!(f, "game state does not match the configuration")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validated game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    field_width: usize,
    field_height: usize,
    next_count: usize,
    catalog: FigureCatalog,
}

impl GameConfig {
    /// Validate and build a configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use stackfall_core::{ConfigError, FigureCatalog, GameConfig};
    ///
    /// let config = GameConfig::new(8, 16, 2, FigureCatalog::standard()).unwrap();
    /// assert_eq!(config.field_width(), 8);
    ///
    /// let err = GameConfig::new(0, 16, 2, FigureCatalog::standard()).unwrap_err();
    /// assert_eq!(err, ConfigError::ZeroFieldWidth);
    /// ```
    pub fn new(
        field_width: usize,
        field_height: usize,
        next_count: usize,
        catalog: FigureCatalog,
    ) -> Result<Self, ConfigError> {
        if field_width == 0 {
            return Err(ConfigError::ZeroFieldWidth);
        }
        if field_height == 0 {
            return Err(ConfigError::ZeroFieldHeight);
        }
        if i32::try_from(field_width).is_err() || i32::try_from(field_height).is_err() {
            return Err(ConfigError::FieldTooLarge);
        }
        if next_count == 0 {
            return Err(ConfigError::ZeroNextCount);
        }
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        Ok(Self {
            field_width,
            field_height,
            next_count,
            catalog,
        })
    }

    pub fn field_width(&self) -> usize {
        self.field_width
    }

    pub fn field_height(&self) -> usize {
        self.field_height
    }

    pub fn next_count(&self) -> usize {
        self.next_count
    }

    pub fn catalog(&self) -> &FigureCatalog {
        &self.catalog
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            next_count: NEXT_COUNT,
            catalog: FigureCatalog::standard(),
        }
    }
}
