use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot create a mine field with that many rows and/or columns")]
    InvalidDimensions,
    #[error("Mine count does not fit the mine field")]
    InvalidMineCount,
    #[error("Mine coordinates lie outside the mine field")]
    InvalidMineCoordinate,
    #[error("Mine coordinates listed more than once")]
    DuplicateMineCoordinate,
    #[error("Coordinates lie outside the mine field")]
    OutOfBounds,
}

impl GameError {
    /// Whether the error comes from seed values rather than seed structure.
    pub const fn is_value_error(self) -> bool {
        matches!(self, Self::InvalidDimensions)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("Seed is missing the {0}")]
    MissingValue(&'static str),
    #[error("Seed value {0:?} is not an integer")]
    NotAnInteger(String),
    #[error("Cannot create a mine field with a side of {0}")]
    SideTooShort(i64),
}

impl SeedError {
    /// Whether the error comes from seed values rather than seed structure.
    pub const fn is_value_error(&self) -> bool {
        matches!(self, Self::SideTooShort(_))
    }
}
