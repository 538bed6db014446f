use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Unknown difficulty, expected one of: easy, normal, hard")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
