//! Error types.
//!
//! A frozen annealing run is a normal outcome and is never reported here.
//! Errors are precondition violations detected before any state mutation,
//! malformed input text, or I/O failures.

use thiserror::Error;

/// Errors produced by tour construction, annealing, and TSPLIB I/O.
#[derive(Debug, Error)]
pub enum TspError {
    /// The tour has too few cities for a move to change its topology.
    #[error("at least {required} cities are required, got {actual}")]
    TooFewCities { required: usize, actual: usize },

    /// An [`AnnealConfig`](crate::anneal::AnnealConfig) failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A numeric goal other than `1` (minimize) or `-1` (maximize).
    #[error("goal must be 1 (minimize) or -1 (maximize), got {0}")]
    InvalidGoal(i32),

    /// The barrier crossing percentage lies outside `[-100, 100]`.
    #[error("river cost must be within [-100, 100] percent, got {0}")]
    RiverCostOutOfRange(f64),

    /// A move descriptor does not address a valid segment of the tour.
    #[error("invalid move: {0}")]
    InvalidMove(String),

    /// A visiting order that is not a permutation of the city ids.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// `step()` was called before `start()`.
    #[error("annealing has not been started")]
    NotStarted,

    /// Malformed TSPLIB text.
    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Internal consistency failure (should not occur in normal operation).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;

impl TspError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn invalid_move(message: impl Into<String>) -> Self {
        Self::InvalidMove(message.into())
    }

    pub fn invalid_tour(message: impl Into<String>) -> Self {
        Self::InvalidTour(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_cities_message() {
        let err = TspError::TooFewCities {
            required: 4,
            actual: 2,
        };
        assert_eq!(err.to_string(), "at least 4 cities are required, got 2");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TspError = io.into();
        assert!(matches!(err, TspError::Io(_)));
    }
}
