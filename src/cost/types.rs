//! Plane points and objective sense.

use crate::error::TspError;

/// A city location in the normalized unit plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Objective sense of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Goal {
    /// Shortest tour.
    #[default]
    Minimize,
    /// Longest tour.
    Maximize,
}

impl Goal {
    /// Multiplier applied to every edge length: `+1` or `-1`.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Goal::Minimize => 1.0,
            Goal::Maximize => -1.0,
        }
    }
}

/// Numeric goal as accepted on command lines: `1` minimizes, `-1` maximizes.
impl TryFrom<i32> for Goal {
    type Error = TspError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Goal::Minimize),
            -1 => Ok(Goal::Maximize),
            other => Err(TspError::InvalidGoal(other)),
        }
    }
}
