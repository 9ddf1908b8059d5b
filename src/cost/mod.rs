//! Edge cost model.
//!
//! The logical length of an edge is its Euclidean length, plus a fixed
//! surcharge (or discount) when the edge crosses the vertical barrier at
//! `x = 0.5`, multiplied by the objective sign. Maximizing the tour length
//! is therefore the same search as minimizing its negation.

mod model;
mod types;

pub use model::{CostModel, BARRIER_X};
pub use types::{Goal, Point};
