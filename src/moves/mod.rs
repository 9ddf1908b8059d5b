//! Local moves over a circular tour.
//!
//! Two move families act on a contiguous circular segment `start ..= end`
//! of the visiting order:
//!
//! - **Reversal**: the segment is read backward. Only the two boundary
//!   edges change.
//! - **Transport**: the segment is cut out and spliced back in between the
//!   positions `dest` and `succ(dest)`, keeping its orientation. Three edges
//!   are removed and three are added.
//!
//! Candidate moves are drawn by [`MoveGenerator`], priced by the pure
//! functions in [`delta`] without touching the tour, and realized by the
//! appliers in [`apply`] once accepted.
//!
//! # References
//!
//! - Lin (1965), "Computer Solutions of the Traveling Salesman Problem"
//! - Press et al. (1992), *Numerical Recipes in C*, 2nd ed., section 10.9

pub mod apply;
pub mod delta;
mod generator;
mod types;

pub use generator::{MoveGenerator, MAX_SAMPLE_ATTEMPTS, MIN_CITIES};
pub use types::{Move, Reversal, Transport};
