//! Tour state: city coordinates and the circular visiting order.
//!
//! City ids are 1-based (`1..=N`); positions in the visiting order are
//! 0-based. `order()[p]` is the id of the `p`-th city visited, and the last
//! city connects back to the first.
//!
//! All circular index arithmetic used by the move generator, the delta
//! calculators and the move appliers lives in [`ring`].

pub mod ring;
mod state;

pub use state::Tour;
