//! Realizing accepted moves on the tour.
//!
//! Both appliers validate the descriptor first and leave the tour untouched
//! on error. Each only rearranges the existing ids, so the order stays a
//! permutation.

use super::types::{Move, Reversal, Transport};
use crate::error::Result;
use crate::tour::{ring, Tour};

/// Reverses `start ..= end` in place with `len / 2` circular swaps.
pub fn reverse(tour: &mut Tour, mv: &Reversal) -> Result<()> {
    let n = tour.len();
    mv.validate(n)?;

    let swaps = ring::segment_len(mv.start, mv.end, n) / 2;
    let order = tour.order_mut();
    for j in 0..swaps {
        let k = ring::wrap(mv.start + j, n);
        let l = ring::wrap(mv.end + n - j, n);
        order.swap(k, l);
    }
    Ok(())
}

/// Cuts `start ..= end` out and reinserts it after `dest`.
///
/// The new order is the concatenation of three circular runs: the segment,
/// then `dest_next ..= before`, then `after ..= dest`. The rotation of the
/// result differs from the old order, which is immaterial for a cycle.
pub fn transport(tour: &mut Tour, mv: &Transport) -> Result<()> {
    let n = tour.len();
    mv.validate(n)?;

    let order = tour.order();
    let mut rebuilt = Vec::with_capacity(n);
    rebuilt.extend(ring::run(mv.start, mv.end, n).map(|p| order[p]));
    rebuilt.extend(ring::run(mv.dest_next, mv.before, n).map(|p| order[p]));
    rebuilt.extend(ring::run(mv.after, mv.dest, n).map(|p| order[p]));

    tour.replace_order(rebuilt);
    Ok(())
}

/// Applies either move kind.
pub fn apply(tour: &mut Tour, mv: &Move) -> Result<()> {
    match mv {
        Move::Reversal(r) => reverse(tour, r),
        Move::Transport(t) => transport(tour, t),
    }
}
