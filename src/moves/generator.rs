//! Random candidate moves.

use rand::Rng;

use super::types::{Move, Reversal, Transport};
use crate::error::{Result, TspError};
use crate::tour::ring;

/// Smallest tour on which a move can change the topology.
pub const MIN_CITIES: usize = 4;

/// Cap on segment redraws before sampling is declared inconsistent.
///
/// For `n >= 4` a single draw is rejected with probability at most 2/3,
/// so the cap is only reachable if the tour size was not checked.
pub const MAX_SAMPLE_ATTEMPTS: usize = 10_000;

/// Draws candidate moves uniformly over segments of a tour of fixed size.
///
/// # Algorithm
///
/// 1. `start` uniform in `[0, n)`
/// 2. `end` uniform in `[0, n - 1)`, shifted up by one when `end >= start`,
///    so that `end != start`
/// 3. Redraw while fewer than two positions lie outside `start ..= end`
/// 4. Fair coin: reversal, or transport to
///    `dest = end + floor((outside_span - 2) * U) + 1` (wrapped), which lands
///    in `succ(end) ..= start - 2`
#[derive(Debug, Clone, Copy)]
pub struct MoveGenerator {
    n: usize,
}

impl MoveGenerator {
    /// Creates a generator for a tour of `n` cities.
    pub fn new(n: usize) -> Result<Self> {
        if n < MIN_CITIES {
            return Err(TspError::TooFewCities {
                required: MIN_CITIES,
                actual: n,
            });
        }
        Ok(Self { n })
    }

    /// Tour size this generator samples for.
    pub fn cities(&self) -> usize {
        self.n
    }

    /// Draws a non-degenerate segment. Returns `(start, end, outside_span)`.
    pub fn segment<R: Rng>(&self, rng: &mut R) -> Result<(usize, usize, usize)> {
        let n = self.n;
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let start = rng.random_range(0..n);
            let mut end = rng.random_range(0..n - 1);
            if end >= start {
                end += 1;
            }
            let outside = ring::outside_span(start, end, n);
            if outside >= 3 {
                return Ok((start, end, outside));
            }
        }
        Err(TspError::internal(format!(
            "no valid segment after {MAX_SAMPLE_ATTEMPTS} draws on {n} cities"
        )))
    }

    /// Draws a reversal or a transport with equal probability.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<Move> {
        let (start, end, outside) = self.segment(rng)?;
        if rng.random_bool(0.5) {
            let offset = ((outside - 2) as f64 * rng.random::<f64>()).floor() as usize;
            let dest = ring::wrap(end + offset + 1, self.n);
            Ok(Move::Transport(Transport::new(start, end, dest, self.n)))
        } else {
            Ok(Move::Reversal(Reversal::new(start, end)))
        }
    }
}
