//! Metropolis acceptance criterion.

use rand::Rng;

/// Probability of accepting a move with cost change `delta` at `temperature`.
///
/// `1` for `delta <= 0`, `exp(-delta / t)` otherwise. At a non-positive
/// temperature every worsening move is rejected.
#[inline]
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta <= 0.0 {
        1.0
    } else if temperature <= 0.0 {
        0.0
    } else {
        (-delta / temperature).exp()
    }
}

/// Decides whether to accept a move.
///
/// Improving moves are always accepted without consuming randomness; other
/// moves draw `U ~ [0, 1)` and are accepted iff `U < exp(-delta / t)`, so a
/// zero delta is always accepted.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_tsp_anneal::anneal::metropolis;
///
/// let mut rng = StdRng::seed_from_u64(0);
/// assert!(metropolis(-1.0, 0.5, &mut rng));
/// assert!(metropolis(0.0, 0.5, &mut rng));
/// ```
#[inline]
pub fn metropolis<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    delta < 0.0 || rng.random::<f64>() < acceptance_probability(delta, temperature)
}
