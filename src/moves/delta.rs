//! Incremental cost change of a candidate move.
//!
//! Each function reads only the cities adjacent to the segment boundaries
//! and never mutates the tour, so the acceptance test can run before the
//! move is committed. Edge costs are symmetric, which is what lets the
//! internal edges of a reversed segment drop out of the sum.
//!
//! # Panics
//!
//! All functions index the tour directly. Moves must come from
//! [`MoveGenerator`](super::MoveGenerator) or pass `validate`.

use super::types::{Move, Reversal, Transport};
use crate::cost::CostModel;
use crate::tour::{ring, Tour};

/// Cost change from reversing `start ..= end`.
///
/// ```text
/// before:  b -> a ... c -> d
/// after:   b -> c ... a -> d
/// delta = -cost(b, a) - cost(c, d) + cost(b, c) + cost(a, d)
/// ```
pub fn reversal_delta(tour: &Tour, model: &CostModel, mv: &Reversal) -> f64 {
    let n = tour.len();
    let a = tour.point_at(mv.start);
    let b = tour.point_at(ring::pred(mv.start, n));
    let c = tour.point_at(mv.end);
    let d = tour.point_at(ring::succ(mv.end, n));

    -model.edge_cost(b, a) - model.edge_cost(c, d) + model.edge_cost(b, c) + model.edge_cost(a, d)
}

/// Cost change from splicing `start ..= end` in between `dest` and
/// `dest_next`.
///
/// ```text
/// before:  p -> s1 ... s2 -> q    d1 -> d2
/// after:   p -> q                 d1 -> s1 ... s2 -> d2
/// ```
pub fn transport_delta(tour: &Tour, model: &CostModel, mv: &Transport) -> f64 {
    let s1 = tour.point_at(mv.start);
    let s2 = tour.point_at(mv.end);
    let d1 = tour.point_at(mv.dest);
    let d2 = tour.point_at(mv.dest_next);
    let p = tour.point_at(mv.before);
    let q = tour.point_at(mv.after);

    -model.edge_cost(s2, q) - model.edge_cost(s1, p) - model.edge_cost(d1, d2)
        + model.edge_cost(s1, d1)
        + model.edge_cost(s2, d2)
        + model.edge_cost(p, q)
}

/// Cost change of either move kind.
pub fn move_delta(tour: &Tour, model: &CostModel, mv: &Move) -> f64 {
    match mv {
        Move::Reversal(r) => reversal_delta(tour, model, r),
        Move::Transport(t) => transport_delta(tour, model, t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::Goal;
    use crate::moves::apply;

    fn unit_square() -> Tour {
        Tour::with_cities([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    fn hexagon() -> Tour {
        Tour::with_cities((0..6).map(|k| {
            let angle = k as f64 * std::f64::consts::PI / 3.0;
            (0.5 + 0.4 * angle.cos(), 0.5 + 0.4 * angle.sin())
        }))
    }

    #[test]
    fn test_reversal_uncrosses_square() {
        let mut tour = unit_square();
        tour.set_order(vec![1, 3, 2, 4]).unwrap();
        let model = CostModel::default();
        // Reversing positions 1..=2 restores 1, 2, 3, 4.
        let delta = reversal_delta(&tour, &model, &Reversal::new(1, 2));
        assert!((delta - (4.0 - (2.0 + 2.0 * 2f64.sqrt()))).abs() < 1e-12);
    }

    #[test]
    fn test_reversal_delta_matches_recomputation() {
        let model = CostModel::from_percent(Goal::Minimize, 30.0).unwrap();
        let mut tour = hexagon();
        tour.set_order(vec![3, 1, 6, 2, 5, 4]).unwrap();
        for (start, end) in [(0, 2), (4, 1), (2, 3), (5, 2)] {
            let mv = Reversal::new(start, end);
            let before = tour.total_cost(&model);
            let delta = reversal_delta(&tour, &model, &mv);
            let mut after = tour.clone();
            apply::reverse(&mut after, &mv).unwrap();
            assert!(
                (after.total_cost(&model) - before - delta).abs() < 1e-12,
                "start={start} end={end}"
            );
        }
    }

    #[test]
    fn test_transport_delta_matches_recomputation() {
        let model = CostModel::from_percent(Goal::Maximize, -20.0).unwrap();
        let mut tour = hexagon();
        tour.set_order(vec![2, 6, 4, 1, 3, 5]).unwrap();
        let n = tour.len();
        for (start, end, dest) in [(0, 1, 3), (0, 1, 4), (4, 5, 1), (5, 0, 2), (2, 3, 5)] {
            let mv = Transport::new(start, end, dest, n);
            mv.validate(n).unwrap();
            let before = tour.total_cost(&model);
            let delta = transport_delta(&tour, &model, &mv);
            let mut after = tour.clone();
            apply::transport(&mut after, &mv).unwrap();
            assert!(
                (after.total_cost(&model) - before - delta).abs() < 1e-12,
                "start={start} end={end} dest={dest}"
            );
        }
    }

    #[test]
    fn test_delta_does_not_mutate() {
        let tour = hexagon();
        let snapshot = tour.clone();
        let model = CostModel::default();
        let _ = move_delta(&tour, &model, &Move::Reversal(Reversal::new(1, 3)));
        let _ = move_delta(&tour, &model, &Transport::new(1, 2, 4, 6).into());
        assert_eq!(tour, snapshot);
    }
}
