//! Per-edge itinerary report.
//!
//! Lists the tour in visiting order: city id, coordinates, the signed cost
//! of the edge to the next city (wrapping at the end), and an `R` marker on
//! edges that cross the barrier when the barrier cost is nonzero.

use std::fmt::{Display, Formatter};

use crate::cost::CostModel;
use crate::tour::{ring, Tour};

/// One row of a [`PathReport`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeReport {
    /// Id of the city the edge leaves.
    pub city: usize,
    pub x: f64,
    pub y: f64,
    /// Signed cost of the edge to the next city.
    pub cost: f64,
    /// True when the edge crosses the barrier and crossing has a cost.
    pub crosses_barrier: bool,
}

/// The tour as a table of edges.
///
/// # Examples
///
/// ```
/// use u_tsp_anneal::cost::CostModel;
/// use u_tsp_anneal::report::PathReport;
/// use u_tsp_anneal::tour::Tour;
///
/// let tour = Tour::with_cities([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let report = PathReport::new(&tour, &CostModel::default());
/// assert_eq!(report.edges().len(), 4);
/// assert!((report.total() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathReport {
    edges: Vec<EdgeReport>,
}

impl PathReport {
    pub fn new(tour: &Tour, model: &CostModel) -> Self {
        let flag_crossings = model.barrier_cost() != 0.0;
        let n = tour.len();
        let edges = (0..n)
            .map(|pos| {
                let city = tour.order()[pos];
                let here = tour.city(city);
                let next = tour.point_at(ring::succ(pos, n));
                EdgeReport {
                    city,
                    x: here.x,
                    y: here.y,
                    cost: model.edge_cost(here, next),
                    crosses_barrier: flag_crossings && CostModel::crosses_barrier(here, next),
                }
            })
            .collect();
        Self { edges }
    }

    pub fn edges(&self) -> &[EdgeReport] {
        &self.edges
    }

    /// Sum of the edge costs, recomputed from scratch.
    pub fn total(&self) -> f64 {
        self.edges.iter().map(|e| e.cost).sum()
    }

    /// Number of edges crossing the barrier (0 when crossing is free).
    pub fn crossings(&self) -> usize {
        self.edges.iter().filter(|e| e.crosses_barrier).count()
    }
}

impl Display for PathReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "     City        X         Y       Cost")?;
        for edge in &self.edges {
            writeln!(
                f,
                "     {:>3}     {:>8.4}  {:>8.4} {:>8.4}{}",
                edge.city,
                edge.x,
                edge.y,
                edge.cost,
                if edge.crosses_barrier { " R" } else { "" }
            )?;
        }
        Ok(())
    }
}
