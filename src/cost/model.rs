//! Edge cost evaluation.

use super::types::{Goal, Point};
use crate::error::{Result, TspError};

/// Abscissa of the vertical barrier ("river") dividing the map.
pub const BARRIER_X: f64 = 0.5;

/// Explicit cost context for one run: objective sense and barrier surcharge.
///
/// Every delta computation receives the model by reference, so two runs with
/// different settings never share hidden state.
///
/// # Examples
///
/// ```
/// use u_tsp_anneal::cost::{CostModel, Goal, Point};
///
/// let model = CostModel::from_percent(Goal::Minimize, 25.0).unwrap();
/// let west = Point::new(0.25, 0.0);
/// let east = Point::new(0.75, 0.0);
/// assert!((model.edge_cost(&west, &east) - 0.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    goal: Goal,
    barrier_cost: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self::new(Goal::Minimize, 0.0)
    }
}

impl CostModel {
    /// Creates a model with an absolute barrier cost (in map units).
    pub fn new(goal: Goal, barrier_cost: f64) -> Self {
        Self { goal, barrier_cost }
    }

    /// Creates a model from a barrier cost given as a percentage of the map
    /// size, in `[-100, 100]`.
    pub fn from_percent(goal: Goal, river_cost_percent: f64) -> Result<Self> {
        if !(-100.0..=100.0).contains(&river_cost_percent) {
            return Err(TspError::RiverCostOutOfRange(river_cost_percent));
        }
        Ok(Self::new(goal, river_cost_percent / 100.0))
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    /// Barrier surcharge in map units.
    pub fn barrier_cost(&self) -> f64 {
        self.barrier_cost
    }

    /// True iff exactly one of the two points lies west of the barrier.
    #[inline]
    pub fn crosses_barrier(a: &Point, b: &Point) -> bool {
        (a.x < BARRIER_X) != (b.x < BARRIER_X)
    }

    /// Signed logical length of the edge `a`–`b`. Symmetric in its arguments.
    #[inline]
    pub fn edge_cost(&self, a: &Point, b: &Point) -> f64 {
        let surcharge = if Self::crosses_barrier(a, b) {
            self.barrier_cost
        } else {
            0.0
        };
        self.goal.sign() * (a.distance(b) + surcharge)
    }
}
