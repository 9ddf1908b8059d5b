//! The mutable tour over a fixed set of cities.

use rand::Rng;

use super::ring;
use crate::cost::{CostModel, Point};
use crate::error::{Result, TspError};

/// Cities and the order in which they are visited.
///
/// The order is always a permutation of the city ids `1..=len()`. Public
/// mutation is limited to whole-problem operations (placing or adding
/// cities, replacing the order after validation); the annealer rewrites the
/// order through the move appliers only.
///
/// # Examples
///
/// ```
/// use u_tsp_anneal::cost::CostModel;
/// use u_tsp_anneal::tour::Tour;
///
/// let mut tour = Tour::new(0);
/// tour.add_city(0.0, 0.0);
/// tour.add_city(1.0, 0.0);
/// tour.add_city(1.0, 1.0);
/// tour.add_city(0.0, 1.0);
/// assert_eq!(tour.order(), &[1, 2, 3, 4]);
/// assert!((tour.total_cost(&CostModel::default()) - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    cities: Vec<Point>,
    order: Vec<usize>,
}

impl Tour {
    /// Creates a problem with `n` cities at the origin, in identity order.
    ///
    /// Coordinates are assigned afterwards by [`place_cities`](Self::place_cities)
    /// or replaced wholesale by [`with_cities`](Self::with_cities).
    pub fn new(n: usize) -> Self {
        Self {
            cities: vec![Point::default(); n],
            order: (1..=n).collect(),
        }
    }

    /// Creates a tour over the given coordinates, in identity order.
    pub fn with_cities<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let cities: Vec<Point> = points.into_iter().map(Into::into).collect();
        let order = (1..=cities.len()).collect();
        Self { cities, order }
    }

    /// Scatters every city uniformly over the unit square and resets the
    /// visiting order to identity.
    pub fn place_cities<R: Rng>(&mut self, rng: &mut R) {
        for city in &mut self.cities {
            city.x = rng.random::<f64>();
            city.y = rng.random::<f64>();
        }
        self.reset_order();
    }

    /// Appends a city and visits it last. Returns its id.
    pub fn add_city(&mut self, x: f64, y: f64) -> usize {
        self.cities.push(Point::new(x, y));
        let id = self.cities.len();
        self.order.push(id);
        id
    }

    /// Restores the identity order `1, 2, ..., n`.
    pub fn reset_order(&mut self) {
        self.order.clear();
        self.order.extend(1..=self.cities.len());
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// City coordinates, indexed by `id - 1`.
    pub fn cities(&self) -> &[Point] {
        &self.cities
    }

    /// Current visiting order as city ids.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Coordinates of city `id` (1-based).
    ///
    /// # Panics
    /// Panics if `id` is 0 or greater than `len()`.
    #[inline]
    pub fn city(&self, id: usize) -> &Point {
        &self.cities[id - 1]
    }

    /// Coordinates of the city visited at position `pos`.
    #[inline]
    pub fn point_at(&self, pos: usize) -> &Point {
        self.city(self.order[pos])
    }

    /// Replaces the visiting order.
    ///
    /// Fails without modifying the tour unless `order` is a permutation of
    /// `1..=len()`.
    pub fn set_order(&mut self, order: Vec<usize>) -> Result<()> {
        check_permutation(&order, self.len())?;
        self.order = order;
        Ok(())
    }

    /// True iff the order visits every city exactly once.
    pub fn is_permutation(&self) -> bool {
        check_permutation(&self.order, self.len()).is_ok()
    }

    /// Cost of the edge from position `pos` to its circular successor.
    #[inline]
    pub fn edge_cost_at(&self, model: &CostModel, pos: usize) -> f64 {
        let next = ring::succ(pos, self.len());
        model.edge_cost(self.point_at(pos), self.point_at(next))
    }

    /// Full circular tour cost under `model`. Tours of fewer than two cities
    /// have no edges and cost 0.
    pub fn total_cost(&self, model: &CostModel) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }
        (0..self.len()).map(|pos| self.edge_cost_at(model, pos)).sum()
    }

    pub(crate) fn order_mut(&mut self) -> &mut [usize] {
        &mut self.order
    }

    pub(crate) fn replace_order(&mut self, order: Vec<usize>) {
        debug_assert_eq!(order.len(), self.order.len());
        self.order = order;
    }
}

fn check_permutation(order: &[usize], n: usize) -> Result<()> {
    if order.len() != n {
        return Err(TspError::invalid_tour(format!(
            "order has {} entries for {n} cities",
            order.len()
        )));
    }
    let mut seen = vec![false; n + 1];
    for &id in order {
        if id == 0 || id > n {
            return Err(TspError::invalid_tour(format!(
                "city id {id} outside 1..={n}"
            )));
        }
        if seen[id] {
            return Err(TspError::invalid_tour(format!("city {id} visited twice")));
        }
        seen[id] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::Goal;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unit_square() -> Tour {
        Tour::with_cities([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn test_new_problem_identity() {
        let tour = Tour::new(5);
        assert_eq!(tour.len(), 5);
        assert_eq!(tour.order(), &[1, 2, 3, 4, 5]);
        assert!(tour.is_permutation());
    }

    #[test]
    fn test_empty_problem() {
        let tour = Tour::new(0);
        assert!(tour.is_empty());
        assert_eq!(tour.total_cost(&CostModel::default()), 0.0);
    }

    #[test]
    fn test_place_cities_in_unit_square() {
        let mut tour = Tour::new(50);
        let mut rng = StdRng::seed_from_u64(7);
        tour.place_cities(&mut rng);
        assert!(tour
            .cities()
            .iter()
            .all(|p| (0.0..1.0).contains(&p.x) && (0.0..1.0).contains(&p.y)));
        assert_eq!(tour.order(), (1..=50).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_add_city_extends_order() {
        let mut tour = Tour::new(2);
        let id = tour.add_city(0.3, 0.7);
        assert_eq!(id, 3);
        assert_eq!(tour.order(), &[1, 2, 3]);
        assert_eq!(tour.city(3), &Point::new(0.3, 0.7));
    }

    #[test]
    fn test_total_cost_square_perimeter() {
        let tour = unit_square();
        assert!((tour.total_cost(&CostModel::default()) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_total_cost_crossed_square() {
        let mut tour = unit_square();
        tour.set_order(vec![1, 3, 2, 4]).unwrap();
        let expected = 2.0 + 2.0 * 2f64.sqrt();
        assert!((tour.total_cost(&CostModel::default()) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_total_cost_maximize_negates() {
        let tour = unit_square();
        let model = CostModel::new(Goal::Maximize, 0.0);
        assert!((tour.total_cost(&model) + 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_set_order_rejects_non_permutation() {
        let mut tour = unit_square();
        assert!(tour.set_order(vec![1, 2, 2, 4]).is_err());
        assert!(tour.set_order(vec![1, 2, 3]).is_err());
        assert!(tour.set_order(vec![0, 1, 2, 3]).is_err());
        assert!(tour.set_order(vec![1, 2, 3, 5]).is_err());
        assert_eq!(tour.order(), &[1, 2, 3, 4]);
    }
}
