//! Property tests for move generation, pricing and application.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_tsp_anneal::cost::{CostModel, Goal, Point};
use u_tsp_anneal::moves::{apply, delta, Move, MoveGenerator, Reversal};
use u_tsp_anneal::tour::Tour;

fn random_tour(n: usize, rng: &mut StdRng) -> Tour {
    Tour::with_cities((0..n).map(|_| (rng.random::<f64>(), rng.random::<f64>())))
}

fn sorted(order: &[usize]) -> Vec<usize> {
    let mut ids = order.to_vec();
    ids.sort_unstable();
    ids
}

proptest! {
    #[test]
    fn applied_moves_keep_a_permutation(n in 4usize..40, seed in any::<u64>(), steps in 1usize..150) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tour = random_tour(n, &mut rng);
        let generator = MoveGenerator::new(n).unwrap();

        for _ in 0..steps {
            let mv = generator.sample(&mut rng).unwrap();
            apply::apply(&mut tour, &mv).unwrap();
            prop_assert_eq!(sorted(tour.order()), (1..=n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn delta_matches_full_recomputation(
        n in 4usize..30,
        seed in any::<u64>(),
        maximize in any::<bool>(),
        river in -100.0f64..=100.0,
        steps in 1usize..60,
    ) {
        let goal = if maximize { Goal::Maximize } else { Goal::Minimize };
        let model = CostModel::from_percent(goal, river).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tour = random_tour(n, &mut rng);
        let generator = MoveGenerator::new(n).unwrap();

        let mut tracked = tour.total_cost(&model);
        for _ in 0..steps {
            let mv = generator.sample(&mut rng).unwrap();
            let before = tour.total_cost(&model);
            let de = delta::move_delta(&tour, &model, &mv);
            apply::apply(&mut tour, &mv).unwrap();
            let after = tour.total_cost(&model);
            tracked += de;
            prop_assert!(
                (after - before - de).abs() < 1e-9,
                "{:?}: {} vs {}",
                mv,
                after - before,
                de
            );
        }
        prop_assert!((tracked - tour.total_cost(&model)).abs() < 1e-8);
    }

    #[test]
    fn reversal_is_an_involution(n in 4usize..40, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tour = random_tour(n, &mut rng);
        let generator = MoveGenerator::new(n).unwrap();
        let (start, end, _) = generator.segment(&mut rng).unwrap();
        let original = tour.order().to_vec();

        let mv = Move::Reversal(Reversal::new(start, end));
        apply::apply(&mut tour, &mv).unwrap();
        apply::apply(&mut tour, &mv).unwrap();
        prop_assert_eq!(tour.order(), original.as_slice());
    }

    #[test]
    fn barrier_surcharge_is_exact_and_symmetric(
        x1 in 0.0f64..1.0, y1 in 0.0f64..1.0,
        x2 in 0.0f64..1.0, y2 in 0.0f64..1.0,
        river in -100.0f64..=100.0,
        maximize in any::<bool>(),
    ) {
        let goal = if maximize { Goal::Maximize } else { Goal::Minimize };
        let plain = CostModel::from_percent(goal, 0.0).unwrap();
        let river_model = CostModel::from_percent(goal, river).unwrap();
        let a = Point::new(x1, y1);
        let b = Point::new(x2, y2);

        let diff = river_model.edge_cost(&a, &b) - plain.edge_cost(&a, &b);
        let expected = if (x1 < 0.5) != (x2 < 0.5) {
            goal.sign() * river_model.barrier_cost()
        } else {
            0.0
        };
        prop_assert!((diff - expected).abs() < 1e-12);
        prop_assert_eq!(river_model.edge_cost(&a, &b), river_model.edge_cost(&b, &a));
    }
}
