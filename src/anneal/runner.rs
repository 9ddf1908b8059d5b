//! Annealing state machine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use super::acceptance::metropolis;
use super::config::AnnealConfig;
use crate::cost::{CostModel, Goal};
use crate::error::{Result, TspError};
use crate::moves::{apply, delta, MoveGenerator};
use crate::report::PathReport;
use crate::tour::Tour;

/// Lifecycle of an [`Annealer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnnealState {
    /// No run in progress.
    Idle,
    /// Started; the last level accepted at least one move.
    Running,
    /// The last level accepted no move.
    Frozen,
}

/// Summary of one temperature level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelStats {
    /// 1-based index of the level within the run.
    pub level: usize,
    /// Temperature the level ran at (before cooling).
    pub temperature: f64,
    /// Running cost at the end of the level.
    pub cost: f64,
    /// Candidate moves evaluated.
    pub trials: usize,
    /// Candidate moves accepted.
    pub accepted: usize,
}

impl LevelStats {
    pub fn is_frozen(&self) -> bool {
        self.accepted == 0
    }
}

/// Outcome of a complete run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// Final visiting order (city ids).
    pub order: Vec<usize>,

    /// Incrementally tracked cost of `order`.
    pub cost: f64,

    /// Temperature levels executed.
    pub levels: usize,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,

    /// Accepted moves over the whole run.
    pub accepted_moves: usize,

    /// Candidate moves evaluated over the whole run.
    pub evaluated_moves: usize,

    /// Whether the run ended because a level accepted nothing.
    pub frozen: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Running cost at the start and after every level.
    pub cost_history: Vec<f64>,
}

/// Drives simulated annealing over a [`Tour`] it owns.
///
/// # Examples
///
/// ```
/// use u_tsp_anneal::anneal::{AnnealConfig, Annealer};
/// use u_tsp_anneal::cost::Goal;
/// use u_tsp_anneal::tour::Tour;
///
/// let tour = Tour::with_cities([(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
/// let mut annealer = Annealer::with_config(tour, AnnealConfig::default().with_seed(42)).unwrap();
///
/// let result = annealer.run_to_completion(Goal::Minimize, 0.0).unwrap();
/// assert!(result.frozen);
/// assert!((result.cost - 4.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Annealer {
    tour: Tour,
    config: AnnealConfig,
    rng: StdRng,
    model: CostModel,
    generator: Option<MoveGenerator>,
    state: AnnealState,
    temperature: f64,
    path: f64,
    levels: usize,
    accepted_moves: usize,
    evaluated_moves: usize,
    last_level: Option<LevelStats>,
    cost_history: Vec<f64>,
}

impl Annealer {
    /// Creates an idle annealer with the default schedule and an entropy seed.
    pub fn new(tour: Tour) -> Self {
        let config = AnnealConfig::default();
        let rng = seeded_rng(config.seed);
        Self::build(tour, config, rng)
    }

    /// Creates an idle annealer with a validated configuration.
    pub fn with_config(tour: Tour, config: AnnealConfig) -> Result<Self> {
        config.validate()?;
        let rng = seeded_rng(config.seed);
        Ok(Self::build(tour, config, rng))
    }

    fn build(tour: Tour, config: AnnealConfig, rng: StdRng) -> Self {
        let temperature = config.initial_temperature;
        Self {
            tour,
            config,
            rng,
            model: CostModel::default(),
            generator: None,
            state: AnnealState::Idle,
            temperature,
            path: 0.0,
            levels: 0,
            accepted_moves: 0,
            evaluated_moves: 0,
            last_level: None,
            cost_history: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Problem setup (between runs)
    // ------------------------------------------------------------------

    /// Replaces the problem with `n` cities at the origin. Returns to idle.
    pub fn new_problem(&mut self, n: usize) {
        self.set_tour(Tour::new(n));
    }

    /// Scatters the current cities uniformly using the annealer's random
    /// source and resets the order. Returns to idle.
    pub fn place_cities(&mut self) {
        self.tour.place_cities(&mut self.rng);
        self.reset();
    }

    /// Appends a city to the current problem. Returns its id; returns to idle.
    pub fn add_city(&mut self, x: f64, y: f64) -> usize {
        let id = self.tour.add_city(x, y);
        self.reset();
        id
    }

    /// Replaces the tour wholesale. Returns to idle.
    pub fn set_tour(&mut self, tour: Tour) {
        self.tour = tour;
        self.reset();
    }

    /// Abandons any run in progress and clears its progress, so the
    /// observables describe a problem that has not started.
    pub fn reset(&mut self) {
        self.generator = None;
        self.state = AnnealState::Idle;
        self.temperature = self.config.initial_temperature;
        self.path = 0.0;
        self.levels = 0;
        self.accepted_moves = 0;
        self.evaluated_moves = 0;
        self.last_level = None;
        self.cost_history.clear();
    }

    // ------------------------------------------------------------------
    // Observables
    // ------------------------------------------------------------------

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    pub fn into_tour(self) -> Tour {
        self.tour
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    pub fn state(&self) -> AnnealState {
        self.state
    }

    /// Cost model of the current (or last) run.
    pub fn cost_model(&self) -> &CostModel {
        &self.model
    }

    /// Running tour cost, maintained incrementally.
    pub fn path(&self) -> f64 {
        self.path
    }

    /// Temperature the next level will run at.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Levels executed since the last `start`.
    pub fn levels(&self) -> usize {
        self.levels
    }

    pub fn last_level(&self) -> Option<&LevelStats> {
        self.last_level.as_ref()
    }

    /// Per-edge report of the current tour under the current cost model.
    pub fn report(&self) -> PathReport {
        PathReport::new(&self.tour, &self.model)
    }

    // ------------------------------------------------------------------
    // Scheduler
    // ------------------------------------------------------------------

    /// Begins a run: fixes the objective and barrier cost, resets the
    /// temperature and computes the initial cost with one full pass.
    ///
    /// Fails without changing any state if the tour has fewer than four
    /// cities or the percentage is outside `[-100, 100]`.
    pub fn start(&mut self, goal: Goal, river_cost_percent: f64) -> Result<()> {
        let generator = MoveGenerator::new(self.tour.len())?;
        let model = CostModel::from_percent(goal, river_cost_percent)?;

        self.model = model;
        self.generator = Some(generator);
        self.state = AnnealState::Running;
        self.temperature = self.config.initial_temperature;
        self.path = self.tour.total_cost(&self.model);
        self.levels = 0;
        self.accepted_moves = 0;
        self.evaluated_moves = 0;
        self.last_level = None;
        self.cost_history.clear();
        self.cost_history.push(self.path);

        info!(
            cities = self.tour.len(),
            ?goal,
            river_cost_percent,
            initial_cost = self.path,
            "solving by simulated annealing"
        );
        Ok(())
    }

    /// Runs one temperature level and cools. Returns `true` when the level
    /// accepted no move (frozen).
    ///
    /// Stepping a frozen annealer is allowed and runs another full level,
    /// which normally accepts nothing again.
    pub fn step(&mut self) -> Result<bool> {
        let generator = self.generator.ok_or(TspError::NotStarted)?;
        let n = generator.cities();
        let max_trials = self.config.max_trials(n);
        let max_successes = self.config.max_successes(n);
        let temperature = self.temperature;

        let mut trials = 0;
        let mut accepted = 0;
        while trials < max_trials {
            trials += 1;
            let mv = generator.sample(&mut self.rng)?;
            let de = delta::move_delta(&self.tour, &self.model, &mv);
            if metropolis(de, temperature, &mut self.rng) {
                apply::apply(&mut self.tour, &mv)?;
                self.path += de;
                accepted += 1;
                trace!(
                    kind = mv.kind(),
                    start = mv.start(),
                    end = mv.end(),
                    delta = de,
                    "accepted move"
                );
                if accepted > max_successes {
                    break;
                }
            }
        }

        self.levels += 1;
        self.evaluated_moves += trials;
        self.accepted_moves += accepted;

        if self.config.resync_interval > 0 && self.levels % self.config.resync_interval == 0 {
            self.resync();
        }

        debug!(
            level = self.levels,
            temperature,
            cost = self.path,
            moves = accepted,
            "temperature level"
        );

        self.temperature *= self.config.cooling_factor;
        self.cost_history.push(self.path);
        self.last_level = Some(LevelStats {
            level: self.levels,
            temperature,
            cost: self.path,
            trials,
            accepted,
        });

        let frozen = accepted == 0;
        self.state = if frozen {
            AnnealState::Frozen
        } else {
            AnnealState::Running
        };
        Ok(frozen)
    }

    /// Recomputes the running cost from scratch. Returns the drift that the
    /// incremental updates had accumulated.
    pub fn resync(&mut self) -> f64 {
        let exact = self.tour.total_cost(&self.model);
        let drift = self.path - exact;
        debug!(drift, "resynchronized running cost");
        self.path = exact;
        drift
    }

    /// Starts a run and steps until frozen (or until `max_levels`).
    pub fn run_to_completion(
        &mut self,
        goal: Goal,
        river_cost_percent: f64,
    ) -> Result<AnnealResult> {
        self.run_with_cancel(goal, river_cost_percent, None)
    }

    /// Like [`run_to_completion`](Self::run_to_completion), polling `cancel`
    /// between levels.
    pub fn run_with_cancel(
        &mut self,
        goal: Goal,
        river_cost_percent: f64,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult> {
        self.start(goal, river_cost_percent)?;

        let mut frozen = false;
        let mut cancelled = false;
        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if self.config.max_levels > 0 && self.levels >= self.config.max_levels {
                break;
            }
            if self.step()? {
                frozen = true;
                break;
            }
        }

        info!(
            cost = self.path,
            temperature = self.temperature,
            levels = self.levels,
            frozen,
            cancelled,
            "annealing finished"
        );

        Ok(AnnealResult {
            order: self.tour.order().to_vec(),
            cost: self.path,
            levels: self.levels,
            final_temperature: self.temperature,
            accepted_moves: self.accepted_moves,
            evaluated_moves: self.evaluated_moves,
            frozen,
            cancelled,
            cost_history: self.cost_history.clone(),
        })
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}
