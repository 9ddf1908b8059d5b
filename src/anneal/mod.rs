//! Simulated annealing over reversal and transport moves.
//!
//! A run is a sequence of temperature levels. Each level draws up to
//! `trials_per_city * n` candidate moves, accepts them by the Metropolis
//! criterion, and stops early once more than `successes_per_city * n` have
//! been accepted. The temperature is then multiplied by the cooling factor.
//! A level with no accepted move means the tour is frozen.
//!
//! The level is the only suspension point: [`Annealer::step`] runs exactly
//! one level so an animator can redraw in between, and
//! [`Annealer::run_to_completion`] calls it until frozen.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"
//! - Press et al. (1992), *Numerical Recipes in C*, 2nd ed., section 10.9

pub mod acceptance;
mod config;
mod runner;

pub use acceptance::metropolis;
pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealState, Annealer, LevelStats};
