//! Euclidean travelling salesman approximation by simulated annealing.
//!
//! Cities live in the unit square. A tour is improved by two local moves,
//! each priced incrementally before it is committed:
//!
//! - **Reversal**: reverse a segment of the tour (2-opt).
//! - **Transport**: cut a segment out and splice it in elsewhere (or-opt).
//!
//! Moves are accepted by the Metropolis criterion under a geometric cooling
//! schedule until a whole temperature level accepts nothing.
//!
//! Edge costs may carry a fixed surcharge for crossing a vertical barrier
//! at `x = 0.5`, and the objective may be flipped to find long tours.
//!
//! # Modules
//!
//! - [`cost`]: edge cost model (objective sign, barrier surcharge)
//! - [`tour`]: cities, visiting order, circular index arithmetic
//! - [`moves`]: move sampling, delta computation, move application
//! - [`anneal`]: acceptance test, schedule configuration, the annealer
//! - [`report`]: per-edge itinerary table
//! - [`tsplib`]: TSPLIB problem and tour text I/O
//!
//! # Examples
//!
//! ```
//! use u_tsp_anneal::anneal::{AnnealConfig, Annealer};
//! use u_tsp_anneal::cost::Goal;
//! use u_tsp_anneal::tour::Tour;
//!
//! let mut annealer = Annealer::with_config(Tour::new(30), AnnealConfig::default().with_seed(1))?;
//! annealer.place_cities();
//!
//! // One level at a time, e.g. to redraw between levels.
//! annealer.start(Goal::Minimize, 0.0)?;
//! while !annealer.step()? {}
//!
//! assert!(annealer.tour().is_permutation());
//! println!("{}", annealer.report());
//! # Ok::<(), u_tsp_anneal::TspError>(())
//! ```

pub mod anneal;
pub mod cost;
pub mod error;
pub mod moves;
pub mod report;
pub mod tour;
pub mod tsplib;

pub use error::{Result, TspError};
