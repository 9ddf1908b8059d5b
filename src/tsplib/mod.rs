//! TSPLIB text I/O.
//!
//! Problems are read from a `NODE_COORD_SECTION` and mapped into the unit
//! square the annealer works in; tours are read from a `TOUR_SECTION`. Both
//! can be written back out from a [`Tour`](crate::tour::Tour).
//!
//! Parsing is permissive in the usual TSPLIB way: unknown header keys are
//! ignored and keys are matched case-insensitively.
//!
//! # Reference
//!
//! Reinelt, G. (1991). "TSPLIB - A Traveling Salesman Problem Library",
//! *ORSA Journal on Computing* 3(4), 376-384.

mod problem;
mod tour;

pub use problem::{EdgeWeightType, TsplibProblem, DISPLAY_SCALE};
pub use tour::TsplibTour;

/// Splits a `KEY : value` (or `KEY = value`) header line.
fn split_header(line: &str) -> Option<(String, &str)> {
    line.split_once(':')
        .or_else(|| line.split_once('='))
        .map(|(key, value)| (key.trim().to_ascii_uppercase(), value.trim()))
}

const EOF_MARKER: &str = "EOF";
