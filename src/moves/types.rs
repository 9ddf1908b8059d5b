//! Move descriptors.

use crate::error::{Result, TspError};
use crate::tour::ring;

/// Reverse the circular segment `start ..= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reversal {
    pub start: usize,
    pub end: usize,
}

impl Reversal {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Checks the segment against a tour of `n` positions.
    ///
    /// At least two positions must lie outside the segment, otherwise the
    /// boundary edges overlap and the move is degenerate.
    pub fn validate(&self, n: usize) -> Result<()> {
        check_segment(self.start, self.end, n)
    }
}

/// Move the circular segment `start ..= end` to sit between `dest` and
/// `dest_next`.
///
/// `before` and `after` are the positions adjacent to the segment. The three
/// derived positions are filled in by [`Transport::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transport {
    pub start: usize,
    pub end: usize,
    pub dest: usize,
    pub dest_next: usize,
    pub before: usize,
    pub after: usize,
}

impl Transport {
    /// Builds a transport over a tour of `n` positions, deriving the
    /// adjacency positions from `start`, `end` and `dest`.
    pub fn new(start: usize, end: usize, dest: usize, n: usize) -> Self {
        Self {
            start,
            end,
            dest,
            dest_next: ring::succ(dest, n),
            before: ring::pred(start, n),
            after: ring::succ(end, n),
        }
    }

    /// Checks the descriptor against a tour of `n` positions.
    ///
    /// `dest` must lie in `succ(end) ..= start - 2`: outside the segment, and
    /// not the position right before it (splicing there is the identity).
    pub fn validate(&self, n: usize) -> Result<()> {
        check_segment(self.start, self.end, n)?;
        if self.dest >= n {
            return Err(TspError::invalid_move(format!(
                "destination {} outside tour of {n} positions",
                self.dest
            )));
        }
        let last_dest = ring::pred(ring::pred(self.start, n), n);
        if !ring::contains(ring::succ(self.end, n), last_dest, self.dest, n) {
            return Err(TspError::invalid_move(format!(
                "destination {} not outside segment {}..={}",
                self.dest, self.start, self.end
            )));
        }
        if *self != Transport::new(self.start, self.end, self.dest, n) {
            return Err(TspError::invalid_move(
                "derived transport positions are inconsistent",
            ));
        }
        Ok(())
    }
}

/// A candidate or accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Reversal(Reversal),
    Transport(Transport),
}

impl Move {
    pub fn start(&self) -> usize {
        match self {
            Move::Reversal(r) => r.start,
            Move::Transport(t) => t.start,
        }
    }

    pub fn end(&self) -> usize {
        match self {
            Move::Reversal(r) => r.end,
            Move::Transport(t) => t.end,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Move::Reversal(_) => "reversal",
            Move::Transport(_) => "transport",
        }
    }

    pub fn validate(&self, n: usize) -> Result<()> {
        match self {
            Move::Reversal(r) => r.validate(n),
            Move::Transport(t) => t.validate(n),
        }
    }
}

impl From<Reversal> for Move {
    fn from(r: Reversal) -> Self {
        Move::Reversal(r)
    }
}

impl From<Transport> for Move {
    fn from(t: Transport) -> Self {
        Move::Transport(t)
    }
}

fn check_segment(start: usize, end: usize, n: usize) -> Result<()> {
    if start >= n || end >= n {
        return Err(TspError::invalid_move(format!(
            "segment {start}..={end} outside tour of {n} positions"
        )));
    }
    if start == end || ring::outside_span(start, end, n) < 3 {
        return Err(TspError::invalid_move(format!(
            "segment {start}..={end} leaves fewer than two cities outside it"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_derived_positions() {
        let t = Transport::new(2, 4, 6, 8);
        assert_eq!(t.dest_next, 7);
        assert_eq!(t.before, 1);
        assert_eq!(t.after, 5);

        let wrapped = Transport::new(0, 1, 7, 8);
        assert_eq!(wrapped.dest_next, 0);
        assert_eq!(wrapped.before, 7);
    }

    #[test]
    fn test_reversal_validate() {
        assert!(Reversal::new(1, 3).validate(6).is_ok());
        assert!(Reversal::new(5, 1).validate(6).is_ok());
        // Only one city outside.
        assert!(Reversal::new(1, 5).validate(6).is_err());
        assert!(Reversal::new(1, 4).validate(6).is_ok());
        assert!(Reversal::new(2, 2).validate(6).is_err());
        assert!(Reversal::new(6, 1).validate(6).is_err());
    }

    #[test]
    fn test_transport_validate_destination() {
        let n = 8;
        // Segment 2..=4, outside positions 5, 6, 7, 0, 1; 1 is the predecessor.
        for dest in [5, 6, 7, 0] {
            assert!(Transport::new(2, 4, dest, n).validate(n).is_ok(), "dest={dest}");
        }
        for dest in [1, 2, 3, 4] {
            assert!(Transport::new(2, 4, dest, n).validate(n).is_err(), "dest={dest}");
        }
    }

    #[test]
    fn test_transport_validate_inconsistent() {
        let mut t = Transport::new(2, 4, 6, 8);
        t.after = 3;
        assert!(t.validate(8).is_err());
    }
}
