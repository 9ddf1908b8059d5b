//! Circular position arithmetic over a ring of `n` positions.
//!
//! Every function takes the ring size `n` explicitly and expects `n > 0`
//! and positions already in `[0, n)`, except [`wrap`] which reduces any
//! position into range.

/// Reduces `i` into `[0, n)`.
#[inline]
pub fn wrap(i: usize, n: usize) -> usize {
    i % n
}

/// Position following `i`.
#[inline]
pub fn succ(i: usize, n: usize) -> usize {
    (i + 1) % n
}

/// Position preceding `i`.
#[inline]
pub fn pred(i: usize, n: usize) -> usize {
    (i + n - 1) % n
}

/// Number of positions in the inclusive circular run `start ..= end`.
///
/// A run with `start == end` has length 1.
#[inline]
pub fn segment_len(start: usize, end: usize, n: usize) -> usize {
    (end + n - start) % n + 1
}

/// Number of positions in the run `succ(end) ..= start`.
///
/// For `start != end` this is one more than the number of positions lying
/// outside the segment `start ..= end`. The move generator rejects segments
/// for which it is below 3.
#[inline]
pub fn outside_span(start: usize, end: usize, n: usize) -> usize {
    (start + n - end - 1) % n + 1
}

/// True iff `pos` lies in the inclusive circular run `start ..= end`.
#[inline]
pub fn contains(start: usize, end: usize, pos: usize, n: usize) -> bool {
    (pos + n - start) % n < segment_len(start, end, n)
}

/// Positions of the inclusive circular run `start ..= end`, in order.
pub fn run(start: usize, end: usize, n: usize) -> impl Iterator<Item = usize> {
    (0..segment_len(start, end, n)).map(move |k| (start + k) % n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succ_pred_wrap_around() {
        assert_eq!(succ(4, 5), 0);
        assert_eq!(pred(0, 5), 4);
        assert_eq!(succ(2, 5), 3);
        assert_eq!(pred(3, 5), 2);
        assert_eq!(wrap(12, 5), 2);
    }

    #[test]
    fn test_segment_len() {
        assert_eq!(segment_len(1, 3, 6), 3);
        assert_eq!(segment_len(3, 3, 6), 1);
        // 4, 5, 0, 1
        assert_eq!(segment_len(4, 1, 6), 4);
        assert_eq!(segment_len(1, 0, 6), 6);
    }

    #[test]
    fn test_outside_span_complements_segment() {
        let n = 7;
        for start in 0..n {
            for end in 0..n {
                if start == end {
                    continue;
                }
                assert_eq!(
                    segment_len(start, end, n) + outside_span(start, end, n),
                    n + 1,
                    "start={start} end={end}"
                );
            }
        }
    }

    #[test]
    fn test_contains() {
        assert!(contains(4, 1, 5, 6));
        assert!(contains(4, 1, 0, 6));
        assert!(!contains(4, 1, 2, 6));
        assert!(!contains(4, 1, 3, 6));
        assert!(contains(2, 2, 2, 6));
    }

    #[test]
    fn test_run_wraps() {
        let positions: Vec<usize> = run(4, 1, 6).collect();
        assert_eq!(positions, vec![4, 5, 0, 1]);
    }
}
