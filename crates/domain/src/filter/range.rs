use serde::Serialize;

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Closed interval `[lo, hi]` used for score and year filtering.
///
/// An inverted interval (`lo > hi`) is representable and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClosedRange<T> {
    pub lo: T,
    pub hi: T,
}

pub type ScoreRange = ClosedRange<f64>;
pub type YearRange = ClosedRange<i32>;

pub const FULL_SCORE_RANGE: ScoreRange = ClosedRange::new(SCORE_MIN, SCORE_MAX);
pub const DEFAULT_YEAR_RANGE: YearRange = ClosedRange::new(2020, 2025);

impl<T> ClosedRange<T> {
    pub const fn new(lo: T, hi: T) -> Self {
        Self { lo, hi }
    }
}

impl<T: PartialOrd + Copy> ClosedRange<T> {
    /// Inclusive on both ends.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.lo <= value && value <= self.hi
    }

    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.lo > self.hi
    }

    #[must_use]
    pub fn with_lo(self, lo: T) -> Self {
        Self { lo, ..self }
    }

    #[must_use]
    pub fn with_hi(self, hi: T) -> Self {
        Self { hi, ..self }
    }
}

impl ScoreRange {
    /// True when the range lies within `[SCORE_MIN, SCORE_MAX]` and is not inverted.
    pub fn is_valid_score_range(&self) -> bool {
        SCORE_MIN <= self.lo && self.lo <= self.hi && self.hi <= SCORE_MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let r = ScoreRange::new(60.0, 92.0);
        assert!(r.contains(60.0));
        assert!(r.contains(92.0));
        assert!(!r.contains(59.0));
        assert!(!r.contains(93.0));
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let r = ScoreRange::new(80.0, 20.0);
        assert!(r.is_inverted());
        assert!(!r.contains(50.0));
        assert!(!r.contains(80.0));
        assert!(!r.contains(20.0));
    }

    #[test]
    fn with_bounds_replace_one_side() {
        let r = FULL_SCORE_RANGE.with_lo(80.0);
        assert_eq!(r, ScoreRange::new(80.0, 100.0));
        assert_eq!(DEFAULT_YEAR_RANGE.with_hi(2024), YearRange::new(2020, 2024));
    }

    #[test]
    fn score_range_validity() {
        assert!(FULL_SCORE_RANGE.is_valid_score_range());
        assert!(!ScoreRange::new(-1.0, 50.0).is_valid_score_range());
        assert!(!ScoreRange::new(10.0, 101.0).is_valid_score_range());
        assert!(!ScoreRange::new(70.0, 60.0).is_valid_score_range());
    }
}
