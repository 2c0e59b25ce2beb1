use super::errors::RootFindingError;

/// Closed interval `[low, high]`, immutable once built.
///
/// Brackets produced by [`scan`](super::scan::scan) always have
/// `low < high`; [`Interval::new`] also accepts `low == high`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    low:  f64,
    high: f64,
}

impl Interval {
    /// # Errors
    /// [`RootFindingError::InvalidInterval`] if either bound is NaN/inf or `low > high`.
    pub fn new(low: f64, high: f64) -> Result<Self, RootFindingError> {
        if !(low.is_finite() && high.is_finite()) || low > high {
            return Err(RootFindingError::InvalidInterval { low, high });
        }
        Ok(Self { low, high })
    }

    /// Scanner-internal constructor; sample points are finite and ordered.
    #[inline]
    pub(crate) fn from_samples(low: f64, high: f64) -> Self {
        debug_assert!(low <= high);
        Self { low, high }
    }

    #[inline] pub fn low (&self) -> f64 { self.low }
    #[inline] pub fn high(&self) -> f64 { self.high }

    #[inline]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
