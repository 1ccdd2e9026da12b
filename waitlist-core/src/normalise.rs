//! Min-max normalisation against dataset-observed ranges.
//!
//! A [`Range`] starts empty (`min = +inf`, `max = -inf`) and widens as values
//! are folded in with [`Range::include`]. Normalising against a range whose
//! bounds coincide would divide by zero; both [`normalise`] and
//! [`normalise_inverted`] return [`NEUTRAL_SCORE`] in that case so a field
//! that is constant across the roster neither helps nor hurts anyone.

/// Normalised value reported for a degenerate range.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Observed bounds of a field across a candidate roster.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    /// Smallest observed value.
    pub min: f64,
    /// Largest observed value.
    pub max: f64,
}

impl Range {
    /// A range that contains no values yet.
    pub const EMPTY: Self = Self {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// Construct a range from explicit bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Widen the range to cover `value`.
    pub const fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Report whether any value has been folded in.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Report whether the range cannot be used as a divisor.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the span of a range is a float subtraction"
    )]
    pub fn is_degenerate(&self) -> bool {
        let span = self.max - self.min;
        !(span.is_finite() && span > 0.0)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<f64> for Range {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut range = Self::EMPTY;
        for value in iter {
            range.include(value);
        }
        range
    }
}

/// Map `value` into `0.0..=1.0` where larger raw values score higher.
///
/// # Examples
///
/// ```
/// use waitlist_core::{Range, normalise};
///
/// assert_eq!(normalise(15.0, Range::new(10.0, 20.0)), 0.5);
/// assert_eq!(normalise(3.0, Range::new(3.0, 3.0)), waitlist_core::NEUTRAL_SCORE);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "min-max normalisation divides by the range span"
)]
pub fn normalise(value: f64, range: Range) -> f64 {
    if range.is_degenerate() {
        return NEUTRAL_SCORE;
    }
    (value - range.min) / (range.max - range.min)
}

/// Map `value` into `0.0..=1.0` where smaller raw values score higher.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "inversion subtracts from one"
)]
pub fn normalise_inverted(value: f64, range: Range) -> f64 {
    1.0 - normalise(value, range)
}
