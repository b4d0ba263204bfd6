//! Real intervals for ray parameter ranges and channel clamping.

/// Interval [min, max] over `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl Interval {
    /// The unit interval [0, 1] that colour channels are clamped to.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Create a new interval with given min and max values
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Hits strictly beyond `epsilon` and short of infinity.
    pub const fn forward(epsilon: f64) -> Self {
        Self::new(epsilon, f64::INFINITY)
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp the given value to be within this interval's bounds.
    ///
    /// NaN clamps to `min`.
    pub fn clamp(&self, x: f64) -> f64 {
        if x.is_nan() {
            self.min
        } else {
            x.clamp(self.min, self.max)
        }
    }
}
