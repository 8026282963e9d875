//! Build configuration.

use crate::{BspError, DEFAULT_EPSILON};

/// Settings threaded through classification and tree construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BspConfig {
    /// Tolerance used when deciding which side of a splitting line a point is on.
    pub epsilon: f64,
}

impl BspConfig {
    /// Creates a configuration with the default tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the classification tolerance.
    ///
    /// The value is checked by [`BspConfig::validate`] when a tree is built.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Checks that the tolerance is finite and non-negative.
    ///
    /// A negative tolerance makes a point both ahead and behind a line, and a
    /// NaN tolerance puts every point on it.
    pub fn validate(&self) -> Result<(), BspError> {
        if self.epsilon.is_finite() && self.epsilon >= 0.0 {
            Ok(())
        } else {
            Err(BspError::InvalidEpsilon(self.epsilon))
        }
    }
}

impl Default for BspConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}
