//! Configuration for validated ring mutation and planar queries.

use serde::{Deserialize, Serialize};

use crate::ring_error::RingError;

/// Behavior when a validated add meets a record that is already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicateHandling {
    /// Store the duplicate silently.
    Ignore,
    /// Log a warning and store the duplicate.
    #[default]
    Warn,
    /// Reject the duplicate with an error.
    Error,
}

/// Options for a [`Ring`](super::Ring).
///
/// The unchecked `add_*` methods never consult this; only the `try_add_*`
/// methods and the geometric queries do.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingConfig {
    /// Absolute tolerance for planar predicates and degenerate-area checks.
    pub tolerance: f64,
    /// How `try_add_*` treats duplicate records.
    pub duplicates: DuplicateHandling,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            duplicates: DuplicateHandling::Warn,
        }
    }
}

impl RingConfig {
    /// Strict preset: duplicates are errors.
    pub fn strict() -> Self {
        Self {
            duplicates: DuplicateHandling::Error,
            ..Self::default()
        }
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), RingError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(RingError::InvalidConfig(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
