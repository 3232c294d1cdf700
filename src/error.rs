// chunk-broadphase contributors, 20261019

use thiserror::Error;

/// Errors raised while building points or configuring a grid
///
/// Out-of-bounds lookups and removals of unknown objects are not errors; they
/// are skipped silently.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GridError {
    /// A point component was NaN or infinite
    #[error("point component {axis} must be finite (got {value})")]
    NonFiniteComponent {
        axis: char,
        value: f64
    },

    #[error("chunk size must be finite and strictly positive (got {0})")]
    InvalidChunkSize(f64),

    #[error("grid bounds must be finite and non-negative (got {x} x {y})")]
    InvalidBounds {
        x: f64,
        y: f64
    },

    /// An area query was issued for an object without any probe points
    #[error("object produced no probe points")]
    NoProbePoints
}
