/// Errors returned by the kinematics functions.
///
/// Missing data is never an error: NaN samples flow through the math as NaN.
/// These variants cover usage errors only (incompatible shapes, a bad time
/// axis), which fail fast instead of broadcasting or truncating.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum KinematicsError {
    #[error("position sequences have different shapes: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("expected planar (two-column) positions, got {ncols} columns")]
    NotPlanar { ncols: usize },
    #[error("centroid needs at least one marker track")]
    NoMarkers,
    #[error("time axis has {time_len} samples but position has {n_time}")]
    TimeLengthMismatch { time_len: usize, n_time: usize },
    #[error("time stamps must be strictly increasing (violated at index {index})")]
    TimeNotMonotonic { index: usize },
    #[error("sampling frequency must be positive and finite, got {value}")]
    InvalidSamplingFrequency { value: f64 },
}
