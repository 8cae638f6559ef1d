//! Finite-difference kinematics: distance, velocity and speed.

use log::warn;
use nalgebra::{DMatrix, DVector};

use crate::error::KinematicsError;

/// Time axis for [`velocity`].
#[derive(Clone, Copy, Debug)]
pub enum TimeBase<'a> {
    /// Uniform sampling at the given rate, in samples per second.
    Frequency(f64),
    /// Explicit per-sample time stamps, strictly increasing.
    Timestamps(&'a DVector<f64>),
}

impl Default for TimeBase<'static> {
    /// Unit sampling rate: derivatives are taken per sample index.
    fn default() -> Self {
        TimeBase::Frequency(1.0)
    }
}

pub(crate) fn check_same_shape(
    a: &DMatrix<f64>,
    b: &DMatrix<f64>,
) -> Result<(), KinematicsError> {
    if a.shape() != b.shape() {
        return Err(KinematicsError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}

/// Euclidean distance between two tracks at each time step.
///
/// This is the separation of two simultaneously tracked points, not the
/// displacement between consecutive samples of one track. The result is
/// non-negative, symmetric in the arguments, and NaN at every step where
/// either input has a NaN coordinate.
pub fn distance(
    a: &DMatrix<f64>,
    b: &DMatrix<f64>,
) -> Result<DVector<f64>, KinematicsError> {
    check_same_shape(a, b)?;
    Ok(DVector::from_fn(a.nrows(), |r, _| (a.row(r) - b.row(r)).norm()))
}

/// Finite-difference derivative of a `(n_time, d)` position sequence.
///
/// Central differences in the interior and one-sided differences at the two
/// boundary rows keep the output the full `n_time` long. With
/// [`TimeBase::Timestamps`] the interior uses the three-point weighted
/// quotient for uneven spacing, so the result matches the standard numeric
/// gradient convention either way.
///
/// A NaN sample turns every output row whose stencil touches it into NaN.
/// Under uniform sampling the interior stencil skips the centre sample, so a
/// lone NaN at row `i` blanks rows `i - 1` and `i + 1` but not row `i`.
///
/// Degenerate lengths are not errors: an empty sequence yields an empty
/// result and a single sample yields one all-NaN row.
pub fn velocity(
    position: &DMatrix<f64>,
    time: TimeBase<'_>,
) -> Result<DMatrix<f64>, KinematicsError> {
    let (n, d) = position.shape();
    match time {
        TimeBase::Frequency(fs) => {
            if !(fs.is_finite() && fs > 0.0) {
                return Err(KinematicsError::InvalidSamplingFrequency { value: fs });
            }
        }
        TimeBase::Timestamps(t) => {
            if t.len() != n {
                return Err(KinematicsError::TimeLengthMismatch {
                    time_len: t.len(),
                    n_time: n,
                });
            }
            for i in 1..n {
                // Also trips on NaN time stamps.
                if !(t[i] > t[i - 1]) {
                    return Err(KinematicsError::TimeNotMonotonic { index: i });
                }
            }
        }
    }

    if n == 0 {
        return Ok(DMatrix::zeros(0, d));
    }
    if n == 1 {
        warn!("velocity of a single-sample track is undefined");
        return Ok(DMatrix::from_element(1, d, f64::NAN));
    }

    Ok(DMatrix::from_fn(n, d, |r, c| match time {
        TimeBase::Frequency(fs) => {
            if r == 0 {
                (position[(1, c)] - position[(0, c)]) * fs
            } else if r == n - 1 {
                (position[(n - 1, c)] - position[(n - 2, c)]) * fs
            } else {
                (position[(r + 1, c)] - position[(r - 1, c)]) * fs / 2.0
            }
        }
        TimeBase::Timestamps(t) => {
            if r == 0 {
                (position[(1, c)] - position[(0, c)]) / (t[1] - t[0])
            } else if r == n - 1 {
                (position[(n - 1, c)] - position[(n - 2, c)]) / (t[n - 1] - t[n - 2])
            } else {
                let hs = t[r] - t[r - 1];
                let hd = t[r + 1] - t[r];
                (hs * hs * position[(r + 1, c)] + (hd * hd - hs * hs) * position[(r, c)]
                    - hd * hd * position[(r - 1, c)])
                    / (hs * hd * (hd + hs))
            }
        }
    }))
}

/// Euclidean norm of a velocity sequence at each time step.
///
/// Non-negative wherever defined, NaN exactly where the velocity row has a
/// NaN component.
pub fn speed(velocity: &DMatrix<f64>) -> DVector<f64> {
    DVector::from_fn(velocity.nrows(), |r, _| velocity.row(r).norm())
}
