use nalgebra::{DMatrix, DVector};

use crate::error::KinematicsError;
use crate::kinematics::check_same_shape;

/// Direction from `from` to `to` at each time step, in radians.
///
/// Both inputs must be planar `(n_time, 2)` tracks. The angle is the
/// four-quadrant arctangent of the displacement `to − from`, measured
/// counter-clockwise from the positive x axis, in `(−π, π]`. Zero
/// displacement yields 0 by the `atan2(0, 0)` convention, and any NaN
/// coordinate in either point yields NaN at that step.
pub fn angle(
    from: &DMatrix<f64>,
    to: &DMatrix<f64>,
) -> Result<DVector<f64>, KinematicsError> {
    check_same_shape(from, to)?;
    if from.ncols() != 2 {
        return Err(KinematicsError::NotPlanar {
            ncols: from.ncols(),
        });
    }
    Ok(DVector::from_fn(from.nrows(), |r, _| {
        let dx = to[(r, 0)] - from[(r, 0)];
        let dy = to[(r, 1)] - from[(r, 1)];
        dy.atan2(dx)
    }))
}
