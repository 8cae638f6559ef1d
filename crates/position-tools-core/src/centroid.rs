use log::debug;
use nalgebra::DMatrix;

use crate::error::KinematicsError;

/// Mean position across marker tracks, ignoring missing markers.
///
/// Each entry of `markers` is one marker's `(n_time, d)` track (for example
/// the LEDs of a head stage). Per time step and dimension the centroid is the
/// arithmetic mean of the markers that are not NaN there; where every marker
/// is NaN the centroid is NaN. The result does not depend on the order of
/// `markers`.
///
/// All tracks must share one shape; an empty `markers` slice is rejected.
pub fn centroid(markers: &[&DMatrix<f64>]) -> Result<DMatrix<f64>, KinematicsError> {
    let first = *markers.first().ok_or(KinematicsError::NoMarkers)?;
    for m in &markers[1..] {
        if m.shape() != first.shape() {
            return Err(KinematicsError::ShapeMismatch {
                left: first.shape(),
                right: m.shape(),
            });
        }
    }
    debug!(
        "centroid of {} markers over {} time steps",
        markers.len(),
        first.nrows()
    );

    Ok(DMatrix::from_fn(first.nrows(), first.ncols(), |r, c| {
        let mut sum = 0.0;
        let mut count = 0usize;
        for m in markers {
            let v = m[(r, c)];
            if !v.is_nan() {
                sum += v;
                count += 1;
            }
        }
        if count == 0 {
            f64::NAN
        } else {
            sum / count as f64
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_skips_markers_that_are_nan() {
        let a = DMatrix::from_column_slice(3, 1, &[1.0, f64::NAN, 3.0]);
        let b = DMatrix::from_column_slice(3, 1, &[3.0, f64::NAN, 5.0]);
        let c = centroid(&[&a, &b]).unwrap();
        assert_eq!(c[(0, 0)], 2.0);
        assert!(c[(1, 0)].is_nan());
        assert_eq!(c[(2, 0)], 4.0);
    }

    #[test]
    fn one_valid_marker_is_enough() {
        let a = DMatrix::from_column_slice(2, 1, &[f64::NAN, 4.0]);
        let b = DMatrix::from_column_slice(2, 1, &[6.0, 8.0]);
        let c = centroid(&[&a, &b]).unwrap();
        assert_eq!(c[(0, 0)], 6.0);
        assert_eq!(c[(1, 0)], 6.0);
    }

    #[test]
    fn marker_order_does_not_matter() {
        let a = DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 1.0, f64::NAN]);
        let b = DMatrix::from_row_slice(2, 2, &[2.0, 4.0, 3.0, 6.0]);
        let ab = centroid(&[&a, &b]).unwrap();
        let ba = centroid(&[&b, &a]).unwrap();
        for r in 0..2 {
            for c in 0..2 {
                assert_eq!(ab[(r, c)].to_bits(), ba[(r, c)].to_bits());
            }
        }
    }

    #[test]
    fn single_marker_is_its_own_centroid() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(centroid(&[&a]).unwrap(), a);
    }

    #[test]
    fn mismatched_tracks_are_rejected() {
        let a = DMatrix::<f64>::zeros(3, 2);
        let b = DMatrix::<f64>::zeros(4, 2);
        assert_eq!(
            centroid(&[&a, &b]),
            Err(KinematicsError::ShapeMismatch {
                left: (3, 2),
                right: (4, 2),
            })
        );
    }

    #[test]
    fn empty_marker_list_is_rejected() {
        assert_eq!(centroid(&[]), Err(KinematicsError::NoMarkers));
    }
}
