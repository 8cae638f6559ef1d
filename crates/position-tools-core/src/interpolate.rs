//! NaN gap filling for position tracks.
//!
//! Tracking sources drop samples (occlusion, failed detection) and mark them
//! NaN. The functions here fill those gaps by linear interpolation against
//! the sample index; nothing else in this crate fabricates values.

use log::warn;
use nalgebra::{DMatrix, DVector};

/// Fill missing time steps of a `(n_time, d)` position sequence.
///
/// A time step is missing when any of its `d` coordinates is NaN, and all of
/// its coordinates are then refilled. Interior gaps are interpolated linearly
/// between the nearest valid samples; leading and trailing gaps hold the
/// first or last valid sample (no extrapolation beyond the data range).
///
/// A track with no valid time step at all comes back unchanged (all NaN),
/// and complete input round-trips bit for bit, so applying the function
/// twice is the same as applying it once.
pub fn interpolate_nan(position: &DMatrix<f64>) -> DMatrix<f64> {
    let (n_time, d) = position.shape();
    let missing: Vec<bool> = (0..n_time)
        .map(|r| position.row(r).iter().any(|v| v.is_nan()))
        .collect();
    let anchors: Vec<usize> = (0..n_time).filter(|&r| !missing[r]).collect();

    if anchors.len() == n_time {
        return position.clone();
    }
    if anchors.is_empty() {
        if n_time > 0 {
            warn!("no valid sample in {n_time}-step track, leaving it all-NaN");
        }
        return position.clone();
    }

    let mut out = position.clone();
    for r in (0..n_time).filter(|&r| missing[r]) {
        let next = anchors.partition_point(|&a| a < r);
        let after = anchors.get(next).copied();
        let before = if next > 0 { Some(anchors[next - 1]) } else { None };
        for c in 0..d {
            out[(r, c)] = match (before, after) {
                (Some(p), Some(q)) => {
                    let t = (r - p) as f64 / (q - p) as f64;
                    position[(p, c)] + t * (position[(q, c)] - position[(p, c)])
                }
                // Boundary runs hold the nearest anchor.
                (Some(p), None) => position[(p, c)],
                (None, Some(q)) => position[(q, c)],
                (None, None) => unreachable!("anchors is non-empty"),
            };
        }
    }
    out
}

/// [`interpolate_nan`] for a 1-D scalar track.
pub fn interpolate_nan_track(track: &DVector<f64>) -> DVector<f64> {
    let filled = interpolate_nan(&DMatrix::from_column_slice(track.len(), 1, track.as_slice()));
    DVector::from_column_slice(filled.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_track_eq(actual: &DVector<f64>, expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            if e.is_nan() {
                assert!(a.is_nan(), "index {i}: expected NaN, got {a}");
            } else {
                assert!((a - e).abs() < 1e-12, "index {i}: expected {e}, got {a}");
            }
        }
    }

    #[test]
    fn interior_gaps_fill_linearly() {
        let track = DVector::from_vec(vec![0.0, f64::NAN, 2.0, f64::NAN, f64::NAN, 5.0]);
        let filled = interpolate_nan_track(&track);
        assert_track_eq(&filled, &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn boundary_runs_hold_nearest_anchor() {
        let leading = DVector::from_vec(vec![f64::NAN, f64::NAN, 1.0, 2.0]);
        assert_track_eq(&interpolate_nan_track(&leading), &[1.0, 1.0, 1.0, 2.0]);

        let trailing = DVector::from_vec(vec![0.0, 1.0, f64::NAN]);
        assert_track_eq(&interpolate_nan_track(&trailing), &[0.0, 1.0, 1.0]);
    }

    #[test]
    fn complete_input_is_a_fixed_point() {
        let position =
            DMatrix::from_row_slice(3, 2, &[0.0, 10.0, 1.0, 20.0, 2.0, 30.0]);
        let once = interpolate_nan(&position);
        assert_eq!(once, position);
        assert_eq!(interpolate_nan(&once), once);
    }

    #[test]
    fn all_nan_track_stays_all_nan() {
        let track = DVector::from_element(4, f64::NAN);
        let filled = interpolate_nan_track(&track);
        assert!(filled.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn partially_nan_row_is_refilled_in_every_dimension() {
        // Row 1 has a valid x but a NaN y; the whole row counts as missing,
        // so x is re-interpolated from rows 0 and 2 as well.
        let position = DMatrix::from_row_slice(3, 2, &[0.0, 10.0, 5.0, f64::NAN, 4.0, 30.0]);
        let filled = interpolate_nan(&position);
        assert!((filled[(1, 0)] - 2.0).abs() < 1e-12);
        assert!((filled[(1, 1)] - 20.0).abs() < 1e-12);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let position = DMatrix::<f64>::zeros(0, 2);
        assert_eq!(interpolate_nan(&position).shape(), (0, 2));
    }
}
