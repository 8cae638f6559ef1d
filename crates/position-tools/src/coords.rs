//! Pixel/centimetre coordinate conversion for overlay consumers.
//!
//! Video frames put the origin at the top-left corner with y growing
//! downward, while tracked positions use a bottom-left origin in
//! centimetres. Converting between the two flips the vertical axis against
//! the frame height and rescales; NaN coordinates pass through unchanged.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::core::KinematicsError;

/// Frame size and scale of a recording, as calibrated for one session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameGeometry {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Centimetres covered by one pixel of the frame.
    pub cm_per_pixel: f64,
}

/// Mirror the y coordinates of a planar track against `frame_height`.
pub fn flip_y(
    position: &DMatrix<f64>,
    frame_height: f64,
) -> Result<DMatrix<f64>, KinematicsError> {
    if position.ncols() != 2 {
        return Err(KinematicsError::NotPlanar {
            ncols: position.ncols(),
        });
    }
    let mut out = position.clone();
    for r in 0..out.nrows() {
        out[(r, 1)] = frame_height - out[(r, 1)];
    }
    Ok(out)
}

/// Convert a pixel-space track to centimetres with a bottom-left origin.
pub fn convert_to_cm(
    position_px: &DMatrix<f64>,
    frame: &FrameGeometry,
) -> Result<DMatrix<f64>, KinematicsError> {
    Ok(flip_y(position_px, f64::from(frame.height))? * frame.cm_per_pixel)
}

/// Convert a centimetre-space track back to pixel coordinates.
///
/// Inverse of [`convert_to_cm`] up to floating-point rounding.
pub fn convert_to_pixels(
    position_cm: &DMatrix<f64>,
    frame: &FrameGeometry,
) -> Result<DMatrix<f64>, KinematicsError> {
    flip_y(&(position_cm / frame.cm_per_pixel), f64::from(frame.height))
}
