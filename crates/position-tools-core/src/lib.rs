//! NaN-aware kinematics over position time series.
//!
//! This crate is intentionally small and purely numeric. Tracks are
//! `(n_time, d)` matrices (one row per time step, one column per coordinate
//! dimension) and every function is a stateless transform: no I/O, no video
//! decoding, nothing kept between calls.
//!
//! Missing samples are NaN and stay NaN through the math for the time steps
//! they affect; only [`interpolate_nan`] fills gaps, and only when called.
//! Incompatible argument shapes are usage errors and are reported as
//! [`KinematicsError`] instead of being silently broadcast or truncated.

mod angle;
mod centroid;
mod error;
mod interpolate;
mod kinematics;
mod logger;

pub use angle::angle;
pub use centroid::centroid;
pub use error::KinematicsError;
pub use interpolate::{interpolate_nan, interpolate_nan_track};
pub use kinematics::{distance, speed, velocity, TimeBase};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
