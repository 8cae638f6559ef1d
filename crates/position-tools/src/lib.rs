//! High-level facade for the `position-tools-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the kinematics core (NaN-aware interpolation,
//!   centroid, distance, velocity, speed, heading angle)
//! - the [`coords`] module converting tracks between pixel and centimetre
//!   space for video-overlay consumers.
//!
//! ## Quickstart
//!
//! ```
//! use nalgebra::dmatrix;
//! use position_tools::{interpolate_nan, speed, velocity, TimeBase};
//!
//! // One tracked point over three frames; the middle frame was dropped.
//! let track = dmatrix![
//!     0.0, 0.0;
//!     f64::NAN, f64::NAN;
//!     2.0, 0.0
//! ];
//! let filled = interpolate_nan(&track);
//! let v = velocity(&filled, TimeBase::Frequency(30.0))?;
//! let s = speed(&v);
//! assert!((s[1] - 30.0).abs() < 1e-9);
//! # Ok::<(), position_tools::KinematicsError>(())
//! ```
//!
//! ## API map
//! - `position_tools::core`: the underlying `position-tools-core` crate.
//! - top level: the kinematics functions and [`KinematicsError`].
//! - [`coords`]: `FrameGeometry`, `flip_y`, `convert_to_cm`,
//!   `convert_to_pixels`.

pub use position_tools_core as core;

pub use position_tools_core::{
    angle, centroid, distance, interpolate_nan, interpolate_nan_track, speed, velocity,
    KinematicsError, TimeBase,
};

pub mod coords;
