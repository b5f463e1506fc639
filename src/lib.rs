//! Smoothing of jagged polygon **edge chains**.
//!
//! An ordered boundary (open or closed) is taken as a [`PointSequence`] of
//! control points and relaxed with a tension-weighted neighbor filter, either
//! plainly or with shape and length preservation. Mesh vertices are then moved
//! onto the result, by nearest-point snapping onto a densely rebuilt curve or
//! by position-matched correspondence after an evenly spaced rebuild.
//!
//! The host application supplies the boundary and applies the final positions
//! through the seams in [`traits`]; this crate only does the numerics.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for multithreaded smoothing and snapping
//!
//! # Example
//! ```rust
//! use edge_smooth::curve::algorithm::smoothing::{SerialSmoothingOps, SmoothingOps};
//! use edge_smooth::PointSequence;
//!
//! let mut chain = PointSequence::from_coords(
//!     &[[0.0, 0.0, 0.0], [1.0, 0.4, 0.0], [2.0, -0.3, 0.0], [3.0, 0.2, 0.0], [4.0, 0.0, 0.0]],
//!     false,
//! );
//! SerialSmoothingOps::new().smooth(&mut chain, 5, 0.5).unwrap();
//! assert_eq!(chain.points[0], nalgebra::Point3::new(0.0, 0.0, 0.0));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod correspondence;
pub mod curve;
pub mod errors;
pub mod float_types;
pub mod parameters;
pub mod session;
pub mod traits;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use curve::PointSequence;
pub use curve::resample::UniformResampler;
pub use errors::SmoothError;
pub use parameters::{SmoothingParameters, SmoothingPreset};
pub use session::SmoothSession;
