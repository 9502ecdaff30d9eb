//! Extra **transformation matrices** and **vector projection** on top of
//! [nalgebra](https://nalgebra.org), as a set of free functions: axis shears,
//! planar projection, and scale-bias range remapping for 2D (homogeneous 3x3)
//! and 3D (homogeneous 4x4) affine transforms.
//!
//! Every composing function returns `m * r`, where `r` is the newly built
//! transform, so `r` acts first when the result is applied to a column vector.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod float_types;
pub mod projection;
pub mod transform;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use projection::{perp, project};
pub use transform::{
    proj_2d, proj_3d, scale_bias, scale_bias_matrix, shear_x_2d, shear_x_3d, shear_y_2d,
    shear_y_3d, shear_z_3d,
};
