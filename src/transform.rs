//! Extra transformation matrices: axis shears, planar projection, and
//! scale-bias range remapping.

use crate::float_types::{Real, tolerance};
use nalgebra::{Matrix2, Matrix3, Matrix4, Vector2, Vector3};

/// Transforms `m` with a 2D shearing on the X axis: the Y coordinate of the
/// input feeds into the X output with factor `y`. A factor of zero returns
/// `m` unchanged.
pub fn shear_x_2d(m: &Matrix3<Real>, y: Real) -> Matrix3<Real> {
    let mut r = Matrix3::identity();
    r[(0, 1)] = y;
    m * r
}

/// Transforms `m` with a 2D shearing on the Y axis by factor `x`.
pub fn shear_y_2d(m: &Matrix3<Real>, x: Real) -> Matrix3<Real> {
    let mut r = Matrix3::identity();
    r[(1, 0)] = x;
    m * r
}

/// Transforms `m` with a 3D shearing on the X axis: the Y and Z coordinates
/// of the input feed into the X output with factors `y` and `z`.
pub fn shear_x_3d(m: &Matrix4<Real>, y: Real, z: Real) -> Matrix4<Real> {
    let mut r = Matrix4::identity();
    r[(0, 1)] = y;
    r[(0, 2)] = z;
    m * r
}

/// Transforms `m` with a 3D shearing on the Y axis by factors `x` and `z`.
pub fn shear_y_3d(m: &Matrix4<Real>, x: Real, z: Real) -> Matrix4<Real> {
    let mut r = Matrix4::identity();
    r[(1, 0)] = x;
    r[(1, 2)] = z;
    m * r
}

/// Transforms `m` with a 3D shearing on the Z axis by factors `x` and `y`.
pub fn shear_z_3d(m: &Matrix4<Real>, x: Real, y: Real) -> Matrix4<Real> {
    let mut r = Matrix4::identity();
    r[(2, 0)] = x;
    r[(2, 1)] = y;
    m * r
}

/// Transforms `m` with a projection onto the line through the origin
/// orthogonal to `normal` (the linear block is `I - normal * normal^T`).
///
/// `normal` is assumed unit length; a non-unit normal produces a skewed,
/// non-orthogonal projection rather than an error.
pub fn proj_2d(m: &Matrix3<Real>, normal: &Vector2<Real>) -> Matrix3<Real> {
    debug_assert!(
        (normal.norm_squared() - 1.0).abs() <= tolerance(),
        "proj_2d expects a unit normal"
    );
    let mut r = Matrix3::identity();
    r.fixed_view_mut::<2, 2>(0, 0)
        .copy_from(&(Matrix2::identity() - normal * normal.transpose()));
    m * r
}

/// Transforms `m` with a projection onto the plane through the origin
/// orthogonal to `normal`.
///
/// Same unit-length convention as [`proj_2d`].
pub fn proj_3d(m: &Matrix4<Real>, normal: &Vector3<Real>) -> Matrix4<Real> {
    debug_assert!(
        (normal.norm_squared() - 1.0).abs() <= tolerance(),
        "proj_3d expects a unit normal"
    );
    let mut r = Matrix4::identity();
    r.fixed_view_mut::<3, 3>(0, 0)
        .copy_from(&(Matrix3::identity() - normal * normal.transpose()));
    m * r
}

/// Build a scale-bias matrix: the affine map `v ↦ scale * v + bias` on each
/// of the three spatial axes. `scale_bias_matrix(0.5, 0.5)` remaps [-1, 1]
/// to [0, 1].
///
/// A `scale` of zero is accepted and produces a singular matrix.
pub fn scale_bias_matrix(scale: Real, bias: Real) -> Matrix4<Real> {
    let mut r = Matrix4::identity();
    r[(0, 0)] = scale;
    r[(1, 1)] = scale;
    r[(2, 2)] = scale;
    r[(0, 3)] = bias;
    r[(1, 3)] = bias;
    r[(2, 3)] = bias;
    r
}

/// Transforms `m` with [`scale_bias_matrix`]: `m * scale_bias_matrix(scale, bias)`.
pub fn scale_bias(m: &Matrix4<Real>, scale: Real, bias: Real) -> Matrix4<Real> {
    m * scale_bias_matrix(scale, bias)
}
