//! Vector projection and perpendicular decomposition.
//!
//! Both functions are generic over the vector dimension, so one code path
//! serves `Vector2`, `Vector3`, and `Vector4` alike.

use crate::float_types::Real;
use nalgebra::SVector;

/// Projects `x` onto `normal`: `(x·normal / normal·normal) * normal`.
///
/// `normal` does not need to be unit length, the division by `normal·normal`
/// absorbs its scale. A zero `normal` divides by a zero norm and yields
/// non-finite components.
pub fn project<const D: usize>(x: &SVector<Real, D>, normal: &SVector<Real, D>) -> SVector<Real, D> {
    normal * (x.dot(normal) / normal.dot(normal))
}

/// The component of `x` perpendicular to `normal`: `x - project(x, normal)`.
pub fn perp<const D: usize>(x: &SVector<Real, D>, normal: &SVector<Real, D>) -> SVector<Real, D> {
    x - project(x, normal)
}
