//! Build a [-1,1] -> [0,1] range remap, a sheared 2D frame, and a planar
//! projection, and print where a few probe points land.

use nalgebra::{Matrix3, Matrix4, Point2, Point3, Vector2};
use xformrs::{proj_2d, scale_bias_matrix, shear_x_2d};

fn main() {
    let remap = scale_bias_matrix(0.5, 0.5);
    for p in [
        Point3::new(-1.0, -1.0, -1.0),
        Point3::origin(),
        Point3::new(1.0, 1.0, 1.0),
    ] {
        println!("remap {} -> {}", p, remap.transform_point(&p));
    }

    let sheared = shear_x_2d(&Matrix3::identity(), 2.0);
    println!(
        "shear {} -> {}",
        Point2::new(1.0, 1.0),
        sheared.transform_point(&Point2::new(1.0, 1.0))
    );

    // Flatten onto the X axis by projecting out Y.
    let flatten = proj_2d(&Matrix3::identity(), &Vector2::y());
    println!(
        "project {} -> {}",
        Point2::new(3.0, 5.0),
        flatten.transform_point(&Point2::new(3.0, 5.0))
    );

    // Chain with an existing frame: remap after doubling.
    let frame = Matrix4::new_scaling(2.0);
    let chained = xformrs::scale_bias(&frame, 0.5, 0.5);
    println!(
        "chained {} -> {}",
        Point3::new(1.0, 1.0, 1.0),
        chained.transform_point(&Point3::new(1.0, 1.0, 1.0))
    );
}
