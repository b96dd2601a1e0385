//! Regular octahedron geometry
//!
//! Six vertices on the coordinate axes at distance sqrt(2): a top and bottom
//! tip on Y and an equatorial square in the XZ plane. Each tip pairs with
//! each adjacent equatorial pair for 8 triangular faces.

use crate::solid::{Face, Solid};
use crate::Vec3;

/// Build the regular octahedron
pub fn generate() -> Solid {
    let r2 = 2.0f32.sqrt();

    let vertices = vec![
        Vec3::new(0.0, r2, 0.0),  // top tip
        Vec3::new(0.0, 0.0, r2),  // front
        Vec3::new(r2, 0.0, 0.0),  // right
        Vec3::new(0.0, 0.0, -r2), // back
        Vec3::new(-r2, 0.0, 0.0), // left
        Vec3::new(0.0, -r2, 0.0), // bottom tip
    ];

    let edges = vec![
        [0, 1],
        [0, 2],
        [0, 3],
        [0, 4],
        [1, 2],
        [2, 3],
        [3, 4],
        [4, 1],
        [5, 1],
        [5, 2],
        [5, 3],
        [5, 4],
    ];

    let faces = vec![
        Face::Tri([0, 1, 2]),
        Face::Tri([0, 2, 3]),
        Face::Tri([0, 3, 4]),
        Face::Tri([0, 4, 1]),
        Face::Tri([5, 1, 2]),
        Face::Tri([5, 2, 3]),
        Face::Tri([5, 3, 4]),
        Face::Tri([5, 4, 1]),
    ];

    Solid::new(vertices, edges, faces)
}
