//! Regular tetrahedron geometry
//!
//! Uses the standard closed form with one vertex on the Z axis, scaled by
//! `sqrt(3/8) * 2.5` so the tetrahedron reads at roughly the same size as
//! the other solids.

use crate::solid::{Face, Solid};
use crate::Vec3;

/// Visual-size normalizer shared by all four vertices
fn normalizer() -> f32 {
    (3.0f32 / 8.0).sqrt() * 2.5
}

/// Build the regular tetrahedron
pub fn generate() -> Solid {
    let n = normalizer();

    let vertices = vec![
        Vec3::new((8.0f32 / 9.0).sqrt() * n, 0.0, -1.0 / 3.0 * n),
        Vec3::new(-(2.0f32 / 9.0).sqrt() * n, (2.0f32 / 3.0).sqrt() * n, -1.0 / 3.0 * n),
        Vec3::new(-(2.0f32 / 9.0).sqrt() * n, -(2.0f32 / 3.0).sqrt() * n, -1.0 / 3.0 * n),
        Vec3::new(0.0, 0.0, n),
    ];

    let edges = vec![[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]];

    // All four 3-of-4 vertex combinations
    let faces = vec![
        Face::Tri([0, 1, 2]),
        Face::Tri([0, 1, 3]),
        Face::Tri([0, 2, 3]),
        Face::Tri([1, 2, 3]),
    ];

    Solid::new(vertices, edges, faces)
}
