//! Cube geometry
//!
//! 8 vertices at (±1, ±1, ±1), 12 edges, 6 quad faces.

use crate::solid::{Face, Solid};
use crate::Vec3;

/// Build the unit-ish cube (side length 2, centered at origin)
pub fn generate() -> Solid {
    let vertices = vec![
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    ];

    let edges = vec![
        [0, 1],
        [0, 3],
        [0, 4],
        [2, 1],
        [2, 3],
        [2, 7],
        [6, 3],
        [6, 4],
        [6, 7],
        [5, 1],
        [5, 4],
        [5, 7],
    ];

    let faces = vec![
        Face::Quad([0, 1, 2, 3]),
        Face::Quad([3, 2, 7, 6]),
        Face::Quad([6, 7, 5, 4]),
        Face::Quad([4, 5, 1, 0]),
        Face::Quad([1, 5, 7, 2]),
        Face::Quad([4, 0, 3, 6]),
    ];

    Solid::new(vertices, edges, faces)
}
