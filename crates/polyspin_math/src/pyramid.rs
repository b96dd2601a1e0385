//! Square-base pyramid geometry
//!
//! Apex at (0, 1, 0) over four base corners at (±1, -1, ±1): 8 edges, four
//! triangular sides and one quad base.

use crate::solid::{Face, Solid};
use crate::Vec3;

/// Build the square-base pyramid
pub fn generate() -> Solid {
    let vertices = vec![
        Vec3::new(0.0, 1.0, 0.0),    // apex
        Vec3::new(1.0, -1.0, 1.0),   // front right
        Vec3::new(1.0, -1.0, -1.0),  // back right
        Vec3::new(-1.0, -1.0, -1.0), // back left
        Vec3::new(-1.0, -1.0, 1.0),  // front left
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
    ];

    // Sides first, base last
    let faces = vec![
        Face::Tri([0, 1, 2]),
        Face::Tri([0, 2, 3]),
        Face::Tri([0, 3, 4]),
        Face::Tri([0, 4, 1]),
        Face::Quad([1, 2, 3, 4]),
    ];

    Solid::new(vertices, edges, faces)
}
