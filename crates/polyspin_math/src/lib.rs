//! Math and geometry library for Polyspin
//!
//! This crate provides the vector/matrix types and the procedural solid
//! generators used by the viewer.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`mat4::Mat4`] - 4x4 matrix for rotation/translation transforms
//!
//! ## Solids
//!
//! - [`Solid`] - Immutable vertex/edge/face triple for one polyhedron
//! - [`SolidKind`] - Every known solid, supported or not
//! - [`generate`] - Closed-form construction of the supported solids

mod vec3;
pub mod mat4;
pub mod solid;
pub mod cube;
pub mod pyramid;
pub mod tetrahedron;
pub mod octahedron;

pub use vec3::Vec3;
pub use mat4::Mat4;
pub use solid::{generate, Face, Solid, SolidError, SolidKind};
