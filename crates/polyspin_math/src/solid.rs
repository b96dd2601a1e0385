//! Solid value type and the generator dispatch
//!
//! A [`Solid`] is an immutable vertex/edge/face triple. The four supported
//! solids are built once from closed-form coordinates; their vertex, edge and
//! face orderings are part of the contract (the compositor walks them in
//! declared order, and rainbow coloring depends on the walk order).

use serde::{Deserialize, Serialize};

use crate::Vec3;

/// A face of a solid: an ordered list of vertex indices with fixed winding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Tri([usize; 3]),
    Quad([usize; 4]),
}

impl Face {
    /// The vertex indices of this face, in winding order
    pub fn indices(&self) -> &[usize] {
        match self {
            Face::Tri(ix) => ix,
            Face::Quad(ix) => ix,
        }
    }

    /// Number of vertices in this face (3 or 4)
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.indices().len()
    }
}

/// Immutable geometry for one polyhedron
///
/// Invariant: every index referenced by `edges` or `faces` is below
/// `vertices.len()`. Construction goes through [`Solid::new`], which checks
/// this in debug builds; [`Solid::indices_in_bounds`] exposes the check.
#[derive(Clone, Debug, PartialEq)]
pub struct Solid {
    vertices: Vec<Vec3>,
    edges: Vec<[usize; 2]>,
    faces: Vec<Face>,
}

impl Solid {
    pub fn new(vertices: Vec<Vec3>, edges: Vec<[usize; 2]>, faces: Vec<Face>) -> Self {
        let solid = Self { vertices, edges, faces };
        debug_assert!(solid.indices_in_bounds(), "edge/face index out of bounds");
        solid
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total face-vertex visits in one face pass
    ///
    /// This is the number of palette entries rainbow mode consumes per frame:
    /// a vertex shared by several faces is visited once per face.
    pub fn face_vertex_visits(&self) -> usize {
        self.faces.iter().map(|f| f.vertex_count()).sum()
    }

    /// Check that every edge and face index refers to an existing vertex
    pub fn indices_in_bounds(&self) -> bool {
        let n = self.vertices.len();
        self.edges.iter().all(|e| e[0] < n && e[1] < n)
            && self.faces.iter().flat_map(|f| f.indices()).all(|&i| i < n)
    }
}

/// Every solid the viewer knows about, generated or not
///
/// The combo-box domain of the host maps indices 0-3 onto the supported
/// kinds; the remaining kinds exist so a capability query can answer for
/// them without the generator panicking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolidKind {
    Cube,
    Pyramid,
    Tetrahedron,
    Octahedron,
    Icosahedron,
    Dodecahedron,
    Sphere,
    Torus,
}

impl SolidKind {
    /// The four kinds [`generate`] can build, in host index order
    pub const SUPPORTED: [SolidKind; 4] = [
        SolidKind::Cube,
        SolidKind::Pyramid,
        SolidKind::Tetrahedron,
        SolidKind::Octahedron,
    ];

    /// Capability query: can [`generate`] build this kind?
    pub fn is_supported(self) -> bool {
        Self::SUPPORTED.contains(&self)
    }

    /// Map a host shape index (0-3) to a supported kind
    pub fn from_index(index: usize) -> Option<SolidKind> {
        Self::SUPPORTED.get(index).copied()
    }

    /// Display name
    pub fn label(self) -> &'static str {
        match self {
            SolidKind::Cube => "Cube",
            SolidKind::Pyramid => "Pyramid",
            SolidKind::Tetrahedron => "Tetrahedron",
            SolidKind::Octahedron => "Octahedron",
            SolidKind::Icosahedron => "Icosahedron",
            SolidKind::Dodecahedron => "Dodecahedron",
            SolidKind::Sphere => "Sphere",
            SolidKind::Torus => "Torus",
        }
    }
}

/// Error type for solid generation
#[derive(Debug, PartialEq, Eq)]
pub enum SolidError {
    /// The kind is known but has no generator
    Unsupported(SolidKind),
}

impl std::fmt::Display for SolidError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolidError::Unsupported(kind) => {
                write!(f, "solid kind {} is not supported", kind.label())
            }
        }
    }
}

impl std::error::Error for SolidError {}

/// Build a solid from closed-form coordinates
///
/// Pure and deterministic; unsupported kinds are a capability error, not a
/// panic.
pub fn generate(kind: SolidKind) -> Result<Solid, SolidError> {
    match kind {
        SolidKind::Cube => Ok(crate::cube::generate()),
        SolidKind::Pyramid => Ok(crate::pyramid::generate()),
        SolidKind::Tetrahedron => Ok(crate::tetrahedron::generate()),
        SolidKind::Octahedron => Ok(crate::octahedron::generate()),
        other => Err(SolidError::Unsupported(other)),
    }
}
