//! Frame composition - turns a solid plus viewer state into draw commands
//!
//! [`compose_frame`] is a pure function of (solid, rotation, offset, color
//! state, palette); it owns no state between frames. Rainbow coloring walks
//! the palette with one cursor shared across the whole face pass, so the
//! color a face vertex receives depends on every face before it - that
//! ordering is part of the contract.

use polyspin_core::{ColorState, Rgba};
use polyspin_math::{mat4, Solid, Vec3};

/// A transformed vertex with its final color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameVertex {
    pub position: Vec3,
    pub color: Rgba,
}

/// One primitive of a composed frame, in emission order
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// An edge segment, uniformly edge-colored
    Line([FrameVertex; 2]),
    /// A face polygon (3 or 4 vertices) in winding order
    Polygon(Vec<FrameVertex>),
}

/// The ordered draw commands for one frame: all edges, then all faces
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Count the line commands
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line(_)))
            .count()
    }

    /// Count the polygon commands
    pub fn polygon_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon(_)))
            .count()
    }
}

/// Error type for frame composition
#[derive(Debug, PartialEq, Eq)]
pub enum ComposeError {
    /// The palette is shorter than one face pass of this solid
    PaletteExhausted { visits: usize, len: usize },
}

impl std::fmt::Display for ComposeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComposeError::PaletteExhausted { visits, len } => write!(
                f,
                "face pass visits {} vertices but the palette holds {}",
                visits, len
            ),
        }
    }
}

impl std::error::Error for ComposeError {}

/// Compose one frame
///
/// Applies the accumulated rotation (X, then Y, then Z) and the translation
/// offset to every vertex, then emits one line command per edge and one
/// polygon command per face, in declared order. Edges always use the edge
/// color - rainbow mode affects faces only. With rainbow mode on, each face
/// vertex takes the next palette entry; a palette shorter than the face pass
/// is an error rather than an out-of-bounds read.
pub fn compose_frame(
    solid: &Solid,
    rotation: [f32; 3],
    offset: Vec3,
    colors: &ColorState,
    palette: &[Rgba],
) -> Result<Frame, ComposeError> {
    // glTranslate/glRotate order: translation last, Z rotation innermost.
    let transform = mat4::mul(
        mat4::translation(offset),
        mat4::mul(
            mat4::rotation_x(rotation[0]),
            mat4::mul(mat4::rotation_y(rotation[1]), mat4::rotation_z(rotation[2])),
        ),
    );

    let positions: Vec<Vec3> = solid
        .vertices()
        .iter()
        .map(|v| mat4::transform_point(&transform, *v))
        .collect();

    if colors.rainbow_mode() {
        let visits = solid.face_vertex_visits();
        if palette.len() < visits {
            return Err(ComposeError::PaletteExhausted { visits, len: palette.len() });
        }
    }

    let mut commands = Vec::with_capacity(solid.edges().len() + solid.faces().len());

    let edge_color = colors.edge_color();
    for [a, b] in solid.edges() {
        commands.push(DrawCommand::Line([
            FrameVertex { position: positions[*a], color: edge_color },
            FrameVertex { position: positions[*b], color: edge_color },
        ]));
    }

    // One cursor for the entire face pass, not reset per face.
    let mut cursor = 0usize;
    for face in solid.faces() {
        let mut polygon = Vec::with_capacity(face.vertex_count());
        for &index in face.indices() {
            let color = if colors.rainbow_mode() {
                let c = palette[cursor];
                cursor += 1;
                c
            } else {
                colors.surface_color()
            };
            polygon.push(FrameVertex { position: positions[index], color });
        }
        commands.push(DrawCommand::Polygon(polygon));
    }

    Ok(Frame { commands })
}
