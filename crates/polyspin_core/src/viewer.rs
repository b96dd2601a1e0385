//! Viewer: the single owner of all mutable viewer state
//!
//! The host (window shell, input adapter) talks to the viewer only through
//! the setters here; the renderer reads the active solid, angles, and color
//! state each redraw and consumes the geometry-dirty flag to know when its
//! cached vertex buffers are stale.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use polyspin_math::{generate, Solid, SolidError, SolidKind};

use crate::clock::{AnimationClock, Axis, TickOutcome};
use crate::color::{ColorState, Rgba, PALETTE_LEN};

/// Error type for viewer construction and host inputs
#[derive(Debug)]
pub enum ViewerError {
    /// A shape index outside the supported range was requested
    UnknownShapeIndex(usize),
    /// The palette cannot cover one face pass of some supported solid
    PaletteTooSmall { needed: usize, len: usize },
    /// A supported solid failed to generate
    Solid(SolidError),
}

impl std::fmt::Display for ViewerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewerError::UnknownShapeIndex(index) => {
                write!(f, "shape index {} is outside the supported range 0-3", index)
            }
            ViewerError::PaletteTooSmall { needed, len } => {
                write!(f, "palette holds {} entries but a face pass visits {}", len, needed)
            }
            ViewerError::Solid(err) => write!(f, "solid generation failed: {}", err),
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewerError::Solid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SolidError> for ViewerError {
    fn from(err: SolidError) -> Self {
        ViewerError::Solid(err)
    }
}

/// All viewer state behind one owner
///
/// The four supported solids are generated once at construction and selected
/// by index thereafter; geometry is never regenerated at runtime.
pub struct Viewer {
    solids: Vec<Solid>,
    shape_index: usize,
    colors: ColorState,
    clock: AnimationClock,
    rng: SmallRng,
    /// Set when the composed frame no longer matches state (shape switch,
    /// color change, palette repaint); consumed by the renderer
    geometry_dirty: bool,
}

impl Viewer {
    /// Create a viewer with an OS-seeded palette RNG
    pub fn new() -> Result<Self, ViewerError> {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// Create a viewer with a caller-supplied RNG (tests seed this)
    pub fn with_rng(mut rng: SmallRng) -> Result<Self, ViewerError> {
        let mut solids = Vec::with_capacity(SolidKind::SUPPORTED.len());
        for kind in SolidKind::SUPPORTED {
            solids.push(generate(kind)?);
        }

        // Fail fast here rather than letting a face pass run off the end
        // of the palette.
        let needed = solids.iter().map(Solid::face_vertex_visits).max().unwrap_or(0);
        if PALETTE_LEN < needed {
            return Err(ViewerError::PaletteTooSmall { needed, len: PALETTE_LEN });
        }

        let colors = ColorState::new(&mut rng);

        Ok(Self {
            solids,
            shape_index: 0,
            colors,
            clock: AnimationClock::new(),
            rng,
            geometry_dirty: true,
        })
    }

    /// Switch the active solid
    pub fn set_shape_index(&mut self, index: usize) -> Result<(), ViewerError> {
        if index >= self.solids.len() {
            return Err(ViewerError::UnknownShapeIndex(index));
        }
        if index != self.shape_index {
            self.shape_index = index;
            self.geometry_dirty = true;
            log::debug!("active solid -> {}", self.active_kind().label());
        }
        Ok(())
    }

    #[inline]
    pub fn shape_index(&self) -> usize {
        self.shape_index
    }

    /// The solid currently on screen
    #[inline]
    pub fn active_solid(&self) -> &Solid {
        &self.solids[self.shape_index]
    }

    #[inline]
    pub fn active_kind(&self) -> SolidKind {
        SolidKind::SUPPORTED[self.shape_index]
    }

    pub fn set_rotation_speed(&mut self, axis: Axis, speed: i32) {
        self.clock.set_speed(axis, speed);
    }

    pub fn rotation_speed(&self, axis: Axis) -> i32 {
        self.clock.speed(axis)
    }

    pub fn set_animating(&mut self, on: bool) {
        self.clock.set_animating(on);
    }

    pub fn toggle_animation(&mut self) -> bool {
        self.clock.toggle_animating()
    }

    #[inline]
    pub fn animating(&self) -> bool {
        self.clock.animating()
    }

    pub fn set_surface_color(&mut self, color: Rgba) {
        self.colors.set_surface_color(color);
        self.geometry_dirty = true;
    }

    pub fn set_edge_color(&mut self, color: Rgba) {
        self.colors.set_edge_color(color);
        self.geometry_dirty = true;
    }

    pub fn set_surface_color_u8(&mut self, channels: [u8; 4]) {
        self.colors.set_surface_color_u8(channels);
        self.geometry_dirty = true;
    }

    pub fn set_edge_color_u8(&mut self, channels: [u8; 4]) {
        self.colors.set_edge_color_u8(channels);
        self.geometry_dirty = true;
    }

    pub fn set_rainbow_mode(&mut self, on: bool) {
        self.colors.set_rainbow_mode(on);
        self.geometry_dirty = true;
    }

    pub fn toggle_rainbow_mode(&mut self) -> bool {
        let on = !self.colors.rainbow_mode();
        self.set_rainbow_mode(on);
        on
    }

    pub fn set_rainbow_speed(&mut self, speed: i32) {
        self.colors.set_rainbow_speed(speed);
    }

    #[inline]
    pub fn colors(&self) -> &ColorState {
        &self.colors
    }

    /// Accumulated rotation in degrees, X/Y/Z order
    #[inline]
    pub fn rotation_angles(&self) -> [f32; 3] {
        self.clock.angles()
    }

    #[inline]
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Advance one fixed-interval tick
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.clock.tick(&mut self.colors, &mut self.rng);
        if outcome.palette_repainted {
            self.geometry_dirty = true;
        }
        outcome
    }

    /// Consume the geometry-dirty flag
    pub fn take_geometry_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.geometry_dirty, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer() -> Viewer {
        Viewer::with_rng(SmallRng::seed_from_u64(3)).unwrap()
    }

    #[test]
    fn test_starts_on_cube() {
        let v = viewer();
        assert_eq!(v.shape_index(), 0);
        assert_eq!(v.active_kind(), SolidKind::Cube);
        assert_eq!(v.active_solid().vertex_count(), 8);
    }

    #[test]
    fn test_shape_switch() {
        let mut v = viewer();
        v.set_shape_index(3).unwrap();
        assert_eq!(v.active_kind(), SolidKind::Octahedron);
        assert_eq!(v.active_solid().vertex_count(), 6);
    }

    #[test]
    fn test_bad_shape_index_is_an_error() {
        let mut v = viewer();
        assert!(matches!(
            v.set_shape_index(4),
            Err(ViewerError::UnknownShapeIndex(4))
        ));
        // State untouched on error
        assert_eq!(v.shape_index(), 0);
    }

    #[test]
    fn test_shape_switch_marks_geometry_dirty() {
        let mut v = viewer();
        assert!(v.take_geometry_dirty()); // dirty at startup
        assert!(!v.take_geometry_dirty());
        v.set_shape_index(1).unwrap();
        assert!(v.take_geometry_dirty());
    }

    #[test]
    fn test_same_shape_index_is_not_dirty() {
        let mut v = viewer();
        v.take_geometry_dirty();
        v.set_shape_index(0).unwrap();
        assert!(!v.take_geometry_dirty());
    }

    #[test]
    fn test_color_change_marks_geometry_dirty() {
        let mut v = viewer();
        v.take_geometry_dirty();
        v.set_edge_color([0.0, 1.0, 0.0, 1.0]);
        assert!(v.take_geometry_dirty());
    }

    #[test]
    fn test_speed_change_does_not_dirty_geometry() {
        // Angles feed the transform, not the cached vertex data
        let mut v = viewer();
        v.take_geometry_dirty();
        v.set_rotation_speed(Axis::X, 50);
        assert!(!v.take_geometry_dirty());
    }

    #[test]
    fn test_tick_with_zero_speeds_keeps_angles_zero() {
        let mut v = viewer();
        v.set_animating(true);
        for _ in 0..1000 {
            v.tick();
        }
        assert_eq!(v.rotation_angles(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_octahedron_one_tick_speed_20() {
        let mut v = viewer();
        v.set_shape_index(3).unwrap();
        v.set_rotation_speed(Axis::X, 20);
        v.tick();
        let [x, y, z] = v.rotation_angles();
        assert_eq!(x, 1.0);
        assert_eq!(y, 0.0);
        assert_eq!(z, 0.0);
    }

    #[test]
    fn test_palette_repaint_marks_geometry_dirty() {
        let mut v = viewer();
        v.take_geometry_dirty();
        v.set_rainbow_mode(true);
        v.set_rainbow_speed(50);
        v.take_geometry_dirty(); // clear the toggle's dirty mark
        let outcome = v.tick();
        assert!(outcome.palette_repainted);
        assert!(v.take_geometry_dirty());
    }

    #[test]
    fn test_u8_color_normalization() {
        let mut v = viewer();
        v.set_surface_color_u8([255, 0, 51, 255]);
        let c = v.colors().surface_color();
        assert_eq!(c[0], 1.0);
        assert_eq!(c[1], 0.0);
        assert!((c[2] - 0.2).abs() < 1e-6);
        assert_eq!(c[3], 1.0);
    }

    #[test]
    fn test_palette_covers_every_supported_solid() {
        let v = viewer();
        for kind in SolidKind::SUPPORTED {
            let solid = generate(kind).unwrap();
            assert!(v.colors().palette().len() >= solid.face_vertex_visits());
        }
    }
}
