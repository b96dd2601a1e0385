//! Color state: surface/edge colors and the rainbow palette

use rand::Rng;

/// RGBA color, each channel nominally in [0, 1]
pub type Rgba = [f32; 4];

/// Number of palette entries generated per repaint
///
/// Over-provisioned above the largest per-frame face-vertex visit count of
/// any supported solid (24), so the face pass can never step past the end.
pub const PALETTE_LEN: usize = 50;

/// Convert host byte channels (0-255) to float channels (0.0-1.0)
#[inline]
pub fn rgba_from_u8(channels: [u8; 4]) -> Rgba {
    channels.map(|c| c as f32 / 255.0)
}

/// Mutable color state read by the frame compositor
///
/// The float setters replace values wholesale with no clamping; the viewer
/// hands out exactly what was set. Rainbow mode leaves the surface/edge
/// colors untouched so they remain the fallback when it is switched off.
#[derive(Clone, Debug)]
pub struct ColorState {
    surface_color: Rgba,
    edge_color: Rgba,
    rainbow_mode: bool,
    /// Raw host value; clamped to [1, 50] only where the repaint cadence
    /// is computed
    rainbow_speed: i32,
    palette: Vec<Rgba>,
}

impl ColorState {
    /// Create the startup color state: yellow surfaces, blue edges,
    /// rainbow off at speed 30, palette pre-filled from `rng`
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut state = Self {
            surface_color: [1.0, 1.0, 0.0, 1.0],
            edge_color: [0.0, 0.0, 1.0, 1.0],
            rainbow_mode: false,
            rainbow_speed: 30,
            palette: Vec::new(),
        };
        state.regenerate_palette(rng);
        state
    }

    /// Replace the surface color wholesale
    pub fn set_surface_color(&mut self, color: Rgba) {
        self.surface_color = color;
    }

    /// Replace the edge color wholesale
    pub fn set_edge_color(&mut self, color: Rgba) {
        self.edge_color = color;
    }

    /// Set the surface color from host byte channels
    pub fn set_surface_color_u8(&mut self, channels: [u8; 4]) {
        self.surface_color = rgba_from_u8(channels);
    }

    /// Set the edge color from host byte channels
    pub fn set_edge_color_u8(&mut self, channels: [u8; 4]) {
        self.edge_color = rgba_from_u8(channels);
    }

    pub fn set_rainbow_mode(&mut self, on: bool) {
        self.rainbow_mode = on;
    }

    /// Store the raw rainbow speed; cadence math clamps it later
    pub fn set_rainbow_speed(&mut self, speed: i32) {
        self.rainbow_speed = speed;
    }

    /// Replace the palette with freshly drawn uniform-random RGB entries
    /// (alpha fixed at 1.0)
    pub fn regenerate_palette(&mut self, rng: &mut impl Rng) {
        self.palette.clear();
        self.palette
            .extend((0..PALETTE_LEN).map(|_| [rng.random(), rng.random(), rng.random(), 1.0]));
    }

    #[inline]
    pub fn surface_color(&self) -> Rgba {
        self.surface_color
    }

    #[inline]
    pub fn edge_color(&self) -> Rgba {
        self.edge_color
    }

    #[inline]
    pub fn rainbow_mode(&self) -> bool {
        self.rainbow_mode
    }

    #[inline]
    pub fn rainbow_speed(&self) -> i32 {
        self.rainbow_speed
    }

    #[inline]
    pub fn palette(&self) -> &[Rgba] {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn state() -> ColorState {
        ColorState::new(&mut SmallRng::seed_from_u64(7))
    }

    #[test]
    fn test_startup_colors() {
        let s = state();
        assert_eq!(s.surface_color(), [1.0, 1.0, 0.0, 1.0]);
        assert_eq!(s.edge_color(), [0.0, 0.0, 1.0, 1.0]);
        assert!(!s.rainbow_mode());
        assert_eq!(s.rainbow_speed(), 30);
        assert_eq!(s.palette().len(), PALETTE_LEN);
    }

    #[test]
    fn test_set_color_round_trip() {
        // No hidden clamping: values in [0,1] come back unchanged
        let mut s = state();
        let color = [0.25, 0.5, 0.75, 1.0];
        s.set_surface_color(color);
        assert_eq!(s.surface_color(), color);
        s.set_edge_color(color);
        assert_eq!(s.edge_color(), color);
    }

    #[test]
    fn test_out_of_range_passes_through() {
        let mut s = state();
        s.set_surface_color([1.5, -0.5, 0.0, 1.0]);
        assert_eq!(s.surface_color(), [1.5, -0.5, 0.0, 1.0]);
    }

    #[test]
    fn test_rgba_from_u8() {
        assert_eq!(rgba_from_u8([0, 0, 0, 0]), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(rgba_from_u8([255, 255, 255, 255]), [1.0, 1.0, 1.0, 1.0]);
        let half = rgba_from_u8([51, 102, 153, 255]);
        assert!((half[0] - 0.2).abs() < 1e-6);
        assert!((half[1] - 0.4).abs() < 1e-6);
        assert!((half[2] - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_rainbow_toggle_keeps_fallback_colors() {
        let mut s = state();
        s.set_surface_color([0.1, 0.2, 0.3, 0.4]);
        s.set_rainbow_mode(true);
        s.set_rainbow_mode(false);
        assert_eq!(s.surface_color(), [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_palette_alpha_fixed() {
        let mut s = state();
        s.regenerate_palette(&mut SmallRng::seed_from_u64(99));
        assert_eq!(s.palette().len(), PALETTE_LEN);
        for entry in s.palette() {
            assert_eq!(entry[3], 1.0);
            for &c in &entry[..3] {
                assert!((0.0..1.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_palette_reproducible_under_seed() {
        let mut a = state();
        let mut b = state();
        a.regenerate_palette(&mut SmallRng::seed_from_u64(42));
        b.regenerate_palette(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a.palette(), b.palette());
    }

    #[test]
    fn test_raw_rainbow_speed_stored() {
        let mut s = state();
        s.set_rainbow_speed(200);
        assert_eq!(s.rainbow_speed(), 200);
    }
}
