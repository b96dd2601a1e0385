//! Keyboard bindings for viewer control
//!
//! Bindings:
//! - 1-4: select cube / pyramid / tetrahedron / octahedron
//! - X/Y/Z: raise the axis rotation speed by 5 (with Shift: lower by 5)
//! - Space: toggle animation
//! - R: toggle rainbow mode
//! - Up/Down: raise/lower the rainbow speed
//! - C: cycle the surface color preset
//! - E: cycle the edge color preset

use polyspin_core::Axis;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Surface color presets cycled by C, as 8-bit RGBA
pub const SURFACE_PRESETS: [[u8; 4]; 6] = [
    [255, 255, 0, 255],   // yellow (startup)
    [255, 0, 0, 255],     // red
    [0, 255, 0, 255],     // green
    [255, 128, 0, 255],   // orange
    [255, 0, 255, 255],   // magenta
    [255, 255, 255, 255], // white
];

/// Edge color presets cycled by E, as 8-bit RGBA
pub const EDGE_PRESETS: [[u8; 4]; 4] = [
    [0, 0, 255, 255],     // blue (startup)
    [0, 0, 0, 255],       // black
    [255, 255, 255, 255], // white
    [0, 255, 255, 255],   // cyan
];

/// Command produced by a key press, applied by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    SelectShape(usize),
    AdjustSpeed(Axis, i32),
    ToggleAnimation,
    ToggleRainbow,
    AdjustRainbowSpeed(i32),
    SurfaceColor([u8; 4]),
    EdgeColor([u8; 4]),
}

/// Translates keyboard events into commands
///
/// Tracks the Shift modifier and the two color preset cursors. Starts on
/// preset 0, so the first C or E press moves to the second preset.
pub struct ViewerControls {
    shift_held: bool,
    surface_cursor: usize,
    edge_cursor: usize,
}

impl Default for ViewerControls {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerControls {
    pub fn new() -> Self {
        Self {
            shift_held: false,
            surface_cursor: 0,
            edge_cursor: 0,
        }
    }

    /// Process a keyboard event, returning the command it maps to
    ///
    /// Commands fire on press only; releases update modifier state.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> Option<ViewerCommand> {
        let pressed = state == ElementState::Pressed;

        if matches!(key, KeyCode::ShiftLeft | KeyCode::ShiftRight) {
            self.shift_held = pressed;
            return None;
        }
        if !pressed {
            return None;
        }

        let speed_delta = if self.shift_held { -5 } else { 5 };

        match key {
            KeyCode::Digit1 => Some(ViewerCommand::SelectShape(0)),
            KeyCode::Digit2 => Some(ViewerCommand::SelectShape(1)),
            KeyCode::Digit3 => Some(ViewerCommand::SelectShape(2)),
            KeyCode::Digit4 => Some(ViewerCommand::SelectShape(3)),
            KeyCode::KeyX => Some(ViewerCommand::AdjustSpeed(Axis::X, speed_delta)),
            KeyCode::KeyY => Some(ViewerCommand::AdjustSpeed(Axis::Y, speed_delta)),
            KeyCode::KeyZ => Some(ViewerCommand::AdjustSpeed(Axis::Z, speed_delta)),
            KeyCode::Space => Some(ViewerCommand::ToggleAnimation),
            KeyCode::KeyR => Some(ViewerCommand::ToggleRainbow),
            KeyCode::ArrowUp => Some(ViewerCommand::AdjustRainbowSpeed(1)),
            KeyCode::ArrowDown => Some(ViewerCommand::AdjustRainbowSpeed(-1)),
            KeyCode::KeyC => {
                self.surface_cursor = (self.surface_cursor + 1) % SURFACE_PRESETS.len();
                Some(ViewerCommand::SurfaceColor(SURFACE_PRESETS[self.surface_cursor]))
            }
            KeyCode::KeyE => {
                self.edge_cursor = (self.edge_cursor + 1) % EDGE_PRESETS.len();
                Some(ViewerCommand::EdgeColor(EDGE_PRESETS[self.edge_cursor]))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(controls: &mut ViewerControls, key: KeyCode) -> Option<ViewerCommand> {
        controls.process_keyboard(key, ElementState::Pressed)
    }

    fn release(controls: &mut ViewerControls, key: KeyCode) -> Option<ViewerCommand> {
        controls.process_keyboard(key, ElementState::Released)
    }

    #[test]
    fn test_digit_keys_select_shapes() {
        let mut controls = ViewerControls::new();
        assert_eq!(press(&mut controls, KeyCode::Digit1), Some(ViewerCommand::SelectShape(0)));
        assert_eq!(press(&mut controls, KeyCode::Digit4), Some(ViewerCommand::SelectShape(3)));
    }

    #[test]
    fn test_axis_keys_raise_speed() {
        let mut controls = ViewerControls::new();
        assert_eq!(
            press(&mut controls, KeyCode::KeyX),
            Some(ViewerCommand::AdjustSpeed(Axis::X, 5))
        );
        assert_eq!(
            press(&mut controls, KeyCode::KeyZ),
            Some(ViewerCommand::AdjustSpeed(Axis::Z, 5))
        );
    }

    #[test]
    fn test_shift_lowers_speed() {
        let mut controls = ViewerControls::new();
        assert_eq!(press(&mut controls, KeyCode::ShiftLeft), None);
        assert_eq!(
            press(&mut controls, KeyCode::KeyY),
            Some(ViewerCommand::AdjustSpeed(Axis::Y, -5))
        );
        // Releasing shift restores the raise direction
        assert_eq!(release(&mut controls, KeyCode::ShiftLeft), None);
        assert_eq!(
            press(&mut controls, KeyCode::KeyY),
            Some(ViewerCommand::AdjustSpeed(Axis::Y, 5))
        );
    }

    #[test]
    fn test_toggles_and_rainbow_speed() {
        let mut controls = ViewerControls::new();
        assert_eq!(press(&mut controls, KeyCode::Space), Some(ViewerCommand::ToggleAnimation));
        assert_eq!(press(&mut controls, KeyCode::KeyR), Some(ViewerCommand::ToggleRainbow));
        assert_eq!(
            press(&mut controls, KeyCode::ArrowUp),
            Some(ViewerCommand::AdjustRainbowSpeed(1))
        );
        assert_eq!(
            press(&mut controls, KeyCode::ArrowDown),
            Some(ViewerCommand::AdjustRainbowSpeed(-1))
        );
    }

    #[test]
    fn test_release_produces_no_command() {
        let mut controls = ViewerControls::new();
        assert_eq!(release(&mut controls, KeyCode::Space), None);
        assert_eq!(release(&mut controls, KeyCode::Digit1), None);
    }

    #[test]
    fn test_color_presets_cycle_and_wrap() {
        let mut controls = ViewerControls::new();
        // First press moves past the startup preset
        assert_eq!(
            press(&mut controls, KeyCode::KeyC),
            Some(ViewerCommand::SurfaceColor(SURFACE_PRESETS[1]))
        );
        for _ in 0..SURFACE_PRESETS.len() - 1 {
            press(&mut controls, KeyCode::KeyC);
        }
        // Full cycle lands back on the second preset
        assert_eq!(
            press(&mut controls, KeyCode::KeyC),
            Some(ViewerCommand::SurfaceColor(SURFACE_PRESETS[1]))
        );
    }

    #[test]
    fn test_surface_and_edge_cursors_are_independent() {
        let mut controls = ViewerControls::new();
        press(&mut controls, KeyCode::KeyC);
        press(&mut controls, KeyCode::KeyC);
        assert_eq!(
            press(&mut controls, KeyCode::KeyE),
            Some(ViewerCommand::EdgeColor(EDGE_PRESETS[1]))
        );
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut controls = ViewerControls::new();
        assert_eq!(press(&mut controls, KeyCode::KeyQ), None);
    }
}
