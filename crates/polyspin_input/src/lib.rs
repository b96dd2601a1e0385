//! Keyboard input handling for the viewer
//!
//! Translates winit keyboard events into viewer commands. The controller
//! does not touch viewer state itself; the application applies the
//! returned commands.

pub mod controls;

pub use controls::{ViewerCommand, ViewerControls, EDGE_PRESETS, SURFACE_PRESETS};
