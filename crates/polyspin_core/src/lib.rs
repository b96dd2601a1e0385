//! Viewer state for Polyspin
//!
//! This crate owns everything mutable in the viewer: colors, rainbow mode,
//! rotation speeds and accumulated angles, and the fixed-tick state machine
//! that advances them.
//!
//! ## Core Types
//!
//! - [`ColorState`] - surface/edge colors and the rainbow palette
//! - [`AnimationClock`] - per-axis angle accumulation and repaint cadence
//! - [`Viewer`] - single owner of all of the above, with host-facing setters

pub mod clock;
pub mod color;
pub mod viewer;

pub use clock::{AnimationClock, Axis, TickOutcome, SPEED_DIVISOR, TICK_INTERVAL};
pub use color::{rgba_from_u8, ColorState, Rgba, PALETTE_LEN};
pub use viewer::{Viewer, ViewerError};
