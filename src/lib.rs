//! Polyspin - interactive viewer for spinning convex solids
//!
//! Library surface for the binary and the integration tests. The viewer
//! logic lives in the member crates; this crate adds configuration and
//! the windowed application shell.

pub mod config;

pub use config::{AppConfig, ConfigError};
