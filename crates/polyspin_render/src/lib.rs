//! Rendering library for Polyspin
//!
//! This crate turns viewer state into frames and puts them on screen with
//! wgpu.
//!
//! ## Key Components
//!
//! - [`frame::compose_frame`] - pure composition of one frame's draw commands
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::FramePipeline`] - line + triangle passes with a shared depth
//!   buffer and view-projection uniform

pub mod context;
pub mod frame;
pub mod pipeline;

pub use context::RenderContext;
pub use frame::{compose_frame, ComposeError, DrawCommand, Frame, FrameVertex};
pub use pipeline::{frustum_matrix, FramePipeline, FrameUniforms, GpuVertex};
