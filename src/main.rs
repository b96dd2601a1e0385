//! Polyspin - interactive viewer for spinning convex solids
//!
//! Displays one of four generated solids with per-axis rotation speeds,
//! fixed-interval animation ticks, and the rainbow face-coloring mode.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

use polyspin::config::AppConfig;
use polyspin_core::{Axis, Viewer};
use polyspin_input::{ViewerCommand, ViewerControls};
use polyspin_math::Vec3;
use polyspin_render::{
    compose_frame, frustum_matrix, FramePipeline, FrameUniforms, RenderContext,
};

/// Main application state
struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    pipeline: Option<FramePipeline>,
    viewer: Viewer,
    controls: ViewerControls,
    tick_interval: Duration,
    last_tick: Instant,
    /// Rotation baked into the uploaded frame, None before the first upload
    composed_angles: Option<[f32; 3]>,
}

impl App {
    fn new() -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let mut viewer = Viewer::new()
            .unwrap_or_else(|e| panic!("Failed to build viewer state: {}", e));

        // Seed viewer state from config
        if let Err(e) = viewer.set_shape_index(config.viewer.shape_index) {
            log::warn!("Configured shape ignored: {}", e);
        }
        for axis in Axis::ALL {
            viewer.set_rotation_speed(axis, config.viewer.speeds[axis.index()].clamp(0, 100));
        }
        viewer.set_animating(config.viewer.animate);
        viewer.set_surface_color_u8(config.viewer.surface_color);
        viewer.set_edge_color_u8(config.viewer.edge_color);
        viewer.set_rainbow_mode(config.viewer.rainbow_mode);
        viewer.set_rainbow_speed(config.viewer.rainbow_speed.clamp(1, 50));

        let tick_interval = Duration::from_millis(config.rendering.tick_interval_ms.max(1));

        Self {
            config,
            window: None,
            render_context: None,
            pipeline: None,
            viewer,
            controls: ViewerControls::new(),
            tick_interval,
            last_tick: Instant::now(),
            composed_angles: None,
        }
    }

    /// Status line shown in the window title
    fn title(&self) -> String {
        let speeds: Vec<String> = Axis::ALL
            .iter()
            .map(|&axis| self.viewer.rotation_speed(axis).to_string())
            .collect();
        format!(
            "{} - {} [{}]{}{}",
            self.config.window.title,
            self.viewer.active_kind().label(),
            speeds.join("/"),
            if self.viewer.animating() { "" } else { " (paused)" },
            if self.viewer.colors().rainbow_mode() { " rainbow" } else { "" },
        )
    }

    fn refresh_title(&self) {
        if let Some(window) = &self.window {
            window.set_title(&self.title());
        }
    }

    /// Apply one keyboard command to the viewer
    fn apply_command(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::SelectShape(index) => {
                if let Err(e) = self.viewer.set_shape_index(index) {
                    log::warn!("Shape selection rejected: {}", e);
                } else {
                    log::info!("Showing {}", self.viewer.active_kind().label());
                }
            }
            ViewerCommand::AdjustSpeed(axis, delta) => {
                let speed = (self.viewer.rotation_speed(axis) + delta).clamp(0, 100);
                self.viewer.set_rotation_speed(axis, speed);
            }
            ViewerCommand::ToggleAnimation => {
                let on = self.viewer.toggle_animation();
                log::info!("Animation: {}", if on { "ON" } else { "OFF" });
            }
            ViewerCommand::ToggleRainbow => {
                let on = self.viewer.toggle_rainbow_mode();
                log::info!("Rainbow mode: {}", if on { "ON" } else { "OFF" });
            }
            ViewerCommand::AdjustRainbowSpeed(delta) => {
                let speed = (self.viewer.colors().rainbow_speed() + delta).clamp(1, 50);
                self.viewer.set_rainbow_speed(speed);
            }
            ViewerCommand::SurfaceColor(channels) => {
                self.viewer.set_surface_color_u8(channels);
            }
            ViewerCommand::EdgeColor(channels) => {
                self.viewer.set_edge_color_u8(channels);
            }
        }

        self.refresh_title();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Recompose and upload the frame when the cached one is stale
    fn refresh_frame_if_stale(&mut self) {
        let (Some(ctx), Some(pipeline)) = (&self.render_context, &mut self.pipeline) else {
            return;
        };

        let angles = self.viewer.rotation_angles();
        let stale = self.viewer.take_geometry_dirty() || self.composed_angles != Some(angles);
        if !stale {
            return;
        }

        let offset = Vec3::new(0.0, 0.0, -self.config.rendering.camera_distance);
        match compose_frame(
            self.viewer.active_solid(),
            angles,
            offset,
            self.viewer.colors(),
            self.viewer.colors().palette(),
        ) {
            Ok(frame) => {
                pipeline.upload_frame(&ctx.device, &frame);
                self.composed_angles = Some(angles);
            }
            Err(e) => {
                log::error!("Frame composition failed: {}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let mut window_attributes = Window::default_attributes()
                .with_title(self.title())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));
            if self.config.window.fullscreen {
                window_attributes =
                    window_attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
            }

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            let render_context =
                pollster::block_on(RenderContext::new(window.clone(), self.config.window.vsync));

            let mut pipeline =
                FramePipeline::new(&render_context.device, render_context.config.format);
            pipeline.ensure_depth_texture(
                &render_context.device,
                render_context.size.width,
                render_context.size.height,
            );

            // The projection never changes after startup
            let e = self.config.rendering.frustum_extent;
            let uniforms = FrameUniforms {
                view_proj: frustum_matrix(
                    -e,
                    e,
                    -e,
                    e,
                    self.config.rendering.near,
                    self.config.rendering.far,
                ),
            };
            pipeline.update_uniforms(&render_context.queue, &uniforms);

            log::info!(
                "Viewer ready, showing {}",
                self.viewer.active_kind().label()
            );

            window.request_redraw();

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.pipeline = Some(pipeline);
            self.last_tick = Instant::now();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Fixed-interval animation ticks; a slow frame runs the ticks it
        // missed rather than stretching them.
        let now = Instant::now();
        let mut angles_advanced = false;
        while now.duration_since(self.last_tick) >= self.tick_interval {
            self.last_tick += self.tick_interval;
            let outcome = self.viewer.tick();
            angles_advanced |= outcome.angles_advanced;
        }

        if angles_advanced {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.last_tick + self.tick_interval));
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
                if let (Some(ctx), Some(pipeline)) = (&self.render_context, &mut self.pipeline) {
                    pipeline.ensure_depth_texture(
                        &ctx.device,
                        physical_size.width,
                        physical_size.height,
                    );
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if event.state == ElementState::Pressed {
                        match key {
                            KeyCode::Escape => {
                                event_loop.exit();
                                return;
                            }
                            KeyCode::KeyF => {
                                if let Some(window) = &self.window {
                                    let new_fullscreen = if window.fullscreen().is_some() {
                                        None
                                    } else {
                                        Some(Fullscreen::Borderless(None))
                                    };
                                    window.set_fullscreen(new_fullscreen);
                                }
                                return;
                            }
                            _ => {}
                        }
                    }
                    if let Some(command) = self.controls.process_keyboard(key, event.state) {
                        self.apply_command(command);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.refresh_frame_if_stale();

                let (Some(ctx), Some(pipeline)) = (&self.render_context, &self.pipeline) else {
                    return;
                };

                let output = match ctx.surface.get_current_texture() {
                    Ok(output) => output,
                    Err(wgpu::SurfaceError::Lost) => {
                        if let Some(ctx) = &mut self.render_context {
                            ctx.resize(ctx.size);
                        }
                        if let Some(window) = &self.window {
                            window.request_redraw();
                        }
                        return;
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        event_loop.exit();
                        return;
                    }
                    Err(e) => {
                        log::warn!("Surface error: {:?}", e);
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                let mut encoder =
                    ctx.device
                        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("Render Encoder"),
                        });

                let bg = &self.config.rendering.background_color;
                pipeline.render(
                    &mut encoder,
                    &view,
                    wgpu::Color {
                        r: bg[0] as f64,
                        g: bg[1] as f64,
                        b: bg[2] as f64,
                        a: bg[3] as f64,
                    },
                    (ctx.config.width, ctx.config.height),
                );

                ctx.queue.submit(std::iter::once(encoder.finish()));
                output.present();
            }

            _ => {}
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Starting Polyspin");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
