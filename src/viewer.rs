//! Standalone visualization window backed by winit.
//!
//! ```no_run
//! # use eduverse::{SubjectId, Viewer};
//! Viewer::builder()
//!     .with_subject(SubjectId::Space, 0)
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    error::EduError, options::Options, renderer::Renderer, EduEngine,
    InputEvent, MouseButton, SubjectId,
};

/// Wheel units per scroll line. Browsers report about 100 per notch, which
/// is what the zoom speed is tuned for.
const PIXELS_PER_LINE: f32 = 100.0;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    subject: Option<(SubjectId, usize)>,
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "EduVerse 3D", subject
    /// picker, default options).
    fn new() -> Self {
        Self {
            subject: None,
            options: None,
            title: "EduVerse 3D".into(),
        }
    }

    /// Open directly on a subject and model instead of the picker.
    #[must_use]
    pub fn with_subject(mut self, subject: SubjectId, model_index: usize) -> Self {
        self.subject = Some((subject, model_index));
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the initial window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            subject: self.subject,
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window showing one subject's scenes.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    subject: Option<(SubjectId, usize)>,
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed; GPU resources are released when the loop returns.
    ///
    /// # Errors
    ///
    /// Returns [`EduError::Viewer`] if the event loop cannot be created or
    /// exits with an error.
    pub fn run(self) -> Result<(), EduError> {
        let event_loop =
            EventLoop::new().map_err(|e| EduError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut engine = EduEngine::new(self.options);
        if let Some((subject, index)) = self.subject {
            if let Err(e) = engine.open(subject, index) {
                log::error!("{e}, opening the subject picker");
            }
        }

        let mut app = ViewerApp {
            window: None,
            renderer: None,
            engine,
            last_frame_time: Instant::now(),
            title: self.title,
            caption: String::new(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| EduError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    engine: EduEngine,
    last_frame_time: Instant,
    title: String,
    /// Last caption pushed to the window title.
    caption: String,
}

/// Compute the wgpu surface size, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    fn resize(&mut self, inner: winit::dpi::PhysicalSize<u32>) {
        let (vp_w, vp_h) = viewport_size(inner);
        self.engine.resize(vp_w, vp_h);
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(vp_w, vp_h);
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        let _ = self.engine.update(dt);

        let caption = self.engine.caption();
        if caption != self.caption {
            if let Some(w) = &self.window {
                w.set_title(&caption);
            }
            self.caption = caption;
        }

        let Some(renderer) = &mut self.renderer else {
            return;
        };
        match renderer.render(&mut self.engine) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                if let Some(inner) = self.window.as_ref().map(|w| w.inner_size())
                {
                    self.resize(inner);
                }
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (mon_size.width as f64 / scale * 0.75) as u32;
            let logical_h = (mon_size.height as f64 / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let renderer = match pollster::block_on(Renderer::new(
            window.clone(),
            viewport_size(inner),
            &self.engine.options().display,
        )) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.resize(inner);
        self.last_frame_time = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            log::info!("window closed");
            event_loop.exit();
            return;
        }

        if self.window.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => self.resize(event_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(inner) = self.window.as_ref().map(|w| w.inner_size())
                {
                    self.resize(inner);
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let _ = self.engine.handle_input(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                let _ = self.engine.handle_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::CursorLeft { .. } => {
                let _ = self.engine.handle_input(InputEvent::CursorLeft);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                // winit reports "scroll up" as positive; browsers report it
                // as negative deltaY, which zooms in.
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * PIXELS_PER_LINE,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                let _ = self.engine.handle_input(InputEvent::Scroll {
                    delta: scroll_delta,
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key_str = format!("{code:?}");
                let _ = self.engine.handle_key_press(&key_str);
            }

            _ => (),
        }
    }
}
