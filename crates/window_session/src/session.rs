//! Window session: the logical state of one on-screen window
//!
//! A [`WindowSession`] owns a backend and mirrors the window's size,
//! position, title, iconify state and cursor mode. Mutating operations go
//! through the session so that limits, the aspect ratio and the iconify
//! state machine hold no matter who asked for the change.
//!
//! # Iconify state machine
//!
//! ```text
//!            iconify()
//!   Normal ───────────▶ Iconified
//!      ▲                    │
//!      └────────────────────┘
//!            restore()
//! ```
//!
//! Both transitions are triggered from outside; there is no terminal state.

use crate::backend::WindowBackend;
use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::events::WindowEvent;
use crate::geometry::{center_in, constrain_size, AspectRatio, Position, Size, SizeLimits};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Iconify state of a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconifyState {
    /// Visible on screen
    #[default]
    Normal,
    /// Minimized to the taskbar or dock
    Iconified,
}

/// How the cursor behaves over the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorMode {
    /// Visible and unconstrained
    #[default]
    Normal,
    /// Invisible while over the window
    Hidden,
    /// Invisible and locked to the window
    Disabled,
}

/// Logical state of one window plus the backend that realizes it
pub struct WindowSession {
    backend: Box<dyn WindowBackend>,
    base_title: String,
    title: String,
    size: Size,
    framebuffer_size: Size,
    position: Position,
    iconify: IconifyState,
    cursor_mode: CursorMode,
    size_limits: SizeLimits,
    aspect_ratio: Option<AspectRatio>,
    title_refresh_interval: u64,
    clear_color: [f32; 4],
    close_requested: bool,
    cursor_position: (f64, f64),
    last_click: Option<(f64, f64)>,
    dropped_paths: Vec<PathBuf>,
    last_fps: Option<f64>,
}

impl WindowSession {
    /// Create a session over an already created backend window
    ///
    /// Validates the configuration, pushes the size limits and aspect ratio
    /// to the backend and clamps the initial size into the limits.
    pub fn new(config: SessionConfig, mut backend: Box<dyn WindowBackend>) -> SessionResult<Self> {
        config.validate().map_err(SessionError::InvalidConfig)?;

        backend.set_size_limits(&config.size_limits);
        if let Some(ratio) = config.aspect_ratio {
            backend.set_aspect_ratio(ratio);
        }

        let current = backend.size();
        let size = constrain_size(current, &config.size_limits, None);
        if size != current {
            log::debug!(
                "Initial size {}x{} outside limits, using {}x{}",
                current.width,
                current.height,
                size.width,
                size.height
            );
            backend.set_size(size);
        }
        backend.set_title(&config.title);

        let position = backend.position();
        let iconify = if backend.is_iconified() {
            IconifyState::Iconified
        } else {
            IconifyState::Normal
        };

        log::info!(
            "Window session '{}' created at {}x{} ({}, {})",
            config.title,
            size.width,
            size.height,
            position.x,
            position.y
        );

        Ok(Self {
            backend,
            title: config.title.clone(),
            base_title: config.title,
            size,
            framebuffer_size: size,
            position,
            iconify,
            cursor_mode: CursorMode::Normal,
            size_limits: config.size_limits,
            aspect_ratio: config.aspect_ratio,
            title_refresh_interval: config.title_refresh_interval,
            clear_color: config.context.clear_color,
            close_requested: false,
            cursor_position: (0.0, 0.0),
            last_click: None,
            dropped_paths: Vec::new(),
            last_fps: None,
        })
    }

    /// Center the window on the primary display
    ///
    /// Returns the applied position, or `None` without touching the window
    /// when the backend cannot report a display size.
    pub fn center_on_primary_display(&mut self) -> Option<Position> {
        let Some(display) = self.backend.primary_display_size() else {
            log::debug!("Primary display size unavailable, not centering");
            return None;
        };

        self.accept_reported_size(self.backend.size());
        let position = center_in(display, self.size);
        self.backend.set_position(position);
        self.position = position;

        log::debug!(
            "Centered {}x{} window on {}x{} display at ({}, {})",
            self.size.width,
            self.size.height,
            display.width,
            display.height,
            position.x,
            position.y
        );
        Some(position)
    }

    /// Iconify when normal, restore when iconified; returns the new state
    pub fn toggle_iconify(&mut self) -> IconifyState {
        match self.iconify {
            IconifyState::Normal => self.iconify(),
            IconifyState::Iconified => self.restore(),
        }
        self.iconify
    }

    /// Iconify the window; does nothing if already iconified
    pub fn iconify(&mut self) {
        if self.iconify == IconifyState::Normal {
            self.backend.iconify();
            self.iconify = IconifyState::Iconified;
        }
    }

    /// Restore the window; does nothing unless iconified
    pub fn restore(&mut self) {
        if self.iconify == IconifyState::Iconified {
            self.backend.restore();
            self.iconify = IconifyState::Normal;
        }
    }

    /// Resize under the configured limits and aspect ratio
    ///
    /// Out-of-range requests are clamped, never rejected. Returns the size
    /// actually applied.
    pub fn resize(&mut self, width: u32, height: u32) -> Size {
        let size = constrain_size(Size::new(width, height), &self.size_limits, self.aspect_ratio);
        if size != Size::new(width, height) {
            log::debug!("Resize {}x{} constrained to {}x{}", width, height, size.width, size.height);
        }
        self.backend.set_size(size);
        self.size = size;
        size
    }

    /// Per-frame hook refreshing the fps readout in the title
    ///
    /// Only frames whose index is a multiple of the refresh interval update
    /// the title. A non-positive or non-finite delta reports 0 fps. Returns
    /// the fps written to the title, if any.
    pub fn on_frame_tick(&mut self, delta_time_seconds: f64, frame_index: u64) -> Option<f64> {
        if frame_index % self.title_refresh_interval != 0 {
            return None;
        }

        let fps = frames_per_second(delta_time_seconds);
        self.title = format!("{} {:.6}", self.base_title, fps);
        self.backend.set_title(&self.title);
        self.last_fps = Some(fps);
        Some(fps)
    }

    /// Replace the base title and show it immediately
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.base_title = title.into();
        self.title.clone_from(&self.base_title);
        self.backend.set_title(&self.title);
    }

    /// Change the cursor mode
    pub fn set_cursor_mode(&mut self, mode: CursorMode) {
        if self.cursor_mode != mode {
            self.backend.set_cursor_mode(mode);
            self.cursor_mode = mode;
        }
    }

    /// Ask the platform to draw the user's attention to the window
    pub fn request_attention(&mut self) {
        self.backend.request_attention();
    }

    /// Ask the main loop to stop after the current iteration
    pub fn request_close(&mut self) {
        self.close_requested = true;
        self.backend.set_should_close(true);
    }

    /// Whether the main loop should stop
    pub fn should_close(&self) -> bool {
        self.close_requested || self.backend.should_close()
    }

    /// Re-read size, position and iconify state from the backend
    pub fn sync_from_backend(&mut self) {
        self.accept_reported_size(self.backend.size());
        self.position = self.backend.position();
        self.iconify = if self.backend.is_iconified() {
            IconifyState::Iconified
        } else {
            IconifyState::Normal
        };
    }

    /// Take a size reported by the backend, keeping the limits invariant
    ///
    /// Iconified windows report 0x0 on some platforms; such sizes leave the
    /// last known size in place.
    fn accept_reported_size(&mut self, reported: Size) {
        if reported.width == 0 || reported.height == 0 {
            log::trace!("Ignoring {}x{} reported size", reported.width, reported.height);
            return;
        }
        self.size = constrain_size(reported, &self.size_limits, None);
    }

    /// Fold a backend event into session state
    ///
    /// Called by [`crate::events::dispatch`] before any handler runs.
    pub fn observe(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Resized(size) => self.accept_reported_size(*size),
            WindowEvent::FramebufferResized(size) => {
                self.framebuffer_size = *size;
                self.backend.set_viewport(*size);
            }
            WindowEvent::Iconified(true) => self.iconify = IconifyState::Iconified,
            WindowEvent::Iconified(false) => self.iconify = IconifyState::Normal,
            WindowEvent::Moved(position) => self.position = *position,
            WindowEvent::CursorMoved { x, y } => self.cursor_position = (*x, *y),
            WindowEvent::CloseRequested => self.close_requested = true,
            WindowEvent::Key { .. }
            | WindowEvent::MouseButton { .. }
            | WindowEvent::FileDrop(_)
            | WindowEvent::Focused(_) => {}
        }
    }

    /// Remember the current cursor position as the last click
    pub fn snapshot_click(&mut self) -> (f64, f64) {
        self.last_click = Some(self.cursor_position);
        self.cursor_position
    }

    /// Record the paths of a file drop, replacing the previous drop
    pub fn record_dropped_paths(&mut self, paths: &[PathBuf]) {
        self.dropped_paths = paths.to_vec();
    }

    /// Drain backend events queued since the last poll
    pub fn poll_events(&mut self) -> Vec<(f64, WindowEvent)> {
        self.backend.poll_events()
    }

    /// Clear the framebuffer and present it
    pub fn render_frame(&mut self) {
        self.backend.begin_frame(self.clear_color);
        self.backend.present();
    }

    /// Backend clock in seconds
    pub fn time(&self) -> f64 {
        self.backend.time()
    }

    /// Current size
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Current framebuffer size
    pub const fn framebuffer_size(&self) -> Size {
        self.framebuffer_size
    }

    /// Current top-left position
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Title as currently shown
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title without the fps readout
    pub fn base_title(&self) -> &str {
        &self.base_title
    }

    /// Iconify state
    pub const fn iconify_state(&self) -> IconifyState {
        self.iconify
    }

    /// Whether the window is iconified
    pub fn is_iconified(&self) -> bool {
        self.iconify == IconifyState::Iconified
    }

    /// Cursor mode
    pub const fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    /// Active aspect ratio constraint
    pub const fn aspect_ratio(&self) -> Option<AspectRatio> {
        self.aspect_ratio
    }

    /// Size limits
    pub const fn size_limits(&self) -> SizeLimits {
        self.size_limits
    }

    /// Last known cursor position
    pub const fn cursor_position(&self) -> (f64, f64) {
        self.cursor_position
    }

    /// Cursor position at the last mouse button press
    pub const fn last_click(&self) -> Option<(f64, f64)> {
        self.last_click
    }

    /// Paths from the latest file drop
    pub fn dropped_paths(&self) -> &[PathBuf] {
        &self.dropped_paths
    }

    /// Fps last written to the title
    pub const fn last_fps(&self) -> Option<f64> {
        self.last_fps
    }

    /// Borrow the backend
    pub fn backend(&self) -> &dyn WindowBackend {
        self.backend.as_ref()
    }

    /// Borrow the backend mutably
    pub fn backend_mut(&mut self) -> &mut dyn WindowBackend {
        self.backend.as_mut()
    }

    /// Downcast the backend to its concrete type
    pub fn backend_as<T: 'static>(&self) -> Option<&T> {
        self.backend.as_any().downcast_ref::<T>()
    }

    /// Downcast the backend to its concrete type, mutably
    pub fn backend_as_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.backend.as_any_mut().downcast_mut::<T>()
    }
}

impl std::fmt::Debug for WindowSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowSession")
            .field("title", &self.title)
            .field("size", &self.size)
            .field("position", &self.position)
            .field("iconify", &self.iconify)
            .field("cursor_mode", &self.cursor_mode)
            .field("close_requested", &self.close_requested)
            .finish_non_exhaustive()
    }
}

/// `1 / delta`, or 0 when the delta cannot produce a meaningful rate
pub fn frames_per_second(delta_time_seconds: f64) -> f64 {
    if delta_time_seconds > 0.0 && delta_time_seconds.is_finite() {
        1.0 / delta_time_seconds
    } else {
        0.0
    }
}
