//! Window backends
//!
//! The session talks to the platform only through [`WindowBackend`], so it
//! can run against GLFW or against the in-memory [`HeadlessBackend`].
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     WindowSession               │
//! └─────────────┬───────────────────┘
//!               │ Box<dyn WindowBackend>
//!      ┌────────▼────────┐
//!      │ WindowBackend   │ ← trait (this module)
//!      └────────┬────────┘
//!               │ Implemented by
//!   ┌───────────▼──────────────┐
//!   │ GlfwBackend              │ ← GLFW window + OpenGL context
//!   │ HeadlessBackend          │ ← in-memory window for tests
//!   └──────────────────────────┘
//! ```

pub mod glfw_window;
pub mod headless;

pub use self::glfw_window::GlfwBackend;
pub use self::headless::HeadlessBackend;

use crate::events::WindowEvent;
use crate::geometry::{AspectRatio, Position, Size, SizeLimits};
use crate::session::CursorMode;

/// Platform window operations consumed by the session
///
/// Not `Send`: window operations belong to the thread that created the
/// window, which is also the thread running the main loop.
pub trait WindowBackend {
    /// Whether the platform asked the window to close
    fn should_close(&self) -> bool;

    /// Set or clear the close flag
    fn set_should_close(&mut self, should_close: bool);

    /// Process pending platform events and return them with timestamps
    fn poll_events(&mut self) -> Vec<(f64, WindowEvent)>;

    /// Seconds since the backend started
    fn time(&self) -> f64;

    /// Client area size
    fn size(&self) -> Size;

    /// Resize the client area
    fn set_size(&mut self, size: Size);

    /// Top-left position on screen
    fn position(&self) -> Position;

    /// Move the window
    fn set_position(&mut self, position: Position);

    /// Set the title bar text
    fn set_title(&mut self, title: &str);

    /// Minimize the window
    fn iconify(&mut self);

    /// Restore a minimized window
    fn restore(&mut self);

    /// Whether the window is minimized
    fn is_iconified(&self) -> bool;

    /// Change cursor visibility and locking
    fn set_cursor_mode(&mut self, mode: CursorMode);

    /// Flash the taskbar entry or bounce the dock icon
    fn request_attention(&mut self);

    /// Resolution of the primary display, if one is known
    fn primary_display_size(&mut self) -> Option<Size>;

    /// Constrain user resizes to the given limits
    fn set_size_limits(&mut self, limits: &SizeLimits);

    /// Constrain user resizes to the given ratio
    fn set_aspect_ratio(&mut self, ratio: AspectRatio);

    /// Match the rendering viewport to a framebuffer size
    fn set_viewport(&mut self, size: Size);

    /// Clear the framebuffer to `clear_color`
    fn begin_frame(&mut self, clear_color: [f32; 4]);

    /// Present the frame (swap buffers)
    fn present(&mut self);

    /// Concrete type access for downcasting
    fn as_any(&self) -> &dyn std::any::Any;

    /// Mutable concrete type access for downcasting
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}
