//! Backend-agnostic window events and their dispatch
//!
//! Backends translate their native events into [`WindowEvent`]. [`dispatch`]
//! first folds the event into the session's own state (size, position,
//! iconify state, cursor, close flag) and then hands it to an
//! [`EventHandler`], whose methods each receive the session explicitly.

use crate::geometry::{Position, Size};
use crate::session::WindowSession;
use std::path::PathBuf;

/// Keyboard key, reduced to what handlers need to tell keys apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Letter key, always uppercase
    Char(char),
    /// Escape
    Escape,
    /// Enter / return
    Enter,
    /// Space bar
    Space,
    /// Tab
    Tab,
    /// Any other key, carrying the backend key code
    Other(i32),
}

/// Key or button transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Pressed down
    Press,
    /// Released
    Release,
    /// Held long enough to auto-repeat
    Repeat,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
    /// Wheel button
    Middle,
    /// Extra buttons, numbered from zero as the backend does
    Other(u8),
}

/// Event delivered by a window backend
#[derive(Debug, Clone, PartialEq)]
pub enum WindowEvent {
    /// Key transition
    Key {
        /// Key involved
        key: Key,
        /// Transition
        action: Action,
    },
    /// Cursor moved, in window coordinates
    CursorMoved {
        /// Horizontal coordinate
        x: f64,
        /// Vertical coordinate
        y: f64,
    },
    /// Mouse button transition
    MouseButton {
        /// Button involved
        button: MouseButton,
        /// Transition
        action: Action,
    },
    /// Files dropped onto the window
    FileDrop(Vec<PathBuf>),
    /// Window client area resized
    Resized(Size),
    /// Framebuffer resized
    FramebufferResized(Size),
    /// Window iconified (`true`) or restored (`false`)
    Iconified(bool),
    /// Window moved
    Moved(Position),
    /// Window focus gained (`true`) or lost (`false`)
    Focused(bool),
    /// User asked the window to close
    CloseRequested,
}

/// Reactions to window events
///
/// Every method gets the session by mutable reference. Defaults do nothing,
/// so implementors only override what they react to. Session bookkeeping has
/// already happened by the time a method runs.
#[allow(unused_variables)]
pub trait EventHandler {
    /// Key transition
    fn on_key(&mut self, session: &mut WindowSession, key: Key, action: Action) {}

    /// Cursor moved
    fn on_cursor_moved(&mut self, session: &mut WindowSession, x: f64, y: f64) {}

    /// Mouse button transition
    fn on_mouse_button(&mut self, session: &mut WindowSession, button: MouseButton, action: Action) {}

    /// Files dropped onto the window
    fn on_file_drop(&mut self, session: &mut WindowSession, paths: &[PathBuf]) {}

    /// Window resized
    fn on_resized(&mut self, session: &mut WindowSession, size: Size) {}

    /// Framebuffer resized
    fn on_framebuffer_resized(&mut self, session: &mut WindowSession, size: Size) {}

    /// Window iconified or restored
    fn on_iconified(&mut self, session: &mut WindowSession, iconified: bool) {}

    /// Window moved
    fn on_moved(&mut self, session: &mut WindowSession, position: Position) {}

    /// Focus changed
    fn on_focus(&mut self, session: &mut WindowSession, focused: bool) {}

    /// Close requested by the user
    fn on_close_requested(&mut self, session: &mut WindowSession) {}
}

/// Handler that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHandler;

impl EventHandler for NoopHandler {}

/// Route one event: update session state, then notify the handler
pub fn dispatch<H>(handler: &mut H, session: &mut WindowSession, event: &WindowEvent)
where
    H: EventHandler + ?Sized,
{
    session.observe(event);

    match event {
        WindowEvent::Key { key, action } => handler.on_key(session, *key, *action),
        WindowEvent::CursorMoved { x, y } => handler.on_cursor_moved(session, *x, *y),
        WindowEvent::MouseButton { button, action } => handler.on_mouse_button(session, *button, *action),
        WindowEvent::FileDrop(paths) => handler.on_file_drop(session, paths),
        WindowEvent::Resized(size) => handler.on_resized(session, *size),
        WindowEvent::FramebufferResized(size) => handler.on_framebuffer_resized(session, *size),
        WindowEvent::Iconified(iconified) => handler.on_iconified(session, *iconified),
        WindowEvent::Moved(position) => handler.on_moved(session, *position),
        WindowEvent::Focused(focused) => handler.on_focus(session, *focused),
        WindowEvent::CloseRequested => handler.on_close_requested(session),
    }
}
