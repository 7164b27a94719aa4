//! Window management using GLFW
//!
//! Creates a GLFW window with an OpenGL context, loads GL entry points
//! through GLFW and translates GLFW events into [`WindowEvent`].

use super::WindowBackend;
use crate::config::{SessionConfig, WindowHints};
use crate::error::{SessionError, SessionResult};
use crate::events::{Action, Key, MouseButton, WindowEvent};
use crate::geometry::{AspectRatio, Position, Size, SizeLimits};
use crate::session::CursorMode;
use glfw::Context;

/// GLFW window wrapper with proper resource management
pub struct GlfwBackend {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl GlfwBackend {
    /// Initialize GLFW, create the window and make its GL context current
    pub fn new(config: &SessionConfig) -> SessionResult<Self> {
        let mut glfw = glfw::init(glfw::log_errors).map_err(|_| SessionError::InitializationFailed)?;

        log::info!("Running against GLFW {}", glfw::get_version_string());

        glfw.default_window_hints();
        apply_hints(&mut glfw, &config.hints);

        let (major, minor) = config.context.version;
        glfw.window_hint(glfw::WindowHint::ContextVersion(major, minor));
        if config.context.core_profile {
            glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
            glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(cfg!(target_os = "macos")));
        }

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(SessionError::CreationFailed)?;

        window.make_current();
        load_gl(&mut window)?;

        window.set_key_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_mouse_button_polling(true);
        window.set_drag_and_drop_polling(true);
        window.set_size_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_iconify_polling(true);
        window.set_pos_polling(true);
        window.set_focus_polling(true);
        window.set_close_polling(true);

        let interval = if config.context.vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        };
        glfw.set_swap_interval(interval);

        log::debug!(
            "Created {}x{} GLFW window with OpenGL {}.{} context",
            config.width,
            config.height,
            major,
            minor
        );

        Ok(Self { glfw, window, events })
    }
}

fn apply_hints(glfw: &mut glfw::Glfw, hints: &WindowHints) {
    glfw.window_hint(glfw::WindowHint::Visible(hints.visible));
    glfw.window_hint(glfw::WindowHint::Resizable(hints.resizable));
    glfw.window_hint(glfw::WindowHint::Decorated(hints.decorated));
    glfw.window_hint(glfw::WindowHint::Focused(hints.focused));
    glfw.window_hint(glfw::WindowHint::Floating(hints.floating));
    glfw.window_hint(glfw::WindowHint::Maximized(hints.maximized));
    glfw.window_hint(glfw::WindowHint::CenterCursor(hints.center_cursor));
    glfw.window_hint(glfw::WindowHint::TransparentFramebuffer(hints.transparent_framebuffer));
}

fn load_gl(window: &mut glfw::PWindow) -> SessionResult<()> {
    gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);

    if gl::Clear::is_loaded() && gl::ClearColor::is_loaded() && gl::Viewport::is_loaded() {
        Ok(())
    } else {
        Err(SessionError::ContextLoadFailed(
            "glClear, glClearColor or glViewport unavailable".to_string(),
        ))
    }
}

fn to_u32(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn convert_key(key: glfw::Key) -> Key {
    match key {
        glfw::Key::Escape => Key::Escape,
        glfw::Key::Enter => Key::Enter,
        glfw::Key::Space => Key::Space,
        glfw::Key::Tab => Key::Tab,
        other => {
            let code = other as i32;
            match u8::try_from(code) {
                Ok(byte) if byte.is_ascii_uppercase() => Key::Char(char::from(byte)),
                _ => Key::Other(code),
            }
        }
    }
}

const fn convert_action(action: glfw::Action) -> Action {
    match action {
        glfw::Action::Press => Action::Press,
        glfw::Action::Release => Action::Release,
        glfw::Action::Repeat => Action::Repeat,
    }
}

fn convert_mouse_button(button: glfw::MouseButton) -> MouseButton {
    match button {
        glfw::MouseButton::Button1 => MouseButton::Left,
        glfw::MouseButton::Button2 => MouseButton::Right,
        glfw::MouseButton::Button3 => MouseButton::Middle,
        other => MouseButton::Other(u8::try_from(other as i32).unwrap_or(u8::MAX)),
    }
}

fn convert_event(event: glfw::WindowEvent) -> Option<WindowEvent> {
    let event = match event {
        glfw::WindowEvent::Key(key, _, action, _) => WindowEvent::Key {
            key: convert_key(key),
            action: convert_action(action),
        },
        glfw::WindowEvent::CursorPos(x, y) => WindowEvent::CursorMoved { x, y },
        glfw::WindowEvent::MouseButton(button, action, _) => WindowEvent::MouseButton {
            button: convert_mouse_button(button),
            action: convert_action(action),
        },
        glfw::WindowEvent::FileDrop(paths) => WindowEvent::FileDrop(paths),
        glfw::WindowEvent::Size(width, height) => WindowEvent::Resized(Size::new(to_u32(width), to_u32(height))),
        glfw::WindowEvent::FramebufferSize(width, height) => {
            WindowEvent::FramebufferResized(Size::new(to_u32(width), to_u32(height)))
        }
        glfw::WindowEvent::Iconify(iconified) => WindowEvent::Iconified(iconified),
        glfw::WindowEvent::Pos(x, y) => WindowEvent::Moved(Position::new(x, y)),
        glfw::WindowEvent::Focus(focused) => WindowEvent::Focused(focused),
        glfw::WindowEvent::Close => WindowEvent::CloseRequested,
        _ => return None,
    };
    Some(event)
}

impl WindowBackend for GlfwBackend {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn poll_events(&mut self) -> Vec<(f64, WindowEvent)> {
        self.glfw.poll_events();
        glfw::flush_messages(&self.events)
            .filter_map(|(time, event)| convert_event(event).map(|event| (time, event)))
            .collect()
    }

    fn time(&self) -> f64 {
        self.glfw.get_time()
    }

    fn size(&self) -> Size {
        let (width, height) = self.window.get_size();
        Size::new(to_u32(width), to_u32(height))
    }

    fn set_size(&mut self, size: Size) {
        self.window.set_size(to_i32(size.width), to_i32(size.height));
    }

    fn position(&self) -> Position {
        self.window.get_pos().into()
    }

    fn set_position(&mut self, position: Position) {
        self.window.set_pos(position.x, position.y);
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn iconify(&mut self) {
        self.window.iconify();
    }

    fn restore(&mut self) {
        self.window.restore();
    }

    fn is_iconified(&self) -> bool {
        self.window.is_iconified()
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        let mode = match mode {
            CursorMode::Normal => glfw::CursorMode::Normal,
            CursorMode::Hidden => glfw::CursorMode::Hidden,
            CursorMode::Disabled => glfw::CursorMode::Disabled,
        };
        self.window.set_cursor_mode(mode);
    }

    fn request_attention(&mut self) {
        self.window.request_attention();
    }

    fn primary_display_size(&mut self) -> Option<Size> {
        self.glfw.with_primary_monitor(|_, monitor| {
            monitor
                .and_then(|monitor| monitor.get_video_mode())
                .map(|mode| Size::new(mode.width, mode.height))
        })
    }

    fn set_size_limits(&mut self, limits: &SizeLimits) {
        self.window.set_size_limits(
            Some(limits.min.width),
            Some(limits.min.height),
            limits.max.map(|max| max.width),
            limits.max.map(|max| max.height),
        );
    }

    fn set_aspect_ratio(&mut self, ratio: AspectRatio) {
        self.window.set_aspect_ratio(ratio.numerator, ratio.denominator);
    }

    #[allow(unsafe_code)]
    fn set_viewport(&mut self, size: Size) {
        // SAFETY: GL was loaded for this window's context in `new` and the
        // context is current on this thread.
        unsafe {
            gl::Viewport(0, 0, to_i32(size.width), to_i32(size.height));
        }
    }

    #[allow(unsafe_code)]
    fn begin_frame(&mut self, clear_color: [f32; 4]) {
        let [r, g, b, a] = clear_color;
        // SAFETY: see `set_viewport`.
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    fn present(&mut self) {
        self.window.swap_buffers();
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_convert_letter_and_named_keys() {
        assert_eq!(convert_key(glfw::Key::R), Key::Char('R'));
        assert_eq!(convert_key(glfw::Key::A), Key::Char('A'));
        assert_eq!(convert_key(glfw::Key::Escape), Key::Escape);
        assert_eq!(convert_key(glfw::Key::F1), Key::Other(glfw::Key::F1 as i32));
    }

    #[test]
    fn test_convert_events() {
        assert_eq!(
            convert_event(glfw::WindowEvent::Size(1280, 720)),
            Some(WindowEvent::Resized(Size::new(1280, 720)))
        );
        assert_eq!(
            convert_event(glfw::WindowEvent::MouseButton(
                glfw::MouseButton::Button1,
                glfw::Action::Press,
                glfw::Modifiers::empty()
            )),
            Some(WindowEvent::MouseButton {
                button: MouseButton::Left,
                action: Action::Press
            })
        );
        assert_eq!(
            convert_event(glfw::WindowEvent::FileDrop(vec![PathBuf::from("a.txt")])),
            Some(WindowEvent::FileDrop(vec![PathBuf::from("a.txt")]))
        );
        assert_eq!(convert_event(glfw::WindowEvent::Refresh), None);
    }

    #[test]
    fn test_negative_sizes_clamp_to_zero() {
        assert_eq!(to_u32(-5), 0);
        assert_eq!(to_i32(u32::MAX), i32::MAX);
    }
}
