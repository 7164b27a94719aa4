//! Default event reactions
//!
//! | Key (press) | Reaction                         |
//! |-------------|----------------------------------|
//! | Escape      | request close                    |
//! | R           | resize to the configured target  |
//! | C           | center on the primary display    |
//! | I           | toggle iconify                   |
//! | A           | request attention                |
//! | N / H / D   | cursor normal / hidden / disabled|

use crate::config::InputConfig;
use crate::events::{Action, EventHandler, Key, MouseButton};
use crate::geometry::Size;
use crate::session::{CursorMode, WindowSession};
use std::path::PathBuf;

/// What a bound key does to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Stop the main loop
    Close,
    /// Resize to the configured target
    Resize,
    /// Center on the primary display
    Center,
    /// Iconify or restore
    ToggleIconify,
    /// Request user attention
    RequestAttention,
    /// Switch cursor mode
    SetCursorMode(CursorMode),
}

/// Command bound to `key`, if any
pub const fn command_for(key: Key) -> Option<KeyCommand> {
    let command = match key {
        Key::Escape => KeyCommand::Close,
        Key::Char('R') => KeyCommand::Resize,
        Key::Char('C') => KeyCommand::Center,
        Key::Char('I') => KeyCommand::ToggleIconify,
        Key::Char('A') => KeyCommand::RequestAttention,
        Key::Char('N') => KeyCommand::SetCursorMode(CursorMode::Normal),
        Key::Char('H') => KeyCommand::SetCursorMode(CursorMode::Hidden),
        Key::Char('D') => KeyCommand::SetCursorMode(CursorMode::Disabled),
        _ => return None,
    };
    Some(command)
}

/// Whether a cursor sample lands on the logging grid
///
/// Coordinates are truncated toward zero before the check.
pub fn is_cursor_sample(x: f64, y: f64, step: u32) -> bool {
    if step == 0 {
        return false;
    }
    let step = i64::from(step);
    (x as i64) % step == 0 || (y as i64) % step == 0
}

/// Event handler implementing the demo key bindings and input bookkeeping
#[derive(Debug, Clone)]
pub struct SessionController {
    resize_target: Size,
    cursor_log_step: u32,
    log_cursor: bool,
    cursor_samples: u64,
    last_command: Option<KeyCommand>,
    commands_executed: u64,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

impl SessionController {
    /// Create a controller from input settings
    pub const fn new(input: InputConfig) -> Self {
        Self {
            resize_target: input.resize_target,
            cursor_log_step: input.cursor_log_step,
            log_cursor: input.log_cursor,
            cursor_samples: 0,
            last_command: None,
            commands_executed: 0,
        }
    }

    /// Run a command against the session
    pub fn execute(&mut self, session: &mut WindowSession, command: KeyCommand) {
        match command {
            KeyCommand::Close => session.request_close(),
            KeyCommand::Resize => {
                session.resize(self.resize_target.width, self.resize_target.height);
            }
            KeyCommand::Center => {
                session.center_on_primary_display();
            }
            KeyCommand::ToggleIconify => {
                let state = session.toggle_iconify();
                log::debug!("Iconify toggled, now {:?}", state);
            }
            KeyCommand::RequestAttention => session.request_attention(),
            KeyCommand::SetCursorMode(mode) => session.set_cursor_mode(mode),
        }
        self.last_command = Some(command);
        self.commands_executed += 1;
    }

    /// Most recently executed command
    pub const fn last_command(&self) -> Option<KeyCommand> {
        self.last_command
    }

    /// Number of commands executed so far
    pub const fn commands_executed(&self) -> u64 {
        self.commands_executed
    }

    /// Cursor samples that landed on the logging grid
    pub const fn cursor_samples(&self) -> u64 {
        self.cursor_samples
    }
}

impl EventHandler for SessionController {
    fn on_key(&mut self, session: &mut WindowSession, key: Key, action: Action) {
        if action != Action::Press {
            return;
        }
        if let Some(command) = command_for(key) {
            self.execute(session, command);
        }
    }

    fn on_cursor_moved(&mut self, _session: &mut WindowSession, x: f64, y: f64) {
        if self.log_cursor && is_cursor_sample(x, y, self.cursor_log_step) {
            self.cursor_samples += 1;
            log::debug!("Cursor at ({:.1}, {:.1})", x, y);
        }
    }

    fn on_mouse_button(&mut self, session: &mut WindowSession, button: MouseButton, action: Action) {
        if action == Action::Press {
            let (x, y) = session.snapshot_click();
            log::debug!("{:?} button pressed at ({:.1}, {:.1})", button, x, y);
        }
    }

    fn on_file_drop(&mut self, session: &mut WindowSession, paths: &[PathBuf]) {
        for path in paths {
            log::info!("Dropped: {}", path.display());
        }
        session.record_dropped_paths(paths);
    }

    fn on_resized(&mut self, _session: &mut WindowSession, size: Size) {
        log::info!("New window size is: {} x {}", size.width, size.height);
    }

    fn on_iconified(&mut self, _session: &mut WindowSession, iconified: bool) {
        log::debug!("Window {}", if iconified { "iconified" } else { "restored" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HeadlessBackend;
    use crate::config::SessionConfig;
    use crate::events::{dispatch, WindowEvent};
    use crate::geometry::Position;
    use crate::session::IconifyState;

    fn session() -> WindowSession {
        let config = SessionConfig::default();
        let backend = HeadlessBackend::new(config.initial_size()).with_display(Size::new(1920, 1080));
        WindowSession::new(config, Box::new(backend)).unwrap()
    }

    fn press(key: Key) -> WindowEvent {
        WindowEvent::Key { key, action: Action::Press }
    }

    #[test]
    fn test_bindings() {
        assert_eq!(command_for(Key::Escape), Some(KeyCommand::Close));
        assert_eq!(command_for(Key::Char('R')), Some(KeyCommand::Resize));
        assert_eq!(command_for(Key::Char('H')), Some(KeyCommand::SetCursorMode(CursorMode::Hidden)));
        assert_eq!(command_for(Key::Space), None);
        assert_eq!(command_for(Key::Char('Z')), None);
    }

    #[test]
    fn test_escape_requests_close() {
        let mut session = session();
        let mut controller = SessionController::default();

        dispatch(&mut controller, &mut session, &press(Key::Escape));

        assert!(session.should_close());
        assert_eq!(controller.last_command(), Some(KeyCommand::Close));
        assert_eq!(controller.commands_executed(), 1);
    }

    #[test]
    fn test_resize_key_applies_target() {
        let mut session = session();
        let mut controller = SessionController::default();

        dispatch(&mut controller, &mut session, &press(Key::Char('R')));

        assert_eq!(session.size(), Size::new(1280, 720));
    }

    #[test]
    fn test_release_and_repeat_are_ignored() {
        let mut session = session();
        let mut controller = SessionController::default();

        dispatch(&mut controller, &mut session, &WindowEvent::Key { key: Key::Escape, action: Action::Release });
        dispatch(&mut controller, &mut session, &WindowEvent::Key { key: Key::Escape, action: Action::Repeat });

        assert!(!session.should_close());
        assert_eq!(controller.last_command(), None);
        assert_eq!(controller.commands_executed(), 0);
    }

    #[test]
    fn test_center_and_iconify_keys() {
        let mut session = session();
        let mut controller = SessionController::default();

        dispatch(&mut controller, &mut session, &press(Key::Char('C')));
        assert_eq!(session.position(), Position::new(640, 300));

        dispatch(&mut controller, &mut session, &press(Key::Char('I')));
        assert_eq!(session.iconify_state(), IconifyState::Iconified);
        dispatch(&mut controller, &mut session, &press(Key::Char('I')));
        assert_eq!(session.iconify_state(), IconifyState::Normal);
    }

    #[test]
    fn test_held_key_over_long_session_only_counts() {
        let mut session = session();
        let mut controller = SessionController::default();

        for _ in 0..10_000 {
            controller.execute(&mut session, KeyCommand::RequestAttention);
        }
        controller.execute(&mut session, KeyCommand::Center);

        assert_eq!(controller.commands_executed(), 10_001);
        assert_eq!(controller.last_command(), Some(KeyCommand::Center));
    }

    #[test]
    fn test_attention_and_cursor_keys() {
        let mut session = session();
        let mut controller = SessionController::default();

        dispatch(&mut controller, &mut session, &press(Key::Char('A')));
        dispatch(&mut controller, &mut session, &press(Key::Char('D')));

        assert_eq!(session.backend_as::<HeadlessBackend>().unwrap().attention_requests(), 1);
        assert_eq!(session.cursor_mode(), CursorMode::Disabled);
    }

    #[test]
    fn test_cursor_samples_on_grid() {
        assert!(is_cursor_sample(10.0, 3.0, 10));
        assert!(is_cursor_sample(7.0, 40.9, 10));
        assert!(is_cursor_sample(0.5, 0.5, 10));
        assert!(!is_cursor_sample(11.0, 19.0, 10));
        assert!(!is_cursor_sample(10.0, 10.0, 0));

        let mut session = session();
        let mut controller = SessionController::default();
        for (x, y) in [(10.0, 1.0), (11.0, 12.0), (13.0, 20.0)] {
            dispatch(&mut controller, &mut session, &WindowEvent::CursorMoved { x, y });
        }
        assert_eq!(controller.cursor_samples(), 2);
    }

    #[test]
    fn test_mouse_press_snapshots_cursor() {
        let mut session = session();
        let mut controller = SessionController::default();

        dispatch(&mut controller, &mut session, &WindowEvent::CursorMoved { x: 42.0, y: 24.0 });
        dispatch(
            &mut controller,
            &mut session,
            &WindowEvent::MouseButton { button: MouseButton::Left, action: Action::Release },
        );
        assert_eq!(session.last_click(), None);

        dispatch(
            &mut controller,
            &mut session,
            &WindowEvent::MouseButton { button: MouseButton::Left, action: Action::Press },
        );
        assert_eq!(session.last_click(), Some((42.0, 24.0)));
    }

    #[test]
    fn test_file_drop_replaces_recorded_paths() {
        let mut session = session();
        let mut controller = SessionController::default();

        dispatch(&mut controller, &mut session, &WindowEvent::FileDrop(vec![PathBuf::from("a.png")]));
        dispatch(
            &mut controller,
            &mut session,
            &WindowEvent::FileDrop(vec![PathBuf::from("b.obj"), PathBuf::from("c.mtl")]),
        );

        assert_eq!(session.dropped_paths(), &[PathBuf::from("b.obj"), PathBuf::from("c.mtl")]);
    }
}
