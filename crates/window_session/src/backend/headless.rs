//! In-memory window backend
//!
//! Behaves like a well-mannered desktop window without touching the OS:
//! mutators update the stored state and queue the same notifications a real
//! window system would send back (a resize queues `Resized` and
//! `FramebufferResized`, iconify queues `Iconified`, and so on). The clock
//! only moves when told to, either explicitly or by a fixed step per
//! presented frame, which keeps frame timing deterministic.

use super::WindowBackend;
use crate::events::WindowEvent;
use crate::geometry::{AspectRatio, Position, Size, SizeLimits};
use crate::session::CursorMode;
use std::collections::VecDeque;

/// Window backend that keeps all state in memory
#[derive(Debug, Clone)]
pub struct HeadlessBackend {
    size: Size,
    position: Position,
    title: String,
    iconified: bool,
    should_close: bool,
    cursor_mode: CursorMode,
    display: Option<Size>,
    size_limits: Option<SizeLimits>,
    aspect_ratio: Option<AspectRatio>,
    viewport: Option<Size>,
    clear_color: Option<[f32; 4]>,
    time: f64,
    frame_step: f64,
    pending: VecDeque<(f64, WindowEvent)>,
    frames_presented: u64,
    attention_requests: u32,
    iconify_calls: u32,
    restore_calls: u32,
    cursor_mode_calls: u32,
    set_position_calls: u32,
}

impl HeadlessBackend {
    /// Create a window of the given size at the origin, with no display
    pub fn new(size: Size) -> Self {
        Self {
            size,
            position: Position::default(),
            title: String::new(),
            iconified: false,
            should_close: false,
            cursor_mode: CursorMode::Normal,
            display: None,
            size_limits: None,
            aspect_ratio: None,
            viewport: None,
            clear_color: None,
            time: 0.0,
            frame_step: 0.0,
            pending: VecDeque::new(),
            frames_presented: 0,
            attention_requests: 0,
            iconify_calls: 0,
            restore_calls: 0,
            cursor_mode_calls: 0,
            set_position_calls: 0,
        }
    }

    /// Report a primary display of the given resolution
    #[must_use]
    pub fn with_display(mut self, display: Size) -> Self {
        self.display = Some(display);
        self
    }

    /// Start at the given position
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Advance the clock by `step` seconds on every `present`
    #[must_use]
    pub fn with_frame_step(mut self, step: f64) -> Self {
        self.frame_step = step;
        self
    }

    /// Queue an event as if the user had caused it
    pub fn push_event(&mut self, event: WindowEvent) {
        self.pending.push_back((self.time, event));
    }

    /// Move the clock forward
    pub fn advance_time(&mut self, seconds: f64) {
        self.time += seconds;
    }

    /// Move the window as a user drag would, queueing `Moved`
    pub fn simulate_user_move(&mut self, position: Position) {
        self.position = position;
        self.push_event(WindowEvent::Moved(position));
    }

    /// Current title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current cursor mode
    pub const fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    /// Limits last pushed by the session
    pub const fn size_limits(&self) -> Option<SizeLimits> {
        self.size_limits
    }

    /// Aspect ratio last pushed by the session
    pub const fn aspect_ratio(&self) -> Option<AspectRatio> {
        self.aspect_ratio
    }

    /// Viewport last set
    pub const fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    /// Color of the last clear
    pub const fn clear_color(&self) -> Option<[f32; 4]> {
        self.clear_color
    }

    /// Number of presented frames
    pub const fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Number of attention requests
    pub const fn attention_requests(&self) -> u32 {
        self.attention_requests
    }

    /// Number of iconify calls
    pub const fn iconify_calls(&self) -> u32 {
        self.iconify_calls
    }

    /// Number of restore calls
    pub const fn restore_calls(&self) -> u32 {
        self.restore_calls
    }

    /// Number of cursor mode changes
    pub const fn cursor_mode_calls(&self) -> u32 {
        self.cursor_mode_calls
    }

    /// Number of explicit moves
    pub const fn set_position_calls(&self) -> u32 {
        self.set_position_calls
    }

    /// Events queued and not yet polled
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }
}

impl WindowBackend for HeadlessBackend {
    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.should_close = should_close;
    }

    fn poll_events(&mut self) -> Vec<(f64, WindowEvent)> {
        self.pending.drain(..).collect()
    }

    fn time(&self) -> f64 {
        self.time
    }

    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        if size != self.size {
            self.size = size;
            self.push_event(WindowEvent::Resized(size));
            self.push_event(WindowEvent::FramebufferResized(size));
        }
    }

    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.set_position_calls += 1;
        if position != self.position {
            self.position = position;
            self.push_event(WindowEvent::Moved(position));
        }
    }

    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    fn iconify(&mut self) {
        self.iconify_calls += 1;
        if !self.iconified {
            self.iconified = true;
            self.push_event(WindowEvent::Iconified(true));
        }
    }

    fn restore(&mut self) {
        self.restore_calls += 1;
        if self.iconified {
            self.iconified = false;
            self.push_event(WindowEvent::Iconified(false));
        }
    }

    fn is_iconified(&self) -> bool {
        self.iconified
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.cursor_mode_calls += 1;
        self.cursor_mode = mode;
    }

    fn request_attention(&mut self) {
        self.attention_requests += 1;
    }

    fn primary_display_size(&mut self) -> Option<Size> {
        self.display
    }

    fn set_size_limits(&mut self, limits: &SizeLimits) {
        self.size_limits = Some(*limits);
    }

    fn set_aspect_ratio(&mut self, ratio: AspectRatio) {
        self.aspect_ratio = Some(ratio);
    }

    fn set_viewport(&mut self, size: Size) {
        self.viewport = Some(size);
    }

    fn begin_frame(&mut self, clear_color: [f32; 4]) {
        self.clear_color = Some(clear_color);
    }

    fn present(&mut self) {
        self.frames_presented += 1;
        self.time += self.frame_step;
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

    #[test]
    fn test_set_size_queues_resize_notifications() {
        let mut backend = HeadlessBackend::new(Size::new(640, 480));
        backend.set_size(Size::new(1280, 720));
        backend.set_size(Size::new(1280, 720));

        let events: Vec<_> = backend.poll_events().into_iter().map(|(_, event)| event).collect();
        assert_eq!(
            events,
            vec![
                WindowEvent::Resized(Size::new(1280, 720)),
                WindowEvent::FramebufferResized(Size::new(1280, 720)),
            ]
        );
        assert_eq!(backend.pending_events(), 0);
    }

    #[test]
    fn test_present_advances_clock_by_frame_step() {
        let mut backend = HeadlessBackend::new(Size::new(640, 480)).with_frame_step(0.25);
        backend.present();
        backend.present();

        assert_eq!(backend.frames_presented(), 2);
        assert!((backend.time() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_events_are_stamped_with_current_time() {
        let mut backend = HeadlessBackend::new(Size::new(640, 480));
        backend.advance_time(2.0);
        backend.push_event(WindowEvent::CloseRequested);

        let events = backend.poll_events();
        assert_eq!(events.len(), 1);
        assert!((events[0].0 - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_is_optional() {
        let mut without = HeadlessBackend::new(Size::new(640, 480));
        let mut with = HeadlessBackend::new(Size::new(640, 480)).with_display(Size::new(1920, 1080));

        assert_eq!(without.primary_display_size(), None);
        assert_eq!(with.primary_display_size(), Some(Size::new(1920, 1080)));
    }
}
