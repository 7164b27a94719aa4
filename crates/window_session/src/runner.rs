//! Main loop
//!
//! One thread, one session: tick the clock, refresh the title, clear and
//! present, then poll and dispatch whatever the backend queued. The close
//! flag is checked once per iteration.

use crate::events::{dispatch, EventHandler};
use crate::session::WindowSession;
use crate::timing::FrameClock;

/// What a finished loop did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Frames rendered
    pub frames: u64,
    /// Events dispatched
    pub events: u64,
    /// Average fps over the run
    pub average_fps: f64,
}

/// Run until the session asks to close
pub fn run_session<H>(session: &mut WindowSession, handler: &mut H) -> RunSummary
where
    H: EventHandler + ?Sized,
{
    run_loop(session, handler, None)
}

/// Run at most `max_frames` frames, stopping early if the session closes
pub fn run_frames<H>(session: &mut WindowSession, handler: &mut H, max_frames: u64) -> RunSummary
where
    H: EventHandler + ?Sized,
{
    run_loop(session, handler, Some(max_frames))
}

fn run_loop<H>(session: &mut WindowSession, handler: &mut H, max_frames: Option<u64>) -> RunSummary
where
    H: EventHandler + ?Sized,
{
    log::info!("Starting main loop...");

    let mut clock = FrameClock::new(session.time());
    let mut events = 0;

    while !session.should_close() && max_frames.map_or(true, |max| clock.frame_count() < max) {
        let tick = clock.tick(session.time());
        session.on_frame_tick(tick.delta_time, tick.frame_index);

        session.render_frame();

        for (_, event) in session.poll_events() {
            dispatch(handler, session, &event);
            events += 1;
        }
    }

    let summary = RunSummary {
        frames: clock.frame_count(),
        events,
        average_fps: clock.average_fps(),
    };
    log::info!(
        "Main loop finished after {} frames ({:.1} fps average)",
        summary.frames,
        summary.average_fps
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HeadlessBackend;
    use crate::config::SessionConfig;
    use crate::controller::SessionController;
    use crate::events::{Action, Key, NoopHandler, WindowEvent};
    use approx::assert_relative_eq;

    fn session(step: f64) -> WindowSession {
        let config = SessionConfig::default();
        let backend = HeadlessBackend::new(config.initial_size()).with_frame_step(step);
        WindowSession::new(config, Box::new(backend)).unwrap()
    }

    #[test]
    fn test_run_frames_stops_at_limit() {
        let mut session = session(0.1);
        let summary = run_frames(&mut session, &mut NoopHandler, 7);

        assert_eq!(summary.frames, 7);
        assert_eq!(session.backend_as::<HeadlessBackend>().unwrap().frames_presented(), 7);
        // Frame 5 measured one 0.1 s step
        assert_relative_eq!(session.last_fps().unwrap(), 10.0, epsilon = 1e-6);
        assert_eq!(session.title(), "Hello, GLFW! 10.000000");
    }

    #[test]
    fn test_escape_ends_run() {
        let mut session = session(0.1);
        session
            .backend_as_mut::<HeadlessBackend>()
            .unwrap()
            .push_event(WindowEvent::Key { key: Key::Escape, action: Action::Press });

        let mut controller = SessionController::default();
        let summary = run_session(&mut session, &mut controller);

        assert_eq!(summary.frames, 1);
        assert_eq!(summary.events, 1);
        assert!(session.should_close());
    }

    #[test]
    fn test_closed_session_renders_nothing() {
        let mut session = session(0.1);
        session.request_close();

        let summary = run_session(&mut session, &mut NoopHandler);
        assert_eq!(summary.frames, 0);
    }
}
