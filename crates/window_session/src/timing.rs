//! Frame timing driven by the backend clock

/// One frame's timing, as seen by the main loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Seconds since the previous tick
    pub delta_time: f64,
    /// Zero-based index of this frame
    pub frame_index: u64,
}

/// Frame clock fed with backend timestamps
///
/// Does not read a clock itself; the loop passes `now` from the backend so
/// headless runs stay deterministic.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: f64,
    current: f64,
    delta_time: f64,
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock whose first tick measures from `start`
    pub const fn new(start: f64) -> Self {
        Self {
            start,
            current: start,
            delta_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance to `now`; the first tick has index 0
    pub fn tick(&mut self, now: f64) -> FrameTick {
        let previous = self.current;
        self.current = now;
        self.delta_time = now - previous;

        let frame_index = self.frame_count;
        self.frame_count += 1;

        FrameTick {
            delta_time: self.delta_time,
            frame_index,
        }
    }

    /// Seconds between the last two ticks
    pub const fn delta_time(&self) -> f64 {
        self.delta_time
    }

    /// Ticks so far
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Seconds from the start to the last tick
    pub fn total_time(&self) -> f64 {
        self.current - self.start
    }

    /// Average fps since the start
    pub fn average_fps(&self) -> f64 {
        let total = self.total_time();
        if total > 0.0 {
            self.frame_count as f64 / total
        } else {
            0.0
        }
    }
}
