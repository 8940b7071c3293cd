use std::time::{Duration, Instant};

use crate::log;

/// Frame clock
///
/// Deltas come from a monotonic clock, so they are never negative. A fixed
/// clock advances by the same step every frame.
pub struct Frame {
    first: Option<Instant>,
    current: Option<Instant>,
    counter_start: Option<Instant>,
    counter: u32,
    fps: Option<u32>,
    delta: Duration,
    time: Duration,
    fixed: Option<Duration>,
    log_fps: bool,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            first: None,
            current: None,
            counter_start: None,
            counter: 0,
            fps: None,
            delta: Duration::from_secs(0),
            time: Duration::from_secs(0),
            fixed: None,
            log_fps: false,
        }
    }

    /// Constructs a clock that advances by `delta` on every frame
    pub fn fixed(delta: Duration) -> Self {
        Self {
            fixed: Some(delta),
            ..Self::new()
        }
    }

    /// Enables FPS reporting once per second
    pub fn log_fps(mut self, value: bool) -> Self {
        self.log_fps = value;
        self
    }

    pub fn next(&mut self) {
        let now = Instant::now();

        if let Some(step) = self.fixed {
            if self.current.is_some() {
                self.delta = step;
                self.time += step;
            }
        } else {
            let first = *self.first.get_or_insert(now);
            self.time = now.saturating_duration_since(first);
            if let Some(current) = self.current {
                self.delta = now.saturating_duration_since(current);
            }
        }
        self.current = Some(now);

        let second = Duration::from_secs(1);
        match self.counter_start {
            Some(counter_start) if now.saturating_duration_since(counter_start) > second => {
                let fps = self.counter;
                self.fps = Some(fps);
                self.counter = 0;
                self.counter_start = Some(now);
                if self.log_fps {
                    log::info!("FPS: {}", fps);
                }
            }
            Some(_) => {}
            None => self.counter_start = Some(now),
        }

        self.counter += 1;
    }

    /// Time since the first frame
    pub fn time(&self) -> Duration {
        self.time
    }

    pub fn fps(&self) -> u32 {
        self.fps.unwrap_or(self.counter)
    }

    /// Time between the two last frames
    pub fn delta(&self) -> Duration {
        self.delta
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
