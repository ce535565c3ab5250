//! Frame timing: elapsed-time bookkeeping and frame pacing

use std::time::{Duration, Instant};

/// Wall-clock bookkeeping for the frame loop
///
/// Game logic advances by whole frames; the timer only feeds logs and
/// [`FrameTick::delta_seconds`](crate::FrameTick).
#[derive(Debug, Clone)]
pub struct Timer {
    started: Instant,
    last_tick: Instant,
    delta: Duration,
    ticks: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Start timing now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_tick: now,
            delta: Duration::ZERO,
            ticks: 0,
        }
    }

    /// Mark the start of a frame
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_tick;
        self.last_tick = now;
        self.ticks += 1;
    }

    /// Seconds between the last two ticks
    pub fn delta_time(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Seconds from creation to the last tick
    pub fn total_time(&self) -> f32 {
        (self.last_tick - self.started).as_secs_f32()
    }

    /// Ticks so far
    pub fn frame_count(&self) -> u64 {
        self.ticks
    }

    /// Mean frame rate over the timer's life; 0 before any time has passed
    pub fn average_fps(&self) -> f32 {
        let total = self.total_time();
        if total > 0.0 { self.ticks as f32 / total } else { 0.0 }
    }
}

/// Sleeps out the remainder of each frame to hold a target frame rate
///
/// Stands in for the display's vertical-sync callback: one frame is scheduled
/// only after the previous one has finished and its time slot has elapsed.
#[derive(Debug)]
pub struct FramePacer {
    frame_budget: Option<Duration>,
    frame_start: Instant,
}

impl FramePacer {
    /// Create a pacer for `target_fps`; `0` disables pacing
    pub fn new(target_fps: u32) -> Self {
        let frame_budget = (target_fps > 0).then(|| Duration::from_nanos(1_000_000_000 / u64::from(target_fps)));
        Self {
            frame_budget,
            frame_start: Instant::now(),
        }
    }

    /// Duration of one frame slot, if pacing is enabled
    pub fn frame_budget(&self) -> Option<Duration> {
        self.frame_budget
    }

    /// Block until the current frame slot is over, then open the next one
    pub fn wait_for_next_frame(&mut self) {
        if let Some(budget) = self.frame_budget {
            let elapsed = self.frame_start.elapsed();
            if elapsed < budget {
                std::thread::sleep(budget - elapsed);
            }
        }
        self.frame_start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_counts_frames() {
        let mut timer = Timer::new();
        timer.update();
        timer.update();
        assert_eq!(timer.frame_count(), 2);
        assert!(timer.total_time() >= timer.delta_time());
    }

    #[test]
    fn test_pacer_disabled_at_zero_fps() {
        let pacer = FramePacer::new(0);
        assert!(pacer.frame_budget().is_none());
    }

    #[test]
    fn test_pacer_budget_matches_fps() {
        let pacer = FramePacer::new(50);
        assert_eq!(pacer.frame_budget(), Some(Duration::from_millis(20)));
    }
}
