//! Rolling frame-rate sampling for the workstation HUD.
//!
//! The monitor never reads a clock. Callers pass the frame timestamp they already have (a
//! `requestAnimationFrame` time, an `Instant` converted to milliseconds, a test value).

use std::collections::VecDeque;

/// Samples kept for the rolling average: about one second at 60 fps.
pub const FRAME_SAMPLE_SIZE: usize = 60;

#[derive(Debug, Clone)]
pub struct FrameRateMonitor {
    samples: VecDeque<f64>,
    capacity: usize,
    last_ms: f64,
}

impl FrameRateMonitor {
    pub fn new(now_ms: f64) -> Self {
        Self::with_capacity(now_ms, FRAME_SAMPLE_SIZE)
    }

    /// A capacity of zero is treated as one.
    pub fn with_capacity(now_ms: f64, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
            last_ms: now_ms,
        }
    }

    /// Records a frame at `now_ms` and returns its instantaneous fps.
    ///
    /// Returns `None` and records nothing when time did not move forward.
    pub fn record_frame(&mut self, now_ms: f64) -> Option<f64> {
        let delta = now_ms - self.last_ms;
        self.last_ms = now_ms;
        if delta.is_nan() || delta <= 0.0 {
            return None;
        }

        let fps = 1000.0 / delta;
        self.samples.push_back(fps);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
        Some(fps)
    }

    /// Mean of the retained samples, or `0` before the first frame.
    pub fn average_fps(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn reset(&mut self, now_ms: f64) {
        self.samples.clear();
        self.last_ms = now_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_instantaneous_and_average_fps() {
        let mut m = FrameRateMonitor::new(0.0);
        assert_eq!(m.average_fps(), 0.0);
        assert_eq!(m.record_frame(10.0), Some(100.0));
        assert_eq!(m.record_frame(30.0), Some(50.0));
        assert_eq!(m.average_fps(), 75.0);
        assert_eq!(m.sample_count(), 2);
    }

    #[test]
    fn keeps_only_the_most_recent_samples() {
        let mut m = FrameRateMonitor::with_capacity(0.0, 3);
        let mut t = 0.0;
        for delta in [1000.0, 1000.0, 1000.0, 500.0, 500.0, 500.0] {
            t += delta;
            m.record_frame(t);
        }
        assert_eq!(m.sample_count(), 3);
        assert_eq!(m.average_fps(), 2.0);
    }

    #[test]
    fn default_window_is_sixty_frames() {
        let mut m = FrameRateMonitor::new(0.0);
        for i in 1..=120 {
            m.record_frame(f64::from(i) * 16.0);
        }
        assert_eq!(m.sample_count(), FRAME_SAMPLE_SIZE);
        assert_eq!(m.average_fps(), 62.5);
    }

    #[test]
    fn stalled_clock_records_nothing() {
        let mut m = FrameRateMonitor::new(100.0);
        assert_eq!(m.record_frame(100.0), None);
        assert_eq!(m.record_frame(90.0), None);
        assert_eq!(m.sample_count(), 0);
        assert_eq!(m.record_frame(100.0), Some(100.0));
    }

    #[test]
    fn reset_clears_samples_and_rebases_time() {
        let mut m = FrameRateMonitor::new(0.0);
        m.record_frame(20.0);
        m.reset(1000.0);
        assert_eq!(m.sample_count(), 0);
        assert_eq!(m.average_fps(), 0.0);
        assert_eq!(m.record_frame(1025.0), Some(40.0));
    }
}
