// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release velocity estimation from recent pointer samples.

/// Samples older than this (relative to the newest one) are ignored.
pub const VELOCITY_WINDOW_MS: u64 = 100;

const CAPACITY: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Sample {
    time_ms: u64,
    value: f64,
}

/// Ring buffer of the last few `(time, position)` samples along one axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct VelocityTracker {
    samples: [Sample; CAPACITY],
    len: usize,
    head: usize,
}

impl VelocityTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets all samples.
    pub fn reset(&mut self) {
        self.len = 0;
        self.head = 0;
    }

    /// Returns the number of retained samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no samples are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Records a position at a timestamp.
    ///
    /// Timestamps are expected to be non-decreasing; an older timestamp than
    /// the newest sample is treated as equal to it.
    pub fn push(&mut self, time_ms: u64, value: f64) {
        let time_ms = match self.newest() {
            Some(newest) => time_ms.max(newest.time_ms),
            None => time_ms,
        };
        self.samples[self.head] = Sample { time_ms, value };
        self.head = (self.head + 1) % CAPACITY;
        self.len = (self.len + 1).min(CAPACITY);
    }

    /// Estimates velocity in units per second as of `now_ms`.
    ///
    /// Uses the displacement between the newest sample and the oldest sample
    /// still inside [`VELOCITY_WINDOW_MS`]. Returns zero when there is no
    /// elapsed time to measure over, or when the newest sample is already
    /// older than the window (the pointer was held still before release).
    #[must_use]
    pub fn velocity(&self, now_ms: u64) -> f64 {
        let Some(newest) = self.newest() else {
            return 0.0;
        };
        if now_ms.saturating_sub(newest.time_ms) > VELOCITY_WINDOW_MS {
            return 0.0;
        }

        let oldest = self
            .iter_newest_first()
            .take_while(|s| newest.time_ms - s.time_ms <= VELOCITY_WINDOW_MS)
            .last()
            .unwrap_or(newest);

        let dt_ms = newest.time_ms - oldest.time_ms;
        if dt_ms == 0 {
            return 0.0;
        }
        let dt = dt_ms as f64 / 1000.0;
        (newest.value - oldest.value) / dt
    }

    fn newest(&self) -> Option<Sample> {
        if self.len == 0 {
            None
        } else {
            Some(self.samples[(self.head + CAPACITY - 1) % CAPACITY])
        }
    }

    fn iter_newest_first(&self) -> impl Iterator<Item = Sample> + '_ {
        (1..=self.len).map(move |back| self.samples[(self.head + CAPACITY - back) % CAPACITY])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_has_zero_velocity() {
        let tracker = VelocityTracker::new();
        assert!(tracker.is_empty());
        assert_eq!(tracker.velocity(0), 0.0);
    }

    #[test]
    fn single_sample_has_zero_velocity() {
        let mut tracker = VelocityTracker::new();
        tracker.push(10, 5.0);
        assert_eq!(tracker.velocity(10), 0.0);
    }

    #[test]
    fn constant_motion_is_measured_in_units_per_second() {
        let mut tracker = VelocityTracker::new();
        for i in 0..5_u32 {
            tracker.push(u64::from(i) * 10, f64::from(i) * -8.0);
        }
        // -8 units per 10 ms.
        assert!((tracker.velocity(40) + 800.0).abs() < 1e-9);
    }

    #[test]
    fn samples_outside_window_are_ignored() {
        let mut tracker = VelocityTracker::new();
        tracker.push(0, 0.0);
        // A slow start long before the flick.
        tracker.push(300, 10.0);
        tracker.push(350, 60.0);
        // Only the last 50 ms count: 50 units / 0.05 s.
        assert!((tracker.velocity(350) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn holding_still_before_release_kills_velocity() {
        let mut tracker = VelocityTracker::new();
        tracker.push(0, 0.0);
        tracker.push(16, 40.0);
        assert!(tracker.velocity(16) > 0.0);
        assert_eq!(tracker.velocity(16 + VELOCITY_WINDOW_MS + 1), 0.0);
    }

    #[test]
    fn ring_keeps_most_recent_samples() {
        let mut tracker = VelocityTracker::new();
        for i in 0..20_u32 {
            tracker.push(u64::from(i) * 5, f64::from(i));
        }
        assert_eq!(tracker.len(), CAPACITY);
        // 1 unit per 5 ms regardless of wraparound.
        assert!((tracker.velocity(95) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_order_timestamps_are_clamped() {
        let mut tracker = VelocityTracker::new();
        tracker.push(50, 0.0);
        tracker.push(40, 10.0);
        assert_eq!(tracker.velocity(50), 0.0);
    }

    #[test]
    fn reset_forgets_samples() {
        let mut tracker = VelocityTracker::new();
        tracker.push(0, 0.0);
        tracker.push(10, 10.0);
        tracker.reset();
        assert!(tracker.is_empty());
        assert_eq!(tracker.velocity(10), 0.0);
    }
}
