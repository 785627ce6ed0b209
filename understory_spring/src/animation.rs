// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::params::SpringParams;

/// Longest integration sub-step, in seconds.
pub const MAX_SUBSTEP: f64 = 1.0 / 240.0;

/// Most simulated time a single [`SpringAnimation::step`] will integrate, in
/// seconds. Longer frames are truncated.
pub const MAX_STEP: f64 = 1.0;

/// Whether a [`SpringAnimation`] is still moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpringStatus {
    /// The value has not yet come to rest.
    Running,
    /// The value sits exactly on the target with zero velocity.
    AtRest,
}

/// A scalar being driven toward a target by a damped spring.
///
/// The task owns its full integration state `(current, target, velocity)` and
/// is advanced explicitly by [`SpringAnimation::step`]. Cancelling it is just
/// dropping it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringAnimation {
    current: f64,
    target: f64,
    velocity: f64,
    params: SpringParams,
}

impl SpringAnimation {
    /// Starts a spring at `from` moving with `velocity` toward `to`.
    #[must_use]
    pub fn new(from: f64, to: f64, velocity: f64, params: SpringParams) -> Self {
        Self {
            current: from,
            target: to,
            velocity,
            params,
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.current
    }

    /// Returns the current velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns the value being animated toward.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Returns the spring tuning.
    #[must_use]
    pub fn params(&self) -> SpringParams {
        self.params
    }

    /// Returns `true` if the value is within the rest thresholds of the target.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        (self.target - self.current).abs() <= self.params.rest_delta
            && self.velocity.abs() <= self.params.rest_speed
    }

    /// Moves the target, keeping the current value and velocity.
    pub fn retarget(&mut self, to: f64) {
        self.target = to;
    }

    /// Jumps straight to the target and stops.
    pub fn finish(&mut self) {
        self.current = self.target;
        self.velocity = 0.0;
    }

    /// Advances the simulation by `dt`.
    ///
    /// A zero `dt` does not move the value but still reports whether it is at
    /// rest. At most [`MAX_STEP`] seconds are simulated per call, and
    /// integration stops as soon as the spring rests. Once at rest, the value
    /// is exactly the target.
    pub fn step(&mut self, dt: Duration) -> SpringStatus {
        if self.settle_if_resting() {
            return SpringStatus::AtRest;
        }

        let mut remaining = dt.as_secs_f64().min(MAX_STEP);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            self.integrate(h);
            remaining -= h;
            if self.settle_if_resting() {
                return SpringStatus::AtRest;
            }
        }

        SpringStatus::Running
    }

    fn integrate(&mut self, h: f64) {
        let SpringParams {
            stiffness,
            damping,
            mass,
            ..
        } = self.params;
        let displacement = self.current - self.target;
        let accel = (-stiffness * displacement - damping * self.velocity) / mass;
        self.velocity += accel * h;
        self.current += self.velocity * h;
    }

    fn settle_if_resting(&mut self) -> bool {
        if self.is_at_rest() {
            self.finish();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run_to_rest(anim: &mut SpringAnimation, max_frames: usize) -> Option<usize> {
        (1..=max_frames).find(|_| anim.step(FRAME) == SpringStatus::AtRest)
    }

    #[test]
    fn settles_exactly_on_target() {
        let mut anim = SpringAnimation::new(0.0, -624.0, 0.0, SpringParams::default());
        let frames = run_to_rest(&mut anim, 300);
        assert!(frames.is_some(), "spring never came to rest");
        assert_eq!(anim.value(), -624.0);
        assert_eq!(anim.velocity(), 0.0);
    }

    #[test]
    fn default_tuning_barely_overshoots() {
        let mut anim = SpringAnimation::new(0.0, 100.0, 0.0, SpringParams::default());
        let mut peak = 0.0_f64;
        for _ in 0..300 {
            let status = anim.step(FRAME);
            peak = peak.max(anim.value());
            if status == SpringStatus::AtRest {
                break;
            }
        }
        // ζ ≈ 0.98 overshoots by well under one percent.
        assert!(peak < 101.0, "peak = {peak}");
    }

    #[test]
    fn moves_toward_target_on_first_frame() {
        let mut anim = SpringAnimation::new(0.0, -100.0, 0.0, SpringParams::default());
        assert_eq!(anim.step(FRAME), SpringStatus::Running);
        assert!(anim.value() < 0.0);
        assert!(anim.velocity() < 0.0);
    }

    #[test]
    fn already_resting_reports_at_rest_without_moving() {
        let mut anim = SpringAnimation::new(-200.0, -200.0, 0.0, SpringParams::default());
        assert_eq!(anim.step(Duration::ZERO), SpringStatus::AtRest);
        assert_eq!(anim.value(), -200.0);
    }

    #[test]
    fn zero_dt_does_not_move() {
        let mut anim = SpringAnimation::new(0.0, 50.0, 10.0, SpringParams::default());
        assert_eq!(anim.step(Duration::ZERO), SpringStatus::Running);
        assert_eq!(anim.value(), 0.0);
        assert_eq!(anim.velocity(), 10.0);
    }

    #[test]
    fn initial_velocity_carries_past_start() {
        // A flick away from the target keeps moving that way briefly.
        let mut anim = SpringAnimation::new(0.0, 0.0, -800.0, SpringParams::default());
        anim.step(FRAME);
        assert!(anim.value() < 0.0);
        assert!(run_to_rest(&mut anim, 300).is_some());
        assert_eq!(anim.value(), 0.0);
    }

    #[test]
    fn long_frame_is_stable() {
        let mut anim = SpringAnimation::new(0.0, -624.0, 0.0, SpringParams::default());
        anim.step(Duration::from_millis(500));
        assert!(anim.value().is_finite());
        assert!(anim.value() < 0.0 && anim.value() > -700.0);
    }

    #[test]
    fn huge_frame_returns_at_rest() {
        let mut anim = SpringAnimation::new(0.0, -624.0, -900.0, SpringParams::default());
        assert_eq!(anim.step(Duration::MAX), SpringStatus::AtRest);
        assert_eq!(anim.value(), -624.0);
        assert_eq!(anim.velocity(), 0.0);
    }

    #[test]
    fn rest_stops_integration_mid_frame() {
        let mut anim = SpringAnimation::new(0.0, -100.0, 0.0, SpringParams::default());
        assert_eq!(anim.step(Duration::from_secs(5)), SpringStatus::AtRest);
        // Further frames keep the exact target.
        assert_eq!(anim.step(Duration::from_secs(5)), SpringStatus::AtRest);
        assert_eq!(anim.value(), -100.0);
    }

    #[test]
    fn retarget_keeps_velocity() {
        let mut anim = SpringAnimation::new(0.0, -100.0, 0.0, SpringParams::default());
        anim.step(FRAME);
        let v = anim.velocity();
        anim.retarget(-300.0);
        assert_eq!(anim.velocity(), v);
        assert_eq!(anim.target(), -300.0);
        assert!(run_to_rest(&mut anim, 300).is_some());
        assert_eq!(anim.value(), -300.0);
    }

    #[test]
    fn finish_jumps_to_target() {
        let mut anim = SpringAnimation::new(0.0, 42.0, 3.0, SpringParams::default());
        anim.finish();
        assert_eq!(anim.value(), 42.0);
        assert_eq!(anim.velocity(), 0.0);
        assert!(anim.is_at_rest());
    }
}
