// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::animation::{SpringAnimation, SpringStatus};
use crate::params::SpringParams;

/// Holds at most one running [`SpringAnimation`].
///
/// Starting a new animation replaces any running one, and cancelling is safe
/// to call whether or not anything is running. A task that reaches rest is
/// removed from the slot by [`AnimationSlot::step`].
#[derive(Clone, Debug, Default)]
pub struct AnimationSlot {
    active: Option<SpringAnimation>,
}

impl AnimationSlot {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Replaces any running animation with a new one.
    pub fn start(&mut self, from: f64, to: f64, velocity: f64, params: SpringParams) {
        self.active = Some(SpringAnimation::new(from, to, velocity, params));
    }

    /// Stops the running animation, returning it if there was one.
    pub fn cancel(&mut self) -> Option<SpringAnimation> {
        self.active.take()
    }

    /// Returns `true` while an animation is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the running animation, if any.
    #[must_use]
    pub fn get(&self) -> Option<&SpringAnimation> {
        self.active.as_ref()
    }

    /// Returns the running animation's velocity, or zero when idle.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.active.map_or(0.0, |a| a.velocity())
    }

    /// Points the running animation at a new target, keeping its velocity.
    ///
    /// Returns `false` if nothing is running.
    pub fn retarget(&mut self, to: f64) -> bool {
        match self.active.as_mut() {
            Some(anim) => {
                anim.retarget(to);
                true
            }
            None => false,
        }
    }

    /// Advances the running animation.
    ///
    /// Returns the new value and status, or `None` if nothing is running. When
    /// the status is [`SpringStatus::AtRest`] the slot is emptied.
    pub fn step(&mut self, dt: Duration) -> Option<(f64, SpringStatus)> {
        let anim = self.active.as_mut()?;
        let status = anim.step(dt);
        let value = anim.value();
        if status == SpringStatus::AtRest {
            self.active = None;
        }
        Some((value, status))
    }

    /// Finishes the running animation immediately, returning its target.
    pub fn finish(&mut self) -> Option<f64> {
        self.active.take().map(|a| a.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_slot_is_idle() {
        let mut slot = AnimationSlot::new();
        assert!(!slot.is_active());
        assert_eq!(slot.step(Duration::from_millis(16)), None);
        assert_eq!(slot.velocity(), 0.0);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut slot = AnimationSlot::new();
        assert!(slot.cancel().is_none());
        assert!(slot.cancel().is_none());

        slot.start(0.0, 10.0, 0.0, SpringParams::default());
        assert!(slot.cancel().is_some());
        assert!(slot.cancel().is_none());
        assert!(!slot.is_active());
    }

    #[test]
    fn start_replaces_running_animation() {
        let mut slot = AnimationSlot::new();
        slot.start(0.0, 10.0, 0.0, SpringParams::default());
        slot.start(5.0, -10.0, 1.0, SpringParams::default());

        let anim = slot.get().copied().unwrap();
        assert_eq!(anim.value(), 5.0);
        assert_eq!(anim.target(), -10.0);
        assert_eq!(anim.velocity(), 1.0);
    }

    #[test]
    fn step_empties_slot_at_rest() {
        let mut slot = AnimationSlot::new();
        slot.start(0.0, -100.0, 0.0, SpringParams::default());

        let mut last = None;
        for _ in 0..300 {
            match slot.step(Duration::from_millis(16)) {
                Some(step) => last = Some(step),
                None => break,
            }
        }
        assert_eq!(last, Some((-100.0, SpringStatus::AtRest)));
        assert!(!slot.is_active());
    }

    #[test]
    fn retarget_requires_running_animation() {
        let mut slot = AnimationSlot::new();
        assert!(!slot.retarget(3.0));

        slot.start(0.0, 10.0, 4.0, SpringParams::default());
        assert!(slot.retarget(-20.0));
        let anim = slot.get().copied().unwrap();
        assert_eq!(anim.target(), -20.0);
        assert_eq!(anim.velocity(), 4.0);
    }

    #[test]
    fn finish_returns_target() {
        let mut slot = AnimationSlot::new();
        assert_eq!(slot.finish(), None);
        slot.start(0.0, 7.0, 0.0, SpringParams::default());
        assert_eq!(slot.finish(), Some(7.0));
        assert!(!slot.is_active());
    }
}
