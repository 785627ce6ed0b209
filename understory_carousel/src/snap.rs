// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The release decision: advance, retreat, or stay.

use understory_track::TrackLayout;

/// Thresholds for committing a drag to an adjacent slide.
///
/// A release commits when *either* the displacement from the current slide's
/// resting offset reaches `distance_fraction * step`, *or* the release speed
/// reaches `flick_velocity`. With the default tuning almost any deliberate drag
/// commits; the distance threshold mostly rejects accidental micro-drags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapPolicy {
    /// Release speed (units per second) that commits regardless of distance.
    pub flick_velocity: f64,
    /// Fraction of one step that commits regardless of speed.
    pub distance_fraction: f64,
}

impl Default for SnapPolicy {
    fn default() -> Self {
        Self {
            flick_velocity: 600.0,
            distance_fraction: 0.01,
        }
    }
}

impl SnapPolicy {
    /// Returns `true` if both thresholds are finite and non-negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.flick_velocity.is_finite()
            && self.distance_fraction.is_finite()
            && self.flick_velocity >= 0.0
            && self.distance_fraction >= 0.0
    }
}

/// Which criterion produced a [`SnapDecision`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapReason {
    /// The displacement crossed the distance threshold.
    Distance,
    /// Only the release speed crossed the flick threshold.
    Velocity,
    /// Neither threshold was crossed.
    Stay,
}

/// Outcome of [`decide_snap`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapDecision {
    /// Index the drag started relative to.
    pub current: usize,
    /// Index to settle on; at most one away from `current`.
    pub next: usize,
    /// Signed displacement from the current slide's resting offset.
    /// Negative means the track moved left (toward later slides).
    pub delta: f64,
    /// Release velocity that was considered.
    pub velocity: f64,
    /// Criterion that fired.
    pub reason: SnapReason,
}

/// Decides where a released drag settles.
///
/// The decision is always relative to `current`, the last settled index, and
/// never to where the drag began, so a drag that wanders back to its origin
/// resolves as "stay". The result is clamped into the track.
#[must_use]
pub fn decide_snap(
    layout: &TrackLayout,
    current: usize,
    offset: f64,
    velocity: f64,
    policy: &SnapPolicy,
) -> SnapDecision {
    let current = current.min(layout.last_index());
    let delta = offset - layout.resting_offset(current);
    let threshold = layout.step() * policy.distance_fraction;

    let (next, reason) = if delta <= -threshold || velocity <= -policy.flick_velocity {
        let reason = if delta <= -threshold {
            SnapReason::Distance
        } else {
            SnapReason::Velocity
        };
        ((current + 1).min(layout.last_index()), reason)
    } else if delta >= threshold || velocity >= policy.flick_velocity {
        let reason = if delta >= threshold {
            SnapReason::Distance
        } else {
            SnapReason::Velocity
        };
        (current.saturating_sub(1), reason)
    } else {
        (current, SnapReason::Stay)
    };

    SnapDecision {
        current,
        next,
        delta,
        velocity,
        reason,
    }
}
