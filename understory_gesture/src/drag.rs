// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-locked drag state: decide the gesture axis, then report deltas along it.
//!
//! ## Usage
//!
//! 1) Start tracking on pointer down with [`AxisDrag::start`].
//! 2) On each move, call [`AxisDrag::update`]. While the pointer is within the
//!    slop distance the result is [`DragUpdate::Pending`]. Once it leaves the
//!    slop the gesture locks onto the dominant axis:
//!    - horizontal gestures report [`DragUpdate::Started`] once (carrying the
//!      horizontal travel so far) and then [`DragUpdate::Moved`];
//!    - vertical gestures report [`DragUpdate::PassThrough`] for the rest of
//!      the gesture and never produce deltas.
//! 3) On pointer up, [`AxisDrag::end`] returns the release velocity for a
//!    horizontal gesture, or `None` otherwise.
//! 4) [`AxisDrag::cancel`] drops the gesture without a release.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::drag::{AxisDrag, DragAxis, DragUpdate};
//!
//! let mut drag = AxisDrag::default();
//! drag.start(Point::new(10.0, 20.0), 0);
//! assert!(drag.is_dragging());
//!
//! // Mostly vertical travel: the host keeps scrolling the page.
//! assert_eq!(drag.update(Point::new(12.0, 40.0), 16), DragUpdate::PassThrough);
//! assert_eq!(drag.axis(), Some(DragAxis::Vertical));
//! assert_eq!(drag.end(16), None);
//! ```

use kurbo::Point;

use crate::velocity::VelocityTracker;

/// Default distance the pointer must travel before the axis is decided.
pub const DEFAULT_SLOP: f64 = 3.0;

/// The axis a gesture has locked onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragAxis {
    /// The tracked axis; deltas are reported.
    Horizontal,
    /// The other axis; the gesture is left to the host.
    Vertical,
}

/// Result of feeding a pointer move into [`AxisDrag::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    /// No gesture is being tracked.
    Inactive,
    /// The pointer is still within the slop distance.
    Pending,
    /// The gesture just locked horizontally; `delta` is the horizontal travel
    /// since the pointer went down.
    Started {
        /// Horizontal travel since pointer down.
        delta: f64,
    },
    /// Horizontal movement since the previous update.
    Moved {
        /// Horizontal movement since the last update.
        delta: f64,
    },
    /// The gesture locked vertically and must not be captured.
    PassThrough,
}

/// Tracks one pointer gesture and locks it onto a single axis.
#[derive(Clone, Copy, Debug)]
pub struct AxisDrag {
    /// Start position of the gesture.
    start_pos: Option<Point>,
    /// Last recorded pointer position.
    last_pos: Option<Point>,
    axis: Option<DragAxis>,
    slop: f64,
    velocity: VelocityTracker,
}

impl Default for AxisDrag {
    fn default() -> Self {
        Self::new(DEFAULT_SLOP)
    }
}

impl AxisDrag {
    /// Creates a tracker that decides the axis after `slop` units of travel.
    ///
    /// A negative slop is treated as zero.
    #[must_use]
    pub fn new(slop: f64) -> Self {
        Self {
            start_pos: None,
            last_pos: None,
            axis: None,
            slop: slop.max(0.0),
            velocity: VelocityTracker::new(),
        }
    }

    /// Returns the configured slop distance.
    #[must_use]
    pub fn slop(&self) -> f64 {
        self.slop
    }

    /// Starts tracking a new gesture, replacing any previous one.
    pub fn start(&mut self, pos: Point, time_ms: u64) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.axis = None;
        self.velocity.reset();
        self.velocity.push(time_ms, pos.x);
    }

    /// Feeds a pointer move.
    pub fn update(&mut self, pos: Point, time_ms: u64) -> DragUpdate {
        let (Some(start), Some(last)) = (self.start_pos, self.last_pos) else {
            return DragUpdate::Inactive;
        };
        self.last_pos = Some(pos);

        match self.axis {
            Some(DragAxis::Vertical) => DragUpdate::PassThrough,
            Some(DragAxis::Horizontal) => {
                self.velocity.push(time_ms, pos.x);
                DragUpdate::Moved {
                    delta: pos.x - last.x,
                }
            }
            None => {
                self.velocity.push(time_ms, pos.x);
                let travel = pos - start;
                if travel.hypot2() <= self.slop * self.slop {
                    return DragUpdate::Pending;
                }
                if travel.x.abs() >= travel.y.abs() {
                    self.axis = Some(DragAxis::Horizontal);
                    DragUpdate::Started { delta: travel.x }
                } else {
                    self.axis = Some(DragAxis::Vertical);
                    DragUpdate::PassThrough
                }
            }
        }
    }

    /// Ends the gesture.
    ///
    /// Returns the horizontal release velocity (units per second) if the
    /// gesture had locked horizontally, and `None` otherwise.
    pub fn end(&mut self, time_ms: u64) -> Option<f64> {
        let velocity = match self.axis {
            Some(DragAxis::Horizontal) => Some(self.velocity.velocity(time_ms)),
            _ => None,
        };
        self.cancel();
        velocity
    }

    /// Drops the gesture without computing a release.
    pub fn cancel(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
        self.axis = None;
        self.velocity.reset();
    }

    /// Returns `true` while a gesture is being tracked.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns the locked axis, if decided.
    #[must_use]
    pub fn axis(&self) -> Option<DragAxis> {
        self.axis
    }

    /// Returns `true` once the gesture has locked horizontally.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.axis == Some(DragAxis::Horizontal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_is_not_dragging() {
        let drag = AxisDrag::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.axis(), None);
        assert_eq!(drag.slop(), DEFAULT_SLOP);
    }

    #[test]
    fn update_without_start_is_inactive() {
        let mut drag = AxisDrag::default();
        assert_eq!(drag.update(Point::new(5.0, 5.0), 0), DragUpdate::Inactive);
    }

    #[test]
    fn jitter_inside_slop_is_pending() {
        let mut drag = AxisDrag::default();
        drag.start(Point::new(0.0, 0.0), 0);
        assert_eq!(drag.update(Point::new(2.0, 2.0), 8), DragUpdate::Pending);
        assert_eq!(drag.update(Point::new(-1.0, 0.5), 16), DragUpdate::Pending);
        assert_eq!(drag.axis(), None);
    }

    #[test]
    fn horizontal_lock_reports_catch_up_then_incremental_deltas() {
        let mut drag = AxisDrag::default();
        drag.start(Point::new(100.0, 100.0), 0);

        assert_eq!(drag.update(Point::new(101.0, 100.0), 4), DragUpdate::Pending);
        assert_eq!(
            drag.update(Point::new(94.0, 102.0), 8),
            DragUpdate::Started { delta: -6.0 }
        );
        assert!(drag.is_horizontal());
        assert_eq!(
            drag.update(Point::new(90.0, 130.0), 12),
            DragUpdate::Moved { delta: -4.0 }
        );
    }

    #[test]
    fn vertical_lock_passes_through_for_the_whole_gesture() {
        let mut drag = AxisDrag::default();
        drag.start(Point::new(0.0, 0.0), 0);

        assert_eq!(drag.update(Point::new(1.0, 10.0), 8), DragUpdate::PassThrough);
        // Later horizontal movement does not re-capture the gesture.
        assert_eq!(drag.update(Point::new(80.0, 12.0), 16), DragUpdate::PassThrough);
        assert_eq!(drag.end(16), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn diagonal_tie_prefers_horizontal() {
        let mut drag = AxisDrag::default();
        drag.start(Point::new(0.0, 0.0), 0);
        assert_eq!(
            drag.update(Point::new(5.0, 5.0), 8),
            DragUpdate::Started { delta: 5.0 }
        );
    }

    #[test]
    fn end_reports_release_velocity() {
        let mut drag = AxisDrag::default();
        drag.start(Point::new(200.0, 0.0), 0);
        drag.update(Point::new(190.0, 0.0), 10);
        drag.update(Point::new(180.0, 0.0), 20);

        let velocity = drag.end(20).unwrap();
        assert!((velocity + 1000.0).abs() < 1e-9);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn end_without_lock_has_no_velocity() {
        let mut drag = AxisDrag::default();
        drag.start(Point::new(0.0, 0.0), 0);
        drag.update(Point::new(1.0, 0.0), 10);
        assert_eq!(drag.end(10), None);
    }

    #[test]
    fn cancel_on_fresh_state_is_safe() {
        let mut drag = AxisDrag::default();
        drag.cancel();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn start_overwrites_previous_gesture() {
        let mut drag = AxisDrag::default();
        drag.start(Point::new(0.0, 0.0), 0);
        drag.update(Point::new(0.0, 50.0), 10);
        assert_eq!(drag.axis(), Some(DragAxis::Vertical));

        drag.start(Point::new(50.0, 60.0), 100);
        assert_eq!(drag.axis(), None);
        assert_eq!(
            drag.update(Point::new(40.0, 61.0), 110),
            DragUpdate::Started { delta: -10.0 }
        );
    }

    #[test]
    fn zero_slop_locks_on_first_movement() {
        let mut drag = AxisDrag::new(-4.0);
        assert_eq!(drag.slop(), 0.0);
        drag.start(Point::new(0.0, 0.0), 0);
        assert_eq!(
            drag.update(Point::new(0.5, 0.0), 1),
            DragUpdate::Started { delta: 0.5 }
        );
    }
}
