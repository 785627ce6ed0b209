// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: axis-locked drag tracking for UI.
//!
//! This crate turns raw pointer positions into single-axis drag gestures. It
//! is meant for widgets that scroll or page along one axis while leaving the
//! other axis to the host (for example a horizontal carousel inside a
//! vertically scrolling page).
//!
//! - [`drag`]: [`AxisDrag`](drag::AxisDrag) decides which axis a gesture
//!   belongs to once the pointer has travelled past a small slop distance, then
//!   reports per-move deltas along that axis. Gestures that lock onto the other
//!   axis are reported as pass-through so the host can let them scroll.
//! - [`velocity`]: [`VelocityTracker`](velocity::VelocityTracker) estimates the
//!   release velocity from the most recent samples.
//!
//! Like the other Understory event helpers, nothing here assumes a particular
//! event system. Positions are [`kurbo::Point`]s and timestamps are plain
//! milliseconds supplied by the caller.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture::drag::{AxisDrag, DragUpdate};
//!
//! let mut drag = AxisDrag::default();
//! drag.start(Point::new(100.0, 50.0), 0);
//!
//! // Small jitter stays undecided.
//! assert_eq!(drag.update(Point::new(101.0, 50.0), 8), DragUpdate::Pending);
//!
//! // Clear horizontal travel locks the gesture and reports the catch-up delta.
//! assert_eq!(
//!     drag.update(Point::new(90.0, 51.0), 16),
//!     DragUpdate::Started { delta: -10.0 }
//! );
//! assert_eq!(
//!     drag.update(Point::new(80.0, 51.0), 24),
//!     DragUpdate::Moved { delta: -10.0 }
//! );
//!
//! // Releasing yields a velocity in units per second.
//! let velocity = drag.end(24).unwrap();
//! assert!(velocity < 0.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod velocity;
