// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_track --heading-base-level=0

//! Understory Track: geometry for a paged horizontal track.
//!
//! A track is a row of equally sized items ("slides") separated by a fixed
//! gap and viewed through a fixed-size viewport, one slide per page. The track
//! is scrolled by a single signed offset `x`: slide `i` rests in the viewport
//! when `x == -i * step`, so `x` runs from `0` (first slide) down to
//! [`TrackLayout::left_bound`] (last slide).
//!
//! This crate only answers geometric questions:
//! - Item width, step (pitch), total track width and scroll bounds.
//! - Resting offsets for an index and the nearest index for an offset.
//! - Per-slide rectangles in viewport coordinates, and which slides are
//!   visible for culling.
//!
//! It does **not** own the offset, animate it, or interpret input. See
//! `understory_carousel` for the interaction state machine built on top.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_track::TrackLayout;
//!
//! // 640x380 viewport, 16 px padding, 16 px gap, 4 slides.
//! let track = TrackLayout::new(Size::new(640.0, 380.0), 16.0, 16.0, 4).unwrap();
//! assert_eq!(track.item_width(), 608.0);
//! assert_eq!(track.step(), 624.0);
//! assert_eq!(track.left_bound(), -1872.0);
//!
//! // Dragging is clamped to the bounds.
//! assert_eq!(track.clamp_offset(50.0), 0.0);
//! assert_eq!(track.clamp_offset(-5000.0), -1872.0);
//!
//! // While resting on slide 1, only slide 1 intersects the viewport.
//! assert_eq!(track.visible_range(track.resting_offset(1)), 1..2);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod layout;

pub use layout::{TrackDebugInfo, TrackError, TrackLayout};
