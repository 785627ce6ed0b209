// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless drag-to-snap carousel.
//!
//! [`Carousel`] shows an ordered row of slides one page at a time. The user
//! drags the track horizontally; on release the carousel decides whether to
//! advance, retreat, or stay, and settles onto the chosen slide with a spring.
//!
//! The carousel is an explicit state machine with three phases
//! ([`Phase::Idle`], [`Phase::Dragging`], [`Phase::Settling`]). Hosts feed it
//! discrete [`CarouselInput`]s and get back [`CarouselEvent`]s; it never calls
//! out, renders, or reads a clock. Per animation frame the host sends an
//! [`CarouselInput::AnimationTick`] with the elapsed time and reads
//! [`Carousel::offset`] back.
//!
//! - Drag decisions are computed by [`decide_snap`]: a release commits to the
//!   adjacent slide if the displacement from the current slide reaches a small
//!   fraction of one step *or* the release velocity reaches the flick
//!   threshold. A single gesture never moves more than one slide.
//! - Index ownership is either [`IndexOwnership::Owned`] (uncontrolled) or
//!   [`IndexOwnership::Delegated`] (controlled by the host). In both cases the
//!   requested index is reported through [`CarouselEvent::IndexChanged`]; only
//!   the owned case applies it.
//! - Out-of-range indices are always clamped, never rejected.
//! - [`PointerDriver`] converts raw pointer events into inputs and leaves
//!   vertical gestures to the host.
//! - [`CarouselTrace`] / [`TraceLog`] explain transitions and decisions.
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_carousel::{Carousel, CarouselConfig, CarouselEvent, Phase, Slide};
//!
//! let slides = ["p1.png", "p2.png", "p3.png"].map(Slide::new);
//! let mut carousel = Carousel::new(slides, CarouselConfig::default()).unwrap();
//!
//! // Drag a little to the left and let go.
//! carousel.drag_start();
//! carousel.drag_move(-40.0);
//! let events = carousel.drag_end(0.0);
//! assert_eq!(events[0], CarouselEvent::IndexChanged(1));
//!
//! // Drive the settle spring until it rests.
//! while carousel.phase() == Phase::Settling {
//!     carousel.tick(Duration::from_millis(16));
//! }
//! assert_eq!(carousel.offset(), -carousel.layout().step());
//! ```
//!
//! ## Loop mode
//!
//! With [`CarouselConfig::loop_mode`] a copy of the first slide is appended, so
//! dragging forward from the last slide lands on something that looks like
//! the first one and reports `IndexChanged(0)`. Dragging backward from the
//! first slide does not wrap.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod config;
mod error;
mod input;
mod ownership;
pub mod pointer;
mod slide;
pub mod snap;
pub mod trace;

pub use carousel::{Carousel, CarouselDebugInfo, Phase};
pub use config::{CarouselConfig, DEFAULT_GAP, DEFAULT_PADDING, DEFAULT_VIEWPORT};
pub use error::CarouselError;
pub use input::{CarouselEvent, CarouselEvents, CarouselInput};
pub use ownership::IndexOwnership;
pub use pointer::{PointerDriver, PointerOutcome};
pub use slide::{Indicator, Slide, SlideFrame};
pub use snap::{SnapDecision, SnapPolicy, SnapReason, decide_snap};
pub use trace::{CarouselTrace, TraceLog, TraceRecord};

pub use understory_spring::SpringParams;
