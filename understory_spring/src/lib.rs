// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_spring --heading-base-level=0

//! Understory Spring: cancellable damped-spring animation tasks.
//!
//! This crate provides a small, headless model of a scalar animated toward a
//! target by a damped harmonic oscillator. It focuses on:
//! - Spring tuning ([`SpringParams`]) with validation and rest thresholds.
//! - An owned animation task ([`SpringAnimation`]) that the host advances by
//!   explicit time steps.
//! - A single-occupancy slot ([`AnimationSlot`]) that encodes the rule "at most
//!   one driver of a value at a time": starting replaces, cancelling drops.
//!
//! It does **not** own a clock, a frame scheduler, or a render loop. Callers
//! are expected to:
//! - Call [`AnimationSlot::step`] (or [`SpringAnimation::step`]) once per
//!   animation frame with the elapsed [`Duration`](core::time::Duration).
//! - Write the returned value into whatever they are animating.
//! - Stop requesting frames once [`SpringStatus::AtRest`] is reported.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_spring::{AnimationSlot, SpringParams, SpringStatus};
//!
//! let mut slot = AnimationSlot::new();
//! slot.start(0.0, -624.0, 0.0, SpringParams::default());
//!
//! let frame = Duration::from_millis(16);
//! let mut value = 0.0;
//! for _ in 0..600 {
//!     let Some((v, status)) = slot.step(frame) else { break };
//!     value = v;
//!     if status == SpringStatus::AtRest {
//!         break;
//!     }
//! }
//! assert_eq!(value, -624.0);
//! assert!(!slot.is_active());
//! ```
//!
//! ## Integration
//!
//! Integration uses semi-implicit (symplectic) Euler in fixed sub-steps no
//! longer than [`MAX_SUBSTEP`] seconds, so a long frame does not destabilize
//! stiff springs. When both the remaining distance and the speed fall under
//! the configured rest thresholds the value is snapped exactly onto the target.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod animation;
mod params;
mod slot;

pub use animation::{MAX_STEP, MAX_SUBSTEP, SpringAnimation, SpringStatus};
pub use params::{SpringError, SpringParams};
pub use slot::AnimationSlot;
