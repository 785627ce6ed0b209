// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use smallvec::SmallVec;

/// Discrete inputs accepted by [`Carousel::handle`](crate::Carousel::handle).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselInput {
    /// The pointer took hold of the track.
    DragStart,
    /// The pointer moved the track by a horizontal delta.
    DragMove(f64),
    /// The pointer let go with a horizontal velocity (units per second).
    DragEnd(f64),
    /// The gesture was aborted by the platform; snap back without deciding.
    DragCancel,
    /// One animation frame elapsed.
    AnimationTick(Duration),
    /// An external driver declares the settle animation finished.
    AnimationDone,
    /// Settle on a slide, for example from an indicator click. Clamped.
    JumpTo(isize),
    /// The host changed (or removed) the controlled index.
    SetControlledIndex(Option<usize>),
}

/// Outbound notifications produced while handling an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    /// A settle requested this slide, whether or not it is already current.
    /// When controlled, it is only a request.
    ///
    /// The index is normalized into the caller-supplied slides, so the loop
    /// duplicate reports `0`.
    IndexChanged(usize),
    /// The track came to rest on the given track index.
    Settled(usize),
}

/// Events produced by a single input; rarely more than two.
pub type CarouselEvents = SmallVec<[CarouselEvent; 2]>;
