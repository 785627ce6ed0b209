// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw pointer events to carousel inputs.
//!
//! [`PointerDriver`] sits between the host's pointer events and a
//! [`Carousel`]. It only captures gestures that lock horizontally; vertical
//! gestures are reported as [`PointerOutcome::PassThrough`] so the host can let
//! the page scroll.

use kurbo::Point;
use understory_gesture::drag::{AxisDrag, DragUpdate};

use crate::carousel::Carousel;
use crate::input::{CarouselEvents, CarouselInput};
use crate::trace::CarouselTrace;

/// How the host should treat a pointer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// No gesture is active.
    Ignored,
    /// The gesture has not yet picked an axis.
    Pending,
    /// The carousel owns the gesture; suppress default handling.
    Captured,
    /// The gesture is vertical; let the host scroll.
    PassThrough,
}

/// Feeds pointer down/move/up into a [`Carousel`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerDriver {
    drag: AxisDrag,
}

impl PointerDriver {
    /// Creates a driver with a custom axis-decision slop.
    #[must_use]
    pub fn new(slop: f64) -> Self {
        Self {
            drag: AxisDrag::new(slop),
        }
    }

    /// Returns `true` while a pointer is down.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Pointer pressed on the carousel.
    ///
    /// Nothing reaches the carousel until the gesture locks horizontally, so a
    /// tap on a settling carousel does not stop it.
    pub fn pointer_down(&mut self, pos: Point, time_ms: u64) {
        self.drag.start(pos, time_ms);
    }

    /// Pointer moved.
    pub fn pointer_move<S>(
        &mut self,
        carousel: &mut Carousel<S>,
        pos: Point,
        time_ms: u64,
    ) -> PointerOutcome {
        self.pointer_move_with_trace(carousel, pos, time_ms, &mut ())
    }

    /// Like [`PointerDriver::pointer_move`], reporting to `trace`.
    pub fn pointer_move_with_trace<S, T: CarouselTrace>(
        &mut self,
        carousel: &mut Carousel<S>,
        pos: Point,
        time_ms: u64,
        trace: &mut T,
    ) -> PointerOutcome {
        match self.drag.update(pos, time_ms) {
            DragUpdate::Inactive => PointerOutcome::Ignored,
            DragUpdate::Pending => PointerOutcome::Pending,
            DragUpdate::PassThrough => PointerOutcome::PassThrough,
            DragUpdate::Started { delta } => {
                carousel.handle_with_trace(CarouselInput::DragStart, trace);
                carousel.handle_with_trace(CarouselInput::DragMove(delta), trace);
                PointerOutcome::Captured
            }
            DragUpdate::Moved { delta } => {
                carousel.handle_with_trace(CarouselInput::DragMove(delta), trace);
                PointerOutcome::Captured
            }
        }
    }

    /// Pointer released.
    pub fn pointer_up<S>(&mut self, carousel: &mut Carousel<S>, time_ms: u64) -> CarouselEvents {
        self.pointer_up_with_trace(carousel, time_ms, &mut ())
    }

    /// Like [`PointerDriver::pointer_up`], reporting to `trace`.
    pub fn pointer_up_with_trace<S, T: CarouselTrace>(
        &mut self,
        carousel: &mut Carousel<S>,
        time_ms: u64,
        trace: &mut T,
    ) -> CarouselEvents {
        match self.drag.end(time_ms) {
            Some(velocity) => carousel.handle_with_trace(CarouselInput::DragEnd(velocity), trace),
            None => CarouselEvents::new(),
        }
    }

    /// The platform cancelled the pointer (for example a touch turned into a
    /// system gesture).
    pub fn pointer_cancel<S>(&mut self, carousel: &mut Carousel<S>) -> CarouselEvents {
        let captured = self.drag.is_horizontal();
        self.drag.cancel();
        if captured {
            carousel.handle(CarouselInput::DragCancel)
        } else {
            CarouselEvents::new()
        }
    }
}
