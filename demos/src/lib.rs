// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the carousel demos.

use std::time::Duration;

use understory_carousel::{Carousel, CarouselEvent, Phase};

/// One 60 Hz frame.
pub const FRAME: Duration = Duration::from_micros(16_667);

/// Ticks `carousel` at 60 Hz until it stops settling, printing the offset
/// every few frames. Returns the events produced along the way and the
/// number of frames it took.
pub fn run_to_rest<S>(carousel: &mut Carousel<S>) -> (Vec<CarouselEvent>, usize) {
    let mut events = Vec::new();
    let mut frames = 0;
    while carousel.phase() == Phase::Settling {
        events.extend(carousel.tick(FRAME));
        frames += 1;
        if frames % 6 == 0 {
            println!("  frame {frames:>3}: x = {:>9.2}", carousel.offset());
        }
    }
    println!("  rested after {frames} frames at x = {:.2}", carousel.offset());
    (events, frames)
}
