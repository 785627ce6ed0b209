// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use understory_spring::SpringParams;

use crate::snap::SnapPolicy;

/// Default viewport: 640 x 380.
pub const DEFAULT_VIEWPORT: Size = Size::new(640.0, 380.0);

/// Default padding between the viewport edge and the resting slide.
pub const DEFAULT_PADDING: f64 = 16.0;

/// Default gap between adjacent slides.
pub const DEFAULT_GAP: f64 = 16.0;

/// Construction-time configuration for a [`Carousel`](crate::Carousel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Size of the clipped viewport.
    pub viewport: Size,
    /// Padding on each side of the resting slide.
    pub padding: f64,
    /// Gap between adjacent slides.
    pub gap: f64,
    /// Append a copy of the first slide so a forward drag from the last slide
    /// lands on what looks like the first one again.
    ///
    /// This does not make the carousel wrap in both directions.
    pub loop_mode: bool,
    /// Initial externally owned index. `Some` makes the carousel controlled.
    pub controlled_index: Option<usize>,
    /// Spring used to settle onto a slide.
    pub spring: SpringParams,
    /// Release thresholds.
    pub snap: SnapPolicy,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            viewport: DEFAULT_VIEWPORT,
            padding: DEFAULT_PADDING,
            gap: DEFAULT_GAP,
            loop_mode: false,
            controlled_index: None,
            spring: SpringParams::default(),
            snap: SnapPolicy::default(),
        }
    }
}

impl CarouselConfig {
    /// Sets the viewport size.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    /// Sets the padding.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the gap between slides.
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Enables or disables the appended loop slide.
    #[must_use]
    pub fn with_loop_mode(mut self, loop_mode: bool) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    /// Makes the carousel controlled, starting at `index`.
    #[must_use]
    pub fn with_controlled_index(mut self, index: usize) -> Self {
        self.controlled_index = Some(index);
        self
    }

    /// Sets the settle spring.
    #[must_use]
    pub fn with_spring(mut self, spring: SpringParams) -> Self {
        self.spring = spring;
        self
    }

    /// Sets the release thresholds.
    #[must_use]
    pub fn with_snap(mut self, snap: SnapPolicy) -> Self {
        self.snap = snap;
        self
    }
}
