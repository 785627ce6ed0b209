// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Rect, Size};

/// Geometry of a paged horizontal track.
///
/// Slides are `item_width` wide, where `item_width` is the viewport width minus
/// padding on both sides, and are laid out `step = item_width + gap` apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackLayout {
    viewport: Size,
    padding: f64,
    gap: f64,
    slide_count: usize,
}

impl TrackLayout {
    /// Creates a layout for `slide_count` slides in the given viewport.
    ///
    /// Fails if there are no slides, if any dimension is non-finite, if
    /// padding or gap is negative, or if the padding leaves no room for a
    /// slide.
    pub fn new(
        viewport: Size,
        padding: f64,
        gap: f64,
        slide_count: usize,
    ) -> Result<Self, TrackError> {
        if slide_count == 0 {
            return Err(TrackError::NoSlides);
        }
        if !viewport.is_finite() || !padding.is_finite() || !gap.is_finite() {
            return Err(TrackError::NonFinite);
        }
        if padding < 0.0 || gap < 0.0 {
            return Err(TrackError::NegativeSpacing);
        }
        let item_width = viewport.width - 2.0 * padding;
        if item_width <= 0.0 {
            return Err(TrackError::DegenerateItem { item_width });
        }
        Ok(Self {
            viewport,
            padding,
            gap,
            slide_count,
        })
    }

    /// Returns a copy of this layout for a different viewport size.
    pub fn with_viewport(&self, viewport: Size) -> Result<Self, TrackError> {
        Self::new(viewport, self.padding, self.gap, self.slide_count)
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the padding between the viewport edge and the resting slide.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Returns the gap between adjacent slides.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Returns the number of slides on the track.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Returns the index of the last slide.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.slide_count - 1
    }

    /// Width of a single slide.
    #[must_use]
    pub fn item_width(&self) -> f64 {
        self.viewport.width - 2.0 * self.padding
    }

    /// Distance between the resting offsets of adjacent slides.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.item_width() + self.gap
    }

    /// Total width of all slides and the gaps between them.
    #[must_use]
    pub fn track_width(&self) -> f64 {
        let n = self.slide_count as f64;
        n * self.item_width() + (n - 1.0) * self.gap
    }

    /// The most negative offset, where the last slide rests.
    ///
    /// For a single slide this is `0.0` and the track cannot move.
    #[must_use]
    pub fn left_bound(&self) -> f64 {
        -(self.step() * self.last_index() as f64)
    }

    /// Clamps an index into `0..slide_count`.
    #[must_use]
    pub fn clamp_index(&self, index: isize) -> usize {
        usize::try_from(index).map_or(0, |i| i.min(self.last_index()))
    }

    /// Offset at which slide `index` rests in the viewport.
    ///
    /// Out-of-range indices are clamped.
    #[must_use]
    pub fn resting_offset(&self, index: usize) -> f64 {
        -(index.min(self.last_index()) as f64) * self.step()
    }

    /// Clamps an offset into `[left_bound, 0]`.
    #[must_use]
    pub fn clamp_offset(&self, x: f64) -> f64 {
        x.clamp(self.left_bound(), 0.0)
    }

    /// Index of the slide whose resting offset is closest to `x`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "rounded page count is non-negative and clamped to the slide count"
    )]
    pub fn nearest_index(&self, x: f64) -> usize {
        let pages = (-x / self.step()).round();
        if pages <= 0.0 {
            0
        } else {
            (pages as usize).min(self.last_index())
        }
    }

    /// Rectangle of slide `index` in viewport coordinates for track offset `x`.
    ///
    /// The rectangle may lie partially or fully outside the viewport.
    #[must_use]
    pub fn slide_rect(&self, index: usize, x: f64) -> Rect {
        let x0 = self.padding + index as f64 * self.step() + x;
        let y0 = self.padding;
        let y1 = (self.viewport.height - self.padding).max(y0);
        Rect::new(x0, y0, x0 + self.item_width(), y1)
    }

    /// Range of slide indices that intersect the viewport at offset `x`.
    ///
    /// Slides that merely touch a viewport edge are not counted.
    #[must_use]
    pub fn visible_range(&self, x: f64) -> Range<usize> {
        let width = self.viewport.width;
        let is_visible = |i: usize| {
            let r = self.slide_rect(i, x);
            r.x1 > 0.0 && r.x0 < width
        };
        let start = (0..self.slide_count)
            .find(|&i| is_visible(i))
            .unwrap_or(self.slide_count);
        let end = (start..self.slide_count)
            .find(|&i| !is_visible(i))
            .unwrap_or(self.slide_count);
        start..end
    }

    /// Snapshot of the derived geometry for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TrackDebugInfo {
        TrackDebugInfo {
            viewport: self.viewport,
            padding: self.padding,
            gap: self.gap,
            slide_count: self.slide_count,
            item_width: self.item_width(),
            step: self.step(),
            track_width: self.track_width(),
            left_bound: self.left_bound(),
        }
    }
}

/// Debug snapshot of a [`TrackLayout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackDebugInfo {
    /// Viewport size.
    pub viewport: Size,
    /// Viewport padding.
    pub padding: f64,
    /// Gap between slides.
    pub gap: f64,
    /// Number of slides.
    pub slide_count: usize,
    /// Width of one slide.
    pub item_width: f64,
    /// Slide pitch.
    pub step: f64,
    /// Width of the whole track.
    pub track_width: f64,
    /// Most negative scroll offset.
    pub left_bound: f64,
}

/// Error returned when a [`TrackLayout`] cannot be built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackError {
    /// A track needs at least one slide.
    NoSlides,
    /// Viewport, padding, or gap is NaN or infinite.
    NonFinite,
    /// Padding or gap is negative.
    NegativeSpacing,
    /// The padding leaves no positive width for a slide.
    DegenerateItem {
        /// The computed slide width.
        item_width: f64,
    },
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSlides => write!(f, "a track needs at least one slide"),
            Self::NonFinite => write!(f, "track dimensions must be finite"),
            Self::NegativeSpacing => write!(f, "track padding and gap must not be negative"),
            Self::DegenerateItem { item_width } => {
                write!(f, "padding leaves no room for a slide (item width {item_width})")
            }
        }
    }
}

impl core::error::Error for TrackError {}
