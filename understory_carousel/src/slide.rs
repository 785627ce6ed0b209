// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kurbo::Rect;

/// One item shown by the carousel.
///
/// `source` is whatever the host renders (an image handle, a URL, a texture
/// id); the carousel never looks inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide<S> {
    /// Host-defined visual payload.
    pub source: S,
    /// Optional human-readable title.
    pub title: Option<String>,
}

impl<S> Slide<S> {
    /// Creates an untitled slide.
    pub fn new(source: S) -> Self {
        Self {
            source,
            title: None,
        }
    }

    /// Creates a titled slide.
    pub fn titled(source: S, title: impl Into<String>) -> Self {
        Self {
            source,
            title: Some(title.into()),
        }
    }

    /// Accessible label for the slide at `index`: its title, or `slide-{index}`.
    #[must_use]
    pub fn alt_text(&self, index: usize) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("slide-{index}"),
        }
    }
}

/// A slide positioned in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideFrame<'a, S> {
    /// Index on the track (a loop duplicate has index `original_count`).
    pub index: usize,
    /// Index among the caller-supplied slides.
    pub original_index: usize,
    /// The slide itself.
    pub slide: &'a Slide<S>,
    /// Rectangle in viewport coordinates; may extend past the viewport.
    pub rect: Rect,
    /// `true` for the copy appended in loop mode.
    pub is_loop_duplicate: bool,
}

/// A position indicator ("dot") under the carousel.
///
/// There is one indicator per caller-supplied slide; the loop duplicate has
/// none. Clicking indicator `index` should be mapped to
/// [`Carousel::jump_to`](crate::Carousel::jump_to).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indicator {
    /// Slide this indicator jumps to.
    pub index: usize,
    /// Whether this indicator marks the current slide.
    pub active: bool,
}
