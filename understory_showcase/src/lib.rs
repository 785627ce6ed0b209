// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_showcase --heading-base-level=0

//! Understory Showcase: detail panels that follow a carousel.
//!
//! A [`Showcase`] pairs every slide of a [`Carousel`] with a payload (a
//! description, say) and a list of [`Action`] links, and tracks which one is
//! selected by listening to [`CarouselEvent::IndexChanged`]. It only observes;
//! it never drives the carousel.
//!
//! ## Example
//!
//! ```rust
//! use understory_carousel::{Carousel, CarouselConfig, Slide};
//! use understory_showcase::{Action, Showcase, ShowcaseEntry};
//!
//! let mut carousel =
//!     Carousel::new(["a.png", "b.png"].map(Slide::new), CarouselConfig::default()).unwrap();
//! let mut showcase = Showcase::for_carousel(
//!     &carousel,
//!     [
//!         ShowcaseEntry::new("First project"),
//!         ShowcaseEntry::new("Second project").with_action(Action::new("Code", "https://example.com")),
//!     ],
//! )
//! .unwrap();
//!
//! carousel.drag_start();
//! carousel.drag_move(-40.0);
//! for event in carousel.drag_end(0.0) {
//!     showcase.apply(&event);
//! }
//! assert_eq!(showcase.selected(), 1);
//! assert_eq!(showcase.current().actions[0].label, "Code");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use understory_carousel::{Carousel, CarouselEvent};

/// A labelled link shown under a slide's details.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    /// Button text.
    pub label: String,
    /// Link target.
    pub href: String,
}

impl Action {
    /// Creates an action.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Details and actions for one slide.
#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseEntry<D> {
    /// Host-defined payload.
    pub details: D,
    /// Links, in display order.
    pub actions: Vec<Action>,
}

impl<D> ShowcaseEntry<D> {
    /// Creates an entry with no actions.
    pub fn new(details: D) -> Self {
        Self {
            details,
            actions: Vec::new(),
        }
    }

    /// Appends an action.
    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }
}

/// Errors from building a [`Showcase`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowcaseError {
    /// No entries were supplied.
    Empty,
    /// The entry count does not match the carousel's slide count.
    LengthMismatch {
        /// Number of entries supplied.
        entries: usize,
        /// Number of slides in the carousel, excluding any loop duplicate.
        slides: usize,
    },
}

impl fmt::Display for ShowcaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("showcase needs at least one entry"),
            Self::LengthMismatch { entries, slides } => {
                write!(f, "{entries} showcase entries for {slides} slides")
            }
        }
    }
}

impl core::error::Error for ShowcaseError {}

/// The entry list plus the currently selected entry.
#[derive(Clone, Debug)]
pub struct Showcase<D> {
    entries: Vec<ShowcaseEntry<D>>,
    selected: usize,
}

impl<D> Showcase<D> {
    /// Creates a showcase with entry `0` selected.
    pub fn new(entries: impl IntoIterator<Item = ShowcaseEntry<D>>) -> Result<Self, ShowcaseError> {
        let entries: Vec<_> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(ShowcaseError::Empty);
        }
        Ok(Self {
            entries,
            selected: 0,
        })
    }

    /// Creates a showcase whose entries line up with `carousel`'s slides and
    /// whose selection starts on the carousel's current slide.
    pub fn for_carousel<S>(
        carousel: &Carousel<S>,
        entries: impl IntoIterator<Item = ShowcaseEntry<D>>,
    ) -> Result<Self, ShowcaseError> {
        let mut showcase = Self::new(entries)?;
        let slides = carousel.original_count();
        if showcase.entries.len() != slides {
            return Err(ShowcaseError::LengthMismatch {
                entries: showcase.entries.len(),
                slides,
            });
        }
        showcase.selected = carousel.normalized_index();
        Ok(showcase)
    }

    /// Follows [`CarouselEvent::IndexChanged`]; other events are ignored.
    ///
    /// Returns `true` if the selection changed. Indices past the end are
    /// clamped.
    pub fn apply(&mut self, event: &CarouselEvent) -> bool {
        match *event {
            CarouselEvent::IndexChanged(index) => {
                let index = index.min(self.entries.len() - 1);
                let changed = index != self.selected;
                self.selected = index;
                changed
            }
            CarouselEvent::Settled(_) => false,
        }
    }

    /// Selects entry `0`.
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Index of the selected entry.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The selected entry.
    #[must_use]
    pub fn current(&self) -> &ShowcaseEntry<D> {
        &self.entries[self.selected]
    }

    /// All entries.
    #[must_use]
    pub fn entries(&self) -> &[ShowcaseEntry<D>] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a showcase has at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use understory_carousel::{CarouselConfig, Slide};

    use super::*;

    fn entries(n: usize) -> Vec<ShowcaseEntry<usize>> {
        (0..n).map(ShowcaseEntry::new).collect()
    }

    fn carousel(n: usize, config: CarouselConfig) -> Carousel<usize> {
        Carousel::new((0..n).map(Slide::new), config).unwrap()
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(
            Showcase::<u8>::new(vec![]).unwrap_err(),
            ShowcaseError::Empty
        );
    }

    #[test]
    fn length_must_match_slides() {
        let c = carousel(3, CarouselConfig::default());
        let err = Showcase::for_carousel(&c, entries(2)).unwrap_err();
        assert_eq!(
            err,
            ShowcaseError::LengthMismatch {
                entries: 2,
                slides: 3
            }
        );
    }

    #[test]
    fn loop_duplicate_is_not_counted() {
        let c = carousel(3, CarouselConfig::default().with_loop_mode(true));
        assert!(Showcase::for_carousel(&c, entries(3)).is_ok());
    }

    #[test]
    fn starts_on_controlled_index() {
        let c = carousel(3, CarouselConfig::default().with_controlled_index(2));
        let s = Showcase::for_carousel(&c, entries(3)).unwrap();
        assert_eq!(s.selected(), 2);
        assert_eq!(s.current().details, 2);
    }

    #[test]
    fn follows_index_changes_only() {
        let mut s = Showcase::new(entries(3)).unwrap();
        assert!(s.apply(&CarouselEvent::IndexChanged(2)));
        assert!(!s.apply(&CarouselEvent::IndexChanged(2)));
        assert!(!s.apply(&CarouselEvent::Settled(0)));
        assert_eq!(s.selected(), 2);
        s.reset();
        assert!(s.apply(&CarouselEvent::IndexChanged(9)));
        assert_eq!(s.selected(), 2);
    }

    #[test]
    fn reset_returns_to_first() {
        let mut s = Showcase::new(entries(3)).unwrap();
        s.apply(&CarouselEvent::IndexChanged(1));
        s.reset();
        assert_eq!(s.selected(), 0);
        assert_eq!(s.current().details, 0);
    }

    #[test]
    fn indicator_click_resyncs_after_reset() {
        let mut c = carousel(3, CarouselConfig::default());
        c.jump_to(2);
        c.finish_animation();
        let mut s = Showcase::for_carousel(&c, entries(3)).unwrap();
        assert_eq!(s.selected(), 2);

        s.reset();
        for event in c.jump_to(2) {
            s.apply(&event);
        }
        assert_eq!(s.selected(), 2);
    }

    #[test]
    fn actions_keep_order() {
        let e = ShowcaseEntry::new(())
            .with_action(Action::new("Live", "https://a.example"))
            .with_action(Action::new("Code", "https://b.example"));
        let labels: Vec<_> = e.actions.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, ["Live", "Code"]);
    }
}
