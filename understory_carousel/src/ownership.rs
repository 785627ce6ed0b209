// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Who owns the index the carousel renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexOwnership {
    /// Uncontrolled: the carousel applies its own decisions.
    Owned(usize),
    /// Controlled: the host supplies the index. The carousel only requests
    /// changes through [`CarouselEvent::IndexChanged`](crate::CarouselEvent::IndexChanged).
    Delegated(usize),
}

impl IndexOwnership {
    /// The index used for rendering.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Owned(i) | Self::Delegated(i) => i,
        }
    }

    /// Returns `true` when the host owns the index.
    #[must_use]
    pub fn is_controlled(self) -> bool {
        matches!(self, Self::Delegated(_))
    }

    /// Applies a requested index if the carousel owns it.
    ///
    /// Returns `true` if the rendered index changed.
    pub fn request(&mut self, next: usize) -> bool {
        match self {
            Self::Owned(i) if *i != next => {
                *i = next;
                true
            }
            Self::Owned(_) | Self::Delegated(_) => false,
        }
    }
}
