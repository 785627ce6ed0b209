// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability hooks for carousel transitions.
//!
//! The carousel does not log. Hosts that want to know *why* it ended up on a
//! slide pass a [`CarouselTrace`] sink to
//! [`Carousel::handle_with_trace`](crate::Carousel::handle_with_trace). The
//! unit type `()` is the no-op sink used by [`Carousel::handle`](crate::Carousel::handle);
//! [`TraceLog`] records everything for inspection.

use alloc::vec::Vec;

use crate::carousel::Phase;
use crate::input::CarouselInput;
use crate::snap::SnapDecision;

/// A callback sink for carousel tracing.
pub trait CarouselTrace {
    /// Called when the phase changes.
    fn transition(&mut self, from: Phase, to: Phase);

    /// Called with the decision taken on drag release.
    fn snap(&mut self, decision: &SnapDecision);

    /// Called when an input has no effect in the current phase.
    fn ignored(&mut self, input: CarouselInput, phase: Phase);
}

impl CarouselTrace for () {
    fn transition(&mut self, _from: Phase, _to: Phase) {}

    fn snap(&mut self, _decision: &SnapDecision) {}

    fn ignored(&mut self, _input: CarouselInput, _phase: Phase) {}
}

/// One entry in a [`TraceLog`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TraceRecord {
    /// A phase change.
    Transition {
        /// Phase before the input.
        from: Phase,
        /// Phase after the input.
        to: Phase,
    },
    /// A release decision.
    Snap(SnapDecision),
    /// An input that had no effect.
    Ignored {
        /// The input.
        input: CarouselInput,
        /// The phase it arrived in.
        phase: Phase,
    },
}

/// Records every trace callback in order.
#[derive(Clone, Debug, Default)]
pub struct TraceLog {
    records: Vec<TraceRecord>,
}

impl TraceLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded entries, oldest first.
    #[must_use]
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Returns the most recent release decision, if any.
    #[must_use]
    pub fn last_snap(&self) -> Option<SnapDecision> {
        self.records.iter().rev().find_map(|r| match r {
            TraceRecord::Snap(d) => Some(*d),
            _ => None,
        })
    }

    /// Clears all entries.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl CarouselTrace for TraceLog {
    fn transition(&mut self, from: Phase, to: Phase) {
        self.records.push(TraceRecord::Transition { from, to });
    }

    fn snap(&mut self, decision: &SnapDecision) {
        self.records.push(TraceRecord::Snap(*decision));
    }

    fn ignored(&mut self, input: CarouselInput, phase: Phase) {
        self.records.push(TraceRecord::Ignored { input, phase });
    }
}
