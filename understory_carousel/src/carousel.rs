// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Size;
use understory_spring::{AnimationSlot, SpringStatus};
use understory_track::{TrackDebugInfo, TrackLayout};

use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::input::{CarouselEvent, CarouselEvents, CarouselInput};
use crate::ownership::IndexOwnership;
use crate::slide::{Indicator, Slide, SlideFrame};
use crate::snap::decide_snap;
use crate::trace::CarouselTrace;

/// What is currently driving the track offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing; the track rests on the current slide.
    Idle,
    /// The pointer.
    Dragging,
    /// A settle spring.
    Settling,
}

/// Headless drag-to-snap carousel.
///
/// The carousel owns the track offset and the phase, and optionally the
/// index (see [`IndexOwnership`]). At any time exactly one thing drives the
/// offset: nothing, the pointer, or a single settle spring. Starting a drag or
/// a new settle cancels the running spring.
#[derive(Clone, Debug)]
pub struct Carousel<S> {
    slides: Vec<Slide<S>>,
    original_count: usize,
    layout: TrackLayout,
    config: CarouselConfig,
    ownership: IndexOwnership,
    phase: Phase,
    offset: f64,
    drag_anchor: Option<f64>,
    animation: AnimationSlot,
}

impl<S: Clone> Carousel<S> {
    /// Builds a carousel over `slides`.
    ///
    /// In loop mode a copy of the first slide is appended to the track. The
    /// carousel starts at rest on index `0`, or on the controlled index when
    /// one is configured (clamped into the track).
    pub fn new(
        slides: impl IntoIterator<Item = Slide<S>>,
        config: CarouselConfig,
    ) -> Result<Self, CarouselError> {
        let mut slides: Vec<Slide<S>> = slides.into_iter().collect();
        let Some(first) = slides.first().cloned() else {
            return Err(CarouselError::EmptySlides);
        };
        config.spring.validate()?;
        if !config.snap.is_valid() {
            return Err(CarouselError::InvalidSnapPolicy);
        }

        let original_count = slides.len();
        if config.loop_mode {
            slides.push(first);
        }
        let layout = TrackLayout::new(config.viewport, config.padding, config.gap, slides.len())?;

        let ownership = match config.controlled_index {
            Some(i) => IndexOwnership::Delegated(i.min(layout.last_index())),
            None => IndexOwnership::Owned(0),
        };
        let offset = layout.resting_offset(ownership.index());

        Ok(Self {
            slides,
            original_count,
            layout,
            config,
            ownership,
            phase: Phase::Idle,
            offset,
            drag_anchor: None,
            animation: AnimationSlot::new(),
        })
    }
}

impl<S> Carousel<S> {
    /// Handles one input, returning the notifications it produced.
    pub fn handle(&mut self, input: CarouselInput) -> CarouselEvents {
        self.handle_with_trace(input, &mut ())
    }

    /// Like [`Carousel::handle`], reporting transitions and decisions to `trace`.
    pub fn handle_with_trace<T: CarouselTrace>(
        &mut self,
        input: CarouselInput,
        trace: &mut T,
    ) -> CarouselEvents {
        let mut events = CarouselEvents::new();
        match input {
            CarouselInput::DragStart => self.begin_drag(trace),
            CarouselInput::DragMove(delta) => {
                if !delta.is_finite() {
                    trace.ignored(input, self.phase);
                    return events;
                }
                if self.phase != Phase::Dragging {
                    self.begin_drag(trace);
                }
                self.offset = self.layout.clamp_offset(self.offset + delta);
            }
            CarouselInput::DragEnd(velocity) => {
                if self.phase != Phase::Dragging {
                    trace.ignored(input, self.phase);
                    return events;
                }
                let velocity = if velocity.is_finite() { velocity } else { 0.0 };
                let decision = decide_snap(
                    &self.layout,
                    self.ownership.index(),
                    self.offset,
                    velocity,
                    &self.config.snap,
                );
                trace.snap(&decision);
                self.drag_anchor = None;
                // The release velocity only carries into the spring when the
                // track is actually heading to a new slide.
                let seed = if self.ownership.is_controlled() || decision.next == decision.current {
                    0.0
                } else {
                    velocity
                };
                self.settle(decision.next, seed, trace, &mut events);
            }
            CarouselInput::DragCancel => {
                if self.phase != Phase::Dragging {
                    trace.ignored(input, self.phase);
                    return events;
                }
                self.drag_anchor = None;
                self.animate_to_current(0.0, trace, &mut events);
            }
            CarouselInput::AnimationTick(dt) => self.tick_animation(dt, trace, &mut events),
            CarouselInput::AnimationDone => match self.animation.finish() {
                Some(target) => {
                    self.offset = target;
                    self.rest(trace, &mut events);
                }
                None => trace.ignored(input, self.phase),
            },
            CarouselInput::JumpTo(index) => {
                if self.phase == Phase::Dragging {
                    self.drag_anchor = None;
                }
                let velocity = self.animation.velocity();
                let target = self.layout.clamp_index(index);
                self.settle(target, velocity, trace, &mut events);
            }
            CarouselInput::SetControlledIndex(index) => {
                self.adopt_controlled_index(index, trace, &mut events);
            }
        }
        events
    }

    /// Takes pointer control of the track, cancelling any settle.
    pub fn drag_start(&mut self) -> CarouselEvents {
        self.handle(CarouselInput::DragStart)
    }

    /// Moves the track by `delta`, clamped to the track bounds.
    pub fn drag_move(&mut self, delta: f64) -> CarouselEvents {
        self.handle(CarouselInput::DragMove(delta))
    }

    /// Releases the track with `velocity` and settles on the decided slide.
    pub fn drag_end(&mut self, velocity: f64) -> CarouselEvents {
        self.handle(CarouselInput::DragEnd(velocity))
    }

    /// Aborts a drag and settles back on the current slide.
    pub fn drag_cancel(&mut self) -> CarouselEvents {
        self.handle(CarouselInput::DragCancel)
    }

    /// Advances the settle animation by one frame.
    pub fn tick(&mut self, dt: Duration) -> CarouselEvents {
        self.handle(CarouselInput::AnimationTick(dt))
    }

    /// Completes the settle animation immediately.
    pub fn finish_animation(&mut self) -> CarouselEvents {
        self.handle(CarouselInput::AnimationDone)
    }

    /// Settles on `index`, clamped into the track.
    pub fn jump_to(&mut self, index: isize) -> CarouselEvents {
        self.handle(CarouselInput::JumpTo(index))
    }

    /// Switches between controlled (`Some`) and uncontrolled (`None`) mode.
    ///
    /// A new controlled index is adopted as authoritative and settled toward
    /// without reporting [`CarouselEvent::IndexChanged`]; during a drag it only
    /// changes the index the release is decided against.
    pub fn set_controlled_index(&mut self, index: Option<usize>) -> CarouselEvents {
        self.handle(CarouselInput::SetControlledIndex(index))
    }

    /// Resizes the viewport.
    ///
    /// The offset is rescaled to the new step so the same fraction of the
    /// track stays in view, then the carousel re-settles on its index. During
    /// a drag the rescaled offset is only clamped.
    pub fn set_viewport(&mut self, viewport: Size) -> Result<CarouselEvents, CarouselError> {
        let layout = self.layout.with_viewport(viewport)?;
        let scale = layout.step() / self.layout.step();
        self.layout = layout;
        self.config.viewport = viewport;
        self.offset = self.layout.clamp_offset(self.offset * scale);
        if let Some(anchor) = self.drag_anchor.as_mut() {
            *anchor *= scale;
        }

        let mut events = CarouselEvents::new();
        if self.phase != Phase::Dragging {
            let velocity = self.animation.velocity() * scale;
            self.animate_to_current(velocity, &mut (), &mut events);
        }
        Ok(events)
    }

    /// The index used for rendering (the controlled index when controlled).
    #[must_use]
    pub fn index(&self) -> usize {
        self.ownership.index()
    }

    /// The rendering index normalized into the caller-supplied slides.
    #[must_use]
    pub fn normalized_index(&self) -> usize {
        self.ownership.index() % self.original_count
    }

    /// Current index ownership.
    #[must_use]
    pub fn ownership(&self) -> IndexOwnership {
        self.ownership
    }

    /// Returns `true` when the host owns the index.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.ownership.is_controlled()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` while a settle spring is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_active()
    }

    /// Current track offset `x` (`0` at the first slide, negative beyond).
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Distance the track has moved since the current drag started.
    #[must_use]
    pub fn drag_travel(&self) -> Option<f64> {
        self.drag_anchor.map(|anchor| self.offset - anchor)
    }

    /// Track geometry.
    #[must_use]
    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    /// Configuration the carousel was built with (viewport kept current).
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// All slides on the track, including the loop duplicate.
    #[must_use]
    pub fn slides(&self) -> &[Slide<S>] {
        &self.slides
    }

    /// Number of slides on the track, including the loop duplicate.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Number of caller-supplied slides.
    #[must_use]
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// Position indicators, one per caller-supplied slide.
    pub fn indicators(&self) -> impl Iterator<Item = Indicator> + '_ {
        let active = self.normalized_index();
        (0..self.original_count).map(move |index| Indicator {
            index,
            active: index == active,
        })
    }

    /// Every slide with its rectangle at the current offset.
    pub fn slide_frames(&self) -> impl Iterator<Item = SlideFrame<'_, S>> + '_ {
        self.slides
            .iter()
            .enumerate()
            .map(move |(index, slide)| self.frame(index, slide))
    }

    /// Only the slides that intersect the viewport at the current offset.
    pub fn visible_frames(&self) -> impl Iterator<Item = SlideFrame<'_, S>> + '_ {
        let range = self.layout.visible_range(self.offset);
        self.slides[range.clone()]
            .iter()
            .zip(range)
            .map(move |(slide, index)| self.frame(index, slide))
    }

    /// Snapshot of the carousel state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CarouselDebugInfo {
        CarouselDebugInfo {
            phase: self.phase,
            ownership: self.ownership,
            normalized_index: self.normalized_index(),
            nearest_index: self.layout.nearest_index(self.offset),
            offset: self.offset,
            resting_offset: self.layout.resting_offset(self.ownership.index()),
            animation_target: self.animation.get().map(|a| a.target()),
            loop_mode: self.config.loop_mode,
            track: self.layout.debug_info(),
        }
    }

    fn frame<'a>(&self, index: usize, slide: &'a Slide<S>) -> SlideFrame<'a, S> {
        SlideFrame {
            index,
            original_index: index % self.original_count,
            slide,
            rect: self.layout.slide_rect(index, self.offset),
            is_loop_duplicate: index >= self.original_count,
        }
    }

    fn set_phase<T: CarouselTrace>(&mut self, to: Phase, trace: &mut T) {
        if self.phase != to {
            trace.transition(self.phase, to);
            self.phase = to;
        }
    }

    fn begin_drag<T: CarouselTrace>(&mut self, trace: &mut T) {
        self.animation.cancel();
        self.drag_anchor = Some(self.offset);
        self.set_phase(Phase::Dragging, trace);
    }

    /// Requests `target`, reports it, and animates toward the index that ends
    /// up authoritative.
    fn settle<T: CarouselTrace>(
        &mut self,
        target: usize,
        velocity: f64,
        trace: &mut T,
        events: &mut CarouselEvents,
    ) {
        let target = target.min(self.layout.last_index());
        events.push(CarouselEvent::IndexChanged(target % self.original_count));
        self.ownership.request(target);
        self.animate_to_current(velocity, trace, events);
    }

    fn animate_to_current<T: CarouselTrace>(
        &mut self,
        velocity: f64,
        trace: &mut T,
        events: &mut CarouselEvents,
    ) {
        self.animation.cancel();
        let target = self.layout.resting_offset(self.ownership.index());
        let spring = self.config.spring;
        if (self.offset - target).abs() <= spring.rest_delta && velocity.abs() <= spring.rest_speed
        {
            self.offset = target;
            self.rest(trace, events);
        } else {
            self.animation.start(self.offset, target, velocity, spring);
            self.set_phase(Phase::Settling, trace);
        }
    }

    fn tick_animation<T: CarouselTrace>(
        &mut self,
        dt: Duration,
        trace: &mut T,
        events: &mut CarouselEvents,
    ) {
        let Some((value, status)) = self.animation.step(dt) else {
            return;
        };
        self.offset = value;
        if status == SpringStatus::AtRest {
            self.rest(trace, events);
        }
    }

    fn rest<T: CarouselTrace>(&mut self, trace: &mut T, events: &mut CarouselEvents) {
        self.set_phase(Phase::Idle, trace);
        events.push(CarouselEvent::Settled(self.ownership.index()));
    }

    fn adopt_controlled_index<T: CarouselTrace>(
        &mut self,
        index: Option<usize>,
        trace: &mut T,
        events: &mut CarouselEvents,
    ) {
        let Some(index) = index else {
            self.ownership = IndexOwnership::Owned(self.ownership.index());
            return;
        };
        let index = index.min(self.layout.last_index());
        let unchanged = self.ownership == IndexOwnership::Delegated(index);
        self.ownership = IndexOwnership::Delegated(index);

        let target = self.layout.resting_offset(index);
        let already_heading_there = match self.phase {
            Phase::Dragging => true,
            Phase::Idle => unchanged && self.offset == target,
            Phase::Settling => self.animation.get().is_some_and(|a| a.target() == target),
        };
        if already_heading_there {
            trace.ignored(CarouselInput::SetControlledIndex(Some(index)), self.phase);
            return;
        }
        if self.phase == Phase::Settling && self.animation.retarget(target) {
            return;
        }
        let velocity = self.animation.velocity();
        self.animate_to_current(velocity, trace, events);
    }
}

/// Debug snapshot of a [`Carousel`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselDebugInfo {
    /// Current phase.
    pub phase: Phase,
    /// Index ownership and rendering index.
    pub ownership: IndexOwnership,
    /// Rendering index normalized into the caller-supplied slides.
    pub normalized_index: usize,
    /// Track index whose resting offset is closest to the current offset.
    pub nearest_index: usize,
    /// Current track offset.
    pub offset: f64,
    /// Offset at which the rendering index rests.
    pub resting_offset: f64,
    /// Target of the running settle spring, if any.
    pub animation_target: Option<f64>,
    /// Whether the loop duplicate is present.
    pub loop_mode: bool,
    /// Track geometry.
    pub track: TrackDebugInfo,
}
