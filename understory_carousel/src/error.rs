// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use understory_spring::SpringError;
use understory_track::TrackError;

/// Error returned when a [`Carousel`](crate::Carousel) cannot be built or resized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselError {
    /// A carousel needs at least one slide.
    EmptySlides,
    /// The viewport, padding, or gap do not describe a usable track.
    Track(TrackError),
    /// The spring tuning cannot be simulated.
    Spring(SpringError),
    /// The snap thresholds are negative or non-finite.
    InvalidSnapPolicy,
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySlides => write!(f, "a carousel needs at least one slide"),
            Self::Track(err) => write!(f, "invalid track geometry: {err}"),
            Self::Spring(err) => write!(f, "invalid settle spring: {err}"),
            Self::InvalidSnapPolicy => {
                write!(f, "snap thresholds must be finite and non-negative")
            }
        }
    }
}

impl core::error::Error for CarouselError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Track(err) => Some(err),
            Self::Spring(err) => Some(err),
            Self::EmptySlides | Self::InvalidSnapPolicy => None,
        }
    }
}

impl From<TrackError> for CarouselError {
    fn from(err: TrackError) -> Self {
        Self::Track(err)
    }
}

impl From<SpringError> for CarouselError {
    fn from(err: SpringError) -> Self {
        Self::Spring(err)
    }
}
