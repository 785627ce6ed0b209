// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`

/// Tuning for a damped spring.
///
/// Units are whatever the animated value uses (typically logical pixels) and
/// seconds. The default tuning (stiffness 300, damping 34, mass 1) is very
/// close to critically damped and settles a full-width slide change in well
/// under a second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    /// Restoring force per unit of displacement.
    pub stiffness: f64,
    /// Opposing force per unit of velocity.
    pub damping: f64,
    /// Mass of the simulated body.
    pub mass: f64,
    /// Distance from the target under which the value may come to rest.
    pub rest_delta: f64,
    /// Speed (units per second) under which the value may come to rest.
    pub rest_speed: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 34.0,
            mass: 1.0,
            rest_delta: 0.5,
            rest_speed: 2.0,
        }
    }
}

impl SpringParams {
    /// Creates a spring with the given stiffness and damping, unit mass, and
    /// default rest thresholds.
    #[must_use]
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            ..Self::default()
        }
    }

    /// Returns a copy with a different mass.
    #[must_use]
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Returns a copy with different rest thresholds.
    #[must_use]
    pub fn with_rest(mut self, rest_delta: f64, rest_speed: f64) -> Self {
        self.rest_delta = rest_delta;
        self.rest_speed = rest_speed;
        self
    }

    /// Returns the damping ratio `ζ = c / (2·√(k·m))`.
    ///
    /// `1.0` is critically damped, below is under-damped (overshoots), above is
    /// over-damped.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        let critical = 2.0 * (self.stiffness * self.mass).sqrt();
        if critical > 0.0 {
            self.damping / critical
        } else {
            0.0
        }
    }

    /// Checks that the parameters describe a spring that can be simulated.
    pub fn validate(&self) -> Result<(), SpringError> {
        let all = [
            self.stiffness,
            self.damping,
            self.mass,
            self.rest_delta,
            self.rest_speed,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(SpringError::NonFinite);
        }
        if self.stiffness <= 0.0 {
            return Err(SpringError::NonPositiveStiffness(self.stiffness));
        }
        if self.mass <= 0.0 {
            return Err(SpringError::NonPositiveMass(self.mass));
        }
        if self.damping < 0.0 {
            return Err(SpringError::NegativeDamping(self.damping));
        }
        if self.rest_delta < 0.0 || self.rest_speed < 0.0 {
            return Err(SpringError::NegativeRestThreshold);
        }
        Ok(())
    }
}

/// Error returned by [`SpringParams::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpringError {
    /// One of the parameters is NaN or infinite.
    NonFinite,
    /// Stiffness must be strictly positive.
    NonPositiveStiffness(f64),
    /// Mass must be strictly positive.
    NonPositiveMass(f64),
    /// Damping must not be negative.
    NegativeDamping(f64),
    /// Rest thresholds must not be negative.
    NegativeRestThreshold,
}

impl fmt::Display for SpringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "spring parameters must be finite"),
            Self::NonPositiveStiffness(k) => {
                write!(f, "spring stiffness must be positive, got {k}")
            }
            Self::NonPositiveMass(m) => write!(f, "spring mass must be positive, got {m}"),
            Self::NegativeDamping(c) => {
                write!(f, "spring damping must not be negative, got {c}")
            }
            Self::NegativeRestThreshold => {
                write!(f, "spring rest thresholds must not be negative")
            }
        }
    }
}

impl core::error::Error for SpringError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_is_nearly_critical() {
        let params = SpringParams::default();
        let zeta = params.damping_ratio();
        assert!(zeta > 0.95 && zeta < 1.0, "zeta = {zeta}");
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn critical_damping_ratio_is_one() {
        let params = SpringParams::new(100.0, 20.0);
        assert!((params.damping_ratio() - 1.0).abs() < 1e-12);

        let heavy = params.with_mass(4.0);
        assert!((heavy.damping_ratio() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_degenerate_springs() {
        assert_eq!(
            SpringParams::new(0.0, 10.0).validate(),
            Err(SpringError::NonPositiveStiffness(0.0))
        );
        assert_eq!(
            SpringParams::new(10.0, -1.0).validate(),
            Err(SpringError::NegativeDamping(-1.0))
        );
        assert_eq!(
            SpringParams::default().with_mass(0.0).validate(),
            Err(SpringError::NonPositiveMass(0.0))
        );
        assert_eq!(
            SpringParams::new(f64::NAN, 10.0).validate(),
            Err(SpringError::NonFinite)
        );
        assert_eq!(
            SpringParams::default().with_rest(-0.1, 1.0).validate(),
            Err(SpringError::NegativeRestThreshold)
        );
    }

    #[test]
    fn undamped_spring_is_valid() {
        assert_eq!(SpringParams::new(10.0, 0.0).validate(), Ok(()));
        assert_eq!(SpringParams::new(10.0, 0.0).damping_ratio(), 0.0);
    }
}
