// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! World configuration
//!
//! Everything that would otherwise be global simulation state (gravity,
//! damping, bounce coefficients, the settle heuristic and the integrator
//! choice) lives in one [`WorldConfig`] owned by its [`World`](crate::world::World).

use crate::error::{PhysicsError, Result};
use crate::integration::{Forces, IntegratorKind};

/// Bounce coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Restitution {
    /// Coefficient between two dynamic bodies, 1.0 is perfectly elastic
    pub bodies: f64,
    /// Coefficient against planes and static bodies
    pub surfaces: f64,
}

impl Default for Restitution {
    fn default() -> Self {
        Restitution {
            bodies: 1.0,
            surfaces: 0.9,
        }
    }
}

/// Heuristic that puts slow bodies resting on a floor to sleep
///
/// After a bounce against an immovable support (a static or free body), a
/// body whose contact normal points mostly up and whose speed is small has
/// its linear momentum zeroed and gravity switched off. Bodies resting on
/// other dynamic bodies never settle. A later impact or new momentum set on
/// the body wakes it again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestRule {
    /// Largest speed, in m/s, that still counts as resting
    pub max_speed: f64,
    /// Smallest `normal.y` that counts as a supporting surface
    pub min_support: f64,
}

impl Default for RestRule {
    fn default() -> Self {
        RestRule {
            max_speed: 0.5,
            min_support: 0.7,
        }
    }
}

/// Configuration for a [`World`](crate::world::World)
///
/// # Examples
///
/// ```
/// use rigid_physics::config::WorldConfig;
/// use rigid_physics::integration::IntegratorKind;
///
/// let config = WorldConfig::default()
///     .with_gravity(1.62)
///     .with_damping(0.1)
///     .with_integrator(IntegratorKind::SymplecticEuler)
///     .without_rest();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    /// Gravitational acceleration along -Y, in m/s²
    pub gravity: f64,
    /// Linear damping fraction per second
    pub linear_damping: f64,
    /// Angular damping fraction per second
    pub angular_damping: f64,
    /// Bounce coefficients
    pub restitution: Restitution,
    /// Optional settle heuristic, `None` to disable
    pub rest: Option<RestRule>,
    /// Integrator used for dynamic bodies
    pub integrator: IntegratorKind,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            gravity: 9.81,
            linear_damping: 0.0,
            angular_damping: 0.0,
            restitution: Restitution::default(),
            rest: Some(RestRule::default()),
            integrator: IntegratorKind::default(),
        }
    }
}

impl WorldConfig {
    /// Set the gravitational acceleration
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set linear and angular damping to the same fraction
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.linear_damping = damping;
        self.angular_damping = damping;
        self
    }

    /// Set linear and angular damping separately
    pub fn with_split_damping(mut self, linear: f64, angular: f64) -> Self {
        self.linear_damping = linear;
        self.angular_damping = angular;
        self
    }

    /// Set the bounce coefficients
    pub fn with_restitution(mut self, restitution: Restitution) -> Self {
        self.restitution = restitution;
        self
    }

    /// Replace the settle heuristic
    pub fn with_rest(mut self, rest: RestRule) -> Self {
        self.rest = Some(rest);
        self
    }

    /// Disable the settle heuristic
    pub fn without_rest(mut self) -> Self {
        self.rest = None;
        self
    }

    /// Choose the integrator
    pub fn with_integrator(mut self, integrator: IntegratorKind) -> Self {
        self.integrator = integrator;
        self
    }

    /// The forces this configuration applies
    pub fn forces(&self) -> Forces {
        Forces::new(self.gravity, self.linear_damping, self.angular_damping)
    }

    /// Check every value is in range
    ///
    /// Gravity may be any finite value, including negative. Damping must be
    /// finite and non-negative, restitution coefficients must lie in
    /// `[0, 1]` and rest thresholds must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            return Err(invalid(format!("gravity must be finite, got {}", self.gravity)));
        }
        for (name, value) in [
            ("linear_damping", self.linear_damping),
            ("angular_damping", self.angular_damping),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(invalid(format!("{name} must be finite and >= 0, got {value}")));
            }
        }
        for (name, value) in [
            ("restitution.bodies", self.restitution.bodies),
            ("restitution.surfaces", self.restitution.surfaces),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!("{name} must be within [0, 1], got {value}")));
            }
        }
        if let Some(rest) = self.rest {
            if !(rest.max_speed >= 0.0 && rest.max_speed.is_finite()) {
                return Err(invalid(format!(
                    "rest.max_speed must be finite and >= 0, got {}",
                    rest.max_speed
                )));
            }
            if !(-1.0..=1.0).contains(&rest.min_support) {
                return Err(invalid(format!(
                    "rest.min_support must be within [-1, 1], got {}",
                    rest.min_support
                )));
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> PhysicsError {
    log::warn!("rejected world configuration: {message}");
    PhysicsError::InvalidConfig(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorldConfig::default();
        assert_eq!(config.gravity, 9.81);
        assert_eq!(config.restitution.bodies, 1.0);
        assert_eq!(config.restitution.surfaces, 0.9);
        assert_eq!(config.rest, Some(RestRule::default()));
        assert_eq!(config.integrator, IntegratorKind::Rk4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = WorldConfig::default()
            .with_gravity(0.0)
            .with_split_damping(0.1, 0.2)
            .without_rest();
        assert_eq!(config.forces(), Forces::new(0.0, 0.1, 0.2));
        assert!(config.rest.is_none());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let bad = [
            WorldConfig::default().with_gravity(f64::NAN),
            WorldConfig::default().with_damping(-0.1),
            WorldConfig::default().with_split_damping(0.0, f64::INFINITY),
            WorldConfig::default().with_restitution(Restitution {
                bodies: 1.5,
                surfaces: 0.5,
            }),
            WorldConfig::default().with_rest(RestRule {
                max_speed: -1.0,
                min_support: 0.7,
            }),
        ];
        for config in bad {
            assert!(matches!(
                config.validate(),
                Err(PhysicsError::InvalidConfig(_))
            ));
        }
    }
}
