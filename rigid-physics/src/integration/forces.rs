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
//! Gravity and damping

use crate::math::Vector3;
use crate::motion::Motion;

/// Uniform forces applied to every dynamic body
///
/// Gravity is an acceleration along -Y, so the force it produces scales with
/// the body's mass. Damping opposes velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forces {
    /// Gravitational acceleration in m/s²
    pub gravity: f64,
    /// Fraction of linear velocity removed per second
    pub linear_damping: f64,
    /// Fraction of angular velocity removed per second
    pub angular_damping: f64,
}

impl Forces {
    /// Create a force set
    pub fn new(gravity: f64, linear_damping: f64, angular_damping: f64) -> Self {
        Forces {
            gravity,
            linear_damping,
            angular_damping,
        }
    }

    /// Force and torque acting on `motion` in its current state
    pub fn apply(&self, motion: &Motion) -> (Vector3, Vector3) {
        let mut force = motion.linear_velocity() * -self.linear_damping;
        if motion.gravity_enabled() {
            force.y -= motion.mass() * self.gravity;
        }
        let torque = motion.angular_velocity() * -self.angular_damping;
        (force, torque)
    }

    /// Whether these forces would change a motion that has no momentum
    pub fn accelerates(&self, motion: &Motion) -> bool {
        !motion.is_static() && motion.gravity_enabled() && self.gravity != 0.0
    }
}

impl Default for Forces {
    fn default() -> Self {
        Forces::new(9.81, 0.0, 0.0)
    }
}
