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
//! Per-body dynamic state
//!
//! A [`Motion`] holds where a body is, how it is oriented and how much
//! linear and angular momentum it carries. Velocities and the orientation
//! derivative ("spin") are derived values kept in sync by the setters, so
//! they never need to be recomputed by the integrators.
//!
//! Angular mass is a single scalar computed as for a solid cube of edge
//! `size`: `mass * size² / 6`.

use crate::math::{Quaternion, Transform, Vector3};

/// Location, orientation and momenta of one body
///
/// A mass that is zero, negative or not finite marks the motion static:
/// both inverse masses are zero so no force or impulse can move it.
///
/// # Examples
///
/// ```
/// use rigid_physics::math::{Quaternion, Vector3};
/// use rigid_physics::motion::Motion;
///
/// let mut m = Motion::new(1.0, 2.0, Vector3::zero(), Quaternion::identity());
/// assert!(!m.is_moving());
/// m.set_linear_momentum(Vector3::new(4.0, 0.0, 0.0));
/// assert_eq!(m.linear_velocity(), Vector3::new(2.0, 0.0, 0.0));
/// assert!(m.is_moving());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    location: Vector3,
    orientation: Quaternion,
    linear_momentum: Vector3,
    linear_velocity: Vector3,
    angular_momentum: Vector3,
    angular_velocity: Vector3,
    spin: Quaternion,
    mass: f64,
    inverse_mass: f64,
    angular_mass: f64,
    inverse_angular_mass: f64,
    gravity_enabled: bool,
}

impl Motion {
    /// Create a resting motion
    ///
    /// # Arguments
    ///
    /// * `size` - Edge length used for the angular mass
    /// * `mass` - Body mass, `<= 0` for a static body
    /// * `location` - Initial location
    /// * `orientation` - Initial orientation, normalized on the way in
    pub fn new(size: f64, mass: f64, location: Vector3, orientation: Quaternion) -> Self {
        let dynamic = mass > 0.0 && mass.is_finite();
        let (mass, inverse_mass) = if dynamic { (mass, 1.0 / mass) } else { (0.0, 0.0) };
        let angular_mass = mass * size * size / 6.0;
        let inverse_angular_mass = if angular_mass > 0.0 && angular_mass.is_finite() {
            1.0 / angular_mass
        } else {
            0.0
        };
        let mut motion = Motion {
            location,
            orientation,
            linear_momentum: Vector3::zero(),
            linear_velocity: Vector3::zero(),
            angular_momentum: Vector3::zero(),
            angular_velocity: Vector3::zero(),
            spin: Quaternion::new(0.0, 0.0, 0.0, 0.0),
            mass,
            inverse_mass,
            angular_mass,
            inverse_angular_mass,
            gravity_enabled: true,
        };
        motion.set_orientation(orientation);
        motion
    }

    /// Current location
    pub fn location(&self) -> Vector3 {
        self.location
    }

    /// Move to a new location
    pub fn set_location(&mut self, location: Vector3) {
        self.location = location;
    }

    /// Current orientation
    pub fn orientation(&self) -> Quaternion {
        self.orientation
    }

    /// Set the orientation, normalizing it and refreshing the spin
    pub fn set_orientation(&mut self, orientation: Quaternion) {
        self.orientation = orientation;
        self.orientation.unit();
        self.update_spin();
    }

    /// Location and orientation as a transform
    pub fn transform(&self) -> Transform {
        Transform::new(self.location, self.orientation)
    }

    /// Linear momentum
    pub fn linear_momentum(&self) -> Vector3 {
        self.linear_momentum
    }

    /// Set linear momentum, updating the linear velocity
    ///
    /// Static motions keep zero momentum.
    pub fn set_linear_momentum(&mut self, momentum: Vector3) {
        if self.is_static() {
            return;
        }
        self.linear_momentum = momentum;
        self.linear_velocity = momentum * self.inverse_mass;
    }

    /// Linear velocity, `momentum * inverse_mass`
    pub fn linear_velocity(&self) -> Vector3 {
        self.linear_velocity
    }

    /// Angular momentum
    pub fn angular_momentum(&self) -> Vector3 {
        self.angular_momentum
    }

    /// Set angular momentum, updating the angular velocity and spin
    pub fn set_angular_momentum(&mut self, momentum: Vector3) {
        if self.is_static() {
            return;
        }
        self.angular_momentum = momentum;
        self.angular_velocity = momentum * self.inverse_angular_mass;
        self.update_spin();
    }

    /// Angular velocity, `momentum * inverse_angular_mass`
    pub fn angular_velocity(&self) -> Vector3 {
        self.angular_velocity
    }

    /// Time derivative of the orientation
    pub fn spin(&self) -> Quaternion {
        self.spin
    }

    /// Body mass, 0 for static bodies
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Inverse mass, 0 for static bodies
    pub fn inverse_mass(&self) -> f64 {
        self.inverse_mass
    }

    /// Scalar angular mass
    pub fn angular_mass(&self) -> f64 {
        self.angular_mass
    }

    /// Inverse scalar angular mass
    pub fn inverse_angular_mass(&self) -> f64 {
        self.inverse_angular_mass
    }

    /// Static motions have no inverse mass and never move
    pub fn is_static(&self) -> bool {
        self.inverse_mass == 0.0
    }

    /// Whether any momentum component is non-zero
    ///
    /// The comparison is exact: a momentum of `1e-300` still counts as
    /// moving.
    pub fn is_moving(&self) -> bool {
        !(self.linear_momentum.is_zero() && self.angular_momentum.is_zero())
    }

    /// Whether gravity currently acts on this motion
    pub fn gravity_enabled(&self) -> bool {
        self.gravity_enabled
    }

    /// Switch gravity on or off for this motion only
    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
    }

    /// Zero both momenta and their velocities
    pub fn reset_momentum(&mut self) {
        self.set_linear_momentum(Vector3::zero());
        self.set_angular_momentum(Vector3::zero());
    }

    /// Linear plus rotational kinetic energy
    pub fn kinetic_energy(&self) -> f64 {
        if self.is_static() {
            return 0.0;
        }
        0.5 * self.linear_momentum.dot(&self.linear_velocity)
            + 0.5 * self.angular_momentum.dot(&self.angular_velocity)
    }

    /// Check that every stored value is finite
    pub fn is_valid(&self) -> bool {
        self.location.is_valid()
            && self.orientation.is_valid()
            && self.linear_momentum.is_valid()
            && self.angular_momentum.is_valid()
    }

    /// Blend between this state and `end`
    ///
    /// `alpha` of 0 gives this state and 1 gives `end`. Location and momenta
    /// are interpolated linearly and orientation with a normalized lerp.
    /// Masses and the gravity flag come from `end`.
    pub fn interpolate(&self, end: &Motion, alpha: f64) -> Motion {
        let mut blended = *end;
        let mut v = Vector3::zero();
        blended.set_location(*v.set_lerp(self.location, end.location, alpha));
        blended.set_linear_momentum(*v.set_lerp(self.linear_momentum, end.linear_momentum, alpha));
        blended.set_angular_momentum(*v.set_lerp(self.angular_momentum, end.angular_momentum, alpha));
        let mut q = Quaternion::identity();
        q.set_nlerp(self.orientation, end.orientation, alpha);
        blended.set_orientation(q);
        blended
    }

    // spin = 0.5 * (angular velocity, 0) * orientation
    fn update_spin(&mut self) {
        let w = self.angular_velocity;
        self.spin
            .set_mult(self.orientation, Quaternion::new(w.x, w.y, w.z, 0.0))
            .scale(0.5);
    }
}
