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
//! Simulated bodies

use crate::math::{Quaternion, Vector3};
use crate::motion::Motion;
use crate::shapes::Shape;

/// Unique body identifier, shared with whatever the application attaches
/// the body to
pub type BodyId = u64;

/// A simulated object: motion state plus optional collision geometry
///
/// A body keeps both its current motion and the motion it had at the start
/// of the last step, so the application can interpolate between the two
/// when rendering.
///
/// Free bodies are moved by the application. The world never integrates
/// them and reports their contacts through
/// [`World::drain_events`](crate::world::World::drain_events) instead of
/// bouncing them.
///
/// # Examples
///
/// ```
/// use rigid_physics::body::Body;
/// use rigid_physics::shapes::Shape;
///
/// let mut ball = Body::new(7, 1.0, 2.0).with_shape(Shape::sphere(0.0, 0.0, 0.0, 0.5));
/// ball.set_linear_momentum(2.0, 0.0, 0.0);
/// assert_eq!(ball.linear_velocity().x, 1.0);
/// assert!(ball.shape().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    id: BodyId,
    shape: Option<Shape>,
    now: Motion,
    then: Motion,
    free: bool,
}

impl Body {
    /// A resting body at the origin
    ///
    /// `size` is the edge length used for the angular mass. A `mass` of
    /// zero or less makes the body static.
    pub fn new(id: BodyId, size: f64, mass: f64) -> Self {
        let now = Motion::new(size, mass, Vector3::zero(), Quaternion::identity());
        Body {
            id,
            shape: None,
            now,
            then: now,
            free: false,
        }
    }

    /// Builder form of [`Body::set_shape`]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.set_shape(Some(shape));
        self
    }

    /// Builder form of [`Body::set_location`]
    pub fn with_location(mut self, x: f64, y: f64, z: f64) -> Self {
        self.set_location(Vector3::new(x, y, z));
        self.then = self.now;
        self
    }

    /// Builder form of [`Body::set_free`]
    pub fn with_free(mut self, free: bool) -> Self {
        self.free = free;
        self
    }

    /// The body id
    pub fn id(&self) -> BodyId {
        self.id
    }

    /// Collision geometry in body space
    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    /// Replace the collision geometry, `None` to stop colliding
    pub fn set_shape(&mut self, shape: Option<Shape>) {
        self.shape = shape;
    }

    /// Collision geometry placed at the body's current location
    pub fn world_shape(&self) -> Option<Shape> {
        self.shape.map(|s| s.placed_at(self.now.location()))
    }

    /// Current location
    pub fn location(&self) -> Vector3 {
        self.now.location()
    }

    /// Teleport the body
    pub fn set_location(&mut self, location: Vector3) {
        self.now.set_location(location);
    }

    /// Current orientation
    pub fn rotation(&self) -> Quaternion {
        self.now.orientation()
    }

    /// Set the orientation, normalized on the way in
    pub fn set_rotation(&mut self, rotation: Quaternion) {
        self.now.set_orientation(rotation);
    }

    /// Linear momentum
    pub fn linear_momentum(&self) -> Vector3 {
        self.now.linear_momentum()
    }

    /// Set linear momentum
    ///
    /// Gravity is switched back on in case the body had been put to rest.
    pub fn set_linear_momentum(&mut self, x: f64, y: f64, z: f64) {
        self.now.set_linear_momentum(Vector3::new(x, y, z));
        self.now.set_gravity_enabled(true);
    }

    /// Angular momentum
    pub fn angular_momentum(&self) -> Vector3 {
        self.now.angular_momentum()
    }

    /// Set angular momentum, waking the body like
    /// [`Body::set_linear_momentum`]
    pub fn set_angular_momentum(&mut self, x: f64, y: f64, z: f64) {
        self.now.set_angular_momentum(Vector3::new(x, y, z));
        self.now.set_gravity_enabled(true);
    }

    /// Linear velocity
    pub fn linear_velocity(&self) -> Vector3 {
        self.now.linear_velocity()
    }

    /// Angular velocity
    pub fn angular_velocity(&self) -> Vector3 {
        self.now.angular_velocity()
    }

    /// Stop the body, keeping its location, orientation and masses
    pub fn reset_momentum(&mut self) {
        self.now.reset_momentum();
        self.then = self.now;
    }

    /// Whether the application drives this body
    pub fn is_free(&self) -> bool {
        self.free
    }

    /// Hand the body to the application (`true`) or back to physics
    pub fn set_free(&mut self, free: bool) {
        self.free = free;
    }

    /// Whether the body has no inverse mass
    pub fn is_static(&self) -> bool {
        self.now.is_static()
    }

    /// Whether the body is currently affected by gravity
    pub fn is_awake(&self) -> bool {
        self.now.gravity_enabled()
    }

    /// Current motion state
    pub fn motion(&self) -> &Motion {
        &self.now
    }

    /// Motion state at the start of the last step
    pub fn previous_motion(&self) -> &Motion {
        &self.then
    }

    /// Motion blended between the last two steps, for rendering
    pub fn interpolated(&self, alpha: f64) -> Motion {
        self.then.interpolate(&self.now, alpha)
    }

    /// Whether the location differs from the start of the last step
    pub fn has_moved(&self) -> bool {
        self.now.location() != self.then.location()
    }

    pub(crate) fn motion_mut(&mut self) -> &mut Motion {
        &mut self.now
    }

    // Start a new step: the current state becomes the previous one
    pub(crate) fn snapshot(&mut self) {
        self.then = self.now;
    }
}
