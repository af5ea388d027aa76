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
//! Location plus orientation

use super::{Quaternion, Vector3, HALF_PI};

/// A rigid transform: a rotation followed by a translation
///
/// # Examples
///
/// ```
/// use rigid_physics::math::{rad, Transform, Vector3};
///
/// let mut t = Transform::identity();
/// t.set_loc(5.0, 0.0, 0.0).set_axis_angle(0.0, 1.0, 0.0, rad(90.0));
/// let p = t.app(Vector3::new(2.0, 0.0, 0.0));
/// assert!(p.aeq(&Vector3::new(5.0, 0.0, -2.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// Location (translation)
    pub loc: Vector3,
    /// Orientation (rotation)
    pub rot: Quaternion,
}

impl Transform {
    /// Create a transform from a location and orientation
    pub const fn new(loc: Vector3, rot: Quaternion) -> Self {
        Transform { loc, rot }
    }

    /// At the origin with no rotation
    pub const fn identity() -> Self {
        Transform::new(Vector3::zero(), Quaternion::identity())
    }

    /// Set the location
    pub fn set_loc(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.loc.set(x, y, z);
        self
    }

    /// Set the orientation directly
    pub fn set_rot(&mut self, x: f64, y: f64, z: f64, w: f64) -> &mut Self {
        self.rot.set(x, y, z, w);
        self
    }

    /// Set the orientation from an axis and an angle in radians
    pub fn set_axis_angle(&mut self, ax: f64, ay: f64, az: f64, angle: f64) -> &mut Self {
        self.rot.set_axis_angle(ax, ay, az, angle);
        self
    }

    /// Approximate equality of location and orientation
    pub fn aeq(&self, other: &Transform) -> bool {
        self.loc.aeq(&other.loc) && self.rot.aeq(&other.rot)
    }

    /// Combine two transforms into the receiver
    ///
    /// The location of `b` is rotated by `a` and offset by the location of
    /// `a`. The orientation is `a` followed by `b`.
    pub fn set_mult(&mut self, a: Transform, b: Transform) -> &mut Self {
        self.loc = b.loc.rotated(a.rot) + a.loc;
        self.rot.set_mult(a.rot, b.rot);
        self
    }

    /// Apply to a point: rotate, then translate
    pub fn app(&self, v: Vector3) -> Vector3 {
        v.rotated(self.rot) + self.loc
    }

    /// Apply only the rotation
    pub fn app_rot(&self, v: Vector3) -> Vector3 {
        v.rotated(self.rot)
    }

    /// Apply the inverse: remove the translation, then undo the rotation
    pub fn inv(&self, v: Vector3) -> Vector3 {
        (v - self.loc).rotated(self.rot.inverse())
    }

    /// Advance `a` by linear velocity `linv` and angular velocity `angv`
    /// over `dt` seconds, storing the result in the receiver
    ///
    /// Orientation uses the exponential map, with the rotation in a single
    /// step clamped to a quarter of π. Small angular speeds fall back to a
    /// Taylor expansion of the sinc function.
    pub fn set_integrate(&mut self, a: Transform, linv: Vector3, angv: Vector3, dt: f64) -> &mut Self {
        self.loc = a.loc + linv * dt;

        let limit = 0.5 * HALF_PI;
        let mut ang_len = angv.len();
        if ang_len * dt > limit {
            ang_len = limit / dt;
        }
        let fac = if ang_len < 0.001 {
            0.5 * dt - dt * dt * dt * 0.020_833_333_333 * ang_len * ang_len
        } else {
            (0.5 * ang_len * dt).sin() / ang_len
        };
        let delta = Quaternion::new(
            angv.x * fac,
            angv.y * fac,
            angv.z * fac,
            (ang_len * dt * 0.5).cos(),
        );
        self.rot.set_mult(a.rot, delta).unit();
        self
    }
}
