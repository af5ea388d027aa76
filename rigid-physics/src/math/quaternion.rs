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
//! Rotation quaternions

use super::{aeq, aeq_zero, Matrix3, Vector3};

/// A quaternion `(x, y, z, w)` where `w` is the scalar part
///
/// Unit quaternions represent orientations. The default value is the
/// identity rotation `(0, 0, 0, 1)`.
///
/// # Examples
///
/// ```
/// use rigid_physics::math::Quaternion;
///
/// let mut q = Quaternion::identity();
/// q.set_axis_angle(0.0, 0.0, 1.0, std::f64::consts::PI);
/// let (_, _, _, angle) = q.axis_angle();
/// assert!((angle - std::f64::consts::PI).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    /// X component of the vector part
    pub x: f64,
    /// Y component of the vector part
    pub y: f64,
    /// Z component of the vector part
    pub z: f64,
    /// Scalar part
    pub w: f64,
}

impl Quaternion {
    /// Create a quaternion from its components
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Quaternion { x, y, z, w }
    }

    /// The identity rotation
    pub const fn identity() -> Self {
        Quaternion::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Overwrite all components
    pub fn set(&mut self, x: f64, y: f64, z: f64, w: f64) -> &mut Self {
        *self = Quaternion::new(x, y, z, w);
        self
    }

    /// Check that all components are finite
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Component-wise approximate equality
    pub fn aeq(&self, other: &Quaternion) -> bool {
        aeq(self.x, other.x) && aeq(self.y, other.y) && aeq(self.z, other.z) && aeq(self.w, other.w)
    }

    /// `self = r^-1`, the conjugate of a unit quaternion
    pub fn set_inverse(&mut self, r: Quaternion) -> &mut Self {
        self.set(-r.x, -r.y, -r.z, r.w)
    }

    /// Inverse (conjugate) copy
    pub fn inverse(&self) -> Quaternion {
        Quaternion::new(-self.x, -self.y, -self.z, self.w)
    }

    /// `self = r + s`
    pub fn set_add(&mut self, r: Quaternion, s: Quaternion) -> &mut Self {
        self.set(r.x + s.x, r.y + s.y, r.z + s.z, r.w + s.w)
    }

    /// `self = r - s`
    pub fn set_sub(&mut self, r: Quaternion, s: Quaternion) -> &mut Self {
        self.set(r.x - s.x, r.y - s.y, r.z - s.z, r.w - s.w)
    }

    /// Negate every component in place
    pub fn neg(&mut self) -> &mut Self {
        self.scale(-1.0)
    }

    /// Scale every component in place
    pub fn scale(&mut self, s: f64) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self.z *= s;
        self.w *= s;
        self
    }

    /// Divide in place
    ///
    /// Division by zero leaves the quaternion unchanged.
    pub fn div(&mut self, s: f64) -> &mut Self {
        if s == 0.0 {
            log::warn!("quaternion division by zero ignored");
            return self;
        }
        self.scale(1.0 / s)
    }

    /// Composition `self = r` followed by `s`
    ///
    /// This is the Hamilton product `s * r`: applying the result to a
    /// vector rotates it by `r` first, then by `s`.
    pub fn set_mult(&mut self, r: Quaternion, s: Quaternion) -> &mut Self {
        self.set(
            r.w * s.x + r.x * s.w - r.y * s.z + r.z * s.y,
            r.w * s.y + r.x * s.z + r.y * s.w - r.z * s.x,
            r.w * s.z - r.x * s.y + r.y * s.x + r.z * s.w,
            r.w * s.w - r.x * s.x - r.y * s.y - r.z * s.z,
        )
    }

    /// Rotation `self` followed by `next`, see [`Quaternion::set_mult`]
    pub fn then(&self, next: Quaternion) -> Quaternion {
        let mut q = Quaternion::identity();
        q.set_mult(*self, next);
        q
    }

    /// Product of `r` with the pure quaternion `(v, 0)`
    pub fn set_mult_qv(&mut self, r: Quaternion, v: Vector3) -> &mut Self {
        self.set(
            r.w * v.x + r.y * v.z - r.z * v.y,
            r.w * v.y + r.z * v.x - r.x * v.z,
            r.w * v.z + r.x * v.y - r.y * v.x,
            -r.x * v.x - r.y * v.y - r.z * v.z,
        )
    }

    /// Normalize in place
    ///
    /// A zero length quaternion is left unchanged.
    pub fn unit(&mut self) -> &mut Self {
        let length = self.len();
        if length != 0.0 {
            self.div(length);
        }
        self
    }

    /// Dot product
    pub fn dot(&self, other: &Quaternion) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length (magnitude)
    pub fn len(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Angle in radians between two unit quaternions
    pub fn ang(&self, other: &Quaternion) -> f64 {
        let d = self.dot(other);
        (2.0 * d * d - 1.0).clamp(-1.0, 1.0).acos()
    }

    /// Normalized linear interpolation between `r` and `s`
    pub fn set_nlerp(&mut self, r: Quaternion, s: Quaternion, ratio: f64) -> &mut Self {
        self.set(
            (s.x - r.x) * ratio + r.x,
            (s.y - r.y) * ratio + r.y,
            (s.z - r.z) * ratio + r.z,
            (s.w - r.w) * ratio + r.w,
        )
        .unit()
    }

    /// The rotation as `(ax, ay, az, angle)` with the angle in radians
    ///
    /// Rotations without a well defined axis report the x axis.
    pub fn axis_angle(&self) -> (f64, f64, f64, f64) {
        let angle = 2.0 * self.w.clamp(-1.0, 1.0).acos();
        let sin_sqr = 1.0 - self.w * self.w;
        if aeq_zero(sin_sqr) {
            return (1.0, 0.0, 0.0, angle);
        }
        let inv_sin = 1.0 / sin_sqr.sqrt();
        (self.x * inv_sin, self.y * inv_sin, self.z * inv_sin, angle)
    }

    /// Set to a rotation of `angle` radians about axis `(ax, ay, az)`
    ///
    /// The axis need not be unit length. A zero axis yields the identity.
    pub fn set_axis_angle(&mut self, ax: f64, ay: f64, az: f64, angle: f64) -> &mut Self {
        let len_sqr = ax * ax + ay * ay + az * az;
        if len_sqr == 0.0 {
            *self = Quaternion::identity();
            return self;
        }
        let s = (angle * 0.5).sin() / len_sqr.sqrt();
        self.set(ax * s, ay * s, az * s, (angle * 0.5).cos())
    }

    /// Set to the rotation held by a rotation matrix
    pub fn set_matrix(&mut self, m: &Matrix3) -> &mut Self {
        let trace = m.xx + m.yy + m.zz;
        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            self.set((m.zy - m.yz) / s, (m.xz - m.zx) / s, (m.yx - m.xy) / s, 0.25 * s)
        } else if m.xx > m.yy && m.xx > m.zz {
            let s = (m.xx - m.yy - m.zz + 1.0).sqrt() * 2.0;
            self.set(0.25 * s, (m.xy + m.yx) / s, (m.xz + m.zx) / s, (m.zy - m.yz) / s)
        } else if m.yy > m.zz {
            let s = (m.yy - m.xx - m.zz + 1.0).sqrt() * 2.0;
            self.set((m.xy + m.yx) / s, 0.25 * s, (m.yz + m.zy) / s, (m.xz - m.zx) / s)
        } else {
            let s = (m.zz - m.xx - m.yy + 1.0).sqrt() * 2.0;
            self.set((m.xz + m.zx) / s, (m.yz + m.zy) / s, 0.25 * s, (m.yx - m.xy) / s)
        }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::identity()
    }
}
