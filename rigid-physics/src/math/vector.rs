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
//! Three and four element vectors

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{Matrix3, Matrix4, Quaternion, Transform, EPSILON};

/// A 3D vector of double-precision components
///
/// Used for locations, directions, momenta and velocities.
///
/// # Examples
///
/// ```
/// use rigid_physics::math::Vector3;
///
/// let mut v = Vector3::new(3.0, 0.0, 4.0);
/// assert_eq!(v.len(), 5.0);
/// v.unit();
/// assert_eq!(v, Vector3::new(0.6, 0.0, 0.8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Vector3 {
    /// Create a vector from its components
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// The zero vector
    pub const fn zero() -> Self {
        Vector3::new(0.0, 0.0, 0.0)
    }

    /// Overwrite all components
    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Check that all components are finite
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Exact zero check on every component
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Component-wise approximate equality
    pub fn aeq(&self, other: &Vector3) -> bool {
        super::aeq(self.x, other.x) && super::aeq(self.y, other.y) && super::aeq(self.z, other.z)
    }

    /// Squared length is approximately zero
    pub fn aeq_zero(&self) -> bool {
        self.dot(self) < EPSILON
    }

    /// Components as an array
    pub fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product `self x other`
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Length (magnitude)
    pub fn len(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Squared length
    pub fn len_sqr(&self) -> f64 {
        self.dot(self)
    }

    /// Distance to another point
    pub fn dist(&self, other: &Vector3) -> f64 {
        self.dist_sqr(other).sqrt()
    }

    /// Squared distance to another point
    pub fn dist_sqr(&self, other: &Vector3) -> f64 {
        (*other - *self).len_sqr()
    }

    /// Angle in radians between two vectors
    ///
    /// Returns 0 when either vector has zero length.
    pub fn ang(&self, other: &Vector3) -> f64 {
        let magnitude = (self.dot(self) * other.dot(other)).sqrt();
        if magnitude == 0.0 {
            log::warn!("angle requested between zero length vectors");
            return 0.0;
        }
        (self.dot(other) / magnitude).clamp(-1.0, 1.0).acos()
    }

    /// `self = a + b`
    pub fn set_add(&mut self, a: Vector3, b: Vector3) -> &mut Self {
        *self = a + b;
        self
    }

    /// `self = a - b`
    pub fn set_sub(&mut self, a: Vector3, b: Vector3) -> &mut Self {
        *self = a - b;
        self
    }

    /// Component-wise product `self = a * b`
    pub fn set_mult(&mut self, a: Vector3, b: Vector3) -> &mut Self {
        self.set(a.x * b.x, a.y * b.y, a.z * b.z)
    }

    /// `self = a * s`
    pub fn set_scale(&mut self, a: Vector3, s: f64) -> &mut Self {
        *self = a * s;
        self
    }

    /// `self = a x b`
    pub fn set_cross(&mut self, a: Vector3, b: Vector3) -> &mut Self {
        *self = a.cross(&b);
        self
    }

    /// `self = -a`
    pub fn set_neg(&mut self, a: Vector3) -> &mut Self {
        *self = -a;
        self
    }

    /// Component-wise minimum of `a` and `b`
    pub fn set_min(&mut self, a: Vector3, b: Vector3) -> &mut Self {
        self.set(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
    }

    /// Component-wise maximum of `a` and `b`
    pub fn set_max(&mut self, a: Vector3, b: Vector3) -> &mut Self {
        self.set(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
    }

    /// Divide in place
    ///
    /// Division by zero leaves the vector unchanged.
    pub fn div(&mut self, s: f64) -> &mut Self {
        if s == 0.0 {
            log::warn!("vector division by zero ignored");
            return self;
        }
        let inv = 1.0 / s;
        self.x *= inv;
        self.y *= inv;
        self.z *= inv;
        self
    }

    /// Normalize in place to length 1
    ///
    /// A zero length vector is left unchanged.
    pub fn unit(&mut self) -> &mut Self {
        let length = self.len();
        if length != 0.0 {
            self.div(length);
        }
        self
    }

    /// Normalized copy
    pub fn normalized(&self) -> Vector3 {
        let mut v = *self;
        v.unit();
        v
    }

    /// Linear interpolation between `a` and `b`
    pub fn set_lerp(&mut self, a: Vector3, b: Vector3, ratio: f64) -> &mut Self {
        *self = a + (b - a) * ratio;
        self
    }

    /// Normalized linear interpolation between `a` and `b`
    pub fn set_nlerp(&mut self, a: Vector3, b: Vector3, ratio: f64) -> &mut Self {
        self.set_lerp(a, b, ratio).unit()
    }

    /// Two unit vectors perpendicular to this (unit) normal and to each other
    pub fn plane_space(&self) -> (Vector3, Vector3) {
        let root_half = std::f64::consts::FRAC_1_SQRT_2;
        if self.z.abs() > root_half {
            let a = self.y * self.y + self.z * self.z;
            let k = 1.0 / a.sqrt();
            let p = Vector3::new(0.0, -self.z * k, self.y * k);
            let q = Vector3::new(a * k, -self.x * p.z, self.x * p.y);
            (p, q)
        } else {
            let a = self.x * self.x + self.y * self.y;
            let k = 1.0 / a.sqrt();
            let p = Vector3::new(-self.y * k, self.x * k, 0.0);
            let q = Vector3::new(-self.z * p.y, self.z * p.x, a * k);
            (p, q)
        }
    }

    /// Rotate `v` by quaternion `q`
    ///
    /// `q` is expected to be unit length.
    pub fn set_rotate(&mut self, v: Vector3, q: Quaternion) -> &mut Self {
        let axis = Vector3::new(q.x, q.y, q.z);
        let k0 = q.w * q.w - 0.5;
        let k1 = v.dot(&axis);
        let r = v * k0 + axis * k1 + axis.cross(&v) * q.w;
        *self = r * 2.0;
        self
    }

    /// Rotated copy, see [`Vector3::set_rotate`]
    pub fn rotated(&self, q: Quaternion) -> Vector3 {
        let mut v = Vector3::zero();
        v.set_rotate(*self, q);
        v
    }

    /// Row vector times matrix: `self = rv * m`
    pub fn set_mult_vm(&mut self, rv: Vector3, m: &Matrix3) -> &mut Self {
        self.set(
            rv.x * m.xx + rv.y * m.yx + rv.z * m.zx,
            rv.x * m.xy + rv.y * m.yy + rv.z * m.zy,
            rv.x * m.xz + rv.y * m.yz + rv.z * m.zz,
        )
    }

    /// Matrix times column vector: `self = m * cv`
    pub fn set_mult_mv(&mut self, m: &Matrix3, cv: Vector3) -> &mut Self {
        self.set(
            m.xx * cv.x + m.xy * cv.y + m.xz * cv.z,
            m.yx * cv.x + m.yy * cv.y + m.yz * cv.z,
            m.zx * cv.x + m.zy * cv.y + m.zz * cv.z,
        )
    }

    /// Apply transform `t` (rotate, then translate) to point `a`
    pub fn set_app_t(&mut self, t: &Transform, a: Vector3) -> &mut Self {
        *self = t.app(a);
        self
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, s: f64) -> Vector3 {
        Vector3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, s: f64) {
        *self = *self * s;
    }
}

/// A 4D vector, mostly used with [`Matrix4`] for homogeneous coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector4 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
    /// W component
    pub w: f64,
}

impl Vector4 {
    /// Create a vector from its components
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Vector4 { x, y, z, w }
    }

    /// Overwrite all components
    pub fn set(&mut self, x: f64, y: f64, z: f64, w: f64) -> &mut Self {
        *self = Vector4::new(x, y, z, w);
        self
    }

    /// Component-wise approximate equality
    pub fn aeq(&self, other: &Vector4) -> bool {
        super::aeq(self.x, other.x)
            && super::aeq(self.y, other.y)
            && super::aeq(self.z, other.z)
            && super::aeq(self.w, other.w)
    }

    /// Dot product
    pub fn dot(&self, other: &Vector4) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length (magnitude)
    pub fn len(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// `self = a + b`
    pub fn set_add(&mut self, a: Vector4, b: Vector4) -> &mut Self {
        self.set(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
    }

    /// `self = a - b`
    pub fn set_sub(&mut self, a: Vector4, b: Vector4) -> &mut Self {
        self.set(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
    }

    /// `self = a * s`
    pub fn set_scale(&mut self, a: Vector4, s: f64) -> &mut Self {
        self.set(a.x * s, a.y * s, a.z * s, a.w * s)
    }

    /// Divide in place, ignoring division by zero
    pub fn div(&mut self, s: f64) -> &mut Self {
        if s == 0.0 {
            log::warn!("vector division by zero ignored");
            return self;
        }
        let inv = 1.0 / s;
        let v = *self;
        self.set_scale(v, inv)
    }

    /// Normalize in place, zero length is left unchanged
    pub fn unit(&mut self) -> &mut Self {
        let length = self.len();
        if length != 0.0 {
            self.div(length);
        }
        self
    }

    /// Row vector times matrix: `self = rv * m`
    pub fn set_mult_vm(&mut self, rv: Vector4, m: &Matrix4) -> &mut Self {
        self.set(
            rv.x * m.xx + rv.y * m.yx + rv.z * m.zx + rv.w * m.wx,
            rv.x * m.xy + rv.y * m.yy + rv.z * m.zy + rv.w * m.wy,
            rv.x * m.xz + rv.y * m.yz + rv.z * m.zz + rv.w * m.wz,
            rv.x * m.xw + rv.y * m.yw + rv.z * m.zw + rv.w * m.ww,
        )
    }

    /// Matrix times column vector: `self = m * cv`
    pub fn set_mult_mv(&mut self, m: &Matrix4, cv: Vector4) -> &mut Self {
        self.set(
            m.xx * cv.x + m.xy * cv.y + m.xz * cv.z + m.xw * cv.w,
            m.yx * cv.x + m.yy * cv.y + m.yz * cv.z + m.yw * cv.w,
            m.zx * cv.x + m.zy * cv.y + m.zz * cv.z + m.zw * cv.w,
            m.wx * cv.x + m.wy * cv.y + m.wz * cv.z + m.ww * cv.w,
        )
    }
}
