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
//! Linear algebra for the physics core
//!
//! All types are small `Copy` values with public fields. Binary operations
//! come in two flavors:
//!
//! - operator traits (`a + b`, `v * 2.0`, `-v`) that return new values
//! - `set_*` methods that overwrite the receiver and return `&mut Self` for
//!   chaining, e.g. `v.set_add(a, b).unit()`
//!
//! Inputs to `set_*` methods are taken by value, so passing the receiver
//! itself as an input (`v.set_add(v, w)`) is always safe.
//!
//! Angles are radians unless a function name says otherwise.

mod matrix;
mod quaternion;
mod transform;
mod vector;

pub use matrix::{Matrix3, Matrix4};
pub use quaternion::Quaternion;
pub use transform::Transform;
pub use vector::{Vector3, Vector4};

use std::f64::consts::PI;

/// Tolerance used by the approximate comparisons in this crate
pub const EPSILON: f64 = 0.000_001;

/// Half of π, a quarter turn in radians
pub const HALF_PI: f64 = PI * 0.5;

/// Degrees to radians factor
pub const DEG_RAD: f64 = PI / 180.0;

/// Radians to degrees factor
pub const RAD_DEG: f64 = 180.0 / PI;

/// Approximate equality: `|a - b| < EPSILON`
pub fn aeq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Approximately zero: `|a| < EPSILON`
pub fn aeq_zero(a: f64) -> bool {
    a.abs() < EPSILON
}

/// Clamp `value` into `[min, max]`
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Linear interpolation between `a` and `b` at `ratio` in `[0, 1]`
pub fn lerp(a: f64, b: f64, ratio: f64) -> f64 {
    a + (b - a) * ratio
}

/// Degrees to radians
pub fn rad(deg: f64) -> f64 {
    deg * DEG_RAD
}

/// Radians to degrees
pub fn deg(rad: f64) -> f64 {
    rad * RAD_DEG
}

/// Normalize an angle in degrees into `[0, 360)`
pub fn nang(deg: f64) -> f64 {
    let a = deg % 360.0;
    if a < 0.0 {
        a + 360.0
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_helpers() {
        assert!(aeq(1.0, 1.0 + EPSILON * 0.5));
        assert!(!aeq(1.0, 1.0 + EPSILON * 2.0));
        assert!(aeq_zero(-0.000_000_1));
        assert_eq!(clamp(5.0, -1.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, -1.0, 1.0), -1.0);
        assert_eq!(lerp(2.0, 4.0, 0.25), 2.5);
        assert!(aeq(deg(rad(90.0)), 90.0));
    }

    #[test]
    fn test_nang_wraps_into_range() {
        assert_eq!(nang(370.0), 10.0);
        assert_eq!(nang(-90.0), 270.0);
        assert_eq!(nang(0.0), 0.0);
    }
}
