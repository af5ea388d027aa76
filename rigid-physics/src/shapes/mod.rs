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
//! Collision geometry
//!
//! A [`Shape`] is a closed set of primitives. Collision dispatch matches on
//! the pair of variants, so an unsupported pairing is simply "no contacts"
//! rather than a runtime type error.

mod abox;
mod plane;
mod ray;
mod sphere;

pub use abox::Abox;
pub use plane::Plane;
pub use ray::Ray;
pub use sphere::Sphere;

use std::f64::consts::PI;

use crate::math::Vector3;

/// Collision geometry attached to a body
///
/// Sphere and box coordinates are relative to the owning body's location,
/// see [`Shape::placed_at`]. Planes and rays are used as given.
///
/// # Examples
///
/// ```
/// use rigid_physics::shapes::Shape;
///
/// let ball = Shape::sphere(0.0, 0.0, 0.0, 1.0);
/// assert!((ball.volume() - 4.0 / 3.0 * std::f64::consts::PI).abs() < 1e-12);
/// assert_eq!(Shape::plane(0.0, 1.0, 0.0, 0.0, 0.0, 0.0).volume(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A ball
    Sphere(Sphere),
    /// An infinite plane
    Plane(Plane),
    /// A half-line
    Ray(Ray),
    /// An axis-aligned box
    Abox(Abox),
}

impl Shape {
    /// Sphere centered on `(cx, cy, cz)` with radius `r`
    pub fn sphere(cx: f64, cy: f64, cz: f64, r: f64) -> Shape {
        Shape::Sphere(Sphere::new(Vector3::new(cx, cy, cz), r))
    }

    /// Plane with normal `(nx, ny, nz)` passing through `(ox, oy, oz)`
    pub fn plane(nx: f64, ny: f64, nz: f64, ox: f64, oy: f64, oz: f64) -> Shape {
        Shape::Plane(Plane::new(Vector3::new(nx, ny, nz), Vector3::new(ox, oy, oz)))
    }

    /// Axis-aligned box spanning corners `(bx, by, bz)` and `(tx, ty, tz)`
    pub fn abox(bx: f64, by: f64, bz: f64, tx: f64, ty: f64, tz: f64) -> Shape {
        Shape::Abox(Abox::new(Vector3::new(bx, by, bz), Vector3::new(tx, ty, tz)))
    }

    /// Ray starting at `(ox, oy, oz)` heading along `(dx, dy, dz)`
    pub fn ray(ox: f64, oy: f64, oz: f64, dx: f64, dy: f64, dz: f64) -> Shape {
        Shape::Ray(Ray::new(Vector3::new(ox, oy, oz), Vector3::new(dx, dy, dz)))
    }

    /// Enclosed volume, 0 for planes and rays
    pub fn volume(&self) -> f64 {
        match self {
            Shape::Sphere(s) => 4.0 / 3.0 * PI * s.radius.powi(3),
            Shape::Abox(b) => {
                let size = b.size();
                size.x * size.y * size.z
            }
            Shape::Plane(_) | Shape::Ray(_) => 0.0,
        }
    }

    /// Whether the shape has an enclosed volume
    pub fn is_solid(&self) -> bool {
        matches!(self, Shape::Sphere(_) | Shape::Abox(_))
    }

    /// The shape in world space for a body at `loc`
    ///
    /// Spheres and boxes are offset by `loc`. Planes and rays are
    /// unbounded and stay where they were defined.
    pub fn placed_at(&self, loc: Vector3) -> Shape {
        match self {
            Shape::Sphere(s) => Shape::Sphere(Sphere::new(s.center + loc, s.radius)),
            Shape::Abox(b) => Shape::Abox(b.translated(loc)),
            Shape::Plane(_) | Shape::Ray(_) => *self,
        }
    }

    /// Short variant name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Plane(_) => "plane",
            Shape::Ray(_) => "ray",
            Shape::Abox(_) => "abox",
        }
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Shape::Sphere(s)
    }
}

impl From<Plane> for Shape {
    fn from(p: Plane) -> Self {
        Shape::Plane(p)
    }
}

impl From<Ray> for Shape {
    fn from(r: Ray) -> Self {
        Shape::Ray(r)
    }
}

impl From<Abox> for Shape {
    fn from(b: Abox) -> Self {
        Shape::Abox(b)
    }
}
