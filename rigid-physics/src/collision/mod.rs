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
//! Narrow-phase collision detection and ray casting
//!
//! Every routine follows the same contact convention:
//!
//! - `normal` is a unit vector pointing from shape B toward shape A, the
//!   direction A has to move to separate
//! - `depth` is the signed separation, `0` at exact touching and negative
//!   when the shapes overlap
//!
//! Pairings without an algorithm (plane against plane, ray against ray)
//! return no contacts. Reversed pairings run the forward routine and flip
//! the normals.

mod abox;
mod ray;
mod sphere;

pub use ray::{cast_ray, RayHit};

use crate::math::Vector3;
use crate::shapes::Shape;

/// One point where two shapes touch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// World space contact point
    pub position: Vector3,
    /// Unit normal pointing from shape B toward shape A
    pub normal: Vector3,
    /// Signed separation, `<= 0` for touching or overlapping shapes
    pub depth: f64,
}

impl Contact {
    /// Create a contact
    pub fn new(position: Vector3, normal: Vector3, depth: f64) -> Self {
        Contact {
            position,
            normal,
            depth,
        }
    }

    /// The same contact seen from shape B
    pub fn flipped(&self) -> Contact {
        Contact::new(self.position, -self.normal, self.depth)
    }

    /// Collapse several contacts into one representative contact
    ///
    /// Positions and normals are averaged and the deepest depth is kept.
    /// Returns `None` for an empty slice.
    pub fn summarize(contacts: &[Contact]) -> Option<Contact> {
        let first = contacts.first()?;
        if contacts.len() == 1 {
            return Some(*first);
        }
        let count = contacts.len() as f64;
        let mut position = Vector3::zero();
        let mut normal = Vector3::zero();
        let mut depth = f64::INFINITY;
        for c in contacts {
            position += c.position;
            normal += c.normal;
            depth = depth.min(c.depth);
        }
        position.div(count);
        if normal.aeq_zero() {
            normal = first.normal;
        }
        normal.unit();
        Some(Contact::new(position, normal, depth))
    }
}

/// Test two world space shapes for contact
///
/// Returns an empty vector when the shapes do not touch.
///
/// # Examples
///
/// ```
/// use rigid_physics::collision::collide;
/// use rigid_physics::math::Vector3;
/// use rigid_physics::shapes::Shape;
///
/// let a = Shape::sphere(1.0, 1.0, 0.0, 1.0);
/// let b = Shape::sphere(1.0, -1.0, 0.0, 1.0);
/// let contacts = collide(&a, &b);
/// assert_eq!(contacts.len(), 1);
/// assert_eq!(contacts[0].normal, Vector3::new(0.0, 1.0, 0.0));
/// assert_eq!(contacts[0].depth, 0.0);
/// ```
pub fn collide(a: &Shape, b: &Shape) -> Vec<Contact> {
    use Shape::*;
    let contacts = match (a, b) {
        (Sphere(sa), Sphere(sb)) => sphere::sphere_sphere(sa, sb).into_iter().collect(),
        (Sphere(s), Plane(p)) => sphere::sphere_plane(s, p).into_iter().collect(),
        (Sphere(s), Abox(x)) => sphere::sphere_abox(s, x).into_iter().collect(),
        (Sphere(s), Ray(r)) => flip(ray::ray_sphere(r, s).into_iter().collect()),
        (Abox(xa), Abox(xb)) => abox::abox_abox(xa, xb),
        (Abox(x), Plane(p)) => abox::abox_plane(x, p),
        (Abox(x), Sphere(s)) => flip(sphere::sphere_abox(s, x).into_iter().collect()),
        (Abox(x), Ray(r)) => flip(ray::ray_abox(r, x).into_iter().collect()),
        (Plane(p), Sphere(s)) => flip(sphere::sphere_plane(s, p).into_iter().collect()),
        (Plane(p), Abox(x)) => flip(abox::abox_plane(x, p)),
        (Plane(p), Ray(r)) => flip(ray::ray_plane(r, p).into_iter().collect()),
        (Ray(r), Sphere(s)) => ray::ray_sphere(r, s).into_iter().collect(),
        (Ray(r), Plane(p)) => ray::ray_plane(r, p).into_iter().collect(),
        (Ray(r), Abox(x)) => ray::ray_abox(r, x).into_iter().collect(),
        (Plane(_), Plane(_)) | (Ray(_), Ray(_)) => Vec::new(),
    };
    log::trace!(
        "{} vs {}: {} contact(s)",
        a.name(),
        b.name(),
        contacts.len()
    );
    contacts
}

fn flip(contacts: Vec<Contact>) -> Vec<Contact> {
    contacts.iter().map(Contact::flipped).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unsupported_pairs_are_empty() {
        let p = Shape::plane(0.0, 1.0, 0.0, 0.0, 0.0, 0.0);
        let q = Shape::plane(1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert!(collide(&p, &q).is_empty());
        let r = Shape::ray(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        assert!(collide(&r, &r).is_empty());
    }

    #[test]
    fn test_reversed_pairs_flip_normals() {
        let s = Shape::sphere(0.0, 0.5, 0.0, 1.0);
        let b = Shape::abox(-1.0, -1.0, -1.0, 1.0, 0.0, 1.0);
        let p = Shape::plane(0.0, 1.0, 0.0, 0.0, 0.0, 0.0);
        for (a, b) in [(s, b), (s, p), (b, p)] {
            let forward = collide(&a, &b);
            let backward = collide(&b, &a);
            assert!(!forward.is_empty());
            assert_eq!(forward.len(), backward.len());
            for (f, r) in forward.iter().zip(backward.iter()) {
                assert!(f.normal.aeq(&-r.normal));
                assert_abs_diff_eq!(f.depth, r.depth);
            }
        }
    }

    #[test]
    fn test_summarize() {
        assert!(Contact::summarize(&[]).is_none());
        let contacts = [
            Contact::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0), -0.5),
            Contact::new(Vector3::new(2.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0), -0.25),
        ];
        let c = Contact::summarize(&contacts).expect("two contacts");
        assert_eq!(c.position, Vector3::new(1.0, 0.0, 0.0));
        assert!(c.normal.aeq(&Vector3::new(1.0, 1.0, 0.0).normalized()));
        assert_eq!(c.depth, -0.5);
    }
}
