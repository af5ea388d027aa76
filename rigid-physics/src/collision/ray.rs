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
//! Ray casts against spheres, planes and boxes

use super::Contact;
use crate::math::{aeq_zero, Vector3};
use crate::shapes::{Abox, Plane, Ray, Shape, Sphere};

/// Where a ray first meets a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Hit point in world space
    pub point: Vector3,
    /// Unit surface normal at the hit point, facing the incoming ray
    pub normal: Vector3,
    /// Distance from the ray origin along its direction
    pub distance: f64,
}

impl RayHit {
    fn contact(self) -> Contact {
        Contact::new(self.point, self.normal, 0.0)
    }
}

/// Cast `ray` against a world space shape
///
/// Rays do not hit other rays.
pub fn cast_ray(ray: &Ray, shape: &Shape) -> Option<RayHit> {
    match shape {
        Shape::Sphere(s) => cast_sphere(ray, s),
        Shape::Plane(p) => cast_plane(ray, p),
        Shape::Abox(b) => cast_abox(ray, b),
        Shape::Ray(_) => None,
    }
}

pub(super) fn ray_sphere(r: &Ray, s: &Sphere) -> Option<Contact> {
    cast_sphere(r, s).map(RayHit::contact)
}

pub(super) fn ray_plane(r: &Ray, p: &Plane) -> Option<Contact> {
    cast_plane(r, p).map(RayHit::contact)
}

pub(super) fn ray_abox(r: &Ray, b: &Abox) -> Option<Contact> {
    cast_abox(r, b).map(RayHit::contact)
}

fn cast_sphere(r: &Ray, s: &Sphere) -> Option<RayHit> {
    if r.direction.is_zero() {
        return None;
    }
    let to_center = s.center - r.origin;
    let along = to_center.dot(&r.direction);
    if along < 0.0 {
        return None;
    }
    let radius_sqr = s.radius * s.radius;
    let off_axis_sqr = to_center.dot(&to_center) - along * along;
    if off_axis_sqr > radius_sqr {
        return None;
    }
    let half_chord = (radius_sqr - off_axis_sqr).sqrt();
    // An origin inside the sphere sees the far side.
    let inside = along < half_chord;
    let distance = if inside {
        along + half_chord
    } else {
        along - half_chord
    };
    let point = r.point_at(distance);
    let mut normal = point - s.center;
    normal.unit();
    Some(RayHit {
        point,
        normal: if inside { -normal } else { normal },
        distance,
    })
}

fn cast_plane(r: &Ray, p: &Plane) -> Option<RayHit> {
    let denom = r.direction.dot(&p.normal);
    if aeq_zero(denom) {
        return None;
    }
    let distance = (p.origin - r.origin).dot(&p.normal) / denom;
    if distance < 0.0 {
        return None;
    }
    let normal = if denom < 0.0 { p.normal } else { -p.normal };
    Some(RayHit {
        point: r.point_at(distance),
        normal,
        distance,
    })
}

/// Slab test, one axis at a time.
fn cast_abox(r: &Ray, b: &Abox) -> Option<RayHit> {
    if r.direction.is_zero() {
        return None;
    }
    let origin = r.origin.as_array();
    let dir = r.direction.as_array();
    let (min, max) = (b.min.as_array(), b.max.as_array());

    let mut enter = (f64::NEG_INFINITY, 0usize);
    let mut exit = (f64::INFINITY, 0usize);
    for axis in 0..3 {
        if aeq_zero(dir[axis]) {
            if origin[axis] < min[axis] || origin[axis] > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / dir[axis];
        let t1 = (min[axis] - origin[axis]) * inv;
        let t2 = (max[axis] - origin[axis]) * inv;
        let (near, far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
        if near > enter.0 {
            enter = (near, axis);
        }
        if far < exit.0 {
            exit = (far, axis);
        }
    }
    if exit.0 < enter.0.max(0.0) {
        return None;
    }

    let (distance, axis, facing) = if enter.0 >= 0.0 {
        (enter.0, enter.1, -1.0)
    } else {
        (exit.0, exit.1, 1.0)
    };
    let mut n = [0.0; 3];
    n[axis] = facing * dir[axis].signum();
    let outward = Vector3::new(n[0], n[1], n[2]);
    Some(RayHit {
        point: r.point_at(distance),
        normal: if facing < 0.0 { outward } else { -outward },
        distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ray(o: [f64; 3], d: [f64; 3]) -> Ray {
        Ray::new(Vector3::new(o[0], o[1], o[2]), Vector3::new(d[0], d[1], d[2]))
    }

    #[test]
    fn test_rays_through_sphere_silhouette() {
        let s = Sphere::new(Vector3::new(0.0, 0.0, -2.0), 1.0);
        for d in [
            [0.0, 0.0, -4.0],
            [1.0, 0.0, -4.0],
            [-1.0, 0.0, -4.0],
            [0.0, 1.0, -4.0],
            [0.0, -1.0, -4.0],
        ] {
            assert!(ray_sphere(&ray([0.0, 0.0, 2.0], d), &s).is_some(), "{d:?} should hit");
        }
        for d in [
            [1.1, 0.0, -4.0],
            [-1.1, 0.0, -4.0],
            [0.0, 1.1, -4.0],
            [0.0, -1.1, -4.0],
        ] {
            assert!(ray_sphere(&ray([0.0, 0.0, 2.0], d), &s).is_none(), "{d:?} should miss");
        }
    }

    #[test]
    fn test_sphere_hit_point() {
        let s = Sphere::new(Vector3::new(0.0, 0.0, -2.0), 1.0);
        let hit = cast_sphere(&ray([0.0, 0.0, 2.0], [0.0, 0.0, -1.0]), &s).expect("hit");
        assert_eq!(hit.point, Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(hit.normal, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(hit.distance, 3.0);
    }

    #[test]
    fn test_sphere_behind_ray() {
        let s = Sphere::new(Vector3::new(0.0, 0.0, -2.0), 1.0);
        assert!(cast_sphere(&ray([0.0, 0.0, 2.0], [0.0, 0.0, 1.0]), &s).is_none());
    }

    #[test]
    fn test_ray_plane() {
        let ground = Plane::new(Vector3::new(0.0, 1.0, 0.0), Vector3::zero());
        let hit = cast_plane(&ray([1.0, 5.0, 0.0], [0.0, -1.0, 1.0]), &ground).expect("hit");
        assert_abs_diff_eq!(hit.point.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.point.z, 5.0, epsilon = 1e-12);
        assert_eq!(hit.normal, Vector3::new(0.0, 1.0, 0.0));

        // parallel
        assert!(cast_plane(&ray([0.0, 5.0, 0.0], [1.0, 0.0, 0.0]), &ground).is_none());
        // plane behind the origin
        assert!(cast_plane(&ray([0.0, 5.0, 0.0], [0.0, 1.0, 0.0]), &ground).is_none());
    }

    #[test]
    fn test_ray_abox() {
        let b = Abox::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
        let hit = cast_abox(&ray([-5.0, 0.5, 0.0], [1.0, 0.0, 0.0]), &b).expect("hit");
        assert_eq!(hit.point, Vector3::new(-1.0, 0.5, 0.0));
        assert_eq!(hit.normal, Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(hit.distance, 4.0);

        assert!(cast_abox(&ray([-5.0, 1.5, 0.0], [1.0, 0.0, 0.0]), &b).is_none());
        assert!(cast_abox(&ray([5.0, 0.0, 0.0], [1.0, 0.0, 0.0]), &b).is_none());

        let inside = cast_abox(&ray([0.0, 0.0, 0.0], [0.0, 1.0, 0.0]), &b).expect("inside");
        assert_eq!(inside.point, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(inside.normal, Vector3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_rays_do_not_hit_rays() {
        let r = ray([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        assert!(cast_ray(&r, &Shape::Ray(r)).is_none());
    }
}
