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
//! Sphere against sphere, plane and box

use super::Contact;
use crate::math::{Vector3, EPSILON};
use crate::shapes::{Abox, Plane, Sphere};

/// Touching or overlapping spheres give one contact on B's surface
pub(super) fn sphere_sphere(a: &Sphere, b: &Sphere) -> Option<Contact> {
    let reach = a.radius + b.radius;
    let diff = a.center - b.center;
    let separation = diff.len();
    if separation > reach {
        return None;
    }
    // Coincident centers have no preferred direction.
    let normal = if separation < EPSILON {
        Vector3::new(1.0, 0.0, 0.0)
    } else {
        diff * (1.0 / separation)
    };
    let position = b.center + normal * b.radius;
    Some(Contact::new(position, normal, separation - reach))
}

pub(super) fn sphere_plane(s: &Sphere, p: &Plane) -> Option<Contact> {
    if p.normal.is_zero() {
        return None;
    }
    let distance = p.signed_distance(s.center);
    if distance.abs() > s.radius {
        return None;
    }
    let normal = if distance >= 0.0 { p.normal } else { -p.normal };
    Some(Contact::new(p.project(s.center), normal, distance.abs() - s.radius))
}

/// Nearest point on the box decides the contact. A center inside the box
/// is pushed out through the closest face.
pub(super) fn sphere_abox(s: &Sphere, b: &Abox) -> Option<Contact> {
    let closest = b.clamp(s.center);
    let diff = s.center - closest;
    let distance = diff.len();
    if distance > s.radius {
        return None;
    }
    if distance > 0.0 {
        return Some(Contact::new(
            closest,
            diff * (1.0 / distance),
            distance - s.radius,
        ));
    }

    let c = s.center;
    let faces = [
        (c.x - b.min.x, Vector3::new(-1.0, 0.0, 0.0)),
        (b.max.x - c.x, Vector3::new(1.0, 0.0, 0.0)),
        (c.y - b.min.y, Vector3::new(0.0, -1.0, 0.0)),
        (b.max.y - c.y, Vector3::new(0.0, 1.0, 0.0)),
        (c.z - b.min.z, Vector3::new(0.0, 0.0, -1.0)),
        (b.max.z - c.z, Vector3::new(0.0, 0.0, 1.0)),
    ];
    let (face_distance, normal) = faces
        .into_iter()
        .fold((f64::INFINITY, Vector3::zero()), |best, face| {
            if face.0 < best.0 {
                face
            } else {
                best
            }
        });
    let position = c + normal * face_distance;
    Some(Contact::new(position, normal, -face_distance - s.radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sphere(x: f64, y: f64, z: f64, r: f64) -> Sphere {
        Sphere::new(Vector3::new(x, y, z), r)
    }

    fn unit_box() -> Abox {
        Abox::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_tangent_spheres() {
        let c = sphere_sphere(&sphere(1.0, 1.0, 0.0, 1.0), &sphere(1.0, -1.0, 0.0, 1.0))
            .expect("touching");
        assert_eq!(c.normal, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(c.depth, 0.0);
        assert_eq!(c.position, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_separate_spheres() {
        assert!(sphere_sphere(&sphere(1.0, 1.0, 1.0, 1.0), &sphere(-1.0, -1.0, -1.0, 1.0)).is_none());
    }

    #[test]
    fn test_overlapping_spheres() {
        let c = sphere_sphere(&sphere(1.0, 1.0, 1.0, 1.0), &sphere(2.0, 2.0, 2.0, 1.0))
            .expect("overlap");
        let n = -1.0 / 3f64.sqrt();
        assert!(c.normal.aeq(&Vector3::new(n, n, n)));
        assert_abs_diff_eq!(c.depth, 3f64.sqrt() - 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_coincident_spheres() {
        let c = sphere_sphere(&sphere(0.0, 0.0, 0.0, 1.0), &sphere(0.0, 0.0, 0.0, 0.5))
            .expect("overlap");
        assert_eq!(c.normal, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(c.depth, -1.5);
    }

    #[test]
    fn test_sphere_plane_sides() {
        let ground = Plane::new(Vector3::new(0.0, 1.0, 0.0), Vector3::zero());
        let above = sphere_plane(&sphere(3.0, 0.5, 0.0, 1.0), &ground).expect("touching");
        assert_eq!(above.normal, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(above.depth, -0.5);
        assert_eq!(above.position, Vector3::new(3.0, 0.0, 0.0));

        let below = sphere_plane(&sphere(0.0, -0.75, 0.0, 1.0), &ground).expect("touching");
        assert_eq!(below.normal, Vector3::new(0.0, -1.0, 0.0));
        assert_eq!(below.depth, -0.25);

        assert!(sphere_plane(&sphere(0.0, 1.5, 0.0, 1.0), &ground).is_none());
    }

    #[test]
    fn test_sphere_abox_faces() {
        let c = sphere_abox(&sphere(-1.5, 0.0, 0.0, 1.0), &unit_box()).expect("overlap");
        assert_eq!(c.normal, Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(c.depth, -0.5);

        let c = sphere_abox(&sphere(1.5, 0.0, 0.0, 1.0), &unit_box()).expect("overlap");
        assert_eq!(c.normal, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(c.depth, -0.5);

        let c = sphere_abox(&sphere(0.0, 2.0, 0.0, 1.0), &unit_box()).expect("touching");
        assert_eq!(c.normal, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(c.depth, 0.0);
    }

    #[test]
    fn test_sphere_abox_miss() {
        let b = Abox::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::zero());
        assert!(sphere_abox(&sphere(1.0, 1.0, 1.0, 1.0), &b).is_none());
    }

    #[test]
    fn test_sphere_center_inside_abox() {
        let c = sphere_abox(&sphere(0.0, 0.75, 0.0, 0.5), &unit_box()).expect("inside");
        assert_eq!(c.normal, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(c.position, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(c.depth, -0.75);
    }
}
