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
//! Box against box and plane

use super::Contact;
use crate::math::Vector3;
use crate::shapes::{Abox, Plane};

const AXES: [Vector3; 3] = [
    Vector3::new(1.0, 0.0, 0.0),
    Vector3::new(0.0, 1.0, 0.0),
    Vector3::new(0.0, 0.0, 1.0),
];

/// Separating axis test on the three world axes.
///
/// Boxes must overlap strictly on every axis. Each axis of minimum overlap
/// yields one contact, so a box sitting exactly on a corner of another can
/// report two or three.
pub(super) fn abox_abox(a: &Abox, b: &Abox) -> Vec<Contact> {
    let lo = Vector3::new(a.min.x.max(b.min.x), a.min.y.max(b.min.y), a.min.z.max(b.min.z));
    let hi = Vector3::new(a.max.x.min(b.max.x), a.max.y.min(b.max.y), a.max.z.min(b.max.z));
    let overlap = hi - lo;
    let overlaps = overlap.as_array();
    if overlaps.iter().any(|o| *o <= 0.0) {
        return Vec::new();
    }

    let least = overlaps.iter().copied().fold(f64::INFINITY, f64::min);
    let position = (lo + hi) * 0.5;
    let (ca, cb) = (a.center().as_array(), b.center().as_array());
    overlaps
        .iter()
        .enumerate()
        .filter(|(_, o)| **o == least)
        .map(|(axis, o)| {
            let sign = if ca[axis] < cb[axis] { -1.0 } else { 1.0 };
            Contact::new(position, AXES[axis] * sign, -o)
        })
        .collect()
}

/// Every corner on or behind the plane becomes a contact. The plane normal
/// is turned toward the side holding the box center.
pub(super) fn abox_plane(b: &Abox, p: &Plane) -> Vec<Contact> {
    if p.normal.is_zero() {
        return Vec::new();
    }
    let normal = if p.signed_distance(b.center()) >= 0.0 {
        p.normal
    } else {
        -p.normal
    };
    b.corners()
        .into_iter()
        .filter_map(|corner| {
            let distance = (corner - p.origin).dot(&normal);
            (distance <= 0.0).then(|| Contact::new(corner, normal, distance))
        })
        .collect()
}
