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
use crate::math::Vector3;

/// An infinite plane given by a unit normal and a point on the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal
    pub normal: Vector3,
    /// Any point on the plane
    pub origin: Vector3,
}

impl Plane {
    /// Create a plane, normalizing `normal`
    ///
    /// A zero normal is kept as is and then never collides with anything.
    pub fn new(normal: Vector3, origin: Vector3) -> Self {
        if normal.is_zero() {
            log::warn!("plane created with a zero length normal");
        }
        Plane {
            normal: normal.normalized(),
            origin,
        }
    }

    /// Signed distance from the plane to `p`, positive on the normal side
    pub fn signed_distance(&self, p: Vector3) -> f64 {
        (p - self.origin).dot(&self.normal)
    }

    /// Closest point on the plane to `p`
    pub fn project(&self, p: Vector3) -> Vector3 {
        p - self.normal * self.signed_distance(p)
    }
}
