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

/// A half-line from an origin along a unit direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point
    pub origin: Vector3,
    /// Unit direction of travel
    pub direction: Vector3,
}

impl Ray {
    /// Create a ray, normalizing `direction`
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        if direction.is_zero() {
            log::warn!("ray created with a zero length direction");
        }
        Ray {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Point at distance `t` along the ray
    pub fn point_at(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }
}
