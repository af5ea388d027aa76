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

/// An axis-aligned box given by its minimum and maximum corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Abox {
    /// Corner with the smallest coordinates
    pub min: Vector3,
    /// Corner with the largest coordinates
    pub max: Vector3,
}

impl Abox {
    /// Create a box from any two opposite corners
    pub fn new(a: Vector3, b: Vector3) -> Self {
        let mut min = Vector3::zero();
        let mut max = Vector3::zero();
        min.set_min(a, b);
        max.set_max(a, b);
        Abox { min, max }
    }

    /// Box center
    pub fn center(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths along each axis
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Half of the edge lengths
    pub fn half_extents(&self) -> Vector3 {
        self.size() * 0.5
    }

    /// The same box moved by `offset`
    pub fn translated(&self, offset: Vector3) -> Abox {
        Abox {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Closest point inside (or on) the box to `p`
    pub fn clamp(&self, p: Vector3) -> Vector3 {
        Vector3::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
            p.z.clamp(self.min.z, self.max.z),
        )
    }

    /// Inclusive containment test
    pub fn contains(&self, p: Vector3) -> bool {
        self.clamp(p) == p
    }

    /// The eight corner points
    pub fn corners(&self) -> [Vector3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vector3::new(a.x, a.y, a.z),
            Vector3::new(b.x, a.y, a.z),
            Vector3::new(a.x, b.y, a.z),
            Vector3::new(b.x, b.y, a.z),
            Vector3::new(a.x, a.y, b.z),
            Vector3::new(b.x, a.y, b.z),
            Vector3::new(a.x, b.y, b.z),
            Vector3::new(b.x, b.y, b.z),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_and_contains() {
        let b = Abox::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(b.clamp(Vector3::new(3.0, 0.5, -2.0)), Vector3::new(1.0, 0.5, -1.0));
        assert!(b.contains(Vector3::new(1.0, 1.0, 1.0)));
        assert!(!b.contains(Vector3::new(1.0, 1.0, 1.5)));
        assert_eq!(b.center(), Vector3::zero());
        assert_eq!(b.half_extents(), Vector3::new(1.0, 1.0, 1.0));
    }
}
