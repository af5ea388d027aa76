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

/// A ball defined by its center and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point
    pub center: Vector3,
    /// Radius, never negative
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere, taking the absolute value of `radius`
    pub fn new(center: Vector3, radius: f64) -> Self {
        Sphere {
            center,
            radius: radius.abs(),
        }
    }
}
