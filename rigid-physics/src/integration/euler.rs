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
//! Symplectic (semi-implicit) Euler integrator
//!
//! ```text
//! p(t+dt) = p(t) + F(t) * dt
//! L(t+dt) = L(t) + τ(t) * dt
//! x(t+dt) = x(t) + v(t+dt) * dt
//! q(t+dt) = exp(ω(t+dt) * dt) * q(t)
//! ```
//!
//! Updating momentum before position makes the scheme symplectic, which
//! keeps energy bounded in oscillating systems at first-order cost.

use super::{Forces, Integrator};
use crate::math::Transform;
use crate::motion::Motion;

/// Semi-implicit Euler integrator
///
/// Cheaper than [`Rk4Integrator`](super::Rk4Integrator) with one force
/// evaluation per step. Orientation is advanced with the exponential map
/// of [`Transform::set_integrate`], which caps a single step at a quarter
/// turn of π.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymplecticEulerIntegrator;

impl Integrator for SymplecticEulerIntegrator {
    fn name(&self) -> &str {
        "Symplectic Euler"
    }

    fn integrate(&self, motion: &mut Motion, forces: &Forces, dt: f64) {
        if motion.is_static() {
            return;
        }
        let (force, torque) = forces.apply(motion);
        motion.set_linear_momentum(motion.linear_momentum() + force * dt);
        motion.set_angular_momentum(motion.angular_momentum() + torque * dt);

        let mut next = Transform::identity();
        next.set_integrate(
            motion.transform(),
            motion.linear_velocity(),
            motion.angular_velocity(),
            dt,
        );
        motion.set_location(next.loc);
        motion.set_orientation(next.rot);
    }
}
