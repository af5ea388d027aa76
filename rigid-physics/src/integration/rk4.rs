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
//! Runge-Kutta 4th order integrator
//!
//! ```text
//! d1 = f(state)
//! d2 = f(state advanced by d1 over dt/2)
//! d3 = f(state advanced by d2 over dt/2)
//! d4 = f(state advanced by d3 over dt)
//! state += (d1 + 2*d2 + 2*d3 + d4) * dt/6
//! ```
//!
//! Each stage works on a fresh copy of the starting state. The orientation
//! is treated as a 4-vector in the weighted sum and renormalized afterwards,
//! which is an approximation of true rotational integration.
//!
//! # Properties
//!
//! - **Fourth-order accurate** for smooth forces
//! - **Not symplectic**: energy drifts over long runs
//! - **Four force evaluations per step**

use super::{Forces, Integrator};
use crate::math::{Quaternion, Vector3};
use crate::motion::Motion;

/// Runge-Kutta 4th order integrator
///
/// # Example
///
/// ```
/// use rigid_physics::integration::{Forces, Integrator, Rk4Integrator};
/// use rigid_physics::math::{Quaternion, Vector3};
/// use rigid_physics::motion::Motion;
///
/// let mut m = Motion::new(1.0, 1.0, Vector3::zero(), Quaternion::identity());
/// Rk4Integrator.integrate(&mut m, &Forces::new(10.0, 0.0, 0.0), 0.1);
/// // constant acceleration is integrated exactly: y = -g t² / 2
/// assert!((m.location().y + 0.05).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk4Integrator;

/// Rates of change of one motion state
#[derive(Debug, Clone, Copy)]
struct Derivative {
    velocity: Vector3,
    force: Vector3,
    spin: Quaternion,
    torque: Vector3,
}

// Evaluate the derivative after advancing a copy of `state` by `previous`
fn derive(mut state: Motion, forces: &Forces, dt: f64, previous: Option<&Derivative>) -> Derivative {
    if let Some(d) = previous {
        state.set_location(state.location() + d.velocity * dt);
        state.set_linear_momentum(state.linear_momentum() + d.force * dt);
        state.set_orientation(quat_weighted(state.orientation(), [(d.spin, dt)]));
        state.set_angular_momentum(state.angular_momentum() + d.torque * dt);
    }
    let (force, torque) = forces.apply(&state);
    Derivative {
        velocity: state.linear_velocity(),
        force,
        spin: state.spin(),
        torque,
    }
}

// base + sum(q * weight), component-wise
fn quat_weighted<const N: usize>(base: Quaternion, terms: [(Quaternion, f64); N]) -> Quaternion {
    terms.iter().fold(base, |acc, (q, w)| {
        Quaternion::new(acc.x + q.x * w, acc.y + q.y * w, acc.z + q.z * w, acc.w + q.w * w)
    })
}

impl Integrator for Rk4Integrator {
    fn name(&self) -> &str {
        "RK4"
    }

    fn integrate(&self, motion: &mut Motion, forces: &Forces, dt: f64) {
        if motion.is_static() {
            return;
        }
        let d1 = derive(*motion, forces, 0.0, None);
        let d2 = derive(*motion, forces, dt * 0.5, Some(&d1));
        let d3 = derive(*motion, forces, dt * 0.5, Some(&d2));
        let d4 = derive(*motion, forces, dt, Some(&d3));

        let amount = dt / 6.0;
        let blend = |a: Vector3, b: Vector3, c: Vector3, d: Vector3| (a + (b + c) * 2.0 + d) * amount;

        motion.set_location(motion.location() + blend(d1.velocity, d2.velocity, d3.velocity, d4.velocity));
        motion.set_linear_momentum(motion.linear_momentum() + blend(d1.force, d2.force, d3.force, d4.force));
        motion.set_orientation(quat_weighted(
            motion.orientation(),
            [
                (d1.spin, amount),
                (d2.spin, 2.0 * amount),
                (d3.spin, 2.0 * amount),
                (d4.spin, amount),
            ],
        ));
        motion.set_angular_momentum(motion.angular_momentum() + blend(d1.torque, d2.torque, d3.torque, d4.torque));
    }
}
