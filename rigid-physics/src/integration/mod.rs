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
//! Numerical integration of body motion
//!
//! Each integrator advances one [`Motion`] by a timestep under the world's
//! [`Forces`]. Two schemes are provided:
//!
//! - **RK4**: four force evaluations per step, each at a tentative state
//!   advanced by the previous stage. Orientation is summed component-wise
//!   and renormalized.
//! - **Symplectic Euler**: one force evaluation, momentum first and then
//!   position, with the orientation advanced by the exponential map.
//!
//! # Timestep Guidelines
//!
//! - Too small: precision loss in f64 accumulation
//! - Too large: instability and tunnelling through thin shapes
//! - Recommended: a fixed step such as 1/60 s, driven by the caller

use crate::error::{PhysicsError, Result};
use crate::motion::Motion;

mod euler;
mod forces;
mod rk4;

pub use euler::SymplecticEulerIntegrator;
pub use forces::Forces;
pub use rk4::Rk4Integrator;

/// Trait for numerical integration methods
///
/// Integrators are stateless: every call reads the motion and forces it is
/// given and writes the advanced state back into the motion. Static motions
/// are left untouched.
pub trait Integrator: Send + Sync {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Advance `motion` by `dt` seconds under `forces`
    fn integrate(&self, motion: &mut Motion, forces: &Forces, dt: f64);
}

/// Selects the integrator a world steps its bodies with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorKind {
    /// Classic fourth order Runge-Kutta
    #[default]
    Rk4,
    /// Semi-implicit Euler
    SymplecticEuler,
}

impl IntegratorKind {
    /// The integrator implementing this kind
    pub fn integrator(self) -> &'static dyn Integrator {
        match self {
            IntegratorKind::Rk4 => &Rk4Integrator,
            IntegratorKind::SymplecticEuler => &SymplecticEulerIntegrator,
        }
    }
}

/// Validate a timestep before stepping
///
/// Non-positive and non-finite values are rejected. Values that are valid
/// but likely to misbehave (below 1 ns, where f64 accumulation loses
/// precision, or above 1 s, where integration becomes unstable) only log a
/// warning.
pub fn validate_timestep(dt: f64) -> Result<()> {
    if dt <= 0.0 || !dt.is_finite() {
        return Err(PhysicsError::InvalidTimestep(dt));
    }
    if dt < 1e-9 {
        log::warn!("timestep {dt} is extremely small and may lose precision");
    } else if dt > 1.0 {
        log::warn!("timestep {dt} is large and may cause instability");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Quaternion, Vector3};

    #[test]
    fn test_validate_timestep() {
        assert!(validate_timestep(1.0 / 60.0).is_ok());
        assert!(validate_timestep(1e-12).is_ok());
        assert!(validate_timestep(2.0).is_ok());
        for dt in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                validate_timestep(dt),
                Err(PhysicsError::InvalidTimestep(_))
            ));
        }
    }

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(IntegratorKind::default(), IntegratorKind::Rk4);
        assert_eq!(IntegratorKind::Rk4.integrator().name(), "RK4");
        assert_eq!(
            IntegratorKind::SymplecticEuler.integrator().name(),
            "Symplectic Euler"
        );
    }

    #[test]
    fn test_static_motion_is_untouched() {
        let forces = Forces::new(9.81, 0.5, 0.5);
        for kind in [IntegratorKind::Rk4, IntegratorKind::SymplecticEuler] {
            let mut m = Motion::new(1.0, 0.0, Vector3::new(1.0, 2.0, 3.0), Quaternion::identity());
            let before = m;
            kind.integrator().integrate(&mut m, &forces, 0.1);
            assert_eq!(m, before);
        }
    }
}
