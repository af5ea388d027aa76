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
//! # Rigid Physics
//!
//! A small rigid-body physics core: linear algebra, collision shapes,
//! narrow-phase contact generation, RK4 motion integration and a single pass
//! contact solver, driven by a fixed-timestep [`World`].
//!
//! ## Features
//!
//! - **Shapes**: spheres, planes, rays and axis-aligned boxes
//! - **Integration**: RK4 by default, symplectic Euler as a cheaper option
//! - **Contact response**: bounce, penetration correction and an optional
//!   settle rule for bodies resting on a floor
//! - **Free bodies**: application-driven bodies that receive contact events
//!   instead of being pushed around
//! - **Parallelization**: optional Rayon narrow phase behind the `parallel`
//!   feature
//!
//! ## Example
//!
//! ```rust
//! use rigid_physics::{Body, Shape, World};
//!
//! let mut world = World::new();
//! world.add_body(Body::new(1, 0.0, 0.0).with_shape(Shape::plane(0.0, 1.0, 0.0, 0.0, 0.0, 0.0)))?;
//! world.add_body(
//!     Body::new(2, 1.0, 1.0)
//!         .with_shape(Shape::sphere(0.0, 0.0, 0.0, 0.5))
//!         .with_location(0.0, 3.0, 0.0),
//! )?;
//!
//! let stats = world.step(1.0 / 60.0)?;
//! assert_eq!(stats.moved, 1);
//! # Ok::<(), rigid_physics::PhysicsError>(())
//! ```

#![warn(missing_docs)]

/// Vectors, quaternions, matrices and transforms
pub mod math;

/// Collision geometry
pub mod shapes;

/// Narrow-phase contact generation and ray casting
pub mod collision;

/// Per-body dynamic state
pub mod motion;

/// Numerical integration methods
pub mod integration;

/// Bounce, penetration correction and settling
pub mod solver;

/// Simulated bodies
pub mod body;

/// Contact reports for free bodies
pub mod events;

/// World configuration
pub mod config;

/// Body registry and stepper
pub mod world;

/// Error types
pub mod error;

pub use body::{Body, BodyId};
pub use collision::{Contact, RayHit};
pub use config::{RestRule, Restitution, WorldConfig};
pub use error::{MathError, PhysicsError, Result};
pub use events::{BodyContact, ContactEvent};
pub use integration::IntegratorKind;
pub use math::{Matrix3, Matrix4, Quaternion, Transform, Vector3, Vector4};
pub use shapes::Shape;
pub use world::{StepStats, World};
