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
//! Error types for the physics core
//!
//! Numeric guards on vectors and quaternions stay silent no-ops (they log a
//! diagnostic instead), so the only math failures surfaced here are the
//! matrix operations whose result would otherwise be meaningless.

use thiserror::Error;

use crate::body::BodyId;

/// Failures reported by the linear algebra layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// The matrix determinant is zero so no inverse exists
    #[error("matrix is singular (determinant is zero)")]
    SingularMatrix,

    /// A rotation was requested around a zero-length axis
    #[error("rotation axis has zero length")]
    ZeroAxis,
}

/// Failures reported by the world and its bodies
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// A body with this id is already registered
    #[error("body {0} is already part of the world")]
    DuplicateBody(BodyId),

    /// No body with this id is registered
    #[error("body {0} is not part of the world")]
    UnknownBody(BodyId),

    /// Step was called with a zero, negative or non-finite timestep
    #[error("invalid timestep {0}: must be positive and finite")]
    InvalidTimestep(f64),

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Propagated math failure
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, PhysicsError>;
