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
//! The simulation world
//!
//! A [`World`] owns its bodies and advances them one fixed step at a time.
//! Every step runs three phases:
//!
//! 1. **Move**: integrate dynamic bodies that are moving or under gravity,
//!    and note every body whose location changed, including free bodies and
//!    bodies the application teleported.
//! 2. **Collide**: test each moved body against every other body with a
//!    shape. Unordered pairs are tested once.
//! 3. **Resolve**: bounce and separate physics-driven bodies and queue one
//!    [`ContactEvent`] per free body.
//!
//! The broad phase is all-pairs, so cost grows with `moved × bodies`. It is
//! meant for scenes with tens to low hundreds of bodies.

use std::collections::{BTreeMap, BTreeSet};

use crate::body::{Body, BodyId};
use crate::collision::{self, Contact, RayHit};
use crate::config::WorldConfig;
use crate::error::{PhysicsError, Result};
use crate::events::{BodyContact, ContactEvent};
use crate::integration::validate_timestep;
use crate::math::Vector3;
use crate::motion::Motion;
use crate::shapes::{Ray, Shape};
use crate::solver;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Counters describing one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Bodies whose location changed
    pub moved: usize,
    /// Shape pairs handed to the narrow phase
    pub pairs_tested: usize,
    /// Pairs that produced at least one contact
    pub collisions: usize,
}

// A pair of bodies found touching, with the shapes they were tested with
#[derive(Debug, Clone)]
struct Collision {
    a: BodyId,
    b: BodyId,
    shape_a: Shape,
    shape_b: Shape,
    contacts: Vec<Contact>,
}

// A pair of bodies about to be tested
type Candidate = (BodyId, BodyId, Shape, Shape);

/// Body registry and stepper
///
/// Bodies are visited in ascending id order, so a world fed the same inputs
/// produces the same results.
///
/// # Examples
///
/// ```
/// use rigid_physics::body::Body;
/// use rigid_physics::shapes::Shape;
/// use rigid_physics::world::World;
///
/// let mut world = World::new();
/// world.add_body(Body::new(1, 0.0, 0.0).with_shape(Shape::plane(0.0, 1.0, 0.0, 0.0, 0.0, 0.0)))?;
/// world.add_body(
///     Body::new(2, 1.0, 1.0)
///         .with_shape(Shape::sphere(0.0, 0.0, 0.0, 0.5))
///         .with_location(0.0, 2.0, 0.0),
/// )?;
///
/// for _ in 0..120 {
///     world.step(1.0 / 60.0)?;
/// }
/// // the ball has landed and stays above the floor
/// let y = world.body(2).map(|b| b.location().y).unwrap_or_default();
/// assert!(y > 0.4 && y < 2.0);
/// # Ok::<(), rigid_physics::error::PhysicsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct World {
    config: WorldConfig,
    bodies: BTreeMap<BodyId, Body>,
    events: Vec<ContactEvent>,
}

impl World {
    /// An empty world with the default configuration
    pub fn new() -> Self {
        World::default()
    }

    /// An empty world with a validated configuration
    pub fn with_config(config: WorldConfig) -> Result<Self> {
        config.validate()?;
        Ok(World {
            config,
            ..World::default()
        })
    }

    /// The active configuration
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Replace the configuration, keeping the old one if validation fails
    pub fn set_config(&mut self, config: WorldConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Set the gravitational acceleration along -Y
    pub fn set_gravity(&mut self, gravity: f64) -> Result<()> {
        self.set_config(self.config.with_gravity(gravity))
    }

    /// Set linear and angular damping
    pub fn set_damping(&mut self, damping: f64) -> Result<()> {
        self.set_config(self.config.with_damping(damping))
    }

    /// Register a body
    ///
    /// # Errors
    ///
    /// [`PhysicsError::DuplicateBody`] when the id is already taken.
    pub fn add_body(&mut self, body: Body) -> Result<()> {
        let id = body.id();
        if self.bodies.contains_key(&id) {
            return Err(PhysicsError::DuplicateBody(id));
        }
        log::debug!("adding body {id}");
        self.bodies.insert(id, body);
        Ok(())
    }

    /// Unregister a body, handing it back
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        let removed = self.bodies.remove(&id);
        if removed.is_some() {
            log::debug!("removed body {id}");
        }
        removed
    }

    /// Remove every body and drop pending events, keeping the configuration
    pub fn reset(&mut self) {
        log::debug!("resetting world with {} bodies", self.bodies.len());
        self.bodies.clear();
        self.events.clear();
    }

    /// Look up a body
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(&id)
    }

    /// Look up a body for modification
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(&id)
    }

    /// All bodies in id order
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.values()
    }

    /// Number of registered bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the world has no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// # Errors
    ///
    /// [`PhysicsError::InvalidTimestep`] for a zero, negative or non-finite
    /// `dt`. Nothing is changed in that case.
    pub fn step(&mut self, dt: f64) -> Result<StepStats> {
        validate_timestep(dt)?;
        let moved = self.move_bodies(dt);
        let (pairs_tested, collisions) = self.find_collisions(&moved);
        let stats = StepStats {
            moved: moved.len(),
            pairs_tested,
            collisions: collisions.len(),
        };
        self.resolve(collisions);
        log::debug!(
            "step {dt}: {} moved, {} pairs tested, {} collisions",
            stats.moved,
            stats.pairs_tested,
            stats.collisions
        );
        Ok(stats)
    }

    /// Check one body for collisions right now and resolve them
    ///
    /// Useful after teleporting a body between steps. Returns the number of
    /// bodies it touches.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::UnknownBody`] when no body has this id.
    pub fn collide(&mut self, id: BodyId) -> Result<usize> {
        if !self.bodies.contains_key(&id) {
            return Err(PhysicsError::UnknownBody(id));
        }
        let (_, collisions) = self.find_collisions(&[id]);
        let count = collisions.len();
        self.resolve(collisions);
        Ok(count)
    }

    /// Take the contact events queued since the last call
    pub fn drain_events(&mut self) -> Vec<ContactEvent> {
        std::mem::take(&mut self.events)
    }

    /// The nearest body hit by `ray`
    ///
    /// Bodies whose shape is itself a ray are ignored.
    pub fn cast_ray(&self, ray: &Ray) -> Option<(BodyId, RayHit)> {
        self.bodies
            .iter()
            .filter_map(|(id, body)| {
                let shape = body.world_shape()?;
                collision::cast_ray(ray, &shape).map(|hit| (*id, hit))
            })
            .min_by(|a, b| a.1.distance.total_cmp(&b.1.distance))
    }

    /// Sum of kinetic energy over all bodies
    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.values().map(|b| b.motion().kinetic_energy()).sum()
    }

    /// Sum of linear momentum over all bodies
    pub fn total_momentum(&self) -> Vector3 {
        self.bodies
            .values()
            .fold(Vector3::zero(), |acc, b| acc + b.linear_momentum())
    }

    fn move_bodies(&mut self, dt: f64) -> Vec<BodyId> {
        let forces = self.config.forces();
        let integrator = self.config.integrator.integrator();
        let mut moved = Vec::new();
        for (id, body) in self.bodies.iter_mut() {
            let teleported = body.has_moved();
            body.snapshot();
            let motion = body.motion();
            let integrate = !body.is_free()
                && !motion.is_static()
                && (motion.is_moving() || forces.accelerates(motion));
            if integrate {
                integrator.integrate(body.motion_mut(), &forces, dt);
                if !body.motion().is_valid() {
                    log::warn!("body {id} has a non-finite state after integration");
                }
            }
            if integrate || teleported {
                moved.push(*id);
            }
        }
        moved
    }

    // Returns the number of candidate pairs and the ones that touch
    fn find_collisions(&self, moved: &[BodyId]) -> (usize, Vec<Collision>) {
        let mut seen = BTreeSet::new();
        let mut candidates: Vec<Candidate> = Vec::new();
        for &a in moved {
            let Some(body_a) = self.bodies.get(&a) else {
                continue;
            };
            let Some(shape_a) = body_a.world_shape() else {
                continue;
            };
            for (&b, body_b) in &self.bodies {
                if a == b || (inert(body_a) && inert(body_b)) {
                    continue;
                }
                let Some(shape_b) = body_b.world_shape() else {
                    continue;
                };
                if seen.insert((a.min(b), a.max(b))) {
                    candidates.push((a, b, shape_a, shape_b));
                }
            }
        }
        let tested = candidates.len();
        (tested, narrow_phase(candidates))
    }

    fn resolve(&mut self, collisions: Vec<Collision>) {
        let mut pending: BTreeMap<BodyId, Vec<BodyContact>> = BTreeMap::new();
        for c in collisions {
            let (Some(body_a), Some(body_b)) = (self.bodies.get(&c.a), self.bodies.get(&c.b)) else {
                continue;
            };
            let (free_a, free_b) = (body_a.is_free(), body_b.is_free());
            let (mut mo_a, mut mo_b) = (*body_a.motion(), *body_b.motion());

            if free_a {
                pending
                    .entry(c.a)
                    .or_default()
                    .extend(c.contacts.iter().map(|k| BodyContact::new(k, c.b)));
            }
            if free_b {
                pending
                    .entry(c.b)
                    .or_default()
                    .extend(c.contacts.iter().map(|k| BodyContact::new(&k.flipped(), c.a)));
            }

            match (free_a, free_b) {
                (true, true) => continue,
                (false, true) => {
                    self.respond(&c.shape_a, &c.shape_b, &c.contacts, &mut mo_a, None);
                    self.store(c.a, mo_a);
                }
                (true, false) => {
                    let flipped: Vec<Contact> = c.contacts.iter().map(Contact::flipped).collect();
                    self.respond(&c.shape_b, &c.shape_a, &flipped, &mut mo_b, None);
                    self.store(c.b, mo_b);
                }
                (false, false) => {
                    self.respond(&c.shape_a, &c.shape_b, &c.contacts, &mut mo_a, Some(&mut mo_b));
                    self.store(c.a, mo_a);
                    self.store(c.b, mo_b);
                }
            }
        }
        self.events.extend(
            pending
                .into_iter()
                .map(|(body, contacts)| ContactEvent { body, contacts }),
        );
    }

    // Bounce and separate the physics-driven side(s) of a pair. A side
    // pushed out of an immovable partner also pays for the lift and may
    // settle on it.
    fn respond(
        &self,
        shape_a: &Shape,
        shape_b: &Shape,
        contacts: &[Contact],
        mo_a: &mut Motion,
        mut mo_b: Option<&mut Motion>,
    ) {
        let Some(summary) = Contact::summarize(contacts) else {
            return;
        };
        solver::bounce(
            shape_a,
            shape_b,
            contacts,
            mo_a,
            mo_b.as_deref_mut(),
            &self.config.restitution,
        );
        solver::correct_positions(&summary, mo_a, mo_b.as_deref_mut());

        let a_fixed = mo_a.is_static();
        let b_fixed = mo_b.as_deref().map_or(true, Motion::is_static);
        let (lift, gravity) = (-summary.depth, self.config.gravity);
        if b_fixed {
            solver::limit_rebound(mo_a, summary.normal, lift, gravity);
            if let Some(rule) = &self.config.rest {
                solver::settle(mo_a, summary.normal, rule);
            }
        }
        if let (true, Some(mo_b)) = (a_fixed, mo_b) {
            solver::limit_rebound(mo_b, -summary.normal, lift, gravity);
            if let Some(rule) = &self.config.rest {
                solver::settle(mo_b, -summary.normal, rule);
            }
        }
    }

    fn store(&mut self, id: BodyId, motion: Motion) {
        if let Some(body) = self.bodies.get_mut(&id) {
            *body.motion_mut() = motion;
        }
    }
}

// Static bodies that the application does not drive never need resolving
// against each other
fn inert(body: &Body) -> bool {
    body.is_static() && !body.is_free()
}

fn test_pair((a, b, shape_a, shape_b): Candidate) -> Option<Collision> {
    let contacts = collision::collide(&shape_a, &shape_b);
    if contacts.is_empty() {
        return None;
    }
    Some(Collision {
        a,
        b,
        shape_a,
        shape_b,
        contacts,
    })
}

fn narrow_phase(candidates: Vec<Candidate>) -> Vec<Collision> {
    #[cfg(feature = "parallel")]
    {
        candidates.into_par_iter().filter_map(test_pair).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        candidates.into_iter().filter_map(test_pair).collect()
    }
}
