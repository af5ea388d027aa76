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
//! Contact response
//!
//! Collisions are resolved in one pass without iteration. For each colliding
//! pair, [`bounce`] changes the momenta and [`correct_positions`] pushes the
//! shapes apart along the contact normal. A body pushed out of an immovable
//! support gives back the energy the push added ([`limit_rebound`]), and an
//! optional [`settle`] rule then stops bodies that have come to rest on it.
//!
//! Momentum handed out by a collision always switches gravity back on for a
//! motion that was settled.
//!
//! All contacts follow the collision module's convention: the normal points
//! from shape B toward shape A and the depth is `<= 0` when touching.

use crate::collision::Contact;
use crate::config::{RestRule, Restitution};
use crate::math::Vector3;
use crate::motion::Motion;
use crate::shapes::Shape;

/// Change momenta in response to contact
///
/// `mo2` is `None` when shape B has no motion, for example a level plane
/// that belongs to no body. Several contacts are reduced to one with
/// [`Contact::summarize`].
///
/// - A ray hands all its momentum to the shape it hits.
/// - A body hitting a plane, or a body without motion, has its momentum
///   reflected about the normal and scaled by `restitution.surfaces`.
/// - Two dynamic bodies exchange an impulse along the normal using
///   `restitution.bodies`, including the angular response at the contact
///   point.
///
/// Bodies already separating along the normal are left alone.
///
/// # Examples
///
/// ```
/// use rigid_physics::collision::collide;
/// use rigid_physics::config::Restitution;
/// use rigid_physics::math::{Quaternion, Vector3};
/// use rigid_physics::motion::Motion;
/// use rigid_physics::shapes::Shape;
/// use rigid_physics::solver::bounce;
///
/// let ball = Shape::sphere(1.0, 1.0, 1.0, 1.0);
/// let wall = Shape::plane(1.0, 0.0, 0.0, 1.0, 1.0, 1.0);
/// let mut mo = Motion::new(1.0, 1.0, Vector3::zero(), Quaternion::identity());
/// mo.set_linear_momentum(Vector3::new(-1.0, -1.0, -1.0));
///
/// let contacts = collide(&ball, &wall);
/// bounce(&ball, &wall, &contacts, &mut mo, None, &Restitution::default());
/// assert!(mo.linear_momentum().aeq(&Vector3::new(0.9, -0.9, -0.9)));
/// ```
pub fn bounce(
    a: &Shape,
    b: &Shape,
    contacts: &[Contact],
    mo1: &mut Motion,
    mo2: Option<&mut Motion>,
    restitution: &Restitution,
) {
    let Some(contact) = Contact::summarize(contacts) else {
        return;
    };
    let n = contact.normal;
    match (a, b, mo2) {
        (Shape::Ray(_), _, Some(mo2)) => {
            impart(mo2, mo2.linear_momentum() + mo1.linear_momentum());
            mo1.set_linear_momentum(Vector3::zero());
        }
        (_, Shape::Ray(_), Some(mo2)) => {
            impart(mo1, mo1.linear_momentum() + mo2.linear_momentum());
            mo2.set_linear_momentum(Vector3::zero());
        }
        (Shape::Ray(_), _, None) | (_, Shape::Ray(_), None) => {}
        (Shape::Plane(_), _, Some(mo2)) => reflect(mo2, -n, restitution.surfaces),
        (_, Shape::Plane(_), _) | (_, _, None) => reflect(mo1, n, restitution.surfaces),
        (_, _, Some(mo2)) => match (mo1.is_static(), mo2.is_static()) {
            (true, true) => {}
            (false, true) => reflect(mo1, n, restitution.surfaces),
            (true, false) => reflect(mo2, -n, restitution.surfaces),
            (false, false) => {
                let r1 = contact.position - centroid(a, mo1);
                let r2 = contact.position - centroid(b, mo2);
                exchange(mo1, mo2, r1, r2, n, restitution.bodies);
            }
        },
    }
}

/// Push overlapping shapes apart along the contact normal
///
/// Two dynamic motions share the correction in proportion to their inverse
/// masses. A single dynamic motion takes all of it. Static motions never
/// move.
pub fn correct_positions(contact: &Contact, mo1: &mut Motion, mo2: Option<&mut Motion>) {
    if contact.depth >= 0.0 {
        return;
    }
    let push = contact.normal * -contact.depth;
    let im1 = mo1.inverse_mass();
    let im2 = mo2.as_ref().map_or(0.0, |m| m.inverse_mass());
    let total = im1 + im2;
    if total == 0.0 {
        return;
    }
    if im1 > 0.0 {
        mo1.set_location(mo1.location() + push * (im1 / total));
    }
    if let Some(mo2) = mo2 {
        if im2 > 0.0 {
            mo2.set_location(mo2.location() - push * (im2 / total));
        }
    }
}

/// Take back the energy gained by pushing a body up out of a support
///
/// Lifting a body by `lift` along `normal` against `gravity` (along -Y)
/// raises its potential energy. The outgoing normal speed is reduced by the
/// same amount so contact never makes a body bounce higher than it fell.
///
/// # Examples
///
/// ```
/// use rigid_physics::math::{Quaternion, Vector3};
/// use rigid_physics::motion::Motion;
/// use rigid_physics::solver::limit_rebound;
///
/// let mut m = Motion::new(1.0, 1.0, Vector3::zero(), Quaternion::identity());
/// m.set_linear_momentum(Vector3::new(0.0, 1.0, 0.0));
/// limit_rebound(&mut m, Vector3::new(0.0, 1.0, 0.0), 0.01, 10.0);
/// assert!((m.linear_velocity().y - 0.8f64.sqrt()).abs() < 1e-12);
/// ```
pub fn limit_rebound(motion: &mut Motion, normal: Vector3, lift: f64, gravity: f64) {
    if lift <= 0.0 || motion.is_static() || !motion.gravity_enabled() {
        return;
    }
    let climb = gravity * normal.y;
    let speed = motion.linear_velocity().dot(&normal);
    if climb <= 0.0 || speed <= 0.0 {
        return;
    }
    let kept = (speed * speed - 2.0 * climb * lift).max(0.0).sqrt();
    motion.set_linear_momentum(motion.linear_momentum() + normal * ((kept - speed) * motion.mass()));
}

/// Put a slow body resting on a supporting surface to sleep
///
/// `normal` must point toward the body and the support must be immovable.
/// A body still moving faster than `rule.max_speed` in any direction, for
/// example rolling along the floor, stays awake. Returns `true` when the
/// body was stopped: its linear momentum is zeroed and gravity no longer
/// acts on it.
pub fn settle(motion: &mut Motion, normal: Vector3, rule: &RestRule) -> bool {
    if motion.is_static() || normal.y < rule.min_support {
        return false;
    }
    if motion.linear_velocity().len() > rule.max_speed {
        return false;
    }
    motion.set_linear_momentum(Vector3::zero());
    motion.set_gravity_enabled(false);
    true
}

// Where impulses act from: the shape center for solids, the body otherwise
fn centroid(shape: &Shape, motion: &Motion) -> Vector3 {
    match shape {
        Shape::Sphere(s) => s.center,
        Shape::Abox(b) => b.center(),
        Shape::Plane(_) | Shape::Ray(_) => motion.location(),
    }
}

// New momentum from a collision wakes a settled motion
fn impart(motion: &mut Motion, momentum: Vector3) {
    motion.set_linear_momentum(momentum);
    if !motion.is_static() && !momentum.is_zero() {
        motion.set_gravity_enabled(true);
    }
}

// Mirror momentum about `n` if it heads into the surface
fn reflect(motion: &mut Motion, n: Vector3, coefficient: f64) {
    let p = motion.linear_momentum();
    let into = p.dot(&n);
    if into >= 0.0 {
        return;
    }
    impart(motion, (p - n * (2.0 * into)) * coefficient);
}

fn exchange(mo1: &mut Motion, mo2: &mut Motion, r1: Vector3, r2: Vector3, n: Vector3, e: f64) {
    let v1 = mo1.linear_velocity() + mo1.angular_velocity().cross(&r1);
    let v2 = mo2.linear_velocity() + mo2.angular_velocity().cross(&r2);
    let approach = (v1 - v2).dot(&n);
    if approach >= 0.0 {
        return;
    }
    let rn1 = r1.cross(&n);
    let rn2 = r2.cross(&n);
    let denominator = mo1.inverse_mass()
        + mo2.inverse_mass()
        + mo1.inverse_angular_mass() * rn1.len_sqr()
        + mo2.inverse_angular_mass() * rn2.len_sqr();
    if denominator == 0.0 {
        return;
    }
    let impulse = n * (-(1.0 + e) * approach / denominator);
    impart(mo1, mo1.linear_momentum() + impulse);
    impart(mo2, mo2.linear_momentum() - impulse);
    mo1.set_angular_momentum(mo1.angular_momentum() + r1.cross(&impulse));
    mo2.set_angular_momentum(mo2.angular_momentum() - r2.cross(&impulse));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::collide;
    use crate::math::Quaternion;
    use approx::assert_abs_diff_eq;

    fn motion(mass: f64, p: Vector3) -> Motion {
        let mut m = Motion::new(1.0, mass, Vector3::zero(), Quaternion::identity());
        m.set_linear_momentum(p);
        m
    }

    #[test]
    fn test_sphere_bounce_conserves_momentum() {
        let s1 = Shape::sphere(1.0, 1.0, 1.0, 1.0);
        let s2 = Shape::sphere(2.0, 2.0, 2.0, 1.0);
        let mut mo1 = motion(s1.volume() * 10.0, Vector3::new(1.0, 1.0, 1.0));
        let mut mo2 = motion(s2.volume() * 20.0, Vector3::new(-1.0, -1.0, -1.0));
        let before = mo1.linear_momentum() + mo2.linear_momentum();

        let contacts = collide(&s1, &s2);
        bounce(&s1, &s2, &contacts, &mut mo1, Some(&mut mo2), &Restitution::default());

        assert!(mo1.linear_momentum().aeq(&Vector3::new(-1.0, -1.0, -1.0)));
        assert!(mo2.linear_momentum().aeq(&Vector3::new(1.0, 1.0, 1.0)));
        assert!((mo1.linear_momentum() + mo2.linear_momentum()).aeq(&before));
        assert!(mo1.angular_momentum().aeq_zero());
    }

    #[test]
    fn test_separating_spheres_are_left_alone() {
        let s1 = Shape::sphere(1.0, 1.0, 1.0, 1.0);
        let s2 = Shape::sphere(2.0, 2.0, 2.0, 1.0);
        let mut mo1 = motion(1.0, Vector3::new(-1.0, -1.0, -1.0));
        let mut mo2 = motion(2.0, Vector3::new(1.0, 1.0, 1.0));
        let contacts = collide(&s1, &s2);
        bounce(&s1, &s2, &contacts, &mut mo1, Some(&mut mo2), &Restitution::default());
        assert_eq!(mo1.linear_momentum(), Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(mo2.linear_momentum(), Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_plane_bounce_reflects() {
        let s = Shape::sphere(1.0, 1.0, 1.0, 1.0);
        let p = Shape::plane(1.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let mut mo = motion(s.volume() * 10.0, Vector3::new(-1.0, -1.0, -1.0));
        let contacts = collide(&s, &p);
        bounce(&s, &p, &contacts, &mut mo, None, &Restitution::default());
        assert!(mo.linear_momentum().aeq(&Vector3::new(0.9, -0.9, -0.9)));

        // plane first: the sphere is shape B
        let mut mo = motion(1.0, Vector3::new(-1.0, -1.0, -1.0));
        let mut plane_motion = motion(0.0, Vector3::zero());
        let contacts = collide(&p, &s);
        bounce(&p, &s, &contacts, &mut plane_motion, Some(&mut mo), &Restitution::default());
        assert!(mo.linear_momentum().aeq(&Vector3::new(0.9, -0.9, -0.9)));
    }

    #[test]
    fn test_ray_bounce_transfers_momentum() {
        let s = Shape::sphere(1.0, 1.0, 1.0, 1.0);
        let ray = Shape::ray(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let mut mo1 = motion(s.volume() * 10.0, Vector3::new(-1.0, -1.0, -1.0));
        let mut mo2 = motion(1.0, Vector3::new(-1.0, -1.0, -1.0));
        let contacts = collide(&s, &ray);
        assert!(!contacts.is_empty());
        bounce(&s, &ray, &contacts, &mut mo1, Some(&mut mo2), &Restitution::default());
        assert_eq!(mo1.linear_momentum(), Vector3::new(-2.0, -2.0, -2.0));
        assert_eq!(mo2.linear_momentum(), Vector3::zero());
    }

    #[test]
    fn test_static_partner_acts_as_surface() {
        let ball = Shape::sphere(0.0, 1.0, 0.0, 1.0);
        let floor = Shape::abox(-5.0, -1.0, -5.0, 5.0, 0.0, 5.0);
        let mut mo1 = motion(1.0, Vector3::new(0.0, -2.0, 0.0));
        let mut mo2 = motion(0.0, Vector3::zero());
        let contacts = collide(&ball, &floor);
        bounce(&ball, &floor, &contacts, &mut mo1, Some(&mut mo2), &Restitution::default());
        assert!(mo1.linear_momentum().aeq(&Vector3::new(0.0, 1.8, 0.0)));
        assert!(mo2.linear_momentum().is_zero());
    }

    #[test]
    fn test_off_center_impulse_spins() {
        // box B is struck below its center
        let a = Shape::sphere(0.0, -0.4, 2.0, 0.5);
        let b = Shape::abox(-0.5, -0.5, -0.5, 0.5, 0.5, 0.5);
        let mut mo1 = motion(1.0, Vector3::new(0.0, 0.0, -1.0));
        let mut mo2 = motion(1.0, Vector3::zero());
        let contacts = vec![Contact::new(Vector3::new(0.0, -0.4, 0.5), Vector3::new(0.0, 0.0, 1.0), 0.0)];
        bounce(&a, &b, &contacts, &mut mo1, Some(&mut mo2), &Restitution::default());
        let total = mo1.linear_momentum() + mo2.linear_momentum();
        assert!(total.aeq(&Vector3::new(0.0, 0.0, -1.0)));
        assert!(mo2.angular_momentum().x != 0.0);
        assert!(mo2.linear_momentum().z < 0.0);
    }

    #[test]
    fn test_correct_positions_splits_by_inverse_mass() {
        let contact = Contact::new(Vector3::zero(), Vector3::new(0.0, 1.0, 0.0), -0.3);
        let mut mo1 = motion(1.0, Vector3::zero());
        let mut mo2 = motion(2.0, Vector3::zero());
        correct_positions(&contact, &mut mo1, Some(&mut mo2));
        assert_abs_diff_eq!(mo1.location().y, 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(mo2.location().y, -0.1, epsilon = 1e-12);

        let mut mo1 = motion(1.0, Vector3::zero());
        let mut floor = motion(0.0, Vector3::zero());
        correct_positions(&contact, &mut mo1, Some(&mut floor));
        assert_abs_diff_eq!(mo1.location().y, 0.3, epsilon = 1e-12);
        assert!(floor.location().is_zero());

        let mut mo1 = motion(1.0, Vector3::zero());
        correct_positions(&contact, &mut mo1, None);
        assert_abs_diff_eq!(mo1.location().y, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_settle() {
        let rule = RestRule::default();
        let up = Vector3::new(0.0, 1.0, 0.0);

        let mut slow = motion(1.0, Vector3::new(0.2, 0.3, 0.0));
        assert!(settle(&mut slow, up, &rule));
        assert!(slow.linear_momentum().is_zero());
        assert!(!slow.gravity_enabled());

        let mut fast = motion(1.0, Vector3::new(0.0, 3.0, 0.0));
        assert!(!settle(&mut fast, up, &rule));
        assert!(fast.gravity_enabled());

        let mut wall = motion(1.0, Vector3::new(0.0, 0.1, 0.0));
        assert!(!settle(&mut wall, Vector3::new(1.0, 0.0, 0.0), &rule));

        // rolling along the floor is not resting
        let mut rolling = motion(1.0, Vector3::new(4.0, 0.1, 0.0));
        assert!(!settle(&mut rolling, up, &rule));
        assert_eq!(rolling.linear_momentum(), Vector3::new(4.0, 0.1, 0.0));
    }

    #[test]
    fn test_struck_settled_motion_wakes() {
        let top = Shape::sphere(0.0, 1.5, 0.0, 0.5);
        let bottom = Shape::sphere(0.0, 0.5, 0.0, 0.5);
        let mut falling = motion(1.0, Vector3::new(0.0, -2.0, 0.0));
        let mut resting = motion(1.0, Vector3::zero());
        assert!(settle(&mut resting, Vector3::new(0.0, 1.0, 0.0), &RestRule::default()));

        let contacts = collide(&top, &bottom);
        bounce(&top, &bottom, &contacts, &mut falling, Some(&mut resting), &Restitution::default());
        assert!(resting.linear_momentum().aeq(&Vector3::new(0.0, -2.0, 0.0)));
        assert!(resting.gravity_enabled());
        assert!(falling.gravity_enabled());
    }

    #[test]
    fn test_ray_transfer_wakes_target() {
        let s = Shape::sphere(1.0, 1.0, 1.0, 1.0);
        let ray = Shape::ray(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let mut target = motion(1.0, Vector3::zero());
        target.set_gravity_enabled(false);
        let mut bullet = motion(1.0, Vector3::new(1.0, 1.0, 1.0));
        let contacts = collide(&s, &ray);
        bounce(&s, &ray, &contacts, &mut target, Some(&mut bullet), &Restitution::default());
        assert!(target.gravity_enabled());
        assert_eq!(target.linear_momentum(), Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_limit_rebound() {
        let up = Vector3::new(0.0, 1.0, 0.0);

        let mut m = motion(2.0, Vector3::new(3.0, 2.0, 0.0));
        limit_rebound(&mut m, up, 0.01, 10.0);
        assert_abs_diff_eq!(m.linear_velocity().y, 0.8f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(m.linear_velocity().x, 1.5, epsilon = 1e-12);

        // more lift than the rebound can pay for stops the body
        let mut m = motion(1.0, Vector3::new(0.0, 0.1, 0.0));
        limit_rebound(&mut m, up, 0.01, 10.0);
        assert_abs_diff_eq!(m.linear_velocity().y, 0.0, epsilon = 1e-12);

        // walls and weightless bodies keep their speed
        let mut m = motion(1.0, Vector3::new(1.0, 0.0, 0.0));
        limit_rebound(&mut m, Vector3::new(1.0, 0.0, 0.0), 0.01, 10.0);
        assert_eq!(m.linear_velocity().x, 1.0);
        let mut m = motion(1.0, Vector3::new(0.0, 1.0, 0.0));
        m.set_gravity_enabled(false);
        limit_rebound(&mut m, up, 0.01, 10.0);
        assert_eq!(m.linear_velocity().y, 1.0);
    }
}
