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
//! Ray picking example
//!
//! Casts a fan of rays from a camera position into a small scene and
//! reports which body each ray hits first.

use rigid_physics::math::{rad, Quaternion, Vector3};
use rigid_physics::shapes::Ray;
use rigid_physics::{Body, Result, Shape, World};

fn main() -> Result<()> {
    env_logger::init();

    println!("Rigid Physics - Ray Picking");
    println!("===========================\n");

    let mut world = World::new();
    world.add_body(Body::new(1, 0.0, 0.0).with_shape(Shape::plane(0.0, 1.0, 0.0, 0.0, 0.0, 0.0)))?;
    world.add_body(
        Body::new(2, 1.0, 1.0)
            .with_shape(Shape::sphere(0.0, 0.0, 0.0, 1.0))
            .with_location(-2.0, 1.0, -8.0),
    )?;
    world.add_body(
        Body::new(3, 1.0, 1.0)
            .with_shape(Shape::abox(-1.0, 0.0, -1.0, 1.0, 3.0, 1.0))
            .with_location(2.5, 0.0, -10.0),
    )?;
    world.add_body(
        Body::new(4, 1.0, 1.0)
            .with_shape(Shape::sphere(0.0, 0.0, 0.0, 0.5))
            .with_location(0.5, 0.5, -5.0),
    )?;

    let eye = Vector3::new(0.0, 1.5, 0.0);
    let forward = Vector3::new(0.0, -0.1, -1.0);
    for step in -6..=6 {
        let mut turn = Quaternion::identity();
        turn.set_axis_angle(0.0, 1.0, 0.0, rad(step as f64 * 5.0));
        let ray = Ray::new(eye, forward.rotated(turn));

        match world.cast_ray(&ray) {
            Some((id, hit)) => println!(
                "{:+4} deg: body {} at ({:6.2}, {:5.2}, {:6.2}), distance {:.2}",
                step * 5,
                id,
                hit.point.x,
                hit.point.y,
                hit.point.z,
                hit.distance
            ),
            None => println!("{:+4} deg: nothing", step * 5),
        }
    }
    Ok(())
}
