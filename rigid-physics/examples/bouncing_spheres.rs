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
//! Bouncing spheres example
//!
//! Drops a handful of balls of different sizes onto a floor and prints
//! their heights until they settle. Run with `RUST_LOG=debug` to see the
//! per-step summaries.

use rigid_physics::{Body, Result, Shape, World, WorldConfig};

fn main() -> Result<()> {
    env_logger::init();

    println!("Rigid Physics - Bouncing Spheres");
    println!("================================\n");

    let mut world = World::with_config(WorldConfig::default())?;
    world.add_body(Body::new(0, 0.0, 0.0).with_shape(Shape::plane(0.0, 1.0, 0.0, 0.0, 0.0, 0.0)))?;

    let radii = [0.25, 0.5, 0.75, 1.0];
    for (i, radius) in radii.iter().enumerate() {
        let shape = Shape::sphere(0.0, 0.0, 0.0, *radius);
        // mass from volume at the density of rubber
        let mass = shape.volume() * 1100.0;
        world.add_body(
            Body::new(i as u64 + 1, 2.0 * radius, mass)
                .with_shape(shape)
                .with_location(i as f64 * 3.0, 4.0 + i as f64, 0.0),
        )?;
    }
    println!("Created {} bodies", world.len());

    let dt = 1.0 / 60.0;
    for tick in 0..=600 {
        let stats = world.step(dt)?;
        if tick % 30 == 0 {
            let heights: Vec<String> = world
                .bodies()
                .filter(|b| !b.is_static())
                .map(|b| format!("{:6.3}", b.location().y))
                .collect();
            println!(
                "t={:5.2}s  heights [{}]  collisions {}",
                tick as f64 * dt,
                heights.join(", "),
                stats.collisions
            );
        }
        if stats.moved == 0 {
            println!("\nEverything is at rest after {:.2}s", tick as f64 * dt);
            break;
        }
    }

    for body in world.bodies().filter(|b| !b.is_static()) {
        println!(
            "  body {}: y = {:.3}, awake = {}",
            body.id(),
            body.location().y,
            body.is_awake()
        );
    }
    Ok(())
}
