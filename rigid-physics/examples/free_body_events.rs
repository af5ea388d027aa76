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
//! Free body example
//!
//! A player-controlled box walks through a row of crates. The player is a
//! free body: physics never moves it, it only reports what the player
//! touched, and the crates get shoved out of the way.

use rigid_physics::math::Vector3;
use rigid_physics::{Body, Result, Shape, World, WorldConfig};

const PLAYER: u64 = 1;

fn main() -> Result<()> {
    env_logger::init();

    println!("Rigid Physics - Free Body Events");
    println!("================================\n");

    let mut world = World::with_config(WorldConfig::default().with_damping(0.5))?;
    world.add_body(Body::new(100, 0.0, 0.0).with_shape(Shape::plane(0.0, 1.0, 0.0, 0.0, 0.0, 0.0)))?;
    world.add_body(
        Body::new(PLAYER, 1.0, 80.0)
            .with_shape(Shape::abox(-0.4, 0.0, -0.4, 0.4, 1.8, 0.4))
            .with_free(true),
    )?;
    for i in 0..4 {
        world.add_body(
            Body::new(10 + i, 1.0, 5.0)
                .with_shape(Shape::abox(-0.5, -0.5, -0.5, 0.5, 0.5, 0.5))
                .with_location(2.0 + i as f64 * 2.5, 0.5, (i % 2) as f64 * 0.6 - 0.3),
        )?;
    }

    let dt = 1.0 / 60.0;
    let speed = 2.0;
    for tick in 0..360 {
        if let Some(player) = world.body_mut(PLAYER) {
            let x = tick as f64 * dt * speed;
            player.set_location(Vector3::new(x, 0.0, 0.0));
        }
        world.step(dt)?;

        for event in world.drain_events() {
            let touched: Vec<String> = event
                .others()
                .iter()
                .filter(|id| **id != 100)
                .map(|id| id.to_string())
                .collect();
            if touched.is_empty() {
                continue;
            }
            let deepest = event.deepest().map(|c| c.depth).unwrap_or_default();
            println!(
                "t={:5.2}s  body {} touched [{}], deepest {:.3}",
                tick as f64 * dt,
                event.body,
                touched.join(", "),
                deepest
            );
        }
    }

    println!("\nFinal crate positions:");
    for body in world.bodies().filter(|b| b.id() >= 10 && b.id() < 100) {
        let loc = body.location();
        println!("  crate {}: ({:.2}, {:.2}, {:.2})", body.id(), loc.x, loc.y, loc.z);
    }
    Ok(())
}
