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
//! Benchmarks for world stepping and the integrators
//!
//! These benchmarks measure:
//! - Full step throughput for growing body counts
//! - Cost of one integration step per integrator

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rigid_physics::integration::{Forces, Integrator, IntegratorKind};
use rigid_physics::math::{Quaternion, Vector3};
use rigid_physics::motion::Motion;
use rigid_physics::{Body, Shape, World, WorldConfig};

// A floor plus a loose grid of falling balls and boxes
fn setup_world(body_count: usize, integrator: IntegratorKind) -> World {
    let config = WorldConfig::default().with_integrator(integrator);
    let mut world = World::with_config(config).expect("valid config");
    world
        .add_body(Body::new(0, 0.0, 0.0).with_shape(Shape::plane(0.0, 1.0, 0.0, 0.0, 0.0, 0.0)))
        .expect("unique id");
    let side = (body_count as f64).sqrt().ceil() as usize;
    for i in 0..body_count {
        let x = (i % side) as f64 * 1.5;
        let z = (i / side) as f64 * 1.5;
        let shape = if i % 2 == 0 {
            Shape::sphere(0.0, 0.0, 0.0, 0.5)
        } else {
            Shape::abox(-0.5, -0.5, -0.5, 0.5, 0.5, 0.5)
        };
        let mut body = Body::new(i as u64 + 1, 1.0, 1.0)
            .with_shape(shape)
            .with_location(x, 2.0 + (i % 7) as f64, z);
        body.set_angular_momentum(0.0, 0.1 * (i % 3) as f64, 0.0);
        world.add_body(body).expect("unique id");
    }
    world
}

fn bench_step_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_step");

    for body_count in [10, 50, 100, 200].iter() {
        group.throughput(Throughput::Elements(*body_count as u64));

        group.bench_with_input(BenchmarkId::new("rk4", body_count), body_count, |b, &n| {
            let mut world = setup_world(n, IntegratorKind::Rk4);
            b.iter(|| black_box(world.step(1.0 / 60.0)))
        });

        group.bench_with_input(
            BenchmarkId::new("symplectic_euler", body_count),
            body_count,
            |b, &n| {
                let mut world = setup_world(n, IntegratorKind::SymplecticEuler);
                b.iter(|| black_box(world.step(1.0 / 60.0)))
            },
        );
    }

    group.finish();
}

fn bench_settling(c: &mut Criterion) {
    let mut group = c.benchmark_group("settling");
    group.sample_size(20);

    // two simulated seconds from drop to rest
    group.bench_function("drop_100_two_seconds", |b| {
        b.iter(|| {
            let mut world = setup_world(100, IntegratorKind::Rk4);
            for _ in 0..120 {
                black_box(world.step(1.0 / 60.0)).ok();
            }
            world.total_kinetic_energy()
        })
    });

    group.finish();
}

fn bench_single_integration(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrate_one");
    let forces = Forces::new(9.81, 0.1, 0.1);

    for kind in [IntegratorKind::Rk4, IntegratorKind::SymplecticEuler] {
        let integrator = kind.integrator();
        group.bench_function(integrator.name(), |b| {
            let mut motion = Motion::new(1.0, 2.0, Vector3::new(0.0, 10.0, 0.0), Quaternion::identity());
            motion.set_linear_momentum(Vector3::new(1.0, 0.0, -0.5));
            motion.set_angular_momentum(Vector3::new(0.2, 0.4, 0.1));
            b.iter(|| {
                integrator.integrate(black_box(&mut motion), &forces, black_box(1.0 / 60.0));
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_step_throughput,
    bench_settling,
    bench_single_integration
);
criterion_main!(benches);
