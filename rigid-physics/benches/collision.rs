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
//! Benchmarks for the narrow phase and ray casting

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rigid_physics::collision::{cast_ray, collide};
use rigid_physics::math::Vector3;
use rigid_physics::shapes::{Ray, Shape};

fn bench_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("collide");

    let sphere = Shape::sphere(0.0, 0.0, 0.0, 1.0);
    let near_sphere = Shape::sphere(1.2, 0.9, 0.0, 0.8);
    let far_sphere = Shape::sphere(5.0, 0.0, 0.0, 0.8);
    let abox = Shape::abox(0.5, -0.5, -0.5, 1.5, 0.5, 0.5);
    let other_box = Shape::abox(1.2, 0.2, 0.0, 2.2, 1.2, 1.0);
    let plane = Shape::plane(0.0, 1.0, 0.0, 0.0, -0.6, 0.0);
    let ray = Shape::ray(-3.0, 0.2, 0.0, 1.0, 0.0, 0.0);

    let pairs = [
        ("sphere_sphere_hit", sphere, near_sphere),
        ("sphere_sphere_miss", sphere, far_sphere),
        ("sphere_abox", sphere, abox),
        ("sphere_plane", sphere, plane),
        ("abox_abox", abox, other_box),
        ("abox_plane", other_box, plane),
        ("ray_sphere", ray, sphere),
        ("ray_abox", ray, abox),
    ];
    for (name, a, b) in pairs {
        group.bench_function(name, |bench| bench.iter(|| collide(black_box(&a), black_box(&b))));
    }

    group.finish();
}

fn bench_ray_casts(c: &mut Criterion) {
    let mut group = c.benchmark_group("cast_ray");

    let targets: Vec<Shape> = (0..64)
        .map(|i| {
            let x = (i % 8) as f64 * 2.0 - 7.0;
            let y = (i / 8) as f64 * 2.0 - 7.0;
            if i % 2 == 0 {
                Shape::sphere(x, y, -10.0, 0.9)
            } else {
                Shape::abox(x - 0.8, y - 0.8, -10.8, x + 0.8, y + 0.8, -9.2)
            }
        })
        .collect();

    group.bench_function("nearest_of_64", |b| {
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.05, -0.02, -1.0));
        b.iter(|| {
            targets
                .iter()
                .filter_map(|shape| cast_ray(black_box(&ray), shape))
                .map(|hit| hit.distance)
                .fold(f64::INFINITY, f64::min)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_pairs, bench_ray_casts);
criterion_main!(benches);
