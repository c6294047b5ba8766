// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use easel_scene::{DisplayList, SceneManager};
use easel_shapes::{Circle, Primitive};
use kurbo::{Point, Vec2};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_layer(&mut self, layers: u64) -> i32 {
        (self.next_u64() % layers) as i32
    }
}

fn gen_dots(count: usize, layers: u64, seed: u64) -> Vec<Primitive> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|i| {
            Circle::new(Point::new(i as f64, 0.0), 4.0, "red")
                .with_layer(rng.next_layer(layers))
                .into()
        })
        .collect()
}

fn bench_display_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("display_list");
    for &n in &[1_000usize, 10_000, 100_000] {
        for &layers in &[1u64, 16] {
            let dots = gen_dots(n, layers, 0x2545_F491_4F6C_DD1D);
            group.throughput(Throughput::Elements(n as u64));
            group.bench_function(format!("insert_n{}_layers{}", n, layers), |b| {
                b.iter_batched(
                    || (DisplayList::new(), dots.clone()),
                    |(mut list, dots)| {
                        for p in dots {
                            let _ = list.insert(p);
                        }
                        black_box(list.len());
                    },
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_scene_manager(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_manager");
    let dots = gen_dots(10_000, 8, 7);
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("add_modify_snapshot_n10000", |b| {
        b.iter_batched(
            || dots.clone(),
            |dots| {
                let scene = SceneManager::new();
                let ids: Vec<_> = dots
                    .into_iter()
                    .filter_map(|p| scene.add_primitive(p).ok())
                    .collect();
                for id in &ids {
                    let _ = scene.modify_primitive(*id, |p| p.move_by(Vec2::new(1.0, 0.0)));
                }
                black_box(scene.snapshot().len());
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_display_list, bench_scene_manager);
criterion_main!(benches);
