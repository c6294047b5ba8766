// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use easel_render::{FrameCapture, RenderConfig, Renderer};
use easel_scene::SceneManager;
use easel_shapes::{Circle, Rect, Segment};
use kurbo::Point;

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
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

const COLORS: [&str; 5] = ["red", "blue", "#336699", "orange", "not-a-color"];

fn populate(scene: &SceneManager, count: usize, w: f64, h: f64) {
    let mut rng = Rng::new(0x9E37_79B9_7F4A_7C15);
    for i in 0..count {
        let p = Point::new(rng.next_f64() * w, rng.next_f64() * h);
        let color = COLORS[i % COLORS.len()];
        let layer = (i % 4) as i32;
        let _ = match i % 3 {
            0 => scene
                .add(Circle::new(p, 4.0 + rng.next_f64() * 20.0, color).with_layer(layer))
                .map(|h| h.id()),
            1 => {
                let (rw, rh) = (5.0 + rng.next_f64() * 30.0, 5.0 + rng.next_f64() * 30.0);
                scene
                    .add(Rect::new(p, rw, rh, color).with_layer(layer))
                    .map(|h| h.id())
            }
            _ => {
                let q = Point::new(rng.next_f64() * w, rng.next_f64() * h);
                let thickness = 1.0 + rng.next_f64() * 6.0;
                scene
                    .add(
                        Segment::new(p, q, thickness, color)
                            .with_arrow_fraction(0.75)
                            .with_layer(layer),
                    )
                    .map(|h| h.id())
            }
        };
    }
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_tick");
    for &n in &[100usize, 1_000, 10_000] {
        let scene = SceneManager::new();
        populate(&scene, n, 800.0, 600.0);
        let mut renderer = Renderer::new(RenderConfig::new(800, 600), FrameCapture::new());
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("tick_800x600_n{}", n), |b| {
            b.iter(|| {
                renderer.tick(&scene);
                black_box(renderer.frame().pixels().len());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
