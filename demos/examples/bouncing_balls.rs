// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bouncing balls.
//!
//! A small simulation loop: balls move each step, bounce off the arena edges, and turn red
//! while they overlap another ball. Runs headless for a fixed number of steps.
//!
//! Run:
//! - `cargo run -p easel_demos --example bouncing_balls`

use std::time::Duration;

use easel_arena::{Arena, ArenaConfig, Circle, Handle, Rgb};
use easel_demos::{debug_requested, logging};
use kurbo::{Point, Vec2};

const STEPS: usize = 200;

struct Ball {
    handle: Handle<Circle>,
    velocity: Vec2,
}

fn main() {
    logging::init(debug_requested());

    let config = ArenaConfig::new(320, 240)
        .with_tick_interval(Duration::from_millis(5))
        .with_pause_delay(Duration::from_millis(2));
    let (mut arena, capture) = Arena::headless(config).unwrap();

    let starts = [
        (Point::new(40.0, 40.0), Vec2::new(3.0, 2.0), Rgb::CYAN),
        (Point::new(200.0, 60.0), Vec2::new(-2.0, 3.0), Rgb::GREEN),
        (Point::new(120.0, 180.0), Vec2::new(2.5, -2.5), Rgb::YELLOW),
        (Point::new(280.0, 200.0), Vec2::new(-3.0, -1.5), Rgb::MAGENTA),
    ];
    let mut balls: Vec<Ball> = starts
        .iter()
        .map(|&(centre, velocity, color)| Ball {
            handle: arena.add(Circle::new(centre, 30.0, color)).unwrap(),
            velocity,
        })
        .collect();
    let colors: Vec<Rgb> = starts.iter().map(|s| s.2).collect();

    let (w, h) = (f64::from(arena.width()), f64::from(arena.height()));
    let mut contacts = 0;
    for _ in 0..STEPS {
        for ball in &mut balls {
            let velocity = &mut ball.velocity;
            arena.modify(ball.handle, |c| {
                c.move_by(*velocity);
                let (p, r) = (c.center(), c.radius());
                if p.x - r < 0.0 || p.x + r > w {
                    velocity.x = -velocity.x;
                }
                if p.y - r < 0.0 || p.y + r > h {
                    velocity.y = -velocity.y;
                }
            });
        }

        let current: Vec<Circle> = balls.iter().filter_map(|b| arena.get(b.handle)).collect();
        for (i, ball) in balls.iter().enumerate() {
            let hit = current
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && current[i].collides(other));
            contacts += usize::from(hit);
            let color = if hit { Rgb::RED } else { colors[i] };
            arena.modify(ball.handle, |c| c.set_color(color));
        }
        arena.pause();
    }

    arena.exit();
    let stats = arena.join().unwrap_or_default();
    tracing::info!(
        steps = STEPS,
        contacts,
        frames = stats.frames,
        mean = ?stats.mean(),
        overruns = stats.overruns,
        presented = capture.frames_presented(),
        "simulation finished"
    );
}
