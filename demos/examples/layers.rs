// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer ordering.
//!
//! Adds shapes out of layer order, prints the resulting draw order, moves the ball across the
//! wall to show that position never affects stacking, and saves the last frame as a PPM.
//!
//! Run:
//! - `cargo run -p easel_demos --example layers`
//! - `cargo run -p easel_demos --example layers -- --debug`

use std::time::Duration;

use easel_arena::{Arena, ArenaConfig, Circle, Label, Rect, Rgb};
use easel_demos::{BlockText, debug_requested, logging, save_ppm};
use easel_render::FrameCapture;
use kurbo::{Point, Vec2};

fn main() {
    logging::init(debug_requested());

    let capture = FrameCapture::new();
    let config = ArenaConfig::new(240, 120)
        .with_title("Layers")
        .with_background(Rgb::DARK_GREY);
    let arena = Arena::with_config(config, capture.clone(), BlockText).unwrap();

    let _wall = arena
        .add(Rect::new(Point::new(100.0, 10.0), 40.0, 100.0, "light-grey").with_layer(1))
        .unwrap();
    let ball = arena
        .add(Circle::new(Point::new(40.0, 60.0), 50.0, "orange"))
        .unwrap();
    let _caption = arena
        .add(Label::new("layers", 14, Point::new(8.0, 112.0), "white").with_layer(2))
        .unwrap();

    for (i, p) in arena.snapshot().iter().enumerate() {
        println!("{i}: {:?} on layer {}", p.kind(), p.layer());
    }

    // Slide the ball behind the wall.
    for _ in 0..40 {
        arena.modify(ball, |c| c.move_by(Vec2::new(2.0, 0.0)));
        arena.pause_for(Duration::from_millis(5));
    }
    let ball_now = arena.get(ball).unwrap();
    println!("ball centre now {:?}", ball_now.center());

    arena.pause();
    let frame = capture.latest().unwrap();
    let centre = frame.pixel(120, 60).unwrap();
    assert_eq!(centre, Rgb::LIGHT_GREY, "the wall stays on top of the ball");
    if let Err(err) = save_ppm(&frame, "layers") {
        tracing::error!(%err, "could not save frame");
    }
}
