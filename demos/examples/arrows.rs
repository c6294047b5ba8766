// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrowheads.
//!
//! Draws a fan of arrows with growing arrow fractions, renders one frame synchronously
//! (no render thread), and saves it as a PPM.
//!
//! Run:
//! - `cargo run -p easel_demos --example arrows`

use easel_demos::{BlockText, debug_requested, logging, save_ppm};
use easel_render::{FrameCapture, RenderConfig, Renderer};
use easel_shapes::{Label, Primitive, Rgb, Segment};
use kurbo::{Point, Vec2};

fn main() {
    logging::init(debug_requested());

    let centre = Point::new(160.0, 160.0);
    let mut shapes: Vec<Primitive> = Vec::new();
    for i in 0..12 {
        let angle = f64::from(i) * std::f64::consts::TAU / 12.0;
        let end = centre + Vec2::from_angle(angle) * 140.0;
        let fraction = f64::from(i) / 12.0;
        let arrow = Segment::new(centre, end, 8.0, "#66CCFF").with_arrow_fraction(fraction * 2.0);
        if let Some(head) = arrow.arrowhead() {
            println!(
                "arrow {i:2}: fraction {:.2}, tip {:?}, shaft stops at {:?}",
                arrow.arrow_fraction(),
                head.tip,
                head.shaft_end
            );
        } else {
            println!("arrow {i:2}: no head");
        }
        shapes.push(arrow.into());
    }
    shapes.push(Label::new("arrows", 16, Point::new(8.0, 312.0), "yellow").into());

    let mut renderer = Renderer::new(RenderConfig::new(320, 320), FrameCapture::new())
        .with_text(BlockText);
    renderer.render(&shapes);
    let frame = renderer.frame();
    assert_eq!(frame.pixel(0, 0), Some(Rgb::BLACK));
    if let Err(err) = save_ppm(frame, "arrows") {
        tracing::error!(%err, "could not save frame");
    }
}
