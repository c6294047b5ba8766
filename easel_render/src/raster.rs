// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scanline rasterization of filled discs, rectangles, triangles and stroked lines.
//!
//! Coverage is decided by sampling each pixel at its centre `(x + 0.5, y + 0.5)`; there is
//! no anti-aliasing. Every routine clips to the frame and silently draws nothing for
//! degenerate or non-finite geometry.

use easel_shapes::Rgb;
use kurbo::{Line, Point, Rect, Vec2};

use crate::frame::FrameBuffer;

/// Thinnest stroke drawn; thinner requests are widened to a one-pixel hairline.
pub const MIN_STROKE_WIDTH: f64 = 1.0;

/// Fill the pixels whose centres fall inside the half-open rectangle `[x0, x1) × [y0, y1)`.
pub fn fill_rect(frame: &mut FrameBuffer, rect: Rect, color: Rgb) {
    let rect = rect.abs();
    let (y0, y1) = span_half_open(rect.y0, rect.y1, frame.height());
    let (x0, x1) = span_half_open(rect.x0, rect.x1, frame.width());
    for y in y0..y1 {
        frame.fill_span(y, x0, x1, color);
    }
}

/// Fill the disc of `radius` around `center`, boundary included.
pub fn fill_circle(frame: &mut FrameBuffer, center: Point, radius: f64, color: Rgb) {
    if radius.is_nan() || radius <= 0.0 || !center.is_finite() {
        return;
    }
    let r2 = radius * radius;
    let (y0, y1) = span_closed(center.y - radius, center.y + radius, frame.height());
    for y in y0..y1 {
        let dy = f64::from(y) + 0.5 - center.y;
        let rem = r2 - dy * dy;
        if rem < 0.0 {
            continue;
        }
        let half = rem.sqrt();
        let (x0, x1) = span_closed(center.x - half, center.x + half, frame.width());
        frame.fill_span(y, x0, x1, color);
    }
}

/// Fill a triangle given in either winding. Zero-area triangles draw nothing.
pub fn fill_triangle(frame: &mut FrameBuffer, points: [Point; 3], color: Rgb) {
    let [a, b, c] = points;
    let area = (b - a).cross(c - a);
    if area == 0.0 || !area.is_finite() {
        return;
    }
    let sign = area.signum();
    let bounds = Rect::from_points(a, b).union_pt(c);
    fill_where(frame, bounds, color, |p| {
        sign * (b - a).cross(p - a) >= 0.0
            && sign * (c - b).cross(p - b) >= 0.0
            && sign * (a - c).cross(p - c) >= 0.0
    });
}

/// Stroke `line` with the given `width` and butt caps: the stroke ends flush with the
/// endpoints. Widths below [`MIN_STROKE_WIDTH`] are drawn as hairlines.
pub fn stroke_line(frame: &mut FrameBuffer, line: Line, width: f64, color: Rgb) {
    let d = line.p1 - line.p0;
    let len = d.hypot();
    if len == 0.0 || !len.is_finite() {
        return;
    }
    let half = width.max(MIN_STROKE_WIDTH) * 0.5;
    let dir = d / len;
    let normal = Vec2::new(-dir.y, dir.x) * half;
    let bounds = Rect::from_points(line.p0 + normal, line.p0 - normal)
        .union_pt(line.p1 + normal)
        .union_pt(line.p1 - normal);
    fill_where(frame, bounds, color, |p| {
        let w = p - line.p0;
        let along = w.dot(dir);
        (0.0..=len).contains(&along) && w.cross(dir).abs() <= half
    });
}

fn fill_where(frame: &mut FrameBuffer, bounds: Rect, color: Rgb, inside: impl Fn(Point) -> bool) {
    let (y0, y1) = span_closed(bounds.y0, bounds.y1, frame.height());
    let (x0, x1) = span_closed(bounds.x0, bounds.x1, frame.width());
    for y in y0..y1 {
        let cy = f64::from(y) + 0.5;
        for x in x0..x1 {
            if inside(Point::new(f64::from(x) + 0.5, cy)) {
                frame.put(x, y, color);
            }
        }
    }
}

/// Pixel indices in `0..limit` whose centres lie in `[lo, hi)`, as a half-open index range.
fn span_half_open(lo: f64, hi: f64, limit: u32) -> (u32, u32) {
    clamp_span((lo - 0.5).ceil(), (hi - 0.5).ceil(), limit)
}

/// Pixel indices in `0..limit` whose centres lie in `[lo, hi]`, as a half-open index range.
fn span_closed(lo: f64, hi: f64, limit: u32) -> (u32, u32) {
    clamp_span((lo - 0.5).ceil(), (hi - 0.5).floor() + 1.0, limit)
}

fn clamp_span(start: f64, end: f64, limit: u32) -> (u32, u32) {
    if start.is_nan() || end.is_nan() {
        return (0, 0);
    }
    let start = start.max(0.0);
    let end = end.min(f64::from(limit));
    if start >= end {
        return (0, 0);
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "both ends are integral and clamped into 0..=limit."
    )]
    (start as u32, end as u32)
}
