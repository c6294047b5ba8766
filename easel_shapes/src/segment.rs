// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroked line segments with an optional arrowhead.
//!
//! The arrowhead is derived from the endpoints, the thickness and the arrow fraction.
//! Every setter that touches one of those re-derives it before returning, so readers
//! never observe a stale triangle.
//!
//! The arrowhead size is `thickness * arrow_fraction`. Its base sits that far back from
//! `end` along the segment, and its two trailing corners are pushed the same distance out
//! to either side. The stroked shaft stops at the base so the head is not overdrawn.
//!
//! ```
//! use easel_shapes::{Rgb, Segment};
//! use kurbo::Point;
//!
//! let s = Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 10.0, Rgb::WHITE)
//!     .with_arrow_fraction(0.5);
//! let head = s.arrowhead().unwrap();
//! assert_eq!(head.tip, Point::new(100.0, 0.0));
//! assert!(s.shaft().unwrap().p1.x < 100.0);
//! ```

use kurbo::{Line, Point, Vec2};

use crate::color::ColorRef;
use crate::non_negative;

/// Largest accepted arrow fraction; larger requests are clamped to this.
pub const MAX_ARROW_FRACTION: f64 = 1.0 - f64::EPSILON;

/// Triangle capping the `end` of a [`Segment`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Arrowhead {
    /// Apex, always the segment's `end`.
    pub tip: Point,
    /// Trailing corner on the left of the direction of travel (in y-down screen space, the
    /// corner that lies at `+normal`).
    pub left: Point,
    /// Trailing corner on the other side.
    pub right: Point,
    /// Where the stroked shaft stops: the midpoint of the triangle's base.
    pub shaft_end: Point,
}

impl Arrowhead {
    /// The triangle's corners in drawing order.
    pub fn points(&self) -> [Point; 3] {
        [self.tip, self.left, self.right]
    }
}

/// A straight stroked line from `start` to `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
    thickness: f64,
    arrow_fraction: f64,
    color: ColorRef,
    layer: i32,
    arrowhead: Option<Arrowhead>,
}

impl Segment {
    /// Create a segment without an arrowhead on layer `0`.
    pub fn new(start: Point, end: Point, thickness: f64, color: impl Into<ColorRef>) -> Self {
        Self {
            start,
            end,
            thickness: non_negative(thickness),
            arrow_fraction: 0.0,
            color: color.into(),
            layer: 0,
            arrowhead: None,
        }
    }

    /// Builder: place the segment on `layer`.
    #[must_use]
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// Builder: set the arrow fraction (see [`Segment::set_arrow_fraction`]).
    #[must_use]
    pub fn with_arrow_fraction(mut self, fraction: f64) -> Self {
        self.set_arrow_fraction(fraction);
        self
    }

    /// Start point.
    pub fn start(&self) -> Point {
        self.start
    }

    /// End point; the arrowhead tip when an arrowhead is present.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Stroke width.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Arrowhead size as a fraction of the thickness; `0` means no arrowhead.
    pub fn arrow_fraction(&self) -> f64 {
        self.arrow_fraction
    }

    /// Paint color.
    pub fn color(&self) -> &ColorRef {
        &self.color
    }

    /// Z-order layer; higher draws on top.
    pub fn layer(&self) -> i32 {
        self.layer
    }

    /// Euclidean length `|end - start|`.
    pub fn length(&self) -> f64 {
        (self.end - self.start).hypot()
    }

    /// The derived arrowhead, if any.
    pub fn arrowhead(&self) -> Option<&Arrowhead> {
        self.arrowhead.as_ref()
    }

    /// The part of the segment that is stroked.
    ///
    /// Without an arrowhead this is the whole segment. With one it stops at the base of the
    /// head, and is `None` when the head is at least as long as the segment itself.
    pub fn shaft(&self) -> Option<Line> {
        match &self.arrowhead {
            None => Some(Line::new(self.start, self.end)),
            Some(head) => {
                let size = self.thickness * self.arrow_fraction;
                (size < self.length()).then(|| Line::new(self.start, head.shaft_end))
            }
        }
    }

    /// Move both endpoints.
    pub fn set_endpoints(&mut self, start: Point, end: Point) {
        self.start = start;
        self.end = end;
        self.recompute();
    }

    /// Translate both endpoints by `delta`.
    pub fn move_by(&mut self, delta: Vec2) {
        self.set_endpoints(self.start + delta, self.end + delta);
    }

    /// Change the stroke width. Negative or NaN values are stored as `0`.
    pub fn set_thickness(&mut self, thickness: f64) {
        self.thickness = non_negative(thickness);
        self.recompute();
    }

    /// Change the arrow fraction.
    ///
    /// Values are clamped into `[0, MAX_ARROW_FRACTION]`; NaN disables the arrowhead.
    pub fn set_arrow_fraction(&mut self, fraction: f64) {
        self.arrow_fraction = non_negative(fraction).min(MAX_ARROW_FRACTION);
        self.recompute();
    }

    /// Change the paint color.
    pub fn set_color(&mut self, color: impl Into<ColorRef>) {
        self.color = color.into();
    }

    /// Change the layer.
    pub fn set_layer(&mut self, layer: i32) {
        self.layer = layer;
    }

    fn recompute(&mut self) {
        self.arrowhead = derive_arrowhead(self.start, self.end, self.thickness, self.arrow_fraction);
    }
}

fn derive_arrowhead(start: Point, end: Point, thickness: f64, fraction: f64) -> Option<Arrowhead> {
    let size = thickness * fraction;
    let delta = end - start;
    let length = delta.hypot();
    if size <= 0.0 || length <= 0.0 || !length.is_finite() {
        return None;
    }
    let dir = delta / length;
    let normal = Vec2::new(-dir.y, dir.x);
    let base = start + delta * (1.0 - size / length);
    Some(Arrowhead {
        tip: end,
        left: base + normal * size,
        right: base - normal * size,
        shaft_end: base,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn horizontal(fraction: f64) -> Segment {
        Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 10.0, Rgb::WHITE)
            .with_arrow_fraction(fraction)
    }

    #[test]
    fn arrowhead_tip_and_shaft() {
        let s = horizontal(0.5);
        let head = s.arrowhead().expect("fraction > 0 yields an arrowhead");
        assert_eq!(head.tip, Point::new(100.0, 0.0));
        assert_eq!(head.shaft_end, Point::new(95.0, 0.0));
        assert_eq!(head.left, Point::new(95.0, 5.0));
        assert_eq!(head.right, Point::new(95.0, -5.0));
        let shaft = s.shaft().unwrap();
        assert_eq!(shaft.p0, Point::new(0.0, 0.0));
        assert!(shaft.p1.x < 100.0, "shaft must stop before the tip");
    }

    #[test]
    fn no_fraction_means_no_arrowhead() {
        let s = horizontal(0.0);
        assert!(s.arrowhead().is_none());
        assert_eq!(s.shaft().unwrap().p1, Point::new(100.0, 0.0));
        assert_eq!(s.length(), 100.0);
    }

    #[test]
    fn setters_rederive_arrowhead() {
        let mut s = horizontal(0.5);
        s.set_endpoints(Point::new(0.0, 0.0), Point::new(0.0, 50.0));
        let head = *s.arrowhead().unwrap();
        assert_eq!(head.tip, Point::new(0.0, 50.0));
        assert_eq!(head.shaft_end, Point::new(0.0, 45.0));

        s.set_thickness(20.0);
        assert_eq!(s.arrowhead().unwrap().shaft_end, Point::new(0.0, 40.0));

        s.set_arrow_fraction(0.0);
        assert!(s.arrowhead().is_none());

        s.set_arrow_fraction(0.25);
        s.move_by(Vec2::new(10.0, 0.0));
        let head = s.arrowhead().unwrap();
        assert_eq!(head.tip, Point::new(10.0, 50.0));
        assert_eq!(head.shaft_end, Point::new(10.0, 45.0));
    }

    #[test]
    fn zero_length_has_no_arrowhead() {
        let s = Segment::new(Point::new(3.0, 3.0), Point::new(3.0, 3.0), 4.0, "red")
            .with_arrow_fraction(0.5);
        assert!(s.arrowhead().is_none());
        assert!(s.shaft().is_some());
    }

    #[test]
    fn oversized_head_swallows_shaft() {
        let s = Segment::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0), 10.0, "red")
            .with_arrow_fraction(0.9);
        assert!(s.arrowhead().is_some());
        assert!(s.shaft().is_none());
    }

    #[test]
    fn fraction_is_clamped() {
        let mut s = horizontal(-1.0);
        assert_eq!(s.arrow_fraction(), 0.0);
        s.set_arrow_fraction(3.0);
        assert!(s.arrow_fraction() < 1.0);
        s.set_arrow_fraction(f64::NAN);
        assert_eq!(s.arrow_fraction(), 0.0);
        assert!(s.arrowhead().is_none());
    }
}
