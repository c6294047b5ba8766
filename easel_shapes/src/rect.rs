// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filled axis-aligned rectangles.

use kurbo::{Point, Vec2};

use crate::color::ColorRef;
use crate::non_negative;

/// A filled axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    origin: Point,
    width: f64,
    height: f64,
    color: ColorRef,
    layer: i32,
}

impl Rect {
    /// Create a rectangle on layer `0`. Negative or NaN extents are stored as `0`.
    pub fn new(origin: Point, width: f64, height: f64, color: impl Into<ColorRef>) -> Self {
        Self {
            origin,
            width: non_negative(width),
            height: non_negative(height),
            color: color.into(),
            layer: 0,
        }
    }

    /// Builder: place the rectangle on `layer`.
    #[must_use]
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Paint color.
    pub fn color(&self) -> &ColorRef {
        &self.color
    }

    /// Z-order layer; higher draws on top.
    pub fn layer(&self) -> i32 {
        self.layer
    }

    /// Move the top-left corner to `origin`.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Translate by `delta`.
    pub fn move_by(&mut self, delta: Vec2) {
        self.origin += delta;
    }

    /// Resize. Negative or NaN extents are stored as `0`.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = non_negative(width);
        self.height = non_negative(height);
    }

    /// Change the paint color.
    pub fn set_color(&mut self, color: impl Into<ColorRef>) {
        self.color = color.into();
    }

    /// Change the layer.
    pub fn set_layer(&mut self, layer: i32) {
        self.layer = layer;
    }

    /// Whether two rectangles overlap.
    ///
    /// Both axis projections must overlap strictly; rectangles that only share an edge do not collide.
    pub fn collides(&self, other: &Self) -> bool {
        let (a, b) = (self.bounds(), other.bounds());
        a.x0 < b.x1 && a.x1 > b.x0 && a.y0 < b.y1 && a.y1 > b.y0
    }

    /// Whether `pt` lies inside, with the left/top edges inclusive and right/bottom exclusive.
    pub fn contains(&self, pt: Point) -> bool {
        let b = self.bounds();
        pt.x >= b.x0 && pt.x < b.x1 && pt.y >= b.y0 && pt.y < b.y1
    }

    /// Bounds as a Kurbo rectangle.
    pub fn bounds(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new(Point::new(x, y), w, h, Rgb::BLUE)
    }

    #[test]
    fn overlapping_rects_collide() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(a.collides(&b));
        assert!(b.collides(&a));
    }

    #[test]
    fn shared_edge_is_not_a_collision() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let right = rect(10.0, 0.0, 10.0, 10.0);
        let below = rect(0.0, 10.0, 10.0, 10.0);
        assert!(!a.collides(&right));
        assert!(!a.collides(&below));
    }

    #[test]
    fn one_axis_overlap_is_not_enough() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 20.0, 10.0, 10.0);
        assert!(!a.collides(&b));
    }

    #[test]
    fn containment_collides() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(40.0, 40.0, 1.0, 1.0);
        assert!(outer.collides(&inner));
        assert!(inner.collides(&outer));
    }

    #[test]
    fn resize_clamps_and_moves() {
        let mut r = rect(1.0, 2.0, 3.0, 4.0);
        r.set_size(-1.0, 8.0);
        assert_eq!((r.width(), r.height()), (0.0, 8.0));
        r.move_by(Vec2::new(1.0, 1.0));
        assert_eq!(r.origin(), Point::new(2.0, 3.0));
        assert!(!r.contains(Point::new(2.0, 4.0)), "zero width contains nothing");
    }
}
