// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filled circles.

use kurbo::{Point, Vec2};

use crate::color::ColorRef;
use crate::non_negative;

/// A filled disc centered on a point.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    diameter: f64,
    color: ColorRef,
    layer: i32,
}

impl Circle {
    /// Create a circle on layer `0`. Negative or NaN diameters are stored as `0`.
    pub fn new(center: Point, diameter: f64, color: impl Into<ColorRef>) -> Self {
        Self {
            center,
            diameter: non_negative(diameter),
            color: color.into(),
            layer: 0,
        }
    }

    /// Builder: place the circle on `layer`.
    #[must_use]
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// Center point.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Diameter.
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Radius (half the diameter).
    pub fn radius(&self) -> f64 {
        self.diameter * 0.5
    }

    /// Paint color.
    pub fn color(&self) -> &ColorRef {
        &self.color
    }

    /// Z-order layer; higher draws on top.
    pub fn layer(&self) -> i32 {
        self.layer
    }

    /// Move the center to `center`.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Translate by `delta`.
    pub fn move_by(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Change the diameter. Negative or NaN values are stored as `0`.
    pub fn set_diameter(&mut self, diameter: f64) {
        self.diameter = non_negative(diameter);
    }

    /// Change the paint color.
    pub fn set_color(&mut self, color: impl Into<ColorRef>) {
        self.color = color.into();
    }

    /// Change the layer.
    ///
    /// When the circle already lives in a scene, the scene repositions it after the mutation.
    pub fn set_layer(&mut self, layer: i32) {
        self.layer = layer;
    }

    /// Whether two circles overlap.
    ///
    /// True iff the distance between centers is strictly less than the sum of the radii,
    /// so tangent circles do not collide. The test is symmetric.
    pub fn collides(&self, other: &Self) -> bool {
        let reach = (self.diameter + other.diameter) * 0.5;
        (self.center - other.center).hypot2() < reach * reach
    }

    /// Whether `pt` lies inside the disc (boundary inclusive).
    pub fn contains(&self, pt: Point) -> bool {
        let r = self.radius();
        (pt - self.center).hypot2() <= r * r
    }

    /// Axis-aligned bounding box.
    pub fn bounds(&self) -> kurbo::Rect {
        let r = self.radius();
        kurbo::Rect::new(
            self.center.x - r,
            self.center.y - r,
            self.center.x + r,
            self.center.y + r,
        )
    }
}
