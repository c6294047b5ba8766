// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Shapes: the drawable primitives of an Easel scene.
//!
//! - [`Circle`], [`Rect`], [`Segment`] and [`Label`] hold a position, a [`ColorRef`],
//!   a size and a z-order layer.
//! - [`Primitive`] is the closed variant stored by a scene; [`Shape`] maps it back to the
//!   concrete type.
//! - [`Circle::collides`] and [`Rect::collides`] are pure overlap predicates for
//!   simulation loops.
//! - [`Segment`] keeps a derived [`Arrowhead`] in sync with its endpoints.
//! - [`Label`] keeps a derived [`FontDescriptor`] in sync with its font attributes.
//!
//! Sizes are never negative: constructors and setters store negative or NaN extents as `0`.
//!
//! ## Minimal usage
//!
//! ```
//! use easel_shapes::{Circle, Primitive, Rect, Rgb};
//! use kurbo::Point;
//!
//! let ball = Circle::new(Point::new(50.0, 50.0), 20.0, "orange");
//! let wall = Rect::new(Point::new(55.0, 0.0), 10.0, 200.0, Rgb::GREY).with_layer(1);
//! assert!(!ball.collides(&Circle::new(Point::new(70.0, 50.0), 20.0, "red")));
//!
//! let stored: Primitive = wall.into();
//! assert_eq!(stored.layer(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod circle;
mod color;
mod label;
mod primitive;
mod rect;
mod segment;

pub use circle::Circle;
pub use color::{ColorRef, Rgb, named_color, parse_hex, resolve_color};
pub use label::{DEFAULT_FONT_FAMILY, FontDescriptor, FontStyle, Label};
pub use primitive::{Primitive, PrimitiveKind, Shape};
pub use rect::Rect;
pub use segment::{Arrowhead, MAX_ARROW_FRACTION, Segment};

/// Clamp an extent to be non-negative; NaN becomes `0`.
fn non_negative(v: f64) -> f64 {
    v.max(0.0)
}
