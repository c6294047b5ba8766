// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of drawable shapes.

use kurbo::Vec2;

use crate::circle::Circle;
use crate::color::ColorRef;
use crate::label::Label;
use crate::rect::Rect;
use crate::segment::Segment;

/// Which variant a [`Primitive`] holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// [`Circle`].
    Circle,
    /// [`Rect`].
    Rect,
    /// [`Segment`].
    Segment,
    /// [`Label`].
    Label,
}

/// Any drawable shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A filled disc.
    Circle(Circle),
    /// A filled rectangle.
    Rect(Rect),
    /// A stroked segment, possibly with an arrowhead.
    Segment(Segment),
    /// A text label.
    Label(Label),
}

impl Primitive {
    /// The variant tag.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Circle(_) => PrimitiveKind::Circle,
            Self::Rect(_) => PrimitiveKind::Rect,
            Self::Segment(_) => PrimitiveKind::Segment,
            Self::Label(_) => PrimitiveKind::Label,
        }
    }

    /// Z-order layer.
    pub fn layer(&self) -> i32 {
        match self {
            Self::Circle(c) => c.layer(),
            Self::Rect(r) => r.layer(),
            Self::Segment(s) => s.layer(),
            Self::Label(l) => l.layer(),
        }
    }

    /// Paint color.
    pub fn color(&self) -> &ColorRef {
        match self {
            Self::Circle(c) => c.color(),
            Self::Rect(r) => r.color(),
            Self::Segment(s) => s.color(),
            Self::Label(l) => l.color(),
        }
    }

    /// Translate by `delta`.
    pub fn move_by(&mut self, delta: Vec2) {
        match self {
            Self::Circle(c) => c.move_by(delta),
            Self::Rect(r) => r.move_by(delta),
            Self::Segment(s) => s.move_by(delta),
            Self::Label(l) => l.move_by(delta),
        }
    }

    /// Change the paint color.
    pub fn set_color(&mut self, color: impl Into<ColorRef>) {
        let color = color.into();
        match self {
            Self::Circle(c) => c.set_color(color),
            Self::Rect(r) => r.set_color(color),
            Self::Segment(s) => s.set_color(color),
            Self::Label(l) => l.set_color(color),
        }
    }

    /// Change the layer.
    pub fn set_layer(&mut self, layer: i32) {
        match self {
            Self::Circle(c) => c.set_layer(layer),
            Self::Rect(r) => r.set_layer(layer),
            Self::Segment(s) => s.set_layer(layer),
            Self::Label(l) => l.set_layer(layer),
        }
    }
}

/// A concrete shape that can be viewed through a [`Primitive`].
///
/// Typed handles use this to reach the concrete shape behind a stored primitive
/// without any runtime type inspection beyond a `match`.
pub trait Shape: Into<Primitive> {
    /// The variant tag for `Self`.
    const KIND: PrimitiveKind;

    /// Borrow the shape if `primitive` holds a `Self`.
    fn from_primitive(primitive: &Primitive) -> Option<&Self>;

    /// Mutably borrow the shape if `primitive` holds a `Self`.
    fn from_primitive_mut(primitive: &mut Primitive) -> Option<&mut Self>;
}

macro_rules! impl_shape {
    ($ty:ident) => {
        impl From<$ty> for Primitive {
            fn from(shape: $ty) -> Self {
                Self::$ty(shape)
            }
        }

        impl Shape for $ty {
            const KIND: PrimitiveKind = PrimitiveKind::$ty;

            fn from_primitive(primitive: &Primitive) -> Option<&Self> {
                match primitive {
                    Primitive::$ty(shape) => Some(shape),
                    _ => None,
                }
            }

            fn from_primitive_mut(primitive: &mut Primitive) -> Option<&mut Self> {
                match primitive {
                    Primitive::$ty(shape) => Some(shape),
                    _ => None,
                }
            }
        }
    };
}

impl_shape!(Circle);
impl_shape!(Rect);
impl_shape!(Segment);
impl_shape!(Label);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use kurbo::Point;

    #[test]
    fn layer_and_kind_dispatch() {
        let p: Primitive = Rect::new(Point::ORIGIN, 1.0, 1.0, "red").with_layer(4).into();
        assert_eq!(p.kind(), PrimitiveKind::Rect);
        assert_eq!(p.layer(), 4);
        assert_eq!(p.color(), &ColorRef::from("red"));
    }

    #[test]
    fn downcast_matches_variant_only() {
        let mut p: Primitive = Circle::new(Point::ORIGIN, 2.0, Rgb::RED).into();
        assert!(Circle::from_primitive(&p).is_some());
        assert!(Rect::from_primitive(&p).is_none());
        Circle::from_primitive_mut(&mut p)
            .unwrap()
            .set_diameter(8.0);
        assert_eq!(Circle::from_primitive(&p).unwrap().diameter(), 8.0);
        assert_eq!(<Circle as Shape>::KIND, p.kind());
    }

    #[test]
    fn generic_mutators_reach_every_variant() {
        let mut shapes: [Primitive; 4] = [
            Circle::new(Point::ORIGIN, 2.0, "red").into(),
            Rect::new(Point::ORIGIN, 2.0, 2.0, "red").into(),
            Segment::new(Point::ORIGIN, Point::new(1.0, 0.0), 1.0, "red").into(),
            Label::new("hi", 10, Point::ORIGIN, "red").into(),
        ];
        for p in &mut shapes {
            p.move_by(Vec2::new(1.0, 2.0));
            p.set_color(Rgb::GREEN);
            p.set_layer(-2);
            assert_eq!(p.layer(), -2);
            assert_eq!(p.color(), &ColorRef::Rgb(Rgb::GREEN));
        }
        let Primitive::Segment(s) = &shapes[2] else {
            panic!("expected a segment");
        };
        assert_eq!(s.start(), Point::new(1.0, 2.0));
    }
}
