// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Arena: a small 2D drawing surface for simulation loops.
//!
//! An [`Arena`] bundles a thread-safe scene, an input latch, and a render thread. Your own
//! loop adds shapes, mutates them through typed handles, polls the keyboard and mouse, and
//! paces itself with [`Arena::pause`]; the render thread redraws everything at a steady
//! cadence in layer order.
//!
//! The presentation host (a window, or [`FrameCapture`] when headless) receives each finished
//! frame and feeds decoded input events into [`Arena::input`].
//!
//! ```
//! use easel_arena::{Arena, ArenaConfig, Circle, KeyCode, Rect};
//! use kurbo::{Point, Vec2};
//!
//! let (arena, _frames) = Arena::headless(ArenaConfig::new(200, 100)).unwrap();
//! let paddle = arena.add(Rect::new(Point::new(10.0, 40.0), 5.0, 20.0, "white")).unwrap();
//! let ball = arena.add(Circle::new(Point::new(100.0, 50.0), 8.0, "yellow")).unwrap();
//!
//! for _ in 0..3 {
//!     if arena.is_key_pressed(KeyCode::UP) {
//!         arena.modify(paddle, |p| p.move_by(Vec2::new(0.0, -2.0)));
//!     }
//!     arena.modify(ball, |b| b.move_by(Vec2::new(-1.0, 0.0)));
//!     arena.pause();
//! }
//! assert_eq!(arena.get(ball).unwrap().center(), Point::new(97.0, 50.0));
//! arena.exit();
//! ```

mod arena;
mod config;

pub use arena::Arena;
pub use config::{ArenaConfig, DEFAULT_PAUSE_DELAY, DEFAULT_TITLE};

pub use easel_input::{InputEvent, InputLatch, InputState, KeyCode, MouseButton, MouseButtons};
pub use easel_render::{
    FrameBuffer, FrameCapture, FrameStats, NullText, Presenter, RenderState, TextRasterizer,
};
pub use easel_scene::{Handle, MAX_ITEMS, PrimitiveId, SceneError};
pub use easel_shapes::{Circle, ColorRef, Label, Primitive, Rect, Rgb, Segment, Shape};
