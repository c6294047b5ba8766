// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Scene: a thread-safe, layer-ordered display list.
//!
//! - [`SceneManager`] is the shared scene. Application threads add, remove and mutate
//!   primitives through it while a renderer takes consistent snapshots.
//! - [`DisplayList`] is the single-threaded core it wraps.
//! - [`PrimitiveId`] is a generational handle; [`Handle`] adds the concrete shape type.
//!
//! ## Ordering
//!
//! Primitives are kept sorted by ascending layer. Within one layer, earlier additions draw
//! first. A primitive whose layer changes through [`SceneManager::modify`] becomes the newest
//! member of its new layer.
//!
//! ## Capacity and shutdown
//!
//! At most [`MAX_ITEMS`] primitives may be live. The add that would exceed the ceiling fails
//! with [`SceneError::CapacityExceeded`] and puts the scene into its exiting state; from then
//! on adds fail with [`SceneError::Closed`] and other mutations are ignored.
//!
//! ## Minimal usage
//!
//! ```
//! use easel_scene::SceneManager;
//! use easel_shapes::{Circle, Rect, PrimitiveKind};
//! use kurbo::{Point, Vec2};
//!
//! let scene = SceneManager::new();
//! let _wall = scene.add(Rect::new(Point::ORIGIN, 10.0, 10.0, "grey").with_layer(1)).unwrap();
//! let ball = scene.add(Circle::new(Point::new(5.0, 5.0), 4.0, "red")).unwrap();
//!
//! // The circle was added later but sits on a lower layer, so it draws first.
//! let kinds: Vec<_> = scene.snapshot().iter().map(|p| p.kind()).collect();
//! assert_eq!(kinds, [PrimitiveKind::Circle, PrimitiveKind::Rect]);
//!
//! scene.modify(ball, |c| c.move_by(Vec2::new(1.0, 0.0)));
//! assert_eq!(scene.get(ball).unwrap().center(), Point::new(6.0, 5.0));
//!
//! assert!(scene.remove(ball));
//! assert!(!scene.remove(ball));
//! ```

mod error;
mod list;
mod manager;
mod types;

pub use error::SceneError;
pub use list::DisplayList;
pub use manager::SceneManager;
pub use types::{Handle, MAX_ITEMS, PrimitiveId};
