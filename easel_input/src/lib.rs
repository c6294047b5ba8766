// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Input: latched keyboard and pointer state.
//!
//! A latch reflects only what is true right now: which keys are held, whether the left and
//! right mouse buttons are down, and where the pointer was last seen. There is no event queue.
//!
//! - [`InputState`]: the pure state machine; [`InputState::apply`] folds one [`InputEvent`].
//! - [`InputLatch`]: an `RwLock` around it, written by the presentation host and read from the
//!   application thread.
//! - [`KeyCode`], [`MouseButton`], [`MouseButtons`]: identifiers.
//!
//! ```
//! use easel_input::{InputEvent, InputLatch, KeyCode, MouseButton};
//! use kurbo::Point;
//!
//! let latch = InputLatch::new();
//! latch.handle(InputEvent::KeyPressed(KeyCode::UP));
//! latch.handle(InputEvent::ButtonPressed(MouseButton::from_id(3)));
//! latch.handle(InputEvent::PointerMoved(Point::new(12.0, 30.0)));
//!
//! assert!(latch.is_key_pressed(KeyCode::UP));
//! assert!(latch.is_button_held(MouseButton::Right));
//! assert_eq!(latch.pointer(), Point::new(12.0, 30.0));
//! ```

mod keys;
mod latch;
mod state;

pub use keys::{KeyCode, MouseButton, MouseButtons};
pub use latch::InputLatch;
pub use state::{InputEvent, InputState};
