// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thread-safe wrapper around [`InputState`].

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use kurbo::Point;

use crate::keys::{KeyCode, MouseButton};
use crate::state::{InputEvent, InputState};

/// Single-writer, many-reader input latch.
///
/// The presentation host feeds decoded events to [`handle`](Self::handle); any thread may read
/// the current state at any time. Reads never wait on anything except a concurrent `handle`.
#[derive(Debug, Default)]
pub struct InputLatch {
    state: RwLock<InputState>,
}

impl InputLatch {
    /// Nothing held, pointer at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one host event. Returns whether the state changed.
    pub fn handle(&self, event: InputEvent) -> bool {
        let changed = self
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .apply(event);
        if changed {
            tracing::trace!(?event, "input latched");
        }
        changed
    }

    /// Whether `key` is currently held.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.read().is_key_pressed(key)
    }

    /// Whether `button` is currently held.
    pub fn is_button_held(&self, button: MouseButton) -> bool {
        self.read().is_button_held(button)
    }

    /// Last pointer position.
    pub fn pointer(&self) -> Point {
        self.read().pointer()
    }

    /// Copy of the whole state, for callers that test several facts at once.
    pub fn snapshot(&self) -> InputState {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, InputState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}
