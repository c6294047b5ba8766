// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thread-safe front for the display list.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use easel_shapes::{Primitive, Shape};

use crate::error::SceneError;
use crate::list::DisplayList;
use crate::types::{Handle, PrimitiveId};

/// Shared scene: a [`DisplayList`] behind one lock, plus the shutdown flag.
///
/// Every method takes `&self`; share it with `Arc`. All reads and writes of primitive state
/// go through the same lock, so a render snapshot never observes a half-applied mutation.
///
/// Once [`request_exit`](Self::request_exit) has been called (or the capacity ceiling was hit),
/// [`add`](Self::add) fails with [`SceneError::Closed`] and the other mutators do nothing.
#[derive(Debug, Default)]
pub struct SceneManager {
    list: Mutex<DisplayList>,
    exiting: AtomicBool,
}

impl SceneManager {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape, returning a typed handle to it.
    pub fn add<S: Shape>(&self, shape: S) -> Result<Handle<S>, SceneError> {
        self.add_primitive(shape.into()).map(Handle::new)
    }

    /// Add an already-wrapped primitive.
    ///
    /// Hitting the capacity ceiling logs an error and puts the scene into its exiting state.
    pub fn add_primitive(&self, primitive: Primitive) -> Result<PrimitiveId, SceneError> {
        let mut list = self.lock();
        // Checked under the lock so at most one add ever sees the full list.
        if self.is_exiting() {
            return Err(SceneError::Closed);
        }
        match list.insert(primitive) {
            Ok(id) => Ok(id),
            Err(err) => {
                tracing::error!(%err, live = list.len(), "cannot add primitive; shutting down");
                self.request_exit();
                Err(err)
            }
        }
    }

    /// Remove a primitive. Returns whether anything was removed.
    ///
    /// Unknown, stale, and already-removed ids are ignored.
    pub fn remove(&self, id: impl Into<PrimitiveId>) -> bool {
        let id = id.into();
        let mut list = self.lock();
        if self.is_exiting() {
            tracing::trace!(?id, "scene exiting; ignoring remove");
            return false;
        }
        list.remove(id).is_some()
    }

    /// Remove every primitive.
    pub fn clear(&self) {
        let mut list = self.lock();
        if self.is_exiting() {
            tracing::trace!("scene exiting; ignoring clear");
            return;
        }
        list.clear();
    }

    /// Mutate a shape in place under the scene lock.
    ///
    /// Returns `None` if the handle is stale or the scene is exiting. Layer changes made by `f`
    /// take effect in the draw order immediately.
    pub fn modify<S: Shape, R>(&self, handle: Handle<S>, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.modify_primitive(handle.id(), |p| S::from_primitive_mut(p).map(f))
            .flatten()
    }

    /// Mutate an untyped primitive in place under the scene lock.
    pub fn modify_primitive<R>(
        &self,
        id: PrimitiveId,
        f: impl FnOnce(&mut Primitive) -> R,
    ) -> Option<R> {
        let mut list = self.lock();
        if self.is_exiting() {
            tracing::trace!(?id, "scene exiting; ignoring modify");
            return None;
        }
        list.modify(id, f)
    }

    /// Copy of a live shape.
    pub fn get<S: Shape + Clone>(&self, handle: Handle<S>) -> Option<S> {
        self.lock()
            .get(handle.id())
            .and_then(S::from_primitive)
            .cloned()
    }

    /// Copy of a live primitive.
    pub fn get_primitive(&self, id: PrimitiveId) -> Option<Primitive> {
        self.lock().get(id).cloned()
    }

    /// Returns true if `id` refers to a live primitive.
    pub fn contains(&self, id: impl Into<PrimitiveId>) -> bool {
        self.lock().is_alive(id.into())
    }

    /// Number of live primitives.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Primitives in draw order, copied under the lock.
    pub fn snapshot(&self) -> Vec<Primitive> {
        let mut out = Vec::new();
        self.snapshot_into(&mut out);
        out
    }

    /// Like [`snapshot`](Self::snapshot), reusing `out`'s allocation.
    pub fn snapshot_into(&self, out: &mut Vec<Primitive>) {
        self.lock().snapshot_into(out);
    }

    /// Put the scene into its exiting state. Idempotent.
    pub fn request_exit(&self) {
        if !self.exiting.swap(true, Ordering::AcqRel) {
            tracing::debug!("scene exit requested");
        }
    }

    /// Whether the scene is shutting down.
    pub fn is_exiting(&self) -> bool {
        self.exiting.load(Ordering::Acquire)
    }

    fn lock(&self) -> MutexGuard<'_, DisplayList> {
        // `DisplayList::modify` edits a copy, so a panic in a caller's closure cannot leave
        // the list half-updated.
        self.list.lock().unwrap_or_else(|poisoned| {
            self.list.clear_poison();
            poisoned.into_inner()
        })
    }
}
