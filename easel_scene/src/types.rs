// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: identifiers, typed handles, and limits.

use core::fmt;
use core::marker::PhantomData;

use easel_shapes::Shape;

/// Maximum number of live primitives in one scene.
///
/// This is a hard ceiling: the add that would exceed it fails with
/// [`SceneError::CapacityExceeded`](crate::SceneError::CapacityExceeded) and shuts the scene down.
pub const MAX_ITEMS: usize = 100_000;

/// Identifier for a primitive in a scene.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the primitive is removed.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On add, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `PrimitiveId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `PrimitiveId`.
/// - A slot whose generation reaches `u32::MAX` is retired instead of reused.
///
/// Stale ids never alias a different live primitive because the generation must match, so
/// removing through a stale id is a harmless no-op.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PrimitiveId(pub(crate) u32, pub(crate) u32);

impl PrimitiveId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// A [`PrimitiveId`] that remembers which concrete shape it was created for.
///
/// Returned by [`SceneManager::add`](crate::SceneManager::add); lets
/// [`SceneManager::modify`](crate::SceneManager::modify) hand out `&mut Circle`,
/// `&mut Segment`, and so on.
pub struct Handle<S> {
    id: PrimitiveId,
    _shape: PhantomData<fn() -> S>,
}

impl<S: Shape> Handle<S> {
    pub(crate) const fn new(id: PrimitiveId) -> Self {
        Self {
            id,
            _shape: PhantomData,
        }
    }
}

impl<S> Handle<S> {
    /// The untyped identifier.
    pub const fn id(self) -> PrimitiveId {
        self.id
    }
}

impl<S> Clone for Handle<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Handle<S> {}

impl<S> PartialEq for Handle<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S> Eq for Handle<S> {}

impl<S> core::hash::Hash for Handle<S> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<S> fmt::Debug for Handle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&self.id).finish()
    }
}

impl<S> From<Handle<S>> for PrimitiveId {
    fn from(handle: Handle<S>) -> Self {
        handle.id
    }
}
