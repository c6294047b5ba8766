// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core display list: slots, generations, and the layer ordering.

use easel_shapes::Primitive;

use crate::error::SceneError;
use crate::types::{MAX_ITEMS, PrimitiveId};

/// Layer-ordered collection of primitives.
///
/// This is the single-threaded core behind [`SceneManager`](crate::SceneManager).
/// Iteration yields primitives in draw order: ascending layer, and insertion order
/// within a layer.
pub struct DisplayList {
    slots: Vec<Option<Entry>>, // slots
    generations: Vec<u32>,     // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    order: Vec<PrimitiveId>, // draw order
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for DisplayList {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DisplayList")
            .field("slots_total", &self.slots.len())
            .field("live", &self.order.len())
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Entry {
    generation: u32,
    primitive: Primitive,
}

impl DisplayList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Number of live primitives.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Add a primitive behind every existing primitive on the same or a lower layer.
    ///
    /// The new item lands just before the first entry whose layer strictly exceeds its own,
    /// or at the end when there is none. Fails once [`MAX_ITEMS`] primitives are live.
    pub fn insert(&mut self, primitive: Primitive) -> Result<PrimitiveId, SceneError> {
        if self.order.len() >= MAX_ITEMS {
            return Err(SceneError::CapacityExceeded { limit: MAX_ITEMS });
        }
        let layer = primitive.layer();
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            // Retired slots never reach the free list, so this cannot overflow.
            let generation = self.generations[idx] + 1;
            self.generations[idx] = generation;
            self.slots[idx] = Some(Entry {
                generation,
                primitive,
            });
            #[allow(
                clippy::cast_possible_truncation,
                reason = "PrimitiveId uses 32-bit indices; MAX_ITEMS bounds the slot count."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(Entry {
                generation,
                primitive,
            }));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "PrimitiveId uses 32-bit indices; MAX_ITEMS bounds the slot count."
            )]
            ((self.slots.len() - 1) as u32, generation)
        };
        let id = PrimitiveId::new(idx, generation);
        self.place(id, layer);
        Ok(id)
    }

    /// Remove a primitive, returning it. Stale or unknown ids are ignored.
    pub fn remove(&mut self, id: PrimitiveId) -> Option<Primitive> {
        if !self.is_alive(id) {
            return None;
        }
        if let Some(pos) = self.order.iter().position(|o| *o == id) {
            self.order.remove(pos);
        }
        self.release_slot(id.idx());
        self.slots[id.idx()].take().map(|e| e.primitive)
    }

    /// Remove every primitive. All outstanding ids become stale.
    pub fn clear(&mut self) {
        for id in core::mem::take(&mut self.order) {
            self.slots[id.idx()] = None;
            self.release_slot(id.idx());
        }
    }

    /// Returns true if `id` refers to a live primitive.
    pub fn is_alive(&self, id: PrimitiveId) -> bool {
        self.slots
            .get(id.idx())
            .and_then(|e| e.as_ref())
            .is_some_and(|e| e.generation == id.generation())
    }

    /// Borrow a live primitive.
    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.entry(id).map(|e| &e.primitive)
    }

    /// Mutate a live primitive in place.
    ///
    /// If the closure changes the primitive's layer, the primitive moves to its new layer
    /// as the most recently added member of that layer.
    ///
    /// The closure works on a copy that is written back only when it returns, so a panic
    /// inside `f` leaves the list untouched.
    pub fn modify<R>(&mut self, id: PrimitiveId, f: impl FnOnce(&mut Primitive) -> R) -> Option<R> {
        let mut edited = self.entry(id)?.primitive.clone();
        let out = f(&mut edited);
        let after = edited.layer();
        let entry = self.entry_mut(id)?;
        let before = entry.primitive.layer();
        entry.primitive = edited;
        if before != after {
            if let Some(pos) = self.order.iter().position(|o| *o == id) {
                self.order.remove(pos);
            }
            self.place(id, after);
        }
        Some(out)
    }

    /// Iterate live primitives in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveId, &Primitive)> + '_ {
        self.order.iter().map(|id| (*id, &self.live(*id).primitive))
    }

    /// Copy the primitives, in draw order, into `out` (replacing its contents).
    pub fn snapshot_into(&self, out: &mut Vec<Primitive>) {
        out.clear();
        out.extend(self.iter().map(|(_, p)| p.clone()));
    }

    // --- internals ---

    /// Return a slot to the free list, or retire it once its generation is exhausted.
    fn release_slot(&mut self, idx: usize) {
        if self.generations[idx] < u32::MAX {
            self.free_list.push(idx);
        }
    }

    fn place(&mut self, id: PrimitiveId, layer: i32) {
        // `order` is sorted by layer, so the first strictly-greater entry is a partition point.
        let pos = self
            .order
            .partition_point(|o| self.live(*o).primitive.layer() <= layer);
        self.order.insert(pos, id);
    }

    fn entry(&self, id: PrimitiveId) -> Option<&Entry> {
        let e = self.slots.get(id.idx())?.as_ref()?;
        (e.generation == id.generation()).then_some(e)
    }

    fn entry_mut(&mut self, id: PrimitiveId) -> Option<&mut Entry> {
        let e = self.slots.get_mut(id.idx())?.as_mut()?;
        if e.generation != id.generation() {
            return None;
        }
        Some(e)
    }

    /// Access an entry listed in `order`; panics if the ordering and slots disagree.
    fn live(&self, id: PrimitiveId) -> &Entry {
        self.slots[id.idx()]
            .as_ref()
            .expect("draw order holds only live ids")
    }
}
