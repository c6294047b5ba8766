// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-thread lifecycle.

use std::sync::atomic::{AtomicU8, Ordering};

/// Where a renderer is in its life.
///
/// The only legal path is `Idle → Running → Stopping → Stopped`; a renderer that never
/// starts may also go straight from `Idle` to `Stopped`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RenderState {
    /// Built but not yet ticking.
    Idle = 0,
    /// Ticking at a fixed cadence.
    Running = 1,
    /// Finished its last tick; freeing buffers and tearing down the surface.
    Stopping = 2,
    /// Done.
    Stopped = 3,
}

impl RenderState {
    /// Whether moving from `self` to `to` is allowed. Staying put is always allowed.
    pub fn can_transition(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Idle, Self::Running)
                | (Self::Running, Self::Stopping)
                | (Self::Stopping, Self::Stopped)
                | (Self::Idle, Self::Stopped)
        ) || self == to
    }

    fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::Idle,
            1 => Self::Running,
            2 => Self::Stopping,
            _ => Self::Stopped,
        }
    }
}

/// A [`RenderState`] shared between the render thread and its owner.
#[derive(Debug)]
pub(crate) struct StateCell(AtomicU8);

impl StateCell {
    pub(crate) fn new() -> Self {
        Self(AtomicU8::new(RenderState::Idle as u8))
    }

    pub(crate) fn get(&self) -> RenderState {
        RenderState::from_u8(self.0.load(Ordering::Acquire))
    }

    /// Move to `to` if that is a legal step from the current state. Returns whether it moved.
    pub(crate) fn transition(&self, to: RenderState) -> bool {
        let mut current = self.get();
        loop {
            if !current.can_transition(to) {
                tracing::debug!(from = ?current, ?to, "rejected render state transition");
                return false;
            }
            match self.0.compare_exchange_weak(
                current as u8,
                to as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    if current != to {
                        tracing::debug!(from = ?current, ?to, "render state");
                    }
                    return true;
                }
                Err(actual) => current = RenderState::from_u8(actual),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_forward_steps_are_legal() {
        use RenderState::*;
        assert!(Idle.can_transition(Running));
        assert!(Running.can_transition(Stopping));
        assert!(Stopping.can_transition(Stopped));
        assert!(Idle.can_transition(Stopped));
        assert!(Running.can_transition(Running));
        assert!(!Running.can_transition(Idle));
        assert!(!Stopped.can_transition(Running));
        assert!(!Running.can_transition(Stopped));
        assert!(!Idle.can_transition(Stopping));
    }

    #[test]
    fn cell_follows_the_lifecycle() {
        let cell = StateCell::new();
        assert_eq!(cell.get(), RenderState::Idle);
        assert!(!cell.transition(RenderState::Stopping));
        assert!(cell.transition(RenderState::Running));
        assert!(cell.transition(RenderState::Stopping));
        assert!(cell.transition(RenderState::Stopped));
        assert!(!cell.transition(RenderState::Running));
        assert_eq!(cell.get(), RenderState::Stopped);
    }
}
