// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contracts with the presentation host: the surface that shows frames and the service
//! that draws text.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use easel_shapes::{Label, Rgb};

use crate::frame::FrameBuffer;

/// Shows completed frames on a native surface.
///
/// Window backends and test doubles both implement this, so the render loop is the same
/// with or without a window.
pub trait Presenter: Send {
    /// Display `frame`. Called once per tick from the render thread.
    fn present(&mut self, frame: &FrameBuffer);

    /// Close the surface. Called once, after the last frame and after the buffers are freed.
    fn teardown(&mut self) {}
}

/// Draws text into a frame on behalf of the renderer.
///
/// Font lookup and shaping belong to the host; the renderer only hands over the label, whose
/// [`font`](Label::font) descriptor is kept current, and its resolved color.
pub trait TextRasterizer: Send {
    /// Draw `label` with its baseline starting at [`Label::position`].
    fn draw_label(&mut self, frame: &mut FrameBuffer, label: &Label, color: Rgb);
}

/// A [`TextRasterizer`] that draws nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullText;

impl TextRasterizer for NullText {
    fn draw_label(&mut self, _frame: &mut FrameBuffer, _label: &Label, _color: Rgb) {}
}

/// Headless [`Presenter`] that keeps a copy of the latest frame.
///
/// Clones share state, so keep one clone to inspect what the render thread presented.
#[derive(Clone, Debug, Default)]
pub struct FrameCapture {
    inner: Arc<CaptureState>,
}

#[derive(Debug, Default)]
struct CaptureState {
    latest: Mutex<Option<FrameBuffer>>,
    presented: AtomicU64,
    torn_down: AtomicBool,
}

impl FrameCapture {
    /// A capture with nothing presented yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the most recently presented frame.
    pub fn latest(&self) -> Option<FrameBuffer> {
        self.inner
            .latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of frames presented so far.
    pub fn frames_presented(&self) -> u64 {
        self.inner.presented.load(Ordering::Acquire)
    }

    /// Whether the renderer has torn the surface down.
    pub fn is_torn_down(&self) -> bool {
        self.inner.torn_down.load(Ordering::Acquire)
    }
}

impl Presenter for FrameCapture {
    fn present(&mut self, frame: &FrameBuffer) {
        let mut latest = self
            .inner
            .latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match latest.as_mut() {
            Some(copy) if copy.width() == frame.width() && copy.height() == frame.height() => {
                copy.clone_from(frame);
            }
            _ => *latest = Some(frame.clone()),
        }
        self.inner.presented.fetch_add(1, Ordering::AcqRel);
    }

    fn teardown(&mut self) {
        self.inner.torn_down.store(true, Ordering::Release);
    }
}
