// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Off-screen pixel buffers.

use easel_shapes::Rgb;

/// A `width × height` grid of packed `0x00RRGGBB` pixels, row-major, top row first.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("released", &self.is_released())
            .finish_non_exhaustive()
    }
}

impl FrameBuffer {
    /// A black frame of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![0; len],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color.to_u32());
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.index(x, y).map(|i| Rgb::from_u32(self.pixels[i]))
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Write one pixel; coordinates outside the frame are ignored.
    pub fn put(&mut self, x: u32, y: u32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.to_u32();
        }
    }

    /// Fill the half-open column range `[x0, x1)` of row `y`. The span is clipped to the frame.
    pub fn fill_span(&mut self, y: u32, x0: u32, x1: u32, color: Rgb) {
        if y >= self.height || self.pixels.is_empty() {
            return;
        }
        let x1 = x1.min(self.width);
        if x0 >= x1 {
            return;
        }
        let row = y as usize * self.width as usize;
        self.pixels[row + x0 as usize..row + x1 as usize].fill(color.to_u32());
    }

    /// Free the pixel storage. The frame keeps its size but has no pixels afterwards.
    pub fn release(&mut self) {
        self.pixels = Vec::new();
    }

    /// Whether [`release`](Self::release) has been called.
    pub fn is_released(&self) -> bool {
        self.pixels.is_empty() && self.width != 0 && self.height != 0
    }

    /// Serialize as a binary PPM (`P6`) image.
    pub fn to_ppm(&self) -> Vec<u8> {
        let header = format!("P6\n{} {}\n255\n", self.width, self.height);
        let mut out = Vec::with_capacity(header.len() + self.pixels.len() * 3);
        out.extend_from_slice(header.as_bytes());
        for &p in &self.pixels {
            let c = Rgb::from_u32(p);
            out.extend_from_slice(&[c.r, c.g, c.b]);
        }
        out
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
            .filter(|&i| i < self.pixels.len())
    }
}

/// Front and back buffers. Drawing targets the back; presenting reads the front.
#[derive(Clone, Debug)]
pub struct FramePair {
    front: FrameBuffer,
    back: FrameBuffer,
}

impl FramePair {
    /// Two black frames of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            front: FrameBuffer::new(width, height),
            back: FrameBuffer::new(width, height),
        }
    }

    /// The last completed frame.
    pub fn front(&self) -> &FrameBuffer {
        &self.front
    }

    /// The frame being drawn.
    pub fn back_mut(&mut self) -> &mut FrameBuffer {
        &mut self.back
    }

    /// Make the back buffer the new front.
    pub fn swap(&mut self) {
        core::mem::swap(&mut self.front, &mut self.back);
    }

    /// Free both buffers.
    pub fn release(&mut self) {
        self.front.release();
        self.back.release();
    }
}
