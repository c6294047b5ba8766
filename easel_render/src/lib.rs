// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Render: a software rasterizer and fixed-cadence render thread for Easel scenes.
//!
//! - [`Renderer`] clears a back buffer, draws a snapshot of the scene in order, swaps, and
//!   hands the front buffer to a [`Presenter`].
//! - [`Renderer::spawn`] runs that on a named thread every
//!   [`tick_interval`](RenderConfig::tick_interval) until the scene starts exiting.
//! - [`Palette`] resolves color tokens once and caches the result.
//! - [`raster`] holds the scanline routines.
//! - [`TextRasterizer`] is the host's text service; [`NullText`] draws nothing.
//! - [`FrameCapture`] is a headless presenter that keeps the latest frame.
//!
//! ## Drawing rules
//!
//! - Circles are filled discs; rectangles are filled with their top-left at the origin.
//! - Segments are stroked with butt caps. With an arrowhead, the stroke stops at the head's
//!   base and the head is filled.
//! - Labels are passed to the text service together with their resolved color.
//! - Pixels are sampled at their centres, without anti-aliasing.
//!
//! ## Minimal usage
//!
//! ```
//! use easel_render::{FrameCapture, RenderConfig, Renderer};
//! use easel_scene::SceneManager;
//! use easel_shapes::{Circle, Rgb};
//! use kurbo::Point;
//!
//! let scene = SceneManager::new();
//! scene.add(Circle::new(Point::new(16.0, 16.0), 10.0, "cyan")).unwrap();
//!
//! let mut renderer = Renderer::new(RenderConfig::new(32, 32), FrameCapture::new());
//! renderer.tick(&scene);
//! assert_eq!(renderer.frame().pixel(16, 16), Some(Rgb::CYAN));
//! ```

mod config;
mod frame;
mod host;
mod palette;
pub mod raster;
mod renderer;
mod state;

pub use config::{DEFAULT_TICK_INTERVAL, MIN_TICK_INTERVAL, RenderConfig};
pub use frame::{FrameBuffer, FramePair};
pub use host::{FrameCapture, NullText, Presenter, TextRasterizer};
pub use palette::{MAX_CACHED_TOKENS, Palette};
pub use renderer::{FrameStats, RENDER_THREAD_NAME, RenderThread, Renderer};
pub use state::RenderState;
