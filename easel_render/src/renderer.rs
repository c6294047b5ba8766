// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The double-buffered renderer and its fixed-cadence thread.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use easel_scene::SceneManager;
use easel_shapes::Primitive;

use crate::config::RenderConfig;
use crate::frame::{FrameBuffer, FramePair};
use crate::host::{NullText, Presenter, TextRasterizer};
use crate::palette::Palette;
use crate::raster;
use crate::state::{RenderState, StateCell};

/// Name given to the render thread.
pub const RENDER_THREAD_NAME: &str = "easel-render";

/// Draws primitives into a back buffer, swaps, and hands the front buffer to a [`Presenter`].
///
/// Use [`render`](Self::render) or [`tick`](Self::tick) to drive it by hand, or
/// [`spawn`](Self::spawn) to run it on its own thread until the scene exits.
pub struct Renderer {
    config: RenderConfig,
    frames: FramePair,
    palette: Palette,
    text: Box<dyn TextRasterizer>,
    presenter: Box<dyn Presenter>,
    scratch: Vec<Primitive>,
    state: Arc<StateCell>,
}

impl core::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Renderer")
            .field("config", &self.config)
            .field("palette", &self.palette.len())
            .field("state", &self.state.get())
            .finish_non_exhaustive()
    }
}

impl Renderer {
    /// A renderer that presents to `presenter` and draws no text.
    pub fn new(config: RenderConfig, presenter: impl Presenter + 'static) -> Self {
        Self {
            frames: FramePair::new(config.width, config.height),
            config,
            palette: Palette::new(),
            text: Box::new(NullText),
            presenter: Box::new(presenter),
            scratch: Vec::new(),
            state: Arc::new(StateCell::new()),
        }
    }

    /// Use `text` to draw labels.
    #[must_use]
    pub fn with_text(mut self, text: impl TextRasterizer + 'static) -> Self {
        self.text = Box::new(text);
        self
    }

    /// The settings this renderer was built with.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RenderState {
        self.state.get()
    }

    /// The last completed frame.
    pub fn frame(&self) -> &FrameBuffer {
        self.frames.front()
    }

    /// Draw `primitives` in order onto a cleared back buffer, swap, and present.
    pub fn render(&mut self, primitives: &[Primitive]) {
        let back = self.frames.back_mut();
        back.clear(self.config.background);
        for primitive in primitives {
            draw_primitive(back, &mut self.palette, self.text.as_mut(), primitive);
        }
        self.frames.swap();
        self.presenter.present(self.frames.front());
    }

    /// Snapshot `scene` and render it.
    pub fn tick(&mut self, scene: &SceneManager) {
        let mut scratch = core::mem::take(&mut self.scratch);
        scene.snapshot_into(&mut scratch);
        self.render(&scratch);
        self.scratch = scratch;
    }

    /// Run the render loop on a dedicated thread until `scene` starts exiting.
    ///
    /// Each tick starts one [`tick_interval`](RenderConfig::tick_interval) after the previous
    /// one; ticks that overrun are not made up. When the scene exits the thread finishes its
    /// current tick, frees both buffers, and tears down the presenter.
    pub fn spawn(mut self, scene: Arc<SceneManager>) -> io::Result<RenderThread> {
        let state = Arc::clone(&self.state);
        let handle = thread::Builder::new()
            .name(RENDER_THREAD_NAME.to_string())
            .spawn(move || self.run(&scene))?;
        Ok(RenderThread { handle, state })
    }

    fn run(&mut self, scene: &SceneManager) -> FrameStats {
        let _ = self.state.transition(RenderState::Running);
        let interval = self.config.effective_tick_interval();
        let mut stats = FrameStats::default();
        let mut next = Instant::now();
        while !scene.is_exiting() {
            let started = Instant::now();
            self.tick(scene);
            let elapsed = started.elapsed();
            stats.record(elapsed, interval);
            tracing::trace!(frame = stats.frames, ?elapsed, "tick");

            next += interval;
            let now = Instant::now();
            if next > now {
                thread::sleep(next - now);
            } else {
                next = now;
            }
        }
        let _ = self.state.transition(RenderState::Stopping);
        self.frames.release();
        self.scratch = Vec::new();
        self.presenter.teardown();
        let _ = self.state.transition(RenderState::Stopped);
        tracing::debug!(
            frames = stats.frames,
            overruns = stats.overruns,
            "render thread finished"
        );
        stats
    }
}

fn draw_primitive(
    frame: &mut FrameBuffer,
    palette: &mut Palette,
    text: &mut dyn TextRasterizer,
    primitive: &Primitive,
) {
    let color = palette.resolve(primitive.color());
    match primitive {
        Primitive::Circle(c) => raster::fill_circle(frame, c.center(), c.radius(), color),
        Primitive::Rect(r) => raster::fill_rect(frame, r.bounds(), color),
        Primitive::Segment(s) => {
            if let Some(shaft) = s.shaft() {
                raster::stroke_line(frame, shaft, s.thickness(), color);
            }
            if let Some(head) = s.arrowhead() {
                raster::fill_triangle(frame, head.points(), color);
            }
        }
        Primitive::Label(l) => text.draw_label(frame, l, color),
    }
}

/// Counters reported by a finished render thread.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames rendered and presented.
    pub frames: u64,
    /// Frames that took longer than the tick interval.
    pub overruns: u64,
    /// Longest single frame.
    pub slowest: Duration,
    /// Sum of all frame times.
    pub total: Duration,
}

impl FrameStats {
    fn record(&mut self, elapsed: Duration, budget: Duration) {
        self.frames += 1;
        if elapsed > budget {
            self.overruns += 1;
        }
        self.slowest = self.slowest.max(elapsed);
        self.total += elapsed;
    }

    /// Mean frame time, or zero before the first frame.
    pub fn mean(&self) -> Duration {
        u32::try_from(self.frames)
            .ok()
            .filter(|&n| n > 0)
            .map_or(Duration::ZERO, |n| self.total / n)
    }
}

/// Handle to a running render thread.
#[derive(Debug)]
pub struct RenderThread {
    handle: JoinHandle<FrameStats>,
    state: Arc<StateCell>,
}

impl RenderThread {
    /// Current lifecycle state of the thread's renderer.
    pub fn state(&self) -> RenderState {
        self.state.get()
    }

    /// Whether the thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the thread to exit. Only returns once the scene has been asked to exit.
    pub fn join(self) -> thread::Result<FrameStats> {
        self.handle.join()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FrameCapture;
    use easel_shapes::{Circle, Label, Rect, Rgb, Segment};
    use kurbo::Point;

    fn renderer(w: u32, h: u32) -> (Renderer, FrameCapture) {
        let capture = FrameCapture::new();
        (Renderer::new(RenderConfig::new(w, h), capture.clone()), capture)
    }

    #[test]
    fn later_layers_paint_over_earlier_ones() {
        let (mut r, capture) = renderer(20, 20);
        let scene = SceneManager::new();
        scene
            .add(Rect::new(Point::new(5.0, 5.0), 10.0, 10.0, "blue").with_layer(1))
            .unwrap();
        scene
            .add(Circle::new(Point::new(10.0, 10.0), 16.0, "red"))
            .unwrap();
        r.tick(&scene);
        assert_eq!(r.frame().pixel(10, 10), Some(Rgb::BLUE));
        assert_eq!(r.frame().pixel(3, 10), Some(Rgb::RED));
        assert_eq!(r.frame().pixel(0, 0), Some(Rgb::BLACK));
        assert_eq!(capture.frames_presented(), 1);
        assert_eq!(capture.latest().as_ref(), Some(r.frame()));
    }

    #[test]
    fn arrow_shaft_stops_at_the_head() {
        let (mut r, _) = renderer(24, 10);
        let arrow = Segment::new(Point::new(0.0, 5.0), Point::new(20.0, 5.0), 4.0, "white")
            .with_arrow_fraction(0.5);
        r.render(&[arrow.into()]);
        let f = r.frame();
        assert_eq!(f.pixel(10, 5), Some(Rgb::WHITE), "shaft");
        assert_eq!(f.pixel(18, 5), Some(Rgb::WHITE), "head");
        assert_eq!(f.pixel(21, 5), Some(Rgb::BLACK), "nothing past the tip");
        // The head is narrower than the shaft near its tip.
        assert_eq!(f.pixel(19, 3), Some(Rgb::BLACK));
        assert_eq!(f.pixel(10, 3), Some(Rgb::WHITE));
    }

    #[test]
    fn unknown_colors_render_white() {
        let (mut r, _) = renderer(4, 4);
        r.render(&[Rect::new(Point::ORIGIN, 4.0, 4.0, "chartreuse").into()]);
        assert_eq!(r.frame().pixel(2, 2), Some(Rgb::WHITE));
    }

    #[test]
    fn each_frame_starts_from_the_background() {
        let capture = FrameCapture::new();
        let mut r = Renderer::new(
            RenderConfig::new(4, 4).with_background(Rgb::DARK_GREY),
            capture,
        );
        r.render(&[Rect::new(Point::ORIGIN, 4.0, 4.0, "red").into()]);
        r.render(&[]);
        assert!(
            r.frame()
                .pixels()
                .iter()
                .all(|&p| p == Rgb::DARK_GREY.to_u32())
        );
    }

    #[test]
    fn labels_go_to_the_text_service() {
        #[derive(Debug)]
        struct Marker;
        impl TextRasterizer for Marker {
            fn draw_label(&mut self, frame: &mut FrameBuffer, label: &Label, color: Rgb) {
                assert!(label.font().style.contains(easel_shapes::FontStyle::BOLD));
                let p = label.position();
                #[allow(clippy::cast_possible_truncation, reason = "test coordinates are small.")]
                frame.put(p.x as u32, p.y as u32, color);
            }
        }
        let (r, _) = renderer(8, 8);
        let mut r = r.with_text(Marker);
        let label = Label::new("hi", 12, Point::new(2.0, 6.0), "#FFC800").with_style(true, false);
        r.render(&[label.into()]);
        assert_eq!(r.frame().pixel(2, 6), Some(Rgb::ORANGE));
    }

    #[test]
    fn thread_runs_until_exit_then_tears_down() {
        let capture = FrameCapture::new();
        let scene = Arc::new(SceneManager::new());
        scene
            .add(Circle::new(Point::new(8.0, 8.0), 8.0, "yellow"))
            .unwrap();
        let renderer = Renderer::new(
            RenderConfig::new(16, 16).with_tick_interval(Duration::from_millis(1)),
            capture.clone(),
        );
        let thread = renderer.spawn(Arc::clone(&scene)).unwrap();

        let deadline = Instant::now() + Duration::from_secs(10);
        while capture.frames_presented() < 3 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        scene.request_exit();
        let stats = thread.join().unwrap();

        assert!(stats.frames >= 3);
        assert!(capture.is_torn_down());
        assert_eq!(capture.frames_presented(), stats.frames);
        let last = capture.latest().unwrap();
        assert_eq!(last.pixel(8, 8), Some(Rgb::YELLOW));
    }

    #[test]
    fn zero_interval_in_a_literal_config_still_paces() {
        let capture = FrameCapture::new();
        let scene = Arc::new(SceneManager::new());
        let config = RenderConfig {
            tick_interval: Duration::ZERO,
            ..RenderConfig::new(4, 4)
        };
        let thread = Renderer::new(config, capture.clone())
            .spawn(Arc::clone(&scene))
            .unwrap();
        thread::sleep(Duration::from_millis(30));
        scene.request_exit();
        let stats = thread.join().unwrap();
        // At a 1 ms floor, 30 ms allows a few dozen frames; a spinning loop renders thousands.
        assert!(stats.frames >= 1);
        assert!(stats.frames < 500, "rendered {} frames", stats.frames);
    }

    #[test]
    fn thread_reports_its_state() {
        let scene = Arc::new(SceneManager::new());
        let thread = Renderer::new(RenderConfig::new(2, 2), FrameCapture::new())
            .spawn(Arc::clone(&scene))
            .unwrap();
        scene.request_exit();
        while !thread.is_finished() {
            thread::yield_now();
        }
        assert_eq!(thread.state(), RenderState::Stopped);
        thread.join().unwrap();
    }
}
