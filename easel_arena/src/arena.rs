// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Arena`] facade.

use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use easel_input::{InputLatch, InputState, KeyCode, MouseButton};
use easel_render::{
    FrameCapture, FrameStats, NullText, Presenter, RenderState, RenderThread, Renderer,
    TextRasterizer,
};
use easel_scene::{Handle, PrimitiveId, SceneError, SceneManager};
use easel_shapes::{Primitive, Shape};
use kurbo::Point;

use crate::config::ArenaConfig;

/// A drawing surface with its own render thread.
///
/// The arena owns a [`SceneManager`], an [`InputLatch`], and a running [`Renderer`]. The
/// application thread adds and mutates shapes and polls input; the render thread redraws the
/// scene every tick. Dropping the arena stops the render thread.
#[derive(Debug)]
pub struct Arena {
    config: ArenaConfig,
    scene: Arc<SceneManager>,
    input: Arc<InputLatch>,
    render: Option<RenderThread>,
}

impl Arena {
    /// Open an arena of `width × height` pixels that renders every `tick_interval_ms`
    /// milliseconds and presents to `presenter`.
    pub fn create(
        width: u32,
        height: u32,
        tick_interval_ms: u64,
        presenter: impl Presenter + 'static,
    ) -> io::Result<Self> {
        let config = ArenaConfig::new(width, height)
            .with_tick_interval(Duration::from_millis(tick_interval_ms));
        Self::with_config(config, presenter, NullText)
    }

    /// Open an arena with full control over its settings and host services.
    pub fn with_config(
        config: ArenaConfig,
        presenter: impl Presenter + 'static,
        text: impl TextRasterizer + 'static,
    ) -> io::Result<Self> {
        let scene = Arc::new(SceneManager::new());
        let renderer = Renderer::new(config.render_config(), presenter).with_text(text);
        let render = renderer.spawn(Arc::clone(&scene))?;
        tracing::debug!(
            title = %config.title,
            width = config.width,
            height = config.height,
            tick = ?config.tick_interval,
            "arena opened"
        );
        Ok(Self {
            config,
            scene,
            input: Arc::new(InputLatch::new()),
            render: Some(render),
        })
    }

    /// Open an arena with no window. The returned [`FrameCapture`] sees every presented frame.
    pub fn headless(config: ArenaConfig) -> io::Result<(Self, FrameCapture)> {
        let capture = FrameCapture::new();
        let arena = Self::with_config(config, capture.clone(), NullText)?;
        Ok((arena, capture))
    }

    // --- scene ---

    /// Add a shape. It appears from the next tick on.
    ///
    /// Fails with [`SceneError::CapacityExceeded`] once, when the scene is full; the arena then
    /// shuts down and later adds fail with [`SceneError::Closed`].
    pub fn add<S: Shape>(&self, shape: S) -> Result<Handle<S>, SceneError> {
        self.scene.add(shape)
    }

    /// Remove a shape. Returns whether it was present.
    pub fn remove(&self, id: impl Into<PrimitiveId>) -> bool {
        self.scene.remove(id)
    }

    /// Remove every shape.
    pub fn clear(&self) {
        self.scene.clear();
    }

    /// Mutate a shape in place. Returns `None` for a removed shape or once exiting.
    pub fn modify<S: Shape, R>(&self, handle: Handle<S>, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.scene.modify(handle, f)
    }

    /// Copy of a shape.
    pub fn get<S: Shape + Clone>(&self, handle: Handle<S>) -> Option<S> {
        self.scene.get(handle)
    }

    /// The shapes in draw order.
    pub fn snapshot(&self) -> Vec<Primitive> {
        self.scene.snapshot()
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.scene.len()
    }

    /// Whether there are no shapes.
    pub fn is_empty(&self) -> bool {
        self.scene.is_empty()
    }

    /// The shared scene, for code that wants to hold it directly.
    pub fn scene(&self) -> &Arc<SceneManager> {
        &self.scene
    }

    // --- input ---

    /// Whether `key` is held.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.input.is_key_pressed(key)
    }

    /// Last pointer position.
    pub fn pointer_position(&self) -> Point {
        self.input.pointer()
    }

    /// Whether `button` is held. Only the left and right buttons are tracked.
    pub fn is_button_held(&self, button: MouseButton) -> bool {
        self.input.is_button_held(button)
    }

    /// Copy of all input state at once.
    pub fn input_state(&self) -> InputState {
        self.input.snapshot()
    }

    /// The latch the presentation host should feed events into.
    pub fn input(&self) -> Arc<InputLatch> {
        Arc::clone(&self.input)
    }

    // --- pacing and lifecycle ---

    /// Block the calling thread for the configured pause delay.
    pub fn pause(&self) {
        self.pause_for(self.config.pause_delay);
    }

    /// Block the calling thread for `duration`. Does not affect the render cadence.
    pub fn pause_for(&self, duration: Duration) {
        thread::sleep(duration);
    }

    /// Change the delay used by [`pause`](Self::pause).
    pub fn set_pause_delay(&mut self, delay: Duration) {
        self.config.pause_delay = delay;
    }

    /// The delay used by [`pause`](Self::pause).
    pub fn pause_delay(&self) -> Duration {
        self.config.pause_delay
    }

    /// Ask the arena to shut down. Further mutations are ignored and the render thread stops
    /// after its current tick.
    pub fn exit(&self) {
        self.scene.request_exit();
    }

    /// Whether the arena is shutting down.
    pub fn is_exiting(&self) -> bool {
        self.scene.is_exiting()
    }

    /// Lifecycle state of the render thread.
    pub fn render_state(&self) -> RenderState {
        self.render
            .as_ref()
            .map_or(RenderState::Stopped, RenderThread::state)
    }

    /// Drawable width.
    pub fn width(&self) -> u32 {
        self.config.width
    }

    /// Drawable height.
    pub fn height(&self) -> u32 {
        self.config.height
    }

    /// Window title.
    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// Wait for the render thread to stop and return its counters.
    ///
    /// Blocks until [`exit`](Self::exit) has been called (or the scene filled up). Returns
    /// `None` if the thread was already joined or panicked.
    pub fn join(&mut self) -> Option<FrameStats> {
        let thread = self.render.take()?;
        match thread.join() {
            Ok(stats) => Some(stats),
            Err(_) => {
                tracing::error!("render thread panicked");
                None
            }
        }
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        self.exit();
        let _ = self.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_input::InputEvent;
    use easel_shapes::{Circle, PrimitiveKind, Rect, Rgb, Segment};
    use std::time::Instant;

    fn small() -> ArenaConfig {
        ArenaConfig::new(40, 30).with_tick_interval(Duration::from_millis(1))
    }

    fn wait_for(capture: &FrameCapture, frames: u64) {
        let start = capture.frames_presented();
        let deadline = Instant::now() + Duration::from_secs(10);
        while capture.frames_presented() < start + frames && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn end_to_end_layer_order() {
        let (arena, capture) = Arena::headless(small()).unwrap();
        arena
            .add(Rect::new(Point::new(10.0, 10.0), 10.0, 10.0, "blue").with_layer(1))
            .unwrap();
        let ball = arena
            .add(Circle::new(Point::new(5.0, 5.0), 6.0, "red"))
            .unwrap();
        let kinds: Vec<_> = arena.snapshot().iter().map(Primitive::kind).collect();
        assert_eq!(kinds, vec![PrimitiveKind::Circle, PrimitiveKind::Rect]);

        // Moving the circle over the rectangle does not change draw order.
        let _ = arena.modify(ball, |c| c.set_center(Point::new(15.0, 15.0)));
        let kinds: Vec<_> = arena.snapshot().iter().map(Primitive::kind).collect();
        assert_eq!(kinds, vec![PrimitiveKind::Circle, PrimitiveKind::Rect]);

        wait_for(&capture, 2);
        let frame = capture.latest().unwrap();
        assert_eq!(frame.pixel(15, 15), Some(Rgb::BLUE));
    }

    #[test]
    fn input_reaches_the_caller() {
        let (arena, _) = Arena::headless(small()).unwrap();
        let host = arena.input();
        thread::spawn(move || {
            let _ = host.handle(InputEvent::KeyPressed(KeyCode::SPACE));
            let _ = host.handle(InputEvent::ButtonPressed(MouseButton::from_id(1)));
            let _ = host.handle(InputEvent::PointerMoved(Point::new(7.0, 9.0)));
        })
        .join()
        .unwrap();
        assert!(arena.is_key_pressed(KeyCode::SPACE));
        assert!(!arena.is_key_pressed(KeyCode::ESCAPE));
        assert!(arena.is_button_held(MouseButton::Left));
        assert!(!arena.is_button_held(MouseButton::Right));
        assert_eq!(arena.pointer_position(), Point::new(7.0, 9.0));
        assert_eq!(arena.input_state().pointer(), Point::new(7.0, 9.0));
    }

    #[test]
    fn exit_stops_rendering_and_mutation() {
        let (mut arena, capture) = Arena::headless(small()).unwrap();
        let line = arena
            .add(Segment::new(Point::ORIGIN, Point::new(10.0, 10.0), 2.0, "white"))
            .unwrap();
        wait_for(&capture, 1);
        arena.exit();
        assert!(arena.is_exiting());
        assert_eq!(
            arena.add(Circle::new(Point::ORIGIN, 1.0, "red")),
            Err(SceneError::Closed)
        );
        assert!(!arena.remove(line));
        assert!(arena.modify(line, |s| s.set_thickness(3.0)).is_none());

        let stats = arena.join().unwrap();
        assert!(stats.frames >= 1);
        assert!(capture.is_torn_down());
        assert_eq!(arena.render_state(), RenderState::Stopped);
        assert!(arena.join().is_none());
    }

    #[test]
    fn defaults_follow_the_classic_arena() {
        let config = ArenaConfig::default();
        assert_eq!(config.title, "Let's Play!");
        assert_eq!(config.tick_interval, Duration::from_millis(10));
        assert_eq!(config.pause_delay, Duration::from_millis(20));

        let mut arena = Arena::create(64, 48, 5, FrameCapture::new()).unwrap();
        assert_eq!((arena.width(), arena.height()), (64, 48));
        assert_eq!(arena.title(), "Let's Play!");
        arena.set_pause_delay(Duration::from_millis(1));
        assert_eq!(arena.pause_delay(), Duration::from_millis(1));
        arena.pause();
        assert!(arena.is_empty());
    }

    #[test]
    fn drop_joins_the_render_thread() {
        let (arena, capture) = Arena::headless(small()).unwrap();
        wait_for(&capture, 1);
        drop(arena);
        assert!(capture.is_torn_down());
    }
}
