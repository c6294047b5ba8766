// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use easel_render::{DEFAULT_TICK_INTERVAL, RenderConfig};
use easel_shapes::Rgb;

/// Window title used when none is given.
pub const DEFAULT_TITLE: &str = "Let's Play!";

/// Default delay used by [`Arena::pause`](crate::Arena::pause).
pub const DEFAULT_PAUSE_DELAY: Duration = Duration::from_millis(20);

/// Arena settings.
///
/// ```
/// use easel_arena::ArenaConfig;
/// use std::time::Duration;
///
/// let config = ArenaConfig::new(800, 600)
///     .with_title("Pong")
///     .with_tick_interval(Duration::from_millis(16));
/// assert_eq!(config.render_config().width, 800);
/// assert_eq!(config.pause_delay, Duration::from_millis(20));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Title for the host window.
    pub title: String,
    /// Drawable width in pixels.
    pub width: u32,
    /// Drawable height in pixels.
    pub height: u32,
    /// Interval between render ticks.
    pub tick_interval: Duration,
    /// How long [`Arena::pause`](crate::Arena::pause) blocks the caller.
    pub pause_delay: Duration,
    /// Frame background.
    pub background: Rgb,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        let render = RenderConfig::default();
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: render.width,
            height: render.height,
            tick_interval: DEFAULT_TICK_INTERVAL,
            pause_delay: DEFAULT_PAUSE_DELAY,
            background: render.background,
        }
    }
}

impl ArenaConfig {
    /// Default settings at the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the render tick interval.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Set the delay used by [`Arena::pause`](crate::Arena::pause).
    #[must_use]
    pub fn with_pause_delay(mut self, delay: Duration) -> Self {
        self.pause_delay = delay;
        self
    }

    /// Set the frame background.
    #[must_use]
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// The renderer settings implied by this config.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new(self.width, self.height)
            .with_tick_interval(self.tick_interval)
            .with_background(self.background)
    }
}
