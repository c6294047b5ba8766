// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use easel_shapes::Rgb;

/// Default interval between render ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Shortest interval the render loop will run at.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Renderer settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Time between the starts of consecutive ticks.
    pub tick_interval: Duration,
    /// Color each frame is cleared to before drawing.
    pub background: Rgb,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            tick_interval: DEFAULT_TICK_INTERVAL,
            background: Rgb::BLACK,
        }
    }
}

impl RenderConfig {
    /// Default settings at the given frame size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the tick interval. Intervals below [`MIN_TICK_INTERVAL`] are raised to it.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval.max(MIN_TICK_INTERVAL);
        self
    }

    /// The interval the render loop actually uses: `tick_interval`, but never below
    /// [`MIN_TICK_INTERVAL`].
    pub fn effective_tick_interval(&self) -> Duration {
        self.tick_interval.max(MIN_TICK_INTERVAL)
    }

    /// Set the background color.
    #[must_use]
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_is_floored() {
        let built = RenderConfig::new(4, 4).with_tick_interval(Duration::ZERO);
        assert_eq!(built.tick_interval, MIN_TICK_INTERVAL);

        let literal = RenderConfig {
            tick_interval: Duration::ZERO,
            ..RenderConfig::default()
        };
        assert_eq!(literal.effective_tick_interval(), MIN_TICK_INTERVAL);
        assert_eq!(
            RenderConfig::default().effective_tick_interval(),
            DEFAULT_TICK_INTERVAL
        );
    }
}
