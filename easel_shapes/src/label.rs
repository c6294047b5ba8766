// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text labels and their cached font descriptor.

use alloc::sync::Arc;

use kurbo::{Point, Vec2};

use crate::color::ColorRef;

/// Family used when none is given.
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

bitflags::bitflags! {
    /// Style bits of a font request.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FontStyle: u8 {
        /// Bold weight.
        const BOLD   = 0b0000_0001;
        /// Italic slant.
        const ITALIC = 0b0000_0010;
    }
}

/// What a host text service needs to pick a face: family, pixel size and style.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontDescriptor {
    /// Font family name.
    pub family: Arc<str>,
    /// Size in pixels; always at least `1`.
    pub size: u32,
    /// Bold/italic bits.
    pub style: FontStyle,
}

impl FontDescriptor {
    /// CSS-style weight: `700` when bold, `400` otherwise.
    pub fn weight(&self) -> u16 {
        if self.style.contains(FontStyle::BOLD) {
            700
        } else {
            400
        }
    }

    /// Whether the italic bit is set.
    pub fn is_italic(&self) -> bool {
        self.style.contains(FontStyle::ITALIC)
    }
}

/// A run of text drawn with its baseline starting at `position`.
///
/// The [`FontDescriptor`] is derived from family, size, bold and italic, and is rebuilt
/// by every setter that changes one of them.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    position: Point,
    text: Arc<str>,
    family: Arc<str>,
    size: u32,
    bold: bool,
    italic: bool,
    color: ColorRef,
    layer: i32,
    font: FontDescriptor,
}

impl Label {
    /// Create a regular-weight label in [`DEFAULT_FONT_FAMILY`] on layer `0`.
    ///
    /// A `font_size` of `0` is stored as `1`.
    pub fn new(
        text: impl Into<Arc<str>>,
        font_size: u32,
        position: Point,
        color: impl Into<ColorRef>,
    ) -> Self {
        let family: Arc<str> = Arc::from(DEFAULT_FONT_FAMILY);
        let size = font_size.max(1);
        Self {
            position,
            text: text.into(),
            font: FontDescriptor {
                family: family.clone(),
                size,
                style: FontStyle::empty(),
            },
            family,
            size,
            bold: false,
            italic: false,
            color: color.into(),
            layer: 0,
        }
    }

    /// Builder: place the label on `layer`.
    #[must_use]
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// Builder: use `family`.
    #[must_use]
    pub fn with_family(mut self, family: impl Into<Arc<str>>) -> Self {
        self.set_font_family(family);
        self
    }

    /// Builder: set bold and italic.
    #[must_use]
    pub fn with_style(mut self, bold: bool, italic: bool) -> Self {
        self.bold = bold;
        self.italic = italic;
        self.refresh_font();
        self
    }

    /// Baseline origin.
    pub fn position(&self) -> Point {
        self.position
    }

    /// The text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Font family name.
    pub fn font_family(&self) -> &str {
        &self.family
    }

    /// Font size in pixels.
    pub fn font_size(&self) -> u32 {
        self.size
    }

    /// Whether the label is bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Whether the label is italic.
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// The cached font descriptor.
    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    /// Paint color.
    pub fn color(&self) -> &ColorRef {
        &self.color
    }

    /// Z-order layer; higher draws on top.
    pub fn layer(&self) -> i32 {
        self.layer
    }

    /// Move the baseline origin.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Translate by `delta`.
    pub fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<Arc<str>>) {
        self.text = text.into();
    }

    /// Change the font size; `0` is stored as `1`.
    pub fn set_font_size(&mut self, size: u32) {
        self.size = size.max(1);
        self.refresh_font();
    }

    /// Change the font family.
    pub fn set_font_family(&mut self, family: impl Into<Arc<str>>) {
        self.family = family.into();
        self.refresh_font();
    }

    /// Toggle bold.
    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
        self.refresh_font();
    }

    /// Toggle italic.
    pub fn set_italic(&mut self, italic: bool) {
        self.italic = italic;
        self.refresh_font();
    }

    /// Change the paint color.
    pub fn set_color(&mut self, color: impl Into<ColorRef>) {
        self.color = color.into();
    }

    /// Change the layer.
    pub fn set_layer(&mut self, layer: i32) {
        self.layer = layer;
    }

    fn refresh_font(&mut self) {
        let mut style = FontStyle::empty();
        style.set(FontStyle::BOLD, self.bold);
        style.set(FontStyle::ITALIC, self.italic);
        self.font = FontDescriptor {
            family: self.family.clone(),
            size: self.size,
            style,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn label() -> Label {
        Label::new("score: 0", 12, Point::new(10.0, 20.0), Rgb::YELLOW)
    }

    #[test]
    fn defaults() {
        let l = label();
        assert_eq!(l.font().family.as_ref(), DEFAULT_FONT_FAMILY);
        assert_eq!(l.font().size, 12);
        assert_eq!(l.font().weight(), 400);
        assert!(!l.font().is_italic());
        assert_eq!(l.text(), "score: 0");
    }

    #[test]
    fn font_follows_every_font_setter() {
        let mut l = label();
        l.set_bold(true);
        assert_eq!(l.font().weight(), 700);
        l.set_italic(true);
        assert_eq!(l.font().style, FontStyle::BOLD | FontStyle::ITALIC);
        l.set_font_size(30);
        assert_eq!(l.font().size, 30);
        l.set_font_family("monospace");
        assert_eq!(l.font().family.as_ref(), "monospace");
        l.set_bold(false);
        assert_eq!(l.font().style, FontStyle::ITALIC);
    }

    #[test]
    fn zero_font_size_is_clamped() {
        let mut l = Label::new("x", 0, Point::ORIGIN, "white");
        assert_eq!(l.font_size(), 1);
        l.set_font_size(0);
        assert_eq!(l.font().size, 1);
    }

    #[test]
    fn text_and_color_do_not_touch_font() {
        let mut l = label().with_style(true, false);
        let before = l.font().clone();
        l.set_text("score: 10");
        l.set_color("red");
        l.move_by(Vec2::new(1.0, 1.0));
        assert_eq!(l.font(), &before);
        assert_eq!(l.text(), "score: 10");
        assert_eq!(l.position(), Point::new(11.0, 21.0));
    }
}
