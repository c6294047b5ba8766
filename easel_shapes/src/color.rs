// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color tokens and their resolution to 24-bit RGB.
//!
//! Shapes carry a [`ColorRef`], which is either an exact [`Rgb`] value or a textual token.
//! Tokens are resolved with [`resolve_color`]:
//!
//! 1. one of the 13 named colors (case-insensitive, `-`, `_` and spaces ignored);
//! 2. a literal `#RRGGBB` hex string;
//! 3. anything else is white.
//!
//! Resolution never fails.
//!
//! ```
//! use easel_shapes::{Rgb, resolve_color};
//!
//! assert_eq!(resolve_color("RED"), resolve_color("red"));
//! assert_eq!(resolve_color("#00FF00"), Rgb::new(0, 255, 0));
//! assert_eq!(resolve_color("notacolor"), Rgb::WHITE);
//! ```

use alloc::string::String;
use alloc::sync::Arc;

/// An opaque 24-bit RGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Blue.
    pub const BLUE: Self = Self::new(0, 0, 255);
    /// Cyan.
    pub const CYAN: Self = Self::new(0, 255, 255);
    /// Dark grey.
    pub const DARK_GREY: Self = Self::new(64, 64, 64);
    /// Grey.
    pub const GREY: Self = Self::new(128, 128, 128);
    /// Green.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Light grey.
    pub const LIGHT_GREY: Self = Self::new(192, 192, 192);
    /// Magenta.
    pub const MAGENTA: Self = Self::new(255, 0, 255);
    /// Orange.
    pub const ORANGE: Self = Self::new(255, 200, 0);
    /// Pink.
    pub const PINK: Self = Self::new(255, 175, 175);
    /// Red.
    pub const RED: Self = Self::new(255, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Yellow.
    pub const YELLOW: Self = Self::new(255, 255, 0);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as `0x00RRGGBB`.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpack from `0x00RRGGBB`; the top byte is ignored.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "each channel is masked to 8 bits before narrowing."
    )]
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }
}

/// Named colors, keyed by their normalized (upper case, separator-free) spelling.
const NAMED_COLORS: [(&str, Rgb); 13] = [
    ("BLACK", Rgb::BLACK),
    ("BLUE", Rgb::BLUE),
    ("CYAN", Rgb::CYAN),
    ("DARKGREY", Rgb::DARK_GREY),
    ("GREY", Rgb::GREY),
    ("GREEN", Rgb::GREEN),
    ("LIGHTGREY", Rgb::LIGHT_GREY),
    ("MAGENTA", Rgb::MAGENTA),
    ("ORANGE", Rgb::ORANGE),
    ("PINK", Rgb::PINK),
    ("RED", Rgb::RED),
    ("WHITE", Rgb::WHITE),
    ("YELLOW", Rgb::YELLOW),
];

/// Look up one of the named colors.
///
/// Matching ignores ASCII case and the separators `-`, `_` and space,
/// so `"dark-grey"`, `"DARKGREY"` and `"Dark Grey"` all name the same color.
pub fn named_color(token: &str) -> Option<Rgb> {
    let normalized = || {
        token
            .bytes()
            .filter(|b| !matches!(b, b'-' | b'_' | b' '))
            .map(|b| b.to_ascii_uppercase())
    };
    NAMED_COLORS
        .iter()
        .find(|(name, _)| normalized().eq(name.bytes()))
        .map(|(_, rgb)| *rgb)
}

/// Parse a literal `#RRGGBB` token. Hex digits may be either case.
pub fn parse_hex(token: &str) -> Option<Rgb> {
    let digits = token.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Resolve a color token, falling back to white for anything unrecognized.
pub fn resolve_color(token: &str) -> Rgb {
    named_color(token)
        .or_else(|| parse_hex(token))
        .unwrap_or(Rgb::WHITE)
}

/// The color a shape is painted with.
///
/// Tokens are kept verbatim and resolved at draw time, so a renderer can cache resolutions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorRef {
    /// A textual token: a color name or `#RRGGBB`.
    Named(Arc<str>),
    /// An exact color.
    Rgb(Rgb),
}

impl ColorRef {
    /// Resolve to a concrete color without caching.
    pub fn resolve(&self) -> Rgb {
        match self {
            Self::Named(token) => resolve_color(token),
            Self::Rgb(rgb) => *rgb,
        }
    }
}

impl Default for ColorRef {
    fn default() -> Self {
        Self::Rgb(Rgb::WHITE)
    }
}

impl From<Rgb> for ColorRef {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<&str> for ColorRef {
    fn from(token: &str) -> Self {
        Self::Named(Arc::from(token))
    }
}

impl From<String> for ColorRef {
    fn from(token: String) -> Self {
        Self::Named(Arc::from(token))
    }
}
