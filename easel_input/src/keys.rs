// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key and mouse-button identifiers.

use core::fmt;

/// Raw key identifier as delivered by the host toolkit.
///
/// The constants use the classic virtual-key numbering, which matches ASCII for letters,
/// digits, space, and enter. Any other code the host produces is accepted as-is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub u32);

impl KeyCode {
    /// Enter / return.
    pub const ENTER: Self = Self(10);
    /// Either shift key.
    pub const SHIFT: Self = Self(16);
    /// Escape.
    pub const ESCAPE: Self = Self(27);
    /// Space bar.
    pub const SPACE: Self = Self(32);
    /// Left arrow.
    pub const LEFT: Self = Self(37);
    /// Up arrow.
    pub const UP: Self = Self(38);
    /// Right arrow.
    pub const RIGHT: Self = Self(39);
    /// Down arrow.
    pub const DOWN: Self = Self(40);
    /// Letter `O`.
    pub const O: Self = Self(79);
    /// Letter `X`.
    pub const X: Self = Self(88);
    /// Letter `Z`.
    pub const Z: Self = Self(90);

    /// Code for an ASCII letter or digit, ignoring case.
    ///
    /// Returns `None` for anything else.
    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        (c.is_ascii_uppercase() || c.is_ascii_digit()).then(|| Self(u32::from(c)))
    }

    /// Human-readable name for the named keys.
    pub fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::ENTER => "enter",
            Self::SHIFT => "shift",
            Self::ESCAPE => "escape",
            Self::SPACE => "space",
            Self::LEFT => "left",
            Self::UP => "up",
            Self::RIGHT => "right",
            Self::DOWN => "down",
            Self::O => "o",
            Self::X => "x",
            Self::Z => "z",
            _ => return None,
        })
    }
}

impl fmt::Debug for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "KeyCode({}: {name})", self.0),
            None => write!(f, "KeyCode({})", self.0),
        }
    }
}

/// A mouse button as identified by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Wheel / middle button.
    Middle,
    /// Secondary button.
    Right,
    /// Any other host button id.
    Other(u16),
}

impl MouseButton {
    /// Map a host button id: `1` is left, `2` middle, `3` right.
    pub fn from_id(id: u16) -> Self {
        match id {
            1 => Self::Left,
            2 => Self::Middle,
            3 => Self::Right,
            other => Self::Other(other),
        }
    }

    /// The latch bit for this button, if it is one that gets latched.
    pub fn latch_bit(self) -> Option<MouseButtons> {
        match self {
            Self::Left => Some(MouseButtons::LEFT),
            Self::Right => Some(MouseButtons::RIGHT),
            Self::Middle | Self::Other(_) => None,
        }
    }
}

bitflags::bitflags! {
    /// The set of latched mouse buttons currently held.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MouseButtons: u8 {
        /// Primary button held.
        const LEFT  = 0b0000_0001;
        /// Secondary button held.
        const RIGHT = 0b0000_0010;
    }
}
