// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-renderer color cache.

use std::collections::HashMap;
use std::sync::Arc;

use easel_shapes::{ColorRef, Rgb, named_color, parse_hex};

/// Most tokens a [`Palette`] keeps.
pub const MAX_CACHED_TOKENS: usize = 256;

/// Resolves [`ColorRef`] tokens to [`Rgb`], remembering up to [`MAX_CACHED_TOKENS`] of them.
///
/// Unrecognized tokens resolve to white. That fallback is cached as well, so a bad token is
/// parsed (and logged) once, not once per frame. Tokens first seen after the cache is full are
/// resolved on every use instead.
#[derive(Clone, Debug, Default)]
pub struct Palette {
    cache: HashMap<Arc<str>, Rgb>,
}

impl Palette {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a color reference.
    pub fn resolve(&mut self, color: &ColorRef) -> Rgb {
        match color {
            ColorRef::Rgb(rgb) => *rgb,
            ColorRef::Named(token) => {
                if let Some(rgb) = self.cache.get(token.as_ref()) {
                    return *rgb;
                }
                let cacheable = self.cache.len() < MAX_CACHED_TOKENS;
                let rgb = named_color(token)
                    .or_else(|| parse_hex(token))
                    .unwrap_or_else(|| {
                        if cacheable {
                            tracing::debug!(token = %token, "unresolved color; using white");
                        } else {
                            tracing::trace!(token = %token, "unresolved color; using white");
                        }
                        Rgb::WHITE
                    });
                if cacheable {
                    self.cache.insert(Arc::clone(token), rgb);
                }
                rgb
            }
        }
    }

    /// Number of cached tokens.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
