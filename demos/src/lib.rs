// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Easel demos: logging setup and a placeholder text service.

use std::io;
use std::path::{Path, PathBuf};

use easel_render::{FrameBuffer, TextRasterizer, raster};
use easel_shapes::{Label, Rgb};
use kurbo::Rect;

pub mod logging {
    //! `tracing` subscriber setup.

    use tracing_subscriber::EnvFilter;

    /// Install a formatting subscriber.
    ///
    /// With `debug` the default level is `debug` and `RUST_LOG` may override it; without it
    /// the level is fixed at `info` so a stray `RUST_LOG` cannot flood the output.
    pub fn init(debug: bool) {
        let level = if debug { "debug" } else { "info" };
        let filter = if debug {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
        } else {
            EnvFilter::new(level)
        };
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}

/// Whether `--debug` (or `-d`) was passed on the command line.
pub fn debug_requested() -> bool {
    std::env::args().skip(1).any(|a| a == "--debug" || a == "-d")
}

/// Stand-in text service: draws each non-space character as a solid block sitting on the
/// baseline, sized from the label's font.
#[derive(Copy, Clone, Debug, Default)]
pub struct BlockText;

impl TextRasterizer for BlockText {
    fn draw_label(&mut self, frame: &mut FrameBuffer, label: &Label, color: Rgb) {
        let font = label.font();
        let size = f64::from(font.size);
        let advance = size * if font.weight() >= 700 { 0.7 } else { 0.6 };
        let slant = if font.is_italic() { size * 0.1 } else { 0.0 };
        let origin = label.position();
        for (i, ch) in label.text().chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            #[allow(
                clippy::cast_precision_loss,
                reason = "labels are far shorter than 2^52 characters."
            )]
            let x = origin.x + advance * i as f64 + slant;
            let glyph = Rect::new(x, origin.y - size * 0.7, x + advance * 0.8, origin.y);
            raster::fill_rect(frame, glyph, color);
        }
    }
}

/// Write `frame` as `<dir>/<name>.ppm`, where `dir` is `target/easel-demos` under the
/// current directory. Logs and returns the path written.
pub fn save_ppm(frame: &FrameBuffer, name: &str) -> io::Result<PathBuf> {
    let dir = Path::new("target").join("easel-demos");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{name}.ppm"));
    std::fs::write(&path, frame.to_ppm())?;
    tracing::info!(
        path = %path.display(),
        width = frame.width(),
        height = frame.height(),
        "saved frame"
    );
    Ok(path)
}
