// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::geom::{Rect, Transform};

/// A 2D painting surface.
///
/// This is the contract the [`Renderer`] draws through. It matches the
/// state-machine of a typical GUI toolkit painter: an implicit current
/// transform and render hints, managed via `save`/`restore` pairs.
///
/// [`Renderer`]: struct.Renderer.html
pub trait Painter {
    /// Saves the current painter state.
    fn save(&mut self);

    /// Restores the last saved painter state.
    fn restore(&mut self);

    /// Returns the painting boundaries.
    fn viewport(&self) -> Rect;

    /// Toggles edge antialiasing for subsequent drawing.
    fn set_antialiasing(&mut self, flag: bool);

    /// Returns the current transform.
    fn get_transform(&self) -> Transform;

    /// Applies the transform on top of the current one.
    fn apply_transform(&mut self, ts: &Transform);

    /// Draws a pixmap at the provided position.
    ///
    /// The position and the pixmap itself are subject to the current
    /// transform.
    fn draw_pixmap(&mut self, x: f64, y: f64, pixmap: &tiny_skia::Pixmap);
}


#[derive(Clone, Copy)]
struct PainterState {
    transform: Transform,
    antialiasing: bool,
}

impl Default for PainterState {
    fn default() -> Self {
        PainterState {
            transform: Transform::default(),
            antialiasing: false,
        }
    }
}

/// A painter backed by a `tiny_skia::Pixmap`.
pub struct PixmapPainter {
    pixmap: tiny_skia::Pixmap,
    state: PainterState,
    stack: Vec<PainterState>,
}

impl PixmapPainter {
    /// Creates a new painter over a transparent pixmap.
    ///
    /// Returns `None` when the allocation fails.
    pub fn new(width: u32, height: u32) -> Option<PixmapPainter> {
        let pixmap = tiny_skia::Pixmap::new(width, height)?;
        Some(PixmapPainter::from_pixmap(pixmap))
    }

    /// Creates a new painter over an existing pixmap.
    pub fn from_pixmap(pixmap: tiny_skia::Pixmap) -> PixmapPainter {
        PixmapPainter {
            pixmap,
            state: PainterState::default(),
            stack: Vec::new(),
        }
    }

    /// Returns a reference to the underlying pixmap.
    pub fn pixmap(&self) -> &tiny_skia::Pixmap {
        &self.pixmap
    }

    /// Consumes the painter and returns the underlying pixmap.
    pub fn into_pixmap(self) -> tiny_skia::Pixmap {
        self.pixmap
    }

    /// Saves the underlying pixmap as a PNG file.
    #[cfg(feature = "png-format")]
    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> bool {
        self.pixmap.save_png(path).is_ok()
    }
}

impl Painter for PixmapPainter {
    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::warn!("Unbalanced restore."),
        }
    }

    fn viewport(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.pixmap.width() as f64,
            self.pixmap.height() as f64,
        )
    }

    fn set_antialiasing(&mut self, flag: bool) {
        self.state.antialiasing = flag;
    }

    fn get_transform(&self) -> Transform {
        self.state.transform
    }

    fn apply_transform(&mut self, ts: &Transform) {
        self.state.transform.append(ts);
    }

    fn draw_pixmap(&mut self, x: f64, y: f64, pixmap: &tiny_skia::Pixmap) {
        let quality = if self.state.antialiasing {
            tiny_skia::FilterQuality::Bilinear
        } else {
            tiny_skia::FilterQuality::Nearest
        };

        let mut ts = self.state.transform;
        ts.append(&Transform::new_translate(x, y));

        self.pixmap.draw_pixmap(
            0,
            0,
            pixmap.as_ref(),
            &tiny_skia::PixmapPaint {
                quality,
                ..tiny_skia::PixmapPaint::default()
            },
            ts.to_tiny_skia(),
            None,
        );
    }
}
