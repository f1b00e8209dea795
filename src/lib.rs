// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`svgpaint` is an SVG painting library.

It puts the [resvg](https://github.com/RazrFalcon/resvg) SVG engine behind
a renderer shaped like a GUI toolkit's own: load a document from a file,
from memory or from a registered virtual resource, query its viewbox and
elements, and paint it, whole or element by element, onto anything
implementing [`Painter`]. The painter's state is saved and restored around
every draw call.

A reference painter backed by a [`tiny_skia::Pixmap`] is provided, so the
crate is usable without a GUI toolkit at all.

[`Painter`]: trait.Painter.html
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::field_reassign_with_default)]
#![allow(clippy::uninlined_format_args)]

pub use tiny_skia;

#[cfg(feature = "text")]
pub use usvg_text_layout::fontdb;

mod engine;
mod error;
mod geom;
mod painter;
mod platform;
mod renderer;

pub use crate::error::Error;
pub use crate::geom::{Rect, ScreenRect, ScreenSize, Size, Transform};
pub use crate::painter::{Painter, PixmapPainter};
pub use crate::platform::{ResourceResolver, ScreenInfo, ScreenMetrics, StaticResources};
pub use crate::renderer::Renderer;

/// Initializes the library log.
///
/// Use it if you want to see any warnings.
///
/// Must be called only once.
///
/// All warnings will be printed to the `stderr`.
pub fn init_log() {
    if let Ok(()) = log::set_logger(&LOGGER) {
        log::set_max_level(log::LevelFilter::Warn);
    }
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if record.target().len() > 0 {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, record.args()),
                log::Level::Warn => {
                    eprintln!("Warning (in {}:{}): {}", target, line, record.args())
                }
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, record.args()),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, record.args()),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, record.args()),
            }
        }
    }

    fn flush(&self) {}
}
