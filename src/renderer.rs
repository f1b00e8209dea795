// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

#[cfg(feature = "text")]
use usvg_text_layout::fontdb;

use crate::engine;
use crate::error::Error;
use crate::geom::{Rect, ScreenRect, ScreenSize, Size, Transform};
use crate::painter::Painter;
use crate::platform::{ResourceResolver, ScreenMetrics};

/// The prefix of virtual resource paths.
const RESOURCE_PREFIX: &str = ":/";

struct Document {
    tree: engine::Tree,
    view_box: Rect,
}

/// An SVG renderer.
///
/// Owns at most one parsed document at a time and paints it onto
/// anything implementing [`Painter`]. Loading a new document always
/// releases the previous one first, even when loading fails.
///
/// # Example
///
/// ```
/// use svgpaint::Renderer;
///
/// let mut renderer = Renderer::new();
/// let ok = renderer.load_data(
///     b"<svg xmlns='http://www.w3.org/2000/svg' width='10' height='10' viewBox='0 0 10 10'/>",
/// );
/// assert!(ok);
/// assert!(renderer.is_valid());
/// ```
///
/// [`Painter`]: trait.Painter.html
pub struct Renderer {
    opt: engine::Options,
    doc: Option<Document>,
    err_msg: String,
    screen: Option<Box<dyn ScreenMetrics>>,
    resources: Option<Box<dyn ResourceResolver>>,
    #[cfg(feature = "text")]
    fontdb: fontdb::Database,
}

impl Renderer {
    /// Creates a new renderer without a document.
    pub fn new() -> Self {
        Renderer {
            opt: engine::Options::default(),
            doc: None,
            err_msg: String::new(),
            screen: None,
            resources: None,
            #[cfg(feature = "text")]
            fontdb: fontdb::Database::new(),
        }
    }

    /// Creates a new renderer and loads the provided file.
    ///
    /// Check [`is_valid`] and [`error_string`] for the result.
    ///
    /// [`is_valid`]: #method.is_valid
    /// [`error_string`]: #method.error_string
    pub fn from_file(path: &str) -> Self {
        let mut renderer = Renderer::new();
        renderer.load_file(path);
        renderer
    }

    /// Creates a new renderer and loads the provided data.
    ///
    /// Check [`is_valid`] and [`error_string`] for the result.
    ///
    /// [`is_valid`]: #method.is_valid
    /// [`error_string`]: #method.error_string
    pub fn from_data(data: &[u8]) -> Self {
        let mut renderer = Renderer::new();
        renderer.load_data(data);
        renderer
    }

    /// Attaches a display metrics source.
    ///
    /// The parsing DPI becomes `logical_dpi * device_pixel_ratio`,
    /// immediately and on every later load. Without a source the
    /// default DPI of 96 is used.
    pub fn set_screen_metrics<M: ScreenMetrics + 'static>(&mut self, metrics: M) {
        self.opt.dpi = metrics.logical_dpi() * metrics.device_pixel_ratio();
        self.screen = Some(Box::new(metrics));
    }

    /// Attaches a virtual resource reader.
    ///
    /// Load paths starting with `:/` are resolved through it.
    pub fn set_resource_resolver<R: ResourceResolver + 'static>(&mut self, resolver: R) {
        self.resources = Some(Box::new(resolver));
    }

    /// Loads system fonts for text rendering.
    ///
    /// Has no effect on an already loaded document.
    #[cfg(feature = "text")]
    pub fn load_system_fonts(&mut self) {
        self.fontdb.load_system_fonts();
    }

    /// Loads font data for text rendering.
    ///
    /// Has no effect on an already loaded document.
    #[cfg(feature = "text")]
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.fontdb.load_font_data(data);
    }

    /// Loads an SVG file.
    ///
    /// `.svg` and `.svgz` files are supported. Paths starting with `:/`
    /// are read through the attached resource resolver instead of the
    /// filesystem.
    ///
    /// Returns `false` and releases the previous document on failure,
    /// except for a resource resolver miss, which leaves the renderer
    /// untouched.
    pub fn load_file(&mut self, path: &str) -> bool {
        if path.starts_with(RESOURCE_PREFIX) {
            let data = match &self.resources {
                Some(resolver) => resolver.read(path),
                None => None,
            };

            return match data {
                Some(data) => self.load_data(&data),
                None => false,
            };
        }

        self.reset();
        self.opt.base_path = Some(PathBuf::from(path));

        let result = engine::parse_tree_from_file(path, &self.opt);
        self.finish_load(result)
    }

    /// Loads SVG data.
    ///
    /// The data can contain an SVG string or gzip compressed data.
    ///
    /// Returns `false` and releases the previous document on failure.
    pub fn load_data(&mut self, data: &[u8]) -> bool {
        self.reset();

        let result = engine::parse_tree_from_data(data, &self.opt);
        self.finish_load(result)
    }

    /// Checks that the renderer has a document.
    pub fn is_valid(&self) -> bool {
        self.doc.is_some()
    }

    /// Returns the last loading error message.
    ///
    /// Empty when the last load succeeded.
    pub fn error_string(&self) -> &str {
        &self.err_msg
    }

    /// Checks that the current document has no renderable content.
    ///
    /// Also `true` when there is no document at all.
    pub fn is_empty(&self) -> bool {
        match &self.doc {
            Some(doc) => doc.tree.is_empty(),
            None => true,
        }
    }

    /// Returns the default size of the document, in pixels.
    ///
    /// Fractions are truncated.
    pub fn default_size(&self) -> ScreenSize {
        self.default_size_f().to_screen_size()
    }

    /// Returns the default size of the document.
    ///
    /// A zero size when there is no document.
    pub fn default_size_f(&self) -> Size {
        self.view_box_f().size()
    }

    /// Returns the document viewbox, in pixels.
    ///
    /// Fractions are truncated.
    pub fn view_box(&self) -> ScreenRect {
        self.view_box_f().to_screen_rect()
    }

    /// Returns the document viewbox.
    ///
    /// A zero rect when there is no document.
    pub fn view_box_f(&self) -> Rect {
        match &self.doc {
            Some(doc) => doc.view_box,
            None => Rect::default(),
        }
    }

    /// Returns the bounding box of an element with the provided ID.
    ///
    /// Ancestor transforms do not affect it. A zero rect when there is
    /// no document or no such element.
    pub fn bounds_on_element(&self, id: &str) -> Rect {
        match &self.doc {
            Some(doc) => doc.tree.node_bbox(id).unwrap_or_default(),
            None => Rect::default(),
        }
    }

    /// Checks that an element with the provided ID exists.
    pub fn element_exists(&self, id: &str) -> bool {
        match &self.doc {
            Some(doc) => doc.tree.node_exists(id),
            None => false,
        }
    }

    /// Returns the absolute transform of an element with the provided ID.
    ///
    /// The identity transform when there is no document or no such
    /// element.
    pub fn transform_for_element(&self, id: &str) -> Transform {
        match &self.doc {
            Some(doc) => doc.tree.node_transform(id).unwrap_or_default(),
            None => Transform::default(),
        }
    }

    /// Renders the document onto the painter's whole viewport.
    pub fn render(&self, painter: &mut dyn Painter) {
        self.render_to(painter, Rect::default());
    }

    /// Renders the document into `bounds` on the painter.
    ///
    /// The document is scaled to fill `bounds` non-uniformly. When
    /// `bounds` is not a valid rect, the painter's viewport is used.
    ///
    /// The painter state is saved on entry and restored on return.
    pub fn render_to(&self, painter: &mut dyn Painter, bounds: Rect) {
        let doc = match &self.doc {
            Some(v) => v,
            None => return,
        };

        let view_box = doc.view_box;
        let r = if bounds.is_valid() { bounds } else { painter.viewport() };

        let guard = StateGuard::new(painter);
        guard.painter.set_antialiasing(true);
        guard.painter.apply_transform(&Transform::new(
            r.width / view_box.width,
            0.0,
            0.0,
            r.height / view_box.height,
            r.x,
            r.y,
        ));

        engine::render_to_painter(&doc.tree, view_box.size().to_screen_size(), guard.painter);
    }

    /// Renders the element with the provided ID into `bounds` on the
    /// painter.
    ///
    /// The element is scaled to fill `bounds` relative to its bounding
    /// box. When `bounds` is not a valid rect the element is scaled to
    /// the painter's viewport, but painted at the origin.
    ///
    /// Warns and paints nothing when there is no such element or its
    /// bounding box is empty. Otherwise the painter state is saved on
    /// entry and restored on return.
    pub fn render_element(&self, painter: &mut dyn Painter, id: &str, bounds: Rect) {
        let doc = match &self.doc {
            Some(v) => v,
            None => return,
        };

        let bbox = match doc.tree.node_bbox(id) {
            Some(v) if v.is_valid() => v,
            _ => {
                log::warn!("Element '{}' has no bounding box.", id);
                return;
            }
        };

        let r = if bounds.is_valid() { bounds } else { painter.viewport() };

        let guard = StateGuard::new(painter);
        guard.painter.set_antialiasing(true);
        guard.painter.apply_transform(&Transform::new(
            r.width / bbox.width,
            0.0,
            0.0,
            r.height / bbox.height,
            bounds.x,
            bounds.y,
        ));

        engine::render_node_to_painter(&doc.tree, id, bbox.size().to_screen_size(), guard.painter);
    }

    fn reset(&mut self) {
        self.doc = None;
        self.opt = engine::Options::default();
        if let Some(screen) = &self.screen {
            self.opt.dpi = screen.logical_dpi() * screen.device_pixel_ratio();
        }
        self.err_msg.clear();
    }

    fn finish_load(&mut self, result: Result<engine::Tree, Error>) -> bool {
        match result {
            Ok(tree) => {
                #[allow(unused_mut)]
                let mut tree = tree;
                #[cfg(feature = "text")]
                {
                    tree.convert_text(&self.fontdb);
                }

                let view_box = tree.view_box();
                self.doc = Some(Document { tree, view_box });
                true
            }
            Err(e) => {
                self.err_msg = e.to_string();
                false
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new()
    }
}

/// Restores the painter state on drop.
struct StateGuard<'a> {
    painter: &'a mut dyn Painter,
}

impl<'a> StateGuard<'a> {
    fn new(painter: &'a mut dyn Painter) -> Self {
        painter.save();
        StateGuard { painter }
    }
}

impl Drop for StateGuard<'_> {
    fn drop(&mut self) {
        self.painter.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ScreenInfo;

    const SVG: &[u8] = b"<svg xmlns='http://www.w3.org/2000/svg' width='200' height='100' \
viewBox='0 0 200 100'><rect id='box' x='10' y='20' width='30' height='40'/></svg>";

    #[test]
    fn dpi_follows_screen_metrics() {
        let mut renderer = Renderer::new();
        assert_eq!(renderer.opt.dpi, 96.0);

        renderer.set_screen_metrics(ScreenInfo {
            logical_dpi: 96.0,
            device_pixel_ratio: 2.0,
        });
        assert_eq!(renderer.opt.dpi, 192.0);

        // Survives the reset performed by a load.
        renderer.load_data(SVG);
        assert_eq!(renderer.opt.dpi, 192.0);
    }

    #[test]
    fn base_path_tracking() {
        let mut renderer = Renderer::new();
        renderer.load_data(SVG);
        assert!(renderer.opt.base_path.is_none());

        renderer.load_file("no-such-file.svg");
        assert_eq!(
            renderer.opt.base_path.as_deref(),
            Some(std::path::Path::new("no-such-file.svg"))
        );

        renderer.load_data(SVG);
        assert!(renderer.opt.base_path.is_none());
    }

    #[test]
    fn failed_load_releases_document() {
        let mut renderer = Renderer::new();
        assert!(renderer.load_data(SVG));
        assert!(renderer.is_valid());

        assert!(!renderer.load_data(b"not an svg"));
        assert!(!renderer.is_valid());
        assert!(renderer.doc.is_none());
    }
}
