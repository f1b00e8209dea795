// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use usvg::NodeExt;

#[cfg(feature = "text")]
use usvg_text_layout::{fontdb, TreeTextToPath};

use crate::error::Error;
use crate::geom::{Rect, ScreenSize, Transform};
use crate::painter::Painter;

/// An SVG to render tree conversion options.
pub(crate) struct Options {
    /// The path the current document was loaded from.
    ///
    /// Used to resolve relative references. `None` for in-memory documents.
    pub base_path: Option<PathBuf>,

    /// The target DPI.
    ///
    /// Affects units conversion during parsing.
    pub dpi: f64,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            base_path: None,
            dpi: 96.0,
        }
    }
}

impl Options {
    fn to_usvg(&self) -> usvg::Options {
        let mut opt = usvg::Options::default();
        opt.dpi = self.dpi;
        opt.resources_dir = self
            .base_path
            .as_ref()
            .and_then(|p| std::fs::canonicalize(p).ok())
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));
        opt
    }
}


/// A parsed, render-ready SVG document.
pub(crate) struct Tree(usvg::Tree);

impl Tree {
    /// Checks that the document has any renderable nodes.
    pub fn is_empty(&self) -> bool {
        !self.0.root.has_children()
    }

    /// Returns the document viewbox.
    pub fn view_box(&self) -> Rect {
        let r = self.0.view_box.rect;
        Rect::new(r.x(), r.y(), r.width(), r.height())
    }

    /// Checks that a renderable node with such an ID exists.
    pub fn node_exists(&self, id: &str) -> bool {
        self.0.node_by_id(id).is_some()
    }

    /// Returns node's absolute transform by ID.
    pub fn node_transform(&self, id: &str) -> Option<Transform> {
        self.0.node_by_id(id).map(|node| {
            let ts = node.abs_transform();
            Transform::new(ts.a, ts.b, ts.c, ts.d, ts.e, ts.f)
        })
    }

    /// Returns node's bounding box by ID.
    ///
    /// Ancestor transforms do not affect it.
    pub fn node_bbox(&self, id: &str) -> Option<Rect> {
        let node = self.0.node_by_id(id)?;
        node.calculate_bbox()
            .map(|r| Rect::new(r.x(), r.y(), r.width(), r.height()))
    }

    /// Converts text nodes into paths.
    ///
    /// Should be called once, right after parsing.
    #[cfg(feature = "text")]
    pub fn convert_text(&mut self, fontdb: &fontdb::Database) {
        self.0.convert_text(fontdb);
    }
}


/// Creates a render tree from file.
///
/// Only `.svg` and `.svgz` files are supported.
pub(crate) fn parse_tree_from_file(path: &str, opt: &Options) -> Result<Tree, Error> {
    if !has_svg_suffix(path) {
        return Err(Error::InvalidFileSuffix);
    }

    let data = std::fs::read(path).map_err(|_| Error::FileOpenFailed)?;
    parse_tree_from_data(&data, opt)
}

/// Creates a render tree from data.
///
/// The data can contain an SVG string or gzip compressed data.
pub(crate) fn parse_tree_from_data(data: &[u8], opt: &Options) -> Result<Tree, Error> {
    let tree = usvg::Tree::from_data(data, &opt.to_usvg())?;
    Ok(Tree(tree))
}

fn has_svg_suffix(path: &str) -> bool {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.eq_ignore_ascii_case("svg") || ext.eq_ignore_ascii_case("svgz"),
        None => false,
    }
}


/// Renders the whole document onto the painter.
///
/// The document is fit into `target_size` and blitted at the painter's
/// origin, subject to the painter's current transform.
pub(crate) fn render_to_painter(tree: &Tree, target_size: ScreenSize, painter: &mut dyn Painter) {
    let mut pixmap = match new_pixmap(target_size) {
        Some(v) => v,
        None => return,
    };

    let size = tree.0.size;
    let ts = tiny_skia::Transform::from_scale(
        (target_size.width as f64 / size.width()) as f32,
        (target_size.height as f64 / size.height()) as f32,
    );

    if resvg::render(&tree.0, usvg::FitTo::Original, ts, pixmap.as_mut()).is_some() {
        painter.draw_pixmap(0.0, 0.0, &pixmap);
    }
}

/// Renders a node by ID onto the painter.
///
/// The node is fit into `target_size` relative to its bounding box.
pub(crate) fn render_node_to_painter(
    tree: &Tree,
    id: &str,
    target_size: ScreenSize,
    painter: &mut dyn Painter,
) {
    let node = match tree.0.node_by_id(id) {
        Some(v) => v,
        None => {
            log::warn!("A node with '{}' ID wasn't found.", id);
            return;
        }
    };

    let bbox = match node.calculate_bbox() {
        Some(v) => v,
        None => {
            log::warn!("A node with '{}' ID has a zero size.", id);
            return;
        }
    };

    let mut pixmap = match new_pixmap(target_size) {
        Some(v) => v,
        None => return,
    };

    let ts = tiny_skia::Transform::from_scale(
        (target_size.width as f64 / bbox.width()) as f32,
        (target_size.height as f64 / bbox.height()) as f32,
    );

    let ok = resvg::render_node(&tree.0, &node, usvg::FitTo::Original, ts, pixmap.as_mut());
    if ok.is_some() {
        painter.draw_pixmap(0.0, 0.0, &pixmap);
    }
}

fn new_pixmap(size: ScreenSize) -> Option<tiny_skia::Pixmap> {
    if !size.is_valid() {
        log::warn!("Invalid target size: {}.", size);
        return None;
    }

    let pixmap = tiny_skia::Pixmap::new(size.width, size.height);
    if pixmap.is_none() {
        log::warn!("{}", Error::NoCanvas);
    }

    pixmap
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_check() {
        assert!(has_svg_suffix("images/app.svg"));
        assert!(has_svg_suffix("images/app.SVG"));
        assert!(has_svg_suffix("images/app.svgz"));
        assert!(!has_svg_suffix("images/app.png"));
        assert!(!has_svg_suffix("images/app"));
        assert!(!has_svg_suffix(""));
    }

    #[test]
    fn parse_and_query() {
        let data = b"<svg xmlns='http://www.w3.org/2000/svg' width='200' height='100' \
viewBox='0 0 200 100'><rect id='box' x='10' y='20' width='30' height='40'/></svg>";

        let tree = parse_tree_from_data(data, &Options::default()).unwrap();

        assert!(!tree.is_empty());
        assert_eq!(tree.view_box(), Rect::new(0.0, 0.0, 200.0, 100.0));

        assert!(tree.node_exists("box"));
        assert!(!tree.node_exists("circle"));

        assert_eq!(tree.node_bbox("box"), Some(Rect::new(10.0, 20.0, 30.0, 40.0)));
        assert_eq!(tree.node_bbox("circle"), None);

        assert_eq!(tree.node_transform("box"), Some(Transform::default()));
    }

    #[test]
    fn parse_errors() {
        let opt = Options::default();

        assert_eq!(
            parse_tree_from_data(&[0xff, 0xfe, 0x00], &opt).err(),
            Some(Error::NotAnUtf8Str)
        );

        // A GZip header followed by garbage.
        assert_eq!(
            parse_tree_from_data(&[0x1f, 0x8b, 0x00, 0x01, 0x02], &opt).err(),
            Some(Error::MalformedGZip)
        );

        assert_eq!(
            parse_tree_from_data(b"not an svg at all", &opt).err(),
            Some(Error::ParsingFailed)
        );
    }

    #[test]
    fn missing_file() {
        assert_eq!(
            parse_tree_from_file("no-such-file.svg", &Options::default()).err(),
            Some(Error::FileOpenFailed)
        );
        assert_eq!(
            parse_tree_from_file("no-such-file.txt", &Options::default()).err(),
            Some(Error::InvalidFileSuffix)
        );
    }
}
