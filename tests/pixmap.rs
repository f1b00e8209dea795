// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use svgpaint::{PixmapPainter, Rect, Renderer};

fn load(path: &str) -> Renderer {
    let mut renderer = Renderer::new();
    assert!(renderer.load_file(path));
    renderer
}

fn is_red(pixel: tiny_skia::PremultipliedColorU8) -> bool {
    pixel.red() == 255 && pixel.green() == 0 && pixel.blue() == 0 && pixel.alpha() == 255
}

#[test]
fn fills_the_whole_pixmap() {
    let renderer = load("tests/assets/icon.svg");

    let mut painter = PixmapPainter::new(8, 8).unwrap();
    renderer.render(&mut painter);

    let pixmap = painter.into_pixmap();
    assert!(is_red(pixmap.pixel(2, 2).unwrap()));
    assert!(is_red(pixmap.pixel(4, 4).unwrap()));
    assert!(is_red(pixmap.pixel(5, 6).unwrap()));
    // Corners can be softened by filtering, but must be covered.
    assert!(pixmap.pixel(0, 0).unwrap().alpha() > 0);
    assert!(pixmap.pixel(7, 7).unwrap().alpha() > 0);
}

#[test]
fn paints_only_inside_the_bounds() {
    let renderer = load("tests/assets/icon.svg");

    let mut painter = PixmapPainter::new(8, 8).unwrap();
    renderer.render_to(&mut painter, Rect::new(4.0, 0.0, 4.0, 4.0));

    let pixmap = painter.pixmap();
    assert!(is_red(pixmap.pixel(5, 1).unwrap()));
    assert!(is_red(pixmap.pixel(6, 2).unwrap()));
    // Outside the target rect nothing is painted.
    assert_eq!(pixmap.pixel(2, 2).unwrap().alpha(), 0);
    assert_eq!(pixmap.pixel(5, 6).unwrap().alpha(), 0);
}

#[test]
fn empty_document_paints_nothing() {
    let renderer = load("tests/assets/empty.svg");
    assert!(renderer.is_valid());
    assert!(renderer.is_empty());

    let mut painter = PixmapPainter::new(8, 8).unwrap();
    renderer.render(&mut painter);

    let pixmap = painter.into_pixmap();
    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(pixmap.pixel(x, y).unwrap().alpha(), 0);
        }
    }
}
