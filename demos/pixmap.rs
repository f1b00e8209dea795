fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        println!("Usage:\n\tpixmap <in-svg> <out-png>");
        return;
    }

    svgpaint::init_log();

    let mut renderer = svgpaint::Renderer::new();
    renderer.load_system_fonts();

    if !renderer.load_file(&args[1]) {
        println!("Error: {}", renderer.error_string());
        return;
    }

    let size = renderer.default_size();
    let mut painter = match svgpaint::PixmapPainter::new(size.width, size.height) {
        Some(v) => v,
        None => {
            println!("Error: {}", svgpaint::Error::NoCanvas);
            return;
        }
    };

    renderer.render(&mut painter);

    if !painter.save_png(&args[2]) {
        println!("Error: {}", svgpaint::Error::FileWriteFailed);
    }
}
