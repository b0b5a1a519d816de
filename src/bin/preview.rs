//! Renders the synthetic preview tree through all three treemap layout
//! styles and writes each as a PNG. A manual-inspection smoke test, not
//! part of the library's public contract.

use clap::Parser;
use console::style;
use humansize::{format_size as human_format_size, BINARY};
use image::RgbaImage;
use std::path::PathBuf;
use std::time::Instant;
use treemap_core::item::Rectangle;
use treemap_core::options::{Options, Style};
use treemap_core::preview::build_preview_tree;
use treemap_core::raster::PixelTarget;
use treemap_core::{draw_treemap, Item};

#[derive(Parser)]
#[command(name = "preview")]
#[command(author = "Treemap Core Contributors")]
#[command(version)]
#[command(about = "Render the synthetic preview tree through every layout style", long_about = None)]
struct Cli {
    /// Directory PNGs are written into
    #[arg(short, long, default_value = "preview-out")]
    out_dir: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Draw 1-pixel grid separators between sibling rectangles
    #[arg(long)]
    grid: bool,
}

/// A plain in-memory [`PixelTarget`] backed by an `image::RgbaImage`.
struct ImageTarget {
    image: RgbaImage,
}

impl ImageTarget {
    fn new(width: u32, height: u32) -> Self {
        ImageTarget {
            image: RgbaImage::new(width, height),
        }
    }
}

impl PixelTarget for ImageTarget {
    fn blit(&mut self, rect: Rectangle, pixels: &[u32]) {
        let w = rect.width().max(0) as u32;
        let h = rect.height().max(0) as u32;
        for y in 0..h {
            for x in 0..w {
                let word = pixels[(y as usize) * (w as usize) + (x as usize)];
                let r = ((word >> 16) & 0xFF) as u8;
                let g = ((word >> 8) & 0xFF) as u8;
                let b = (word & 0xFF) as u8;
                let a = ((word >> 24) & 0xFF) as u8;
                let px = rect.x0 as u32 + x;
                let py = rect.y0 as u32 + y;
                if px < self.image.width() && py < self.image.height() {
                    self.image.put_pixel(px, py, image::Rgba([r, g, b, a]));
                }
            }
        }
    }
}

fn style_names() -> [(Style, &'static str); 3] {
    [
        (Style::KDirStat, "kdirstat"),
        (Style::SequoiaView, "sequoiaview"),
        (Style::Simple, "simple"),
    ]
}

fn main() {
    treemap_core::logging::init();
    let cli = Cli::parse();

    if let Err(e) = std::fs::create_dir_all(&cli.out_dir) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    let root = build_preview_tree();
    println!(
        "{} preview tree: {} across {} subtrees",
        style("→").cyan().bold(),
        style(human_format_size(root.size(), BINARY)).yellow(),
        root.child_count()
    );

    for (style_kind, name) in style_names() {
        let start = Instant::now();
        let options = Options {
            style: style_kind,
            grid: cli.grid,
            ..Options::default()
        };
        let mut target = ImageTarget::new(cli.width, cli.height);
        let rect = Rectangle::new(0, 0, cli.width as i64, cli.height as i64);

        if let Err(e) = draw_treemap(&mut target, rect, &root, Some(options), None) {
            eprintln!("{} {name}: {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }

        let out_path = cli.out_dir.join(format!("{name}.png"));
        if let Err(e) = target.image.save(&out_path) {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }

        println!(
            "  {} {:12} {} ({:.1?})",
            style("✓").green().bold(),
            name,
            style(out_path.display().to_string()).dim(),
            start.elapsed()
        );
    }
}
