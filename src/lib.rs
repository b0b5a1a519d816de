//! treemap_core - a squarified-treemap rendering core
//!
//! Given a tree of weighted items (files and folders with aggregate byte
//! sizes), this crate deterministically subdivides a rectangular pixel
//! region into nested sub-rectangles with area proportional to weight, then
//! rasterizes each leaf with a Van Wijk cushion-shading effect that conveys
//! hierarchy depth through pseudo-3D highlights.
//!
//! # Features
//!
//! - **Three layout styles**: KDirStat rows, SequoiaView classical
//!   squarification, and a simple alternating-axis split
//! - **Cushion shading**: an incremental surface-gradient model producing
//!   per-pixel Lambertian illumination
//! - **Hit testing**: point-to-item lookup with nearest-ancestor fallback
//! - **Host-agnostic tree**: the core reads a tree through the [`Item`]
//!   capability set rather than owning any storage of its own
//!
//! # Example
//!
//! ```no_run
//! use treemap_core::{draw_treemap, preview::build_preview_tree, raster::PixelTarget, item::Rectangle};
//!
//! struct Framebuffer;
//! impl PixelTarget for Framebuffer {
//!     fn blit(&mut self, _rect: Rectangle, _pixels: &[u32]) {}
//! }
//!
//! fn main() -> treemap_core::Result<()> {
//!     let root = build_preview_tree();
//!     let mut target = Framebuffer;
//!     draw_treemap(&mut target, Rectangle::new(0, 0, 800, 600), &root, None, None)?;
//!     Ok(())
//! }
//! ```

pub mod color;
pub mod driver;
pub mod error;
pub mod hittest;
pub mod item;
pub mod layout;
pub mod logging;
pub mod options;
pub mod preview;
pub mod raster;
pub mod surface;

pub use driver::{draw_treemap, TreemapDrawingCallback};
pub use error::{Result, TreemapError};
pub use hittest::find_item_by_point;
pub use item::{Item, Point, Rectangle};
pub use options::{Options, Style};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
