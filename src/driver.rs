//! The recursion driver: lays out and rasterizes an entire item tree into an
//! off-screen buffer, then blits the result to the host's pixel target.

use crate::error::{Result, TreemapError};
use crate::item::{Item, Rectangle};
use crate::layout;
use crate::logging;
use crate::options::Options;
use crate::raster::{self, PixelBuffer, PixelTarget};
use crate::surface::Surface;

/// Invoked once per internal node before its children are laid out.
/// Advisory only — there is no cancellation path; a host that wants to
/// cancel a draw unwinds out of its own callback closure, and the pixel
/// buffer below is scoped so that unwind never leaks it.
pub type TreemapDrawingCallback<'a> = dyn FnMut(&dyn Item) + 'a;

/// Lay out and rasterize `root` into `rect`, then blit the result into
/// `target`. `options` defaults to [`Options::default`] when `None`.
pub fn draw_treemap(
    target: &mut dyn PixelTarget,
    rect: Rectangle,
    root: &dyn Item,
    options: Option<Options>,
    mut callback: Option<&mut TreemapDrawingCallback>,
) -> Result<()> {
    let options = options.unwrap_or_default();

    if rect.is_degenerate() {
        logging::debug("driver", &format!("degenerate rect {:?}, no-op", rect));
        return Ok(());
    }

    let width = rect.width() as u32;
    let height = rect.height() as u32;
    let mut buf = PixelBuffer::try_new(width, height).ok_or(TreemapError::BufferAllocation { width, height })?;

    if options.grid {
        buf.fill(raster::pack_bgra(
            options.grid_color.r,
            options.grid_color.g,
            options.grid_color.b,
        ));
    } else {
        draw_shadow_edges(&mut buf);
    }

    // Reserve the right/bottom edge for the grid or the shadow line
    // regardless of mode, so layout stays stable across grid toggles.
    let grid_width: i64 = if options.grid { 1 } else { 0 };
    let draw_rect = Rectangle::new(rect.x0, rect.y0, rect.x1 - 1, rect.y1 - 1);

    if root.size() == 0 {
        // Black-fill only the interior the layout would have used, leaving
        // the border the grid/shadow pass above just painted intact.
        fill_black(&mut buf, draw_rect.width().max(0) as u32, draw_rect.height().max(0) as u32);
        buf.blit_into(target, rect);
        return Ok(());
    }

    logging::debug(
        "driver",
        &format!("{}x{} root_size={} style={:?}", width, height, root.size(), options.style),
    );

    recurse_draw(
        root,
        draw_rect,
        true,
        Surface::ZERO,
        options.height,
        0,
        &mut buf,
        (rect.x0, rect.y0),
        &options,
        grid_width,
        &mut callback,
    );

    buf.blit_into(target, rect);
    Ok(())
}

/// Fill the buffer-local `0..w x 0..h` sub-rectangle with opaque black,
/// leaving anything outside it (the grid/shadow border) untouched.
fn fill_black(buf: &mut PixelBuffer, w: u32, h: u32) {
    let black = raster::pack_bgra(0, 0, 0);
    for y in 0..h.min(buf.height) {
        for x in 0..w.min(buf.width) {
            buf.set(x, y, black);
        }
    }
}

fn draw_shadow_edges(buf: &mut PixelBuffer) {
    let shadow = raster::pack_bgra(64, 64, 64);
    if buf.width == 0 || buf.height == 0 {
        return;
    }
    for x in 0..buf.width {
        buf.set(x, buf.height - 1, shadow);
    }
    for y in 0..buf.height {
        buf.set(buf.width - 1, y, shadow);
    }
}

#[allow(clippy::too_many_arguments)]
fn recurse_draw(
    item: &dyn Item,
    rect: Rectangle,
    as_root: bool,
    surface: Surface,
    h: f64,
    flags: u8,
    buf: &mut PixelBuffer,
    buf_origin: (i64, i64),
    options: &Options,
    grid_width: i64,
    callback: &mut Option<&mut TreemapDrawingCallback>,
) {
    item.set_rectangle(rect);

    if rect.width().min(rect.height()) <= grid_width {
        return;
    }

    let surface = if options.cushion_shading_enabled() && !as_root {
        surface.with_ridge(rect, h)
    } else {
        surface
    };

    if item.is_leaf() {
        rasterize_leaf(item, rect, surface, buf, buf_origin, options);
        return;
    }

    if let Some(cb) = callback.as_deref_mut() {
        cb(item);
    }

    let n = item.child_count();
    let sizes: Vec<u64> = (0..n).map(|i| item.child(i).size()).collect();
    let rects = layout::layout(options.style, rect, &sizes, flags);
    let next_h = h * options.scale_factor;
    let next_flags = layout::next_flags(flags);

    for (i, child_rect) in rects.into_iter().enumerate() {
        let child = item.child(i);
        if child_rect.is_sentinel() {
            child.set_rectangle(Rectangle::SENTINEL);
            continue;
        }
        recurse_draw(
            child,
            child_rect,
            false,
            surface,
            next_h,
            next_flags,
            buf,
            buf_origin,
            options,
            grid_width,
            callback,
        );
    }
}

fn rasterize_leaf(
    item: &dyn Item,
    rect: Rectangle,
    surface: Surface,
    buf: &mut PixelBuffer,
    buf_origin: (i64, i64),
    options: &Options,
) {
    let leaf_rect = if options.grid { rect.inset(1, 1) } else { rect };
    if leaf_rect.is_degenerate() {
        return;
    }
    let (color, brightness) = item.graph_color().resolve(options.brightness);
    if options.cushion_shading_enabled() {
        raster::cushion_fill(buf, buf_origin, leaf_rect, surface, color, brightness, options);
    } else {
        raster::solid_fill(buf, buf_origin, leaf_rect, color, brightness);
    }
}
