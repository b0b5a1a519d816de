//! Squarification layout: three subdivision strategies over a size-sorted
//! children sequence, dispatched by [`Style`](crate::options::Style).
//!
//! Each variant is a pure function from `(parent rectangle, sorted sizes)`
//! to a sequence of child rectangles; a tagged-variant dispatch fits better
//! than a class hierarchy here since there is no shared mutable state
//! between the three.

mod kdirstat;
mod sequoia;
mod simple;

use crate::item::Rectangle;
use crate::options::Style;

/// Lay out `sizes` (already sorted descending, `Σ sizes == parent.size`, and
/// `parent` validated as non-degenerate by the caller) inside `parent`.
///
/// `flags` carries the Simple style's alternating-axis bit (ignored by the
/// other two styles). Returns one rectangle per entry in `sizes`, in the
/// same order; zero-size entries get [`Rectangle::SENTINEL`].
pub fn layout(style: Style, parent: Rectangle, sizes: &[u64], flags: u8) -> Vec<Rectangle> {
    match style {
        Style::KDirStat => kdirstat::layout(parent, sizes),
        Style::SequoiaView => sequoia::layout(parent, sizes),
        Style::Simple => simple::layout(parent, sizes, flags),
    }
}

/// The depth-carried direction flag the Simple style alternates. Exposed so
/// the driver can thread it through recursion regardless of which style is
/// active.
pub fn next_flags(flags: u8) -> u8 {
    if flags == 0 {
        1
    } else {
        0
    }
}

/// Partition a `total_len`-pixel span starting at `origin` among `weights`
/// (expected to sum to ~1.0), returning `(offset, extent)` pairs in the same
/// order. The last entry always ends exactly at `origin + total_len`,
/// absorbing whatever pixel-rounding residue accumulated — the "last
/// element snaps to the far edge" rule every layout variant shares.
pub(crate) fn partition_axis(origin: i64, total_len: i64, weights: &[f64]) -> Vec<(i64, i64)> {
    let n = weights.len();
    let mut out = Vec::with_capacity(n);
    if n == 0 || total_len <= 0 {
        return out;
    }
    let end_pos = origin + total_len;
    let mut cursor = origin;
    let mut acc = 0.0;
    for (i, w) in weights.iter().enumerate() {
        acc += w;
        let end = if i + 1 == n {
            end_pos
        } else {
            (origin as f64 + acc * total_len as f64).round() as i64
        }
        .clamp(cursor, end_pos);
        out.push((cursor, end - cursor));
        cursor = end;
    }
    out
}
