//! Simple layout: a single proportional split along one axis, alternating
//! between horizontal and vertical as the direction flag is threaded through
//! recursion by the caller.

use super::partition_axis;
use crate::item::Rectangle;

pub fn layout(parent: Rectangle, sizes: &[u64], flags: u8) -> Vec<Rectangle> {
    let n = sizes.len();
    let mut rects = vec![Rectangle::SENTINEL; n];
    let total: u64 = sizes.iter().sum();
    if total == 0 || parent.is_degenerate() {
        return rects;
    }

    let nonzero: Vec<(usize, f64)> = sizes
        .iter()
        .enumerate()
        .filter(|&(_, &s)| s > 0)
        .map(|(i, &s)| (i, s as f64 / total as f64))
        .collect();
    let weights: Vec<f64> = nonzero.iter().map(|&(_, w)| w).collect();

    let horizontal = flags == 0;
    let spans = if horizontal {
        partition_axis(parent.x0, parent.width(), &weights)
    } else {
        partition_axis(parent.y0, parent.height(), &weights)
    };

    for (&(idx, _), &(off, ext)) in nonzero.iter().zip(spans.iter()) {
        rects[idx] = if horizontal {
            Rectangle::new(off, parent.y0, off + ext, parent.y1)
        } else {
            Rectangle::new(parent.x0, off, parent.x1, off + ext)
        };
    }

    rects
}
