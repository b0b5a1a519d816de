//! KDirStat-style row layout: greedy rows bounded by the dominant child's
//! aspect ratio, stacked along the rectangle's shorter axis.

use super::partition_axis;
use crate::item::Rectangle;

pub fn layout(parent: Rectangle, sizes: &[u64]) -> Vec<Rectangle> {
    let n = sizes.len();
    let mut rects = vec![Rectangle::SENTINEL; n];
    let total: u64 = sizes.iter().sum();
    if total == 0 || parent.is_degenerate() {
        return rects;
    }
    let total_f = total as f64;

    let horizontal = parent.width() >= parent.height();
    let (long, short) = if horizontal {
        (parent.width(), parent.height())
    } else {
        (parent.height(), parent.width())
    };
    let w_ratio = long as f64 / short as f64;

    // Rows stack along the short axis; each row spans the full long axis,
    // subdivided among its own children.
    let mut rows: Vec<(usize, usize, f64)> = Vec::new(); // (start, end, row_h)
    let mut start = 0usize;
    while start < n && sizes[start] > 0 {
        let first_size = sizes[start] as f64;
        let mut row_sum = first_size;
        let mut row_h = row_sum / total_f;
        let mut end = start + 1;

        while end < n && sizes[end] > 0 {
            let candidate_sum = row_sum + sizes[end] as f64;
            let candidate_row_h = candidate_sum / total_f;
            let w = (first_size / total_f) * w_ratio / candidate_row_h;
            let aspect = w / candidate_row_h;
            if aspect < 0.4 {
                break;
            }
            row_sum = candidate_sum;
            row_h = candidate_row_h;
            end += 1;
        }

        rows.push((start, end, row_h));
        start = end;
    }

    let row_weights: Vec<f64> = rows.iter().map(|(_, _, h)| *h).collect();
    let (short_origin, short_len) = if horizontal {
        (parent.y0, parent.height())
    } else {
        (parent.x0, parent.width())
    };
    let row_bands = partition_axis(short_origin, short_len, &row_weights);

    for (&(row_start, row_end, row_h), &(band_off, band_ext)) in rows.iter().zip(row_bands.iter())
    {
        let child_weights: Vec<f64> = sizes[row_start..row_end]
            .iter()
            .map(|&s| s as f64 / (total_f * row_h))
            .collect();
        let (long_origin, long_len) = if horizontal {
            (parent.x0, parent.width())
        } else {
            (parent.y0, parent.height())
        };
        let spans = partition_axis(long_origin, long_len, &child_weights);

        for (i, &(off, ext)) in spans.iter().enumerate() {
            let idx = row_start + i;
            rects[idx] = if horizontal {
                Rectangle::new(off, band_off, off + ext, band_off + band_ext)
            } else {
                Rectangle::new(band_off, off, band_off + band_ext, off + ext)
            };
        }
    }

    rects
}
