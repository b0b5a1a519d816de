//! SequoiaView-style layout: the classical squarified treemap, minimizing
//! worst-case aspect ratio row by row (Bruls, Huizing, van Wijk).

use super::partition_axis;
use crate::item::Rectangle;

fn worst_aspect(hh: f64, row_sum: f64, row_max: f64, row_min: f64) -> f64 {
    if row_min <= 0.0 || row_sum <= 0.0 {
        return f64::MAX;
    }
    let s2 = row_sum * row_sum;
    (hh * row_max / s2).max(s2 / (hh * row_min))
}

pub fn layout(parent: Rectangle, sizes: &[u64]) -> Vec<Rectangle> {
    let n = sizes.len();
    let mut rects = vec![Rectangle::SENTINEL; n];
    let total: u64 = sizes.iter().sum();
    if total == 0 || parent.is_degenerate() {
        return rects;
    }
    let parent_area = parent.area() as f64;
    let parent_size = total as f64;

    let mut remaining = parent;
    let mut start = 0usize;

    while start < n && sizes[start] > 0 {
        let rem_w = remaining.width();
        let rem_h = remaining.height();
        if rem_w <= 0 || rem_h <= 0 {
            break;
        }
        let vertical_rows = rem_w >= rem_h;
        let short = if vertical_rows { rem_h } else { rem_w } as f64;
        let long = if vertical_rows { rem_w } else { rem_h } as f64;
        let hh = short * short * (parent_size / parent_area);

        let mut end = start + 1;
        let mut row_sum = sizes[start] as f64;
        let row_max = row_sum;
        let mut worst = worst_aspect(hh, row_sum, row_max, sizes[start] as f64);
        let mut hit_zero = false;

        loop {
            if end >= n {
                break;
            }
            if sizes[end] == 0 {
                hit_zero = true;
                break;
            }
            let candidate_min = sizes[end] as f64;
            let candidate_sum = row_sum + candidate_min;
            let candidate_worst = worst_aspect(hh, candidate_sum, row_max, candidate_min);
            if candidate_worst > worst {
                break;
            }
            row_sum = candidate_sum;
            worst = candidate_worst;
            end += 1;
        }

        let remaining_size: f64 = sizes[start..].iter().sum::<u64>() as f64;
        let thickness = if (row_sum - remaining_size).abs() < 1e-9 {
            long as i64
        } else {
            ((row_sum / remaining_size) * long).floor() as i64
        };

        let row_rect;
        if vertical_rows {
            row_rect = Rectangle::new(
                remaining.x0,
                remaining.y0,
                remaining.x0 + thickness,
                remaining.y0 + rem_h,
            );
            remaining = Rectangle::new(remaining.x0 + thickness, remaining.y0, remaining.x1, remaining.y1);
        } else {
            row_rect = Rectangle::new(
                remaining.x0,
                remaining.y0,
                remaining.x0 + rem_w,
                remaining.y0 + thickness,
            );
            remaining = Rectangle::new(remaining.x0, remaining.y0 + thickness, remaining.x1, remaining.y1);
        }

        let child_weights: Vec<f64> = sizes[start..end].iter().map(|&s| s as f64 / row_sum).collect();
        let (short_origin, short_len) = if vertical_rows {
            (row_rect.y0, row_rect.height())
        } else {
            (row_rect.x0, row_rect.width())
        };
        let spans = partition_axis(short_origin, short_len, &child_weights);

        for (i, &(off, ext)) in spans.iter().enumerate() {
            let idx = start + i;
            rects[idx] = if vertical_rows {
                Rectangle::new(row_rect.x0, off, row_rect.x1, off + ext)
            } else {
                Rectangle::new(off, row_rect.y0, off + ext, row_rect.y1)
            };
        }

        start = if hit_zero { n } else { end };
    }

    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_children_eight_one_one_in_a_square() {
        let parent = Rectangle::new(0, 0, 100, 100);
        let rects = layout(parent, &[8, 1, 1]);
        assert_eq!(rects[0], Rectangle::new(0, 0, 80, 100));
        assert_eq!(rects[1], Rectangle::new(80, 0, 100, 50));
        assert_eq!(rects[2], Rectangle::new(80, 50, 100, 100));
    }

    #[test]
    fn zero_size_children_get_sentinel() {
        let parent = Rectangle::new(0, 0, 100, 100);
        let rects = layout(parent, &[10, 0]);
        assert!(!rects[0].is_sentinel());
        assert!(rects[1].is_sentinel());
    }

    #[test]
    fn single_child_fills_the_entire_parent() {
        let parent = Rectangle::new(5, 5, 105, 55);
        let rects = layout(parent, &[42]);
        assert_eq!(rects[0], parent);
    }

    #[test]
    fn rows_tile_the_parent_exactly() {
        let parent = Rectangle::new(0, 0, 400, 300);
        let sizes = [144, 101, 90, 60, 48, 30, 28, 12, 9, 5, 1];
        let rects = layout(parent, &sizes);
        let total_area: i64 = rects.iter().filter(|r| !r.is_sentinel()).map(|r| r.area()).sum();
        assert_eq!(total_area, parent.area());
    }
}
