//! Point-to-item hit testing over a tree whose rectangles were already
//! written by a prior [`crate::driver::draw_treemap`] call.

use crate::item::{Item, Point};

/// Find the item at `p`, assuming the tree was drawn with `grid_width`
/// (1 if the grid was enabled for that draw, 0 otherwise — the same value
/// passed through `draw_treemap`'s options).
///
/// Returns `None` only when `p` falls outside `item.rectangle()` entirely.
/// Inside the root rectangle this never returns `None`: a miss on every
/// child (due to a sentinel or a rounding seam) falls back to the nearest
/// containing ancestor, which is `item` itself at the point the recursion
/// bottoms out.
pub fn find_item_by_point<'a>(item: &'a dyn Item, p: Point, grid_width: i64) -> Option<&'a dyn Item> {
    if !item.rectangle().contains(p) {
        return None;
    }

    let rect = item.rectangle();
    if item.is_leaf() || rect.width().min(rect.height()) <= grid_width {
        return Some(item);
    }

    for i in 0..item.child_count() {
        let child = item.child(i);
        if child.rectangle().contains(p) {
            if let Some(found) = find_item_by_point(child, p, grid_width) {
                return Some(found);
            }
        }
    }

    // No child's stored rectangle contains p (sentinel, or a pixel seam
    // rounding left a gap): fall back to this node.
    Some(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorRef;
    use crate::item::Rectangle;
    use std::cell::Cell;

    struct Leaf {
        rect: Cell<Rectangle>,
    }

    struct Node {
        children: Vec<Box<dyn Item>>,
        rect: Cell<Rectangle>,
    }

    impl Item for Leaf {
        fn size(&self) -> u64 {
            1
        }
        fn is_leaf(&self) -> bool {
            true
        }
        fn child_count(&self) -> usize {
            0
        }
        fn child(&self, _index: usize) -> &dyn Item {
            unreachable!()
        }
        fn rectangle(&self) -> Rectangle {
            self.rect.get()
        }
        fn set_rectangle(&self, rect: Rectangle) {
            self.rect.set(rect);
        }
        fn graph_color(&self) -> ColorRef {
            ColorRef(0)
        }
    }

    impl Item for Node {
        fn size(&self) -> u64 {
            self.children.iter().map(|c| c.size()).sum()
        }
        fn is_leaf(&self) -> bool {
            false
        }
        fn child_count(&self) -> usize {
            self.children.len()
        }
        fn child(&self, index: usize) -> &dyn Item {
            self.children[index].as_ref()
        }
        fn rectangle(&self) -> Rectangle {
            self.rect.get()
        }
        fn set_rectangle(&self, rect: Rectangle) {
            self.rect.set(rect);
        }
        fn graph_color(&self) -> ColorRef {
            ColorRef(0)
        }
    }

    fn leaf(rect: Rectangle) -> Box<dyn Item> {
        Box::new(Leaf { rect: Cell::new(rect) })
    }

    #[test]
    fn point_outside_root_returns_none() {
        let root = Node {
            children: vec![],
            rect: Cell::new(Rectangle::new(0, 0, 100, 100)),
        };
        assert!(find_item_by_point(&root, Point::new(200, 200), 0).is_none());
    }

    #[test]
    fn exact_seam_pixel_returns_right_hand_child() {
        let root = Node {
            children: vec![
                leaf(Rectangle::new(0, 0, 50, 50)),
                leaf(Rectangle::new(50, 0, 100, 50)),
            ],
            rect: Cell::new(Rectangle::new(0, 0, 100, 50)),
        };
        let hit = find_item_by_point(&root, Point::new(50, 25), 0).unwrap();
        assert_eq!(hit.rectangle(), Rectangle::new(50, 0, 100, 50));
    }

    #[test]
    fn miss_on_every_child_falls_back_to_nearest_ancestor() {
        let root = Node {
            children: vec![leaf(Rectangle::SENTINEL), leaf(Rectangle::new(50, 0, 100, 50))],
            rect: Cell::new(Rectangle::new(0, 0, 100, 50)),
        };
        let hit = find_item_by_point(&root, Point::new(10, 10), 0).unwrap();
        assert_eq!(hit.rectangle(), root.rect.get());
    }

    #[test]
    fn small_internal_node_below_grid_width_is_returned_without_descending() {
        let root = Node {
            children: vec![leaf(Rectangle::new(0, 0, 1, 1))],
            rect: Cell::new(Rectangle::new(0, 0, 1, 1)),
        };
        let hit = find_item_by_point(&root, Point::new(0, 0), 1).unwrap();
        assert_eq!(hit.rectangle(), Rectangle::new(0, 0, 1, 1));
    }

    #[test]
    fn leaf_is_returned_directly() {
        let l = leaf(Rectangle::new(5, 5, 15, 15));
        let hit = find_item_by_point(l.as_ref(), Point::new(10, 10), 0).unwrap();
        assert_eq!(hit.rectangle(), Rectangle::new(5, 5, 15, 15));
    }
}
