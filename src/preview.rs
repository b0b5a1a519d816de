//! A deterministic synthetic tree used for configuration previews and by
//! this crate's own tests. Exercises every layout code path: flat rows of
//! many equal-sized items, a handful of outsized individual items, and two
//! differently-shaped sibling subtrees under one root.

use crate::color::{equalize_palette, ColorRef, Rgb};
use crate::item::{Item, Rectangle};
use std::cell::Cell;

/// An owned, arena-style [`Item`] implementation — the core's only
/// in-tree-storage `Item`, used where the host's own scanner types aren't
/// available (tests, the demo binary).
pub struct ArenaItem {
    size: u64,
    color: ColorRef,
    children: Vec<ArenaItem>,
    rect: Cell<Rectangle>,
}

impl ArenaItem {
    fn leaf(size: u64, color: ColorRef) -> Self {
        ArenaItem {
            size,
            color,
            children: Vec::new(),
            rect: Cell::new(Rectangle::SENTINEL),
        }
    }

    fn internal(children: Vec<ArenaItem>) -> Self {
        let size = children.iter().map(|c| c.size).sum();
        ArenaItem {
            size,
            color: ColorRef(0),
            children,
            rect: Cell::new(Rectangle::SENTINEL),
        }
    }

    pub fn children(&self) -> &[ArenaItem] {
        &self.children
    }
}

impl Item for ArenaItem {
    fn size(&self) -> u64 {
        self.size
    }

    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> &dyn Item {
        &self.children[index]
    }

    fn rectangle(&self) -> Rectangle {
        self.rect.get()
    }

    fn set_rectangle(&self, rect: Rectangle) {
        self.rect.set(rect);
    }

    fn graph_color(&self) -> ColorRef {
        self.color
    }
}

fn base_palette() -> [Rgb; 8] {
    [
        Rgb::new(220, 50, 47),
        Rgb::new(38, 139, 210),
        Rgb::new(133, 153, 0),
        Rgb::new(211, 54, 130),
        Rgb::new(42, 161, 152),
        Rgb::new(181, 137, 0),
        Rgb::new(108, 113, 196),
        Rgb::new(203, 75, 22),
    ]
}

fn arithmetic_sizes(first: u64, step: u64, count: usize) -> Vec<u64> {
    (0..count as u64).map(|i| first + step * i).collect()
}

fn sort_descending(items: &mut [ArenaItem]) {
    items.sort_by(|a, b| b.size.cmp(&a.size));
}

/// Pull the next palette entry and advance the cursor.
fn next_color(counter: &mut usize, palette: &[Rgb]) -> ColorRef {
    let color: u32 = palette[*counter % palette.len()].into();
    *counter += 1;
    ColorRef(color)
}

/// Build one flat, equal-color row: every item in `sizes` shares a single
/// palette entry, matching the original demo data's one-color-per-group
/// convention.
fn make_row(sizes: Vec<u64>, counter: &mut usize, palette: &[Rgb]) -> Vec<ArenaItem> {
    let color = next_color(counter, palette);
    sizes.into_iter().map(|size| ArenaItem::leaf(size, color)).collect()
}

/// Build the preview tree: two sibling subtrees under a single root, one
/// holding a 30-item arithmetic row plus the three large individual items,
/// the other holding the remaining three arithmetic rows. Each flat
/// arithmetic-sequence row is a single equal-color group — one palette entry
/// per row, not per item — while the three individually-added items each get
/// their own palette entry. Colors cycle through the equalized palette in
/// creation order, stable regardless of which subtree a row ends up in.
pub fn build_preview_tree() -> ArenaItem {
    let palette = equalize_palette(&base_palette());
    let mut cursor = 0usize;

    let mut group_a: Vec<ArenaItem> = make_row(arithmetic_sizes(1, 100, 30), &mut cursor, &palette);
    group_a.push(ArenaItem::leaf(10_000, next_color(&mut cursor, &palette)));
    group_a.push(ArenaItem::leaf(6_000, next_color(&mut cursor, &palette)));
    group_a.push(ArenaItem::leaf(1_500, next_color(&mut cursor, &palette)));
    sort_descending(&mut group_a);

    let mut group_b: Vec<ArenaItem> = make_row(arithmetic_sizes(500, 600, 8), &mut cursor, &palette);
    group_b.extend(make_row(arithmetic_sizes(1, 200, 10), &mut cursor, &palette));
    group_b.extend(make_row(arithmetic_sizes(1, 1, 160), &mut cursor, &palette));
    sort_descending(&mut group_b);

    let mut children = vec![ArenaItem::internal(group_a), ArenaItem::internal(group_b)];
    sort_descending(&mut children);
    ArenaItem::internal(children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_has_exactly_two_subtrees_under_the_root() {
        let root = build_preview_tree();
        assert_eq!(root.child_count(), 2);
    }

    #[test]
    fn leaf_count_matches_every_sequence_plus_the_individual_items() {
        let root = build_preview_tree();
        let total_leaves: usize = root.children().iter().map(|c| c.children().len()).sum();
        assert_eq!(total_leaves, 30 + 8 + 10 + 160 + 3);
    }

    #[test]
    fn root_size_is_the_sum_of_every_leaf() {
        let root = build_preview_tree();
        let expected: u64 = arithmetic_sizes(1, 100, 30).iter().sum::<u64>()
            + arithmetic_sizes(500, 600, 8).iter().sum::<u64>()
            + arithmetic_sizes(1, 200, 10).iter().sum::<u64>()
            + arithmetic_sizes(1, 1, 160).iter().sum::<u64>()
            + 10_000
            + 6_000
            + 1_500;
        assert_eq!(root.size(), expected);
    }

    #[test]
    fn every_subtree_children_list_is_sorted_descending() {
        let root = build_preview_tree();
        for subtree in root.children() {
            let sizes: Vec<u64> = subtree.children().iter().map(|c| c.size()).collect();
            let mut sorted = sizes.clone();
            sorted.sort_by(|a, b| b.cmp(a));
            assert_eq!(sizes, sorted);
        }
        let top_sizes: Vec<u64> = root.children().iter().map(|c| c.size()).collect();
        assert!(top_sizes[0] >= top_sizes[1]);
    }

    #[test]
    fn every_leaf_has_a_nonzero_size() {
        let root = build_preview_tree();
        for subtree in root.children() {
            for leaf in subtree.children() {
                assert!(leaf.size() > 0);
            }
        }
    }

    #[test]
    fn arithmetic_sequence_rows_are_monochrome() {
        use std::collections::HashSet;
        let root = build_preview_tree();

        // group_a holds one 30-item arithmetic row plus three individually
        // colored items: the row shares one color, so only 4 distinct colors
        // (1 row + 3 individuals) appear among its 33 leaves.
        let group_a = root.children().iter().min_by_key(|c| c.children().len()).unwrap();
        let group_a_colors: HashSet<u32> = group_a.children().iter().map(|c| c.graph_color().0).collect();
        assert_eq!(group_a_colors.len(), 4);

        // The 30-item row is the largest color class; it must all share one
        // color, not cycle per item.
        let mut counts: std::collections::HashMap<u32, usize> = std::collections::HashMap::new();
        for c in group_a.children() {
            *counts.entry(c.graph_color().0).or_insert(0) += 1;
        }
        assert_eq!(*counts.values().max().unwrap(), 30);

        // group_b holds three arithmetic rows and no individual items: only
        // 3 distinct colors across its 178 leaves.
        let group_b = root.children().iter().max_by_key(|c| c.children().len()).unwrap();
        let group_b_colors: HashSet<u32> = group_b.children().iter().map(|c| c.graph_color().0).collect();
        assert_eq!(group_b_colors.len(), 3);
    }
}
