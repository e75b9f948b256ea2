//! # View-Culling Quadtree
//!
//! Quadtree over a power-of-two square area. No LOD: queries subdivide to a
//! fixed leaf size and visit the leaves intersecting a rectangle. Used to
//! cull terrain chunks against the camera view.

/// A leaf visited by a quadtree query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadTreeLeaf {
    /// Leaf column in leaf-sized units
    pub x: i32,
    /// Leaf row in leaf-sized units
    pub y: i32,
    /// Leaf center x in world units
    pub center_x: f32,
    /// Leaf center y in world units
    pub center_y: f32,
    /// Leaf edge length in world units
    pub size: f32,
}

/// Quadtree for orthographic view culling.
#[derive(Debug, Clone)]
pub struct QuadTree {
    size: f32,
    depth_limit: u32,
    x0: f32,
    y0: f32,
}

impl QuadTree {
    /// Creates a tree covering a `2^pow2_tree` square with `2^pow2_leaf`
    /// leaves. `pow2_tree` is clamped to at least 1 and `pow2_leaf` to at
    /// most `pow2_tree`.
    pub fn new(pow2_tree: u32, pow2_leaf: u32) -> Self {
        let pow2_tree = pow2_tree.max(1);
        let pow2_leaf = pow2_leaf.min(pow2_tree);
        Self {
            size: (1u32 << pow2_tree) as f32,
            depth_limit: pow2_tree - pow2_leaf,
            x0: 0.0,
            y0: 0.0,
        }
    }

    /// Moves the tree's bottom-left corner.
    pub fn set_offset(&mut self, x0: f32, y0: f32) {
        self.x0 = x0;
        self.y0 = y0;
    }

    /// Edge length of the whole tree in world units.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Visits every leaf intersecting the rectangle spanned by `p1` and
    /// `p2` (any corner order).
    pub fn query<F: FnMut(QuadTreeLeaf)>(
        &self,
        p1: (f32, f32),
        p2: (f32, f32),
        mut visitor: F,
    ) {
        let (min_x, max_x) = if p1.0 < p2.0 { (p1.0, p2.0) } else { (p2.0, p1.0) };
        let (min_y, max_y) = if p1.1 < p2.1 { (p1.1, p2.1) } else { (p2.1, p1.1) };
        self.query_node(
            self.x0,
            self.y0,
            self.size,
            min_x,
            min_y,
            max_x,
            max_y,
            0,
            &mut visitor,
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn query_node<F: FnMut(QuadTreeLeaf)>(
        &self,
        x0: f32,
        y0: f32,
        s: f32,
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
        depth: u32,
        visitor: &mut F,
    ) {
        let node_max_x = x0 + s;
        let node_max_y = y0 + s;
        if x0 < max_x && node_max_x > min_x && node_max_y > min_y && y0 < max_y {
            let half = s / 2.0;
            let cx = x0 + half;
            let cy = y0 + half;
            if depth < self.depth_limit {
                let d = depth + 1;
                self.query_node(x0, y0, half, min_x, min_y, max_x, max_y, d, visitor);
                self.query_node(cx, y0, half, min_x, min_y, max_x, max_y, d, visitor);
                self.query_node(x0, cy, half, min_x, min_y, max_x, max_y, d, visitor);
                self.query_node(cx, cy, half, min_x, min_y, max_x, max_y, d, visitor);
            } else {
                visitor(QuadTreeLeaf {
                    x: ((x0 - self.x0) / s) as i32,
                    y: ((y0 - self.y0) / s) as i32,
                    center_x: cx,
                    center_y: cy,
                    size: s,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn collect(tree: &QuadTree, p1: (f32, f32), p2: (f32, f32)) -> Vec<QuadTreeLeaf> {
        let mut leaves = Vec::new();
        tree.query(p1, p2, |leaf| leaves.push(leaf));
        leaves
    }

    #[test]
    fn full_query_visits_every_leaf() {
        // 16x16 tree with 4x4 leaves: 4x4 = 16 leaves
        let tree = QuadTree::new(4, 2);
        let leaves = collect(&tree, (0.0, 0.0), (16.0, 16.0));
        assert_eq!(leaves.len(), 16);
        for leaf in &leaves {
            assert_eq!(leaf.size, 4.0);
            assert!((0..4).contains(&leaf.x));
            assert!((0..4).contains(&leaf.y));
        }
    }

    #[test]
    fn small_query_hits_single_leaf() {
        let tree = QuadTree::new(4, 2);
        let leaves = collect(&tree, (1.0, 1.0), (2.0, 2.0));
        assert_eq!(leaves.len(), 1);
        assert_eq!((leaves[0].x, leaves[0].y), (0, 0));
        assert_eq!((leaves[0].center_x, leaves[0].center_y), (2.0, 2.0));
    }

    #[test]
    fn corner_order_does_not_matter() {
        let tree = QuadTree::new(5, 3);
        let a = collect(&tree, (3.0, 3.0), (20.0, 14.0));
        let b = collect(&tree, (20.0, 14.0), (3.0, 3.0));
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn offset_shifts_leaf_centers_not_coords() {
        let mut tree = QuadTree::new(3, 3);
        tree.set_offset(100.0, 50.0);
        let leaves = collect(&tree, (100.0, 50.0), (108.0, 58.0));
        assert_eq!(leaves.len(), 1);
        assert_eq!((leaves[0].x, leaves[0].y), (0, 0));
        assert_eq!((leaves[0].center_x, leaves[0].center_y), (104.0, 54.0));
    }

    #[test]
    fn disjoint_query_visits_nothing() {
        let tree = QuadTree::new(4, 2);
        assert!(collect(&tree, (20.0, 20.0), (30.0, 30.0)).is_empty());
        assert!(collect(&tree, (-10.0, -10.0), (-1.0, -1.0)).is_empty());
    }

    proptest! {
        #[test]
        fn visited_leaves_intersect_the_rectangle(
            x1 in -8.0f32..40.0, y1 in -8.0f32..40.0,
            x2 in -8.0f32..40.0, y2 in -8.0f32..40.0,
        ) {
            let tree = QuadTree::new(5, 2);
            let (min_x, max_x) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
            let (min_y, max_y) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
            let leaves = collect(&tree, (x1, y1), (x2, y2));
            for leaf in leaves {
                let half = leaf.size / 2.0;
                let lx0 = leaf.center_x - half;
                let ly0 = leaf.center_y - half;
                prop_assert!(lx0 < max_x && lx0 + leaf.size > min_x);
                prop_assert!(ly0 < max_y && ly0 + leaf.size > min_y);
            }
        }
    }
}
