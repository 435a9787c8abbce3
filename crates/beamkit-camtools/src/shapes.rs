//! Connected-component grouping of drawing segments.
//!
//! Two segments belong to the same shape when they share an endpoint,
//! directly or transitively. Grouping runs a union-find over interned point
//! ids, one union per segment in input order.

use crate::geometry::{GeometryIndex, PointId, SegmentId};
use std::collections::HashMap;

/// A maximal connected component of the drawing.
#[derive(Debug)]
pub struct Shape {
    /// Member segments, in input order.
    pub segments: Vec<SegmentId>,
    /// Member points, in enumeration order.
    pub points: Vec<PointId>,
}

/// Disjoint-set forest with path compression and union by size.
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
    }
}

/// Partitions the indexed segments into connected shapes.
///
/// Shapes are returned in the order each component's first segment appeared
/// in the input; that order fixes the global cut order.
pub fn group_shapes(index: &GeometryIndex) -> Vec<Shape> {
    let mut dsu = DisjointSet::new(index.point_count());
    for seg in 0..index.segment_count() {
        let (from, to) = index.segment(seg);
        dsu.union(from, to);
    }

    let mut shapes: Vec<Shape> = Vec::new();
    let mut shape_of_root: HashMap<usize, usize> = HashMap::new();

    for seg in 0..index.segment_count() {
        let root = dsu.find(index.segment(seg).0);
        let slot = *shape_of_root.entry(root).or_insert_with(|| {
            shapes.push(Shape {
                segments: Vec::new(),
                points: Vec::new(),
            });
            shapes.len() - 1
        });
        shapes[slot].segments.push(seg);
    }

    for point in 0..index.point_count() {
        let root = dsu.find(point);
        if let Some(&slot) = shape_of_root.get(&root) {
            shapes[slot].points.push(point);
        }
    }

    shapes
}
