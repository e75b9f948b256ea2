//! # A* Search
//!
//! The search itself: octile-weighted A* over a [`SearchArea`] with
//! no-corner-cutting diagonals, movement penalties, and optional collapse
//! of collinear waypoints.

use crate::astar::{PathRequest, PathResult, SearchArea};
use crate::common::ADJACENT_8;
use crate::storage::IndexedHeap;
use crate::utility::GridPoint;
use std::collections::HashMap;

/// Cost of an orthogonal step.
pub const ORTHOGONAL_COST: i32 = 10;

/// Cost of a diagonal step.
pub const DIAGONAL_COST: i32 = 14;

/// Octile distance between two cells under the 10/14 step costs.
pub fn octile_distance(a: GridPoint, b: GridPoint) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    if dx < dy {
        DIAGONAL_COST * dx + ORTHOGONAL_COST * (dy - dx)
    } else {
        DIAGONAL_COST * dy + ORTHOGONAL_COST * (dx - dy)
    }
}

// Open-set ordering: lowest f first, ties broken by lowest h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Cost {
    f: i32,
    h: i32,
}

#[derive(Debug)]
struct Node {
    point: GridPoint,
    parent: Option<usize>,
    g: i32,
    h: i32,
    closed: bool,
}

/// Runs the request's search over `area`.
///
/// Trivial requests (blocked or coinciding endpoints) resolve without
/// expanding a single node. The returned path excludes the start cell.
pub fn search<A: SearchArea + ?Sized>(area: &A, request: &PathRequest) -> PathResult {
    if let Some(result) = request.prevalidate(area) {
        return result;
    }
    let start = request.start();
    let stop = request.stop();
    // initial capacity is somewhat arbitrary
    let capacity = (start.distance(stop) as usize * 4).min(area.area_size());

    let mut nodes: Vec<Node> = Vec::with_capacity(capacity);
    let mut lookup: HashMap<GridPoint, usize> = HashMap::with_capacity(capacity);
    let mut open: IndexedHeap<Cost> = IndexedHeap::with_capacity(capacity);

    let h0 = octile_distance(start, stop);
    nodes.push(Node {
        point: start,
        parent: None,
        g: 0,
        h: h0,
        closed: false,
    });
    lookup.insert(start, 0);
    open.push(0, Cost { f: h0, h: h0 });

    while let Some((current_id, _)) = open.pop() {
        let current = nodes[current_id].point;
        let current_g = nodes[current_id].g;
        nodes[current_id].closed = true;

        if current == stop {
            return PathResult::found(retrace(&nodes, current_id, request.collapse()));
        }

        for (dx, dy) in ADJACENT_8 {
            let x = current.x + dx;
            let y = current.y + dy;
            if dx != 0 && dy != 0 {
                // diagonal move: both flanking cells must be open too
                if !area.traversable(x, y)
                    || !area.traversable(current.x, y)
                    || !area.traversable(x, current.y)
                {
                    continue;
                }
            } else if !area.traversable(x, y) {
                continue;
            }
            let neighbor = GridPoint::new(x, y);
            let neighbor_id = *lookup.entry(neighbor).or_insert_with(|| {
                let id = nodes.len();
                nodes.push(Node {
                    point: neighbor,
                    parent: None,
                    g: i32::MAX,
                    h: octile_distance(neighbor, stop),
                    closed: false,
                });
                id
            });
            if nodes[neighbor_id].closed {
                continue;
            }
            let step = octile_distance(current, neighbor);
            let tentative_g = current_g + step + area.movement_penalty(x, y);
            if tentative_g < nodes[neighbor_id].g {
                nodes[neighbor_id].g = tentative_g;
                nodes[neighbor_id].parent = Some(current_id);
                let h = nodes[neighbor_id].h;
                let cost = Cost {
                    f: tentative_g + h,
                    h,
                };
                if !open.update(neighbor_id, cost) {
                    open.push(neighbor_id, cost);
                }
            }
        }
    }
    PathResult::not_found()
}

// Walks parents back to the start (excluded), reverses into start-to-target
// order, optionally dropping interior points of collinear runs.
fn retrace(nodes: &[Node], target_id: usize, collapse: bool) -> Vec<GridPoint> {
    let mut reversed = Vec::new();
    let mut current = target_id;
    while let Some(parent) = nodes[current].parent {
        reversed.push(nodes[current].point);
        current = parent;
    }
    let start = nodes[current].point;
    let mut path: Vec<GridPoint> = reversed.into_iter().rev().collect();
    if collapse {
        path = collapse_path(start, path);
    }
    path
}

fn collapse_path(start: GridPoint, path: Vec<GridPoint>) -> Vec<GridPoint> {
    if path.len() < 2 {
        return path;
    }
    let mut collapsed = Vec::with_capacity(path.len());
    let mut previous = start;
    for window in path.windows(2) {
        let (a, b) = (window[0], window[1]);
        let dir_in = ((a.x - previous.x).signum(), (a.y - previous.y).signum());
        let dir_out = ((b.x - a.x).signum(), (b.y - a.y).signum());
        if dir_in != dir_out {
            collapsed.push(a);
        }
        previous = a;
    }
    collapsed.push(path[path.len() - 1]);
    collapsed
}
