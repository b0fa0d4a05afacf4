//! Index-based arena of search nodes and parent-pointer path reconstruction.
//!
//! Nodes are stored in an insertion-ordered map keyed by coordinate, so the
//! arena doubles as the visited/discovered set: a coordinate owns exactly one
//! node per run, and parent links are plain indices into the arena. Parent
//! chains therefore form a tree rooted at the start node and can never cycle.

use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index of the root node.
pub const NO_PARENT: usize = usize::MAX;

/// One node of the search tree. `distance` is the edge count for the
/// unweighted strategies and the cumulative weighted distance for Dijkstra.
#[derive(Clone, Copy, Debug)]
pub struct SearchNode<C> {
    pub parent: usize,
    pub distance: C,
    pub finalized: bool,
}

/// Arena of [SearchNode]s for a single run; discarded afterwards. Insertion
/// order is discovery order, so indices handed out by [discover](Self::discover)
/// and [relax](Self::relax) are stable for the lifetime of the run.
#[derive(Clone, Debug, Default)]
pub struct SearchTree<C = i32> {
    nodes: FxIndexMap<Point, SearchNode<C>>,
}

impl<C: Copy> SearchTree<C> {
    pub fn new() -> SearchTree<C> {
        SearchTree {
            nodes: FxIndexMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn position(&self, ix: usize) -> Point {
        *self.nodes.get_index(ix).unwrap().0
    }

    pub fn distance(&self, ix: usize) -> C {
        self.nodes.get_index(ix).unwrap().1.distance
    }

    /// Inserts a node for `pos` unless the coordinate was already discovered.
    /// This is the visited-at-push discipline of the unweighted strategies:
    /// the first discovery wins and fixes parent and distance.
    pub fn discover(&mut self, pos: Point, parent: usize, distance: C) -> Option<usize> {
        match self.nodes.entry(pos) {
            Vacant(e) => {
                let ix = e.index();
                e.insert(SearchNode {
                    parent,
                    distance,
                    finalized: false,
                });
                Some(ix)
            }
            Occupied(_) => None,
        }
    }

    /// Inserts a node for `pos`, or lowers an unfinalized node's distance and
    /// reparents it. Returns the node index when the entry was created or
    /// improved (the caller then pushes a fresh heap entry), [None] otherwise.
    pub fn relax(&mut self, pos: Point, parent: usize, distance: C) -> Option<usize>
    where
        C: Ord,
    {
        match self.nodes.entry(pos) {
            Vacant(e) => {
                let ix = e.index();
                e.insert(SearchNode {
                    parent,
                    distance,
                    finalized: false,
                });
                Some(ix)
            }
            Occupied(mut e) => {
                let ix = e.index();
                let node = e.get_mut();
                if !node.finalized && distance < node.distance {
                    node.parent = parent;
                    node.distance = distance;
                    Some(ix)
                } else {
                    None
                }
            }
        }
    }

    /// Marks a node finalized; returns [false] if it already was. Popping a
    /// stale heap entry for an already finalized node must discard it
    /// without re-expansion.
    pub fn finalize(&mut self, ix: usize) -> bool {
        let node = self.nodes.get_index_mut(ix).unwrap().1;
        if node.finalized {
            false
        } else {
            node.finalized = true;
            true
        }
    }

    /// Walks parent indices from the terminal node back to the root and
    /// reverses the collected coordinates into a start→end path, both
    /// endpoints inclusive. An absent terminal yields an empty path.
    pub fn reconstruct(&self, terminal: Option<usize>) -> Vec<Point> {
        let Some(terminal) = terminal else {
            return Vec::new();
        };
        let mut path: Vec<Point> = itertools::unfold(terminal, |i| {
            self.nodes.get_index(*i).map(|(pos, node)| {
                *i = node.parent;
                *pos
            })
        })
        .collect();
        path.reverse();
        path
    }
}
