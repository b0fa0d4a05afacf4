use std::cmp::Ordering;
use std::collections::BinaryHeap;

use grid_util::point::Point;
use num_traits::Zero;

use crate::recorder::RunRecorder;
use crate::search_tree::{SearchTree, NO_PARENT};
use crate::solver::{GridSolver, SearchRun, Strategy};
use crate::weight_grid::WeightGrid;

/// Heap entry of the weighted search: the cumulative cost of a frontier node
/// plus its arena index. Entries are never updated in place; relaxation
/// pushes a fresh entry and stale ones are discarded on pop.
struct SmallestCostHolder<K> {
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the std max-heap pops the smallest cost; equal costs
        // pop in discovery order (smaller arena index first) to pin
        // tie-breaking.
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.index.cmp(&self.index),
            s => s,
        }
    }
}

/// Weighted search core: a plain binary min-heap with lazy deletion. A node
/// is finalized (and counted as visited) only when popped; popped entries
/// for already finalized nodes are dropped without re-expansion. With
/// non-negative edge costs the terminal node's distance is optimal by the
/// standard argument.
pub(crate) fn weighted_search<C, FC>(
    grid: &WeightGrid,
    start: Point,
    goal: Point,
    edge_cost: FC,
    recorder: &mut RunRecorder,
) -> SearchRun<C>
where
    C: Zero + Ord + Copy,
    FC: Fn(&WeightGrid, Point) -> C,
{
    let mut tree = SearchTree::new();
    let mut visits = Vec::new();
    let mut to_see = BinaryHeap::new();
    let root = tree.relax(start, NO_PARENT, C::zero()).unwrap();
    to_see.push(SmallestCostHolder {
        cost: C::zero(),
        index: root,
    });
    while let Some(SmallestCostHolder { cost, index }) = to_see.pop() {
        if !tree.finalize(index) {
            continue;
        }
        visits.push(index);
        recorder.on_visit(visits.len());
        let pos = tree.position(index);
        if pos == goal {
            return SearchRun {
                tree,
                visits,
                terminal: Some(index),
            };
        }
        for n in grid.passable_neighbors(pos) {
            let next = cost + edge_cost(grid, n);
            if let Some(nix) = tree.relax(n, index, next) {
                to_see.push(SmallestCostHolder {
                    cost: next,
                    index: nix,
                });
            }
        }
    }
    SearchRun {
        tree,
        visits,
        terminal: None,
    }
}

/// Dijkstra shortest-path search. The cost of an edge is the weight of its
/// destination cell (an unset cell costs 1, same as an explicit 1).
#[derive(Clone, Debug)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn strategy(&self) -> Strategy {
        Strategy::Dijkstra
    }

    fn search(
        &self,
        grid: &WeightGrid,
        start: Point,
        goal: Point,
        recorder: &mut RunRecorder,
    ) -> SearchRun {
        weighted_search(grid, start, goal, |grid, pos| grid.traversal_cost(pos), recorder)
    }
}
