use std::collections::VecDeque;

use grid_util::point::Point;

use crate::recorder::RunRecorder;
use crate::search_tree::{SearchTree, NO_PARENT};
use crate::solver::{GridSolver, SearchRun, Strategy};
use crate::weight_grid::WeightGrid;

/// Breadth-first search on a FIFO queue. Cells are marked visited at enqueue
/// time to avoid duplicate enqueues; the search stops the instant the
/// dequeued node is the goal. Ignores weights and returns a path with the
/// minimum number of edges.
#[derive(Clone, Debug)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn strategy(&self) -> Strategy {
        Strategy::Bfs
    }

    fn search(
        &self,
        grid: &WeightGrid,
        start: Point,
        goal: Point,
        recorder: &mut RunRecorder,
    ) -> SearchRun {
        let mut tree = SearchTree::new();
        let mut visits = Vec::new();
        let root = tree.discover(start, NO_PARENT, 0).unwrap();
        let mut queue = VecDeque::from([root]);
        while let Some(ix) = queue.pop_front() {
            visits.push(ix);
            recorder.on_visit(visits.len());
            let pos = tree.position(ix);
            if pos == goal {
                return SearchRun {
                    tree,
                    visits,
                    terminal: Some(ix),
                };
            }
            let depth = tree.distance(ix);
            for n in grid.passable_neighbors(pos) {
                if let Some(child) = tree.discover(n, ix, depth + 1) {
                    queue.push_back(child);
                }
            }
        }
        SearchRun {
            tree,
            visits,
            terminal: None,
        }
    }
}
