use grid_util::point::Point;

use crate::recorder::RunRecorder;
use crate::search_tree::{SearchTree, NO_PARENT};
use crate::solver::{GridSolver, SearchRun, Strategy};
use crate::weight_grid::WeightGrid;

/// Depth-first search on an explicit stack. Cells are marked visited at push
/// time so no cell is ever pushed twice; the search stops the instant the
/// popped node is the goal. Finds *some* path if one exists, with no length
/// guarantee.
#[derive(Clone, Debug)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn strategy(&self) -> Strategy {
        Strategy::Dfs
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
        let mut stack = vec![root];
        while let Some(ix) = stack.pop() {
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
                    stack.push(child);
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
