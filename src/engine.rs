use std::time::Duration;

use grid_util::point::Point;
use log::{info, warn};

use crate::error::{Result, SearchError};
use crate::recorder::{RunRecorder, TraceSample};
use crate::solver::bfs::BfsSolver;
use crate::solver::dfs::DfsSolver;
use crate::solver::dijkstra::DijkstraSolver;
use crate::solver::{GridSolver, Strategy};
use crate::weight_grid::WeightGrid;

/// One traversal request: a read-only grid snapshot, the two endpoints and
/// the strategy to dispatch. Start and end may be equal (the result is the
/// trivial single-cell path).
#[derive(Clone, Copy, Debug)]
pub struct RunRequest<'a> {
    pub grid: &'a WeightGrid,
    pub start: Point,
    pub end: Point,
    pub strategy: Strategy,
}

/// Composite outcome of one run; produced once, immutable thereafter.
#[derive(Clone, Debug, PartialEq)]
pub struct RunResult {
    /// The route from start to end inclusive; empty if `found` is false.
    pub path: Vec<Point>,
    pub found: bool,
    /// Number of cells visited before the run terminated.
    pub visited_count: usize,
    /// Every visited cell in visitation order, for rendering.
    pub visits: Vec<Point>,
    /// The visited-count-over-time samples taken during the run.
    pub samples: Vec<TraceSample>,
    pub elapsed: Duration,
}

impl RunResult {
    /// Edge count of the returned path; 0 for both the trivial and the empty
    /// path.
    pub fn path_edges(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Engine facade: validates a [RunRequest], dispatches to the requested
/// strategy and assembles the [RunResult]. Exactly one strategy executes per
/// call, synchronously; a run always completes or fails validation before
/// returning.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    pub recorder: RunRecorder,
}

impl Engine {
    pub fn new() -> Engine {
        Engine {
            recorder: RunRecorder::new(),
        }
    }

    /// An engine whose recorder samples every `sample_interval` visits
    /// instead of the default.
    pub fn with_sample_interval(sample_interval: usize) -> Engine {
        Engine {
            recorder: RunRecorder::with_interval(sample_interval),
        }
    }

    /// Runs one traversal. Fails with [SearchError::InvalidEndpoints] before
    /// any traversal if either endpoint is out of bounds or impassable. An
    /// unreachable end is NOT an error: the result then has `found == false`,
    /// an empty path and the full trace of everything that was explored.
    pub fn run(&mut self, request: &RunRequest) -> Result<RunResult> {
        let grid = request.grid;
        if !grid.can_move_to(request.start) || !grid.can_move_to(request.end) {
            return Err(SearchError::InvalidEndpoints {
                start: request.start,
                end: request.end,
            });
        }
        info!(
            "Running {} from {} to {}",
            request.strategy, request.start, request.end
        );
        self.recorder.begin();
        let run = match request.strategy {
            Strategy::Dfs => DfsSolver.search(grid, request.start, request.end, &mut self.recorder),
            Strategy::Bfs => BfsSolver.search(grid, request.start, request.end, &mut self.recorder),
            Strategy::Dijkstra => {
                DijkstraSolver.search(grid, request.start, request.end, &mut self.recorder)
            }
        };
        let elapsed = self.recorder.finish(request.strategy, run.visits.len());
        let found = run.terminal.is_some();
        if !found {
            info!(
                "{} explored {} cells without reaching {}",
                request.strategy,
                run.visits.len(),
                request.end
            );
            if !grid.components_dirty && grid.reachable(&request.start, &request.end) {
                warn!("Exhausted search but components claim reachability, are components stale?");
            }
        }
        let path = run.tree.reconstruct(run.terminal);
        let visits = run
            .visits
            .iter()
            .map(|&ix| run.tree.position(ix))
            .collect::<Vec<Point>>();
        Ok(RunResult {
            path,
            found,
            visited_count: run.visits.len(),
            visits,
            samples: self.recorder.samples().to_vec(),
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IMPASSABLE;
    use grid_util::grid::Grid;

    fn open_grid(n: usize) -> WeightGrid {
        let mut grid: WeightGrid = WeightGrid::new(n, n, 0);
        grid.generate_components();
        grid
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let grid = open_grid(3);
        let mut engine = Engine::new();
        let request = RunRequest {
            grid: &grid,
            start: Point::new(0, 0),
            end: Point::new(3, 0),
            strategy: Strategy::Bfs,
        };
        assert_eq!(
            engine.run(&request),
            Err(SearchError::InvalidEndpoints {
                start: Point::new(0, 0),
                end: Point::new(3, 0),
            })
        );
    }

    #[test]
    fn rejects_impassable_endpoints() {
        let mut grid = open_grid(3);
        grid.set_weight(0, 0, IMPASSABLE).unwrap();
        let mut engine = Engine::new();
        for (start, end) in [
            (Point::new(0, 0), Point::new(2, 2)),
            (Point::new(2, 2), Point::new(0, 0)),
        ] {
            let request = RunRequest {
                grid: &grid,
                start,
                end,
                strategy: Strategy::Dfs,
            };
            assert_eq!(
                engine.run(&request),
                Err(SearchError::InvalidEndpoints { start, end })
            );
        }
    }

    #[test]
    fn result_fields_are_consistent() {
        let grid = open_grid(4);
        let mut engine = Engine::new();
        for strategy in Strategy::ALL {
            let request = RunRequest {
                grid: &grid,
                start: Point::new(0, 0),
                end: Point::new(3, 3),
                strategy,
            };
            let result = engine.run(&request).unwrap();
            assert!(result.found);
            assert_eq!(result.visited_count, result.visits.len());
            assert_eq!(result.samples.first().unwrap().visited, 0);
            assert_eq!(
                result.samples.last().unwrap().visited,
                result.visited_count
            );
            assert_eq!(*result.path.first().unwrap(), request.start);
            assert_eq!(*result.path.last().unwrap(), request.end);
            assert!(engine.recorder.elapsed(strategy).is_some());
        }
        assert_eq!(engine.recorder.elapsed_times().len(), 3);
    }

    #[test]
    fn start_equals_end_is_a_trivial_run() {
        let grid = open_grid(3);
        let mut engine = Engine::new();
        for strategy in Strategy::ALL {
            let request = RunRequest {
                grid: &grid,
                start: Point::new(1, 1),
                end: Point::new(1, 1),
                strategy,
            };
            let result = engine.run(&request).unwrap();
            assert!(result.found);
            assert_eq!(result.path, vec![Point::new(1, 1)]);
            assert_eq!(result.path_edges(), 0);
            assert_eq!(result.visited_count, 1);
        }
    }

    #[test]
    fn unreachable_end_reports_full_exploration() {
        //  _____
        // |S    |
        // |#####|
        // |    G|
        //  _____
        let mut grid: WeightGrid = WeightGrid::new(5, 3, 0);
        for x in 0..5 {
            grid.set_weight(x, 1, IMPASSABLE).unwrap();
        }
        grid.generate_components();
        let mut engine = Engine::new();
        for strategy in Strategy::ALL {
            let request = RunRequest {
                grid: &grid,
                start: Point::new(0, 0),
                end: Point::new(4, 2),
                strategy,
            };
            let result = engine.run(&request).unwrap();
            assert!(!result.found);
            assert!(result.path.is_empty());
            assert_eq!(result.path_edges(), 0);
            // The whole top row was explored before giving up.
            assert_eq!(result.visited_count, 5);
        }
    }
}
