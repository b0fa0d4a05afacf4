use core::fmt;
use std::str::FromStr;

use grid_util::point::Point;

use crate::error::SearchError;
use crate::recorder::RunRecorder;
use crate::search_tree::SearchTree;
use crate::weight_grid::WeightGrid;

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

/// Identifier of a search strategy. Parses from the ids `dfs`, `bfs` and
/// `dijkstra` (case-insensitive, so the display labels `DFS`, `BFS` and
/// `Dijkstra` parse too).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Dfs,
    Bfs,
    Dijkstra,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Dfs, Strategy::Bfs, Strategy::Dijkstra];

    pub fn id(self) -> &'static str {
        match self {
            Strategy::Dfs => "dfs",
            Strategy::Bfs => "bfs",
            Strategy::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Strategy, SearchError> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(Strategy::Dfs),
            "bfs" => Ok(Strategy::Bfs),
            "dijkstra" => Ok(Strategy::Dijkstra),
            _ => Err(SearchError::UnknownStrategy(s.to_owned())),
        }
    }
}

/// Everything a single traversal produced: the node arena, the indices of
/// visited nodes in visitation order, and the terminal node for the goal if
/// it was reached.
#[derive(Clone, Debug)]
pub struct SearchRun<C = i32> {
    pub tree: SearchTree<C>,
    pub visits: Vec<usize>,
    pub terminal: Option<usize>,
}

/// Common contract of the three strategies.
///
/// A solver explores `grid` from `start` until `goal` is visited or the
/// frontier is exhausted, reporting every visit to `recorder` as it happens.
/// Endpoints are validated by the engine before dispatch. All solvers expand
/// neighbours in the fixed order [crate::NEIGHBOR_ORDER] and never enter
/// impassable cells.
pub trait GridSolver {
    /// The strategy this solver implements.
    fn strategy(&self) -> Strategy;

    fn search(
        &self,
        grid: &WeightGrid,
        start: Point,
        goal: Point,
        recorder: &mut RunRecorder,
    ) -> SearchRun;
}
