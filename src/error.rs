use grid_util::point::Point;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Configuration errors surfaced to the caller.
///
/// All of these are deterministic and detected before or at run start;
/// retrying with the same input cannot succeed. An exhausted search that
/// never reaches its target is NOT an error; it is reported as a normal
/// [`RunResult`](crate::RunResult) with `found == false`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The addressed cell lies outside the grid.
    #[error("cell ({x}, {y}) lies outside the grid")]
    OutOfBounds { x: usize, y: usize },

    /// The weight is outside `1..=100` and is not the impassable sentinel.
    #[error("weight {0} is outside the allowed range 1..=100")]
    InvalidWeight(u8),

    /// Start or end is out of bounds or impassable.
    #[error("start {start} or end {end} is out of bounds or impassable")]
    InvalidEndpoints { start: Point, end: Point },

    /// The strategy id matches none of `dfs`, `bfs` and `dijkstra`.
    #[error("unknown strategy id `{0}`")]
    UnknownStrategy(String),
}
