use core::fmt;

/// Reasons a [Grid](crate::Grid) cannot be created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Either the column or the row count was zero.
    EmptyDimension { cols: usize, rows: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::EmptyDimension { cols, rows } => {
                write!(f, "grid dimensions must be positive, got {cols}x{rows}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Returned when an algorithm id such as `"astar"` is not recognised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unknown algorithm '{}', expected one of bfs, dfs, dijkstra, astar",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}
