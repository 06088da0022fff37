use thiserror::Error;

/// Errors raised while constructing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("initial state has {actual} rows, board height is {expected}")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("initial state row {row} has {actual} cells, board width is {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("requested {requested} alive cells but the board only has {capacity}")]
    TooManyAliveCells { requested: usize, capacity: usize },
}
