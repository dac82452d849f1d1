use derive_more::{Display, Error};

/// Rejected board or session intent. Callers in the UI treat these as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("Cell {index} is out of bounds")]
    OutOfBounds { index: usize },
    #[display("Cell {index} is already marked")]
    CellOccupied { index: usize },
    #[display("Game is already over")]
    GameOver,
    #[display("Board is locked while a replay is active")]
    ReplayActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    #[display("Replay is only available after the game has ended")]
    GameInProgress,
    #[display("No replay is active")]
    NotReplaying,
}
