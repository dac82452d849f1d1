use crate::games::tictactoe::Board;

/// Linear list of board snapshots, starting with the empty board.
#[derive(Debug, Clone)]
pub struct ReplayRecorder {
    snapshots: Vec<Board>,
}

impl Default for ReplayRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplayRecorder {
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    pub fn record(&mut self, board: Board) {
        self.snapshots.push(board);
    }

    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    pub fn reset(&mut self) {
        self.snapshots.clear();
        self.snapshots.push(Board::new());
    }

    pub fn finalize(&self) -> Vec<Board> {
        self.snapshots.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_recorder_starts_with_empty_board() {
        let recorder = ReplayRecorder::new();
        assert_eq!(recorder.snapshots(), &[Board::new()]);
    }

    #[test]
    fn test_reset_keeps_only_empty_board() {
        let mut recorder = ReplayRecorder::new();
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        recorder.record(board);
        assert_eq!(recorder.finalize(), vec![Board::new(), board]);

        recorder.reset();
        assert_eq!(recorder.snapshots(), &[Board::new()]);
    }
}
