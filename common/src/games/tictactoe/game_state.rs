use super::board::Board;
use super::error::MoveError;
use super::types::{Mark, Outcome, PlayerResult, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub outcome: Outcome,
    pub winning_line: Option<WinningLine>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            outcome: Outcome::InProgress,
            winning_line: None,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }

        self.board.place(index, self.current_mark)?;

        self.check_game_over();

        if !self.outcome.is_over() {
            self.switch_turn();
        }

        Ok(self.outcome)
    }

    fn switch_turn(&mut self) {
        self.current_mark = self.current_mark.opponent();
    }

    fn check_game_over(&mut self) {
        self.outcome = evaluate(&self.board);
        self.winning_line = check_win_with_line(&self.board);
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn result_for(&self, mark: Mark) -> Option<PlayerResult> {
        match self.outcome {
            Outcome::InProgress => None,
            Outcome::Draw => Some(PlayerResult::Draw),
            Outcome::Win(winner) if winner == mark => Some(PlayerResult::Win),
            Outcome::Win(_) => Some(PlayerResult::Lose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate_starting_with_x() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.current_mark, Mark::X);
        state.place_mark(0).unwrap();
        assert_eq!(state.current_mark, Mark::O);
        state.place_mark(4).unwrap();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.board.get(4), Some(Mark::O));
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(0).unwrap();
        assert_eq!(
            state.place_mark(0),
            Err(MoveError::CellOccupied { index: 0 })
        );
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_win_stops_game_and_records_line() {
        let mut state = TicTacToeGameState::new();
        for index in [0, 3, 1, 4] {
            assert_eq!(state.place_mark(index), Ok(Outcome::InProgress));
        }
        assert_eq!(state.place_mark(2), Ok(Outcome::Win(Mark::X)));
        assert_eq!(state.winning_line, Some(WinningLine::new(Mark::X, [0, 1, 2])));
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.place_mark(8), Err(MoveError::GameOver));
        assert_eq!(state.result_for(Mark::X), Some(PlayerResult::Win));
        assert_eq!(state.result_for(Mark::O), Some(PlayerResult::Lose));
    }

    #[test]
    fn test_draw_result() {
        let mut state = TicTacToeGameState::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6] {
            assert_eq!(state.place_mark(index), Ok(Outcome::InProgress));
        }
        assert_eq!(state.place_mark(8), Ok(Outcome::Draw));
        assert_eq!(state.winning_line, None);
        assert_eq!(state.result_for(Mark::O), Some(PlayerResult::Draw));
    }
}
