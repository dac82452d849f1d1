mod board;
mod bot_controller;
mod error;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{
    BotInput, SearchResult, SearchStats, best_move, calculate_minimax_move, calculate_move, search,
};
pub use error::{MoveError, ReplayError};
pub use game_state::TicTacToeGameState;
pub use session::{BOT_MARK, HUMAN_MARK, TicTacToeSession, TicTacToeSessionSettings};
pub use types::{
    BOARD_SIZE, CELL_COUNT, GameMode, Mark, Outcome, PlayerResult, Position, WinningLine,
};
pub use win_detector::{LINES, check_win, check_win_with_line, evaluate};
