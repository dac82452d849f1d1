use crate::games::{BotType, SessionRng};
use super::board::{Board, get_available_moves};
use super::types::{Mark, Outcome};
use super::win_detector::evaluate;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, current_mark: Mark) -> Self {
        Self {
            board,
            current_mark,
        }
    }
}

/// Best cell for the searching side and its game-theoretic value under optimal play:
/// +1 win, 0 draw, -1 loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub cell: usize,
    pub score: i8,
    pub stats: SearchStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub max_depth: usize,
}

pub fn calculate_move(bot_type: BotType, input: BotInput, rng: &mut SessionRng) -> Option<usize> {
    match bot_type {
        BotType::Random => calculate_random_move(&input, rng),
        BotType::Minimax => calculate_minimax_move(&input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    best_move(&input.board, input.current_mark)
}

/// Optimal cell for `side`, or `None` when the board has no empty cell.
pub fn best_move(board: &Board, side: Mark) -> Option<usize> {
    search(board, side).map(|result| result.cell)
}

/// Exhaustive minimax without pruning. Ties go to the first cell in row-major order.
pub fn search(board: &Board, side: Mark) -> Option<SearchResult> {
    let mut scratch = *board;
    let mut stats = SearchStats::default();
    let mut best: Option<(usize, i8)> = None;

    for cell in get_available_moves(&scratch) {
        let score = {
            let mut placed = scratch.place_scoped(cell, side);
            minimax(&mut placed, side, false, 1, &mut stats)
        };

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((cell, score));
        }
    }

    best.map(|(cell, score)| SearchResult { cell, score, stats })
}

fn minimax(
    board: &mut Board,
    bot_mark: Mark,
    is_maximizing: bool,
    depth: usize,
    stats: &mut SearchStats,
) -> i8 {
    stats.nodes += 1;
    stats.max_depth = stats.max_depth.max(depth);

    match evaluate(board) {
        Outcome::Win(winner) if winner == bot_mark => return 1,
        Outcome::Win(_) => return -1,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let mark = if is_maximizing {
        bot_mark
    } else {
        bot_mark.opponent()
    };

    let mut best_score = if is_maximizing { i8::MIN } else { i8::MAX };
    for cell in get_available_moves(board) {
        let mut placed = board.place_scoped(cell, mark);
        let score = minimax(&mut placed, bot_mark, !is_maximizing, depth + 1, stats);
        best_score = if is_maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::LINES;

    fn board(layout: &str) -> Board {
        Board::parse(layout).unwrap()
    }

    #[test]
    fn test_blocks_immediate_win() {
        // X is a tempo ahead here, so every reply loses; the block is still the first cell scanned.
        let board = board("XX. ... ...");
        let result = search(&board, Mark::O).unwrap();
        assert_eq!(result.cell, 2);
        assert_eq!(result.score, -1);
    }

    #[test]
    fn test_takes_immediate_win_over_block() {
        let board = board("XX. .X. OO.");
        let result = search(&board, Mark::O).unwrap();
        assert_eq!(result.cell, 8);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_equal_scores_resolve_to_first_cell_in_scan_order() {
        let board = board("X.. .O. ...");
        let result = search(&board, Mark::X).unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.cell, 1);
        assert!(board.is_empty_at(result.cell));
    }

    #[test]
    fn test_center_reply_to_corner_opening() {
        let board = board("X.. ... ...");
        let result = search(&board, Mark::O).unwrap();
        assert_eq!(result.cell, 4);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_empty_board_value_is_draw_and_first_cell_wins_tie() {
        let result = search(&Board::new(), Mark::X).unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.cell, 0);
        assert_eq!(result.stats.max_depth, 9);
        assert!(result.stats.nodes > 0);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board("XOX XOO OXX");
        assert_eq!(search(&board, Mark::X), None);
        assert_eq!(best_move(&board, Mark::O), None);
    }

    #[test]
    fn test_search_does_not_modify_input() {
        let board = board("X.O .X. ...");
        let before = board;
        let _ = search(&board, Mark::O);
        assert_eq!(board, before);
    }

    #[test]
    fn test_already_won_board_returns_first_empty_cell() {
        let board = board("XXX OO. ...");
        assert_eq!(best_move(&board, Mark::O), Some(5));
    }

    #[test]
    fn test_self_play_ends_in_draw() {
        let mut board = Board::new();
        let mut mark = Mark::X;
        while evaluate(&board) == Outcome::InProgress {
            let cell = best_move(&board, mark).unwrap();
            assert!(board.is_empty_at(cell));
            board.place(cell, mark).unwrap();
            mark = mark.opponent();
        }
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    fn assert_bot_never_loses(board: &mut Board, bot_mark: Mark, to_move: Mark) {
        match evaluate(board) {
            Outcome::Win(winner) => {
                assert_eq!(winner, bot_mark, "bot lost on\n{}", board);
                return;
            }
            Outcome::Draw => return,
            Outcome::InProgress => {}
        }

        if to_move == bot_mark {
            let cell = best_move(board, bot_mark).unwrap();
            let mut placed = board.place_scoped(cell, bot_mark);
            assert_bot_never_loses(&mut placed, bot_mark, to_move.opponent());
        } else {
            for cell in get_available_moves(board) {
                let mut placed = board.place_scoped(cell, to_move);
                assert_bot_never_loses(&mut placed, bot_mark, to_move.opponent());
            }
        }
    }

    #[test]
    fn test_bot_never_loses_as_second_player() {
        assert_bot_never_loses(&mut Board::new(), Mark::O, Mark::X);
    }

    #[test]
    fn test_bot_never_loses_as_first_player() {
        assert_bot_never_loses(&mut Board::new(), Mark::X, Mark::X);
    }

    #[test]
    fn test_random_bot_picks_empty_cell() {
        let board = board("XOX .O. X.O");
        let mut rng = SessionRng::new(7);
        for _ in 0..20 {
            let input = BotInput::new(board, Mark::X);
            let cell = calculate_move(BotType::Random, input, &mut rng).unwrap();
            assert!(board.is_empty_at(cell));
        }
    }

    #[test]
    fn test_calculate_move_dispatches_minimax() {
        let mut rng = SessionRng::new(1);
        let input = BotInput::new(board("XX. ... ..."), Mark::O);
        assert_eq!(calculate_move(BotType::Minimax, input, &mut rng), Some(2));
    }

    #[test]
    fn test_winning_lines_are_completed_when_available() {
        for line in LINES {
            let mut board = Board::new();
            board.place(line[0], Mark::O).unwrap();
            board.place(line[1], Mark::O).unwrap();
            let result = search(&board, Mark::O).unwrap();
            assert_eq!(result.score, 1, "line {:?}", line);
        }
    }
}
