use crate::games::{BotType, SessionRng};
use crate::replay::{ReplayPlayer, ReplayRecorder};
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::{MoveError, ReplayError};
use super::game_state::TicTacToeGameState;
use super::types::{GameMode, Mark, Outcome, PlayerResult, WinningLine};
use super::win_detector::check_win_with_line;

/// The human always plays X and opens; in [`GameMode::VsBot`] the bot answers as O.
pub const HUMAN_MARK: Mark = Mark::X;
pub const BOT_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub bot_type: BotType,
    pub seed: Option<u64>,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::VsPlayer,
            bot_type: BotType::Minimax,
            seed: None,
        }
    }
}

/// One local game: live board, move history and the optional replay over that history.
pub struct TicTacToeSession {
    settings: TicTacToeSessionSettings,
    state: TicTacToeGameState,
    recorder: ReplayRecorder,
    replay: Option<ReplayPlayer>,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        crate::log_debug!(
            "New session: mode {:?}, bot {}, seed {}",
            settings.mode,
            settings.bot_type,
            rng.seed()
        );

        Self {
            settings,
            state: TicTacToeGameState::new(),
            recorder: ReplayRecorder::new(),
            replay: None,
            rng,
        }
    }

    /// Applies the current player's mark, then the bot's reply when it is the bot's turn.
    pub fn handle_click(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if self.replay.is_some() {
            return Err(MoveError::ReplayActive);
        }

        self.apply_move(index)?;

        if self.is_bot_turn() {
            self.play_bot_move();
        }

        Ok(self.state.outcome)
    }

    fn apply_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let mark = self.state.current_mark;
        let outcome = self.state.place_mark(index)?;
        self.recorder.record(self.state.board);
        crate::log_debug!("{} placed at {}", mark, index);

        match outcome {
            Outcome::Win(winner) => crate::log!("Game over: {} wins", winner),
            Outcome::Draw => crate::log!("Game over: draw"),
            Outcome::InProgress => {}
        }

        Ok(outcome)
    }

    fn is_bot_turn(&self) -> bool {
        self.settings.mode == GameMode::VsBot
            && !self.state.is_over()
            && self.state.current_mark == BOT_MARK
    }

    fn play_bot_move(&mut self) {
        let input = BotInput::new(self.state.board, self.state.current_mark);
        let Some(index) = calculate_move(self.settings.bot_type, input, &mut self.rng) else {
            crate::log_warn!("Bot found no move on\n{}", self.state.board);
            return;
        };

        crate::log_debug!("Bot ({}) chose cell {}", self.settings.bot_type, index);
        if let Err(e) = self.apply_move(index) {
            crate::log_error!("Bot move rejected: {}", e);
        }
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.settings.mode = mode;
        self.reset();
    }

    pub fn set_bot_type(&mut self, bot_type: BotType) {
        self.settings.bot_type = bot_type;
    }

    pub fn reset(&mut self) {
        self.state = TicTacToeGameState::new();
        self.recorder.reset();
        self.replay = None;
        crate::log_debug!("Session reset");
    }

    pub fn mode(&self) -> GameMode {
        self.settings.mode
    }

    pub fn bot_type(&self) -> BotType {
        self.settings.bot_type
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn current_mark(&self) -> Mark {
        self.state.current_mark
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.state.winning_line
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn result_for(&self, mark: Mark) -> Option<PlayerResult> {
        self.state.result_for(mark)
    }

    pub fn is_bot(&self, mark: Mark) -> bool {
        self.settings.mode == GameMode::VsBot && mark == BOT_MARK
    }

    pub fn history(&self) -> &[Board] {
        self.recorder.snapshots()
    }

    /// Board to render: the replay snapshot while replaying, the live board otherwise.
    pub fn displayed_board(&self) -> &Board {
        match &self.replay {
            Some(player) => player.current(),
            None => &self.state.board,
        }
    }

    pub fn displayed_winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(self.displayed_board())
    }

    pub fn replay(&self) -> Option<&ReplayPlayer> {
        self.replay.as_ref()
    }

    pub fn is_replaying(&self) -> bool {
        self.replay.is_some()
    }

    pub fn start_replay(&mut self) -> Result<(), ReplayError> {
        if !self.state.is_over() {
            return Err(ReplayError::GameInProgress);
        }
        self.replay = Some(ReplayPlayer::new(self.recorder.finalize()));
        crate::log_debug!("Replay started over {} snapshots", self.recorder.snapshots().len());
        Ok(())
    }

    pub fn exit_replay(&mut self) -> Result<(), ReplayError> {
        self.replay.take().map(|_| ()).ok_or(ReplayError::NotReplaying)
    }

    fn replay_mut(&mut self) -> Result<&mut ReplayPlayer, ReplayError> {
        self.replay.as_mut().ok_or(ReplayError::NotReplaying)
    }

    pub fn replay_next(&mut self) -> Result<bool, ReplayError> {
        Ok(self.replay_mut()?.next())
    }

    pub fn replay_previous(&mut self) -> Result<bool, ReplayError> {
        Ok(self.replay_mut()?.previous())
    }

    pub fn replay_seek(&mut self, index: usize) -> Result<(), ReplayError> {
        self.replay_mut()?.seek(index);
        Ok(())
    }

    pub fn replay_play(&mut self) -> Result<(), ReplayError> {
        self.replay_mut()?.play();
        Ok(())
    }

    pub fn replay_pause(&mut self) -> Result<(), ReplayError> {
        self.replay_mut()?.pause();
        Ok(())
    }

    /// Timer callback. Returns whether the replay still wants ticks.
    pub fn replay_tick(&mut self) -> Result<bool, ReplayError> {
        Ok(self.replay_mut()?.tick())
    }
}
