use std::time::Duration;

use common::replay::{ReplayTick, ReplayTimer};
use common::tictactoe::TicTacToeSession;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Drives the session's replay from a [`ReplayTimer`]; polled once per frame.
pub struct ReplayPlayback {
    runtime: Handle,
    interval: Duration,
    timer: Option<(ReplayTimer, mpsc::UnboundedReceiver<ReplayTick>)>,
    is_paused: bool,
}

impl ReplayPlayback {
    pub fn new(runtime: Handle, interval: Duration) -> Self {
        Self {
            runtime,
            interval,
            timer: None,
            is_paused: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some() && !self.is_paused
    }

    /// Applies pending ticks and keeps the timer in step with the session. Returns whether the
    /// displayed board changed.
    pub fn update(&mut self, session: &mut TicTacToeSession) -> bool {
        let Some(replay) = session.replay() else {
            self.stop();
            return false;
        };

        if replay.is_finished() {
            self.stop();
            return false;
        }

        if !replay.is_playing() {
            if let Some((timer, _)) = &self.timer
                && !self.is_paused
            {
                timer.pause();
                self.is_paused = true;
            }
            return false;
        }

        match &self.timer {
            None => {
                self.timer = Some(ReplayTimer::spawn(&self.runtime, self.interval));
                self.is_paused = false;
            }
            Some((timer, _)) if self.is_paused => {
                timer.resume();
                self.is_paused = false;
            }
            Some(_) => {}
        }

        let mut advanced = false;
        let mut wants_more = true;
        if let Some((_, ticks)) = &mut self.timer {
            while wants_more && ticks.try_recv().is_ok() {
                advanced = true;
                wants_more = session.replay_tick().unwrap_or(false);
            }
        }

        if !wants_more {
            self.stop();
        }

        advanced
    }

    pub fn stop(&mut self) {
        if let Some((timer, _)) = self.timer.take() {
            timer.stop();
        }
        self.is_paused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::BotType;
    use common::tictactoe::{GameMode, TicTacToeSessionSettings};

    fn create_finished_session() -> TicTacToeSession {
        let mut session = TicTacToeSession::new(TicTacToeSessionSettings {
            mode: GameMode::VsPlayer,
            bot_type: BotType::Minimax,
            seed: Some(3),
        });
        for index in [0, 3, 1, 4, 2] {
            session.handle_click(index).unwrap();
        }
        session
    }

    #[tokio::test(start_paused = true)]
    async fn test_playback_advances_to_end_and_stops() {
        let mut session = create_finished_session();
        session.start_replay().unwrap();
        let mut playback = ReplayPlayback::new(Handle::current(), Duration::from_millis(1000));

        assert!(!playback.update(&mut session));
        assert!(playback.is_running());

        // Wake 100ms after each tick so the timer task has already delivered it.
        tokio::time::sleep(Duration::from_millis(100)).await;
        for expected in 1..=5 {
            tokio::time::sleep(Duration::from_millis(1000)).await;
            assert!(playback.update(&mut session));
            assert_eq!(session.replay().unwrap().current_index(), expected);
        }

        assert!(!playback.is_running());
        assert!(!session.replay().unwrap().is_playing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_holds_position() {
        let mut session = create_finished_session();
        session.start_replay().unwrap();
        let mut playback = ReplayPlayback::new(Handle::current(), Duration::from_millis(1000));
        playback.update(&mut session);

        session.replay_pause().unwrap();
        playback.update(&mut session);
        assert!(!playback.is_running());

        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert!(!playback.update(&mut session));
        assert_eq!(session.replay().unwrap().current_index(), 0);

        session.replay_play().unwrap();
        playback.update(&mut session);
        assert!(playback.is_running());
        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert!(playback.update(&mut session));
        assert_eq!(session.replay().unwrap().current_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_timer() {
        let mut session = create_finished_session();
        session.start_replay().unwrap();
        let mut playback = ReplayPlayback::new(Handle::current(), Duration::from_millis(1000));
        playback.update(&mut session);

        session.reset();
        assert!(!playback.update(&mut session));
        assert!(!playback.is_running());
    }
}
