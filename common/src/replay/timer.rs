use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

pub const DEFAULT_REPLAY_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayCommand {
    Pause,
    Resume,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayTick;

/// Fixed-interval auto-advance for replay playback. Dropping the handle cancels the task.
pub struct ReplayTimer {
    command_tx: mpsc::UnboundedSender<ReplayCommand>,
    handle: JoinHandle<()>,
}

impl ReplayTimer {
    pub fn spawn(
        runtime: &Handle,
        interval: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<ReplayTick>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let handle = runtime.spawn(run_replay_timer(interval, command_rx, tick_tx));

        (Self { command_tx, handle }, tick_rx)
    }

    pub fn pause(&self) {
        let _ = self.command_tx.send(ReplayCommand::Pause);
    }

    pub fn resume(&self) {
        let _ = self.command_tx.send(ReplayCommand::Resume);
    }

    pub fn stop(&self) {
        let _ = self.command_tx.send(ReplayCommand::Stop);
    }
}

impl Drop for ReplayTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run_replay_timer(
    interval: Duration,
    mut command_rx: mpsc::UnboundedReceiver<ReplayCommand>,
    tick_tx: mpsc::UnboundedSender<ReplayTick>,
) {
    let mut tick_timer = tokio::time::interval_at(Instant::now() + interval, interval);
    tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut is_paused = false;

    loop {
        tokio::select! {
            _ = tick_timer.tick(), if !is_paused => {
                if tick_tx.send(ReplayTick).is_err() {
                    break;
                }
            }
            command = command_rx.recv() => {
                match command {
                    Some(ReplayCommand::Pause) => {
                        is_paused = true;
                    }
                    Some(ReplayCommand::Resume) => {
                        is_paused = false;
                        tick_timer.reset();
                    }
                    Some(ReplayCommand::Stop) | None => {
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_every_interval() {
        let start = Instant::now();
        let (timer, mut ticks) = ReplayTimer::spawn(&Handle::current(), DEFAULT_REPLAY_INTERVAL);

        assert_eq!(ticks.recv().await, Some(ReplayTick));
        assert!(start.elapsed() >= Duration::from_millis(1000));

        assert_eq!(ticks.recv().await, Some(ReplayTick));
        assert!(start.elapsed() >= Duration::from_millis(2000));

        timer.stop();
        assert_eq!(ticks.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_suppresses_ticks_until_resume() {
        let (timer, mut ticks) = ReplayTimer::spawn(&Handle::current(), DEFAULT_REPLAY_INTERVAL);
        timer.pause();

        let waited = tokio::time::timeout(Duration::from_secs(5), ticks.recv()).await;
        assert!(waited.is_err());

        timer.resume();
        let resumed = tokio::time::timeout(Duration::from_millis(1500), ticks.recv()).await;
        assert_eq!(resumed, Ok(Some(ReplayTick)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_timer() {
        let (timer, mut ticks) = ReplayTimer::spawn(&Handle::current(), DEFAULT_REPLAY_INTERVAL);
        drop(timer);
        assert_eq!(ticks.recv().await, None);
    }
}
