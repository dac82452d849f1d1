use crate::games::tictactoe::Board;

/// Cursor over a finished game's snapshots with step, scrub and auto-advance controls.
#[derive(Debug, Clone)]
pub struct ReplayPlayer {
    snapshots: Vec<Board>,
    current_index: usize,
    playing: bool,
}

impl ReplayPlayer {
    /// Starts at the first snapshot with auto-advance on.
    pub fn new(snapshots: Vec<Board>) -> Self {
        let snapshots = if snapshots.is_empty() {
            vec![Board::new()]
        } else {
            snapshots
        };
        let playing = snapshots.len() > 1;

        Self {
            snapshots,
            current_index: 0,
            playing,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_snapshots(&self) -> usize {
        self.snapshots.len()
    }

    pub fn last_index(&self) -> usize {
        self.snapshots.len() - 1
    }

    pub fn current(&self) -> &Board {
        &self.snapshots[self.current_index]
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.last_index()
    }

    pub fn next(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.current_index += 1;
        true
    }

    pub fn previous(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        true
    }

    pub fn seek(&mut self, index: usize) {
        self.current_index = index.min(self.last_index());
    }

    pub fn play(&mut self) {
        self.playing = !self.is_finished();
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Auto-advance step. Returns whether another tick is still wanted.
    pub fn tick(&mut self) -> bool {
        if self.playing {
            self.next();
        }
        if self.is_finished() {
            self.playing = false;
        }
        self.playing
    }
}
