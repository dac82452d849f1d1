pub mod player;
pub mod recorder;
pub mod timer;

pub use player::ReplayPlayer;
pub use recorder::ReplayRecorder;
pub use timer::{DEFAULT_REPLAY_INTERVAL, ReplayCommand, ReplayTick, ReplayTimer};
