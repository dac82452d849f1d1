mod game_config;
mod log_config;
mod main_config;
mod replay_config;

pub use game_config::GameConfig;
pub use log_config::LogConfig;
pub use main_config::{Config, get_config_manager};
pub use replay_config::ReplayConfig;
