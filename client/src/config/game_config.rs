use common::config::Validate;
use common::games::BotType;
use common::tictactoe::{GameMode, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub bot_type: BotType,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl From<&GameConfig> for TicTacToeSessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            mode: config.mode,
            bot_type: config.bot_type,
            seed: config.seed,
        }
    }
}
