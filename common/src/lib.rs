pub mod config;
pub mod games;
pub mod logger;
pub mod replay;
pub mod version;

pub use games::tictactoe;
