mod app;
mod board_ui;
mod config;
mod replay_playback;

use clap::{Parser, ValueEnum};
use common::games::BotType;
use common::tictactoe::{GameMode, TicTacToeSessionSettings};
use common::{log, logger};

use app::TicTacToeApp;
use config::get_config_manager;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Player,
    Bot,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Player => GameMode::VsPlayer,
            ModeArg::Bot => GameMode::VsBot,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", version)]
struct Args {
    /// Path to the YAML config. Defaults to a file next to the executable.
    #[arg(long)]
    config: Option<String>,
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// `minimax` or `random`
    #[arg(long)]
    bot: Option<BotType>,
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config.as_deref()).get_config()?;

    let prefix = match (&config.log.prefix, args.use_log_prefix) {
        (Some(prefix), _) => Some(prefix.clone()),
        (None, true) => Some("Client".to_string()),
        (None, false) => None,
    };
    logger::init_logger(prefix, config.log.level);

    let mut settings = TicTacToeSessionSettings::from(&config.game);
    if let Some(mode) = args.mode {
        settings.mode = mode.into();
    }
    if let Some(bot_type) = args.bot {
        settings.bot_type = bot_type;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let runtime_handle = runtime.handle().clone();

    log!(
        "Starting tic-tac-toe {} ({:?}, bot {})",
        common::version::VERSION,
        settings.mode,
        settings.bot_type
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 520.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    let replay_interval = config.replay.interval();
    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(TicTacToeApp::new(
                settings,
                runtime_handle,
                replay_interval,
            )))
        }),
    )?;

    runtime.shutdown_background();
    log!("Client closed");

    Ok(())
}
