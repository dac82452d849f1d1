use std::time::Duration;

use common::games::BotType;
use common::log_debug;
use common::tictactoe::{
    BOT_MARK, GameMode, HUMAN_MARK, Mark, ReplayError, TicTacToeSession, TicTacToeSessionSettings,
};
use tokio::runtime::Handle;

use crate::board_ui::BoardUi;
use crate::replay_playback::ReplayPlayback;

const REPLAY_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

pub struct TicTacToeApp {
    session: TicTacToeSession,
    playback: ReplayPlayback,
    board_ui: BoardUi,
    selected_mode: GameMode,
    selected_bot: BotType,
}

impl TicTacToeApp {
    pub fn new(
        settings: TicTacToeSessionSettings,
        runtime: Handle,
        replay_interval: Duration,
    ) -> Self {
        let selected_mode = settings.mode;
        let selected_bot = settings.bot_type;
        Self {
            session: TicTacToeSession::new(settings),
            playback: ReplayPlayback::new(runtime, replay_interval),
            board_ui: BoardUi::new(),
            selected_mode,
            selected_bot,
        }
    }

    fn render_mode_selector(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let previous_mode = self.selected_mode;
            ui.radio_value(&mut self.selected_mode, GameMode::VsPlayer, "VS Player");
            ui.radio_value(&mut self.selected_mode, GameMode::VsBot, "VS AI");
            if self.selected_mode != previous_mode {
                self.playback.stop();
                self.session.set_mode(self.selected_mode);
            }

            if self.selected_mode == GameMode::VsBot {
                ui.add_space(20.0);
                let previous_bot = self.selected_bot;
                egui::ComboBox::from_label("AI")
                    .selected_text(match self.selected_bot {
                        BotType::Minimax => "Minimax",
                        BotType::Random => "Random",
                    })
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.selected_bot, BotType::Minimax, "Minimax");
                        ui.selectable_value(&mut self.selected_bot, BotType::Random, "Random");
                    });
                if self.selected_bot != previous_bot {
                    self.session.set_bot_type(self.selected_bot);
                }
            }
        });
    }

    fn player_label(&self, mark: Mark) -> String {
        if mark == HUMAN_MARK {
            format!("PLAYER 01 ({})", mark)
        } else if self.session.is_bot(mark) {
            format!("AI ({})", mark)
        } else {
            format!("PLAYER 02 ({})", mark)
        }
    }

    fn render_info_panel(&self, ui: &mut egui::Ui) {
        for mark in [HUMAN_MARK, BOT_MARK] {
            ui.group(|ui| {
                ui.set_min_width(160.0);
                ui.label(egui::RichText::new(self.player_label(mark)).strong());
                if let Some(result) = self.session.result_for(mark) {
                    ui.colored_label(egui::Color32::from_rgb(34, 139, 34), result.to_string());
                } else if self.session.current_mark() == mark {
                    ui.colored_label(egui::Color32::GRAY, "MOVE");
                } else {
                    ui.label(" ");
                }
            });
            ui.add_space(8.0);
        }
    }

    fn render_game_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let reset_text = if self.session.is_over() { "PLAY AGAIN" } else { "RESET" };
            if ui.button(reset_text).clicked() {
                self.playback.stop();
                self.session.reset();
            }

            if self.session.is_over()
                && !self.session.is_replaying()
                && ui.button("REPLAY").clicked()
                && let Err(e) = self.session.start_replay()
            {
                log_debug!("Cannot start replay: {}", e);
            }
        });
    }

    fn render_replay_controls(&mut self, ui: &mut egui::Ui) {
        let Some(replay) = self.session.replay() else {
            return;
        };
        let mut index = replay.current_index();
        let last_index = replay.last_index();
        let is_playing = replay.is_playing();
        let is_finished = replay.is_finished();

        let result = ui
            .horizontal(|ui| -> Result<(), ReplayError> {
                if ui.button("PREVIOUS").clicked() {
                    self.session.replay_pause()?;
                    self.session.replay_previous()?;
                }
                if is_playing {
                    if ui.button("PAUSE").clicked() {
                        self.session.replay_pause()?;
                    }
                } else if ui.add_enabled(!is_finished, egui::Button::new("PLAY")).clicked() {
                    self.session.replay_play()?;
                }
                if ui.button("NEXT").clicked() {
                    self.session.replay_pause()?;
                    self.session.replay_next()?;
                }
                if ui.button("EXIT REPLAY").clicked() {
                    self.playback.stop();
                    self.session.exit_replay()?;
                }
                Ok(())
            })
            .inner;
        if let Err(e) = result {
            log_debug!("Replay control ignored: {}", e);
        }

        if !self.session.is_replaying() {
            return;
        }

        let label = format!("move {}/{}", index, last_index);
        let slider = ui.add(egui::Slider::new(&mut index, 0..=last_index).text(label));
        if slider.changed() {
            let result = self
                .session
                .replay_pause()
                .and_then(|_| self.session.replay_seek(index));
            if let Err(e) = result {
                log_debug!("Replay seek ignored: {}", e);
            }
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.playback.update(&mut self.session);
        if self.playback.is_running() {
            ctx.request_repaint_after(REPLAY_REPAINT_INTERVAL);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new("X O").size(32.0).strong());
            });
            ui.separator();

            self.render_mode_selector(ui);
            ui.add_space(10.0);

            let interactive = !self.session.is_over() && !self.session.is_replaying();
            let board = *self.session.displayed_board();
            let winning_line = self.session.displayed_winning_line();

            let clicked = ui
                .horizontal(|ui| {
                    let clicked = self.board_ui.render(ui, &board, winning_line, interactive);
                    ui.add_space(20.0);
                    ui.vertical(|ui| self.render_info_panel(ui));
                    clicked
                })
                .inner;

            if let Some(index) = clicked
                && let Err(e) = self.session.handle_click(index)
            {
                log_debug!("Move ignored: {}", e);
            }

            ui.add_space(10.0);
            self.render_game_controls(ui);
            self.render_replay_controls(ui);
        });
    }
}
