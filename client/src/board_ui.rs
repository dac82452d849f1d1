use common::tictactoe::{BOARD_SIZE, Board, Mark, Position, WinningLine};

pub struct BoardUi {
    last_hover: Option<usize>,
}

impl BoardUi {
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let cell_size = available_width.min(available_height) / BOARD_SIZE as f32;
        cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    /// Paints the board and returns the empty cell clicked this frame, if any.
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<WinningLine>,
        interactive: bool,
    ) -> Option<usize> {
        let cell_size =
            Self::calculate_cell_size(ui.available_width() * 0.6, ui.available_height());
        let board_size = cell_size * BOARD_SIZE as f32;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_size, board_size), egui::Sense::click());
        let painter = ui.painter();

        painter.rect_filled(rect, 12.0, egui::Color32::from_rgb(209, 213, 219));

        self.last_hover = if interactive {
            response
                .hover_pos()
                .and_then(|pos| cell_at(rect, cell_size, pos))
                .filter(|&index| board.is_empty_at(index))
        } else {
            None
        };

        if let Some(index) = self.last_hover {
            painter.rect_filled(
                cell_rect(rect, cell_size, index),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
        }

        if let Some(line) = winning_line {
            for index in line.cells {
                painter.rect_filled(
                    cell_rect(rect, cell_size, index),
                    0.0,
                    egui::Color32::from_rgb(229, 231, 235),
                );
            }
        }

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * cell_size;
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::from_gray(120)),
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::from_gray(120)),
            );
        }

        for (index, cell) in board.cells().iter().enumerate() {
            let target = cell_rect(rect, cell_size, index);
            match cell {
                Some(Mark::X) => self.draw_x(painter, target),
                Some(Mark::O) => self.draw_o(painter, target),
                None => {}
            }
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(painter, rect, cell_size, line);
        }

        if response.clicked() {
            return self.last_hover;
        }
        None
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let color = egui::Color32::from_rgb(220, 50, 50);
        let stroke = egui::Stroke::new(6.0, color);

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let color = egui::Color32::from_rgb(50, 50, 220);

        painter.circle_stroke(rect.center(), radius, egui::Stroke::new(6.0, color));
    }

    fn draw_winning_line(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        cell_size: f32,
        line: WinningLine,
    ) {
        let start = cell_rect(rect, cell_size, line.start().to_index()).center();
        let end = cell_rect(rect, cell_size, line.end().to_index()).center();
        painter.line_segment(
            [start, end],
            egui::Stroke::new(8.0, egui::Color32::from_rgba_unmultiplied(30, 30, 30, 160)),
        );
    }
}

fn cell_rect(board_rect: egui::Rect, cell_size: f32, index: usize) -> egui::Rect {
    let x = (index % BOARD_SIZE) as f32;
    let y = (index / BOARD_SIZE) as f32;
    egui::Rect::from_min_size(
        egui::pos2(
            board_rect.left() + x * cell_size,
            board_rect.top() + y * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

fn cell_at(board_rect: egui::Rect, cell_size: f32, pos: egui::Pos2) -> Option<usize> {
    if !board_rect.contains(pos) {
        return None;
    }
    let x = ((pos.x - board_rect.left()) / cell_size) as usize;
    let y = ((pos.y - board_rect.top()) / cell_size) as usize;
    (x < BOARD_SIZE && y < BOARD_SIZE).then(|| Position::new(x, y).to_index())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(300.0, 300.0))
    }

    #[test]
    fn test_cell_at_maps_points_row_major() {
        let rect = board_rect();
        assert_eq!(cell_at(rect, 100.0, egui::pos2(15.0, 25.0)), Some(0));
        assert_eq!(cell_at(rect, 100.0, egui::pos2(250.0, 25.0)), Some(2));
        assert_eq!(cell_at(rect, 100.0, egui::pos2(150.0, 170.0)), Some(4));
        assert_eq!(cell_at(rect, 100.0, egui::pos2(305.0, 315.0)), Some(8));
    }

    #[test]
    fn test_cell_at_outside_board() {
        let rect = board_rect();
        assert_eq!(cell_at(rect, 100.0, egui::pos2(5.0, 25.0)), None);
        assert_eq!(cell_at(rect, 100.0, egui::pos2(50.0, 400.0)), None);
    }

    #[test]
    fn test_cell_rect_round_trips_through_cell_at() {
        let rect = board_rect();
        for index in 0..9 {
            let center = cell_rect(rect, 100.0, index).center();
            assert_eq!(cell_at(rect, 100.0, center), Some(index));
        }
    }

    #[test]
    fn test_cell_size_is_clamped() {
        assert_eq!(BoardUi::calculate_cell_size(90.0, 900.0), 60.0);
        assert_eq!(BoardUi::calculate_cell_size(3000.0, 3000.0), 140.0);
        assert_eq!(BoardUi::calculate_cell_size(300.0, 600.0), 100.0);
    }
}
