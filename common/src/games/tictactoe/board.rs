use std::fmt;
use std::ops::{Deref, DerefMut};

use super::error::MoveError;
use super::types::{BOARD_SIZE, CELL_COUNT, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses nine cells from `X`, `O` and `.`/`_`/`-` characters. Whitespace is ignored.
    pub fn parse(layout: &str) -> Option<Self> {
        let mut cells = [None; CELL_COUNT];
        let mut count = 0;
        for ch in layout.chars().filter(|c| !c.is_whitespace()) {
            if count == CELL_COUNT {
                return None;
            }
            cells[count] = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '_' | '-' => None,
                _ => return None,
            };
            count += 1;
        }
        (count == CELL_COUNT).then_some(Self { cells })
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        match self.cells.get(index) {
            None => Err(MoveError::OutOfBounds { index }),
            Some(Some(_)) => Err(MoveError::CellOccupied { index }),
            Some(None) => {
                self.cells[index] = Some(mark);
                Ok(())
            }
        }
    }

    /// Places `mark` for the lifetime of the returned guard. The cell is cleared again on drop.
    pub(crate) fn place_scoped(&mut self, index: usize, mark: Mark) -> ScopedPlacement<'_> {
        debug_assert!(self.cells[index].is_none());
        self.cells[index] = Some(mark);
        ScopedPlacement { board: self, index }
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter_map(|(index, cell)| cell.is_none().then_some(index))
        .collect()
}

pub(crate) struct ScopedPlacement<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Deref for ScopedPlacement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScopedPlacement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScopedPlacement<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = None;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                f.write_str(cell.map_or(".", Mark::symbol))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let board = Board::parse("XO. .X. ..O").unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(1), Some(Mark::O));
        assert_eq!(board.get(2), None);
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");
        assert_eq!(board.mark_count(), 4);
    }

    #[test]
    fn test_parse_rejects_wrong_length_and_symbols() {
        assert!(Board::parse("XO").is_none());
        assert!(Board::parse("XOXOXOXOXO").is_none());
        assert!(Board::parse("XOXOXOXOZ").is_none());
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.place(4, Mark::X), Ok(()));
        assert_eq!(
            board.place(4, Mark::O),
            Err(MoveError::CellOccupied { index: 4 })
        );
        assert_eq!(
            board.place(9, Mark::O),
            Err(MoveError::OutOfBounds { index: 9 })
        );
        assert_eq!(board.get(4), Some(Mark::X));
    }

    #[test]
    fn test_available_moves_in_scan_order() {
        let board = Board::parse("X.O .X. O..").unwrap();
        assert_eq!(get_available_moves(&board), vec![1, 3, 5, 7, 8]);
        assert!(get_available_moves(&Board::parse("XOXOXOOXO").unwrap()).is_empty());
    }

    #[test]
    fn test_scoped_placement_restores_cell() {
        let mut board = Board::new();
        {
            let guard = board.place_scoped(3, Mark::O);
            assert_eq!(guard.get(3), Some(Mark::O));
        }
        assert_eq!(board, Board::new());
    }
}
