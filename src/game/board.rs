use std::fmt;
use std::str::FromStr;

use super::player::Player;
use crate::error::{IllegalMoveError, ParseBoardError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    /// Symbol used by the default text rendering
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// The 6x7 grid. Row 0 is the top, row 5 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Read a slot, or `None` outside the 6x7 extent
    pub fn slot_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// A column is playable while its top slot is empty
    pub fn is_legal_move(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col] == Cell::Empty
    }

    /// Columns that still accept a tile, ascending
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_legal_move(col)).collect()
    }

    /// Number of tiles stacked in a column (0 for out-of-range columns)
    pub fn column_height(&self, col: usize) -> usize {
        if col >= COLS {
            return 0;
        }
        (0..ROWS)
            .filter(|&row| self.cells[row][col] != Cell::Empty)
            .count()
    }

    /// Drop a tile in a column, returns the row where it landed
    pub fn place(&mut self, col: usize, player: Player) -> Result<usize, IllegalMoveError> {
        if col >= COLS {
            return Err(IllegalMoveError::ColumnOutOfRange(col));
        }

        if !self.is_legal_move(col) {
            return Err(IllegalMoveError::ColumnFull(col));
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = Cell::Occupied(player);
                return Ok(row);
            }
        }

        unreachable!("column {col} has an empty top slot but no empty row");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    /// Iterate every `(row, col)` pair in row-major order
    pub fn positions() -> impl Iterator<Item = (usize, usize)> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| (row, col)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per row, symbols separated by spaces.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Parses the `Display` form back. Whitespace inside a row is ignored and
/// blank lines are skipped, so the tiles do not need to obey gravity.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.len() != ROWS {
            return Err(ParseBoardError::RowCount(lines.len()));
        }

        let mut board = Board::new();
        for (row, line) in lines.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != COLS {
                return Err(ParseBoardError::RowWidth {
                    row,
                    width: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                board.cells[row][col] = match symbol {
                    '_' => Cell::Empty,
                    other => Player::from_symbol(other)
                        .map(Cell::Occupied)
                        .ok_or(ParseBoardError::UnknownSymbol { row, col, symbol })?,
                };
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for (row, col) in Board::positions() {
            assert_eq!(board.slot_at(row, col), Some(Cell::Empty));
        }
        assert_eq!(Board::positions().count(), ROWS * COLS);
    }

    #[test]
    fn test_slot_at_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.slot_at(ROWS, 0), None);
        assert_eq!(board.slot_at(0, COLS), None);
    }

    #[test]
    fn test_place() {
        let mut board = Board::new();

        // First tile lands at the bottom
        let row = board.place(3, Player::Human).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.slot_at(5, 3), Some(Cell::Occupied(Player::Human)));

        // Second tile stacks on top of it
        let row = board.place(3, Player::Computer).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.slot_at(4, 3), Some(Cell::Occupied(Player::Computer)));
        assert_eq!(board.column_height(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            board.place(0, Player::Human).unwrap();
        }

        assert!(!board.is_legal_move(0));
        assert_eq!(
            board.place(0, Player::Computer),
            Err(IllegalMoveError::ColumnFull(0))
        );
        assert_eq!(board.legal_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_out_of_range_column() {
        let mut board = Board::new();
        assert!(!board.is_legal_move(7));
        assert_eq!(
            board.place(7, Player::Human),
            Err(IllegalMoveError::ColumnOutOfRange(7))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                assert!(!board.is_full());
                board.place(col, Player::Human).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_display_and_parse() {
        let mut board = Board::new();
        board.place(0, Player::Human).unwrap();
        board.place(6, Player::Computer).unwrap();

        let text = board.to_string();
        assert!(text.ends_with("X _ _ _ _ _ O\n"));
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("X".parse::<Board>(), Err(ParseBoardError::RowCount(1)));

        let short = "_______\n_______\n_______\n_______\n_______\n______\n";
        assert_eq!(
            short.parse::<Board>(),
            Err(ParseBoardError::RowWidth { row: 5, width: 6 })
        );

        let bad = "_______\n_______\n_______\n_______\n_______\n___Z___\n";
        assert_eq!(
            bad.parse::<Board>(),
            Err(ParseBoardError::UnknownSymbol {
                row: 5,
                col: 3,
                symbol: 'Z'
            })
        );
    }
}
