//! Board state representation and move simulation

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A cell on the tic-tac-toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A player symbol (the non-empty cell values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// A cell coordinate, rows 0..2 top-to-bottom, columns 0..2 left-to-right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Build a coordinate from a flat row-major index (0-8)
    pub(crate) fn from_index(index: usize) -> Self {
        Coord {
            row: index / 3,
            col: index % 3,
        }
    }

    /// Flat row-major index of this coordinate
    pub(crate) fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Whether both row and column are within the 3x3 grid
    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 board of cells, row-major.
///
/// `Board` is `Copy` (9 bytes); move simulation never mutates in place, it
/// goes through [`Board::with_move`] which returns a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) cells: [Cell; 9],
}

impl Board {
    /// The board with every cell empty
    pub fn empty() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Decode a board from a base-3 seed.
    ///
    /// The nine cells are the base-3 digits of `seed`, least significant
    /// digit first, filled row-major. Digit values map to cells in the fixed
    /// order 0 -> X, 1 -> O, 2 -> Empty, so seed `0` is the all-X board and
    /// seed `3^9 - 1` is the empty board.
    pub fn from_seed(seed: u32) -> Self {
        let mut cells = [Cell::Empty; 9];
        let mut rest = seed;
        for cell in cells.iter_mut() {
            *cell = match rest % 3 {
                0 => Cell::X,
                1 => Cell::O,
                _ => Cell::Empty,
            };
            rest /= 3;
        }
        Board { cells }
    }

    /// Parse a board from a 9-character string (whitespace is filtered out).
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 9 non-whitespace characters remain or
    /// any character is not a valid cell representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ttt_atlas::board::{Board, Cell, Coord};
    ///
    /// let board = Board::from_string("X.O ...... ").unwrap();
    /// assert_eq!(board.get(Coord::new(0, 0)), Cell::X);
    /// assert_eq!(board.get(Coord::new(0, 2)), Cell::O);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Encode the board as a 9-character string ('.' for empty cells)
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Get the cell at a coordinate
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Check if the cell at a coordinate is empty
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        coord.in_bounds() && self.get(coord).is_empty()
    }

    /// Place a mark on an empty cell, returning the resulting board.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate lies outside the grid or the cell
    /// is already occupied.
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, coord: Coord, mark: Mark) -> Result<Board, crate::Error> {
        if !coord.in_bounds() {
            return Err(crate::Error::InvalidCoord {
                row: coord.row,
                col: coord.col,
            });
        }
        if !self.get(coord).is_empty() {
            return Err(crate::Error::OccupiedCell { coord });
        }

        let mut next = *self;
        next.cells[coord.index()] = mark.to_cell();
        Ok(next)
    }

    /// All empty coordinates in row-major order
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, cell)| cell.is_empty())
            .map(|(i, _)| Coord::from_index(i))
            .collect()
    }

    /// Count cells holding the given mark
    pub fn count(&self, mark: Mark) -> usize {
        let target = mark.to_cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Count occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Whether X and O counts are equal
    pub fn is_balanced(&self) -> bool {
        self.count(Mark::X) == self.count(Mark::O)
    }

    /// Check if a mark holds a complete line
    pub fn has_won(&self, mark: Mark) -> bool {
        super::lines::has_won(&self.cells, mark)
    }

    /// Whether either mark holds a complete line
    pub fn has_winner(&self) -> bool {
        self.has_won(Mark::X) || self.has_won(Mark::O)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Board::from_string(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.empty_cells().len(), 9);
        assert!(board.is_balanced());
    }

    #[test]
    fn test_from_seed_digit_order() {
        // Seed 0: every digit is 0, so every cell is X
        let all_x = Board::from_seed(0);
        assert_eq!(all_x.count(Mark::X), 9);

        // Seed 3^9 - 1: every digit is 2, so every cell is empty
        let empty = Board::from_seed(3u32.pow(9) - 1);
        assert_eq!(empty, Board::empty());

        // Seed 1: first digit 1 (O at (0,0)), the rest 0 (X)
        let board = Board::from_seed(1);
        assert_eq!(board.get(Coord::new(0, 0)), Cell::O);
        assert_eq!(board.get(Coord::new(0, 1)), Cell::X);
    }

    #[test]
    fn test_from_seed_fills_row_major() {
        // Digits (lsd first): 2,2,2, 0,... -> empty top row, X elsewhere
        let seed = 2 + 2 * 3 + 2 * 9;
        let board = Board::from_seed(seed);
        assert_eq!(board.get(Coord::new(0, 0)), Cell::Empty);
        assert_eq!(board.get(Coord::new(0, 2)), Cell::Empty);
        assert_eq!(board.get(Coord::new(1, 0)), Cell::X);
    }

    #[test]
    fn test_with_move_copies() {
        let board = Board::empty();
        let next = board.with_move(Coord::new(1, 1), Mark::X).unwrap();
        assert_eq!(board.get(Coord::new(1, 1)), Cell::Empty);
        assert_eq!(next.get(Coord::new(1, 1)), Cell::X);
    }

    #[test]
    fn test_with_move_rejects_occupied() {
        let board = Board::empty()
            .with_move(Coord::new(0, 0), Mark::X)
            .unwrap();
        let result = board.with_move(Coord::new(0, 0), Mark::O);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("occupied"));
    }

    #[test]
    fn test_with_move_rejects_out_of_bounds() {
        let result = Board::empty().with_move(Coord::new(3, 0), Mark::X);
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_roundtrip() {
        let board = Board::from_string("XO..X..O.").unwrap();
        assert_eq!(board.encode(), "XO..X..O.");
        assert_eq!(Board::from_string(&board.encode()).unwrap(), board);
    }

    #[test]
    fn test_from_string_rejects_short_input() {
        assert!(Board::from_string("XO.").is_err());
    }

    #[test]
    fn test_from_string_rejects_bad_character() {
        assert!(Board::from_string("XOZ......").is_err());
    }

    #[test]
    fn test_empty_cells_row_major_order() {
        let board = Board::from_string("X...O....").unwrap();
        let empties = board.empty_cells();
        assert_eq!(empties.len(), 7);
        assert_eq!(empties[0], Coord::new(0, 1));
        assert_eq!(empties[1], Coord::new(0, 2));
        assert_eq!(empties[2], Coord::new(1, 0));
        assert_eq!(*empties.last().unwrap(), Coord::new(2, 2));
    }

    #[test]
    fn test_balance() {
        assert!(Board::from_string("XO.......").unwrap().is_balanced());
        assert!(!Board::from_string("X........").unwrap().is_balanced());
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert_eq!(display, "XOX\n.O.\nX..");
    }

    #[test]
    fn test_json_board_is_a_string() {
        let board = Board::from_string("XO.......").unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "\"XO.......\"");
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
