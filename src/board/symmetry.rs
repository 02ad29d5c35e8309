//! D4 symmetry group operations for board equivalence

use super::grid::{Board, Cell};

/// D4 symmetry transformation (dihedral group of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct D4Transform {
    /// Rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to flip the row order before rotating
    pub reflection: bool,
}

impl D4Transform {
    /// Create identity transform
    pub fn identity() -> Self {
        D4Transform {
            rotation: 0,
            reflection: false,
        }
    }

    /// All 8 D4 transforms: the 4 rotations and the 4 reflected rotations
    pub fn all() -> [D4Transform; 8] {
        let mut transforms = [D4Transform::identity(); 8];
        for (i, rotation) in [0u16, 90, 180, 270].into_iter().enumerate() {
            transforms[2 * i] = D4Transform {
                rotation,
                reflection: false,
            };
            transforms[2 * i + 1] = D4Transform {
                rotation,
                reflection: true,
            };
        }
        transforms
    }

    /// Apply transform to a flat position (0-8).
    ///
    /// Reflection (mirror across the horizontal axis, reversing row order)
    /// is applied before rotation; rotation is clockwise.
    pub fn transform_position(&self, pos: usize) -> usize {
        let (mut row, mut col) = (pos / 3, pos % 3);

        if self.reflection {
            row = 2 - row;
        }

        for _ in 0..(self.rotation / 90) {
            let new_row = col;
            let new_col = 2 - row;
            row = new_row;
            col = new_col;
        }

        row * 3 + col
    }
}

impl Board {
    /// Apply a D4 transform, returning a fresh board
    pub fn transform(&self, t: &D4Transform) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (i, &cell) in self.cells.iter().enumerate() {
            cells[t.transform_position(i)] = cell;
        }
        Board { cells }
    }

    /// Rotate the board 90 degrees clockwise. Four rotations compose to the
    /// identity.
    pub fn rotate(&self) -> Self {
        self.transform(&D4Transform {
            rotation: 90,
            reflection: false,
        })
    }

    /// Mirror the board by reversing its row order. Two reflections compose
    /// to the identity.
    pub fn reflect(&self) -> Self {
        self.transform(&D4Transform {
            rotation: 0,
            reflection: true,
        })
    }

    /// The orbit of this board under the full D4 group, in transform order
    pub fn orbit(&self) -> [Board; 8] {
        let mut boards = [*self; 8];
        for (board, transform) in boards.iter_mut().zip(D4Transform::all()) {
            *board = self.transform(&transform);
        }
        boards
    }

    /// Whether `other` represents the same position up to rotation and
    /// reflection.
    ///
    /// All 8 group elements are checked: the 4 rotations of this board and
    /// the 4 rotations of its reflection. Stopping at the rotations alone
    /// would treat mirror-image boards as distinct.
    ///
    /// # Examples
    ///
    /// ```
    /// use ttt_atlas::board::Board;
    ///
    /// let top_left = Board::from_string("X........").unwrap();
    /// let bottom_right = Board::from_string("........X").unwrap();
    /// assert!(top_left.equivalent(&bottom_right));
    /// ```
    pub fn equivalent(&self, other: &Board) -> bool {
        D4Transform::all()
            .iter()
            .any(|t| self.transform(t) == *other)
    }
}
