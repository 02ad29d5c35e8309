//! Exhaustive enumeration of balanced, non-winning boards up to symmetry

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Number of raw ternary-encoded boards (3^9)
pub const SEED_SPACE: u32 = 19_683;

/// The ordered list of canonical board representatives.
///
/// One entry per D4-equivalence class of balanced, non-winning boards,
/// ordered by ascending occupied-cell count with ties in first-discovered
/// (ascending seed) order. The list is immutable once built; entry positions
/// are the stable canonical indices every route table refers to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalSet {
    boards: Vec<Board>,
}

impl CanonicalSet {
    /// Walk all 3^9 seeds and collect one representative per equivalence
    /// class of balanced, non-winning boards.
    ///
    /// The seed stream is folded into an accumulator: a board is appended
    /// only when no already-accepted entry is equivalent to it. After the
    /// stable sort by occupied count the whole list is re-verified for
    /// pairwise uniqueness, so a broken symmetry check fails the build
    /// instead of inflating the set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateCanonical`](crate::Error::DuplicateCanonical)
    /// if two accepted entries turn out to be equivalent.
    pub fn enumerate() -> crate::Result<Self> {
        let mut boards = (0..SEED_SPACE)
            .map(Board::from_seed)
            .filter(|board| board.is_balanced() && !board.has_winner())
            .fold(Vec::new(), |mut accepted: Vec<Board>, board| {
                if !accepted.iter().any(|entry| entry.equivalent(&board)) {
                    accepted.push(board);
                }
                accepted
            });

        // sort_by_key is stable, so equal occupancy keeps discovery order
        boards.sort_by_key(Board::occupied_count);

        let set = CanonicalSet { boards };
        set.verify()?;
        Ok(set)
    }

    /// Index of the first entry equivalent to `board`, scanning in list
    /// order, or `None` when no entry matches.
    pub fn index_of(&self, board: &Board) -> Option<usize> {
        self.boards.iter().position(|entry| entry.equivalent(board))
    }

    /// Number of canonical entries
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Entry at a canonical index
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// Iterate entries in canonical index order
    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    /// Entry counts bucketed by occupied-cell count (0, 2, 4, 6, 8 pieces)
    pub fn occupancy_histogram(&self) -> [usize; 5] {
        let mut histogram = [0usize; 5];
        for board in &self.boards {
            histogram[board.occupied_count() / 2] += 1;
        }
        histogram
    }

    /// Check that no two entries are symmetry-equivalent.
    fn verify(&self) -> crate::Result<()> {
        for (first, a) in self.boards.iter().enumerate() {
            for (offset, b) in self.boards[first + 1..].iter().enumerate() {
                if a.equivalent(b) {
                    return Err(crate::Error::DuplicateCanonical {
                        first,
                        second: first + 1 + offset,
                    });
                }
            }
        }
        Ok(())
    }
}
