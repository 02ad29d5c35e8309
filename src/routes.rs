//! Two-ply route tables over the canonical board list

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Coord, Mark},
    enumerate::CanonicalSet,
};

/// One hypothetical two-ply continuation: X plays `mv`, O answers on
/// `response`, and the resulting board belongs to canonical class `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    #[serde(rename = "move")]
    pub mv: Coord,
    pub response: Coord,
    pub target: usize,
}

/// The ordered route entries for one canonical board.
///
/// Entries follow the ordered-pair order over the board's empty cells
/// (row-major). Pairs whose two-ply result is a won board are omitted; a won
/// board is legitimately absent from the canonical list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    /// Look up the entry for a specific move pair
    pub fn find(&self, mv: Coord, response: Coord) -> Option<&RouteEntry> {
        self.entries
            .iter()
            .find(|entry| entry.mv == mv && entry.response == response)
    }
}

/// Build the route table for one canonical board.
///
/// Every ordered pair of distinct empty cells is tried: X on the first, O on
/// the second. The two-ply board stays balanced, so it either resolves to a
/// canonical index or carries a winning line and is skipped. Any other
/// lookup failure is an invariant violation and aborts the build.
///
/// # Errors
///
/// Returns [`Error::UnresolvedRoute`](crate::Error::UnresolvedRoute) naming
/// the board and move pair when a non-winning two-ply board matches no
/// canonical entry.
pub fn build_route_table(board: &Board, canonical: &CanonicalSet) -> crate::Result<RouteTable> {
    let empties = board.empty_cells();
    let mut entries = Vec::with_capacity(empties.len() * empties.len().saturating_sub(1));

    for (i, &mv) in empties.iter().enumerate() {
        for (j, &response) in empties.iter().enumerate() {
            if i == j {
                continue;
            }

            let after = board
                .with_move(mv, Mark::X)?
                .with_move(response, Mark::O)?;

            match canonical.index_of(&after) {
                Some(target) => entries.push(RouteEntry {
                    mv,
                    response,
                    target,
                }),
                // Won boards are excluded from the canonical list, so a
                // missing index with a winner present is a valid outcome
                None if after.has_winner() => {}
                None => {
                    return Err(crate::Error::UnresolvedRoute {
                        board: board.encode(),
                        mv,
                        response,
                    });
                }
            }
        }
    }

    Ok(RouteTable { entries })
}
