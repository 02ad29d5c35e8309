//! The assembled atlas: canonical boards paired with their route tables

use serde::Serialize;

use crate::{
    board::Board,
    enumerate::CanonicalSet,
    routes::{RouteTable, build_route_table},
};

/// Canonical board list plus one route table per entry.
///
/// `routes[i]` belongs to the board at canonical index `i`. The atlas is
/// recomputed from scratch on every build; there is no persisted or
/// versioned form beyond the plain-data exports.
#[derive(Debug, Clone, Serialize)]
pub struct Atlas {
    boards: CanonicalSet,
    routes: Vec<RouteTable>,
}

impl Atlas {
    /// Enumerate the canonical board list, then build every route table
    /// against it in canonical index order.
    ///
    /// # Errors
    ///
    /// Propagates enumeration and route invariant violations; the build
    /// aborts rather than emit partial data.
    pub fn build() -> crate::Result<Self> {
        let boards = CanonicalSet::enumerate()?;
        let routes = boards
            .iter()
            .map(|board| build_route_table(board, &boards))
            .collect::<crate::Result<Vec<_>>>()?;

        Ok(Atlas { boards, routes })
    }

    /// Number of canonical boards
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// The canonical board list
    pub fn boards(&self) -> &CanonicalSet {
        &self.boards
    }

    /// Board at a canonical index
    pub fn board(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// Route table for the board at a canonical index
    pub fn routes(&self, index: usize) -> Option<&RouteTable> {
        self.routes.get(index)
    }

    /// Iterate `(index, board, route table)` triples in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Board, &RouteTable)> {
        self.boards
            .iter()
            .zip(&self.routes)
            .enumerate()
            .map(|(index, (board, table))| (index, board, table))
    }

    /// Total number of route entries across all boards
    pub fn route_entry_count(&self) -> usize {
        self.routes.iter().map(RouteTable::len).sum()
    }

    /// Board counts bucketed by occupied-cell count
    pub fn occupancy_histogram(&self) -> [usize; 5] {
        self.boards.occupancy_histogram()
    }
}
