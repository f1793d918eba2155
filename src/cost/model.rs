//! Assignment scoring.

use super::table::{Cost, PreferenceTable};
use crate::codec::{Assignment, Person, RoomPair};

/// Scores assignments against an immutable [`PreferenceTable`].
///
/// The model is read-only once built and is shared by reference across
/// evaluation threads.
#[derive(Debug, Clone, Default)]
pub struct CostModel {
    table: PreferenceTable,
}

impl CostModel {
    pub fn new(table: PreferenceTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PreferenceTable {
        &self.table
    }

    /// Weight of a single room.
    #[inline]
    pub fn preference(&self, room: RoomPair) -> Cost {
        let (a, b) = room.key();
        self.table.weight(a, b)
    }

    /// Sum of room weights. A lone seat contributes 0.
    pub fn score(&self, assignment: &Assignment) -> Cost {
        self.score_seats(assignment.seats())
    }

    /// Scores a raw seat vector without allocating.
    #[inline]
    pub fn score_seats(&self, seats: &[Person]) -> Cost {
        seats
            .chunks_exact(2)
            .map(|room| self.table.weight(room[0], room[1]))
            .sum()
    }

    /// Scores any collection of rooms.
    pub fn score_rooms<I>(&self, rooms: I) -> Cost
    where
        I: IntoIterator<Item = RoomPair>,
    {
        rooms.into_iter().map(|room| self.preference(room)).sum()
    }
}

impl From<PreferenceTable> for CostModel {
    fn from(table: PreferenceTable) -> Self {
        Self::new(table)
    }
}
