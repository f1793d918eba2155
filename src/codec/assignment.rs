//! Room pairs and seat-level assignments.

use std::fmt;

use crate::error::{Error, Result};

/// A person, identified by an index in `0..people`.
pub type Person = usize;

/// Two distinct people sharing a room.
///
/// The pair is unordered: `{a, b}` and `{b, a}` describe the same room.
/// [`canonical`](RoomPair::canonical) orders the smaller id first and is the
/// form used for preference lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(Person, Person)", into = "(Person, Person)")
)]
pub struct RoomPair {
    pub(crate) a: Person,
    pub(crate) b: Person,
}

impl RoomPair {
    /// Creates a pair from two distinct people.
    pub fn new(a: Person, b: Person) -> Result<Self> {
        if a == b {
            return Err(Error::InvalidAssignment(format!(
                "person {a} cannot share a room with themself"
            )));
        }
        Ok(Self { a, b })
    }

    /// Returns the same pair with the smaller id first.
    pub fn canonical(self) -> Self {
        let (a, b) = self.key();
        Self { a, b }
    }

    /// The first occupant, as given.
    pub fn a(self) -> Person {
        self.a
    }

    /// The second occupant, as given.
    pub fn b(self) -> Person {
        self.b
    }

    /// Returns `(min, max)`, the lookup key for this pair.
    pub fn key(self) -> (Person, Person) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }

    /// Returns `true` if `person` occupies this room.
    pub fn contains(self, person: Person) -> bool {
        self.a == person || self.b == person
    }
}

impl TryFrom<(Person, Person)> for RoomPair {
    type Error = Error;

    fn try_from((a, b): (Person, Person)) -> Result<Self> {
        Self::new(a, b)
    }
}

impl From<RoomPair> for (Person, Person) {
    fn from(pair: RoomPair) -> Self {
        (pair.a, pair.b)
    }
}

impl fmt::Display for RoomPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.a, self.b)
    }
}

/// A complete placement of `people` persons into two-person rooms.
///
/// Stored as a seat vector: seats `2r` and `2r + 1` form room `r`. When the
/// number of people is odd, the final seat has no partner and its occupant
/// is reported by [`unpaired`](Assignment::unpaired); that lone seat
/// contributes nothing to the cost.
///
/// Every person occupies exactly one seat. All constructors enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Person>", into = "Vec<Person>")
)]
pub struct Assignment {
    seats: Vec<Person>,
}

impl Assignment {
    /// Builds an assignment from a seat vector, rejecting anything that is
    /// not a permutation of `0..seats.len()`.
    pub fn from_seats(seats: Vec<Person>) -> Result<Self> {
        let n = seats.len();
        let mut seen = vec![false; n];
        for (seat, &person) in seats.iter().enumerate() {
            if person >= n {
                return Err(Error::InvalidAssignment(format!(
                    "seat {seat} holds person {person}, expected an id below {n}"
                )));
            }
            if seen[person] {
                return Err(Error::InvalidAssignment(format!(
                    "person {person} occupies more than one seat"
                )));
            }
            seen[person] = true;
        }
        Ok(Self { seats })
    }

    /// Seat vector produced by the decoder, already known to be a permutation.
    pub(crate) fn from_decoded(seats: Vec<Person>) -> Self {
        debug_assert!(Self::from_seats(seats.clone()).is_ok());
        Self { seats }
    }

    /// Number of people placed.
    pub fn people(&self) -> usize {
        self.seats.len()
    }

    /// Number of rooms, counting the lone room when `people` is odd.
    pub fn room_count(&self) -> usize {
        self.seats.len().div_ceil(2)
    }

    /// The seat vector.
    pub fn seats(&self) -> &[Person] {
        &self.seats
    }

    /// Room index of `seat`.
    pub fn room_of_seat(seat: usize) -> usize {
        seat / 2
    }

    /// Iterates over the fully occupied rooms.
    pub fn rooms(&self) -> impl Iterator<Item = RoomPair> + '_ {
        self.seats
            .chunks_exact(2)
            .map(|pair| RoomPair { a: pair[0], b: pair[1] })
    }

    /// The person without a roommate when `people` is odd.
    pub fn unpaired(&self) -> Option<Person> {
        if self.seats.len() % 2 == 1 {
            self.seats.last().copied()
        } else {
            None
        }
    }

    /// Collects the fully occupied rooms.
    pub fn pairs(&self) -> Vec<RoomPair> {
        self.rooms().collect()
    }

    /// Returns the roommate of `person`, if they have one.
    pub fn roommate_of(&self, person: Person) -> Option<Person> {
        let seat = self.seats.iter().position(|&p| p == person)?;
        let partner = seat ^ 1;
        self.seats.get(partner).copied()
    }

    /// Returns the same matching with every room's seats in a fixed order
    /// and the rooms sorted, so equal matchings compare equal.
    pub fn normalized(&self) -> Self {
        let mut rooms: Vec<(Person, Person)> = self.rooms().map(RoomPair::key).collect();
        rooms.sort_unstable();
        let mut seats: Vec<Person> = rooms.into_iter().flat_map(|(a, b)| [a, b]).collect();
        seats.extend(self.unpaired());
        Self { seats }
    }

    pub(crate) fn swap_seats(&mut self, i: usize, j: usize) {
        self.seats.swap(i, j);
    }
}

impl TryFrom<Vec<Person>> for Assignment {
    type Error = Error;

    fn try_from(seats: Vec<Person>) -> Result<Self> {
        Self::from_seats(seats)
    }
}

impl From<Assignment> for Vec<Person> {
    fn from(assignment: Assignment) -> Self {
        assignment.seats
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for room in self.rooms() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{room}")?;
            first = false;
        }
        if let Some(person) = self.unpaired() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{{{person}}}")?;
        }
        Ok(())
    }
}
