//! Encoding of room matchings.
//!
//! A matching of `n` people is represented two ways:
//!
//! - [`Assignment`]: a seat vector where seats `2r` and `2r + 1` share room `r`.
//! - [`EncodedChoice`]: a Lehmer code (factorial number system) whose gene `i`
//!   lies in `0..n - i`. Decoding consumes a shrinking pool of free slots,
//!   which makes every valid code a bijection onto seat permutations.
//!
//! Genetic operators act on the fixed-length [`EncodedChoice`] vectors, so
//! children can never seat a person twice.

mod assignment;
mod choice;

pub use assignment::{Assignment, Person, RoomPair};
pub use choice::{decode, EncodedChoice};
