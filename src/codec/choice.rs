//! Lehmer-coded room choices.

use rand::Rng;

use super::assignment::{Assignment, Person};
use crate::error::{Error, Result};

/// A matching encoded as a sequence of shrinking-range indices.
///
/// Gene `i` of a choice over `n` people lies in `0..n - i` and selects one of
/// the slots still free after people `0..i` have been seated. Decoding
/// seats person `i` into that slot, so every valid choice decodes to a seat
/// permutation and no person is ever placed twice.
///
/// All constructors and mutators keep every gene inside its legal range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct EncodedChoice {
    genes: Vec<usize>,
}

impl EncodedChoice {
    /// Exclusive upper bound of gene `position` for `people` people.
    ///
    /// Positions at or past `people` have no legal value and yield 0.
    #[inline]
    pub fn bound(people: usize, position: usize) -> usize {
        people.saturating_sub(position)
    }

    /// Checks every gene against its legal range.
    pub fn validate(genes: &[usize]) -> Result<()> {
        let n = genes.len();
        for (position, &value) in genes.iter().enumerate() {
            let bound = Self::bound(n, position);
            if value >= bound {
                return Err(Error::InvalidEncoding {
                    position,
                    value,
                    bound,
                });
            }
        }
        Ok(())
    }

    /// Wraps `genes`, rejecting any out-of-range gene.
    pub fn new(genes: Vec<usize>) -> Result<Self> {
        Self::validate(&genes)?;
        Ok(Self { genes })
    }

    /// Wraps `genes`, pulling every out-of-range gene down to the largest
    /// value legal at its position.
    pub fn clamped(mut genes: Vec<usize>) -> Self {
        let n = genes.len();
        for (position, gene) in genes.iter_mut().enumerate() {
            *gene = (*gene).min(Self::bound(n, position) - 1);
        }
        Self { genes }
    }

    /// Draws a uniformly random choice: gene `i` is uniform in `0..people - i`.
    pub fn random<R: Rng + ?Sized>(people: usize, rng: &mut R) -> Self {
        let genes = (0..people)
            .map(|position| rng.random_range(0..Self::bound(people, position)))
            .collect();
        Self { genes }
    }

    /// The all-zero choice, which seats the people in slot order.
    pub fn first(people: usize) -> Self {
        Self {
            genes: vec![0; people],
        }
    }

    /// Number of people encoded.
    pub fn people(&self) -> usize {
        self.genes.len()
    }

    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    pub fn into_genes(self) -> Vec<usize> {
        self.genes
    }

    /// Overwrites one gene, rejecting values outside the gene's range.
    pub fn set_gene(&mut self, position: usize, value: usize) -> Result<()> {
        let n = self.genes.len();
        if position >= n {
            return Err(Error::InvalidEncoding {
                position,
                value,
                bound: 0,
            });
        }
        let bound = Self::bound(n, position);
        if value >= bound {
            return Err(Error::InvalidEncoding {
                position,
                value,
                bound,
            });
        }
        self.genes[position] = value;
        Ok(())
    }

    /// Overwrites one gene, pulling `value` into the gene's legal range.
    ///
    /// # Panics
    /// Panics if `position` is not below the number of people.
    pub fn set_gene_clamped(&mut self, position: usize, value: usize) {
        let n = self.genes.len();
        assert!(position < n, "gene position {position} beyond length {n}");
        self.genes[position] = value.min(Self::bound(n, position) - 1);
    }

    /// Decodes into an assignment.
    pub fn decode(&self) -> Assignment {
        Assignment::from_decoded(place(&self.genes))
    }
}

impl TryFrom<Vec<usize>> for EncodedChoice {
    type Error = Error;

    fn try_from(genes: Vec<usize>) -> Result<Self> {
        Self::new(genes)
    }
}

impl From<EncodedChoice> for Vec<usize> {
    fn from(choice: EncodedChoice) -> Self {
        choice.genes
    }
}

/// Decodes raw genes, failing with [`Error::InvalidEncoding`] on the first
/// gene outside its legal range.
pub fn decode(genes: &[usize]) -> Result<Assignment> {
    EncodedChoice::validate(genes)?;
    Ok(Assignment::from_decoded(place(genes)))
}

/// Seats person `i` into the `genes[i]`-th free slot.
///
/// Slot `s` maps to room `s / 2`, with the two slots of a room stored in
/// swapped seat order. A trailing slot without a partner keeps its own seat.
fn place(genes: &[usize]) -> Vec<Person> {
    let n = genes.len();
    let mut pool: Vec<usize> = (0..n).collect();
    let mut seats = vec![0; n];
    for (person, &gene) in genes.iter().enumerate() {
        let slot = pool.remove(gene);
        let seat = if slot ^ 1 < n { slot ^ 1 } else { slot };
        seats[seat] = person;
    }
    seats
}
