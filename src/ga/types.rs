//! Scored population members.

use std::cmp::Ordering;

use crate::codec::EncodedChoice;
use crate::cost::{Cost, CostModel};

/// An encoded choice together with its cost.
///
/// Ordered by quality: a **lower** cost compares **greater**, so a
/// [`BoundedTopKQueue`](crate::queue::BoundedTopKQueue) of candidates keeps
/// the cheapest ones. Equal costs fall back to the genes so the order is
/// total and consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub choice: EncodedChoice,
    pub cost: Cost,
}

impl ScoredCandidate {
    /// Decodes and scores `choice`.
    pub fn evaluate(model: &CostModel, choice: EncodedChoice) -> Self {
        let cost = model.score(&choice.decode());
        Self { choice, cost }
    }
}

impl Ord for ScoredCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| self.choice.genes().cmp(other.choice.genes()))
    }
}

impl PartialOrd for ScoredCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Summary of one evaluated generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,
    /// Cost of the best elite.
    pub best_cost: Cost,
    /// Cost of the worst elite.
    pub worst_elite_cost: Cost,
}
