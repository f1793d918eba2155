//! Pairwise preference cost.
//!
//! A [`PreferenceTable`] maps unordered pairs of people to integer weights
//! and a [`CostModel`] sums those weights over the rooms of an assignment.
//! Every search strategy minimises this sum.

mod model;
mod table;

pub use model::CostModel;
pub use table::{Cost, PreferenceTable};
