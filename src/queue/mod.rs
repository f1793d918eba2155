//! Capacity-limited priority queue.
//!
//! [`BoundedTopKQueue`] keeps only the K greatest items offered to it, which
//! bounds the memory of elite selection no matter how many candidates a
//! generation produces.

mod bounded;

pub use bounded::{Admission, BoundedTopKQueue};
