//! Randomized board dealing for numerush.
//!
//! A deal draws sixteen distinct tile values uniformly without replacement
//! from the full 0-100 range by shuffling the complete candidate list, so
//! termination and uniformity hold by construction. Deals are driven by a
//! seeded PRNG and carry their seed for reproduction.

pub use self::dealer::{BoardDealer, DealtBoard};

mod dealer;
