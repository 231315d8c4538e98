use numerush_core::{TILE_COUNT, TileIndex, TileValue};
use rand::{Rng as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;

/// A dealt board: sixteen distinct tile values in board order.
///
/// The drawn order is the board order; no value-based ordering is imposed on
/// the layout. The seed reproduces the deal through
/// [`BoardDealer::deal_with_seed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealtBoard {
    /// Tile values, indexed by board position.
    pub values: [TileValue; TILE_COUNT],
    /// PRNG seed this board was dealt from.
    pub seed: u64,
}

impl DealtBoard {
    /// Returns the value at the given board position.
    #[must_use]
    pub fn value(&self, index: TileIndex) -> TileValue {
        self.values[index.as_usize()]
    }
}

/// Deals boards by shuffling the full candidate value range.
///
/// # Examples
///
/// ```
/// use numerush_deal::BoardDealer;
///
/// let board = BoardDealer::new().deal_with_seed(7);
/// assert_eq!(board.seed, 7);
/// assert_eq!(board, BoardDealer::new().deal_with_seed(7));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardDealer;

impl BoardDealer {
    /// Creates a dealer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Deals a board from a fresh random seed.
    #[must_use]
    pub fn deal(&self) -> DealtBoard {
        self.deal_with_seed(rand::rng().random())
    }

    /// Deals the board determined by `seed`.
    #[must_use]
    pub fn deal_with_seed(&self, seed: u64) -> DealtBoard {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);

        // Shuffle the whole 0-100 range, then keep the first sixteen. Draw
        // order becomes board order.
        let mut candidates: Vec<TileValue> = TileValue::all().collect();
        candidates.shuffle(&mut rng);

        let mut values = [TileValue::MIN; TILE_COUNT];
        for (slot, value) in values.iter_mut().zip(candidates) {
            *slot = value;
        }

        DealtBoard { values, seed }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

    fn assert_distinct(board: &DealtBoard) {
        let unique: BTreeSet<_> = board.values.iter().copied().collect();
        assert_eq!(unique.len(), TILE_COUNT);
    }

    #[test]
    fn deal_yields_sixteen_distinct_values() {
        assert_distinct(&BoardDealer::new().deal());
    }

    #[test]
    fn same_seed_reproduces_the_board() {
        let dealer = BoardDealer::new();
        assert_eq!(dealer.deal_with_seed(42), dealer.deal_with_seed(42));
    }

    #[test]
    fn different_seeds_deal_different_boards() {
        let dealer = BoardDealer::new();
        assert_ne!(
            dealer.deal_with_seed(1).values,
            dealer.deal_with_seed(2).values
        );
    }

    #[test]
    fn value_accessor_follows_board_order() {
        let board = BoardDealer::new().deal_with_seed(9);
        for index in TileIndex::ALL {
            assert_eq!(board.value(index), board.values[index.as_usize()]);
        }
    }

    proptest! {
        #[test]
        fn every_seed_deals_distinct_values(seed in any::<u64>()) {
            let board = BoardDealer::new().deal_with_seed(seed);
            let unique: BTreeSet<_> = board.values.iter().copied().collect();
            prop_assert_eq!(unique.len(), TILE_COUNT);
        }
    }
}
