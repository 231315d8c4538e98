//! Board position representation.

/// Number of tiles on the board.
pub const TILE_COUNT: usize = 16;

/// Side length of the square tile grid.
pub const GRID_SIDE: usize = 4;

/// A board position in the range 0-15.
///
/// Positions follow dealt order, row-major on the 4x4 grid: index 0 is the
/// top-left tile, index 15 the bottom-right. Board order is unrelated to the
/// values printed on the tiles.
///
/// # Examples
///
/// ```
/// use numerush_core::TileIndex;
///
/// let index = TileIndex::new(6).unwrap();
/// assert_eq!(index.as_usize(), 6);
/// assert_eq!((index.row(), index.col()), (1, 2));
///
/// assert!(TileIndex::new(16).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct TileIndex(u8);

impl TileIndex {
    /// Array containing every board position in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use numerush_core::TileIndex;
    ///
    /// assert_eq!(TileIndex::ALL.len(), 16);
    /// assert_eq!(TileIndex::ALL[0].as_usize(), 0);
    /// assert_eq!(TileIndex::ALL[15].as_usize(), 15);
    /// ```
    pub const ALL: [Self; TILE_COUNT] = {
        let mut all = [Self(0); TILE_COUNT];
        let mut i = 0;
        while i < TILE_COUNT {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a board position, returning `None` when `index` is 16 or more.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < TILE_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Returns the position as a plain array index.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Returns the grid row (0-3) of this position.
    #[must_use]
    pub const fn row(self) -> usize {
        self.as_usize() / GRID_SIDE
    }

    /// Returns the grid column (0-3) of this position.
    #[must_use]
    pub const fn col(self) -> usize {
        self.as_usize() % GRID_SIDE
    }
}
