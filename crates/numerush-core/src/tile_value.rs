//! Tile value representation.

/// The largest value a tile can carry.
pub const MAX_TILE_VALUE: u8 = 100;

/// A tile value in the range 0-100.
///
/// This newtype provides type-safe representation of the numbers printed on
/// tiles, preventing out-of-range values at construction time.
///
/// # Examples
///
/// ```
/// use numerush_core::TileValue;
///
/// let value = TileValue::new(42).unwrap();
/// assert_eq!(value.get(), 42);
/// assert_eq!(value.to_string(), "42");
///
/// assert!(TileValue::new(101).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct TileValue(u8);

impl TileValue {
    /// The smallest tile value.
    pub const MIN: Self = Self(0);

    /// The largest tile value.
    pub const MAX: Self = Self(MAX_TILE_VALUE);

    /// Number of distinct tile values (0 through 100 inclusive).
    pub const RANGE_LEN: usize = MAX_TILE_VALUE as usize + 1;

    /// Creates a tile value, returning `None` when `value` exceeds
    /// [`MAX_TILE_VALUE`].
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= MAX_TILE_VALUE {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the underlying number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Iterates over every tile value in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use numerush_core::TileValue;
    ///
    /// assert_eq!(TileValue::all().count(), TileValue::RANGE_LEN);
    /// assert_eq!(TileValue::all().next(), Some(TileValue::MIN));
    /// assert_eq!(TileValue::all().last(), Some(TileValue::MAX));
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=MAX_TILE_VALUE).map(Self)
    }
}

impl TryFrom<u8> for TileValue {
    type Error = TileValueOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(TileValueOutOfRange { value })
    }
}

/// Error returned when constructing a [`TileValue`] from a number above
/// [`MAX_TILE_VALUE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("tile value {value} is out of range 0-{MAX_TILE_VALUE}")]
pub struct TileValueOutOfRange {
    /// The rejected number.
    pub value: u8,
}
