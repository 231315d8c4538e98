use numerush_core::TileValue;

/// Display state of a single tile.
///
/// `Wrong` is transient: it is entered by a rejected click and reverted to
/// `Idle` by a delayed [`Session::revert_wrong`](crate::Session::revert_wrong)
/// unless the tile is solved or the session ends first. `Solved` is final
/// for the lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TileState {
    /// Neutral, clickable while the session is running.
    Idle,
    /// Accepted; disabled and visually distinct.
    Solved,
    /// Rejected moments ago; highlighted until the revert fires.
    Wrong,
}

/// One of the sixteen numbered tiles owned by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    value: TileValue,
    state: TileState,
}

impl Tile {
    pub(crate) fn new(value: TileValue) -> Self {
        Self {
            value,
            state: TileState::Idle,
        }
    }

    /// Returns the number printed on the tile.
    #[must_use]
    pub fn value(&self) -> TileValue {
        self.value
    }

    /// Returns the current display state.
    #[must_use]
    pub fn state(&self) -> TileState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: TileState) {
        self.state = state;
    }
}
