use numerush_core::{TILE_COUNT, TileIndex, TileValue};
use numerush_deal::DealtBoard;

use crate::{Tile, TileState, TimeLimit};

/// Monotonic counter distinguishing session incarnations.
///
/// Delayed callbacks armed for one session carry its generation; when a new
/// game supersedes the session, the stale generation no longer matches and
/// the callback is dropped instead of mutating the fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub struct SessionGeneration(u64);

impl SessionGeneration {
    /// Generation of the first session after app start.
    pub const FIRST: Self = Self(0);

    /// Returns the generation following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Lifecycle phase of a session.
///
/// `Running` is the only phase accepting ticks and clicks; the three
/// terminal phases are absorbing until a new session replaces this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Phase {
    /// Countdown active, tiles clickable.
    Running,
    /// All sixteen tiles solved before expiry.
    Succeeded,
    /// Countdown reached zero with tiles left unsolved.
    Expired,
    /// Abandoned mid-run by a new game.
    Superseded,
}

/// Result of a clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second consumed; `remaining` seconds left.
    Ticked {
        /// Seconds left on the countdown.
        remaining: u32,
    },
    /// The countdown ran out on this tick; the session is now [`Phase::Expired`].
    Expired,
    /// The session was not running; nothing changed.
    Ignored,
}

/// Result of a tile click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The tile held the smallest remaining value and is now solved.
    Accepted {
        /// `true` when this click solved the last tile; the session is then
        /// [`Phase::Succeeded`].
        completed: bool,
    },
    /// The tile was not the smallest remaining value; it is highlighted as
    /// wrong until the delayed revert fires.
    Rejected,
    /// The session was not running or the tile was disabled; nothing changed.
    Ignored,
}

/// One play-through of the board.
///
/// Owns the sixteen tiles, the countdown, and the "next expected minimum"
/// bookkeeping. Constructed running; reaches a terminal [`Phase`] through
/// [`tick`](Self::tick), [`click`](Self::click), or
/// [`supersede`](Self::supersede).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    tiles: [Tile; TILE_COUNT],
    seed: u64,
    time_limit: TimeLimit,
    remaining_seconds: u32,
    last_accepted: Option<TileValue>,
    solved_count: usize,
    wrong_tile: Option<TileIndex>,
    phase: Phase,
    generation: SessionGeneration,
}

impl Session {
    /// Starts a session over a dealt board with a validated time limit.
    ///
    /// All tiles begin idle and enabled, nothing is solved, and the full
    /// time limit is on the clock.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(board: DealtBoard, time_limit: TimeLimit, generation: SessionGeneration) -> Self {
        let DealtBoard { values, seed } = board;
        Self {
            tiles: values.map(Tile::new),
            seed,
            time_limit,
            remaining_seconds: time_limit.seconds(),
            last_accepted: None,
            solved_count: 0,
            wrong_tile: None,
            phase: Phase::Running,
            generation,
        }
    }

    /// Returns the tile at the given board position.
    #[must_use]
    pub fn tile(&self, index: TileIndex) -> Tile {
        self.tiles[index.as_usize()]
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the generation this session was started with.
    #[must_use]
    pub fn generation(&self) -> SessionGeneration {
        self.generation
    }

    /// Returns the seed of the board deal, for reproduction.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the configured time limit.
    #[must_use]
    pub fn time_limit(&self) -> TimeLimit {
        self.time_limit
    }

    /// Returns the seconds left on the countdown.
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Returns the seconds consumed so far (the progress indicator value).
    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.time_limit.seconds() - self.remaining_seconds
    }

    /// Returns how many tiles are solved.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.solved_count
    }

    /// Returns the most recently accepted value, or `None` before the first
    /// accepted click.
    #[must_use]
    pub fn last_accepted(&self) -> Option<TileValue> {
        self.last_accepted
    }

    /// Returns the number shown as "next" in the UI: the most recently
    /// accepted value, or 0 before anything is solved.
    #[must_use]
    pub fn next_number_display(&self) -> u8 {
        self.last_accepted.map_or(0, TileValue::get)
    }

    /// Returns whether the tile accepts clicks: session running and tile not
    /// yet solved. A wrong-highlighted tile stays clickable.
    #[must_use]
    pub fn is_tile_enabled(&self, index: TileIndex) -> bool {
        self.phase.is_running() && !self.tile(index).state().is_solved()
    }

    /// Smallest value among not-yet-solved tiles that exceeds the last
    /// accepted value. Board order is unrelated to value order, so every
    /// tile is scanned.
    fn min_remaining(&self) -> Option<TileValue> {
        self.tiles
            .iter()
            .filter(|tile| !tile.state().is_solved())
            .map(Tile::value)
            .filter(|value| self.last_accepted.is_none_or(|last| *value > last))
            .min()
    }

    /// Consumes one second of the countdown.
    ///
    /// Decrements while time is left; once the countdown stands at zero the
    /// session expires and all tiles become disabled. Ticks on a session
    /// that is not running are ignored, so expiry fires at most once.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.phase.is_running() {
            return TickOutcome::Ignored;
        }
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
            TickOutcome::Ticked {
                remaining: self.remaining_seconds,
            }
        } else {
            self.phase = Phase::Expired;
            TickOutcome::Expired
        }
    }

    /// Handles a click on the tile at `index`.
    ///
    /// Accepted when the tile holds the smallest not-yet-solved value above
    /// the last accepted one; the tile becomes solved and the session
    /// succeeds once all sixteen are. Otherwise the tile is marked wrong
    /// transiently. Clicks on disabled tiles or outside a running session
    /// are ignored.
    pub fn click(&mut self, index: TileIndex) -> ClickOutcome {
        if !self.is_tile_enabled(index) {
            return ClickOutcome::Ignored;
        }

        let value = self.tile(index).value();
        if Some(value) == self.min_remaining() {
            if self.wrong_tile == Some(index) {
                self.wrong_tile = None;
            }
            self.tiles[index.as_usize()].set_state(TileState::Solved);
            self.last_accepted = Some(value);
            self.solved_count += 1;

            let completed = self.solved_count == TILE_COUNT;
            if completed {
                self.phase = Phase::Succeeded;
            }
            ClickOutcome::Accepted { completed }
        } else {
            // At most one tile is wrong-highlighted at a time.
            if let Some(previous) = self.wrong_tile.take()
                && previous != index
            {
                self.tiles[previous.as_usize()].set_state(TileState::Idle);
            }
            self.tiles[index.as_usize()].set_state(TileState::Wrong);
            self.wrong_tile = Some(index);
            ClickOutcome::Rejected
        }
    }

    /// Reverts a transient wrong highlight back to idle.
    ///
    /// Invoked by the delayed 500 ms callback. Returns `false` without
    /// mutating anything when the session is no longer running, or when the
    /// tile is no longer the wrong-highlighted one (solved meanwhile, or a
    /// later wrong click moved the highlight).
    pub fn revert_wrong(&mut self, index: TileIndex) -> bool {
        if !self.phase.is_running() || self.wrong_tile != Some(index) {
            return false;
        }
        self.tiles[index.as_usize()].set_state(TileState::Idle);
        self.wrong_tile = None;
        true
    }

    /// Marks a running session as abandoned because a new game replaced it.
    ///
    /// Sessions already in a terminal phase keep their outcome.
    pub fn supersede(&mut self) {
        if self.phase.is_running() {
            self.phase = Phase::Superseded;
        }
    }
}
