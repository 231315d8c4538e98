//! Game session logic for numerush.
//!
//! A session is one play-through: sixteen dealt tiles that must be clicked
//! in ascending order of their values before the countdown runs out. This
//! crate owns all session state and the three operations that drive it
//! (start via [`Session::new`], [`Session::tick`], [`Session::click`]) plus
//! the guarded revert of a transient wrong-click highlight. It is pure,
//! synchronous, and UI-free; the app crate wires it to widgets and timers.

pub use self::{
    session::{ClickOutcome, Phase, Session, SessionGeneration, TickOutcome},
    tile::{Tile, TileState},
    time_limit::{InvalidTimeLimit, TimeLimit},
};

mod session;
mod tile;
mod time_limit;
