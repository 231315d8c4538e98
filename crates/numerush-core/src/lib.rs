//! Core vocabulary types for the numerush board.
//!
//! The board is a 4x4 arrangement of sixteen tiles; each tile carries a
//! value drawn from 0 to 100. This crate provides the strong-typed value
//! and position types shared by the dealer, the game session, and the app.

pub use self::{
    tile_index::{GRID_SIDE, TILE_COUNT, TileIndex},
    tile_value::{MAX_TILE_VALUE, TileValue, TileValueOutOfRange},
};

mod tile_index;
mod tile_value;
