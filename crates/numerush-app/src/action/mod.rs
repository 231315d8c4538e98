use std::mem;

use numerush_core::TileIndex;
use numerush_game::SessionGeneration;

use crate::state::Settings;

pub(crate) mod handler;

/// Everything that can mutate app or UI state. Widgets and timers only
/// enqueue actions; the handler applies them in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    StartGame,
    ClickTile(TileIndex),
    Tick,
    RevertWrong {
        generation: SessionGeneration,
        tile: TileIndex,
    },
    UpdateSettings(Settings),
    CloseModal,
}

/// Terminal notifications shown as a blocking modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AlertKind {
    TimeExpired,
    Completed,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
