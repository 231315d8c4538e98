use numerush_game::{Session, SessionGeneration};

use crate::state::Settings;

// AppState holds the session and the persisted settings. `None` session
// means no game has been started yet (tiles disabled, blank board).
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) session: Option<Session>,
    pub(crate) settings: Settings,
    next_generation: SessionGeneration,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(settings: Settings) -> Self {
        Self {
            session: None,
            settings,
            next_generation: SessionGeneration::FIRST,
            dirty: false,
        }
    }

    /// Hands out the generation for the next session and advances the
    /// counter. Generations never repeat within a process, which is what
    /// keeps stale delayed reverts inert.
    pub(crate) fn next_generation(&mut self) -> SessionGeneration {
        let generation = self.next_generation;
        self.next_generation = generation.next();
        generation
    }

    pub(crate) fn update_settings(&mut self, settings: Settings) {
        if self.settings != settings {
            self.settings = settings;
            self.dirty = true;
        }
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
