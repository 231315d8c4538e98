use crate::{action::AlertKind, clock::ClockState};

// UiState holds ephemeral UI-only state (modal, status line, timer
// deadlines). It is not persisted.
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) active_modal: Option<AlertKind>,
    pub(crate) status_message: Option<String>,
    pub(crate) clock: ClockState,
}

impl UiState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            active_modal: None,
            status_message: None,
            clock: ClockState::new(),
        }
    }
}
