use numerush_core::TileIndex;
use numerush_game::{Phase, Session, TileState};

use crate::{
    state::{AppState, UiState},
    ui::{
        board::{BoardViewModel, TileButton},
        control_panel::ControlPanelViewModel,
        game_screen::GameScreenViewModel,
        status_line::{GameStatus, StatusLineViewModel},
    },
};

fn build_board(session: Option<&Session>) -> BoardViewModel {
    let tiles = std::array::from_fn(|i| {
        let index = TileIndex::ALL[i];
        match session {
            Some(session) => {
                let tile = session.tile(index);
                TileButton {
                    label: tile.value().to_string(),
                    state: tile.state(),
                    enabled: session.is_tile_enabled(index),
                }
            }
            // Blank, disabled board until the first game starts.
            None => TileButton {
                label: String::new(),
                state: TileState::Idle,
                enabled: false,
            },
        }
    });
    BoardViewModel::new(tiles)
}

fn build_status_line(app_state: &AppState, ui_state: &UiState) -> StatusLineViewModel {
    let session = app_state.session.as_ref();

    // Superseded sessions are replaced within the same action batch, so
    // rendering only ever sees the other three phases or no session at all.
    let status = match session.map(Session::phase) {
        None | Some(Phase::Superseded) => GameStatus::NotStarted,
        Some(Phase::Running) => GameStatus::Running,
        Some(Phase::Succeeded) => GameStatus::Succeeded,
        Some(Phase::Expired) => GameStatus::Expired,
    };

    let configured = app_state.settings.time_limit().seconds();
    StatusLineViewModel {
        status,
        remaining_seconds: session.map_or(configured, Session::remaining_seconds),
        time_limit_seconds: session.map_or(configured, |session| session.time_limit().seconds()),
        next_number: session.map_or(0, Session::next_number_display),
        message: ui_state.status_message.clone(),
    }
}

#[must_use]
pub(crate) fn build_game_screen_view_model<'a>(
    app_state: &'a AppState,
    ui_state: &UiState,
) -> GameScreenViewModel<'a> {
    let control_vm = ControlPanelViewModel::new(&app_state.settings);
    let status_vm = build_status_line(app_state, ui_state);
    let board_vm = build_board(app_state.session.as_ref());
    GameScreenViewModel::new(control_vm, status_vm, board_vm)
}
