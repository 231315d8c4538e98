use std::time::Instant;

use numerush_core::TileIndex;
use numerush_game::{ClickOutcome, SessionGeneration, TickOutcome};

use crate::{
    action::{Action, ActionRequestQueue, AlertKind},
    game_factory,
    state::{AppState, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state,
        ui_state,
    };

    match action {
        Action::StartGame => ctx.start_game(),
        Action::ClickTile(tile) => ctx.click_tile(tile),
        Action::Tick => ctx.tick(),
        Action::RevertWrong { generation, tile } => ctx.revert_wrong(generation, tile),
        Action::UpdateSettings(settings) => ctx.app_state.update_settings(settings),
        Action::CloseModal => ctx.ui_state.active_modal = None,
    }
}

impl ActionContext<'_> {
    fn start_game(&mut self) {
        // The widget already clamps; clamping again here keeps hand-edited
        // storage values inside the contract.
        let limit = self.app_state.settings.time_limit();

        if let Some(old) = self.app_state.session.as_mut() {
            old.supersede();
        }

        let generation = self.app_state.next_generation();
        let session = game_factory::deal_session(limit, generation);
        log::info!(
            "session {generation} started: seed={} limit={limit}s",
            session.seed()
        );

        self.app_state.session = Some(session);
        self.ui_state.status_message = None;
        self.ui_state.active_modal = None;
        self.ui_state.clock.clear_revert();
        self.ui_state.clock.start_countdown(Instant::now());
    }

    fn tick(&mut self) {
        let Some(session) = self.app_state.session.as_mut() else {
            return;
        };
        match session.tick() {
            TickOutcome::Ticked { .. } | TickOutcome::Ignored => {}
            TickOutcome::Expired => {
                log::info!("session {} expired", session.generation());
                self.ui_state.clock.stop_countdown();
                self.ui_state.clock.clear_revert();
                self.ui_state.active_modal = Some(AlertKind::TimeExpired);
            }
        }
    }

    fn click_tile(&mut self, tile: TileIndex) {
        let Some(session) = self.app_state.session.as_mut() else {
            return;
        };
        match session.click(tile) {
            ClickOutcome::Accepted { completed } => {
                log::debug!("tile {tile} accepted, {}/16 solved", session.solved_count());
                self.ui_state.status_message = None;
                if completed {
                    log::info!(
                        "session {} completed with {}s to spare",
                        session.generation(),
                        session.remaining_seconds()
                    );
                    self.ui_state.clock.stop_countdown();
                    self.ui_state.clock.clear_revert();
                    self.ui_state.active_modal = Some(AlertKind::Completed);
                }
            }
            ClickOutcome::Rejected => {
                log::debug!("tile {tile} rejected");
                self.ui_state.status_message = Some(format!(
                    "Incorrect! Expected: > {}",
                    session.next_number_display()
                ));
                self.ui_state
                    .clock
                    .arm_revert(Instant::now(), session.generation(), tile);
            }
            ClickOutcome::Ignored => {}
        }
    }

    fn revert_wrong(&mut self, generation: SessionGeneration, tile: TileIndex) {
        let Some(session) = self.app_state.session.as_mut() else {
            return;
        };
        // A revert armed for a superseded session must not touch the fresh
        // board.
        if session.generation() != generation {
            return;
        }
        session.revert_wrong(tile);
    }
}

#[cfg(test)]
mod tests {
    use numerush_core::{TILE_COUNT, TileIndex, TileValue};
    use numerush_deal::DealtBoard;
    use numerush_game::{Phase, Session, SessionGeneration, TileState, TimeLimit};

    use super::handle;
    use crate::{
        action::{Action, AlertKind},
        state::{AppState, Settings, UiState},
    };

    const FIXED_VALUES: [u8; TILE_COUNT] = [
        5, 47, 12, 89, 0, 33, 76, 21, 58, 94, 3, 67, 40, 15, 82, 100,
    ];

    fn fixed_session(limit_seconds: u32) -> Session {
        let board = DealtBoard {
            values: FIXED_VALUES.map(|n| TileValue::new(n).unwrap()),
            seed: 0,
        };
        Session::new(
            board,
            TimeLimit::new(limit_seconds).unwrap(),
            SessionGeneration::FIRST,
        )
    }

    fn states_with_session(limit_seconds: u32) -> (AppState, UiState) {
        let mut app_state = AppState::new(Settings::default());
        let _ = app_state.next_generation();
        app_state.session = Some(fixed_session(limit_seconds));
        (app_state, UiState::new())
    }

    fn index_of_value(session: &Session, value: u8) -> TileIndex {
        TileIndex::ALL
            .into_iter()
            .find(|index| session.tile(*index).value().get() == value)
            .unwrap()
    }

    #[test]
    fn start_game_deals_a_running_session_with_configured_limit() {
        let mut app_state = AppState::new(Settings {
            time_limit_seconds: 45,
        });
        let mut ui_state = UiState::new();

        handle(&mut app_state, &mut ui_state, Action::StartGame);

        let session = app_state.session.as_ref().unwrap();
        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(session.time_limit().seconds(), 45);
        assert_eq!(session.remaining_seconds(), 45);
    }

    #[test]
    fn start_game_supersedes_and_replaces_a_running_session() {
        let (mut app_state, mut ui_state) = states_with_session(30);
        let old_generation = app_state.session.as_ref().unwrap().generation();

        handle(&mut app_state, &mut ui_state, Action::StartGame);

        let session = app_state.session.as_ref().unwrap();
        assert_eq!(session.phase(), Phase::Running);
        assert_ne!(session.generation(), old_generation);
    }

    #[test]
    fn start_game_clears_message_and_modal() {
        let (mut app_state, mut ui_state) = states_with_session(30);
        ui_state.status_message = Some("Incorrect! Expected: > 0".to_owned());
        ui_state.active_modal = Some(AlertKind::TimeExpired);

        handle(&mut app_state, &mut ui_state, Action::StartGame);

        assert_eq!(ui_state.status_message, None);
        assert_eq!(ui_state.active_modal, None);
    }

    #[test]
    fn rejected_click_sets_message_and_arms_revert() {
        let (mut app_state, mut ui_state) = states_with_session(30);
        let wrong = index_of_value(app_state.session.as_ref().unwrap(), 47);

        handle(&mut app_state, &mut ui_state, Action::ClickTile(wrong));

        assert_eq!(
            ui_state.status_message.as_deref(),
            Some("Incorrect! Expected: > 0")
        );
        assert!(
            ui_state
                .clock
                .time_until_next_deadline(std::time::Instant::now())
                .is_some()
        );
        let session = app_state.session.as_ref().unwrap();
        assert_eq!(session.tile(wrong).state(), TileState::Wrong);
    }

    #[test]
    fn accepted_click_clears_the_message() {
        let (mut app_state, mut ui_state) = states_with_session(30);
        let session = app_state.session.as_ref().unwrap();
        let wrong = index_of_value(session, 47);
        let minimum = index_of_value(session, 0);

        handle(&mut app_state, &mut ui_state, Action::ClickTile(wrong));
        handle(&mut app_state, &mut ui_state, Action::ClickTile(minimum));

        assert_eq!(ui_state.status_message, None);
    }

    #[test]
    fn rejected_message_reports_the_last_accepted_value() {
        let (mut app_state, mut ui_state) = states_with_session(30);
        let session = app_state.session.as_ref().unwrap();
        let minimum = index_of_value(session, 0);
        let next = index_of_value(session, 3);
        let wrong = index_of_value(session, 89);

        handle(&mut app_state, &mut ui_state, Action::ClickTile(minimum));
        handle(&mut app_state, &mut ui_state, Action::ClickTile(next));
        handle(&mut app_state, &mut ui_state, Action::ClickTile(wrong));

        assert_eq!(
            ui_state.status_message.as_deref(),
            Some("Incorrect! Expected: > 3")
        );
    }

    #[test]
    fn completing_the_board_opens_the_success_modal_once() {
        let (mut app_state, mut ui_state) = states_with_session(60);

        let mut sorted = FIXED_VALUES;
        sorted.sort_unstable();
        for value in sorted {
            let index = index_of_value(app_state.session.as_ref().unwrap(), value);
            handle(&mut app_state, &mut ui_state, Action::ClickTile(index));
        }

        assert_eq!(ui_state.active_modal, Some(AlertKind::Completed));
        let session = app_state.session.as_ref().unwrap();
        assert_eq!(session.phase(), Phase::Succeeded);

        // Later ticks no longer move the countdown or reopen the modal.
        ui_state.active_modal = None;
        handle(&mut app_state, &mut ui_state, Action::Tick);
        assert_eq!(ui_state.active_modal, None);
        let session = app_state.session.as_ref().unwrap();
        assert_eq!(session.remaining_seconds(), 60);
    }

    #[test]
    fn expiry_opens_the_time_expired_modal_once() {
        let (mut app_state, mut ui_state) = states_with_session(1);

        handle(&mut app_state, &mut ui_state, Action::Tick);
        assert_eq!(ui_state.active_modal, None);

        handle(&mut app_state, &mut ui_state, Action::Tick);
        assert_eq!(ui_state.active_modal, Some(AlertKind::TimeExpired));
        assert_eq!(
            app_state.session.as_ref().unwrap().phase(),
            Phase::Expired
        );

        ui_state.active_modal = None;
        handle(&mut app_state, &mut ui_state, Action::Tick);
        assert_eq!(ui_state.active_modal, None);
    }

    #[test]
    fn revert_wrong_restores_only_the_matching_generation() {
        let (mut app_state, mut ui_state) = states_with_session(30);
        let wrong = index_of_value(app_state.session.as_ref().unwrap(), 47);
        let generation = app_state.session.as_ref().unwrap().generation();

        handle(&mut app_state, &mut ui_state, Action::ClickTile(wrong));

        // A stale generation leaves the highlight alone.
        handle(
            &mut app_state,
            &mut ui_state,
            Action::RevertWrong {
                generation: generation.next(),
                tile: wrong,
            },
        );
        assert_eq!(
            app_state.session.as_ref().unwrap().tile(wrong).state(),
            TileState::Wrong
        );

        handle(
            &mut app_state,
            &mut ui_state,
            Action::RevertWrong {
                generation,
                tile: wrong,
            },
        );
        assert_eq!(
            app_state.session.as_ref().unwrap().tile(wrong).state(),
            TileState::Idle
        );
    }

    #[test]
    fn actions_without_a_session_are_ignored() {
        let mut app_state = AppState::new(Settings::default());
        let mut ui_state = UiState::new();

        handle(&mut app_state, &mut ui_state, Action::Tick);
        handle(
            &mut app_state,
            &mut ui_state,
            Action::ClickTile(TileIndex::ALL[0]),
        );
        handle(
            &mut app_state,
            &mut ui_state,
            Action::RevertWrong {
                generation: SessionGeneration::FIRST,
                tile: TileIndex::ALL[0],
            },
        );

        assert!(app_state.session.is_none());
        assert_eq!(ui_state.active_modal, None);
        assert_eq!(ui_state.status_message, None);
    }

    #[test]
    fn close_modal_and_update_settings_apply_directly() {
        let (mut app_state, mut ui_state) = states_with_session(30);
        ui_state.active_modal = Some(AlertKind::Completed);

        handle(&mut app_state, &mut ui_state, Action::CloseModal);
        assert_eq!(ui_state.active_modal, None);

        handle(
            &mut app_state,
            &mut ui_state,
            Action::UpdateSettings(Settings {
                time_limit_seconds: 10,
            }),
        );
        assert_eq!(app_state.settings.time_limit_seconds, 10);
        assert!(app_state.is_dirty());
    }
}
