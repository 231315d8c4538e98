//! Numerush desktop application UI.
//!
//! # Design Notes
//! - Single screen: a control panel (time limit + start), a status line
//!   with countdown and progress, and the 4x4 tile board.
//! - All mutation flows through the action queue; widgets and timers only
//!   enqueue, the handler applies in arrival order.
//! - The countdown and the wrong-highlight revert are frame-polled
//!   deadlines, woken via `request_repaint_after`.

use std::time::{Duration, Instant};

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context},
};

use crate::{
    action::{self, ActionRequestQueue},
    persistence::storage,
    state::{AppState, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct NumerushApp {
    app_state: AppState,
    ui_state: UiState,
}

impl NumerushApp {
    #[must_use]
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(storage::load_settings)
            .unwrap_or_default();
        Self {
            app_state: AppState::new(settings),
            ui_state: UiState::new(),
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }
}

impl App for NumerushApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        storage::save_settings(storage, &self.app_state.settings);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        self.ui_state
            .clock
            .poll(Instant::now(), &mut action_queue);
        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        if self.ui_state.active_modal.is_none() {
            ctx.input(|i| {
                ui::input::handle_input(i, &mut action_queue);
            });
            action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
        }

        let game_screen_vm =
            view_model_builder::build_game_screen_view_model(&self.app_state, &self.ui_state);

        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
        });

        if let Some(kind) = self.ui_state.active_modal {
            ui::modal::show(ctx, &mut action_queue, kind);
        }

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        if let Some(wait) = self
            .ui_state
            .clock
            .time_until_next_deadline(Instant::now())
        {
            ctx.request_repaint_after(wait);
        }

        self.apply_persistence(frame);
    }
}
