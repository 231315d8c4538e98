use eframe::egui::{DragValue, Ui};
use numerush_game::TimeLimit;

use crate::{
    action::{Action, ActionRequestQueue},
    state::Settings,
    ui::icon,
};

#[derive(Debug, Clone)]
pub(crate) struct ControlPanelViewModel<'a> {
    settings: &'a Settings,
}

impl<'a> ControlPanelViewModel<'a> {
    #[must_use]
    pub(crate) fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &ControlPanelViewModel, action_queue: &mut ActionRequestQueue) {
    let mut settings = vm.settings.clone();
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label("Set Time (sec):");
        changed |= ui
            .add(
                DragValue::new(&mut settings.time_limit_seconds)
                    .range(TimeLimit::MIN.seconds()..=TimeLimit::MAX.seconds()),
            )
            .changed();

        if ui.button(format!("{} Start Game", icon::PLAY)).clicked() {
            action_queue.request(Action::StartGame);
        }
    });

    if changed {
        action_queue.request(Action::UpdateSettings(settings));
    }
}
