use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use crate::{
    action::ActionRequestQueue,
    ui::{
        board::{self, BoardViewModel},
        control_panel::{self, ControlPanelViewModel},
        status_line::{self, StatusLineViewModel},
    },
};

const CONTROL_PANEL_HEIGHT: f32 = 28.0;
const STATUS_LINE_HEIGHT: f32 = 72.0;

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel<'a> {
    pub(crate) control_vm: ControlPanelViewModel<'a>,
    pub(crate) status_vm: StatusLineViewModel,
    pub(crate) board_vm: BoardViewModel,
}

impl<'a> GameScreenViewModel<'a> {
    #[must_use]
    pub(crate) fn new(
        control_vm: ControlPanelViewModel<'a>,
        status_vm: StatusLineViewModel,
        board_vm: BoardViewModel,
    ) -> Self {
        Self {
            control_vm,
            status_vm,
            board_vm,
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    StripBuilder::new(ui)
        .size(Size::exact(CONTROL_PANEL_HEIGHT))
        .size(Size::exact(STATUS_LINE_HEIGHT))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.cell(|ui| {
                control_panel::show(ui, &vm.control_vm, action_queue);
            });
            strip.cell(|ui| {
                status_line::show(ui, &vm.status_vm);
            });
            strip.cell(|ui| {
                board::show(ui, &vm.board_vm, action_queue);
            });
        });
}
