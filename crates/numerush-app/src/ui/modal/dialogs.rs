use eframe::egui::{Context, Id, Modal, Response, RichText, Sides, Ui};

use crate::{
    action::{Action, ActionRequestQueue, AlertKind},
    ui::icon,
};

struct DialogResult {
    should_close: bool,
}

fn show_dialog<Heading, Body, Buttons>(
    ctx: &Context,
    id: Id,
    heading: Heading,
    body: Body,
    buttons: Buttons,
) -> DialogResult
where
    Heading: Into<RichText>,
    Body: FnOnce(&mut Ui),
    Buttons: FnOnce(&mut Ui),
{
    let modal = Modal::new(id).show(ctx, |ui| {
        ui.heading(heading);
        ui.add_space(4.0);

        body(ui);
        ui.add_space(8.0);

        Sides::new().show(ui, |_ui| {}, buttons);
    });

    DialogResult {
        should_close: modal.should_close(),
    }
}

fn request_focus_if_none(ui: &Ui, response: &Response) {
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
}

struct AlertDialogSpec {
    id: Id,
    heading: String,
    body: &'static str,
}

impl AlertKind {
    fn spec(self) -> AlertDialogSpec {
        match self {
            AlertKind::TimeExpired => AlertDialogSpec {
                id: Id::new("time_expired_alert"),
                heading: format!("{} Time's Up", icon::ALARM),
                body: "Time's up! You didn't finish in time.",
            },
            AlertKind::Completed => AlertDialogSpec {
                id: Id::new("completed_alert"),
                heading: format!("{} Congratulations", icon::TROPHY),
                body: "Congratulations! You completed the game.",
            },
        }
    }
}

pub(crate) fn show_alert(ctx: &Context, action_queue: &mut ActionRequestQueue, kind: AlertKind) {
    let spec = kind.spec();
    let DialogResult { should_close } = show_dialog(
        ctx,
        spec.id,
        spec.heading,
        |ui: &mut Ui| {
            ui.label(spec.body);
        },
        |ui: &mut Ui| {
            let ok = ui.button(format!("{} OK", icon::CHECK));
            request_focus_if_none(ui, &ok);
            if ok.clicked() {
                action_queue.request(Action::CloseModal);
            }
        },
    );

    if should_close {
        action_queue.request(Action::CloseModal);
    }
}
