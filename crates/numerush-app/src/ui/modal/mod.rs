use eframe::egui::Context;

use crate::action::{ActionRequestQueue, AlertKind};

mod dialogs;

pub(crate) fn show(ctx: &Context, action_queue: &mut ActionRequestQueue, kind: AlertKind) {
    dialogs::show_alert(ctx, action_queue, kind);
}
