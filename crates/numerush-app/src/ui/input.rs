use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue};

struct Shortcut {
    key: Key,
    command: bool,
    action: Action,
}

const SHORTCUTS: [Shortcut; 1] = [Shortcut {
    key: Key::N,
    command: true,
    action: Action::StartGame,
}];

pub fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac)
    // is pressed
    for shortcut in &SHORTCUTS {
        if i.key_pressed(shortcut.key) && i.modifiers.command == shortcut.command {
            action_queue.request(shortcut.action.clone());
            return;
        }
    }
}
