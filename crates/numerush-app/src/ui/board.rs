use eframe::egui::{Button, Color32, RichText, Ui, Vec2};
use numerush_core::{GRID_SIDE, TILE_COUNT, TileIndex};
use numerush_game::TileState;

use crate::action::{Action, ActionRequestQueue};

const SOLVED_FILL: Color32 = Color32::from_rgb(0x2e, 0x7d, 0x32);
const WRONG_FILL: Color32 = Color32::from_rgb(0xc6, 0x28, 0x28);
const LABEL_SIZE_RATIO: f32 = 0.35;
const MIN_CELL_SIZE: f32 = 32.0;

/// Render state of one tile button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TileButton {
    pub(crate) label: String,
    pub(crate) state: TileState,
    pub(crate) enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BoardViewModel {
    tiles: [TileButton; TILE_COUNT],
}

impl BoardViewModel {
    #[must_use]
    pub(crate) fn new(tiles: [TileButton; TILE_COUNT]) -> Self {
        Self { tiles }
    }

    #[must_use]
    pub(crate) fn tile(&self, index: TileIndex) -> &TileButton {
        &self.tiles[index.as_usize()]
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &BoardViewModel, action_queue: &mut ActionRequestQueue) {
    let spacing = ui.spacing().item_spacing;
    let side = GRID_SIDE as f32;
    let cell_size = ((ui.available_size() - spacing * (side - 1.0)) / side)
        .min_elem()
        .max(MIN_CELL_SIZE);

    ui.vertical(|ui| {
        for row in TileIndex::ALL.chunks(GRID_SIDE) {
            ui.horizontal(|ui| {
                for index in row {
                    show_tile(ui, vm.tile(*index), *index, cell_size, action_queue);
                }
            });
        }
    });
}

fn show_tile(
    ui: &mut Ui,
    tile: &TileButton,
    index: TileIndex,
    cell_size: f32,
    action_queue: &mut ActionRequestQueue,
) {
    let fill = match tile.state {
        TileState::Idle => None,
        TileState::Solved => Some(SOLVED_FILL),
        TileState::Wrong => Some(WRONG_FILL),
    };

    let mut text = RichText::new(tile.label.as_str()).size(cell_size * LABEL_SIZE_RATIO);
    if fill.is_some() {
        text = text.color(Color32::WHITE);
    }
    let mut button = Button::new(text).min_size(Vec2::splat(cell_size));
    if let Some(fill) = fill {
        button = button.fill(fill);
    }

    if ui.add_enabled(tile.enabled, button).clicked() {
        action_queue.request(Action::ClickTile(index));
    }
}
