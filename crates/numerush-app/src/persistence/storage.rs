use eframe::Storage;

use crate::state::Settings;

const SETTINGS_KEY: &str = "numerush.settings";

pub(crate) fn load_settings(storage: &dyn Storage) -> Option<Settings> {
    eframe::get_value(storage, SETTINGS_KEY)
}

pub(crate) fn save_settings(storage: &mut dyn Storage, settings: &Settings) {
    eframe::set_value(storage, SETTINGS_KEY, settings);
}
