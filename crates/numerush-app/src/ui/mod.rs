pub mod board;
pub mod control_panel;
pub mod game_screen;
pub mod icon;
pub mod input;
pub mod modal;
pub mod status_line;
