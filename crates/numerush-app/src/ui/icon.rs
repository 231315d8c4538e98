//! Emoji glyphs shared by labels, buttons, and dialogs.

pub(crate) const ALARM: &str = "⏰";
pub(crate) const CHECK: &str = "✔";
pub(crate) const HOURGLASS: &str = "⏳";
pub(crate) const PLAY: &str = "▶";
pub(crate) const TROPHY: &str = "🏆";
