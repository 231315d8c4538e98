use eframe::egui::{ProgressBar, RichText, Ui};

use crate::ui::icon;

/// What the session is currently doing, for the status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GameStatus {
    NotStarted,
    Running,
    Succeeded,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusLineViewModel {
    pub(crate) status: GameStatus,
    pub(crate) remaining_seconds: u32,
    pub(crate) time_limit_seconds: u32,
    pub(crate) next_number: u8,
    pub(crate) message: Option<String>,
}

impl StatusLineViewModel {
    /// Progress indicator value: seconds consumed out of the limit.
    #[must_use]
    pub(crate) fn progress_fraction(&self) -> f32 {
        if self.time_limit_seconds == 0 {
            return 0.0;
        }
        let elapsed = self.time_limit_seconds - self.remaining_seconds;
        elapsed as f32 / self.time_limit_seconds as f32
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel) {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            let timer_icon = match vm.status {
                GameStatus::NotStarted | GameStatus::Running => icon::HOURGLASS,
                GameStatus::Succeeded => icon::TROPHY,
                GameStatus::Expired => icon::ALARM,
            };
            ui.label(format!(
                "{timer_icon} Time: {} sec",
                vm.remaining_seconds
            ));
            ui.separator();
            ui.label(format!("Next Number: {}", vm.next_number));
        });

        match vm.status {
            GameStatus::NotStarted | GameStatus::Running => {
                if let Some(message) = &vm.message {
                    ui.colored_label(ui.visuals().error_fg_color, message.as_str());
                }
            }
            GameStatus::Succeeded => {
                ui.label(
                    RichText::new("Congratulations! You completed the game.")
                        .color(ui.visuals().warn_fg_color),
                );
            }
            GameStatus::Expired => {
                ui.label(
                    RichText::new("Time's up! You didn't finish in time.")
                        .color(ui.visuals().error_fg_color),
                );
            }
        }

        ui.add(ProgressBar::new(vm.progress_fraction()));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_fraction_tracks_elapsed_time() {
        let vm = StatusLineViewModel {
            status: GameStatus::Running,
            remaining_seconds: 10,
            time_limit_seconds: 30,
            next_number: 0,
            message: None,
        };
        let fraction = vm.progress_fraction();
        assert!((fraction - 2.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn progress_fraction_handles_zero_limit() {
        let vm = StatusLineViewModel {
            status: GameStatus::NotStarted,
            remaining_seconds: 0,
            time_limit_seconds: 0,
            next_number: 0,
            message: None,
        };
        assert_eq!(vm.progress_fraction(), 0.0);
    }
}
