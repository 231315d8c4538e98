use numerush_game::TimeLimit;

// Settings are the only state persisted across launches.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub(crate) struct Settings {
    pub(crate) time_limit_seconds: u32,
}

impl Settings {
    /// Time limit with raw (possibly hand-edited) storage values clamped
    /// back into the recognized range.
    #[must_use]
    pub(crate) fn time_limit(&self) -> TimeLimit {
        TimeLimit::clamp(self.time_limit_seconds)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_limit_seconds: TimeLimit::default().seconds(),
        }
    }
}
