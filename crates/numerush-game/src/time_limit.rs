/// A validated session time limit in seconds.
///
/// The recognized range is 1-60 seconds. The input widget clamps to the same
/// range, so [`TimeLimit::new`] failing indicates a caller bypassing the
/// boundary.
///
/// # Examples
///
/// ```
/// use numerush_game::TimeLimit;
///
/// let limit = TimeLimit::new(45).unwrap();
/// assert_eq!(limit.seconds(), 45);
///
/// assert!(TimeLimit::new(0).is_err());
/// assert!(TimeLimit::new(61).is_err());
/// assert_eq!(TimeLimit::clamp(90), TimeLimit::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, derive_more::Display)]
pub struct TimeLimit(u32);

impl TimeLimit {
    /// Shortest allowed limit, 1 second.
    pub const MIN: Self = Self(1);

    /// Longest allowed limit, 60 seconds.
    pub const MAX: Self = Self(60);

    /// Creates a time limit, rejecting values outside 1-60.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTimeLimit`] when `seconds` is 0 or above 60.
    pub fn new(seconds: u32) -> Result<Self, InvalidTimeLimit> {
        if (Self::MIN.0..=Self::MAX.0).contains(&seconds) {
            Ok(Self(seconds))
        } else {
            Err(InvalidTimeLimit { seconds })
        }
    }

    /// Creates a time limit by clamping `seconds` into the allowed range.
    ///
    /// This is the boundary behavior for raw widget input; in-range values
    /// pass through unchanged.
    #[must_use]
    pub fn clamp(seconds: u32) -> Self {
        Self(seconds.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Returns the limit in seconds.
    #[must_use]
    pub const fn seconds(self) -> u32 {
        self.0
    }
}

impl Default for TimeLimit {
    /// The default limit offered by the input widget, 30 seconds.
    fn default() -> Self {
        Self(30)
    }
}

/// Error for a time limit outside the recognized 1-60 second range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("time limit of {seconds} seconds is outside the 1-60 range")]
pub struct InvalidTimeLimit {
    /// The rejected number of seconds.
    pub seconds: u32,
}
