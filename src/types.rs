//! Core value types shared by patterns, signals and the arbitration engine.

/// Stable identifier of a logical signal.
///
/// The engine compares ids across ticks to tell "the same signal is still
/// winning" apart from "a different signal took over". Ids order
/// lexicographically, which is the final arbitration tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalId(pub &'static str);

impl SignalId {
    /// Returns the id as a string slice.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl From<&'static str> for SignalId {
    fn from(id: &'static str) -> Self {
        SignalId(id)
    }
}

impl core::fmt::Display for SignalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0)
    }
}

/// Arbitration priority. Higher values win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Priority(pub i32);

impl Priority {
    /// Fault indication. Preempts everything.
    pub const ERROR: Priority = Priority(100);
    /// Countdown before a shift change or before endgame.
    pub const SHIFT_WARNING: Priority = Priority(80);
    /// Climbing in progress or finished.
    pub const CLIMB: Priority = Priority(70);
    /// Endgame period.
    pub const ENDGAME: Priority = Priority(60);
    /// Aligned to the target.
    pub const ALIGNED: Priority = Priority(50);
    /// Steady-state operating mode.
    pub const MODE: Priority = Priority(40);
    /// Lowest level, for background signals any other status overrides.
    pub const IDLE: Priority = Priority(0);
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Priority(value)
    }
}

/// Pattern validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternError {
    /// A time-based pattern was given a zero period.
    ZeroPeriod,

    /// A cycling pattern was given no colors.
    EmptySequence,

    /// More colors than the pattern capacity.
    CapacityExceeded,
}

impl core::fmt::Display for PatternError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PatternError::ZeroPeriod => {
                write!(f, "time-based patterns require a non-zero period")
            }
            PatternError::EmptySequence => {
                write!(f, "color sequence must have at least one color")
            }
            PatternError::CapacityExceeded => {
                write!(f, "color sequence capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PatternError {}
