//! Clock abstraction for the control loop.
//!
//! Nothing in this crate reads a clock on its own. Each tick the host samples
//! its platform timer (embassy, a HAL counter, a test mock) through
//! [`TimeSource`], and the engine measures pattern phase as the span between
//! two [`TimeInstant`]s. Pattern math runs in whole milliseconds.

/// Where a [`StatusIndicator`](crate::StatusIndicator) samples the time for
/// each tick.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the instant of the current tick.
    fn now(&self) -> I;
}

/// A span of time that patterns can be timed with.
pub trait TimeDuration: Copy + PartialEq {
    /// Whole milliseconds in this span.
    fn as_millis(&self) -> u64;

    /// Builds a span of `millis` milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// A point on the host's monotonic timeline.
pub trait TimeInstant: Copy {
    /// Span type produced by [`duration_since`](Self::duration_since).
    type Duration: TimeDuration;

    /// Time elapsed from `earlier` to `self`.
    ///
    /// Must saturate to zero when `earlier` is later than `self`, so a clock
    /// that steps backwards shows phase zero instead of wrapping.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
