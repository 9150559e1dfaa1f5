//! Prioritized display requests.

use crate::pattern::Pattern;
use crate::time::TimeDuration;
use crate::types::{PatternError, Priority, SignalId};

/// A request to display a pattern, tagged with a priority and a stable id.
///
/// Signals are validated on construction, so the engine never sees a pattern
/// with a zero period or an empty color sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal<D: TimeDuration, const N: usize> {
    id: SignalId,
    priority: Priority,
    pattern: Pattern<D, N>,
}

impl<D: TimeDuration, const N: usize> Signal<D, N> {
    /// Creates a new signal.
    ///
    /// # Errors
    /// Returns the pattern's validation error if it is malformed.
    pub fn new(
        id: impl Into<SignalId>,
        priority: impl Into<Priority>,
        pattern: Pattern<D, N>,
    ) -> Result<Self, PatternError> {
        pattern.validate()?;
        Ok(Self {
            id: id.into(),
            priority: priority.into(),
            pattern,
        })
    }

    pub fn id(&self) -> SignalId {
        self.id
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn pattern(&self) -> &Pattern<D, N> {
        &self.pattern
    }
}
