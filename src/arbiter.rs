//! Signal arbitration with phase tracking.
//!
//! Provides [`ArbitrationEngine`], which picks one winner among the signals
//! offered on a tick and renders its pattern relative to the tick on which it
//! first won. The engine has no notion of timeouts or cancellation: a signal is
//! withdrawn simply by not offering it on a later tick.

use crate::COLOR_OFF;
use crate::signal::Signal;
use crate::time::TimeInstant;
use crate::types::{Priority, SignalId};
use core::cmp::Reverse;
use palette::Srgb;

/// Colors used when no pattern is driving the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArbitrationConfig {
    /// Shown when no signal is offered.
    pub idle_color: Srgb,
    /// Dark half of blinking patterns.
    pub off_color: Srgb,
}

impl ArbitrationConfig {
    pub fn with_idle_color(mut self, color: Srgb) -> Self {
        self.idle_color = color;
        self
    }

    pub fn with_off_color(mut self, color: Srgb) -> Self {
        self.off_color = color;
        self
    }
}

impl Default for ArbitrationConfig {
    fn default() -> Self {
        Self {
            idle_color: COLOR_OFF,
            off_color: COLOR_OFF,
        }
    }
}

/// Which signal won the last tick and when it started winning.
///
/// `pattern_start` only moves when the winning id changes, which keeps a
/// pattern's phase continuous while it stays on top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArbitrationState<I> {
    active: Option<SignalId>,
    pattern_start: Option<I>,
}

impl<I> ArbitrationState<I> {
    /// Returns the id that won the previous tick, if any.
    pub fn active(&self) -> Option<SignalId> {
        self.active
    }

    /// Returns the instant the current winner first won.
    pub fn pattern_start(&self) -> Option<&I> {
        self.pattern_start.as_ref()
    }
}

impl<I> Default for ArbitrationState<I> {
    fn default() -> Self {
        Self {
            active: None,
            pattern_start: None,
        }
    }
}

/// Resolves competing signals into one color per tick.
///
/// One engine drives one light group. Separate strips need separate engines;
/// sharing one would mix up their phase tracking.
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `N` - Maximum number of colors in a signal's pattern
#[derive(Debug, Clone)]
pub struct ArbitrationEngine<I: TimeInstant, const N: usize> {
    config: ArbitrationConfig,
    state: ArbitrationState<I>,
}

impl<I: TimeInstant, const N: usize> ArbitrationEngine<I, N> {
    /// Creates an engine with no active signal.
    pub fn new(config: ArbitrationConfig) -> Self {
        Self {
            config,
            state: ArbitrationState::default(),
        }
    }

    /// Picks the winner among `candidates` without touching engine state.
    ///
    /// Highest priority wins. Ties go to the signal that won the previous
    /// tick, then to the lexicographically smallest id. Among exact
    /// duplicates the first one offered wins.
    pub fn select<'a>(
        &self,
        candidates: &'a [Signal<I::Duration, N>],
    ) -> Option<&'a Signal<I::Duration, N>> {
        candidates
            .iter()
            .fold(None, |best: Option<&'a Signal<I::Duration, N>>, candidate| match best {
                Some(current) if self.rank(candidate) <= self.rank(current) => Some(current),
                _ => Some(candidate),
            })
    }

    fn rank(&self, signal: &Signal<I::Duration, N>) -> (Priority, bool, Reverse<SignalId>) {
        (
            signal.priority(),
            self.state.active == Some(signal.id()),
            Reverse(signal.id()),
        )
    }

    /// Resolves this tick's color.
    ///
    /// Restarts the winner's phase at `now` if it differs from the previous
    /// tick's winner, otherwise keeps the original start. With no candidates
    /// the idle color is returned and the active signal is cleared, so a
    /// signal that comes back later starts from phase zero again.
    pub fn resolve(&mut self, candidates: &[Signal<I::Duration, N>], now: I) -> Srgb {
        let Some(winner) = self.select(candidates) else {
            #[cfg(feature = "defmt")]
            {
                if let Some(previous) = self.state.active {
                    defmt::debug!("signal {} withdrawn, showing idle color", previous);
                }
            }

            self.state = ArbitrationState::default();
            return self.config.idle_color;
        };

        let id = winner.id();
        let start = match (self.state.active, self.state.pattern_start) {
            (Some(active), Some(start)) if active == id => start,
            _ => {
                #[cfg(feature = "defmt")]
                defmt::debug!(
                    "signal {} (priority {}) took over from {}",
                    id,
                    winner.priority().0,
                    self.state.active
                );

                self.state.active = Some(id);
                self.state.pattern_start = Some(now);
                now
            }
        };

        let elapsed = now.duration_since(start);
        winner
            .pattern()
            .color_at_with_off(elapsed, self.config.off_color)
    }

    /// Returns the id that won the most recent tick.
    pub fn active_signal(&self) -> Option<SignalId> {
        self.state.active
    }

    /// Returns how long the current winner has been winning as of `now`.
    pub fn elapsed(&self, now: I) -> Option<I::Duration> {
        self.state
            .pattern_start
            .map(|start| now.duration_since(start))
    }

    pub fn state(&self) -> &ArbitrationState<I> {
        &self.state
    }

    pub fn config(&self) -> &ArbitrationConfig {
        &self.config
    }

    /// Forgets the active signal, e.g. between matches.
    pub fn reset(&mut self) {
        self.state = ArbitrationState::default();
    }
}

impl<I: TimeInstant, const N: usize> Default for ArbitrationEngine<I, N> {
    fn default() -> Self {
        Self::new(ArbitrationConfig::default())
    }
}
