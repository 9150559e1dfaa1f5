//! Status indicator driving one light group.
//!
//! Provides [`StatusIndicator`], which owns an [`ArbitrationEngine`] and a
//! [`LightOutput`], reads the clock from a [`TimeSource`], and pushes the
//! resolved color to the output once per tick.

use crate::arbiter::{ArbitrationConfig, ArbitrationEngine};
use crate::signal::Signal;
use crate::strip::LightOutput;
use crate::time::{TimeInstant, TimeSource};
use crate::types::SignalId;
use palette::Srgb;

/// Drives one light group from the signals offered each tick.
///
/// The output is primed with the idle color on construction and rewritten
/// on every tick, so a frame the sink failed to show is replaced on the next
/// one.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `L` - Light output type
/// * `T` - Time source implementation type
/// * `N` - Maximum number of colors in a signal's pattern
pub struct StatusIndicator<'t, I: TimeInstant, L: LightOutput, T: TimeSource<I>, const N: usize> {
    output: L,
    time_source: &'t T,
    engine: ArbitrationEngine<I, N>,
    current_color: Srgb,
}

impl<'t, I: TimeInstant, L: LightOutput, T: TimeSource<I>, const N: usize>
    StatusIndicator<'t, I, L, T, N>
{
    /// Creates an indicator showing the idle color.
    pub fn new(mut output: L, time_source: &'t T, config: ArbitrationConfig) -> Self {
        output.apply(config.idle_color);

        Self {
            output,
            time_source,
            engine: ArbitrationEngine::new(config),
            current_color: config.idle_color,
        }
    }

    /// Runs one tick: resolves `candidates` at the current time and writes
    /// the result to the output.
    ///
    /// Returns the resolved color.
    pub fn update(&mut self, candidates: &[Signal<I::Duration, N>]) -> Srgb {
        let now = self.time_source.now();
        let color = self.engine.resolve(candidates, now);

        self.output.apply(color);
        self.current_color = color;

        color
    }

    /// Forgets the active signal and returns to the idle color.
    ///
    /// Call between sessions so the first signal of the next one starts from
    /// phase zero.
    pub fn reset(&mut self) {
        self.engine.reset();

        let idle = self.engine.config().idle_color;
        self.output.apply(idle);
        self.current_color = idle;
    }

    /// Returns the color resolved on the last tick.
    pub fn current_color(&self) -> Srgb {
        self.current_color
    }

    /// Returns the id of the signal that won the last tick.
    pub fn active_signal(&self) -> Option<SignalId> {
        self.engine.active_signal()
    }

    /// Returns how long the current winner has been showing.
    pub fn elapsed(&self) -> Option<I::Duration> {
        self.engine.elapsed(self.time_source.now())
    }

    pub fn engine(&self) -> &ArbitrationEngine<I, N> {
        &self.engine
    }

    pub fn output(&self) -> &L {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut L {
        &mut self.output
    }
}
