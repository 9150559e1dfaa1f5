//! Memory calculator for signal-arbiter
//!
//! Prints the footprint of patterns, signals, engines and a full status
//! indicator for a few duration types and color capacities, so you can pick
//! `N` (colors per pattern) for your target's RAM budget.
//!
//! Usage:
//!   cargo run --bin memory_calculator

use embassy_time::Duration as EmbassyDurationInner;
use embassy_time::Instant as EmbassyInstantInner;
use palette::Srgb;
use signal_arbiter::status::MAX_STATUS_SIGNALS;
use signal_arbiter::{
    ArbitrationEngine, LightOutput, Pattern, Signal, StatusIndicator, StatusSignals, StripOutput,
    TimeDuration, TimeInstant, TimeSource,
};
use smart_leds::{RGB8, SmartLedsWrite};
use std::mem::size_of;

// ============================================================================
// Duration / Instant Types
// ============================================================================

// u32 milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Duration32(u32);

impl TimeDuration for Duration32 {
    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        Duration32(millis as u32)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Instant32(u32);

impl TimeInstant for Instant32 {
    type Duration = Duration32;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Duration32(self.0.saturating_sub(earlier.0))
    }
}

// Embassy wrappers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct EmbassyDuration(EmbassyDurationInner);

impl TimeDuration for EmbassyDuration {
    fn as_millis(&self) -> u64 {
        self.0.as_millis()
    }

    fn from_millis(millis: u64) -> Self {
        EmbassyDuration(EmbassyDurationInner::from_millis(millis))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct EmbassyInstant(EmbassyInstantInner);

impl Default for EmbassyInstant {
    fn default() -> Self {
        EmbassyInstant(EmbassyInstantInner::from_ticks(0))
    }
}

impl TimeInstant for EmbassyInstant {
    type Duration = EmbassyDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        EmbassyDuration(self.0.saturating_duration_since(earlier.0))
    }
}

struct NullClock;

impl<I: TimeInstant + Default> TimeSource<I> for NullClock {
    fn now(&self) -> I {
        I::default()
    }
}

// ============================================================================
// Output Types
// ============================================================================

struct NullOutput;

impl LightOutput for NullOutput {
    fn apply(&mut self, _color: Srgb) {}
}

// A strip driver carrying a typical amount of peripheral state
#[allow(dead_code)]
struct SpiStrip {
    spi: u32,
    buffer: [u8; 24],
}

impl SmartLedsWrite for SpiStrip {
    type Error = ();
    type Color = RGB8;

    fn write<T, I>(&mut self, _iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        Ok(())
    }
}

// ============================================================================
// Report
// ============================================================================

fn report<I, const N: usize>(label: &str)
where
    I: TimeInstant + Default,
{
    type Strip = StripOutput<SpiStrip, 60>;

    println!("{label}, N = {N}");
    println!("  Pattern          {:>5} bytes", size_of::<Pattern<I::Duration, N>>());
    println!("  Signal           {:>5} bytes", size_of::<Signal<I::Duration, N>>());
    println!(
        "  Candidate list   {:>5} bytes",
        size_of::<heapless::Vec<Signal<I::Duration, N>, MAX_STATUS_SIGNALS>>()
    );
    println!("  StatusSignals    {:>5} bytes", size_of::<StatusSignals<I::Duration, N>>());
    println!("  Engine           {:>5} bytes", size_of::<ArbitrationEngine<I, N>>());
    println!(
        "  Indicator (null) {:>5} bytes",
        size_of::<StatusIndicator<'static, I, NullOutput, NullClock, N>>()
    );
    println!(
        "  Indicator (SPI)  {:>5} bytes",
        size_of::<StatusIndicator<'static, I, Strip, NullClock, N>>()
    );
    println!();
}

fn main() {
    println!("signal-arbiter memory footprint");
    println!("===============================");
    println!();

    report::<Instant32, 4>("u32 milliseconds");
    report::<Instant32, 12>("u32 milliseconds");
    report::<Instant32, 24>("u32 milliseconds");
    report::<EmbassyInstant, 4>("embassy-time");
    report::<EmbassyInstant, 12>("embassy-time");
    report::<EmbassyInstant, 24>("embassy-time");
}
