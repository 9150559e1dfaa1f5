//! Shared test infrastructure for signal-arbiter integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use signal_arbiter::{
    LightOutput, Pattern, Priority, Signal, TimeDuration, TimeInstant, TimeSource,
};
use smart_leds::{RGB8, SmartLedsWrite};

/// Color capacity used by the test signals
pub const N: usize = 8;

pub type TestSignal = Signal<TestDuration, N>;
pub type TestPattern = Pattern<TestDuration, N>;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing (milliseconds since boot)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Outputs
// ============================================================================

/// Longest run of writes a single test records
pub const HISTORY_CAPACITY: usize = 256;

/// Mock output that records every color written to it
pub struct MockOutput {
    history: heapless::Vec<Srgb, HISTORY_CAPACITY>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
        }
    }

    pub fn last_color(&self) -> Option<Srgb> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[Srgb] {
        &self.history
    }
}

impl LightOutput for MockOutput {
    fn apply(&mut self, color: Srgb) {
        assert!(
            self.history.push(color).is_ok(),
            "MockOutput history is full, raise HISTORY_CAPACITY"
        );
    }
}

/// Mock `smart-leds` driver that can be told to reject writes
pub struct MockStrip {
    pub frames: heapless::Vec<heapless::Vec<RGB8, 16>, HISTORY_CAPACITY>,
    pub fail: bool,
}

impl MockStrip {
    pub fn new() -> Self {
        Self {
            frames: heapless::Vec::new(),
            fail: false,
        }
    }
}

#[derive(Debug)]
pub struct StripFault;

impl SmartLedsWrite for MockStrip {
    type Error = StripFault;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        if self.fail {
            return Err(StripFault);
        }
        let frame = iterator.into_iter().map(Into::into).collect();
        assert!(
            self.frames.push(frame).is_ok(),
            "MockStrip frame buffer is full, raise HISTORY_CAPACITY"
        );
        Ok(())
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use signal_arbiter::{BLACK, BLUE, GREEN, PINK, RED, WHITE, YELLOW};

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Builds a validated signal
pub fn signal(id: &'static str, priority: i32, pattern: TestPattern) -> TestSignal {
    Signal::new(id, Priority(priority), pattern).unwrap()
}

pub fn solid(id: &'static str, priority: i32, color: Srgb) -> TestSignal {
    signal(id, priority, Pattern::solid(color))
}

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}
