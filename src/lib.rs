#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Pattern`**: A timed color rule (`Solid`, `Blink`, `Alternate`, `Cycle`, `BlinkingCycle`)
//! - **`Signal`**: A validated pattern tagged with a `Priority` and a stable `SignalId`
//! - **`ArbitrationEngine`**: Picks one winning signal per tick and keeps its phase continuous
//! - **`StatusIndicator`**: Drives one light group from an engine, a clock and an output
//! - **`LightOutput`**: Trait to implement for your light hardware (`StripOutput` wraps `smart-leds` drivers)
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`StatusSignals`**: Maps a `RobotStatus` snapshot to the candidate signals for a tick
//! - **`DistanceSensor`**: Calibrated wrapper around a `RangeFinder`
//!
//! The library uses `Srgb<f32>` (0.0-1.0 range) for all color operations.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod arbiter;
pub mod colors;
pub mod distance;
pub mod indicator;
pub mod pattern;
pub mod signal;
pub mod status;
pub mod strip;
pub mod time;
pub mod types;

pub use arbiter::{ArbitrationConfig, ArbitrationEngine, ArbitrationState};
pub use colors::{BLACK, BLUE, CYAN, GREEN, ORANGE, PINK, PURPLE, RED, WHITE, YELLOW};
pub use distance::{DistanceSample, DistanceSensor, RangeFinder};
pub use indicator::StatusIndicator;
pub use pattern::Pattern;
pub use signal::Signal;
pub use status::{ErrorDisplay, MatchSchedule, RobotStatus, StatusSignals};
pub use strip::{LightOutput, StripOutput};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{PatternError, Priority, SignalId};

pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);
