//! Robot status predicates mapped to candidate signals.
//!
//! This is the condition-detection layer that sits in front of the engine.
//! [`StatusSignals`] builds every signal the robot can show once, up front,
//! and each tick hands back the ones whose conditions hold in the supplied
//! [`RobotStatus`]. The engine then decides which of them is visible.

use crate::colors::{self, BLACK, BLUE, GREEN, PINK, RED, WHITE, YELLOW};
use crate::pattern::Pattern;
use crate::signal::Signal;
use crate::time::TimeDuration;
use crate::types::{PatternError, Priority, SignalId};
use heapless::Vec;

/// Upper bound on signals offered in a single tick.
pub const MAX_STATUS_SIGNALS: usize = 8;

pub const ERROR: SignalId = SignalId("error");
pub const SHIFT_FINAL_SECOND: SignalId = SignalId("shift-final-second");
pub const SHIFT_WARNING: SignalId = SignalId("shift-warning");
pub const ENDGAME_WARNING: SignalId = SignalId("endgame-warning");
pub const CLIMBING: SignalId = SignalId("climbing");
pub const CLIMBED: SignalId = SignalId("climbed");
pub const ENDGAME: SignalId = SignalId("endgame");
pub const ALIGNED: SignalId = SignalId("aligned");
pub const AUTONOMOUS: SignalId = SignalId("autonomous");
pub const MODE_ACTIVE: SignalId = SignalId("mode-active");
pub const MODE_INACTIVE: SignalId = SignalId("mode-inactive");

/// How a fault is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorDisplay {
    /// Blinking red.
    Blink,
    /// Solid red.
    Solid,
}

/// Snapshot of the robot state for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RobotStatus {
    /// Robot is enabled. While disabled only faults are shown.
    pub enabled: bool,
    /// Autonomous period.
    pub autonomous: bool,
    /// Our side is the active one in the current shift.
    pub active: bool,
    pub climbing: bool,
    pub climbed: bool,
    /// Aligned to the hub.
    pub aligned: bool,
    /// Seconds left in the current match period, if a match timer is running.
    pub match_time_remaining: Option<f32>,
    pub error: Option<ErrorDisplay>,
}

/// Match timing and pattern speeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSchedule<D> {
    /// Match times (seconds remaining) at which the active side switches.
    pub shift_changes: &'static [f32],
    /// Match time at which endgame begins.
    pub endgame_start: f32,
    /// Seconds of warning before a shift change or endgame.
    pub warning_window: f32,
    /// Final part of the warning window shown as solid red.
    pub final_window: f32,
    pub blink_period: D,
    pub alternate_period: D,
    pub cycle_step: D,
}

impl<D: TimeDuration> MatchSchedule<D> {
    pub fn with_shift_changes(mut self, shift_changes: &'static [f32]) -> Self {
        self.shift_changes = shift_changes;
        self
    }

    pub fn with_endgame_start(mut self, seconds: f32) -> Self {
        self.endgame_start = seconds;
        self
    }

    pub fn with_warning_window(mut self, seconds: f32) -> Self {
        self.warning_window = seconds;
        self
    }

    pub fn with_final_window(mut self, seconds: f32) -> Self {
        self.final_window = seconds;
        self
    }

    pub fn with_blink_period(mut self, period: D) -> Self {
        self.blink_period = period;
        self
    }

    pub fn with_alternate_period(mut self, period: D) -> Self {
        self.alternate_period = period;
        self
    }

    pub fn with_cycle_step(mut self, step: D) -> Self {
        self.cycle_step = step;
        self
    }

    /// Seconds until the next shift change, if one is inside the warning window.
    fn shift_countdown(&self, remaining: f32) -> Option<f32> {
        self.shift_changes
            .iter()
            .map(|change| remaining - change)
            .find(|left| *left > 0.0 && *left <= self.warning_window)
    }

    fn endgame_countdown(&self, remaining: f32) -> Option<f32> {
        let left = remaining - self.endgame_start;
        (left > 0.0 && left <= self.warning_window).then_some(left)
    }

    fn in_endgame(&self, remaining: f32) -> bool {
        remaining > 0.0 && remaining <= self.endgame_start
    }
}

impl<D: TimeDuration> Default for MatchSchedule<D> {
    fn default() -> Self {
        Self {
            shift_changes: &[130.0, 105.0, 80.0, 55.0],
            endgame_start: 30.0,
            warning_window: 5.0,
            final_window: 1.0,
            blink_period: D::from_millis(500),
            alternate_period: D::from_millis(500),
            cycle_step: D::from_millis(100),
        }
    }
}

/// Prebuilt robot signals, offered per tick according to [`RobotStatus`].
///
/// Cycling patterns use `N` colors, so `N` also sets the rainbow resolution.
#[derive(Debug, Clone)]
pub struct StatusSignals<D: TimeDuration, const N: usize> {
    schedule: MatchSchedule<D>,
    error_blink: Signal<D, N>,
    error_solid: Signal<D, N>,
    shift_final: Signal<D, N>,
    shift_warning: Signal<D, N>,
    endgame_warning: Signal<D, N>,
    climbing: Signal<D, N>,
    climbed: Signal<D, N>,
    endgame: Signal<D, N>,
    aligned: Signal<D, N>,
    autonomous: Signal<D, N>,
    mode_active: Signal<D, N>,
    mode_inactive: Signal<D, N>,
}

impl<D: TimeDuration, const N: usize> StatusSignals<D, N> {
    /// Builds all signals for `schedule`.
    ///
    /// # Errors
    /// * `ZeroPeriod` - a schedule period is zero
    /// * `EmptySequence` - `N` is zero, so cycles have no colors
    pub fn new(schedule: MatchSchedule<D>) -> Result<Self, PatternError> {
        let blink = schedule.blink_period;
        let alternate = schedule.alternate_period;
        let step = schedule.cycle_step;
        let rainbow = colors::rainbow::<N>();

        Ok(Self {
            error_blink: Signal::new(ERROR, Priority::ERROR, Pattern::blink(RED, blink)?)?,
            error_solid: Signal::new(ERROR, Priority::ERROR, Pattern::solid(RED))?,
            shift_final: Signal::new(
                SHIFT_FINAL_SECOND,
                Priority::SHIFT_WARNING,
                Pattern::solid(RED),
            )?,
            shift_warning: Signal::new(
                SHIFT_WARNING,
                Priority::SHIFT_WARNING,
                Pattern::blink(PINK, blink)?,
            )?,
            endgame_warning: Signal::new(
                ENDGAME_WARNING,
                Priority::SHIFT_WARNING,
                Pattern::alternate(BLACK, WHITE, alternate)?,
            )?,
            climbing: Signal::new(
                CLIMBING,
                Priority::CLIMB,
                Pattern::blinking_cycle(&rainbow, step, blink)?,
            )?,
            climbed: Signal::new(CLIMBED, Priority::CLIMB, Pattern::cycle(&rainbow, step)?)?,
            endgame: Signal::new(ENDGAME, Priority::ENDGAME, Pattern::solid(BLUE))?,
            aligned: Signal::new(ALIGNED, Priority::ALIGNED, Pattern::solid(GREEN))?,
            autonomous: Signal::new(
                AUTONOMOUS,
                Priority::MODE,
                Pattern::cycle(&colors::flame::<N>(), step)?,
            )?,
            mode_active: Signal::new(
                MODE_ACTIVE,
                Priority::MODE,
                Pattern::alternate(YELLOW, BLACK, alternate)?,
            )?,
            mode_inactive: Signal::new(
                MODE_INACTIVE,
                Priority::MODE,
                Pattern::alternate(RED, BLUE, alternate)?,
            )?,
            schedule,
        })
    }

    pub fn schedule(&self) -> &MatchSchedule<D> {
        &self.schedule
    }

    /// Returns the signals whose conditions hold for `status`, highest
    /// priority first.
    ///
    /// If more than `M` apply, the lowest-priority ones are left out.
    pub fn candidates<const M: usize>(&self, status: &RobotStatus) -> Vec<Signal<D, N>, M> {
        let mut offered = Vec::new();

        for signal in self.matching(status).into_iter().flatten() {
            if offered.push(signal.clone()).is_err() {
                #[cfg(feature = "defmt")]
                defmt::warn!("candidate list full, dropping signal {}", signal.id());
                break;
            }
        }

        offered
    }

    fn matching(&self, status: &RobotStatus) -> [Option<&Signal<D, N>>; 6] {
        let error = status.error.map(|display| match display {
            ErrorDisplay::Blink => &self.error_blink,
            ErrorDisplay::Solid => &self.error_solid,
        });

        if !status.enabled {
            return [error, None, None, None, None, None];
        }

        let teleop_time = status
            .match_time_remaining
            .filter(|_| !status.autonomous);

        let warning = teleop_time.and_then(|remaining| {
            if let Some(left) = self.schedule.shift_countdown(remaining) {
                if left <= self.schedule.final_window {
                    Some(&self.shift_final)
                } else {
                    Some(&self.shift_warning)
                }
            } else if self.schedule.endgame_countdown(remaining).is_some() {
                Some(&self.endgame_warning)
            } else {
                None
            }
        });

        let climb = if status.climbed {
            Some(&self.climbed)
        } else if status.climbing {
            Some(&self.climbing)
        } else {
            None
        };

        let endgame = teleop_time
            .filter(|remaining| self.schedule.in_endgame(*remaining))
            .map(|_| &self.endgame);

        let aligned = status.aligned.then_some(&self.aligned);

        let mode = if status.autonomous {
            &self.autonomous
        } else if status.active {
            &self.mode_active
        } else {
            &self.mode_inactive
        };

        [error, warning, climb, endgame, aligned, Some(mode)]
    }
}
