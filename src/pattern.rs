use crate::time::TimeDuration;
use crate::types::PatternError;
use crate::COLOR_OFF;
use heapless::Vec;
use palette::Srgb;

/// A parameterized rule for computing a color from elapsed pattern time.
///
/// Patterns are pure: the same pattern and elapsed time always render the same
/// color. Elapsed time is measured from the moment the owning signal won
/// arbitration, so every pattern starts its phase at zero.
///
/// # Type Parameters
/// * `D` - The duration type (e.g., `embassy_time::Duration`)
/// * `N` - Maximum number of colors a cycling pattern can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern<D: TimeDuration, const N: usize> {
    /// A constant color.
    Solid(Srgb),

    /// `color` for the first half of each period, the off color for the second.
    Blink { color: Srgb, period: D },

    /// `first` for the first half of each period, `second` for the other half.
    Alternate { first: Srgb, second: Srgb, period: D },

    /// Steps through `colors` in order, holding each for `step`, wrapping forever.
    Cycle { colors: Vec<Srgb, N>, step: D },

    /// A `Cycle` gated by a `Blink` envelope of period `blink`.
    BlinkingCycle {
        colors: Vec<Srgb, N>,
        step: D,
        blink: D,
    },
}

impl<D: TimeDuration, const N: usize> Pattern<D, N> {
    /// Creates a solid pattern.
    #[inline]
    pub fn solid(color: Srgb) -> Self {
        Pattern::Solid(color)
    }

    /// Creates a blinking pattern with a 50% duty cycle.
    ///
    /// # Errors
    /// * `ZeroPeriod` - `period` is zero
    pub fn blink(color: Srgb, period: D) -> Result<Self, PatternError> {
        Self::checked(Pattern::Blink { color, period })
    }

    /// Creates a pattern alternating between two colors.
    ///
    /// # Errors
    /// * `ZeroPeriod` - `period` is zero
    pub fn alternate(first: Srgb, second: Srgb, period: D) -> Result<Self, PatternError> {
        Self::checked(Pattern::Alternate {
            first,
            second,
            period,
        })
    }

    /// Creates a color cycle from a slice of colors.
    ///
    /// # Errors
    /// * `EmptySequence` - `colors` is empty
    /// * `CapacityExceeded` - more than `N` colors
    /// * `ZeroPeriod` - `step` is zero
    pub fn cycle(colors: &[Srgb], step: D) -> Result<Self, PatternError> {
        let colors = Vec::from_slice(colors).map_err(|_| PatternError::CapacityExceeded)?;
        Self::checked(Pattern::Cycle { colors, step })
    }

    /// Creates a color cycle gated by a blink envelope.
    ///
    /// # Errors
    /// * `EmptySequence` - `colors` is empty
    /// * `CapacityExceeded` - more than `N` colors
    /// * `ZeroPeriod` - `step` or `blink` is zero
    pub fn blinking_cycle(colors: &[Srgb], step: D, blink: D) -> Result<Self, PatternError> {
        let colors = Vec::from_slice(colors).map_err(|_| PatternError::CapacityExceeded)?;
        Self::checked(Pattern::BlinkingCycle {
            colors,
            step,
            blink,
        })
    }

    fn checked(pattern: Self) -> Result<Self, PatternError> {
        pattern.validate()?;
        Ok(pattern)
    }

    /// Checks the pattern invariants: non-zero periods and non-empty sequences.
    ///
    /// Variants built directly (rather than through the constructors) are
    /// validated when they are wrapped in a [`Signal`](crate::Signal).
    pub fn validate(&self) -> Result<(), PatternError> {
        match self {
            Pattern::Solid(_) => Ok(()),
            Pattern::Blink { period, .. } | Pattern::Alternate { period, .. } => {
                non_zero(*period)
            }
            Pattern::Cycle { colors, step } => {
                non_empty(colors)?;
                non_zero(*step)
            }
            Pattern::BlinkingCycle {
                colors,
                step,
                blink,
            } => {
                non_empty(colors)?;
                non_zero(*step)?;
                non_zero(*blink)
            }
        }
    }

    /// Renders the pattern at `elapsed`, using black as the off color.
    #[inline]
    pub fn color_at(&self, elapsed: D) -> Srgb {
        self.color_at_with_off(elapsed, COLOR_OFF)
    }

    /// Renders the pattern at `elapsed`.
    ///
    /// `off` is shown during the dark half of `Blink` and `BlinkingCycle`.
    /// Never panics, even for patterns that would fail [`validate`](Self::validate).
    pub fn color_at_with_off(&self, elapsed: D, off: Srgb) -> Srgb {
        let elapsed = elapsed.as_millis();

        match self {
            Pattern::Solid(color) => *color,
            Pattern::Blink { color, period } => {
                if is_first_half(elapsed, period.as_millis()) {
                    *color
                } else {
                    off
                }
            }
            Pattern::Alternate {
                first,
                second,
                period,
            } => {
                if is_first_half(elapsed, period.as_millis()) {
                    *first
                } else {
                    *second
                }
            }
            Pattern::Cycle { colors, step } => cycle_color(colors, elapsed, step.as_millis(), off),
            Pattern::BlinkingCycle {
                colors,
                step,
                blink,
            } => {
                if is_first_half(elapsed, blink.as_millis()) {
                    cycle_color(colors, elapsed, step.as_millis(), off)
                } else {
                    off
                }
            }
        }
    }

    /// Returns the time until the rendered color may next change.
    ///
    /// `None` means the output is constant (solid colors, single-color cycles).
    /// Hosts that do not tick at a fixed rate can use this as a sleep hint.
    pub fn next_change(&self, elapsed: D) -> Option<D> {
        let elapsed = elapsed.as_millis();

        let millis = match self {
            Pattern::Solid(_) => None,
            Pattern::Blink { period, .. } | Pattern::Alternate { period, .. } => {
                half_boundary(elapsed, period.as_millis())
            }
            Pattern::Cycle { colors, step } => step_boundary(colors, elapsed, step.as_millis()),
            Pattern::BlinkingCycle {
                colors,
                step,
                blink,
            } => {
                let envelope = half_boundary(elapsed, blink.as_millis());
                let step = step_boundary(colors, elapsed, step.as_millis());
                match (envelope, step) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                }
            }
        };

        millis.map(D::from_millis)
    }

    /// Returns the color sequence for cycling patterns.
    pub fn colors(&self) -> Option<&[Srgb]> {
        match self {
            Pattern::Cycle { colors, .. } | Pattern::BlinkingCycle { colors, .. } => {
                Some(colors.as_slice())
            }
            _ => None,
        }
    }
}

fn non_zero<D: TimeDuration>(period: D) -> Result<(), PatternError> {
    if period.as_millis() == 0 {
        Err(PatternError::ZeroPeriod)
    } else {
        Ok(())
    }
}

fn non_empty(colors: &[Srgb]) -> Result<(), PatternError> {
    if colors.is_empty() {
        Err(PatternError::EmptySequence)
    } else {
        Ok(())
    }
}

/// True while `elapsed mod period` is in the first half of the period.
///
/// For odd periods the first half gets the extra millisecond.
fn is_first_half(elapsed: u64, period: u64) -> bool {
    if period == 0 {
        return true;
    }
    let phase = elapsed % period;
    phase < period - period / 2
}

/// Index formula: `colors[floor(elapsed / step) mod len]`.
fn cycle_color(colors: &[Srgb], elapsed: u64, step: u64, off: Srgb) -> Srgb {
    if colors.is_empty() {
        return off;
    }
    let steps = elapsed.checked_div(step).unwrap_or(0);
    let index = (steps % colors.len() as u64) as usize;
    colors[index]
}

fn half_boundary(elapsed: u64, period: u64) -> Option<u64> {
    if period == 0 {
        return None;
    }
    let phase = elapsed % period;
    let on = period - period / 2;
    if phase < on {
        Some(on - phase)
    } else {
        Some(period - phase)
    }
}

fn step_boundary(colors: &[Srgb], elapsed: u64, step: u64) -> Option<u64> {
    if colors.len() < 2 || step == 0 {
        return None;
    }
    Some(step - elapsed % step)
}
