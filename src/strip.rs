//! Light output sinks.
//!
//! [`LightOutput`] is what the indicator writes resolved colors to. It cannot
//! fail: sinks deal with their own hardware errors so a bad write never stops
//! the control loop. [`StripOutput`] adapts any `smart-leds` driver and fills
//! the whole strip with one color.

use palette::Srgb;
use smart_leds::{RGB8, SmartLedsWrite};

/// Trait for abstracting the physical light output.
pub trait LightOutput {
    /// Shows `color` on the output.
    ///
    /// Color components are in the range 0.0-1.0. Implementations convert to
    /// their native format and swallow hardware errors. A failed write leaves
    /// the previous frame latched until the next tick writes again.
    fn apply(&mut self, color: Srgb);
}

/// Converts a 0.0-1.0 color to 8-bit wire format, scaled by `brightness`.
pub fn to_rgb8(color: Srgb, brightness: u8) -> RGB8 {
    let color: Srgb<u8> = color.into_format();
    RGB8::new(
        scale8(color.red, brightness),
        scale8(color.green, brightness),
        scale8(color.blue, brightness),
    )
}

#[inline]
fn scale8(value: u8, scale: u8) -> u8 {
    ((u16::from(value) * (u16::from(scale) + 1)) >> 8) as u8
}

/// A strip of `LEN` identical cells driven by a `smart-leds` writer.
pub struct StripOutput<W, const LEN: usize> {
    writer: W,
    brightness: u8,
    dropped_frames: u32,
}

impl<W, const LEN: usize> StripOutput<W, LEN>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    /// Wraps a driver at full brightness.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            brightness: u8::MAX,
            dropped_frames: 0,
        }
    }

    /// Sets a global brightness applied to every frame.
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Number of frames the driver rejected.
    pub fn dropped_frames(&self) -> u32 {
        self.dropped_frames
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const LEN: usize> LightOutput for StripOutput<W, LEN>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn apply(&mut self, color: Srgb) {
        let cell = to_rgb8(color, self.brightness);

        if self.writer.write([cell; LEN]).is_err() {
            self.dropped_frames = self.dropped_frames.saturating_add(1);

            #[cfg(feature = "defmt")]
            defmt::warn!(
                "light strip write failed, frame dropped ({} total)",
                self.dropped_frames
            );
        }
    }
}
