//! Named colors and color space helpers.
//!
//! All colors are `palette::Srgb<f32>` in the 0.0-1.0 range. HSV helpers are
//! used to build hue wheels for the rainbow and flame cycles.

use heapless::Vec;
use palette::{FromColor, Hsv, Srgb};

pub const BLACK: Srgb = Srgb::new(0.0, 0.0, 0.0);
pub const WHITE: Srgb = Srgb::new(1.0, 1.0, 1.0);
pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);
pub const GREEN: Srgb = Srgb::new(0.0, 1.0, 0.0);
pub const BLUE: Srgb = Srgb::new(0.0, 0.0, 1.0);
pub const YELLOW: Srgb = Srgb::new(1.0, 1.0, 0.0);
pub const ORANGE: Srgb = Srgb::new(1.0, 0.5, 0.0);
pub const PINK: Srgb = Srgb::new(1.0, 0.41, 0.71);
pub const PURPLE: Srgb = Srgb::new(0.5, 0.0, 1.0);
pub const CYAN: Srgb = Srgb::new(0.0, 1.0, 1.0);

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
///
/// Hue is in degrees (0.0-360.0), saturation and value in 0.0-1.0.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv)
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Srgb {
    hsv(hue, 1.0, 1.0)
}

/// Builds `N` fully saturated colors evenly spaced around the hue wheel,
/// starting at red.
pub fn rainbow<const N: usize>() -> Vec<Srgb, N> {
    let mut colors = Vec::new();
    for i in 0..N {
        let degrees = 360.0 * (i as f32) / (N as f32);
        // capacity is exactly N
        let _ = colors.push(hue(degrees));
    }
    colors
}

/// Builds `N` colors sweeping red -> orange -> yellow and back, for the
/// flickering autonomous-period cycle.
pub fn flame<const N: usize>() -> Vec<Srgb, N> {
    let mut colors = Vec::new();
    if N == 0 {
        return colors;
    }
    let half = (N as f32) / 2.0;
    for i in 0..N {
        let distance = if (i as f32) < half {
            i as f32
        } else {
            (N - i) as f32
        };
        let degrees = 60.0 * distance / half;
        let _ = colors.push(hue(degrees));
    }
    colors
}
