//! Time-of-flight distance sensor wrapper.
//!
//! Not part of the arbitration path. The robot program samples it once per
//! tick and typically turns the result into a predicate (e.g. "aligned").

/// Distance reported when no measurement is available.
pub const NO_MEASUREMENT: f32 = 0.0;

/// Trait for abstracting the ranging hardware.
pub trait RangeFinder {
    /// Returns the latest raw distance in millimetres, or `None` if the
    /// device has no valid measurement.
    fn measurement_mm(&mut self) -> Option<u32>;
}

/// One distance sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DistanceSample {
    pub valid: bool,
    /// Corrected distance, or [`NO_MEASUREMENT`] when invalid.
    pub distance_meters: f32,
}

impl DistanceSample {
    pub const INVALID: DistanceSample = DistanceSample {
        valid: false,
        distance_meters: NO_MEASUREMENT,
    };

    /// Returns the distance if the sample is valid.
    pub fn distance(&self) -> Option<f32> {
        self.valid.then_some(self.distance_meters)
    }
}

/// Applies a fixed calibration offset to a range finder's readings.
///
/// A sensor whose device failed to configure is built with
/// [`DistanceSensor::unavailable`] and keeps reporting invalid samples rather
/// than failing.
#[derive(Debug)]
pub struct DistanceSensor<R> {
    device: Option<R>,
    correction_meters: f32,
    last: DistanceSample,
}

impl<R: RangeFinder> DistanceSensor<R> {
    /// Wraps `device`, adding `correction_meters` to every valid reading.
    pub fn new(device: R, correction_meters: f32) -> Self {
        Self {
            device: Some(device),
            correction_meters,
            last: DistanceSample::INVALID,
        }
    }

    /// A sensor with no device attached.
    pub fn unavailable(correction_meters: f32) -> Self {
        #[cfg(feature = "defmt")]
        defmt::warn!("distance sensor unavailable, samples will be invalid");

        Self {
            device: None,
            correction_meters,
            last: DistanceSample::INVALID,
        }
    }

    /// Reads the device and returns the corrected sample.
    ///
    /// A raw reading of zero is treated as no measurement.
    pub fn sample(&mut self) -> DistanceSample {
        let raw = self
            .device
            .as_mut()
            .and_then(|device| device.measurement_mm())
            .filter(|mm| *mm != 0);

        self.last = match raw {
            Some(mm) => DistanceSample {
                valid: true,
                distance_meters: mm as f32 / 1000.0 + self.correction_meters,
            },
            None => DistanceSample::INVALID,
        };

        self.last
    }

    /// Returns the most recent sample without reading the device.
    pub fn last_sample(&self) -> DistanceSample {
        self.last
    }

    pub fn is_available(&self) -> bool {
        self.device.is_some()
    }
}
