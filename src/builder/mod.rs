//! Builder API for ergonomic transmission construction.

use crate::config::{ConfigError, GearBands, SpeedBand, LIMIT_COUNT};
use crate::core::Transmission;

/// Builder for transmissions with a fluent API.
///
/// Bands are added in gear order, first gear first.
///
/// # Example
///
/// ```
/// use gearbox::builder::TransmissionBuilder;
///
/// let transmission = TransmissionBuilder::new()
///     .gear(0, 10)
///     .gear(11, 20)
///     .gear(21, 30)
///     .gear(31, 40)
///     .gear(41, 50)
///     .build()
///     .unwrap();
///
/// assert_eq!(transmission.bands().upper(gearbox::Gear::TOP), 50);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransmissionBuilder {
    limits: Vec<i32>,
}

impl TransmissionBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            limits: Vec::with_capacity(LIMIT_COUNT),
        }
    }

    /// Add the band for the next gear.
    pub fn gear(mut self, lower: i32, upper: i32) -> Self {
        self.limits.extend([lower, upper]);
        self
    }

    /// Add a pre-built band for the next gear.
    pub fn band(self, band: SpeedBand) -> Self {
        self.gear(band.lower, band.upper)
    }

    /// Add several bands at once.
    pub fn bands(mut self, bands: impl IntoIterator<Item = SpeedBand>) -> Self {
        for band in bands {
            self = self.band(band);
        }
        self
    }

    /// Validate the bands without building a transmission.
    pub fn build_bands(self) -> Result<GearBands, ConfigError> {
        GearBands::new(&self.limits)
    }

    /// Build the transmission.
    /// Returns an error unless exactly five well-ordered bands were added.
    pub fn build(self) -> Result<Transmission, ConfigError> {
        self.build_bands().map(Transmission::from_bands)
    }
}
