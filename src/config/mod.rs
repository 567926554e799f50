//! Transmission configuration.
//!
//! A configuration is just the gear band table. It can be given as a flat
//! limit list, assembled with [`TransmissionBuilder`](crate::builder::TransmissionBuilder),
//! or loaded from a JSON document:
//!
//! ```json
//! { "bands": [ { "lower": 0, "upper": 10 }, { "lower": 11, "upper": 20 }, ... ] }
//! ```

pub mod bands;
pub mod error;

pub use bands::{GearBands, SpeedBand, LIMIT_COUNT};
pub use error::ConfigError;

use crate::core::Transmission;
use serde::{Deserialize, Serialize};

/// Serializable transmission configuration.
///
/// Loading validates the bands, so a loaded configuration always builds.
/// A document that parses but describes bad bands fails with the same
/// [`ConfigError`] that [`GearBands::new`] would return.
///
/// # Example
///
/// ```rust
/// use gearbox::TransmissionConfig;
///
/// let config = TransmissionConfig::from_json(
///     r#"{"bands": [
///         {"lower": 0, "upper": 10},
///         {"lower": 11, "upper": 20},
///         {"lower": 21, "upper": 30},
///         {"lower": 31, "upper": 40},
///         {"lower": 41, "upper": 50}
///     ]}"#,
/// )
/// .unwrap();
///
/// let transmission = config.build();
/// assert_eq!(transmission.speed(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransmissionConfig {
    pub bands: GearBands,
}

/// Document shape before band validation.
#[derive(Deserialize)]
struct RawConfig {
    bands: Vec<SpeedBand>,
}

impl TransmissionConfig {
    pub fn new(bands: GearBands) -> Self {
        Self { bands }
    }

    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        let bands = GearBands::try_from(raw.bands)?;
        Ok(Self::new(bands))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// A fresh transmission on these bands.
    pub fn build(&self) -> Transmission {
        Transmission::from_bands(self.bands.clone())
    }
}
