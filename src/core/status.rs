//! Status reported after every transmission command.
//!
//! The status is the transmission's only feedback channel once it has been
//! built: rejected commands never fail, they leave a rejection status
//! behind. The message texts are matched verbatim by consumers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of the most recently attempted command.
///
/// `Display` renders the exact message text.
///
/// # Example
///
/// ```rust
/// use gearbox::Status;
///
/// assert_eq!(Status::Ok.to_string(), "OK: everything is OK.");
/// assert!(Status::MaxGearReached.is_rejection());
/// assert!(Status::MayIncreaseGear.is_advisory());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Ok,
    MayIncreaseGear,
    MayDecreaseGear,
    MaxSpeedReached,
    IncreaseGearFirst,
    MinSpeedReached,
    DecreaseGearFirst,
    MaxGearReached,
    IncreaseSpeedFirst,
    MinGearReached,
    DecreaseSpeedFirst,
}

impl Status {
    /// Message text shown to the driver.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Ok => "OK: everything is OK.",
            Self::MayIncreaseGear => "OK: you may increase the gear.",
            Self::MayDecreaseGear => "OK: you may decrease the gear.",
            Self::MaxSpeedReached => "Cannot increase speed. Reached maximum speed.",
            Self::IncreaseGearFirst => "Cannot increase speed, increase gear first.",
            Self::MinSpeedReached => "Cannot decrease speed. Reached minimum speed.",
            Self::DecreaseGearFirst => "Cannot decrease speed, decrease gear first.",
            Self::MaxGearReached => "Cannot increase gear. Reached maximum gear.",
            Self::IncreaseSpeedFirst => "Cannot increase gear, increase speed first.",
            Self::MinGearReached => "Cannot decrease gear. Reached minimum gear.",
            Self::DecreaseSpeedFirst => "Cannot decrease gear, decrease speed first.",
        }
    }

    /// Variant name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ok => "Ok",
            Self::MayIncreaseGear => "MayIncreaseGear",
            Self::MayDecreaseGear => "MayDecreaseGear",
            Self::MaxSpeedReached => "MaxSpeedReached",
            Self::IncreaseGearFirst => "IncreaseGearFirst",
            Self::MinSpeedReached => "MinSpeedReached",
            Self::DecreaseGearFirst => "DecreaseGearFirst",
            Self::MaxGearReached => "MaxGearReached",
            Self::IncreaseSpeedFirst => "IncreaseSpeedFirst",
            Self::MinGearReached => "MinGearReached",
            Self::DecreaseSpeedFirst => "DecreaseSpeedFirst",
        }
    }

    /// True when the command that produced this status was not applied.
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            Self::Ok | Self::MayIncreaseGear | Self::MayDecreaseGear
        )
    }

    /// True for the "you may change gear" hints.
    pub fn is_advisory(&self) -> bool {
        matches!(self, Self::MayIncreaseGear | Self::MayDecreaseGear)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
