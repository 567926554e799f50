//! The transmission state machine.

use super::command::Command;
use super::gear::Gear;
use super::history::{Reading, ShiftRecord};
use super::status::Status;
use crate::config::{ConfigError, GearBands};
use chrono::Utc;

/// A five-speed manual transmission.
///
/// Tracks speed and gear within a fixed table of per-gear speed bands.
/// Every mutating call records its outcome in [`Transmission::status`];
/// none of them fail. A rejected command leaves speed and gear untouched.
///
/// Mutators return `&mut Self` so commands chain:
///
/// ```rust
/// use gearbox::{Status, Transmission};
///
/// let mut transmission =
///     Transmission::new(&[0, 2, 3, 5, 6, 8, 9, 11, 12, 14]).unwrap();
///
/// transmission.increase_speed().increase_speed().increase_gear();
/// assert_eq!(transmission.gear().number(), 2);
/// assert_eq!(transmission.speed(), 2);
///
/// transmission.decrease_speed();
/// assert_eq!(transmission.status(), Status::DecreaseGearFirst);
/// assert_eq!(transmission.speed(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transmission {
    bands: GearBands,
    speed: i32,
    gear: Gear,
    status: Status,
}

impl Transmission {
    /// Build a transmission from a flat `l1, h1, ..., l5, h5` limit list.
    ///
    /// Starts in first gear at speed 0 with [`Status::Ok`].
    pub fn new(limits: &[i32]) -> Result<Self, ConfigError> {
        GearBands::new(limits).map(Self::from_bands)
    }

    /// Build a transmission from an already validated band table.
    pub fn from_bands(bands: GearBands) -> Self {
        Self {
            bands,
            speed: 0,
            gear: Gear::FIRST,
            status: Status::Ok,
        }
    }

    /// Reassemble a transmission from saved parts.
    ///
    /// Callers check the parts are reachable; see the checkpoint module.
    pub(crate) fn from_parts(bands: GearBands, speed: i32, gear: Gear, status: Status) -> Self {
        Self {
            bands,
            speed,
            gear,
            status,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn gear(&self) -> Gear {
        self.gear
    }

    pub fn bands(&self) -> &GearBands {
        &self.bands
    }

    /// Current speed and gear together.
    pub fn reading(&self) -> Reading {
        Reading {
            speed: self.speed,
            gear: self.gear,
        }
    }

    pub fn increase_speed(&mut self) -> &mut Self {
        let upper = self.bands.upper(self.gear);
        if self.gear.is_top() && self.speed >= upper {
            self.reject(Status::MaxSpeedReached);
        } else if self.speed < upper {
            self.speed += 1;
            self.status = self.speed_change_status();
            log::trace!("speed increased to {} in gear {}", self.speed, self.gear);
        } else {
            self.reject(Status::IncreaseGearFirst);
        }
        self
    }

    pub fn decrease_speed(&mut self) -> &mut Self {
        let lower = self.bands.lower(self.gear);
        if self.gear.is_first() && self.speed <= lower {
            self.reject(Status::MinSpeedReached);
        } else if self.speed > lower {
            self.speed -= 1;
            self.status = self.speed_change_status();
            log::trace!("speed decreased to {} in gear {}", self.speed, self.gear);
        } else {
            self.reject(Status::DecreaseGearFirst);
        }
        self
    }

    pub fn increase_gear(&mut self) -> &mut Self {
        match self.gear.next() {
            None => self.reject(Status::MaxGearReached),
            Some(_) if self.speed < self.bands.upper(self.gear) => {
                self.reject(Status::IncreaseSpeedFirst)
            }
            Some(next) => {
                self.gear = next;
                self.status = self.gear_change_status();
                log::trace!("shifted up to gear {} at speed {}", self.gear, self.speed);
            }
        }
        self
    }

    pub fn decrease_gear(&mut self) -> &mut Self {
        match self.gear.previous() {
            None => self.reject(Status::MinGearReached),
            Some(_) if self.speed > self.bands.lower(self.gear) => {
                self.reject(Status::DecreaseSpeedFirst)
            }
            Some(previous) => {
                self.gear = previous;
                self.status = self.gear_change_status();
                log::trace!("shifted down to gear {} at speed {}", self.gear, self.speed);
            }
        }
        self
    }

    /// Run one of the four mutators by value.
    pub fn apply(&mut self, command: Command) -> &mut Self {
        match command {
            Command::IncreaseSpeed => self.increase_speed(),
            Command::DecreaseSpeed => self.decrease_speed(),
            Command::IncreaseGear => self.increase_gear(),
            Command::DecreaseGear => self.decrease_gear(),
        }
    }

    /// Apply a command and describe what it did.
    pub fn execute(&mut self, command: Command) -> ShiftRecord {
        let from = self.reading();
        self.apply(command);
        ShiftRecord {
            command,
            from,
            to: self.reading(),
            status: self.status,
            timestamp: Utc::now(),
        }
    }

    fn reject(&mut self, status: Status) {
        log::debug!(
            "rejected at speed {} in gear {}: {}",
            self.speed,
            self.gear,
            status.name()
        );
        self.status = status;
    }

    // Falls back to Ok when the speed sits outside every band it is
    // compared against, which happens right after an upshift into a band
    // that starts above the shift point.
    fn speed_change_status(&self) -> Status {
        let band = self.bands.band(self.gear);
        if band.contains(self.speed) {
            Status::Ok
        } else if self
            .gear
            .next()
            .is_some_and(|next| self.speed == self.bands.upper(next))
        {
            Status::MayIncreaseGear
        } else if self
            .gear
            .previous()
            .is_some_and(|previous| self.speed == self.bands.lower(previous))
        {
            Status::MayDecreaseGear
        } else {
            Status::Ok
        }
    }

    fn gear_change_status(&self) -> Status {
        let band = self.bands.band(self.gear);
        if band.contains(self.speed) {
            Status::Ok
        } else if !self.gear.is_top() && self.speed == band.upper {
            Status::MayIncreaseGear
        } else if !self.gear.is_first() && self.speed == band.lower {
            Status::MayDecreaseGear
        } else {
            Status::Ok
        }
    }
}
