//! Validated per-gear speed bands.

use crate::config::error::ConfigError;
use crate::core::{Gear, GEAR_COUNT};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Number of integers in a flat limit list: one lower/upper pair per gear.
pub const LIMIT_COUNT: usize = GEAR_COUNT * 2;

/// Inclusive speed range a gear is meant to be driven in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeedBand {
    pub lower: i32,
    pub upper: i32,
}

impl SpeedBand {
    pub fn new(lower: i32, upper: i32) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, speed: i32) -> bool {
        (self.lower..=self.upper).contains(&speed)
    }
}

/// Speed bands for every gear, checked to be well formed.
///
/// Each band satisfies `lower <= upper` and starts strictly above the
/// previous gear's upper limit. Bands may touch (`lower == previous + 1`)
/// or leave a gap.
///
/// # Example
///
/// ```rust
/// use gearbox::{Gear, GearBands};
///
/// let bands = GearBands::new(&[0, 10, 11, 20, 21, 30, 31, 40, 41, 50]).unwrap();
/// assert_eq!(bands.upper(Gear::FIRST), 10);
/// assert_eq!(bands.lower(Gear::TOP), 41);
///
/// assert!(GearBands::new(&[0, 10, 5, 20, 21, 30, 31, 40, 41, 50]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SpeedBand>", into = "Vec<SpeedBand>")]
pub struct GearBands {
    bands: [SpeedBand; GEAR_COUNT],
}

impl GearBands {
    /// Validate a flat `l1, h1, l2, h2, ..., l5, h5` list.
    ///
    /// Stops at the first problem: the count is checked first, then each
    /// gear from first to top, its own band before its ordering against
    /// the gear below.
    pub fn new(limits: &[i32]) -> Result<Self, ConfigError> {
        check_count(limits)?;

        let mut bands = [SpeedBand::default(); GEAR_COUNT];
        for (gear, pair) in Gear::all().zip(limits.chunks_exact(2)) {
            let band = SpeedBand::new(pair[0], pair[1]);
            check_band(gear, band)?;
            if let Some(previous) = gear.previous() {
                check_order(previous, bands[previous.index()], gear, band)?;
            }
            bands[gear.index()] = band;
        }

        Ok(Self { bands })
    }

    /// Check a flat limit list and report every problem at once.
    ///
    /// A wrong count is reported alone since the pairs cannot be lined up
    /// with gears.
    pub fn audit(limits: &[i32]) -> Validation<(), NonEmptyVec<ConfigError>> {
        if let Err(err) = check_count(limits) {
            return Validation::fail(err);
        }

        let bands: Vec<SpeedBand> = limits
            .chunks_exact(2)
            .map(|pair| SpeedBand::new(pair[0], pair[1]))
            .collect();

        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();
        for (gear, band) in Gear::all().zip(bands.iter().copied()) {
            checks.push(into_validation(check_band(gear, band)));
            if let Some(previous) = gear.previous() {
                checks.push(into_validation(check_order(
                    previous,
                    bands[previous.index()],
                    gear,
                    band,
                )));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    pub fn band(&self, gear: Gear) -> SpeedBand {
        self.bands[gear.index()]
    }

    pub fn lower(&self, gear: Gear) -> i32 {
        self.band(gear).lower
    }

    pub fn upper(&self, gear: Gear) -> i32 {
        self.band(gear).upper
    }

    /// Bands from first gear to top.
    pub fn iter(&self) -> impl Iterator<Item = (Gear, SpeedBand)> + '_ {
        Gear::all().zip(self.bands.iter().copied())
    }

    /// The flat limit list these bands were built from.
    pub fn limits(&self) -> [i32; LIMIT_COUNT] {
        let mut limits = [0; LIMIT_COUNT];
        for (gear, band) in self.iter() {
            limits[2 * gear.index()] = band.lower;
            limits[2 * gear.index() + 1] = band.upper;
        }
        limits
    }

    /// Every speed a transmission on these bands can ever hold.
    ///
    /// Speed starts at zero, only increases while below some gear's upper
    /// limit and only decreases while above some gear's lower limit.
    pub fn envelope(&self) -> RangeInclusive<i32> {
        let floor = self.lower(Gear::FIRST).min(0);
        let ceiling = self.upper(Gear::TOP).max(0);
        floor..=ceiling
    }

    /// Every speed a transmission on these bands can hold while in `gear`.
    ///
    /// A gear is entered from below at or above the lower gear's upper
    /// limit, and from above at or below the higher gear's lower limit.
    /// First gear also holds the starting speed of zero, which an upshift
    /// carries along when it lies above the lower gears' bands.
    pub fn reachable(&self, gear: Gear) -> RangeInclusive<i32> {
        let floor = match gear.previous() {
            Some(previous) => self.lower(gear).min(self.upper(previous)),
            None => self.lower(gear).min(0),
        };
        let ceiling = match gear.next() {
            Some(next) => self.upper(gear).max(self.lower(next)),
            None => self.upper(gear),
        };
        floor..=ceiling.max(0)
    }
}

impl TryFrom<Vec<SpeedBand>> for GearBands {
    type Error = ConfigError;

    fn try_from(bands: Vec<SpeedBand>) -> Result<Self, Self::Error> {
        let limits: Vec<i32> = bands
            .iter()
            .flat_map(|band| [band.lower, band.upper])
            .collect();
        Self::new(&limits)
    }
}

impl From<GearBands> for Vec<SpeedBand> {
    fn from(bands: GearBands) -> Self {
        bands.bands.to_vec()
    }
}

fn check_count(limits: &[i32]) -> Result<(), ConfigError> {
    if limits.len() == LIMIT_COUNT {
        Ok(())
    } else {
        Err(ConfigError::WrongArgumentCount {
            expected: LIMIT_COUNT,
            found: limits.len(),
        })
    }
}

fn check_band(gear: Gear, band: SpeedBand) -> Result<(), ConfigError> {
    if band.lower <= band.upper {
        Ok(())
    } else {
        Err(ConfigError::InvertedBand {
            gear: gear.number(),
            lower: band.lower,
            upper: band.upper,
        })
    }
}

fn check_order(
    previous: Gear,
    previous_band: SpeedBand,
    gear: Gear,
    band: SpeedBand,
) -> Result<(), ConfigError> {
    if band.lower > previous_band.upper {
        Ok(())
    } else {
        Err(ConfigError::OverlappingBands {
            gear: gear.number(),
            lower: band.lower,
            previous: previous.number(),
            previous_upper: previous_band.upper,
        })
    }
}

fn into_validation(check: Result<(), ConfigError>) -> Validation<(), NonEmptyVec<ConfigError>> {
    match check {
        Ok(()) => Validation::success(()),
        Err(err) => Validation::fail(err),
    }
}
