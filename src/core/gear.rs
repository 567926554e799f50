//! Gear numbering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of forward gears in the transmission.
pub const GEAR_COUNT: usize = 5;

/// A forward gear, numbered `1..=GEAR_COUNT`.
///
/// The constructor is the only way to obtain a gear, so every value held
/// by a transmission is in range and can index the band table directly.
///
/// # Example
///
/// ```rust
/// use gearbox::Gear;
///
/// let second = Gear::FIRST.next().unwrap();
/// assert_eq!(second.number(), 2);
/// assert!(Gear::TOP.next().is_none());
/// assert!(Gear::new(6).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Gear(u8);

impl Gear {
    /// Lowest gear; every transmission starts here.
    pub const FIRST: Gear = Gear(1);

    /// Highest gear.
    pub const TOP: Gear = Gear(GEAR_COUNT as u8);

    /// Returns `None` unless `number` lies in `1..=GEAR_COUNT`.
    pub fn new(number: u8) -> Option<Self> {
        (1..=GEAR_COUNT as u8).contains(&number).then_some(Gear(number))
    }

    /// The gear number as shown to a driver, starting at 1.
    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based position in a band table.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    pub fn is_top(self) -> bool {
        self == Self::TOP
    }

    /// The gear above this one, if any.
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// The gear below this one, if any.
    pub fn previous(self) -> Option<Self> {
        Self::new(self.0.saturating_sub(1))
    }

    /// All gears from first to top.
    pub fn all() -> impl Iterator<Item = Gear> {
        (1..=GEAR_COUNT as u8).map(Gear)
    }
}

impl Default for Gear {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Gear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Gear> for u8 {
    fn from(gear: Gear) -> Self {
        gear.0
    }
}

impl TryFrom<u8> for Gear {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Gear::new(number).ok_or_else(|| format!("gear {number} is outside 1..={GEAR_COUNT}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range_numbers() {
        assert!(Gear::new(0).is_none());
        assert!(Gear::new(6).is_none());
        assert_eq!(Gear::new(1), Some(Gear::FIRST));
        assert_eq!(Gear::new(5), Some(Gear::TOP));
    }

    #[test]
    fn next_and_previous_stop_at_the_ends() {
        assert_eq!(Gear::FIRST.previous(), None);
        assert_eq!(Gear::TOP.next(), None);
        assert_eq!(Gear::FIRST.next().and_then(Gear::next), Gear::new(3));
        assert_eq!(Gear::TOP.previous(), Gear::new(4));
    }

    #[test]
    fn index_is_zero_based() {
        let indices: Vec<usize> = Gear::all().map(Gear::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn displays_as_number() {
        assert_eq!(u8::from(Gear::TOP), 5);
        assert_eq!(Gear::TOP.to_string(), "5");
    }

    #[test]
    fn gear_serializes_as_number() {
        let json = serde_json::to_string(&Gear::TOP).unwrap();
        assert_eq!(json, "5");

        let parsed: Gear = serde_json::from_str("3").unwrap();
        assert_eq!(parsed.number(), 3);

        assert!(serde_json::from_str::<Gear>("7").is_err());
    }
}
