//! Configuration errors raised while building a transmission.

use thiserror::Error;

/// Errors that can occur when validating a gear band table.
///
/// These are the only failures the crate ever raises: once a
/// [`Transmission`](crate::Transmission) exists, boundary conditions are
/// reported through its [`Status`](crate::Status) instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Wrong argument count: expected {expected} gear limits, got {found}")]
    WrongArgumentCount { expected: usize, found: usize },

    #[error("Inverted band for gear {gear}: lower limit {lower} exceeds upper limit {upper}")]
    InvertedBand { gear: u8, lower: i32, upper: i32 },

    #[error(
        "Overlapping or non-monotonic bands: gear {gear} starts at {lower}, \
         which is not above gear {previous}'s upper limit {previous_upper}"
    )]
    OverlappingBands {
        gear: u8,
        lower: i32,
        previous: u8,
        previous_upper: i32,
    },

    #[error("Malformed configuration: {0}")]
    Malformed(String),
}
