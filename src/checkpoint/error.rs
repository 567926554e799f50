//! Checkpoint error types.

use thiserror::Error;

/// Why a checkpoint could not be saved, loaded or restored
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The snapshot could not be written as JSON or bincode
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// The input is not a snapshot, or its band table is invalid
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Written by a gearbox with a different checkpoint format
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Saved speed cannot be held in the saved gear on the saved bands
    #[error("Speed {speed} is unreachable in gear {gear}; bands allow {floor}..={ceiling}")]
    UnreachableSpeed {
        speed: i32,
        gear: u8,
        floor: i32,
        ceiling: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_speed_names_the_gear() {
        let err = CheckpointError::UnreachableSpeed {
            speed: 0,
            gear: 5,
            floor: 40,
            ceiling: 50,
        };
        assert_eq!(
            err.to_string(),
            "Speed 0 is unreachable in gear 5; bands allow 40..=50"
        );
    }
}
