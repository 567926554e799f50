//! Checkpoint and resume for transmissions.
//!
//! A transmission cannot be reset, only replaced. Checkpoints let a caller
//! persist one (with the shift history it has kept) and rebuild an
//! equivalent instance later.

use crate::config::GearBands;
use crate::core::{Gear, ShiftHistory, Status, Transmission};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a transmission.
///
/// # Example
///
/// ```rust
/// use gearbox::{ShiftHistory, Transmission};
/// use gearbox::checkpoint::Checkpoint;
///
/// let mut transmission = Transmission::new(&[0, 10, 11, 20, 21, 30, 31, 40, 41, 50]).unwrap();
/// transmission.increase_speed();
///
/// let json = transmission.checkpoint(&ShiftHistory::new()).to_json().unwrap();
/// let (restored, _history) = Checkpoint::from_json(&json).unwrap().restore().unwrap();
/// assert_eq!(restored, transmission);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Band table, validated again on load
    pub bands: GearBands,

    pub speed: i32,

    pub gear: Gear,

    /// Status left by the last command before the checkpoint
    pub status: Status,

    /// History kept by the caller, possibly empty
    #[serde(default)]
    pub history: ShiftHistory,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Rebuild the transmission and history this checkpoint was taken from.
    pub fn restore(self) -> Result<(Transmission, ShiftHistory), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let reachable = self.bands.reachable(self.gear);
        if !reachable.contains(&self.speed) {
            return Err(CheckpointError::UnreachableSpeed {
                speed: self.speed,
                gear: self.gear.number(),
                floor: *reachable.start(),
                ceiling: *reachable.end(),
            });
        }

        log::debug!(
            "restoring checkpoint {} at speed {} in gear {}",
            self.id,
            self.speed,
            self.gear
        );

        let transmission =
            Transmission::from_parts(self.bands, self.speed, self.gear, self.status);
        Ok((transmission, self.history))
    }
}

impl Transmission {
    /// Snapshot this transmission together with a caller-kept history.
    pub fn checkpoint(&self, history: &ShiftHistory) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            bands: self.bands().clone(),
            speed: self.speed(),
            gear: self.gear(),
            status: self.status(),
            history: history.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Command;

    fn driven() -> (Transmission, ShiftHistory) {
        let mut transmission =
            Transmission::new(&[0, 10, 11, 20, 21, 30, 31, 40, 41, 50]).unwrap();
        let mut history = ShiftHistory::new();
        for _ in 0..10 {
            history = history.record(transmission.execute(Command::IncreaseSpeed));
        }
        history = history.record(transmission.execute(Command::IncreaseGear));
        history = history.record(transmission.execute(Command::DecreaseSpeed));
        (transmission, history)
    }

    #[test]
    fn json_checkpoint_restores_state_and_history() {
        let (transmission, history) = driven();
        let checkpoint = transmission.checkpoint(&history);

        let json = checkpoint.to_json().unwrap();
        let (restored, restored_history) =
            Checkpoint::from_json(&json).unwrap().restore().unwrap();

        assert_eq!(restored, transmission);
        assert_eq!(restored.status(), Status::DecreaseGearFirst);
        assert_eq!(restored_history, history);
    }

    #[test]
    fn binary_checkpoint_restores_state() {
        let (transmission, history) = driven();
        let bytes = transmission.checkpoint(&history).to_bytes().unwrap();

        let (restored, restored_history) =
            Checkpoint::from_bytes(&bytes).unwrap().restore().unwrap();

        assert_eq!(restored, transmission);
        assert_eq!(restored_history.records().len(), 12);
    }

    #[test]
    fn restored_transmission_keeps_driving() {
        let (transmission, history) = driven();
        let (mut restored, _) = transmission.checkpoint(&history).restore().unwrap();

        restored.increase_speed();
        assert_eq!(restored.speed(), 11);
        assert_eq!(restored.status(), Status::Ok);
    }

    #[test]
    fn checkpoint_ids_are_unique() {
        let (transmission, history) = driven();
        let first = transmission.checkpoint(&history);
        let second = transmission.checkpoint(&history);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let (transmission, history) = driven();
        let mut checkpoint = transmission.checkpoint(&history);
        checkpoint.version = CHECKPOINT_VERSION + 1;

        assert!(matches!(
            checkpoint.restore(),
            Err(CheckpointError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn unreachable_speed_is_rejected() {
        let (transmission, history) = driven();
        let mut checkpoint = transmission.checkpoint(&history);
        checkpoint.speed = 51;

        assert!(matches!(
            checkpoint.restore(),
            Err(CheckpointError::UnreachableSpeed {
                speed: 51,
                gear: 2,
                floor: 10,
                ceiling: 21
            })
        ));
    }

    #[test]
    fn speed_outside_the_saved_gear_is_rejected() {
        let (transmission, history) = driven();
        let mut checkpoint = transmission.checkpoint(&history);
        checkpoint.gear = Gear::TOP;
        checkpoint.speed = 0;
        checkpoint.status = Status::MaxGearReached;

        assert!(matches!(
            checkpoint.restore(),
            Err(CheckpointError::UnreachableSpeed {
                speed: 0,
                gear: 5,
                floor: 40,
                ceiling: 50
            })
        ));
    }

    #[test]
    fn shift_points_of_the_saved_gear_are_accepted() {
        let (transmission, history) = driven();
        for speed in [10, 21] {
            let mut checkpoint = transmission.checkpoint(&history);
            checkpoint.speed = speed;
            let (restored, _) = checkpoint.restore().unwrap();
            assert_eq!(restored.speed(), speed);
        }
    }

    #[test]
    fn invalid_bands_fail_to_load() {
        let (transmission, history) = driven();
        let json = transmission.checkpoint(&history).to_json().unwrap();
        let tampered = json.replacen("\"lower\": 11", "\"lower\": 9", 1);

        assert!(matches!(
            Checkpoint::from_json(&tampered),
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn missing_history_defaults_to_empty() {
        let (transmission, _) = driven();
        let mut value =
            serde_json::to_value(transmission.checkpoint(&ShiftHistory::new())).unwrap();
        value.as_object_mut().unwrap().remove("history");

        let checkpoint = Checkpoint::from_json(&value.to_string()).unwrap();
        assert!(checkpoint.history.is_empty());
    }
}
