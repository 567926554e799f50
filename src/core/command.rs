//! Commands accepted by a transmission.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four mutating operations, as a value.
///
/// Useful for scripting a drive or replaying a recorded one.
///
/// ```rust
/// use gearbox::Command;
///
/// let command: Command = "increase-gear".parse().unwrap();
/// assert_eq!(command, Command::IncreaseGear);
/// assert_eq!(command.to_string(), "increase-gear");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    IncreaseSpeed,
    DecreaseSpeed,
    IncreaseGear,
    DecreaseGear,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::IncreaseSpeed,
        Command::DecreaseSpeed,
        Command::IncreaseGear,
        Command::DecreaseGear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IncreaseSpeed => "increase-speed",
            Self::DecreaseSpeed => "decrease-speed",
            Self::IncreaseGear => "increase-gear",
            Self::DecreaseGear => "decrease-gear",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string names no known command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown transmission command: {0:?}")]
pub struct ParseCommandError(pub String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == s.trim())
            .ok_or_else(|| ParseCommandError(s.to_string()))
    }
}
