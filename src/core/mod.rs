//! Core transmission types and logic.
//!
//! This module contains the state machine itself:
//! - Gear numbering and the status taxonomy
//! - Commands as values
//! - The transmission and its shift history
//!
//! Nothing here performs I/O. Mutations are plain field updates.

mod command;
mod gear;
mod history;
mod status;
mod transmission;

pub use command::{Command, ParseCommandError};
pub use gear::{Gear, GEAR_COUNT};
pub use history::{Reading, ShiftHistory, ShiftRecord};
pub use status::Status;
pub use transmission::Transmission;
