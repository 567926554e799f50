//! Gearbox: a five-speed manual transmission as a finite state machine
//!
//! A [`Transmission`] tracks speed and gear inside a table of per-gear speed
//! bands. Four commands change it: increase or decrease the speed by one,
//! shift up or down by one gear. Each command leaves a [`Status`] behind
//! describing what happened. Commands never fail: a command that would
//! break a band leaves speed and gear alone and reports why through the
//! status. The only fallible step is building the band table.
//!
//! # Core Concepts
//!
//! - **Bands**: Validated per-gear speed ranges ([`GearBands`])
//! - **Status**: The verbatim outcome message of the last command
//! - **History**: Optional, caller-kept record of executed commands
//! - **Checkpoints**: Serializable snapshots for resuming later
//!
//! # Example
//!
//! ```rust
//! use gearbox::{Status, Transmission};
//!
//! let mut transmission =
//!     Transmission::new(&[0, 10, 11, 20, 21, 30, 31, 40, 41, 50])?;
//!
//! for _ in 0..10 {
//!     transmission.increase_speed();
//! }
//! transmission.increase_gear();
//!
//! assert_eq!(transmission.gear().number(), 2);
//! assert_eq!(transmission.status(), Status::Ok);
//!
//! transmission.decrease_speed();
//! assert_eq!(
//!     transmission.status().to_string(),
//!     "Cannot decrease speed, decrease gear first."
//! );
//! # Ok::<(), gearbox::ConfigError>(())
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use crate::core::{
    Command, Gear, ParseCommandError, Reading, ShiftHistory, ShiftRecord, Status, Transmission,
    GEAR_COUNT,
};
pub use config::{ConfigError, GearBands, SpeedBand, TransmissionConfig};
