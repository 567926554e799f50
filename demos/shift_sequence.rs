//! Shift Sequence
//!
//! This example drives a transmission through a scripted sequence of
//! commands and prints the status after each one.
//!
//! Key concepts:
//! - Commands never fail; the status says whether they were applied
//! - Shift history kept by the caller
//! - Checkpointing a transmission mid-drive
//!
//! Run with: cargo run --example shift_sequence

use gearbox::builder::TransmissionBuilder;
use gearbox::checkpoint::Checkpoint;
use gearbox::{Command, ShiftHistory};

const SCRIPT: &str = "
    decrease-speed increase-gear
    increase-speed increase-speed increase-speed increase-speed increase-gear
    increase-speed increase-speed increase-speed increase-speed increase-speed
    decrease-gear increase-gear increase-gear
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Shift Sequence Example ===\n");

    let mut transmission = TransmissionBuilder::new()
        .gear(0, 4)
        .gear(5, 9)
        .gear(10, 14)
        .gear(15, 19)
        .gear(20, 24)
        .build()?;

    let mut history = ShiftHistory::new();
    for word in SCRIPT.split_whitespace() {
        let command: Command = word.parse()?;
        let record = transmission.execute(command);
        println!(
            "{:<15} gear {} speed {:>3}  {}",
            record.command, record.to.gear, record.to.speed, record.status
        );
        history = history.record(record);
    }

    println!(
        "\n{} commands, {} rejected",
        history.records().len(),
        history.rejections().count()
    );

    let json = transmission.checkpoint(&history).to_json()?;
    let (resumed, _) = Checkpoint::from_json(&json)?.restore()?;
    println!(
        "Resumed from checkpoint in gear {} at speed {}",
        resumed.gear(),
        resumed.speed()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
