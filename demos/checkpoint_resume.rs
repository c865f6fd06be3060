//! Checkpoint and Resume
//!
//! This example snapshots a half-typed calculation and resumes it in a
//! fresh calculator, as a host would after being suspended.
//!
//! Key concepts:
//! - Checkpoints capture configuration and engine state, not tap history
//! - JSON for readability, bincode for compactness
//! - Restored states are validated before use
//!
//! Run with: cargo run --example checkpoint_resume

use abacus::checkpoint::Checkpoint;
use abacus::{keys, CalculatorBuilder};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Checkpoint and Resume Example ===\n");

    let mut calc = CalculatorBuilder::new()
        .max_input_len(12)
        .build()
        .expect("valid configuration");
    calc.press_all(keys![2 5 0 / 8]);
    println!("Before suspend: {} (display {})", calc.equation(), calc.display());

    let checkpoint = calc.checkpoint();
    let json = checkpoint.to_json().expect("checkpoint serializes");
    let bytes = checkpoint.to_bytes().expect("checkpoint encodes");
    println!("Checkpoint {}: {} bytes JSON, {} bytes binary", checkpoint.id, json.len(), bytes.len());

    let mut resumed = Checkpoint::from_bytes(&bytes)
        .and_then(Checkpoint::resume)
        .expect("checkpoint resumes");
    resumed.press_all(keys![=]);
    println!("After resume:   {} (display {})", resumed.equation(), resumed.display());

    let mut tampered = checkpoint;
    tampered.state = abacus::EngineState::new();
    tampered.version = 99;
    match tampered.resume() {
        Ok(_) => println!("Tampered checkpoint unexpectedly resumed"),
        Err(e) => println!("Tampered checkpoint refused: {e}"),
    }

    println!("\n=== Example Complete ===");
}
