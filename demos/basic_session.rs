//! Basic Session
//!
//! This example drives the calculator the way a keypad UI would.
//!
//! Key concepts:
//! - One `press` per button tap
//! - Reading the readout and the equation trace after every press
//! - Refused presses leave the state untouched
//!
//! Run with: RUST_LOG=abacus=debug cargo run --example basic_session

use abacus::{keys, Calculator, Outcome};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Basic Session Example ===\n");

    let mut calc = Calculator::new();

    for symbol in keys![1 2 * 3 = + 4 . 5 . =] {
        let outcome = calc.press(symbol);
        let note = match outcome {
            Outcome::Applied(_) => String::new(),
            Outcome::Rejected { reason, .. } => format!("  (refused: {reason})"),
            Outcome::Failed { error, .. } => format!("  (error: {error})"),
        };
        println!(
            "{:>4} | {:>20} | {}{}",
            symbol.label(),
            calc.equation(),
            calc.display(),
            note
        );
    }

    println!(
        "\n{} taps, {} refused",
        calc.history().len(),
        calc.history().rejected_count()
    );

    println!("\n=== Example Complete ===");
}
