//! Keypad Script
//!
//! This example reads keypad labels from the command line and presses them.
//!
//! Key concepts:
//! - Every unknown label is reported at once, not just the first
//! - Nothing is pressed unless the whole script parses
//! - The decimal lock can be switched off through configuration
//!
//! Run with: cargo run --example keypad_script -- "3 . 5 + 2 ="

use abacus::keypad::read_keys;
use abacus::CalculatorBuilder;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Keypad Script Example ===\n");

    let script = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let script = if script.trim().is_empty() {
        "3 . 5 + 2 =".to_string()
    } else {
        script
    };

    let symbols = match read_keys(&script) {
        Ok(symbols) => symbols,
        Err(errors) => {
            for error in errors {
                println!("  {error}");
            }
            return;
        }
    };

    for decimal_lock in [true, false] {
        let mut calc = CalculatorBuilder::new()
            .decimal_lock(decimal_lock)
            .build()
            .expect("valid configuration");
        let accepted = calc.press_all(symbols.iter().copied());
        println!(
            "decimal lock {:<5}: {:>20} | {} ({} of {} keys accepted)",
            decimal_lock,
            calc.equation(),
            calc.display(),
            accepted,
            symbols.len()
        );
    }

    println!("\n=== Example Complete ===");
}
