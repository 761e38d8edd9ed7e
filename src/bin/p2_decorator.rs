//! Decorator pattern scenario.
//!
//! Run with: cargo run --bin p2_decorator

use design_patterns::structural::decorator;

fn main() -> design_patterns::Result<()> {
    design_patterns::run_main(decorator::run)
}
