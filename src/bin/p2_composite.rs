//! Composite pattern scenario.
//!
//! Run with: cargo run --bin p2_composite

use design_patterns::structural::composite;

fn main() -> design_patterns::Result<()> {
    design_patterns::run_main(composite::run)
}
