//! Adapter pattern scenario.
//!
//! Run with: cargo run --bin p2_adapter

use design_patterns::structural::adapter;

fn main() -> design_patterns::Result<()> {
    design_patterns::run_main(adapter::run)
}
