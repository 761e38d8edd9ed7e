//! Bridge pattern scenario.
//!
//! Run with: cargo run --bin p2_bridge

use design_patterns::structural::bridge;

fn main() -> design_patterns::Result<()> {
    design_patterns::run_main(bridge::run)
}
