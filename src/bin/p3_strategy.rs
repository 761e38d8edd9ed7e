//! Strategy pattern scenario.
//!
//! Run with: cargo run --bin p3_strategy

use design_patterns::behavioral::strategy;

fn main() -> design_patterns::Result<()> {
    design_patterns::run_main(strategy::run)
}
