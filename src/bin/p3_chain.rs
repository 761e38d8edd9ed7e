//! Chain of Responsibility pattern scenario.
//!
//! Run with: cargo run --bin p3_chain

use design_patterns::behavioral::chain;

fn main() -> design_patterns::Result<()> {
    design_patterns::run_main(chain::run)
}
