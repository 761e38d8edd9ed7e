//! State pattern scenario.
//!
//! Run with: cargo run --bin p3_state

use design_patterns::behavioral::state;

fn main() -> design_patterns::Result<()> {
    design_patterns::run_main(state::run)
}
