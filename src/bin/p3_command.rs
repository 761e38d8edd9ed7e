//! Command pattern scenario.
//!
//! Run with: cargo run --bin p3_command

use design_patterns::behavioral::command;

fn main() -> design_patterns::Result<()> {
    design_patterns::run_main(command::run)
}
