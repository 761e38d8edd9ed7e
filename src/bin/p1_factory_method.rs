//! Factory Method pattern scenario.
//!
//! Run with: cargo run --bin p1_factory_method

use design_patterns::creational::factory_method;

fn main() -> design_patterns::Result<()> {
    design_patterns::run_main(factory_method::run)
}
